//! JSON file-backed storage for the rotation state.

pub mod document;
pub mod file_state_store;
