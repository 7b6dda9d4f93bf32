//! Chorebot Core — rotation state machine and shared domain seams.
//!
//! This crate defines the participant list, the persisted rotation state,
//! the storage and notification traits, and the `Rotation` service that
//! advances the schedule. It contains no infrastructure code.

pub mod error;
pub mod notifier;
pub mod participants;
pub mod rotation;
pub mod state;
pub mod store;
