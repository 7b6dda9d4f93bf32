//! Application layer: command handlers.

pub mod command_handlers;
