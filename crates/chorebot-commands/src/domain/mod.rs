//! Domain layer: commands and reply formatting.

pub mod commands;
pub mod replies;
