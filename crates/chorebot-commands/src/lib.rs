//! Chore rotation bot — chat command dispatch.
//!
//! Responsible for recognising rotation commands in chat text, running
//! them against the `Rotation` service, and formatting the reply.

pub mod application;
pub mod domain;
