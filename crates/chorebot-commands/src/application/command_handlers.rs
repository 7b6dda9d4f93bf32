//! Command handlers for chat commands.
//!
//! Handlers are stateless: each call runs one rotation operation and
//! returns the reply text to send back to the chat.

use chorebot_core::error::DomainError;
use chorebot_core::rotation::Rotation;
use tracing::{debug, info};

use crate::domain::commands::ChatCommand;
use crate::domain::replies;

/// Runs `command` against the rotation and formats the reply.
///
/// # Errors
///
/// Returns `DomainError::Persistence` if a `MarkDone` advance cannot be saved.
pub async fn handle_command(
    command: ChatCommand,
    rotation: &Rotation,
) -> Result<String, DomainError> {
    info!(command_type = command.command_type(), "handling chat command");

    match command {
        ChatCommand::WhoseTurn => {
            let current = rotation.peek_current().await;
            Ok(replies::whose_turn(&current))
        }
        ChatCommand::MarkDone => {
            let handoff = rotation.advance().await?;
            Ok(replies::chore_done(
                &handoff.completed_by,
                &handoff.now_current,
            ))
        }
    }
}

/// Parses message text and, if it is a command, handles it.
///
/// Returns `Ok(None)` when the text is not a command.
///
/// # Errors
///
/// Returns `DomainError` if the command handler fails.
pub async fn handle_text(text: &str, rotation: &Rotation) -> Result<Option<String>, DomainError> {
    let Some(command) = ChatCommand::parse(text) else {
        debug!("message is not a command, ignoring");
        return Ok(None);
    };

    handle_command(command, rotation).await.map(Some)
}
