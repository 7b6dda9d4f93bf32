//! Chat commands understood by the bot.

/// A rotation command recognised in a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatCommand {
    /// `#lixo` / `#quem`: ask whose turn it is.
    WhoseTurn,
    /// `#levei` / `#check`: report that the current person did the chore.
    MarkDone,
}

impl ChatCommand {
    /// Parses raw message text. Case and surrounding whitespace are ignored.
    ///
    /// Returns `None` for anything that is not a command; that is not an
    /// error, the message is simply ignored.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match normalize(text).as_str() {
            "#lixo" | "#quem" => Some(Self::WhoseTurn),
            "#levei" | "#check" => Some(Self::MarkDone),
            _ => None,
        }
    }

    /// The command type name (for logging).
    #[must_use]
    pub fn command_type(self) -> &'static str {
        match self {
            Self::WhoseTurn => "rotation.whose_turn",
            Self::MarkDone => "rotation.mark_done",
        }
    }
}

/// Lower-cases and trims message text.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
