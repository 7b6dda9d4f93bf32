//! Shared test doubles for the chore rotation bot.

mod notifier;
mod store;

pub use notifier::{FailingNotifier, RecordingNotifier, SentMessage};
pub use store::{FailingStateStore, InMemoryStateStore};
