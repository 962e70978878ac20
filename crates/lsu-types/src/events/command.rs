//! Command occurrence.

use super::impl_event;

/// The local player issued a command. The leading `/` is not included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSent {
    command: String,
}

impl CommandSent {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl_event!(CommandSent);
