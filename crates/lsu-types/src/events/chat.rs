//! Chat occurrences.

use super::impl_event;

/// A chat line arrived from the server.
///
/// Carries the original text and a current text that listeners may
/// overwrite; later listeners and the producer see only the latest
/// overwrite. Cancellable: the chat probe drops the line when vetoed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessageReceived {
    message: String,
    modified_message: String,
    cancelled: bool,
}

impl ChatMessageReceived {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            modified_message: message.clone(),
            message,
            cancelled: false,
        }
    }

    /// Text exactly as received.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Text that will be displayed (may have been rewritten).
    pub fn modified_message(&self) -> &str {
        &self.modified_message
    }

    /// Whether any listener rewrote the text.
    pub fn is_modified(&self) -> bool {
        self.modified_message != self.message
    }

    /// Replaces the text that will be displayed. An empty string is kept
    /// as is; use [`Self::restore_original`] to drop a rewrite.
    pub fn set_modified_message(&mut self, message: impl Into<String>) {
        self.modified_message = message.into();
    }

    /// Discards any rewrite.
    pub fn restore_original(&mut self) {
        self.modified_message.clone_from(&self.message);
    }
}

impl_event!(ChatMessageReceived, cancellable);

/// The local player sent a chat line.
///
/// Cancellable: the chat probe does not send the line when vetoed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessageSent {
    message: String,
    cancelled: bool,
}

impl ChatMessageSent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cancelled: false,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl_event!(ChatMessageSent, cancellable);
