//! # Private Message Formatter
//!
//! Rewrites server private message lines
//!
//! ```text
//! (MSG From Steve) hey
//! ```
//!
//! into the configured layout, prints that through the [`ChatSink`] and
//! cancels the original line. Runs at `High` priority so later chat
//! listeners see the line already cancelled.

use std::sync::{Arc, LazyLock};

use lsu_bus::{ChatListener, ChatMessageReceived, HandlerResult, Listener, Priority};
use lsu_telemetry::log_event;
use regex::Regex;

use crate::config::LiveConfig;
use crate::domain::markup::{escape_tags, fill_placeholders};
use crate::ports::ChatSink;

const FEATURE: &str = "private_messages";

/// Which way a private message went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    From,
    To,
}

/// A parsed `(MSG From|To <name>) <text>` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateMessage<'a> {
    pub direction: Direction,
    /// Direction word as written, first letter upper-cased.
    pub direction_label: String,
    pub peer: &'a str,
    pub body: &'a str,
}

/// `(MSG From|To <name>) <text>`, keywords in any case. Whitespace is the
/// ASCII set, so a newline may separate the parts; the text itself stays on
/// one line apart from a single trailing line break.
static PRIVATE_MESSAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\(MSG(?-u:\s)+(From|To)(?-u:\s)+([^)]+)\)(?-u:\s)+([^\n\r\x{85}\x{2028}\x{2029}]*)(?:\r\n|[\n\r\x{85}\x{2028}\x{2029}])?$",
    )
    .expect("private message pattern is valid")
});

/// Parse a private message line.
pub fn parse_private_message(line: &str) -> Option<PrivateMessage<'_>> {
    let captures = PRIVATE_MESSAGE.captures(line)?;
    let word = captures.get(1)?.as_str();
    let direction = if word.eq_ignore_ascii_case("from") {
        Direction::From
    } else {
        Direction::To
    };

    Some(PrivateMessage {
        direction,
        direction_label: capitalize_first(word),
        peer: captures.get(2)?.as_str(),
        body: captures.get(3)?.as_str(),
    })
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Formats private messages and suppresses the raw line.
pub struct PrivateMessageFormatter {
    config: LiveConfig,
    sink: Arc<dyn ChatSink>,
}

impl PrivateMessageFormatter {
    pub fn new(config: LiveConfig, sink: Arc<dyn ChatSink>) -> Self {
        Self { config, sink }
    }

    /// Render a parsed message with the configured layout.
    pub fn render(&self, message: &PrivateMessage<'_>) -> String {
        let sender = escape_tags(message.peer);
        let body = escape_tags(message.body);
        let config = self.config.read();
        fill_placeholders(
            config.effective_pm_format(),
            &[
                ("direction", message.direction_label.as_str()),
                ("sender", sender.as_str()),
                ("message", body.as_str()),
            ],
        )
    }
}

impl ChatListener for PrivateMessageFormatter {
    fn on_chat_message_received(&self, event: &mut ChatMessageReceived) -> HandlerResult {
        let Some(message) = parse_private_message(event.message()) else {
            return Ok(());
        };

        let rendered = self.render(&message);
        self.sink.show(&rendered);
        log_event!(
            debug,
            FEATURE,
            "Formatted private message",
            direction = ?message.direction,
            peer = message.peer
        );

        // `message` borrows the event text, so the veto comes last.
        event.cancel();
        Ok(())
    }
}

impl Listener for PrivateMessageFormatter {
    fn name(&self) -> &str {
        "PrivateMessageFormatter"
    }

    fn is_enabled(&self) -> bool {
        self.config.read().enable_pm_format
    }

    fn priority(&self) -> Priority {
        Priority::High
    }

    fn as_chat(&self) -> Option<&dyn ChatListener> {
        Some(self)
    }
}
