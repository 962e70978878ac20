//! # Chat Tag Remover
//!
//! Drops the second bracketed tag in front of a sender name:
//!
//! ```text
//! [LEGEND+] [No-Life] Player: msg   →   [LEGEND+] Player: msg
//! ```
//!
//! Markup tags (`<...>`) are skipped when locating brackets, so colored
//! ranks work the same as plain ones. A line only qualifies when a `:`
//! follows the second tag within [`MAX_NAME_GAP`] visible characters, which
//! keeps bracketed text inside message bodies intact.

use lsu_bus::{ChatListener, ChatMessageReceived, HandlerResult, Listener, Priority};
use lsu_telemetry::log_event;

use crate::config::LiveConfig;
use crate::domain::markup::collapse_whitespace;

const FEATURE: &str = "chat_tags";

/// Longest visible gap between the removed tag and the sender's colon.
pub const MAX_NAME_GAP: usize = 50;

#[derive(Debug, Clone, Copy)]
struct BracketSpan {
    /// Visible index just past `]`.
    visible_end: usize,
    /// Byte range of `[...]` in the raw line.
    raw_start: usize,
    raw_end: usize,
}

/// Remove the second bracketed tag. `None` when the line does not qualify.
pub fn remove_chat_tag(line: &str) -> Option<String> {
    let mut visible: Vec<char> = Vec::with_capacity(line.len());
    let mut spans: Vec<BracketSpan> = Vec::new();
    let mut in_tag = false;
    let mut open: Option<usize> = None;

    for (i, c) in line.char_indices() {
        if in_tag {
            if c == '>' {
                in_tag = false;
            }
            continue;
        }
        if c == '<' {
            in_tag = true;
            continue;
        }

        visible.push(c);
        match c {
            '[' => open = Some(i),
            ']' => {
                if let Some(raw_start) = open.take() {
                    spans.push(BracketSpan {
                        visible_end: visible.len(),
                        raw_start,
                        raw_end: i + c.len_utf8(),
                    });
                }
            }
            _ => {}
        }
    }

    let second = *spans.get(1)?;
    let gap = visible[second.visible_end..]
        .iter()
        .position(|c| *c == ':')?;
    if gap > MAX_NAME_GAP {
        return None;
    }

    let mut result = String::with_capacity(line.len());
    result.push_str(&line[..second.raw_start]);
    result.push_str(&line[second.raw_end..]);
    Some(collapse_whitespace(&result))
}

/// Strips rank-adjacent chat tags from received lines.
pub struct ChatTagRemover {
    config: LiveConfig,
}

impl ChatTagRemover {
    pub fn new(config: LiveConfig) -> Self {
        Self { config }
    }
}

impl ChatListener for ChatTagRemover {
    fn on_chat_message_received(&self, event: &mut ChatMessageReceived) -> HandlerResult {
        let current = event.modified_message();
        let Some(filtered) = remove_chat_tag(current) else {
            return Ok(());
        };
        if filtered != current {
            event.set_modified_message(filtered);
            log_event!(debug, FEATURE, "Removed chat tag");
        }
        Ok(())
    }
}

impl Listener for ChatTagRemover {
    fn name(&self) -> &str {
        "ChatTagRemover"
    }

    fn is_enabled(&self) -> bool {
        self.config.read().disable_chat_tags
    }

    fn priority(&self) -> Priority {
        Priority::Normal
    }

    fn as_chat(&self) -> Option<&dyn ChatListener> {
        Some(self)
    }
}
