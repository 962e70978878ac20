//! # Rank Plus Color Normalizer
//!
//! Some ranks render their trailing `+` in a different color from the rank
//! name. This folds the plus back into the rank's own color:
//!
//! ```text
//! <bold><#FF7200>HEROIC</#FF7200></bold><green>+</green>
//!   →   <bold><#FF7200>HEROIC+</#FF7200></bold>
//! ```
//!
//! Whitespace after closing brackets and runs of spaces are tidied on the
//! same pass. Works on the current displayed value, so it composes with
//! [`ChatTagRemover`](super::ChatTagRemover) at the same priority.

use std::sync::LazyLock;

use lsu_bus::{ChatListener, ChatMessageReceived, HandlerResult, Listener, Priority};
use lsu_telemetry::log_event;
use regex::Regex;

use crate::config::LiveConfig;
use crate::domain::markup::collapse_whitespace;

const FEATURE: &str = "rank_plus";

/// A bold colored rank followed by a separately colored `+`.
static COLORED_PLUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(<bold>(?-u:\s)*<([#A-Za-z0-9_]+)>)([^<>]+)(</[A-Za-z0-9_#]+>(?-u:\s)*</bold>)((?-u:\s)*)<[^>]*>\+(?:</[^>]*>)?",
    )
    .expect("colored plus pattern is valid")
});

static DARK_GRAY_BRACKET_GAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(<dark_gray>\]</dark_gray>)(?-u:\s)+").expect("bracket gap pattern is valid")
});

static BRACKET_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\](?-u:\s)+").expect("bracket gap pattern is valid"));

/// Merge colored pluses into their rank color and tidy spacing.
pub fn normalize_plus_color(line: &str) -> String {
    if line.is_empty() {
        return String::new();
    }

    let merged = COLORED_PLUS.replace_all(line, "${1}${3}+${4}");
    let merged = DARK_GRAY_BRACKET_GAP.replace_all(&merged, "${1} ");
    let merged = BRACKET_GAP.replace_all(&merged, "] ");
    collapse_whitespace(&merged)
}

/// Recolors rank pluses in received lines.
pub struct RankPlusColorNormalizer {
    config: LiveConfig,
}

impl RankPlusColorNormalizer {
    pub fn new(config: LiveConfig) -> Self {
        Self { config }
    }
}

impl ChatListener for RankPlusColorNormalizer {
    fn on_chat_message_received(&self, event: &mut ChatMessageReceived) -> HandlerResult {
        let normalized = normalize_plus_color(event.modified_message());
        if normalized != event.modified_message() {
            event.set_modified_message(normalized);
            log_event!(debug, FEATURE, "Normalized plus color");
        }
        Ok(())
    }
}

impl Listener for RankPlusColorNormalizer {
    fn name(&self) -> &str {
        "RankPlusColorNormalizer"
    }

    fn is_enabled(&self) -> bool {
        self.config.read().remove_unique_plus_color
    }

    fn priority(&self) -> Priority {
        Priority::Normal
    }

    fn as_chat(&self) -> Option<&dyn ChatListener> {
        Some(self)
    }
}
