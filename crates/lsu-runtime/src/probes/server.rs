use std::sync::{Arc, LazyLock};

use lsu_bus::{EventBus, ServerChange, ShardSwap};
use parking_lot::Mutex;
use regex::Regex;

/// What the server's tab list footer says about where the player is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabFooter {
    pub online: u32,
    pub shard: String,
}

static FOOTER_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Online:(?-u:\s)*([0-9]+)(?-u:\s)*\|(?-u:\s)*([a-zA-Z0-9-]+)")
        .expect("tab footer pattern is valid")
});

/// Finds the first `Online: <count> | <shard>` segment in a footer.
///
/// Whitespace (line breaks included) around the count and the bar is
/// optional. Shard names are ASCII letters, digits and `-`. Anything after
/// the shard name is ignored, as is a count too large for `u32`.
pub fn parse_tab_footer(footer: &str) -> Option<TabFooter> {
    let captures = FOOTER_SEGMENT.captures(footer)?;
    Some(TabFooter {
        online: captures.get(1)?.as_str().parse().ok()?,
        shard: captures.get(2)?.as_str().to_string(),
    })
}

#[derive(Default)]
struct ShardState {
    shard: Option<String>,
    online: u32,
}

/// Connection and tab list hooks.
pub struct ServerProbe {
    bus: Arc<EventBus>,
    state: Mutex<ShardState>,
}

impl ServerProbe {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self {
            bus,
            state: Mutex::new(ShardState::default()),
        }
    }

    pub fn connected(&self, server_address: &str) {
        self.bus.post(&mut ServerChange::connected(server_address));
    }

    /// Forgets the tracked shard, then announces the disconnect.
    pub fn disconnected(&self, server_address: &str) {
        *self.state.lock() = ShardState::default();
        self.bus.post(&mut ServerChange::disconnected(server_address));
    }

    /// The tab footer changed. Posts `ShardSwap` when the parsed shard
    /// differs from the one last seen. A missing footer clears tracking.
    pub fn tab_footer(&self, footer: Option<&str>) {
        let Some(footer) = footer else {
            *self.state.lock() = ShardState::default();
            return;
        };
        let Some(parsed) = parse_tab_footer(footer) else {
            return;
        };

        let changed = {
            let mut state = self.state.lock();
            state.online = parsed.online;
            if state.shard.as_deref() == Some(parsed.shard.as_str()) {
                false
            } else {
                state.shard = Some(parsed.shard.clone());
                true
            }
        };

        // Posted outside the lock so listeners may query this probe.
        if changed {
            self.bus.post(&mut ShardSwap::new(parsed.shard));
        }
    }

    #[must_use]
    pub fn current_shard(&self) -> Option<String> {
        self.state.lock().shard.clone()
    }

    #[must_use]
    pub fn online_players(&self) -> u32 {
        self.state.lock().online
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_footer_reads_count_and_shard() {
        let parsed = parse_tab_footer("Online: 412 | lifesteal-spawn-79dll").unwrap();
        assert_eq!(parsed.online, 412);
        assert_eq!(parsed.shard, "lifesteal-spawn-79dll");
    }

    #[test]
    fn test_parse_tab_footer_tolerates_spacing_and_surrounding_text() {
        let parsed = parse_tab_footer("play.lifesteal.net\nOnline:7|hub-2 (EU)").unwrap();
        assert_eq!(parsed.online, 7);
        assert_eq!(parsed.shard, "hub-2");
    }

    #[test]
    fn test_parse_tab_footer_skips_broken_segments() {
        let parsed = parse_tab_footer("Online: many | x  Online: 3 | lobby").unwrap();
        assert_eq!(parsed.online, 3);
        assert_eq!(parsed.shard, "lobby");
    }

    #[test]
    fn test_parse_tab_footer_spans_line_breaks() {
        let parsed = parse_tab_footer("Online:\n12\n|\nhub-1\nstore.lifesteal.net").unwrap();
        assert_eq!(parsed.online, 12);
        assert_eq!(parsed.shard, "hub-1");
    }

    #[test]
    fn test_parse_tab_footer_ignores_overflowing_count() {
        assert!(parse_tab_footer("Online: 99999999999 | hub").is_none());
    }

    #[test]
    fn test_parse_tab_footer_rejects_unrelated_text() {
        assert!(parse_tab_footer("Welcome!").is_none());
        assert!(parse_tab_footer("Online: 5 |").is_none());
        assert!(parse_tab_footer("Online: | hub").is_none());
    }
}
