//! Server lifecycle: tab footer parsing, shard swaps and swap attribution.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use lsu_bus::{HandlerResult, Listener, ServerChange, ServerListener, ShardSwap};
    use lsu_features::FeatureConfig;
    use parking_lot::Mutex;

    use crate::integration::Harness;

    #[derive(Default)]
    struct SwapLog {
        shards: Mutex<Vec<String>>,
        disconnects: AtomicUsize,
    }

    impl ServerListener for SwapLog {
        fn on_server_change(&self, event: &mut ServerChange) -> HandlerResult {
            if event.is_disconnected() {
                self.disconnects.fetch_add(1, Ordering::SeqCst);
            }
            Ok(())
        }

        fn on_shard_swap(&self, event: &mut ShardSwap) -> HandlerResult {
            self.shards.lock().push(event.shard_name().to_string());
            Ok(())
        }
    }

    impl Listener for SwapLog {
        fn is_enabled(&self) -> bool {
            true
        }

        fn as_server(&self) -> Option<&dyn ServerListener> {
            Some(self)
        }
    }

    fn harness_with_log() -> (Harness, Arc<SwapLog>) {
        let harness = Harness::new(FeatureConfig::default());
        let log = Arc::new(SwapLog::default());
        harness.runtime.bus().register(&log);
        (harness, log)
    }

    #[test]
    fn test_shard_swap_posted_only_on_change() {
        let (harness, log) = harness_with_log();
        let server = harness.runtime.server();

        server.tab_footer(Some("Online: 300 | lifesteal-spawn-1"));
        server.tab_footer(Some("Online: 301 | lifesteal-spawn-1"));
        server.tab_footer(Some("Online: 290 | lifesteal-spawn-2"));

        assert_eq!(
            *log.shards.lock(),
            vec!["lifesteal-spawn-1".to_string(), "lifesteal-spawn-2".to_string()]
        );
        assert_eq!(server.current_shard().as_deref(), Some("lifesteal-spawn-2"));
        assert_eq!(server.online_players(), 290);
    }

    #[test]
    fn test_unparseable_footer_keeps_current_shard() {
        let (harness, log) = harness_with_log();
        let server = harness.runtime.server();

        server.tab_footer(Some("Online: 10 | hub-1"));
        server.tab_footer(Some("Loading..."));

        assert_eq!(log.shards.lock().len(), 1);
        assert_eq!(server.current_shard().as_deref(), Some("hub-1"));
    }

    #[test]
    fn test_disconnect_clears_shard_and_reposts_on_return() {
        let (harness, log) = harness_with_log();
        let server = harness.runtime.server();

        server.connected("lifesteal.net");
        server.tab_footer(Some("Online: 10 | hub-1"));
        server.disconnected("lifesteal.net");
        assert_eq!(server.current_shard(), None);
        assert_eq!(log.disconnects.load(Ordering::SeqCst), 1);

        server.connected("lifesteal.net");
        server.tab_footer(Some("Online: 10 | hub-1"));
        assert_eq!(log.shards.lock().len(), 2);
    }

    #[test]
    fn test_missing_footer_resets_tracking() {
        let (harness, log) = harness_with_log();
        let server = harness.runtime.server();

        server.tab_footer(Some("Online: 10 | hub-1"));
        server.tab_footer(None);
        assert_eq!(server.current_shard(), None);

        server.tab_footer(Some("Online: 10 | hub-1"));
        assert_eq!(log.shards.lock().len(), 2);
    }

    #[test]
    fn test_hub_command_marks_swap_as_manual() {
        let harness = Harness::new(FeatureConfig::default());
        let tracker = &harness.runtime.features().shard_swaps;

        harness.runtime.command().sent("/warp spawn");
        assert!(!tracker.was_recent_manual_swap());

        harness.runtime.command().sent("/HUB");
        assert!(tracker.was_recent_manual_swap());

        harness.clock.advance(60_001);
        assert!(!tracker.was_recent_manual_swap());
    }

    #[test]
    fn test_disconnect_forgets_swap_command() {
        let harness = Harness::new(FeatureConfig::default());
        harness.runtime.command().sent("safelogout");
        harness.runtime.server().disconnected("lifesteal.net");
        assert!(!harness.runtime.features().shard_swaps.was_recent_manual_swap());
    }

    #[test]
    fn test_tracking_toggle_is_live() {
        let harness = Harness::new(FeatureConfig::default());
        harness
            .runtime
            .live_config()
            .update(|c| c.track_manual_shard_swaps = false)
            .unwrap();

        harness.runtime.command().sent("/hub");
        assert!(!harness.runtime.features().shard_swaps.was_recent_manual_swap());
    }
}
