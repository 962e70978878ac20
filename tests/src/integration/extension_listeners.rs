//! Listeners registered next to the built-in features.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use anyhow::bail;
    use lsu_bus::{
        ChatListener, ChatMessageReceived, ChatMessageSent, HandlerResult, ItemRender, Listener,
        PlayerNameRender, Priority, RenderListener,
    };

    use crate::integration::Harness;

    /// Mutes a word after every feature has run.
    struct Censor;

    impl ChatListener for Censor {
        fn on_chat_message_received(&self, event: &mut ChatMessageReceived) -> HandlerResult {
            let censored = event.modified_message().replace("heck", "****");
            event.set_modified_message(censored);
            Ok(())
        }

        fn on_chat_message_sent(&self, event: &mut ChatMessageSent) -> HandlerResult {
            if event.message().starts_with("/pay") {
                event.cancel();
            }
            Ok(())
        }
    }

    impl Listener for Censor {
        fn is_enabled(&self) -> bool {
            true
        }

        fn priority(&self) -> Priority {
            Priority::Low
        }

        fn as_chat(&self) -> Option<&dyn ChatListener> {
            Some(self)
        }
    }

    /// Render listener that always fails, plus one that panics.
    struct Broken {
        panics: bool,
        calls: AtomicUsize,
    }

    impl RenderListener for Broken {
        fn on_item_render(&self, _event: &mut ItemRender) -> HandlerResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.panics {
                panic!("render overlay crashed");
            }
            bail!("texture missing")
        }

        fn on_player_name_render(&self, event: &mut PlayerNameRender) -> HandlerResult {
            let tagged = format!("[VIP] {}", event.display_name());
            event.set_display_name(tagged);
            Ok(())
        }
    }

    impl Listener for Broken {
        fn is_enabled(&self) -> bool {
            true
        }

        fn priority(&self) -> Priority {
            Priority::High
        }

        fn as_render(&self) -> Option<&dyn RenderListener> {
            Some(self)
        }
    }

    #[test]
    fn test_low_priority_listener_sees_feature_output() {
        let harness = Harness::all_enabled();
        let censor = Arc::new(Censor);
        harness.runtime.bus().register(&censor);

        let shown = harness
            .runtime
            .chat()
            .incoming("[LEGEND+] [No-Life] Player: what the heck");

        assert_eq!(shown.as_deref(), Some("[LEGEND+] Player: what the ****"));
    }

    #[test]
    fn test_extension_can_veto_outgoing_chat() {
        let harness = Harness::all_enabled();
        let censor = Arc::new(Censor);
        harness.runtime.bus().register(&censor);

        assert!(!harness.runtime.chat().outgoing("/pay Steve 1000"));
        assert!(harness.runtime.chat().outgoing("gg"));
    }

    #[test]
    fn test_failing_listeners_do_not_break_rare_item_scaling() {
        let harness = Harness::all_enabled();
        let failing = Arc::new(Broken {
            panics: false,
            calls: AtomicUsize::new(0),
        });
        let panicking = Arc::new(Broken {
            panics: true,
            calls: AtomicUsize::new(0),
        });
        harness.runtime.bus().register(&failing);
        harness.runtime.bus().register(&panicking);

        let transform = harness.runtime.render().item(1, true).unwrap();

        assert!((transform.scale - 2.0).abs() < f32::EPSILON);
        assert_eq!(failing.calls.load(Ordering::SeqCst), 1);
        assert_eq!(panicking.calls.load(Ordering::SeqCst), 1);
        assert_eq!(harness.runtime.bus().handler_faults(), 2);
    }

    #[test]
    fn test_name_render_rewrite_reaches_producer() {
        let harness = Harness::all_enabled();
        let broken = Arc::new(Broken {
            panics: false,
            calls: AtomicUsize::new(0),
        });
        harness.runtime.bus().register(&broken);

        assert_eq!(
            harness.runtime.render().player_name("Steve", "Steve"),
            "[VIP] Steve"
        );
    }

    #[test]
    fn test_dropped_extension_stops_receiving() {
        let harness = Harness::all_enabled();
        let censor = Arc::new(Censor);
        harness.runtime.bus().register(&censor);
        drop(censor);

        assert_eq!(
            harness.runtime.chat().incoming("heck").as_deref(),
            Some("heck")
        );
    }
}
