//! Chat features sharing one received-message occurrence.

#[cfg(test)]
mod tests {
    use crate::integration::Harness;
    use lsu_features::FeatureConfig;

    #[test]
    fn test_private_message_is_formatted_and_raw_line_dropped() {
        let harness = Harness::all_enabled();

        let shown = harness.runtime.chat().incoming("(MSG From Steve) hey");

        assert_eq!(shown, None);
        assert_eq!(
            harness.sink.lines(),
            vec![
                "<light_purple><bold>From</bold> Steve</light_purple> <white>➡ hey</white>"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_outgoing_private_message_uses_to_label() {
        let harness = Harness::all_enabled();
        harness
            .runtime
            .live_config()
            .update(|c| c.pm_format = "{{direction}}|{{sender}}|{{message}}".to_string())
            .unwrap();

        assert_eq!(harness.runtime.chat().incoming("(msg to Alex) gg"), None);
        assert_eq!(harness.sink.lines(), vec!["To|Alex|gg".to_string()]);
    }

    #[test]
    fn test_markup_in_private_message_is_escaped() {
        let harness = Harness::all_enabled();
        harness
            .runtime
            .live_config()
            .update(|c| c.pm_format = "{{sender}}: {{message}}".to_string())
            .unwrap();

        harness.runtime.chat().incoming("(MSG From Steve) <red>hi</red>");
        assert_eq!(harness.sink.lines(), vec!["Steve: \\<red>hi\\</red>".to_string()]);
    }

    #[test]
    fn test_chat_tag_is_stripped_from_displayed_line() {
        let harness = Harness::all_enabled();

        let shown = harness
            .runtime
            .chat()
            .incoming("[LEGEND+] [No-Life] Player: hello there");

        assert_eq!(shown.as_deref(), Some("[LEGEND+] Player: hello there"));
        assert!(harness.sink.lines().is_empty());
    }

    #[test]
    fn test_tag_removal_and_plus_recolor_compose() {
        let harness = Harness::all_enabled();
        let line = "<dark_gray>[</dark_gray><bold><#FF7200>HEROIC</#FF7200></bold>\
                    <green>+</green><dark_gray>]</dark_gray> <gray>[No-Life]</gray> \
                    <white>Steve</white>: gg";

        let shown = harness.runtime.chat().incoming(line);

        assert_eq!(
            shown.as_deref(),
            Some(
                "<dark_gray>[</dark_gray><bold><#FF7200>HEROIC+</#FF7200></bold>\
                 <dark_gray>]</dark_gray> <gray></gray> <white>Steve</white>: gg"
            )
        );
    }

    #[test]
    fn test_plus_recolor_alone_when_tags_kept() {
        let harness = Harness::all_enabled();
        harness
            .runtime
            .live_config()
            .update(|c| c.disable_chat_tags = false)
            .unwrap();

        let shown = harness
            .runtime
            .chat()
            .incoming("[<bold><aqua>VIP</aqua></bold><white>+</white>]   [Grinder] Alex: yo");

        assert_eq!(
            shown.as_deref(),
            Some("[<bold><aqua>VIP+</aqua></bold>] [Grinder] Alex: yo")
        );
    }

    #[test]
    fn test_brackets_in_message_body_survive() {
        let harness = Harness::all_enabled();
        let line = "[LEGEND+] Player: check [this] [out] later";
        assert_eq!(harness.runtime.chat().incoming(line).as_deref(), Some(line));
    }

    #[test]
    fn test_toggles_apply_on_next_post() {
        let harness = Harness::new(FeatureConfig::default());
        let line = "[LEGEND+] [No-Life] Player: hi";

        assert_eq!(harness.runtime.chat().incoming(line).as_deref(), Some(line));

        harness
            .runtime
            .live_config()
            .update(|c| c.disable_chat_tags = true)
            .unwrap();
        assert_eq!(
            harness.runtime.chat().incoming(line).as_deref(),
            Some("[LEGEND+] Player: hi")
        );
    }

    #[test]
    fn test_disabled_formatter_leaves_private_messages_alone() {
        let harness = Harness::new(FeatureConfig::default());
        let line = "(MSG From Steve) hey";
        assert_eq!(harness.runtime.chat().incoming(line).as_deref(), Some(line));
        assert!(harness.sink.lines().is_empty());
    }

    #[test]
    fn test_outgoing_chat_is_never_vetoed_by_features() {
        let harness = Harness::all_enabled();
        assert!(harness.runtime.chat().outgoing("(MSG From Steve) hey"));
    }
}
