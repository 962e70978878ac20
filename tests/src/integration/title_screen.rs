//! Title screen features, including settings loaded from a JSON file.

#[cfg(test)]
mod tests {
    use std::io::Write;

    use lsu_features::{FeatureConfig, CONNECT_ACTION_PREFIX, FALLBACK_SPLASH};
    use lsu_runtime::{ClientRuntime, RuntimeConfig, RuntimeError};

    use crate::integration::Harness;

    #[test]
    fn test_splash_comes_from_configured_pool() {
        let harness = Harness::new(FeatureConfig {
            splashes: vec!["<aqua>Stay unbroken</aqua>".to_string()],
            ..FeatureConfig::default()
        });
        assert_eq!(
            harness.runtime.ui().splash_text().as_deref(),
            Some("<aqua>Stay unbroken</aqua>")
        );
    }

    #[test]
    fn test_empty_pool_uses_fallback_splash() {
        let harness = Harness::new(FeatureConfig::default());
        assert_eq!(harness.runtime.ui().splash_text().as_deref(), Some(FALLBACK_SPLASH));
    }

    #[test]
    fn test_disabled_splashes_keep_game_splash() {
        let harness = Harness::new(FeatureConfig {
            custom_splashes: false,
            ..FeatureConfig::default()
        });
        assert_eq!(harness.runtime.ui().splash_text(), None);
    }

    #[test]
    fn test_quick_join_button_layout() {
        let harness = Harness::new(FeatureConfig::default());
        let buttons = harness.runtime.ui().title_screen_init(427, 240);

        assert_eq!(buttons.len(), 1);
        let button = &buttons[0];
        assert_eq!((button.x, button.y), (213 + 104, 60 + 48));
        assert_eq!((button.width, button.height), (20, 20));
        assert_eq!(button.action, format!("{CONNECT_ACTION_PREFIX}lifesteal.net"));
    }

    #[test]
    fn test_quick_join_button_can_be_turned_off() {
        let harness = Harness::new(FeatureConfig::default());
        harness
            .runtime
            .live_config()
            .update(|c| c.quick_join_button_enabled = false)
            .unwrap();
        assert!(harness.runtime.ui().title_screen_init(427, 240).is_empty());
    }

    #[test]
    fn test_runtime_loads_feature_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"quick_join_address": "eu.lifesteal.net", "splashes": ["hi"]}}"#
        )
        .unwrap();

        let runtime = ClientRuntime::new(RuntimeConfig {
            feature_config_path: Some(file.path().to_path_buf()),
            ..RuntimeConfig::default()
        })
        .unwrap();

        let buttons = runtime.ui().title_screen_init(320, 240);
        assert_eq!(buttons[0].action, "connect:eu.lifesteal.net");
        assert_eq!(runtime.ui().splash_text().as_deref(), Some("hi"));
    }

    #[test]
    fn test_invalid_feature_file_fails_bootstrap() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"rare_item_scale": 50.0}}"#).unwrap();

        let result = ClientRuntime::new(RuntimeConfig {
            feature_config_path: Some(file.path().to_path_buf()),
            ..RuntimeConfig::default()
        });
        assert!(matches!(result, Err(RuntimeError::FeatureConfig(_))));
    }
}
