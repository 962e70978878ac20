//! Unbroken chain counting through the combat and tick probes.

#[cfg(test)]
mod tests {
    use crate::integration::{Harness, LOCAL_PLAYER};
    use lsu_bus::DamageSource;
    use lsu_features::FeatureConfig;

    const ENEMY: i32 = 42;

    fn hit(harness: &Harness, target: i32) {
        assert!(harness.runtime.combat().attack(Some(target)));
        harness.clock.advance(100);
        harness.runtime.combat().damage(target, DamageSource::default());
    }

    #[test]
    fn test_confirmed_hits_build_a_chain() {
        let harness = Harness::all_enabled();
        let chain = &harness.runtime.features().chain_tracker;

        for _ in 0..4 {
            hit(&harness, ENEMY);
        }

        assert_eq!(chain.chain_count(), 4);
        assert_eq!(chain.bonus_percent(), 10);
        assert_eq!(
            chain.display_text(),
            "<gray>Chain:</gray> <gold>4</gold> <gray>(+10% dmg)</gray>"
        );
    }

    #[test]
    fn test_chain_caps_at_twelve() {
        let harness = Harness::all_enabled();
        for _ in 0..20 {
            hit(&harness, ENEMY);
        }
        assert_eq!(harness.runtime.features().chain_tracker.chain_count(), 12);
    }

    #[test]
    fn test_taking_damage_breaks_the_chain() {
        let harness = Harness::all_enabled();
        hit(&harness, ENEMY);
        hit(&harness, ENEMY);

        harness
            .runtime
            .combat()
            .damage(LOCAL_PLAYER, DamageSource::default());

        assert_eq!(harness.runtime.features().chain_tracker.chain_count(), 0);
    }

    #[test]
    fn test_slow_confirmation_does_not_count() {
        let harness = Harness::all_enabled();
        harness.runtime.combat().attack(Some(ENEMY));
        harness.clock.advance(600);
        harness.runtime.combat().damage(ENEMY, DamageSource::default());
        assert_eq!(harness.runtime.features().chain_tracker.chain_count(), 0);
    }

    #[test]
    fn test_unswung_damage_does_not_count() {
        let harness = Harness::all_enabled();
        harness.runtime.combat().damage(ENEMY, DamageSource::default());
        assert_eq!(harness.runtime.features().chain_tracker.chain_count(), 0);
    }

    #[test]
    fn test_chain_expires_on_tick_after_inactivity() {
        let harness = Harness::all_enabled();
        hit(&harness, ENEMY);
        hit(&harness, ENEMY);

        harness.clock.advance(4_000);
        harness.runtime.tick().step();
        assert_eq!(harness.runtime.features().chain_tracker.chain_count(), 2);

        harness.clock.advance(2_000);
        harness.runtime.tick().step();
        assert_eq!(harness.runtime.features().chain_tracker.chain_count(), 0);
    }

    #[test]
    fn test_stale_swings_are_pruned_on_tick() {
        let harness = Harness::all_enabled();
        harness.runtime.combat().attack(Some(ENEMY));
        assert_eq!(harness.runtime.features().chain_tracker.pending_hits(), 1);

        harness.clock.advance(501);
        harness.runtime.tick().step();
        assert_eq!(harness.runtime.features().chain_tracker.pending_hits(), 0);
    }

    #[test]
    fn test_disconnect_resets_the_chain() {
        let harness = Harness::all_enabled();
        hit(&harness, ENEMY);
        harness.runtime.server().disconnected("lifesteal.net");
        assert_eq!(harness.runtime.features().chain_tracker.chain_count(), 0);
    }

    #[test]
    fn test_disabled_tracker_ignores_combat() {
        let harness = Harness::new(FeatureConfig::default());
        hit(&harness, ENEMY);
        assert_eq!(harness.runtime.features().chain_tracker.chain_count(), 0);
    }
}
