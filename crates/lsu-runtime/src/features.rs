//! # Feature Set
//!
//! Owns one instance of every feature listener. The bus only holds weak
//! references, so this set is what keeps the features alive.

use std::sync::Arc;

use lsu_bus::{EventBus, Listener};
use lsu_features::{
    ChatSink, ChatTagRemover, CustomSplashes, LiveConfig, ManualShardSwapTracker,
    PrivateMessageFormatter, QuickJoinButton, RankPlusColorNormalizer, RareItemHighlight,
    TimeSource, UnbrokenChainTracker,
};
use tracing::info;

/// Every feature listener, constructed against one config and one set of ports.
pub struct FeatureSet {
    pub private_messages: Arc<PrivateMessageFormatter>,
    pub chat_tags: Arc<ChatTagRemover>,
    pub rank_plus: Arc<RankPlusColorNormalizer>,
    pub chain_tracker: Arc<UnbrokenChainTracker>,
    pub splashes: Arc<CustomSplashes>,
    pub shard_swaps: Arc<ManualShardSwapTracker>,
    pub rare_items: Arc<RareItemHighlight>,
    pub quick_join: Arc<QuickJoinButton>,
}

impl FeatureSet {
    pub fn new(config: &LiveConfig, clock: Arc<dyn TimeSource>, sink: Arc<dyn ChatSink>) -> Self {
        Self {
            private_messages: Arc::new(PrivateMessageFormatter::new(config.clone(), sink)),
            chat_tags: Arc::new(ChatTagRemover::new(config.clone())),
            rank_plus: Arc::new(RankPlusColorNormalizer::new(config.clone())),
            chain_tracker: Arc::new(UnbrokenChainTracker::new(config.clone(), Arc::clone(&clock))),
            splashes: Arc::new(CustomSplashes::new(config.clone())),
            shard_swaps: Arc::new(ManualShardSwapTracker::new(config.clone(), clock)),
            rare_items: Arc::new(RareItemHighlight::new(config.clone())),
            quick_join: Arc::new(QuickJoinButton::new(config.clone())),
        }
    }

    /// Type-erased handles, in registration order.
    #[must_use]
    pub fn handles(&self) -> Vec<Arc<dyn Listener>> {
        vec![
            Arc::clone(&self.private_messages) as Arc<dyn Listener>,
            Arc::clone(&self.chat_tags) as Arc<dyn Listener>,
            Arc::clone(&self.rank_plus) as Arc<dyn Listener>,
            Arc::clone(&self.chain_tracker) as Arc<dyn Listener>,
            Arc::clone(&self.splashes) as Arc<dyn Listener>,
            Arc::clone(&self.shard_swaps) as Arc<dyn Listener>,
            Arc::clone(&self.rare_items) as Arc<dyn Listener>,
            Arc::clone(&self.quick_join) as Arc<dyn Listener>,
        ]
    }

    /// Registers every feature. Returns the total kinds attached.
    pub fn register_all(&self, bus: &EventBus) -> usize {
        let handles = self.handles();
        let attached: usize = handles.iter().map(|handle| bus.register(handle)).sum();
        info!(features = handles.len(), kinds = attached, "Features registered");
        attached
    }

    /// Removes every feature from `bus`. Returns the entries retired.
    pub fn unregister_all(&self, bus: &EventBus) -> usize {
        self.handles()
            .iter()
            .map(|handle| bus.unregister(handle))
            .sum()
    }
}
