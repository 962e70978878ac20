//! # Domain Layer - Feature Listeners
//!
//! ## Components
//!
//! - `private_messages`: PrivateMessageFormatter (Chat, HIGH)
//! - `chat_tags`: ChatTagRemover (Chat)
//! - `rank_plus`: RankPlusColorNormalizer (Chat)
//! - `chain_tracker`: UnbrokenChainTracker (Combat + Tick + Server)
//! - `splashes`: CustomSplashes (Ui)
//! - `shard_swaps`: ManualShardSwapTracker (Command + Server)
//! - `rare_items`: RareItemHighlight (Render)
//! - `quick_join`: QuickJoinButton (Ui)
//! - `markup`: tag escaping and placeholder helpers

pub mod chain_tracker;
pub mod chat_tags;
pub mod markup;
pub mod private_messages;
pub mod quick_join;
pub mod rank_plus;
pub mod rare_items;
pub mod shard_swaps;
pub mod splashes;

pub use chain_tracker::UnbrokenChainTracker;
pub use chat_tags::ChatTagRemover;
pub use private_messages::PrivateMessageFormatter;
pub use quick_join::{QuickJoinButton, CONNECT_ACTION_PREFIX};
pub use rank_plus::RankPlusColorNormalizer;
pub use rare_items::RareItemHighlight;
pub use shard_swaps::ManualShardSwapTracker;
pub use splashes::{CustomSplashes, FALLBACK_SPLASH};
