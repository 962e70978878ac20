//! # LSU Features
//!
//! The feature listeners the client ships with. Each one is a plain
//! [`Listener`](lsu_bus::Listener) that reads its toggles from a shared
//! [`LiveConfig`] on every post and talks to the host through the traits in
//! [`ports`].
//!
//! | Feature | Contracts | Priority | Toggle |
//! |---------|-----------|----------|--------|
//! | `PrivateMessageFormatter` | Chat | HIGH | `enable_pm_format` |
//! | `ChatTagRemover` | Chat | NORMAL | `disable_chat_tags` |
//! | `RankPlusColorNormalizer` | Chat | NORMAL | `remove_unique_plus_color` |
//! | `UnbrokenChainTracker` | Combat, Tick, Server | NORMAL | `chain_counter_enabled` |
//! | `CustomSplashes` | Ui | NORMAL | `custom_splashes` |
//! | `ManualShardSwapTracker` | Command, Server | NORMAL | `track_manual_shard_swaps` |
//! | `RareItemHighlight` | Render | NORMAL | `rare_item_scale_enabled` |
//! | `QuickJoinButton` | Ui | NORMAL | `quick_join_button_enabled` |
//!
//! ## Module Structure
//!
//! ```text
//! ports/outbound.rs - TimeSource, ChatSink
//! domain/           - one module per feature, plus markup helpers
//! config.rs         - FeatureConfig (JSON) and the LiveConfig handle
//! ```

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

pub use config::{FeatureConfig, LiveConfig};
pub use domain::*;
pub use error::ConfigError;
pub use ports::{
    ChatSink, LogChatSink, ManualTimeSource, RecordingChatSink, SystemTimeSource, TimeSource,
};
