//! # Producer Probes
//!
//! The entry points game hooks call when something happens. Each probe
//! builds the occurrence, posts it, and applies the outcome: a cancelled
//! occurrence suppresses the game's default behaviour, a rewritten one
//! replaces it. The bus never does this on its own.
//!
//! | Probe | Posts | Honors |
//! |-------|-------|--------|
//! | [`ChatProbe`] | ChatMessageReceived, ChatMessageSent | cancel, rewritten text |
//! | [`CommandProbe`] | CommandSent | - |
//! | [`CombatProbe`] | ClientAttack, DamageConfirmed, PlayerDamaged | attack cancel |
//! | [`TickProbe`] | ClientTick | - |
//! | [`ServerProbe`] | ServerChange, ShardSwap | - |
//! | [`RenderProbe`] | ItemRender, PlayerNameRender | cancel, transform, name |
//! | [`UiProbe`] | TitleScreenInit, SplashTextRequest | buttons, splash |

mod chat;
mod combat;
mod command;
mod render;
mod server;
mod tick;
mod ui;

pub use chat::ChatProbe;
pub use combat::CombatProbe;
pub use command::CommandProbe;
pub use render::RenderProbe;
pub use server::{parse_tab_footer, ServerProbe, TabFooter};
pub use tick::TickProbe;
pub use ui::UiProbe;
