//! # LSU Bus - Typed Event Dispatch for Client Features
//!
//! Decouples the client's producers (packet handlers, the tick loop, render
//! and UI hooks) from the feature modules that react to them.
//!
//! ```text
//! ┌──────────────┐   post(&mut ev)   ┌──────────────┐   on_*(&mut ev)   ┌──────────────┐
//! │   Producer   │ ────────────────▶ │  Event Bus   │ ────────────────▶ │  Listeners   │
//! │ (checks the  │ ◀──────────────── │ HIGH→NORMAL→ │   (in priority    │  (features)  │
//! │  cancel flag)│   ev, final state │     LOW      │      order)       │              │
//! └──────────────┘                   └──────────────┘                   └──────────────┘
//! ```
//!
//! ## Pieces
//!
//! - [`contracts`]: capability traits and the [`CONTRACT_TABLE`]
//! - [`listener`]: the [`Listener`] manifest and [`ListenerHandle`]
//! - [`bus`]: the [`EventBus`] itself
//!
//! There is no global instance. Build an [`EventBus`], wrap it in an `Arc`,
//! and hand it to whatever produces or registers.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod bus;
pub mod contracts;
pub mod errors;
pub mod listener;
mod routing;
mod table;

pub use bus::EventBus;
pub use contracts::{
    Capability, ChatListener, CombatListener, CommandListener, HandlerResult, RenderListener,
    ServerListener, TickListener, UiListener, CONTRACT_TABLE,
};
pub use errors::HandlerFault;
pub use listener::{Listener, ListenerHandle};

// Occurrence types travel with the bus so listeners need one import.
pub use lsu_types::*;
