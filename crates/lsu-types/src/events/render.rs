//! Render occurrences.
//!
//! These fire every frame (60-144+ times per second per item or name), so
//! payloads are small and listeners should not allocate on the hot path.

use super::impl_event;

/// Transform applied to an item before it is drawn.
///
/// Listeners compose into it (e.g. scale rare items up); the render probe
/// applies the final value to its pose stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseTransform {
    pub scale: f32,
    pub translation: [f32; 3],
}

impl PoseTransform {
    pub const IDENTITY: PoseTransform = PoseTransform {
        scale: 1.0,
        translation: [0.0; 3],
    };

    pub fn scale_by(&mut self, factor: f32) {
        self.scale *= factor;
    }

    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.translation[0] += dx;
        self.translation[1] += dy;
        self.translation[2] += dz;
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for PoseTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A dropped item is about to be rendered.
///
/// Cancellable: the render probe skips drawing the item when vetoed.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRender {
    item_id: u32,
    is_rare: bool,
    transform: PoseTransform,
    cancelled: bool,
}

impl ItemRender {
    pub fn new(item_id: u32, is_rare: bool) -> Self {
        Self {
            item_id,
            is_rare,
            transform: PoseTransform::IDENTITY,
            cancelled: false,
        }
    }

    /// Registry id of the item stack.
    pub fn item_id(&self) -> u32 {
        self.item_id
    }

    pub fn is_rare(&self) -> bool {
        self.is_rare
    }

    pub fn transform(&self) -> &PoseTransform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut PoseTransform {
        &mut self.transform
    }
}

impl_event!(ItemRender, cancellable);

/// A player's display name is about to be rendered (name tag or tab list).
///
/// Listeners overwrite the current display name; later listeners see the
/// latest overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNameRender {
    player_name: String,
    original_display_name: String,
    display_name: String,
}

impl PlayerNameRender {
    pub fn new(player_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        Self {
            player_name: player_name.into(),
            original_display_name: display_name.clone(),
            display_name,
        }
    }

    /// Plain username.
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn original_display_name(&self) -> &str {
        &self.original_display_name
    }

    /// Current display name (may have been rewritten).
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn set_display_name(&mut self, display_name: impl Into<String>) {
        self.display_name = display_name.into();
    }
}

impl_event!(PlayerNameRender);
