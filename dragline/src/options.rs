use crate::geometry::{NOMINAL_DISTANCE_DP, dp_to_px};

/// Default width of the auto-scroll sensitive margin, in density-independent pixels.
pub const DEFAULT_SCROLL_SENSITIVE_MARGIN_DP: f32 = 48.0;
/// Default cap on the auto-scroll step, in pixels per update.
pub const DEFAULT_MAX_SCROLL_SPEED: i32 = 16;
/// Default touch slop, in pixels.
pub const DEFAULT_SLOP: i32 = 8;

/// Configuration for [`crate::DragContainer`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragOptions {
    /// Display density (pixels per density-independent pixel).
    pub density: f32,
    /// Pointer travel, in pixels, before a press on a handle becomes a drag.
    pub slop: i32,
    /// Distance from a scrollable ancestor's edge within which auto-scroll activates.
    pub scroll_sensitive_margin: i32,
    /// Largest auto-scroll step.
    pub max_scroll_speed: i32,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}

impl DragOptions {
    /// Options with density-dependent defaults scaled for `density`.
    pub fn with_density(density: f32) -> Self {
        Self {
            density,
            slop: DEFAULT_SLOP,
            scroll_sensitive_margin: dp_to_px(DEFAULT_SCROLL_SENSITIVE_MARGIN_DP, density),
            max_scroll_speed: DEFAULT_MAX_SCROLL_SPEED,
        }
    }

    pub fn with_slop(mut self, slop: i32) -> Self {
        self.slop = slop;
        self
    }

    pub fn with_scroll_sensitive_margin(mut self, margin: i32) -> Self {
        self.scroll_sensitive_margin = margin;
        self
    }

    pub fn with_max_scroll_speed(mut self, speed: i32) -> Self {
        self.max_scroll_speed = speed;
        self
    }

    /// Distance, in pixels, that maps to the nominal settle duration.
    pub fn nominal_distance(&self) -> i32 {
        dp_to_px(NOMINAL_DISTANCE_DP, self.density)
    }
}
