//! Grid geometry and the responsive tile-size calculation.
//!
//! The numbers here describe the fixed chrome around the board: a side panel
//! that only exists on wide viewports and a command band that only exists on
//! narrow ones. Everything is pure so the math can be tested without a
//! document.

/// Width reserved for the side panel on wide viewports, px.
pub const SIDE_PANEL_PX: f64 = 400.0;
/// Vertical band reserved for the command UI on narrow viewports, px.
pub const RESERVED_BAND_PX: f64 = 260.0;
/// Viewport width at which the side panel replaces the command band, px.
pub const WIDE_BREAKPOINT_PX: f64 = 1200.0;

// Extra columns of visual margin reserved when fitting tiles horizontally.
const COLUMN_PADDING: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    pub rows: u32,
    pub columns: u32,
}

impl GridGeometry {
    pub fn tile_count(self) -> usize {
        self.rows as usize * self.columns as usize
    }
}

/// Largest square tile, in whole pixels, that fits the grid into the viewport.
///
/// Wide viewports lose `SIDE_PANEL_PX` of width; narrow viewports lose the
/// nav height plus `RESERVED_BAND_PX` of height. The result is floored and
/// never negative.
pub fn tile_size(
    viewport_width: f64,
    viewport_height: f64,
    nav_height: f64,
    geometry: GridGeometry,
) -> u32 {
    let wide = viewport_width >= WIDE_BREAKPOINT_PX;
    let available_width = viewport_width - if wide { SIDE_PANEL_PX } else { 0.0 };
    let available_height =
        viewport_height - nav_height - if wide { 0.0 } else { RESERVED_BAND_PX };
    let fit_width = available_width / (geometry.columns as f64 + COLUMN_PADDING);
    let fit_height = available_height / geometry.rows as f64;
    fit_width.min(fit_height).floor().max(0.0) as u32
}
