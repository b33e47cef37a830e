//! Shared crate-wide constants.
//!
//! All geometry values are device-independent pixels. The terminal host maps
//! them onto cells through [`crate::ui::CellMetrics`].

use std::time::Duration;

/// Starting value of the global stacking counter. Sits above the default
/// stacking of ordinary document content so every promoted window draws on
/// top of it.
pub const Z_INDEX_BASELINE: u32 = 10;

/// Inset kept between a dragged window and the left, right and top viewport
/// edges.
pub const DRAG_EDGE_PADDING: f64 = 8.0;

/// Distance from the bottom of the viewport below which a dragged window's
/// top edge may not travel. Only the title bar is protected; the body may
/// extend below the fold.
pub const DRAG_BOTTOM_MARGIN: f64 = 60.0;

/// Per-frame easing factor applied to the distance between the rendered and
/// target position of the dragged window.
pub const SMOOTHING_FACTOR: f64 = 0.32;

/// Once both axes are within this distance of the target the smoother snaps
/// and releases a settling drag.
pub const SMOOTHING_EPSILON: f64 = 0.5;

/// Resize floor for window width.
pub const MIN_WINDOW_WIDTH: f64 = 320.0;

/// Resize floor for window height.
pub const MIN_WINDOW_HEIGHT: f64 = 220.0;

/// Delay between a close request and the window actually being hidden,
/// leaving room for the exit transition.
pub const CLOSE_DELAY: Duration = Duration::from_millis(200);

/// Height of the title bar that acts as the drag handle.
pub const TITLE_BAR_HEIGHT: f64 = 16.0;

/// Height of the tab strip drawn under the title bar when a window has tabs.
pub const TAB_STRIP_HEIGHT: f64 = 16.0;

/// Thickness of the right and bottom resize strips.
pub const RESIZE_EDGE_THICKNESS: f64 = 16.0;

/// Side length of the bottom-right resize corner.
pub const RESIZE_CORNER_SIZE: f64 = 24.0;

/// Width of the close box at the right end of the title bar.
pub const CLOSE_BOX_WIDTH: f64 = 24.0;

/// Width of one label glyph in the tab strip.
pub const TAB_GLYPH_WIDTH: f64 = 8.0;
