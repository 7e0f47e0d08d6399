//! Shared gesture constants for consistent pointer handling.
//!
//! These values are in logical pixels. For very high-density touch screens,
//! consider scaling by the device's DPI factor; the fixed values below work
//! well for typical desktop/mobile displays.

/// Movement slop in logical pixels before a press counts as a drag.
///
/// While neither axis has moved more than this from the press position the
/// gesture is still a tap, and release snaps the corner back to its resting
/// size instead of evaluating the commit threshold. The check is per-axis
/// (an approximation of the Euclidean distance) and latches: once passed,
/// the session stays a drag even if the pointer returns to the press point.
pub const DRAG_SLOP: f32 = 5.0;

/// Total pointer travel, in logical pixels, after which the orbit drag
/// guide considers itself understood and dismisses.
pub const DRAG_GUIDE_DISMISS_DISTANCE: f32 = 120.0;
