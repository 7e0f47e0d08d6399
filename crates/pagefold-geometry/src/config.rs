//! Responsive curl configuration derived from the viewport.

use crate::geometry::Viewport;

/// Base curl constants for a 16:9 viewport at scale 1.0, in pixels.
const BASE_SIZE: f32 = 95.0;
const BASE_MIN: f32 = 12.0;
const BASE_MAX: f32 = 340.0;
const BASE_THRESHOLD: f32 = 200.0;

/// Reference aspect ratio the base constants were tuned against.
const BASE_ASPECT: f32 = 16.0 / 9.0;

/// Clamp `value` into `[min, max]`. Total and idempotent.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    max.min(min.max(value))
}

/// Dimensionless multiplier adapting the curl geometry to the viewport's
/// aspect ratio. Wide, short viewports get smaller relative curls and tall,
/// narrow ones larger, bounded so neither extreme degenerates.
///
/// A zero-height viewport cannot produce an aspect ratio; it falls back to
/// scale 1.0 rather than dividing by zero.
pub fn curl_scale(viewport: Viewport) -> f32 {
    let Some(aspect) = viewport.aspect() else {
        log::warn!("curl_scale: zero-height viewport, falling back to scale 1.0");
        return 1.0;
    };
    clamp((aspect / BASE_ASPECT).sqrt() * 1.1, 0.65, 1.45)
}

/// Curl geometry constants for the current viewport. Recomputed on every
/// resize; never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurlConfig {
    pub scale: f32,
    /// Resting fold extent.
    pub initial_size: i32,
    /// Smallest fold a drag can shrink to.
    pub min_size: i32,
    /// Largest fold an interactive drag can grow to. A scripted commit
    /// expansion is allowed to exceed this, bounded by the screen diagonal.
    pub max_size: i32,
    /// Mean fold extent at which a released drag commits.
    pub threshold: i32,
}

impl CurlConfig {
    pub fn for_viewport(viewport: Viewport) -> Self {
        let scale = curl_scale(viewport);
        Self {
            scale,
            initial_size: (BASE_SIZE * scale).round() as i32,
            min_size: (BASE_MIN * scale).round() as i32,
            max_size: (BASE_MAX * scale).round() as i32,
            threshold: (BASE_THRESHOLD * scale).round() as i32,
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
