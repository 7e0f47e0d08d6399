//! Animation system for pagefold
//!
//! Time-based tweens with easing curves, plus the explicit scheduling
//! primitives the interaction layer builds its settle animations on. All
//! sampling is driven by an explicit nanosecond clock supplied by the host,
//! so every animation in the workspace is deterministic under test.

mod clock;
mod easing;
mod timer;
mod tween;

pub use clock::*;
pub use easing::*;
pub use timer::*;
pub use tween::*;
