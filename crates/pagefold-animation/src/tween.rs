//! Sampled tween values driven by an explicit clock.

use crate::easing::Easing;
use pagefold_geometry::CurlSize;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

impl Lerp for CurlSize {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        CurlSize::new(
            self.x.lerp(&target.x, fraction),
            self.y.lerp(&target.y, fraction),
        )
    }
}

/// Tween specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting in milliseconds.
    pub delay_millis: u64,
}

impl TweenSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// Spec for a settle transition of the given length in seconds.
    /// Transitions longer than 0.3 s read better with the material curve;
    /// short snap-backs use a plain ease-out.
    pub fn for_duration_secs(secs: f32) -> Self {
        let easing = if secs > 0.3 {
            Easing::FastOutSlowIn
        } else {
            Easing::EaseOut
        };
        Self::tween((secs * 1000.0).round() as u64, easing)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

/// A value animating from `from` to `to`, sampled against the host clock.
///
/// Unlike a retained animation object there is no callback registration
/// here; the owner samples the tween on every tick and drops it once
/// [`Tween::is_finished`] reports true.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T: Lerp + Clone> {
    from: T,
    to: T,
    spec: TweenSpec,
    start_nanos: u64,
}

impl<T: Lerp + Clone> Tween<T> {
    pub fn new(from: T, to: T, spec: TweenSpec, start_nanos: u64) -> Self {
        Self {
            from,
            to,
            spec,
            start_nanos,
        }
    }

    pub fn target(&self) -> T {
        self.to.clone()
    }

    pub fn spec(&self) -> TweenSpec {
        self.spec
    }

    fn linear_progress(&self, now_nanos: u64) -> f32 {
        let elapsed = now_nanos.saturating_sub(self.start_nanos);
        let delay = self.spec.delay_millis * 1_000_000;
        if elapsed < delay {
            return 0.0;
        }
        // A zero-duration spec snaps on the first sample.
        let duration = (self.spec.duration_millis * 1_000_000).max(1);
        ((elapsed - delay) as f32 / duration as f32).clamp(0.0, 1.0)
    }

    /// Value at `now_nanos`. Clamps before the start (including any delay)
    /// to `from` and past the end to `to`.
    pub fn sample(&self, now_nanos: u64) -> T {
        let progress = self.spec.easing.transform(self.linear_progress(now_nanos));
        self.from.lerp(&self.to, progress)
    }

    pub fn is_finished(&self, now_nanos: u64) -> bool {
        self.linear_progress(now_nanos) >= 1.0
    }
}

#[cfg(test)]
#[path = "tests/tween_tests.rs"]
mod tests;
