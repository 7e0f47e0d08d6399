//! Drag session bookkeeping and the release decision.

use pagefold_geometry::{CornerId, CurlSize, Point};

/// Explicit interaction phase. Pointer moves while `Idle` and repeated
/// downs while `Dragging` are structural no-ops rather than guarded flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
    Committing,
    Resetting,
}

/// Ephemeral state for one pointer gesture, created on pointer-down and
/// consumed on pointer-up/cancel. Owned exclusively by the controller; at
/// most one session exists at a time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub corner: CornerId,
    pub start: Point,
    /// Corner size at press time; move deltas apply on top of this.
    pub base: CurlSize,
    /// Latches true once the pointer travels past the drag slop.
    pub has_moved: bool,
}

impl DragSession {
    pub fn new(corner: CornerId, start: Point, base: CurlSize) -> Self {
        Self {
            corner,
            start,
            base,
            has_moved: false,
        }
    }
}

/// Outcome of releasing a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    /// No movement: snap the corner back to its resting size.
    Tap,
    /// Moved but stayed under the threshold: snap back.
    Cancel,
    /// Moved past the threshold: expand full-screen and navigate.
    Commit,
}

impl CommitOutcome {
    /// Pure release decision from the session's movement flag and the
    /// corner's mean fold extent at release time.
    pub fn decide(has_moved: bool, average_size: f32, threshold: f32) -> CommitOutcome {
        if !has_moved {
            CommitOutcome::Tap
        } else if average_size >= threshold {
            CommitOutcome::Commit
        } else {
            CommitOutcome::Cancel
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
