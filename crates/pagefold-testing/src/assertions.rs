//! Assertion helpers shared by gesture tests.

use pagefold_geometry::{CornerId, CurlSize};

use crate::robot::CurlRobot;

/// Absolute tolerance for settled animation values. Tweens sample exactly at
/// their endpoints, but intermediate float math leaves sub-pixel residue.
pub const SETTLE_TOLERANCE: f32 = 0.01;

pub fn approx_eq(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}

/// Assert a corner has settled at the given square size.
pub fn assert_corner_at(robot: &CurlRobot, corner: CornerId, expected: f32) {
    let size = robot.size_of(corner);
    assert!(
        approx_eq(size.x, expected, SETTLE_TOLERANCE)
            && approx_eq(size.y, expected, SETTLE_TOLERANCE),
        "{corner:?} expected {expected}, got ({}, {})",
        size.x,
        size.y,
    );
}

/// Assert every corner sits at the config's resting size.
pub fn assert_all_resting(robot: &CurlRobot) {
    let resting = robot.config().initial_size as f32;
    for corner in CornerId::ALL {
        assert_corner_at(robot, corner, resting);
    }
}

/// Assert a corner is exactly zero (vanished during a commit).
pub fn assert_corner_vanished(robot: &CurlRobot, corner: CornerId) {
    assert_eq!(
        robot.size_of(corner),
        CurlSize::ZERO,
        "{corner:?} should be zeroed"
    );
}
