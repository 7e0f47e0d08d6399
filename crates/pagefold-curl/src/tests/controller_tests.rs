use super::*;
use pagefold_curl::{DragPhase, SoundCue};
use pagefold_geometry::{Category, CornerId, CurlSize};
use pagefold_testing::prelude::*;

/// 1469x1000 computes a curl scale of ~1.0, so the config lands on the
/// base constants: initial 95, min 12, max 340, threshold 200.
fn base_robot() -> CurlRobot {
    let robot = CurlRobot::new(1469.0, 1000.0);
    let config = robot.config();
    assert_eq!(config.initial_size, 95);
    assert_eq!(config.min_size, 12);
    assert_eq!(config.max_size, 340);
    assert_eq!(config.threshold, 200);
    robot
}

#[test]
fn construction_emits_a_resting_frame() {
    let robot = base_robot();
    assert!(robot.frame_count() >= 1);
    assert_all_resting(&robot);
    let frame = robot.last_frame().unwrap();
    assert_eq!(frame.sizes.get(CornerId::TopLeft), CurlSize::splat(95.0));
}

#[test]
fn press_plays_sound_and_locks_selection() {
    let mut robot = base_robot();
    robot.press(CornerId::TopLeft);
    assert_eq!(robot.sounds(), vec![SoundCue::PageCurlStart]);
    assert_eq!(robot.selection_changes(), vec![false]);
    assert_eq!(robot.controller().phase(), DragPhase::Dragging);
    robot.release();
    assert_eq!(robot.selection_changes(), vec![false, true]);
}

#[test]
fn drag_grows_toward_center_with_per_corner_signs() {
    let mut robot = base_robot();

    // Top-left: positive deltas grow.
    robot.press(CornerId::TopLeft);
    robot.drag_by(40.0, 60.0);
    assert_eq!(robot.size_of(CornerId::TopLeft), CurlSize::new(135.0, 155.0));
    robot.release();
    robot.advance_millis(200);

    // Bottom-right: negative deltas grow.
    robot.press(CornerId::BottomRight);
    robot.drag_by(-40.0, -60.0);
    assert_eq!(
        robot.size_of(CornerId::BottomRight),
        CurlSize::new(135.0, 155.0)
    );
    robot.release();
    robot.advance_millis(200);

    // Top-right: x inverted, y not.
    robot.press(CornerId::TopRight);
    robot.drag_by(-40.0, 60.0);
    assert_eq!(robot.size_of(CornerId::TopRight), CurlSize::new(135.0, 155.0));
    robot.release();
    robot.advance_millis(200);
    assert_all_resting(&robot);
}

#[test]
fn drag_clamps_both_axes_independently() {
    let mut robot = base_robot();
    robot.press(CornerId::TopLeft);
    // x overshoots the max, y undershoots the min.
    robot.drag_by(500.0, -500.0);
    assert_eq!(robot.size_of(CornerId::TopLeft), CurlSize::new(340.0, 12.0));
    robot.release();
}

#[test]
fn every_move_recomposes_a_frame() {
    let mut robot = base_robot();
    robot.press(CornerId::TopLeft);
    robot.take_effects();
    robot.drag_by(10.0, 10.0);
    robot.drag_by(10.0, 10.0);
    robot.drag_by(10.0, 10.0);
    assert_eq!(robot.frame_count(), 3);
}

#[test]
fn move_while_idle_is_a_no_op() {
    let mut robot = base_robot();
    robot.take_effects();
    robot.drag_by(200.0, 200.0);
    assert_eq!(robot.frame_count(), 0);
    assert_all_resting(&robot);
}

#[test]
fn tap_snaps_back_to_resting_size() {
    let mut robot = base_robot();
    robot.press(CornerId::BottomLeft);
    robot.release();
    robot.advance_millis(200);
    assert_corner_at(&robot, CornerId::BottomLeft, 95.0);
    assert_eq!(robot.controller().phase(), DragPhase::Idle);
}

#[test]
fn movement_within_slop_still_counts_as_tap() {
    let mut robot = base_robot();
    robot.press(CornerId::TopLeft);
    // Exactly at the slop on both axes: not a drag yet.
    robot.drag_by(5.0, 5.0);
    robot.release();
    robot.advance_millis(200);
    assert_corner_at(&robot, CornerId::TopLeft, 95.0);
    assert!(robot.committed_categories().is_empty());
}

#[test]
fn tap_resets_even_from_a_mid_animation_size() {
    let mut robot = base_robot();
    // Leave the corner mid-snap-back, then tap it.
    robot.press(CornerId::TopLeft);
    robot.drag_by(100.0, 100.0);
    robot.release();
    robot.advance_millis(48);
    let mid = robot.size_of(CornerId::TopLeft).x;
    assert!(mid > 95.0 && mid < 195.0);

    robot.press(CornerId::TopLeft);
    robot.release();
    robot.advance_millis(200);
    assert_corner_at(&robot, CornerId::TopLeft, 95.0);
}

#[test]
fn under_threshold_release_cancels_back_to_resting() {
    let mut robot = base_robot();
    robot.press(CornerId::BottomRight);
    // Signs invert for this corner: both axes grow to 125, average 125 < 200.
    robot.drag_by(-30.0, -30.0);
    assert_eq!(
        robot.size_of(CornerId::BottomRight),
        CurlSize::new(125.0, 125.0)
    );
    robot.release();
    assert!(robot.committed_categories().is_empty());

    // Snap-back runs over 0.15 s; mid-flight it is strictly between.
    robot.advance_frame();
    let mid = robot.size_of(CornerId::BottomRight).x;
    assert!(mid > 95.0 && mid < 125.0, "mid-settle size was {mid}");

    robot.advance_millis(150);
    assert_corner_at(&robot, CornerId::BottomRight, 95.0);
    assert_eq!(robot.controller().phase(), DragPhase::Idle);
}

#[test]
fn cancel_returns_to_resting_not_pre_drag_value() {
    let mut robot = base_robot();
    // First drag leaves the corner larger than resting via a fresh press
    // mid-reset, so the second session's base differs from resting.
    robot.press(CornerId::TopLeft);
    robot.drag_by(60.0, 60.0);
    robot.release();
    robot.advance_millis(32);
    robot.press(CornerId::TopLeft);
    let base = robot.size_of(CornerId::TopLeft).x;
    assert!(base > 95.0);

    robot.drag_by(20.0, 20.0);
    robot.release();
    robot.advance_millis(200);
    // Returns to the resting size, not to `base`.
    assert_corner_at(&robot, CornerId::TopLeft, 95.0);
}

#[test]
fn over_threshold_release_commits_and_navigates() {
    let mut robot = base_robot();
    robot.press(CornerId::TopLeft);
    robot.drag_by(250.0, 250.0);
    // Raw 345 clamps to 340 on both axes; average 340 >= 200.
    assert_eq!(robot.size_of(CornerId::TopLeft), CurlSize::new(340.0, 340.0));
    robot.release();

    // The losing corners vanish immediately, before any animation.
    for corner in [CornerId::TopRight, CornerId::BottomLeft, CornerId::BottomRight] {
        assert_corner_vanished(&robot, corner);
    }
    assert_eq!(robot.controller().phase(), DragPhase::Committing);

    // Navigation only fires once the expansion transition completes.
    robot.advance_millis(590);
    assert!(robot.committed_categories().is_empty());
    robot.advance_millis(10);
    assert_eq!(robot.committed_categories(), vec![Category::Development]);
    assert_eq!(robot.controller().active_corner(), Some(CornerId::TopLeft));
    assert_eq!(robot.controller().phase(), DragPhase::Idle);

    // The winner ends past the interactive max, at 1.5 viewport diagonals.
    let expanded = (robot.controller().viewport().diagonal() * 1.5).ceil();
    let size = robot.size_of(CornerId::TopLeft);
    assert_eq!(size, CurlSize::splat(expanded));
    assert!(size.x > robot.config().max_size as f32);
}

#[test]
fn release_exactly_at_threshold_commits() {
    let mut robot = base_robot();
    robot.press(CornerId::BottomLeft);
    robot.drag_by(105.0, -105.0);
    assert_eq!(
        robot.size_of(CornerId::BottomLeft),
        CurlSize::new(200.0, 200.0)
    );
    robot.release();
    robot.advance_millis(600);
    assert_eq!(robot.committed_categories(), vec![Category::Music]);
}

#[test]
fn each_corner_commits_its_own_category() {
    for (corner, category) in [
        (CornerId::TopLeft, Category::Development),
        (CornerId::TopRight, Category::Design),
        (CornerId::BottomLeft, Category::Music),
        (CornerId::BottomRight, Category::Project),
    ] {
        let mut robot = base_robot();
        let (sign_x, sign_y) = corner.delta_signs();
        robot.press(corner);
        robot.drag_by(sign_x * 250.0, sign_y * 250.0);
        robot.release();
        robot.advance_millis(600);
        assert_eq!(robot.committed_categories(), vec![category]);
    }
}

#[test]
fn pointer_down_is_ignored_while_commit_expands() {
    let mut robot = base_robot();
    robot.press(CornerId::TopLeft);
    robot.drag_by(250.0, 250.0);
    robot.release();
    robot.advance_millis(100);

    // The expanding top-left fold covers the whole page, so a press
    // anywhere lands on it; it must not start a session.
    robot.press(CornerId::TopLeft);
    assert_eq!(robot.sounds().len(), 1);
    assert_eq!(robot.controller().phase(), DragPhase::Committing);

    robot.advance_millis(500);
    assert_eq!(robot.committed_categories(), vec![Category::Development]);
}

#[test]
fn gallery_close_after_commit_resets_staggered() {
    let mut robot = base_robot();
    robot.press(CornerId::TopLeft);
    robot.drag_by(250.0, 250.0);
    robot.release();
    robot.advance_millis(600);
    robot.gallery_closed();
    assert_eq!(robot.controller().active_corner(), None);

    // The just-used corner settles first, over 0.35 s.
    robot.advance_millis(350);
    assert_corner_at(&robot, CornerId::TopLeft, 95.0);
    // Its siblings must not reappear before the 350 + 80 ms mark.
    robot.advance_millis(64);
    assert_corner_vanished(&robot, CornerId::TopRight);
    assert_corner_vanished(&robot, CornerId::BottomLeft);
    assert_corner_vanished(&robot, CornerId::BottomRight);

    // Past the gap the siblings tween back over another 0.35 s.
    robot.advance_millis(16);
    robot.advance_millis(350);
    assert_all_resting(&robot);
    assert_eq!(robot.controller().phase(), DragPhase::Idle);
}

#[test]
fn gallery_close_without_active_corner_resets_uniformly() {
    let mut robot = base_robot();
    // Disturb one corner, then close without any commit recorded.
    robot.press(CornerId::TopRight);
    robot.drag_by(-100.0, 100.0);
    robot.release();
    robot.advance_millis(8);
    robot.gallery_closed();
    robot.advance_millis(300);
    assert_all_resting(&robot);
}

#[test]
fn new_press_cancels_a_pending_staggered_restore() {
    let mut robot = base_robot();
    robot.press(CornerId::TopLeft);
    robot.drag_by(250.0, 250.0);
    robot.release();
    robot.advance_millis(600);
    robot.gallery_closed();

    // Mid-reset: the active corner is still shrinking, the sibling-restore
    // timer is still pending.
    robot.advance_millis(100);
    robot.press(CornerId::TopLeft);
    // Settling the pending reset puts the siblings straight at resting.
    assert_corner_at(&robot, CornerId::TopRight, 95.0);
    assert_corner_at(&robot, CornerId::BottomLeft, 95.0);
    assert_corner_at(&robot, CornerId::BottomRight, 95.0);

    robot.release();
    // Long after the cancelled timer's due time, the siblings have never
    // been zeroed and re-animated; they sit exactly at resting.
    robot.advance_millis(600);
    assert_all_resting(&robot);
}

#[test]
fn resize_recomputes_config_and_resets_uniformly() {
    let mut robot = base_robot();
    robot.press(CornerId::TopLeft);
    robot.drag_by(100.0, 100.0);
    // Resize mid-drag aborts the session and restores selection.
    robot.resize(800.0, 1400.0);
    assert_eq!(robot.selection_changes(), vec![false, true]);

    // Tall narrow viewport clamps the scale at 0.65: initial 62.
    assert_eq!(robot.config().initial_size, 62);
    robot.advance_millis(300);
    assert_all_resting(&robot);
}

#[test]
fn pointer_cancel_restores_selection_and_snaps_back() {
    let mut robot = base_robot();
    robot.press(CornerId::BottomRight);
    robot.drag_by(-80.0, -80.0);
    robot.cancel_pointer();
    assert_eq!(robot.selection_changes(), vec![false, true]);
    robot.advance_millis(200);
    assert_corner_at(&robot, CornerId::BottomRight, 95.0);
    assert!(robot.committed_categories().is_empty());
}

#[test]
fn press_outside_any_fold_does_nothing() {
    let mut robot = base_robot();
    robot.take_effects();
    robot.press_at(pagefold_geometry::Point::new(700.0, 500.0));
    assert!(robot.sounds().is_empty());
    assert_eq!(robot.controller().phase(), DragPhase::Idle);
}
