use super::*;
use pagefold_geometry::{CornerId, CurlSize, Point};

#[test]
fn new_session_has_not_moved() {
    let session = DragSession::new(
        CornerId::TopLeft,
        Point::new(10.0, 12.0),
        CurlSize::splat(95.0),
    );
    assert!(!session.has_moved);
    assert_eq!(session.base, CurlSize::splat(95.0));
}

#[test]
fn tap_wins_over_any_size() {
    // Without movement the size is irrelevant, even past the threshold.
    assert_eq!(
        CommitOutcome::decide(false, 0.0, 200.0),
        CommitOutcome::Tap
    );
    assert_eq!(
        CommitOutcome::decide(false, 340.0, 200.0),
        CommitOutcome::Tap
    );
}

#[test]
fn threshold_is_inclusive() {
    assert_eq!(
        CommitOutcome::decide(true, 200.0, 200.0),
        CommitOutcome::Commit
    );
    assert_eq!(
        CommitOutcome::decide(true, 199.9, 200.0),
        CommitOutcome::Cancel
    );
    assert_eq!(
        CommitOutcome::decide(true, 340.0, 200.0),
        CommitOutcome::Commit
    );
}
