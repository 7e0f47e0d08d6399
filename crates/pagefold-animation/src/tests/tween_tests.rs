use super::*;
use pagefold_geometry::CurlSize;

const MILLIS: u64 = 1_000_000;

#[test]
fn samples_endpoints_exactly() {
    let tween = Tween::new(10.0f32, 20.0, TweenSpec::linear(100), 0);
    assert_eq!(tween.sample(0), 10.0);
    assert_eq!(tween.sample(100 * MILLIS), 20.0);
    // Past the end stays clamped at the target.
    assert_eq!(tween.sample(250 * MILLIS), 20.0);
}

#[test]
fn linear_tween_interpolates_midway() {
    let tween = Tween::new(0.0f32, 100.0, TweenSpec::linear(200), 0);
    assert_eq!(tween.sample(100 * MILLIS), 50.0);
}

#[test]
fn delay_holds_the_start_value() {
    let spec = TweenSpec::linear(100).with_delay(50);
    let tween = Tween::new(5.0f32, 6.0, spec, 0);
    assert_eq!(tween.sample(49 * MILLIS), 5.0);
    assert!(!tween.is_finished(49 * MILLIS));
    assert_eq!(tween.sample(150 * MILLIS), 6.0);
    assert!(tween.is_finished(150 * MILLIS));
}

#[test]
fn finish_is_reported_at_full_progress() {
    let tween = Tween::new(0.0f32, 1.0, TweenSpec::linear(100), 500 * MILLIS);
    assert!(!tween.is_finished(599 * MILLIS));
    assert!(tween.is_finished(600 * MILLIS));
}

#[test]
fn zero_duration_snaps_immediately() {
    let tween = Tween::new(0.0f32, 1.0, TweenSpec::linear(0), 0);
    assert_eq!(tween.sample(1), 1.0);
    assert!(tween.is_finished(1));
}

#[test]
fn sampling_before_start_clamps_to_from() {
    let tween = Tween::new(3.0f32, 9.0, TweenSpec::linear(100), 1_000 * MILLIS);
    assert_eq!(tween.sample(0), 3.0);
}

#[test]
fn curl_size_lerps_componentwise() {
    let tween = Tween::new(
        CurlSize::new(0.0, 100.0),
        CurlSize::new(50.0, 0.0),
        TweenSpec::linear(100),
        0,
    );
    assert_eq!(tween.sample(50 * MILLIS), CurlSize::new(25.0, 50.0));
}

#[test]
fn duration_rule_picks_easing() {
    assert_eq!(TweenSpec::for_duration_secs(0.15).easing, Easing::EaseOut);
    assert_eq!(TweenSpec::for_duration_secs(0.3).easing, Easing::EaseOut);
    assert_eq!(
        TweenSpec::for_duration_secs(0.35).easing,
        Easing::FastOutSlowIn
    );
    assert_eq!(
        TweenSpec::for_duration_secs(0.6).easing,
        Easing::FastOutSlowIn
    );
    assert_eq!(TweenSpec::for_duration_secs(0.6).duration_millis, 600);
}
