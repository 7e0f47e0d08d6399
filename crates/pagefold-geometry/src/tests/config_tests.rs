use super::*;

#[test]
fn clamp_orders_bounds() {
    assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
    assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
    assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
}

#[test]
fn clamp_is_idempotent() {
    for value in [-3.0f32, 0.0, 0.65, 1.0, 1.45, 9.9] {
        let once = clamp(value, 0.65, 1.45);
        assert_eq!(clamp(once, 0.65, 1.45), once);
    }
}

#[test]
fn sixteen_nine_viewport_scales_to_1_1() {
    let scale = curl_scale(Viewport::new(1600.0, 900.0));
    assert!((scale - 1.1).abs() < 1e-5, "scale was {scale}");
}

#[test]
fn scale_is_bounded_for_extreme_aspects() {
    // Ultra-wide caps at 1.45, ultra-tall floors at 0.65.
    assert_eq!(curl_scale(Viewport::new(10_000.0, 900.0)), 1.45);
    assert_eq!(curl_scale(Viewport::new(300.0, 3000.0)), 0.65);
}

#[test]
fn zero_height_viewport_falls_back_to_unit_scale() {
    assert_eq!(curl_scale(Viewport::new(1600.0, 0.0)), 1.0);
}

#[test]
fn config_for_sixteen_nine_viewport() {
    let config = CurlConfig::for_viewport(Viewport::new(1600.0, 900.0));
    assert!((config.scale - 1.1).abs() < 1e-5);
    assert_eq!(config.initial_size, 105);
    assert_eq!(config.min_size, 13);
    assert_eq!(config.max_size, 374);
    assert_eq!(config.threshold, 220);
}

#[test]
fn config_ordering_holds_across_scales() {
    for (w, h) in [(1600.0, 900.0), (800.0, 1400.0), (3440.0, 1440.0)] {
        let config = CurlConfig::for_viewport(Viewport::new(w, h));
        assert!(config.min_size <= config.initial_size);
        assert!(config.initial_size <= config.max_size);
        assert!(config.min_size > 0);
    }
}
