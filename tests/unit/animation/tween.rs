use super::*;

fn tween() -> Tween {
    Tween::new(0.0, 50.0, 2.0, 0.5, Ease::Linear).unwrap()
}

#[test]
fn delay_window_produces_no_value() {
    let t = tween();
    assert_eq!(t.sample(0.0), None);
    assert_eq!(t.sample(0.49), None);
    assert_eq!(t.sample(0.5), Some(0.0));
}

#[test]
fn linear_progression_and_end_clamp() {
    let t = tween();
    assert_eq!(t.sample(1.5), Some(25.0));
    assert_eq!(t.sample(2.5), Some(50.0));
    assert_eq!(t.sample(100.0), Some(50.0));
}

#[test]
fn done_after_delay_plus_duration() {
    let t = tween();
    assert!(!t.is_done(2.49));
    assert!(t.is_done(2.5));
}

#[test]
fn ease_out_front_loads_the_motion() {
    let t = Tween::new(0.0, 100.0, 2.0, 0.0, Ease::OutCubic).unwrap();
    assert!(t.sample(1.0).unwrap() > 50.0);
}

#[test]
fn invalid_configurations_are_rejected() {
    assert!(Tween::new(0.0, 1.0, 0.0, 0.0, Ease::Linear).is_err());
    assert!(Tween::new(0.0, 1.0, -1.0, 0.0, Ease::Linear).is_err());
    assert!(Tween::new(0.0, 1.0, 1.0, -0.1, Ease::Linear).is_err());
    assert!(Tween::new(f64::NAN, 1.0, 1.0, 0.0, Ease::Linear).is_err());
    assert!(Tween::new(0.0, f64::INFINITY, 1.0, 0.0, Ease::Linear).is_err());
}
