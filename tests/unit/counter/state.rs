use super::*;

fn counter() -> Counter {
    Counter::new("50K+", 2.0, 0.5, 0.8).unwrap()
}

#[test]
fn starts_idle_displaying_zero() {
    let c = counter();
    assert_eq!(c.phase(), CounterPhase::Idle);
    assert_eq!(c.displayed(), "0");
    assert_eq!(c.target(), 50);
    assert_eq!(c.active_generation(), None);
}

#[test]
fn entering_visibility_starts_a_run() {
    let mut c = counter();
    let generation = c.observe_visibility(0.9, 10.0);
    assert_eq!(generation, Some(RunGeneration(0)));
    assert_eq!(c.phase(), CounterPhase::Running);
}

#[test]
fn below_threshold_observations_do_nothing() {
    let mut c = counter();
    assert_eq!(c.observe_visibility(0.5, 10.0), None);
    assert_eq!(c.phase(), CounterPhase::Idle);
}

#[test]
fn display_is_frozen_through_the_delay_window() {
    let mut c = counter();
    c.observe_visibility(1.0, 10.0);
    c.tick(10.25); // still inside the 0.5s delay
    assert_eq!(c.displayed(), "0");
    c.tick(10.5);
    assert_eq!(c.displayed(), "0K+");
}

#[test]
fn run_completes_at_the_target() {
    let mut c = counter();
    c.observe_visibility(1.0, 0.0);
    c.tick(1.5);
    c.tick(2.5); // delay 0.5 + duration 2.0
    assert_eq!(c.phase(), CounterPhase::Settled);
    assert_eq!(c.displayed(), "50K+");
    assert_eq!(c.active_generation(), None);
}

#[test]
fn leaving_view_cancels_and_freezes() {
    let mut c = counter();
    c.observe_visibility(1.0, 0.0);
    c.tick(1.5);
    let frozen = c.displayed().to_owned();
    assert_ne!(frozen, "50K+");

    c.observe_visibility(0.1, 1.6);
    assert_eq!(c.phase(), CounterPhase::Idle);
    assert_eq!(c.displayed(), frozen);

    // A tick after cancellation must not write.
    c.tick(5.0);
    assert_eq!(c.displayed(), frozen);
}

#[test]
fn re_entry_restarts_from_zero_and_settles_again() {
    let mut c = counter();
    c.observe_visibility(1.0, 0.0);
    c.tick(2.5);
    assert_eq!(c.phase(), CounterPhase::Settled);
    assert_eq!(c.displayed(), "50K+");

    c.observe_visibility(0.0, 3.0);
    let generation = c.observe_visibility(1.0, 4.0);
    assert_eq!(generation, Some(RunGeneration(1)));
    assert_eq!(c.phase(), CounterPhase::Running);

    c.tick(4.5);
    assert_eq!(c.displayed(), "0K+");
    c.tick(6.5);
    assert_eq!(c.phase(), CounterPhase::Settled);
    assert_eq!(c.displayed(), "50K+");
}

#[test]
fn re_entry_supersedes_an_in_flight_run() {
    let mut c = counter();
    c.observe_visibility(1.0, 0.0);
    c.observe_visibility(0.0, 1.0);
    let generation = c.observe_visibility(1.0, 2.0);
    assert_eq!(generation, Some(RunGeneration(1)));
    // Samples relative to the new start, not the superseded one.
    c.tick(2.5);
    assert_eq!(c.displayed(), "0K+");
}

#[test]
fn cancel_after_completion_is_a_no_op() {
    let mut c = counter();
    c.observe_visibility(1.0, 0.0);
    c.tick(2.5);
    assert_eq!(c.phase(), CounterPhase::Settled);
    c.cancel();
    assert_eq!(c.phase(), CounterPhase::Settled);
    assert_eq!(c.displayed(), "50K+");
}

#[test]
fn literal_counter_always_shows_the_source_text() {
    let mut c = Counter::new("24/7", 2.0, 0.0, 0.8).unwrap();
    c.observe_visibility(1.0, 0.0);
    c.tick(0.5);
    assert_eq!(c.displayed(), "24/7");
    c.tick(2.0);
    assert_eq!(c.displayed(), "24/7");
    assert_eq!(c.phase(), CounterPhase::Settled);
}

#[test]
fn invalid_configuration_is_rejected() {
    assert!(Counter::new("50K+", 0.0, 0.0, 0.8).is_err());
    assert!(Counter::new("50K+", 2.0, -1.0, 0.8).is_err());
    assert!(Counter::new("50K+", 2.0, 0.0, 1.5).is_err());
}
