use super::*;

#[test]
fn thousands_target_renders_floored_value_with_suffix() {
    let (format, target) = CounterFormat::resolve("50K+");
    assert_eq!(format, CounterFormat::Thousands);
    assert_eq!(target, 50);
    assert_eq!(format.render(37.0), "37K+");
    assert_eq!(format.render(37.9), "37K+");
}

#[test]
fn percent_target_renders_floored_value_with_suffix() {
    let (format, target) = CounterFormat::resolve("30%");
    assert_eq!(format, CounterFormat::Percent);
    assert_eq!(target, 30);
    assert_eq!(format.render(12.0), "12%");
}

#[test]
fn slash_target_always_renders_the_literal() {
    let (format, _) = CounterFormat::resolve("24/7");
    assert_eq!(format, CounterFormat::Literal("24/7".to_owned()));
    assert_eq!(format.render(0.0), "24/7");
    assert_eq!(format.render(123.0), "24/7");
    assert_eq!(format.render(246.9), "24/7");
}

#[test]
fn plain_target_renders_floored_value_with_plus() {
    let (format, target) = CounterFormat::resolve("100+");
    assert_eq!(format, CounterFormat::Plus);
    assert_eq!(target, 100);
    assert_eq!(format.render(100.0), "100+");
}

#[test]
fn digitless_target_degrades_to_zero() {
    let (format, target) = CounterFormat::resolve("soon");
    assert_eq!(format, CounterFormat::Plus);
    assert_eq!(target, 0);
    assert_eq!(format.render(0.0), "0+");
}

#[test]
fn digits_run_together_across_separators() {
    let (_, target) = CounterFormat::resolve("24/7");
    assert_eq!(target, 247);
}

#[test]
fn negative_running_values_floor_at_zero() {
    let (format, _) = CounterFormat::resolve("100+");
    assert_eq!(format.render(-3.0), "0+");
}
