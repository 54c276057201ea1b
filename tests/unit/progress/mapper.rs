use super::*;

fn fade_map() -> PhaseMap {
    PhaseMap::new(0.7, 0.3, Ease::InOutQuad).unwrap()
}

fn extent() -> SectionExtent {
    // 2x an 800px viewport.
    SectionExtent(1600.0)
}

#[test]
fn raw_ratio_defines_degenerate_extent_as_zero() {
    assert_eq!(raw_ratio(ScrollOffset(500.0), SectionExtent(0.0)), 0.0);
    assert_eq!(raw_ratio(ScrollOffset(500.0), SectionExtent(-10.0)), 0.0);
    assert_eq!(raw_ratio(ScrollOffset(500.0), SectionExtent(f64::NAN)), 0.0);
    assert_eq!(raw_ratio(ScrollOffset(f64::NAN), extent()), 0.0);
}

#[test]
fn raw_ratio_is_unclamped() {
    assert_eq!(raw_ratio(ScrollOffset(3200.0), extent()), 2.0);
    assert_eq!(raw_ratio(ScrollOffset(-160.0), extent()), -0.1);
}

#[test]
fn progress_is_bounded_for_any_offset() {
    let map = fade_map();
    for off in [-500.0, 0.0, 100.0, 1119.9, 1120.0, 1400.0, 1600.0, 1e9] {
        let p = map.map(ScrollOffset(off), extent());
        assert!((0.0..=1.0).contains(&p.value()), "offset {off}");
    }
}

#[test]
fn phase_boundaries_are_exact() {
    let map = fade_map();
    // Phase starts at 70% of the extent and completes at 100%.
    assert_eq!(map.map(ScrollOffset(0.0), extent()), Progress::ZERO);
    assert_eq!(map.map(ScrollOffset(1120.0), extent()), Progress::ZERO);
    assert_eq!(map.map(ScrollOffset(1600.0), extent()), Progress::ONE);
    assert_eq!(map.map(ScrollOffset(5000.0), extent()), Progress::ONE);
}

#[test]
fn midpoint_of_the_phase_maps_to_half() {
    let map = fade_map();
    // 85% of the extent is the middle of the [0.7, 1.0] phase; the in-out
    // ease fixes its own midpoint.
    let p = map.map(ScrollOffset(1360.0), extent());
    assert!((p.value() - 0.5).abs() < 1e-12);
}

#[test]
fn increasing_offset_never_decreases_progress() {
    let map = fade_map();
    let mut last = -1.0;
    for step in 0..200 {
        let off = step as f64 * 10.0;
        let p = map.map(ScrollOffset(off), extent()).value();
        assert!(p >= last, "offset {off}");
        last = p;
    }
}

#[test]
fn mapping_is_idempotent() {
    let map = fade_map();
    let off = ScrollOffset(1234.5);
    assert_eq!(map.map(off, extent()), map.map(off, extent()));
}

#[test]
fn invalid_phase_constants_are_rejected() {
    assert!(PhaseMap::new(0.7, 0.0, Ease::InOutQuad).is_err());
    assert!(PhaseMap::new(0.7, -0.3, Ease::InOutQuad).is_err());
    assert!(PhaseMap::new(1.5, 0.3, Ease::InOutQuad).is_err());
    assert!(PhaseMap::new(f64::NAN, 0.3, Ease::InOutQuad).is_err());
}
