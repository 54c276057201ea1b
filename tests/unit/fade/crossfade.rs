use super::*;
use crate::animation::ease::Ease;
use crate::foundation::core::OPACITY_SUM_EPSILON;

fn controller_at(offset_px: f64) -> CrossfadeController {
    let map = PhaseMap::new(0.7, 0.3, Ease::InOutQuad).unwrap();
    CrossfadeController::new(map, SectionExtent(1600.0), ScrollOffset(offset_px))
}

#[test]
fn construction_is_eager() {
    // Mid-page reload: state is correct before any scroll event arrives.
    let c = controller_at(1600.0);
    assert_eq!(c.pair().content, 1.0);
    assert_eq!(c.pair().plane, 0.0);
}

#[test]
fn boundaries_are_exact() {
    let mut c = controller_at(0.0);
    assert_eq!(c.pair().content, 0.0);
    assert_eq!(c.pair().plane, 1.0);

    // Up to 70% of the extent nothing fades.
    c.recompute(ScrollOffset(1120.0));
    assert_eq!(c.pair().content, 0.0);

    c.recompute(ScrollOffset(1600.0));
    assert_eq!(c.pair().content, 1.0);
    assert_eq!(c.pair().plane, 0.0);
}

#[test]
fn channels_sum_to_one_for_any_offset() {
    let mut c = controller_at(0.0);
    for off in [-800.0, -1.0, 0.0, 400.0, 1200.0, 1333.3, 1600.0, 9999.0] {
        let pair = c.recompute(ScrollOffset(off));
        assert!((pair.sum() - 1.0).abs() <= OPACITY_SUM_EPSILON, "offset {off}");
        assert!((0.0..=1.0).contains(&pair.content), "offset {off}");
        assert!((0.0..=1.0).contains(&pair.plane), "offset {off}");
    }
}

#[test]
fn content_is_monotonic_in_offset() {
    let mut c = controller_at(0.0);
    let mut last = -1.0;
    for step in 0..170 {
        let pair = c.recompute(ScrollOffset(step as f64 * 10.0));
        assert!(pair.content >= last);
        last = pair.content;
    }
}

#[test]
fn redundant_events_are_idempotent() {
    let mut c = controller_at(0.0);
    let a = c.recompute(ScrollOffset(1300.0));
    let b = c.recompute(ScrollOffset(1300.0));
    assert_eq!(a, b);
}

#[test]
fn resize_rederives_from_the_new_extent() {
    let mut c = controller_at(1600.0);
    assert_eq!(c.pair().content, 1.0);
    // Taller viewport: the same offset is now mid-fade.
    let pair = c.set_extent(SectionExtent(2000.0), ScrollOffset(1600.0));
    assert!(pair.content > 0.0 && pair.content < 1.0);
    assert_eq!(c.extent(), SectionExtent(2000.0));
}

#[test]
fn degenerate_extent_freezes_at_plane_only() {
    let mut c = controller_at(0.0);
    let pair = c.set_extent(SectionExtent(0.0), ScrollOffset(500.0));
    assert_eq!(pair.content, 0.0);
    assert_eq!(pair.plane, 1.0);
}

#[test]
fn smoother_trails_and_converges() {
    let mut s = FadeSmoother::new(0.3);
    let target = OpacityPair::from_content_progress(crate::foundation::core::Progress::ONE);
    s.snap(OpacityPair::plane_only());

    let first = s.advance(target, 0.016);
    assert!(first.content > 0.0 && first.content < 1.0);

    for _ in 0..300 {
        s.advance(target, 0.016);
    }
    assert!((s.displayed().content - 1.0).abs() < 1e-6);
    assert!((s.displayed().sum() - 1.0).abs() <= OPACITY_SUM_EPSILON);
}

#[test]
fn zero_settle_time_disables_smoothing() {
    let mut s = FadeSmoother::new(0.0);
    let target = OpacityPair::from_content_progress(crate::foundation::core::Progress::new(0.4));
    let shown = s.advance(target, 0.016);
    assert_eq!(shown.content, target.content);
}

#[test]
fn snap_jumps_to_the_target() {
    let mut s = FadeSmoother::new(0.3);
    let target = OpacityPair::from_content_progress(crate::foundation::core::Progress::new(0.8));
    s.snap(target);
    assert_eq!(s.displayed().content, target.content);
}
