use crate::animation::interp::Interp;
use crate::foundation::core::{Progress, ScrollOffset, Viewport};

/// Document-space window over which an element's local progress runs 0 → 1.
///
/// Generalizes viewport-relative enter/exit offsets: progress starts when the
/// scroll offset reaches `start_px` and completes at `end_px`. A degenerate
/// window (`end_px <= start_px`) always yields progress 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementPhase {
    /// Scroll offset at which the element's phase begins.
    pub start_px: f64,
    /// Scroll offset at which the element's phase completes.
    pub end_px: f64,
}

impl ElementPhase {
    /// Derive the window from element bounds and viewport-relative fractions.
    ///
    /// The phase begins when the element's top is `enter_view_fraction` of the
    /// viewport height from entering, and completes once `exit_element_fraction`
    /// of the element's own height has scrolled past that line.
    pub fn from_bounds(
        element_top_px: f64,
        element_height_px: f64,
        viewport: Viewport,
        enter_view_fraction: f64,
        exit_element_fraction: f64,
    ) -> Self {
        let start_px = element_top_px - viewport.height_px * enter_view_fraction;
        let end_px = start_px + element_height_px * exit_element_fraction;
        Self { start_px, end_px }
    }

    /// Element-local progress at the given scroll offset.
    pub fn progress(&self, offset: ScrollOffset) -> Progress {
        let len = self.end_px - self.start_px;
        if !len.is_finite() || len <= 0.0 {
            return Progress::ZERO;
        }
        Progress::new((offset.0 - self.start_px) / len)
    }
}

/// A named decorative value bound to an element phase.
///
/// Evaluated in the scroll-event domain together with the cross-fade so the
/// two can never drift for a common offset.
#[derive(Clone, Debug)]
pub struct ElementTrack {
    /// Track name, unique within its element (`"y"`, `"scale"`, `"rotate"`, …).
    pub name: String,
    /// Phase window driving the track.
    pub phase: ElementPhase,
    /// Remap from phase progress to the output value.
    pub curve: Interp,
}

impl ElementTrack {
    /// Sample the track value at the given scroll offset.
    pub fn sample(&self, offset: ScrollOffset) -> f64 {
        self.curve.sample(self.phase.progress(offset).value())
    }
}
