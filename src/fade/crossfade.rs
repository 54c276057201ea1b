use crate::foundation::core::{OpacityPair, ScrollOffset, SectionExtent};
use crate::progress::mapper::PhaseMap;

/// Authoritative cross-fade state between the 3D plane and the content layer.
///
/// The pair is recomputed from scratch on every scroll event (and once eagerly
/// at session start, so a mid-page reload lands in the correct state). It is
/// never integrated over time, which keeps redundant event delivery idempotent.
#[derive(Clone, Copy, Debug)]
pub struct CrossfadeController {
    map: PhaseMap,
    extent: SectionExtent,
    pair: OpacityPair,
}

impl CrossfadeController {
    /// Create the controller and eagerly derive state for `offset`.
    pub fn new(map: PhaseMap, extent: SectionExtent, offset: ScrollOffset) -> Self {
        let mut c = Self {
            map,
            extent,
            pair: OpacityPair::plane_only(),
        };
        c.recompute(offset);
        c
    }

    /// Recompute both channels from the given offset. O(1), no side reads.
    pub fn recompute(&mut self, offset: ScrollOffset) -> OpacityPair {
        let eased = self.map.map(offset, self.extent);
        self.pair = OpacityPair::from_content_progress(eased);
        self.pair
    }

    /// Swap in a new extent (resize) and re-derive from `offset`.
    pub fn set_extent(&mut self, extent: SectionExtent, offset: ScrollOffset) -> OpacityPair {
        self.extent = extent;
        self.recompute(offset)
    }

    /// Last derived pair.
    pub fn pair(&self) -> OpacityPair {
        self.pair
    }

    /// Extent currently in force.
    pub fn extent(&self) -> SectionExtent {
        self.extent
    }
}

/// Cosmetic presentation smoothing for the cross-fade pair.
///
/// Discrete scroll events make the authoritative pair jump; the smoother
/// trails it with an exponential approach (roughly settling in
/// `settle_secs`) purely for display. It is advanced in the frame domain and
/// never feeds back into the authoritative value.
#[derive(Clone, Copy, Debug)]
pub struct FadeSmoother {
    settle_secs: f64,
    displayed_content: f64,
}

impl FadeSmoother {
    /// Create a smoother with the given settle time; non-positive disables
    /// smoothing (display always equals the target).
    pub fn new(settle_secs: f64) -> Self {
        Self {
            settle_secs: if settle_secs.is_finite() {
                settle_secs.max(0.0)
            } else {
                0.0
            },
            displayed_content: 0.0,
        }
    }

    /// Jump the displayed pair straight to `target` (used at start()).
    pub fn snap(&mut self, target: OpacityPair) {
        self.displayed_content = target.content;
    }

    /// Advance the displayed pair toward `target` by `dt_secs`.
    ///
    /// A zero or non-finite `dt_secs` leaves the displayed pair where it is.
    pub fn advance(&mut self, target: OpacityPair, dt_secs: f64) -> OpacityPair {
        if self.settle_secs <= 0.0 {
            self.displayed_content = target.content;
            return self.displayed();
        }
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return self.displayed();
        }
        // 3 time constants ~= 95% settled within the settle window.
        let tau = self.settle_secs / 3.0;
        let blend = 1.0 - (-dt_secs / tau).exp();
        self.displayed_content += (target.content - self.displayed_content) * blend;
        self.displayed_content = self.displayed_content.clamp(0.0, 1.0);
        self.displayed()
    }

    /// Currently displayed pair; channels still sum to 1.
    pub fn displayed(&self) -> OpacityPair {
        OpacityPair {
            plane: 1.0 - self.displayed_content,
            content: self.displayed_content,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fade/crossfade.rs"]
mod tests;
