use crate::foundation::error::{ScrollsyncError, ScrollsyncResult};

/// Pair-sum tolerance used by the cross-fade invariant.
pub const OPACITY_SUM_EPSILON: f64 = 1e-9;

/// Vertical scroll distance in device pixels.
///
/// Mutated externally by user interaction and read-only to this engine.
/// Negative values occur under elastic/bounce scrolling on some platforms and
/// are tolerated everywhere downstream.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollOffset(pub f64);

impl ScrollOffset {
    /// Zero offset (top of page).
    pub const TOP: Self = Self(0.0);
}

/// Scroll distance over which a scroll-coupled phase plays out, in pixels.
///
/// Usually derived from the viewport height times a section multiplier. A
/// non-positive or non-finite extent is a degenerate viewport: every ratio
/// over it is defined as 0 rather than dividing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent(pub f64);

impl SectionExtent {
    /// Return `true` when ratios over this extent are well defined.
    pub fn is_usable(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

/// Viewport geometry snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Viewport height in device pixels.
    pub height_px: f64,
}

impl Viewport {
    /// Derive the section extent as `height × multiplier`.
    pub fn section_extent(self, multiplier: f64) -> SectionExtent {
        SectionExtent(self.height_px * multiplier)
    }
}

/// Normalized progress through a named scroll phase, clamped to `[0, 1]`.
///
/// Progress values are always derived from `(offset, extent)` inputs and never
/// mutated as free-running state.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Progress(f64);

impl Progress {
    /// Phase not yet entered.
    pub const ZERO: Self = Self(0.0);
    /// Phase fully complete.
    pub const ONE: Self = Self(1.0);

    /// Clamp `t` into `[0, 1]`. Non-finite input collapses to 0.
    pub fn new(t: f64) -> Self {
        if t.is_finite() {
            Self(t.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }

    /// Inner value in `[0, 1]`.
    pub fn value(self) -> f64 {
        self.0
    }

    /// `1 − progress`.
    pub fn complement(self) -> Self {
        Self(1.0 - self.0)
    }
}

/// Cross-fade opacity channels.
///
/// Constructed only from a [`Progress`], so `plane + content == 1` holds
/// within [`OPACITY_SUM_EPSILON`] by construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpacityPair {
    /// Opacity of the fixed 3D plane layer.
    pub plane: f64,
    /// Opacity of the content section fading in over it.
    pub content: f64,
}

impl OpacityPair {
    /// Build the pair from content-side fade progress.
    pub fn from_content_progress(p: Progress) -> Self {
        Self {
            plane: p.complement().value(),
            content: p.value(),
        }
    }

    /// Initial state: plane fully visible, content hidden.
    pub fn plane_only() -> Self {
        Self::from_content_progress(Progress::ZERO)
    }

    /// Channel sum, for invariant checks.
    pub fn sum(self) -> f64 {
        self.plane + self.content
    }
}

/// Validate that a configured fraction is finite and within `[0, 1]`.
pub(crate) fn check_unit_fraction(name: &str, v: f64) -> ScrollsyncResult<()> {
    if !v.is_finite() || !(0.0..=1.0).contains(&v) {
        return Err(ScrollsyncError::validation(format!(
            "{name} must be within [0, 1], got {v}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
