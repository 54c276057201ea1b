use crate::animation::ease::Ease;
use crate::foundation::core::{Progress, ScrollOffset, SectionExtent, check_unit_fraction};
use crate::foundation::error::{ScrollsyncError, ScrollsyncResult};

/// Raw scroll ratio `offset / extent`.
///
/// A degenerate extent (non-positive or non-finite) yields 0 instead of
/// dividing; a non-finite offset does too. The result is unclamped, so
/// callers see over-scroll and negative ratios.
pub fn raw_ratio(offset: ScrollOffset, extent: SectionExtent) -> f64 {
    if !extent.is_usable() || !offset.0.is_finite() {
        return 0.0;
    }
    offset.0 / extent.0
}

/// Pure mapping from a raw scroll ratio to eased phase progress.
///
/// The phase occupies `[start_fraction, start_fraction + span]` of the raw
/// ratio; inside it the phase-local ratio is clamped to `[0, 1]` and shaped by
/// `ease`. Mapping is deterministic and idempotent, callable at arbitrary
/// sampling rates without accumulating error.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseMap {
    /// Fraction of the raw ratio at which the phase begins.
    pub start_fraction: f64,
    /// Fraction of the raw ratio over which the phase completes, `> 0`.
    pub span: f64,
    /// Easing applied to the clamped phase-local ratio.
    pub ease: Ease,
}

impl PhaseMap {
    /// Create a validated phase mapping.
    pub fn new(start_fraction: f64, span: f64, ease: Ease) -> ScrollsyncResult<Self> {
        let map = Self {
            start_fraction,
            span,
            ease,
        };
        map.validate()?;
        Ok(map)
    }

    /// Validate phase constants.
    pub fn validate(&self) -> ScrollsyncResult<()> {
        check_unit_fraction("PhaseMap start_fraction", self.start_fraction)?;
        if !self.span.is_finite() || self.span <= 0.0 {
            return Err(ScrollsyncError::validation("PhaseMap span must be > 0"));
        }
        Ok(())
    }

    /// Map a scroll offset over a section extent to eased phase progress.
    pub fn map(&self, offset: ScrollOffset, extent: SectionExtent) -> Progress {
        let raw = raw_ratio(offset, extent);
        let local = if self.span > 0.0 {
            (raw - self.start_fraction) / self.span
        } else {
            // Unvalidated degenerate span: step at the phase start.
            if raw < self.start_fraction { 0.0 } else { 1.0 }
        };
        let clamped = Progress::new(local);
        Progress::new(self.ease.apply(clamped.value()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/mapper.rs"]
mod tests;
