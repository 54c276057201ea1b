use crate::foundation::core::check_unit_fraction;
use crate::foundation::error::ScrollsyncResult;

/// Default visible-area fraction that arms a counter.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.8;

/// Edge produced when an element's visible fraction crosses the threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityEdge {
    /// The element just became sufficiently visible.
    Entered,
    /// The element just stopped being sufficiently visible.
    Left,
}

/// Repeatable threshold detector over an element's visible fraction.
///
/// Every crossing produces an edge; there is no one-shot latch, matching
/// `once: false` observer semantics.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityGate {
    threshold: f64,
    visible: bool,
}

impl VisibilityGate {
    /// Create a gate with the given threshold in `[0, 1]`.
    pub fn new(threshold: f64) -> ScrollsyncResult<Self> {
        check_unit_fraction("VisibilityGate threshold", threshold)?;
        Ok(Self {
            threshold,
            visible: false,
        })
    }

    /// Feed the current visible fraction; returns an edge on transitions.
    ///
    /// Redundant observations on the same side of the threshold return `None`,
    /// so burst delivery is idempotent.
    pub fn observe(&mut self, visible_fraction: f64) -> Option<VisibilityEdge> {
        let now_visible = visible_fraction.is_finite() && visible_fraction >= self.threshold;
        if now_visible == self.visible {
            return None;
        }
        self.visible = now_visible;
        Some(if now_visible {
            VisibilityEdge::Entered
        } else {
            VisibilityEdge::Left
        })
    }

    /// Whether the gate currently considers the element visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
