use crate::animation::ease::Ease;
use crate::foundation::error::{ScrollsyncError, ScrollsyncResult};

/// A time-based value animation from `from` to `to`.
///
/// Tweens are pure descriptions sampled by elapsed time; they hold no clock of
/// their own, so callers decide when time advances and sampling is fully
/// deterministic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    /// Start value.
    pub from: f64,
    /// End value.
    pub to: f64,
    /// Active duration in seconds, after the delay.
    pub duration_secs: f64,
    /// Delay before the tween starts producing values.
    pub delay_secs: f64,
    /// Easing applied to normalized elapsed time.
    pub ease: Ease,
}

impl Tween {
    /// Create a validated tween.
    pub fn new(
        from: f64,
        to: f64,
        duration_secs: f64,
        delay_secs: f64,
        ease: Ease,
    ) -> ScrollsyncResult<Self> {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(ScrollsyncError::animation("Tween duration must be > 0"));
        }
        if !delay_secs.is_finite() || delay_secs < 0.0 {
            return Err(ScrollsyncError::animation("Tween delay must be >= 0"));
        }
        if !from.is_finite() || !to.is_finite() {
            return Err(ScrollsyncError::animation("Tween endpoints must be finite"));
        }
        Ok(Self {
            from,
            to,
            duration_secs,
            delay_secs,
            ease,
        })
    }

    /// Sample the tween at `elapsed_secs` since it was started.
    ///
    /// Returns `None` while still inside the delay window, so a delayed tween
    /// never overwrites whatever the caller is currently displaying. Past the
    /// end it keeps returning `to`.
    pub fn sample(&self, elapsed_secs: f64) -> Option<f64> {
        let active = elapsed_secs - self.delay_secs;
        if active < 0.0 {
            return None;
        }
        let t = (active / self.duration_secs).clamp(0.0, 1.0);
        let eased = self.ease.apply(t);
        Some(self.from + (self.to - self.from) * eased)
    }

    /// Return `true` once the tween has played through delay plus duration.
    pub fn is_done(&self, elapsed_secs: f64) -> bool {
        elapsed_secs >= self.delay_secs + self.duration_secs
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
