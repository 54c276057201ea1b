use crate::foundation::core::{Progress, ScrollOffset, SectionExtent, check_unit_fraction};
use crate::foundation::error::{ScrollsyncError, ScrollsyncResult};
use crate::playback::clip::ClipCursor;
use crate::progress::mapper::raw_ratio;

/// Affine remap from raw scroll ratio to scrub progress.
///
/// `scrub = clamp(base + raw × gain, 0, 1)`. The default base of 0.2 starts
/// the clip 20% pre-advanced, an already-moving subject at page load.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrubMap {
    /// Scrub progress at raw ratio 0.
    pub base: f64,
    /// Scrub progress gained per unit of raw ratio.
    pub gain: f64,
}

impl Default for ScrubMap {
    fn default() -> Self {
        Self {
            base: 0.2,
            gain: 0.8,
        }
    }
}

impl ScrubMap {
    /// Create a validated scrub mapping.
    pub fn new(base: f64, gain: f64) -> ScrollsyncResult<Self> {
        let map = Self { base, gain };
        map.validate()?;
        Ok(map)
    }

    /// Validate scrub constants.
    pub fn validate(&self) -> ScrollsyncResult<()> {
        check_unit_fraction("ScrubMap base", self.base)?;
        if !self.gain.is_finite() {
            return Err(ScrollsyncError::validation("ScrubMap gain must be finite"));
        }
        Ok(())
    }

    /// Map a raw scroll ratio to clamped scrub progress.
    pub fn scrub(&self, raw: f64) -> Progress {
        Progress::new(self.base + raw * self.gain)
    }
}

/// Playback driver statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackStats {
    /// Scroll events that refreshed the cached scrub.
    pub scroll_events: u64,
    /// Frame ticks handled.
    pub frames: u64,
    /// Cursor writes actually issued to the clip.
    pub cursor_writes: u64,
    /// Frame ticks that skipped the write because the cursor was unchanged.
    pub writes_elided: u64,
}

/// Scrubs an external animation clip from cached scroll-derived progress.
///
/// Input sampling and application are decoupled: scroll events only refresh
/// the cached scrub value, and the clip cursor is written once per rendered
/// frame from that cache. However events and frames interleave, the cursor
/// reflects the latest known scroll state by the next frame.
#[derive(Clone, Copy, Debug)]
pub struct PlaybackDriver {
    map: ScrubMap,
    extent: SectionExtent,
    scrub: Progress,
    last_written_secs: Option<f64>,
    stats: PlaybackStats,
}

impl PlaybackDriver {
    /// Create a driver with the cached scrub at the map's base value.
    pub fn new(map: ScrubMap, extent: SectionExtent) -> Self {
        Self {
            map,
            extent,
            scrub: map.scrub(0.0),
            last_written_secs: None,
            stats: PlaybackStats::default(),
        }
    }

    /// Event domain: refresh the cached scrub from a scroll offset. O(1).
    pub fn note_scroll(&mut self, offset: ScrollOffset) {
        self.scrub = self.map.scrub(raw_ratio(offset, self.extent));
        self.stats.scroll_events += 1;
    }

    /// Swap in a new extent (resize) and re-derive the cache from `offset`.
    pub fn set_extent(&mut self, extent: SectionExtent, offset: ScrollOffset) {
        self.extent = extent;
        self.scrub = self.map.scrub(raw_ratio(offset, self.extent));
    }

    /// Frame domain: write `duration × scrub` into the clip cursor.
    ///
    /// An absent clip (asset still loading) is a no-op. The write is clamped
    /// to the clip duration and elided when the cursor would not move.
    pub fn apply(&mut self, clip: Option<&mut (dyn ClipCursor + 'static)>) {
        self.stats.frames += 1;
        let Some(clip) = clip else {
            return;
        };

        let duration = clip.duration_secs();
        if !duration.is_finite() || duration <= 0.0 {
            return;
        }

        let target = (duration * self.scrub.value()).min(duration);
        if self.last_written_secs == Some(target) {
            self.stats.writes_elided += 1;
            return;
        }
        clip.set_time_secs(target);
        self.last_written_secs = Some(target);
        self.stats.cursor_writes += 1;
    }

    /// Forget the last written cursor, forcing the next apply to write.
    /// Used when a clip is attached or replaced.
    pub fn reset_applied(&mut self) {
        self.last_written_secs = None;
    }

    /// Cached scrub progress.
    pub fn scrub(&self) -> Progress {
        self.scrub
    }

    /// Driver statistics so far.
    pub fn stats(&self) -> PlaybackStats {
        self.stats
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/driver.rs"]
mod tests;
