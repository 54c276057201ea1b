use crate::counter::state::{Counter, CounterPhase};
use crate::fade::crossfade::{CrossfadeController, FadeSmoother};
use crate::foundation::core::{OpacityPair, Progress, ScrollOffset, SectionExtent, Viewport};
use crate::foundation::error::{ScrollsyncError, ScrollsyncResult};
use crate::page::model::ElementDef;
use crate::page::spec::PageSpec;
use crate::playback::clip::{CameraPose, ClipCursor, SceneCamera};
use crate::playback::driver::{PlaybackDriver, PlaybackStats, ScrubMap};
use crate::progress::element::{ElementPhase, ElementTrack};
use crate::progress::mapper::PhaseMap;
use crate::scroll::sampler::{ScrollSampler, ScrollSource};

/// Options controlling session behavior.
#[derive(Clone, Copy, Debug)]
pub struct PageSessionOpts {
    /// Trail the authoritative cross-fade pair with the cosmetic smoother.
    /// When disabled the displayed pair always equals the authoritative one.
    pub smooth_fade: bool,
    /// Skip clip cursor writes when the cursor would not move.
    pub elide_cursor_writes: bool,
}

impl Default for PageSessionOpts {
    fn default() -> Self {
        Self {
            smooth_fade: true,
            elide_cursor_writes: true,
        }
    }
}

/// Session statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Scroll events handled while started.
    pub scroll_events: u64,
    /// Frame ticks handled while started.
    pub frames: u64,
    /// Visibility observations handled while started.
    pub visibility_events: u64,
    /// Counter runs started by visibility entry.
    pub runs_started: u64,
    /// Counter runs cancelled by visibility exit or stop().
    pub runs_cancelled: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionState {
    Created,
    Started,
    Stopped,
}

struct ElementBinding {
    id: String,
    tracks: Vec<ElementTrack>,
    values: Vec<f64>,
}

/// Owned top-level controller for one page view.
///
/// The session is the single owner of every scroll-derived value; consumers
/// read immutable snapshots. It is constructed per page-view instance from a
/// validated [`PageSpec`] and holds no process-wide state.
///
/// Event delivery is split into two cooperative domains that are never fused:
///
/// - [`PageSession::on_scroll`] — event domain, O(1) arithmetic, recomputes
///   the cross-fade pair, element track values, and the cached scrub.
/// - [`PageSession::on_frame`] — frame domain, applies the cached scrub to
///   the clip cursor, advances counter tweens and the cosmetic smoother.
///
/// For any single offset both domains eventually reflect that offset exactly
/// once each, with no ordering guarantee between them.
pub struct PageSession {
    sampler: ScrollSampler,
    fade: CrossfadeController,
    smoother: FadeSmoother,
    driver: PlaybackDriver,
    counters: Vec<(String, Counter)>,
    element_defs: Vec<ElementDef>,
    elements: Vec<ElementBinding>,
    camera_pose: CameraPose,
    clip: Option<Box<dyn ClipCursor>>,
    section_multiplier: f64,
    last_offset: ScrollOffset,
    last_frame_secs: Option<f64>,
    state: SessionState,
    opts: PageSessionOpts,
    stats: SessionStats,
}

impl PageSession {
    /// Build a session from a validated spec and a platform scroll source.
    ///
    /// Construction front-loads all validation and format resolution; the
    /// per-event and per-frame paths cannot fail afterwards.
    pub fn new(
        spec: &PageSpec,
        source: Box<dyn ScrollSource>,
        opts: PageSessionOpts,
    ) -> ScrollsyncResult<Self> {
        spec.validate()?;
        let def = spec.def();

        let sampler = ScrollSampler::new(source);
        let sample = sampler.sample();
        let extent = sample.viewport.section_extent(def.section_multiplier);

        let fade_map = PhaseMap::new(def.fade.start_fraction, def.fade.span, def.fade.ease)?;
        let fade = CrossfadeController::new(fade_map, extent, sample.offset);
        let mut smoother = FadeSmoother::new(def.fade.smoothing_secs);
        smoother.snap(fade.pair());

        let scrub_map = ScrubMap::new(def.scrub.base, def.scrub.gain)?;
        let mut driver = PlaybackDriver::new(scrub_map, extent);
        driver.set_extent(extent, sample.offset);

        let mut counters = Vec::with_capacity(def.counters.len());
        for c in &def.counters {
            let counter = Counter::new(
                &c.target,
                c.duration_secs,
                c.delay_secs,
                c.visibility_threshold,
            )?;
            counters.push((c.id.clone(), counter));
        }

        let element_defs = def.elements.clone();
        let elements = build_elements(&element_defs, sample.viewport, sample.offset)?;

        Ok(Self {
            sampler,
            fade,
            smoother,
            driver,
            counters,
            element_defs,
            elements,
            camera_pose: def.camera,
            clip: None,
            section_multiplier: def.section_multiplier,
            last_offset: sample.offset,
            last_frame_secs: None,
            state: SessionState::Created,
            opts,
            stats: SessionStats::default(),
        })
    }

    /// Start the session: eager initial sample and the one-time camera pose.
    ///
    /// Sampling eagerly here establishes correct state for a mid-page reload
    /// before any scroll event arrives. Starting twice is an error; a stopped
    /// session cannot be restarted (sessions are per page-view).
    #[tracing::instrument(skip(self, camera))]
    pub fn start(&mut self, camera: &mut dyn SceneCamera) -> ScrollsyncResult<()> {
        match self.state {
            SessionState::Created => {}
            SessionState::Started => {
                return Err(ScrollsyncError::evaluation("session already started"));
            }
            SessionState::Stopped => {
                return Err(ScrollsyncError::evaluation(
                    "stopped session cannot be restarted",
                ));
            }
        }

        self.rederive_from_platform()?;
        self.smoother.snap(self.fade.pair());
        camera.set_pose(&self.camera_pose);
        self.state = SessionState::Started;
        tracing::debug!(offset = self.last_offset.0, "page session started");
        Ok(())
    }

    /// Stop the session: cancel in-flight counter runs, detach the clip, and
    /// turn every later event/frame delivery into a no-op.
    #[tracing::instrument(skip(self))]
    pub fn stop(&mut self) {
        if self.state != SessionState::Started {
            return;
        }
        for (_, counter) in &mut self.counters {
            if counter.active_generation().is_some() {
                counter.cancel();
                self.stats.runs_cancelled += 1;
            }
        }
        self.clip = None;
        self.state = SessionState::Stopped;
        tracing::debug!("page session stopped");
    }

    /// Attach the animation clip once the external asset resolves.
    ///
    /// Until then playback application is a no-op. Replacing a clip forces
    /// the next frame to write the cursor.
    pub fn attach_clip(&mut self, clip: Box<dyn ClipCursor>) {
        self.clip = Some(clip);
        self.driver.reset_applied();
    }

    /// Take the clip back out, if one is attached.
    pub fn detach_clip(&mut self) -> Option<Box<dyn ClipCursor>> {
        self.clip.take()
    }

    /// Event domain: handle one scroll notification.
    ///
    /// Cheap and idempotent; redundant delivery of the same offset derives
    /// the same state again. Ignored unless the session is started.
    pub fn on_scroll(&mut self, offset_px: f64) {
        if self.state != SessionState::Started {
            return;
        }
        let offset = ScrollOffset(offset_px);
        self.last_offset = offset;
        self.fade.recompute(offset);
        self.driver.note_scroll(offset);
        for binding in &mut self.elements {
            for (i, track) in binding.tracks.iter().enumerate() {
                binding.values[i] = track.sample(offset);
            }
        }
        self.stats.scroll_events += 1;
        tracing::trace!(offset = offset.0, "scroll event");
    }

    /// Frame domain: apply cached state once per rendered frame.
    ///
    /// `now_secs` is the host's frame clock; time never comes from a
    /// wall-clock read inside the engine. Ignored unless started.
    pub fn on_frame(&mut self, now_secs: f64) {
        if self.state != SessionState::Started {
            return;
        }
        let dt = match self.last_frame_secs {
            Some(prev) if now_secs > prev => now_secs - prev,
            _ => 0.0,
        };
        self.last_frame_secs = Some(now_secs);

        if !self.opts.elide_cursor_writes {
            self.driver.reset_applied();
        }
        self.driver.apply(self.clip.as_deref_mut());

        for (_, counter) in &mut self.counters {
            counter.tick(now_secs);
        }

        if self.opts.smooth_fade {
            self.smoother.advance(self.fade.pair(), dt);
        } else {
            self.smoother.snap(self.fade.pair());
        }
        self.stats.frames += 1;
    }

    /// Visibility domain: feed one counter's visible fraction.
    ///
    /// Unknown counter ids are ignored (the element may not carry a counter).
    pub fn on_visibility(&mut self, counter_id: &str, visible_fraction: f64, now_secs: f64) {
        if self.state != SessionState::Started {
            return;
        }
        self.stats.visibility_events += 1;
        let Some((_, counter)) = self.counters.iter_mut().find(|(id, _)| id == counter_id) else {
            tracing::debug!(counter_id, "visibility for unknown counter ignored");
            return;
        };

        let was_active = counter.active_generation().is_some();
        let started = counter.observe_visibility(visible_fraction, now_secs);
        if started.is_some() {
            self.stats.runs_started += 1;
        } else if was_active && counter.active_generation().is_none() {
            self.stats.runs_cancelled += 1;
        }
    }

    /// Re-derive every scroll-coupled value after a viewport resize.
    #[tracing::instrument(skip(self))]
    pub fn resize(&mut self) -> ScrollsyncResult<()> {
        if self.state != SessionState::Started {
            return Ok(());
        }
        self.rederive_from_platform()
    }

    fn rederive_from_platform(&mut self) -> ScrollsyncResult<()> {
        let sample = self.sampler.sample();
        let extent: SectionExtent = sample.viewport.section_extent(self.section_multiplier);
        self.last_offset = sample.offset;
        self.fade.set_extent(extent, sample.offset);
        self.driver.set_extent(extent, sample.offset);
        self.elements = build_elements(&self.element_defs, sample.viewport, sample.offset)?;
        Ok(())
    }

    /// Authoritative cross-fade pair for the last handled offset.
    pub fn opacities(&self) -> OpacityPair {
        self.fade.pair()
    }

    /// Cosmetically smoothed pair for display.
    pub fn displayed_opacities(&self) -> OpacityPair {
        self.smoother.displayed()
    }

    /// Cached playback scrub progress.
    pub fn scrub(&self) -> Progress {
        self.driver.scrub()
    }

    /// Displayed text of a counter, if it exists.
    pub fn counter_display(&self, counter_id: &str) -> Option<&str> {
        self.counters
            .iter()
            .find(|(id, _)| id == counter_id)
            .map(|(_, c)| c.displayed())
    }

    /// Lifecycle phase of a counter, if it exists.
    pub fn counter_phase(&self, counter_id: &str) -> Option<CounterPhase> {
        self.counters
            .iter()
            .find(|(id, _)| id == counter_id)
            .map(|(_, c)| c.phase())
    }

    /// Last derived value of an element track, if it exists.
    pub fn track_value(&self, element_id: &str, track_name: &str) -> Option<f64> {
        let binding = self.elements.iter().find(|b| b.id == element_id)?;
        let idx = binding
            .tracks
            .iter()
            .position(|t| t.name == track_name)?;
        Some(binding.values[idx])
    }

    /// Whether the session is currently started.
    pub fn is_started(&self) -> bool {
        self.state == SessionState::Started
    }

    /// Session statistics so far.
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Playback driver statistics so far.
    pub fn playback_stats(&self) -> PlaybackStats {
        self.driver.stats()
    }
}

impl std::fmt::Debug for PageSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageSession")
            .field("state", &self.state)
            .field("last_offset", &self.last_offset)
            .field("counters", &self.counters.len())
            .field("elements", &self.elements.len())
            .finish_non_exhaustive()
    }
}

fn build_elements(
    defs: &[ElementDef],
    viewport: Viewport,
    offset: ScrollOffset,
) -> ScrollsyncResult<Vec<ElementBinding>> {
    let mut out = Vec::with_capacity(defs.len());
    for def in defs {
        let phase = ElementPhase::from_bounds(
            def.top_px,
            def.height_px,
            viewport,
            def.enter_view_fraction,
            def.exit_element_fraction,
        );
        let mut tracks = Vec::with_capacity(def.tracks.len());
        let mut values = Vec::with_capacity(def.tracks.len());
        for t in &def.tracks {
            let track = ElementTrack {
                name: t.name.clone(),
                phase,
                curve: crate::animation::interp::Interp::new(t.input.clone(), t.output.clone())?,
            };
            values.push(track.sample(offset));
            tracks.push(track);
        }
        out.push(ElementBinding {
            id: def.id.clone(),
            tracks,
            values,
        });
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/session/page_session.rs"]
mod tests;
