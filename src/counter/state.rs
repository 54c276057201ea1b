use crate::animation::ease::Ease;
use crate::animation::tween::Tween;
use crate::counter::format::CounterFormat;
use crate::counter::visibility::{VisibilityEdge, VisibilityGate};
use crate::foundation::error::ScrollsyncResult;

/// Lifecycle phase of a counter's count-up animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterPhase {
    /// Not animating; display frozen at its last value.
    Idle,
    /// A count-up run is in flight (possibly still in its delay window).
    Running,
    /// The most recent run completed and reached the target.
    Settled,
}

/// Generation stamp of one count-up run.
///
/// Each (re)start bumps the generation; cancellation and completion retire
/// it. A retired generation can never write the display again, so a stale
/// timer firing after a newer run has started is structurally inert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunGeneration(pub u64);

#[derive(Clone, Copy, Debug)]
struct ActiveRun {
    tween: Tween,
    started_at_secs: f64,
    generation: RunGeneration,
}

/// Visibility-gated count-up display for one element.
///
/// Entering visibility (re)starts the run from 0; leaving cancels it and
/// freezes the display. There is no permanent settled latch: a counter that
/// completed, left view, and re-entered counts up again to the same target.
#[derive(Clone, Debug)]
pub struct Counter {
    format: CounterFormat,
    target: u64,
    tween: Tween,
    gate: VisibilityGate,
    run: Option<ActiveRun>,
    next_generation: u64,
    phase: CounterPhase,
    displayed: String,
}

impl Counter {
    /// Build a counter from its target text and timing configuration.
    ///
    /// Format and numeric target are resolved once here, never re-derived;
    /// the count-up tween is validated once and reused for every run.
    pub fn new(
        target_text: &str,
        duration_secs: f64,
        delay_secs: f64,
        visibility_threshold: f64,
    ) -> ScrollsyncResult<Self> {
        let (format, target) = CounterFormat::resolve(target_text);
        let tween = Tween::new(0.0, target as f64, duration_secs, delay_secs, Ease::OutCubic)?;
        Ok(Self {
            format,
            target,
            tween,
            gate: VisibilityGate::new(visibility_threshold)?,
            run: None,
            next_generation: 0,
            phase: CounterPhase::Idle,
            displayed: "0".to_owned(),
        })
    }

    /// Feed a visibility observation at `now_secs`.
    ///
    /// An enter edge starts a fresh run (superseding any in-flight one); a
    /// leave edge cancels. Returns the generation of a newly started run.
    pub fn observe_visibility(
        &mut self,
        visible_fraction: f64,
        now_secs: f64,
    ) -> Option<RunGeneration> {
        match self.gate.observe(visible_fraction)? {
            VisibilityEdge::Entered => Some(self.start_run(now_secs)),
            VisibilityEdge::Left => {
                self.cancel();
                None
            }
        }
    }

    fn start_run(&mut self, now_secs: f64) -> RunGeneration {
        let generation = RunGeneration(self.next_generation);
        self.next_generation += 1;

        self.run = Some(ActiveRun {
            tween: self.tween,
            started_at_secs: now_secs,
            generation,
        });
        self.phase = CounterPhase::Running;
        tracing::trace!(generation = generation.0, "counter run started");
        generation
    }

    /// Cancel the in-flight run, freezing the display at its last value.
    ///
    /// Best-effort: cancelling when no run is active (already completed, never
    /// started) is a silent no-op.
    pub fn cancel(&mut self) {
        if self.run.take().is_some() {
            self.phase = CounterPhase::Idle;
            tracing::trace!("counter run cancelled");
        }
    }

    /// Frame domain: advance the run to `now_secs` and refresh the display.
    pub fn tick(&mut self, now_secs: f64) {
        let Some(run) = self.run else {
            return;
        };

        let elapsed = now_secs - run.started_at_secs;
        if let Some(value) = run.tween.sample(elapsed) {
            self.displayed = self.format.render(value);
        }
        if run.tween.is_done(elapsed) {
            self.run = None;
            self.phase = CounterPhase::Settled;
        }
    }

    /// Currently displayed text.
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    /// Numeric target resolved from the configured text.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Generation of the in-flight run, if any.
    pub fn active_generation(&self) -> Option<RunGeneration> {
        self.run.map(|r| r.generation)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/counter/state.rs"]
mod tests;
