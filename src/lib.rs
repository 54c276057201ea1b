//! Scrollsync is a scroll-driven animation synchronization engine.
//!
//! It keeps a continuous-scroll page coherent: one scroll signal fans out
//! into several independently shaped normalized progress values that must
//! never drift from each other, including at the page boundaries.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: a [`ScrollSource`] provides offset and viewport height on
//!    demand (pull, read-only)
//! 2. **Map**: pure mappers derive clamped, eased progress per phase
//!    ([`PhaseMap`], [`ScrubMap`], [`ElementPhase`])
//! 3. **Drive**: consumers apply progress in their own scheduling domain —
//!    cross-fade opacities per scroll event, the clip cursor per rendered
//!    frame, counters per visibility edge
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Derived, never integrated**: every progress value is a pure function
//!   of the latest scroll state, so redundant or bursty event delivery is
//!   idempotent.
//! - **Two scheduling domains**: event-driven derivation and frame-driven
//!   application are separate entry points with independent failure and
//!   cancellation semantics, never fused into one handler.
//! - **No wall-clock reads**: time enters as explicit `now` parameters;
//!   every path is deterministic and testable.
//! - **Degrade, don't fail**: runtime paths never error — a degenerate
//!   viewport, a missing clip, or a digitless counter target all collapse to
//!   visually inert no-ops.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod counter;
mod fade;
mod foundation;
mod page;
mod playback;
mod progress;
mod schedule;
mod scroll;
mod session;

pub use animation::ease::Ease;
pub use animation::interp::Interp;
pub use animation::tween::Tween;
pub use counter::format::CounterFormat;
pub use counter::state::{Counter, CounterPhase, RunGeneration};
pub use counter::visibility::{DEFAULT_VISIBILITY_THRESHOLD, VisibilityEdge, VisibilityGate};
pub use fade::crossfade::{CrossfadeController, FadeSmoother};
pub use foundation::core::{
    OPACITY_SUM_EPSILON, OpacityPair, Progress, ScrollOffset, SectionExtent, Viewport,
};
pub use foundation::error::{ScrollsyncError, ScrollsyncResult};
pub use page::model::{CounterDef, ElementDef, FadeDef, PageDef, TrackDef};
pub use page::spec::{PAGE_SCHEMA_VERSION, PageSpec};
pub use playback::clip::{CameraPose, ClipCursor, MemoryCamera, MemoryClip, SceneCamera};
pub use playback::driver::{PlaybackDriver, PlaybackStats, ScrubMap};
pub use progress::element::{ElementPhase, ElementTrack};
pub use progress::mapper::{PhaseMap, raw_ratio};
pub use schedule::teardown::{Subscriptions, Teardown};
pub use scroll::sampler::{MemoryScroll, ScrollSample, ScrollSampler, ScrollSource};
pub use session::page_session::{PageSession, PageSessionOpts, SessionStats};
