use crate::animation::ease::Ease;
use crate::playback::clip::CameraPose;
use crate::playback::driver::ScrubMap;
use serde::{Deserialize, Serialize};

/// Declarative description of one continuous-scroll page.
///
/// This is the JSON-facing, human-edited representation. It is validated
/// through [`crate::page::spec::PageSpec`] before a session is built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDef {
    /// Schema version, currently `"0.1"`.
    pub version: String,
    /// Viewport-height multiplier defining the primary section extent.
    #[serde(default = "default_section_multiplier")]
    pub section_multiplier: f64,
    /// Cross-fade phase configuration.
    #[serde(default)]
    pub fade: FadeDef,
    /// Playback scrub configuration.
    #[serde(default)]
    pub scrub: ScrubMap,
    /// Fixed camera pose applied once at session start.
    #[serde(default)]
    pub camera: CameraPose,
    /// Visibility-gated counters on the page.
    #[serde(default)]
    pub counters: Vec<CounterDef>,
    /// Decorative elements with scroll-linked value tracks.
    #[serde(default)]
    pub elements: Vec<ElementDef>,
}

fn default_section_multiplier() -> f64 {
    2.0
}

/// Cross-fade phase constants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FadeDef {
    /// Fraction of the section at which the fade begins.
    pub start_fraction: f64,
    /// Fraction of the section over which the fade completes.
    pub span: f64,
    /// Easing applied to the fade.
    pub ease: Ease,
    /// Cosmetic smoothing settle time in seconds; 0 disables smoothing.
    #[serde(default = "default_fade_smoothing_secs")]
    pub smoothing_secs: f64,
}

fn default_fade_smoothing_secs() -> f64 {
    0.3
}

impl Default for FadeDef {
    fn default() -> Self {
        Self {
            start_fraction: 0.7,
            span: 0.3,
            ease: Ease::InOutQuad,
            smoothing_secs: default_fade_smoothing_secs(),
        }
    }
}

/// One visibility-gated counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterDef {
    /// Identifier used to route visibility observations.
    pub id: String,
    /// Target text, e.g. `"50K+"`, `"30%"`, `"24/7"`, `"100+"`.
    pub target: String,
    /// Count-up duration in seconds.
    #[serde(default = "default_counter_duration_secs")]
    pub duration_secs: f64,
    /// Delay before the count-up starts, in seconds.
    #[serde(default)]
    pub delay_secs: f64,
    /// Visible-area fraction that arms the counter.
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f64,
}

fn default_counter_duration_secs() -> f64 {
    2.0
}

fn default_visibility_threshold() -> f64 {
    crate::counter::visibility::DEFAULT_VISIBILITY_THRESHOLD
}

/// One decorative element carrying scroll-linked value tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementDef {
    /// Identifier used to look up track values.
    pub id: String,
    /// Element top in document space, device pixels.
    pub top_px: f64,
    /// Element height in device pixels.
    pub height_px: f64,
    /// Viewport fraction at which the element's phase begins.
    #[serde(default = "default_enter_view_fraction")]
    pub enter_view_fraction: f64,
    /// Fraction of the element's height over which the phase completes.
    #[serde(default = "default_exit_element_fraction")]
    pub exit_element_fraction: f64,
    /// Value tracks derived from the element's phase.
    #[serde(default)]
    pub tracks: Vec<TrackDef>,
}

fn default_enter_view_fraction() -> f64 {
    0.8
}

fn default_exit_element_fraction() -> f64 {
    0.85
}

/// One named piecewise-linear value track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackDef {
    /// Track name, unique within its element.
    pub name: String,
    /// Input stops over the element phase, strictly increasing.
    pub input: Vec<f64>,
    /// Output values, one per input stop.
    pub output: Vec<f64>,
}
