//! Scroll-scrubbed playback of an externally owned animation clip.

pub mod clip;
pub mod driver;
