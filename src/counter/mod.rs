//! Visibility-gated count-up displays.
//!
//! Each counter is an independent state machine: armed by an element's
//! visible fraction crossing a threshold, animated by a cancellable tween,
//! formatted through a tag resolved once from the configured target text.

pub mod format;
pub mod state;
pub mod visibility;
