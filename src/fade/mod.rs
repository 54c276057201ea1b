//! Cross-fade between the fixed 3D plane layer and the content section.

pub mod crossfade;
