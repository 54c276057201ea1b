use crate::animation::interp::Interp;
use crate::foundation::error::{ScrollsyncError, ScrollsyncResult};
use crate::page::model::{CounterDef, ElementDef, PageDef};
use crate::progress::mapper::PhaseMap;
use std::collections::BTreeSet;

/// Supported schema version.
pub const PAGE_SCHEMA_VERSION: &str = "0.1";

/// Validated page boundary object.
///
/// Wraps a [`PageDef`] parsed from JSON or built in code; a
/// [`crate::session::page_session::PageSession`] is constructed from it after
/// validation, so every runtime path can assume a well-formed configuration.
#[derive(Debug, Clone)]
pub struct PageSpec {
    def: PageDef,
}

impl PageSpec {
    /// Wrap an in-code definition.
    pub fn from_def(def: PageDef) -> Self {
        Self { def }
    }

    /// Parse a page definition from a JSON string.
    pub fn from_json_str(json: &str) -> ScrollsyncResult<Self> {
        let def: PageDef = serde_json::from_str(json)
            .map_err(|e| ScrollsyncError::serde(format!("parse page JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse a page definition from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ScrollsyncResult<Self> {
        let def: PageDef = serde_json::from_reader(r)
            .map_err(|e| ScrollsyncError::serde(format!("parse page JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Validate the definition against the schema.
    pub fn validate(&self) -> ScrollsyncResult<()> {
        let def = &self.def;
        if def.version != PAGE_SCHEMA_VERSION {
            return Err(ScrollsyncError::validation(format!(
                "unsupported page schema version '{}', expected '{PAGE_SCHEMA_VERSION}'",
                def.version
            )));
        }
        if !def.section_multiplier.is_finite() || def.section_multiplier <= 0.0 {
            return Err(ScrollsyncError::validation(
                "page section_multiplier must be > 0",
            ));
        }

        PhaseMap::new(def.fade.start_fraction, def.fade.span, def.fade.ease)?;
        if !def.fade.smoothing_secs.is_finite() || def.fade.smoothing_secs < 0.0 {
            return Err(ScrollsyncError::validation(
                "fade smoothing_secs must be >= 0",
            ));
        }
        def.scrub.validate()?;

        let mut counter_ids = BTreeSet::new();
        for counter in &def.counters {
            validate_counter(counter)?;
            if !counter_ids.insert(counter.id.as_str()) {
                return Err(ScrollsyncError::validation(format!(
                    "duplicate counter id '{}'",
                    counter.id
                )));
            }
        }

        let mut element_ids = BTreeSet::new();
        for element in &def.elements {
            validate_element(element)?;
            if !element_ids.insert(element.id.as_str()) {
                return Err(ScrollsyncError::validation(format!(
                    "duplicate element id '{}'",
                    element.id
                )));
            }
        }
        Ok(())
    }

    /// The wrapped definition.
    pub fn def(&self) -> &PageDef {
        &self.def
    }
}

fn validate_counter(counter: &CounterDef) -> ScrollsyncResult<()> {
    if counter.id.trim().is_empty() {
        return Err(ScrollsyncError::validation("counter id must be non-empty"));
    }
    // Counter::new performs the timing and threshold validation.
    crate::counter::state::Counter::new(
        &counter.target,
        counter.duration_secs,
        counter.delay_secs,
        counter.visibility_threshold,
    )
    .map(|_| ())
}

fn validate_element(element: &ElementDef) -> ScrollsyncResult<()> {
    if element.id.trim().is_empty() {
        return Err(ScrollsyncError::validation("element id must be non-empty"));
    }
    if !element.top_px.is_finite() || !element.height_px.is_finite() || element.height_px < 0.0 {
        return Err(ScrollsyncError::validation(format!(
            "element '{}' bounds must be finite with height >= 0",
            element.id
        )));
    }
    for v in [element.enter_view_fraction, element.exit_element_fraction] {
        if !v.is_finite() || v < 0.0 {
            return Err(ScrollsyncError::validation(format!(
                "element '{}' phase fractions must be finite and >= 0",
                element.id
            )));
        }
    }

    let mut names = BTreeSet::new();
    for track in &element.tracks {
        if track.name.trim().is_empty() {
            return Err(ScrollsyncError::validation(format!(
                "element '{}' has a track with an empty name",
                element.id
            )));
        }
        if !names.insert(track.name.as_str()) {
            return Err(ScrollsyncError::validation(format!(
                "element '{}' has duplicate track '{}'",
                element.id, track.name
            )));
        }
        Interp::new(track.input.clone(), track.output.clone())?;
    }
    Ok(())
}
