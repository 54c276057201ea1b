use crate::foundation::core::{ScrollOffset, Viewport};
use std::cell::RefCell;
use std::rc::Rc;

/// Pull-based read access to the platform scroll state.
///
/// Implementations wrap the embedding's `currentScrollOffset()` /
/// `viewportHeight()` equivalents. Reads must be cheap; the engine performs no
/// layout reads beyond these two values.
pub trait ScrollSource {
    /// Current vertical scroll offset in device pixels.
    fn offset_px(&self) -> f64;
    /// Current viewport height in device pixels.
    fn viewport_height_px(&self) -> f64;
}

/// One coherent read of the scroll state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    /// Scroll offset at sampling time.
    pub offset: ScrollOffset,
    /// Viewport geometry at sampling time.
    pub viewport: Viewport,
}

/// The single source of truth for "where is the user".
///
/// Owns the platform source and snapshots both values in one call, so
/// consumers never observe an offset paired with a stale viewport height.
pub struct ScrollSampler {
    source: Box<dyn ScrollSource>,
}

impl ScrollSampler {
    /// Wrap a platform scroll source.
    pub fn new(source: Box<dyn ScrollSource>) -> Self {
        Self { source }
    }

    /// Snapshot offset and viewport together. Non-finite platform reads
    /// collapse to 0 so a broken source degrades rather than poisons.
    pub fn sample(&self) -> ScrollSample {
        let offset = finite_or_zero(self.source.offset_px());
        let height = finite_or_zero(self.source.viewport_height_px());
        ScrollSample {
            offset: ScrollOffset(offset),
            viewport: Viewport { height_px: height },
        }
    }
}

impl std::fmt::Debug for ScrollSampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSampler").finish_non_exhaustive()
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// In-memory scroll source for tests and examples.
///
/// Cloning shares state, so a test can keep one handle to mutate while the
/// sampler owns the other.
#[derive(Clone, Debug, Default)]
pub struct MemoryScroll {
    state: Rc<RefCell<MemoryScrollState>>,
}

#[derive(Debug, Default)]
struct MemoryScrollState {
    offset_px: f64,
    viewport_height_px: f64,
}

impl MemoryScroll {
    /// Create a source with the given viewport height and offset 0.
    pub fn with_viewport(viewport_height_px: f64) -> Self {
        let s = Self::default();
        s.state.borrow_mut().viewport_height_px = viewport_height_px;
        s
    }

    /// Set the current scroll offset.
    pub fn set_offset(&self, offset_px: f64) {
        self.state.borrow_mut().offset_px = offset_px;
    }

    /// Set the current viewport height.
    pub fn set_viewport_height(&self, height_px: f64) {
        self.state.borrow_mut().viewport_height_px = height_px;
    }
}

impl ScrollSource for MemoryScroll {
    fn offset_px(&self) -> f64 {
        self.state.borrow().offset_px
    }

    fn viewport_height_px(&self) -> f64 {
        self.state.borrow().viewport_height_px
    }
}
