use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::Breakpoint;
use crate::carousel::CircularCarousel;
use crate::windower::ListWindower;

/// Reveal increment used by the storefront grids.
pub const DEFAULT_STEP: usize = 8;

/// Distance from the end of the content at which the next reveal is triggered.
pub const DEFAULT_THRESHOLD: u64 = 350;

/// Items per view of the category carousel.
pub const DEFAULT_VIEW_SIZE: usize = 4;

/// A callback fired after the revealed prefix changes.
pub type WindowerChangeCallback = Arc<dyn Fn(&ListWindower) + Send + Sync>;

/// A callback fired after the carousel index or geometry changes.
pub type CarouselChangeCallback = Arc<dyn Fn(&CircularCarousel) + Send + Sync>;

/// Configuration for [`crate::ListWindower`].
///
/// Cheap to clone: the callback is stored in an `Arc`.
#[derive(Clone)]
pub struct WindowerOptions {
    /// Number of items revealed per step. `0` is treated as `1`.
    pub step: usize,
    /// Proximity threshold used by [`crate::ListWindower::on_scroll`].
    pub threshold: u64,
    pub on_change: Option<WindowerChangeCallback>,
}

impl WindowerOptions {
    pub fn new(step: usize) -> Self {
        Self {
            step,
            threshold: DEFAULT_THRESHOLD,
            on_change: None,
        }
    }

    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&ListWindower) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for WindowerOptions {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

impl core::fmt::Debug for WindowerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowerOptions")
            .field("step", &self.step)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

/// Configuration for [`crate::CircularCarousel`].
#[derive(Clone)]
pub struct CarouselOptions {
    /// Requested number of items visible at once, used when no breakpoint matches.
    pub view_size: usize,
    /// Responsive overrides, kept sorted by ascending `min_width`.
    pub breakpoints: Vec<Breakpoint>,
    pub on_change: Option<CarouselChangeCallback>,
}

impl CarouselOptions {
    pub fn new(view_size: usize) -> Self {
        Self {
            view_size,
            breakpoints: Vec::new(),
            on_change: None,
        }
    }

    /// The featured-pieces layout: one item on narrow screens, up to four on wide ones.
    pub fn responsive() -> Self {
        Self::new(1).with_breakpoints([
            Breakpoint::new(640, 2),
            Breakpoint::new(768, 3),
            Breakpoint::new(1024, 4),
        ])
    }

    pub fn with_view_size(mut self, view_size: usize) -> Self {
        self.view_size = view_size;
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: impl IntoIterator<Item = Breakpoint>) -> Self {
        self.breakpoints = breakpoints.into_iter().collect();
        self.breakpoints.sort_by_key(|b| b.min_width);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&CircularCarousel) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// Resolves the requested view size for a viewport width.
    ///
    /// The widest breakpoint whose `min_width` fits wins; otherwise `view_size` applies.
    pub fn view_size_for_width(&self, width: u32) -> usize {
        self.breakpoints
            .iter()
            .rev()
            .find(|b| width >= b.min_width)
            .map_or(self.view_size, |b| b.view_size)
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new(DEFAULT_VIEW_SIZE)
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("view_size", &self.view_size)
            .field("breakpoints", &self.breakpoints)
            .finish_non_exhaustive()
    }
}
