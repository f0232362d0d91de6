/// Viewport geometry reported by the scroll observer, in abstract distance units.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    /// Visible extent of the scroll container along the scroll axis.
    pub viewport_size: u32,
    /// Current scroll offset from the start of the content.
    pub scroll_offset: u64,
    /// Total extent of the rendered content.
    pub content_size: u64,
}

impl ScrollMetrics {
    pub fn new(viewport_size: u32, scroll_offset: u64, content_size: u64) -> Self {
        Self {
            viewport_size,
            scroll_offset,
            content_size,
        }
    }

    /// Offset of the viewport's far edge.
    pub fn viewport_end(&self) -> u64 {
        self.scroll_offset.saturating_add(self.viewport_size as u64)
    }

    /// Unrevealed distance between the viewport's far edge and the end of the content.
    ///
    /// Overscroll (bounce, stale content size) saturates to `0`.
    pub fn distance_to_end(&self) -> u64 {
        self.content_size.saturating_sub(self.viewport_end())
    }
}

/// Handle for a reveal whose completion is deferred (e.g. until an upstream fetch resolves).
///
/// Tickets are bound to the generation that issued them. Completing a ticket after the source has
/// been re-initialized is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevealTicket {
    pub generation: u64,
    /// Cursor value the reveal will apply (already clamped to `total`).
    pub target: usize,
}

/// Result of [`crate::ListWindower::complete_reveal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RevealOutcome {
    /// The ticket belonged to the current generation and the cursor advanced to its target.
    Applied,
    /// The ticket was issued for a previous generation or is no longer in flight.
    Stale,
}

impl RevealOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Next,
    Previous,
}

/// One boundary-corrected carousel transition.
///
/// Renderers animate from `from` to `target` and, once that animation has settled, snap to
/// `settled` without animating. When `corrected` is `false`, `target == settled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselStep {
    pub direction: Direction,
    pub from: usize,
    /// Pre-correction index. May be `-1` when stepping back from index `0`.
    pub target: isize,
    pub settled: usize,
    pub corrected: bool,
}

/// A responsive view-size rule: viewports at least `min_width` wide show `view_size` items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    pub min_width: u32,
    pub view_size: usize,
}

impl Breakpoint {
    pub const fn new(min_width: u32, view_size: usize) -> Self {
        Self {
            min_width,
            view_size,
        }
    }
}
