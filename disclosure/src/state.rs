/// A lightweight, serializable snapshot of a [`crate::ListWindower`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub total: usize,
    pub cursor: usize,
    pub step: usize,
    pub generation: u64,
    pub revealing: bool,
}

impl WindowState {
    pub fn has_more(&self) -> bool {
        self.cursor < self.total
    }
}

/// A lightweight, serializable snapshot of a [`crate::CircularCarousel`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub len: usize,
    /// Effective (clamped) view size.
    pub view_size: usize,
    pub looping: bool,
    pub index: usize,
}

impl CarouselState {
    pub fn extended_len(&self) -> usize {
        self.len.saturating_mul(3)
    }
}
