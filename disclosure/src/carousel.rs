use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp;

use crate::{Breakpoint, CarouselOptions, CarouselState, CarouselStep, Direction};

/// Browses a small sequence as an endless loop over a tripled backing strip.
///
/// The strip `extended = base ++ base ++ base` is never materialized: `extended[i]` is
/// `base[i % len]`. Renderers lay out all `3 * len` slots, translate the strip by
/// [`Self::translate_percent`], and read the visible items through [`Self::item_at`].
///
/// After every step the index is corrected by whole laps so that `index + view_size` never runs
/// past the end of the strip. A lap jump does not change which base items are visible, so the
/// correction is invisible as long as the renderer applies it after the step animation settled
/// (see [`CarouselStep`]).
///
/// When the requested view size exceeds the number of items, looping is disabled: the view size
/// is clamped to `len` and `next`/`previous` are ignored.
#[derive(Clone, Debug)]
pub struct CircularCarousel {
    options: CarouselOptions,
    len: usize,
    requested_view_size: usize,
    view_size: usize,
    looping: bool,
    index: usize,
}

impl CircularCarousel {
    /// Creates an empty carousel (`len = 0`).
    pub fn new(options: CarouselOptions) -> Self {
        let requested_view_size = sanitize_view_size(options.view_size);
        ddebug!(view_size = requested_view_size, "CircularCarousel::new");
        let mut c = Self {
            options,
            len: 0,
            requested_view_size,
            view_size: 0,
            looping: false,
            index: 0,
        };
        c.rebuild();
        c
    }

    /// Creates a carousel over `len` items.
    pub fn with_len(options: CarouselOptions, len: usize) -> Self {
        let mut c = Self::new(options);
        c.len = len;
        c.rebuild();
        c
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Replaces the options and resets the index when the requested view size changes.
    pub fn set_options(&mut self, options: CarouselOptions) {
        let requested = sanitize_view_size(options.view_size);
        self.options = options;
        if requested != self.requested_view_size {
            self.requested_view_size = requested;
            self.rebuild();
        }
        self.notify();
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&CircularCarousel) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    /// Replaces the base sequence length. Always resets the index to `len`.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.rebuild();
        self.notify();
    }

    pub fn set_base<T>(&mut self, base: &[T]) {
        self.set_len(base.len());
    }

    /// Changes the requested view size. The index resets only if the size actually changed.
    pub fn set_view_size(&mut self, view_size: usize) {
        let view_size = sanitize_view_size(view_size);
        if view_size == self.requested_view_size {
            return;
        }
        self.requested_view_size = view_size;
        self.rebuild();
        self.notify();
    }

    /// Replaces the responsive breakpoints. Takes effect on the next `on_viewport_width`.
    pub fn set_breakpoints(&mut self, breakpoints: impl IntoIterator<Item = Breakpoint>) {
        self.options.breakpoints = breakpoints.into_iter().collect();
        self.options.breakpoints.sort_by_key(|b| b.min_width);
    }

    /// Resolves the view size for `width` through the configured breakpoints.
    ///
    /// Returns `true` when the requested view size changed.
    pub fn on_viewport_width(&mut self, width: u32) -> bool {
        let view_size = sanitize_view_size(self.options.view_size_for_width(width));
        if view_size == self.requested_view_size {
            return false;
        }
        dtrace!(width, view_size, "CircularCarousel::on_viewport_width");
        self.set_view_size(view_size);
        true
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Effective view size (`min(requested, len)`).
    pub fn view_size(&self) -> usize {
        self.view_size
    }

    pub fn requested_view_size(&self) -> usize {
        self.requested_view_size
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn extended_len(&self) -> usize {
        self.len.saturating_mul(3)
    }

    /// Inclusive bounds the index always stays within: `[0, 3 * len - view_size]`.
    pub fn index_bounds(&self) -> (usize, usize) {
        (0, self.extended_len().saturating_sub(self.view_size))
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            len: self.len,
            view_size: self.view_size,
            looping: self.looping,
            index: self.index,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<CarouselStep> {
        self.step(Direction::Next)
    }

    pub fn previous(&mut self) -> Option<CarouselStep> {
        self.step(Direction::Previous)
    }

    /// Moves one slot in `direction` and applies boundary correction.
    ///
    /// Returns `None` when the carousel is empty or not looping.
    pub fn step(&mut self, direction: Direction) -> Option<CarouselStep> {
        if !self.looping {
            return None;
        }

        let from = self.index;
        let target = match direction {
            Direction::Next => from as isize + 1,
            Direction::Previous => from as isize - 1,
        };
        let settled = self.correct(target);
        self.index = settled;

        let step = CarouselStep {
            direction,
            from,
            target,
            settled,
            corrected: settled as isize != target,
        };
        dtrace!(
            from,
            to = target,
            settled,
            corrected = step.corrected,
            "CircularCarousel::step"
        );
        self.notify();
        Some(step)
    }

    /// Base index shown in visual `slot`, or `None` if `slot` is outside the view.
    pub fn item_at(&self, slot: usize) -> Option<usize> {
        if slot >= self.view_size {
            return None;
        }
        Some((self.index + slot) % self.len)
    }

    /// Item shown in visual `slot`, looked up in the caller-owned `base`.
    pub fn pick<'a, T>(&self, base: &'a [T], slot: usize) -> Option<&'a T> {
        if base.len() != self.len {
            dwarn!(
                len = base.len(),
                expected = self.len,
                "CircularCarousel::pick: base length does not match"
            );
        }
        base.get(self.item_at(slot)?)
    }

    /// Calls `f(slot, base_index)` for every visible slot.
    pub fn for_each_visible(&self, mut f: impl FnMut(usize, usize)) {
        for slot in 0..self.view_size {
            f(slot, (self.index + slot) % self.len);
        }
    }

    /// Collects the visible base indexes into `out` (clears `out` first).
    pub fn collect_visible(&self, out: &mut Vec<usize>) {
        out.clear();
        self.for_each_visible(|_, i| out.push(i));
    }

    /// Calls `f(extended_index, base_index)` for every slot of the tripled strip.
    pub fn for_each_extended(&self, mut f: impl FnMut(usize, usize)) {
        for i in 0..self.extended_len() {
            f(i, i % self.len);
        }
    }

    /// Strip translation for the current index, in percent of the viewport.
    pub fn translate_percent(&self) -> f32 {
        self.translate_percent_for(self.index as isize)
    }

    /// Strip translation for an arbitrary index: `-(index mod 3N) * 100 / V`.
    pub fn translate_percent_for(&self, index: isize) -> f32 {
        let extended = self.extended_len();
        if extended == 0 || self.view_size == 0 {
            return 0.0;
        }
        let wrapped = index.rem_euclid(extended as isize);
        -(wrapped as f32) * 100.0 / self.view_size as f32
    }

    /// Strip translation without wrapping, for animating to a pre-correction index.
    pub fn unwrapped_percent_for(&self, index: isize) -> f32 {
        if self.view_size == 0 {
            return 0.0;
        }
        -(index as f32) * 100.0 / self.view_size as f32
    }

    fn correct(&self, index: isize) -> usize {
        let n = self.len as isize;
        let upper = 3 * n - self.view_size as isize;
        let corrected = if index <= 0 {
            index + 2 * n
        } else if index >= upper {
            index - 2 * n
        } else {
            index
        };
        debug_assert!(
            (0..=upper).contains(&corrected),
            "carousel index out of band (index={corrected}, upper={upper})"
        );
        corrected.clamp(0, upper) as usize
    }

    fn rebuild(&mut self) {
        self.view_size = cmp::min(self.requested_view_size, self.len);
        self.looping = self.len > 0 && self.requested_view_size <= self.len;
        self.index = self.len;
        if self.len > 0 && !self.looping {
            dwarn!(
                len = self.len,
                view_size = self.requested_view_size,
                "CircularCarousel: fewer items than view size, looping disabled"
            );
        }
        ddebug!(
            len = self.len,
            view_size = self.view_size,
            looping = self.looping,
            "CircularCarousel::rebuild"
        );
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }
}

impl Default for CircularCarousel {
    fn default() -> Self {
        Self::new(CarouselOptions::default())
    }
}

fn sanitize_view_size(view_size: usize) -> usize {
    if view_size == 0 {
        dwarn!("CircularCarousel: view size must be positive, using 1");
        return 1;
    }
    view_size
}
