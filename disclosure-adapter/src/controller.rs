use disclosure::{CarouselOptions, CarouselStep, CircularCarousel, Direction};

use crate::{Easing, Tween};

/// Transition length used when no animation is configured.
pub const DEFAULT_TRANSITION_MS: u64 = 450;

/// Timer-driven auto-advance for a [`CarouselController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Autoplay {
    pub delay_ms: u64,
    /// When `true`, a manual `next`/`previous` stops autoplay. Otherwise it only restarts the
    /// delay.
    pub disable_on_interaction: bool,
}

impl Autoplay {
    /// Featured-pieces strip: advance every 4 s, keep going after interaction.
    pub const FEATURED: Self = Self::new(4_000);
    /// Full-width hero: advance every 5 s, keep going after interaction.
    pub const HERO: Self = Self::new(5_000);

    pub const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            disable_on_interaction: false,
        }
    }

    pub const fn with_disable_on_interaction(mut self, disable: bool) -> Self {
        self.disable_on_interaction = disable;
        self
    }
}

/// A framework-neutral controller that wraps a [`CircularCarousel`] and drives its animation.
///
/// The carousel's logical index is corrected immediately on every step. The controller keeps the
/// visual position in the pre-correction lap until the step tween has settled, then snaps to the
/// corrected position. Both positions show the same items, so the snap is invisible.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `next` / `previous` on user commands
/// - `tick(now_ms)` each frame/timer tick (tween sampling, snap, autoplay)
/// - `on_viewport_width` / `set_len` when layout or data changes
#[derive(Clone, Debug)]
pub struct CarouselController {
    carousel: CircularCarousel,
    tween: Option<Tween>,
    /// Lap correction still to apply to the visual position once `tween` settles.
    pending_snap: Option<f32>,
    rest: f32,
    duration_ms: u64,
    easing: Easing,
    autoplay: Option<Autoplay>,
    autoplay_paused: bool,
    autoplay_anchor_ms: Option<u64>,
}

impl CarouselController {
    pub fn new(options: CarouselOptions) -> Self {
        Self::from_carousel(CircularCarousel::new(options))
    }

    pub fn from_carousel(carousel: CircularCarousel) -> Self {
        let rest = carousel.translate_percent();
        Self {
            carousel,
            tween: None,
            pending_snap: None,
            rest,
            duration_ms: DEFAULT_TRANSITION_MS,
            easing: Easing::EaseOutCubic,
            autoplay: None,
            autoplay_paused: false,
            autoplay_anchor_ms: None,
        }
    }

    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn with_autoplay(mut self, autoplay: Option<Autoplay>) -> Self {
        self.autoplay = autoplay;
        self.autoplay_paused = false;
        self.autoplay_anchor_ms = None;
        self
    }

    pub fn carousel(&self) -> &CircularCarousel {
        &self.carousel
    }

    pub fn into_carousel(self) -> CircularCarousel {
        self.carousel
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Drops the running tween and jumps to the settled position.
    pub fn cancel_animation(&mut self) {
        self.tween = None;
        self.pending_snap = None;
        self.rest = self.carousel.translate_percent();
    }

    /// Current strip translation in percent of the viewport.
    pub fn position(&self, now_ms: u64) -> f32 {
        self.tween.map_or(self.rest, |t| t.sample(now_ms))
    }

    pub fn set_len(&mut self, len: usize) {
        self.carousel.set_len(len);
        self.cancel_animation();
    }

    pub fn set_base<T>(&mut self, base: &[T]) {
        self.set_len(base.len());
    }

    pub fn set_view_size(&mut self, view_size: usize) {
        if view_size == self.carousel.requested_view_size() {
            return;
        }
        self.carousel.set_view_size(view_size);
        self.cancel_animation();
    }

    /// Applies responsive breakpoints. Returns `true` when the view size changed.
    pub fn on_viewport_width(&mut self, width: u32) -> bool {
        let changed = self.carousel.on_viewport_width(width);
        if changed {
            self.cancel_animation();
        }
        changed
    }

    /// User command: step forward.
    pub fn next(&mut self, now_ms: u64) -> Option<CarouselStep> {
        self.on_interaction(now_ms);
        self.advance(Direction::Next, now_ms)
    }

    /// User command: step backward.
    pub fn previous(&mut self, now_ms: u64) -> Option<CarouselStep> {
        self.on_interaction(now_ms);
        self.advance(Direction::Previous, now_ms)
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some() && !self.autoplay_paused
    }

    pub fn pause_autoplay(&mut self) {
        self.autoplay_paused = true;
    }

    /// Resumes autoplay; the next advance happens one full delay after `now_ms`.
    pub fn resume_autoplay(&mut self, now_ms: u64) {
        self.autoplay_paused = false;
        self.autoplay_anchor_ms = Some(now_ms);
    }

    /// Advances the controller.
    ///
    /// - Fires an autoplay step when its delay has elapsed.
    /// - If a tween is active, returns the sampled position; once it is done, snaps to the
    ///   settled position and returns that.
    /// - Otherwise returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        self.tick_autoplay(now_ms);

        let tween = self.tween?;
        if !tween.is_done(now_ms) {
            return Some(tween.sample(now_ms));
        }

        self.tween = None;
        if self.pending_snap.take().is_some() {
            atrace!(
                from = tween.to,
                to = self.carousel.translate_percent(),
                "CarouselController: lap snap"
            );
        }
        self.rest = self.carousel.translate_percent();
        Some(self.rest)
    }

    fn tick_autoplay(&mut self, now_ms: u64) {
        let Some(autoplay) = self.autoplay else {
            return;
        };
        if self.autoplay_paused {
            return;
        }
        let Some(anchor) = self.autoplay_anchor_ms else {
            self.autoplay_anchor_ms = Some(now_ms);
            return;
        };
        if now_ms.saturating_sub(anchor) < autoplay.delay_ms {
            return;
        }
        self.autoplay_anchor_ms = Some(now_ms);
        atrace!(now_ms, "CarouselController: autoplay");
        self.advance(Direction::Next, now_ms);
    }

    fn on_interaction(&mut self, now_ms: u64) {
        let Some(autoplay) = self.autoplay else {
            return;
        };
        if autoplay.disable_on_interaction {
            if !self.autoplay_paused {
                adebug!("CarouselController: autoplay disabled by interaction");
            }
            self.autoplay_paused = true;
        } else {
            self.autoplay_anchor_ms = Some(now_ms);
        }
    }

    fn advance(&mut self, direction: Direction, now_ms: u64) -> Option<CarouselStep> {
        let mut current = self.position(now_ms);
        let step = self.carousel.step(direction)?;

        // A previous step may still be animating inside the pre-correction lap. Move the visual
        // position into the corrected lap first so the new tween starts from the same items.
        if let Some(snap) = self.pending_snap.take() {
            current += snap;
        }

        let to = self.carousel.unwrapped_percent_for(step.target);
        self.tween = Some(Tween::new(
            current,
            to,
            now_ms,
            self.duration_ms,
            self.easing,
        ));
        self.pending_snap = step
            .corrected
            .then(|| self.carousel.translate_percent() - to);
        atrace!(
            from = current,
            to,
            corrected = step.corrected,
            "CarouselController::advance"
        );
        Some(step)
    }
}
