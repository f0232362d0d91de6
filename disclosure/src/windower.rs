use alloc::sync::Arc;
use core::cmp;

use crate::sensor::ProximitySensor;
use crate::{RevealOutcome, RevealTicket, ScrollMetrics, WindowState, WindowerOptions};

/// Reveals an ever-larger prefix of an already-fetched sequence in fixed steps.
///
/// This type is headless:
/// - It does not own the items. The calling view owns the sequence and the windower only tracks
///   its length plus the reveal cursor.
/// - Reveals are driven either directly (`reveal`) or by scroll proximity (`on_scroll`).
/// - Reveals that must wait for upstream work use tickets (`begin_reveal` / `complete_reveal`).
///
/// Every re-initialization starts a new generation. Tickets from older generations are ignored,
/// so a reveal that was in flight during a filter change can never resurrect discarded items.
#[derive(Clone, Debug)]
pub struct ListWindower {
    options: WindowerOptions,
    total: usize,
    cursor: usize,
    generation: u64,
    in_flight: Option<RevealTicket>,
}

impl ListWindower {
    /// Creates an empty windower (`total = 0`).
    pub fn new(mut options: WindowerOptions) -> Self {
        options.step = sanitize_step(options.step);
        ddebug!(
            step = options.step,
            threshold = options.threshold,
            "ListWindower::new"
        );
        Self {
            options,
            total: 0,
            cursor: 0,
            generation: 0,
            in_flight: None,
        }
    }

    pub fn options(&self) -> &WindowerOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// The cursor and generation are kept; a new step only affects subsequent reveals.
    pub fn set_options(&mut self, options: WindowerOptions) {
        self.options = options;
        self.options.step = sanitize_step(self.options.step);
        dtrace!(
            step = self.options.step,
            threshold = self.options.threshold,
            "ListWindower::set_options"
        );
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut WindowerOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_step(&mut self, step: usize) {
        self.options.step = sanitize_step(step);
    }

    pub fn set_threshold(&mut self, threshold: u64) {
        self.options.threshold = threshold;
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&ListWindower) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    /// Starts a new generation over `sequence`.
    pub fn initialize<T>(&mut self, sequence: &[T]) {
        self.reset(sequence.len());
    }

    /// Starts a new generation over a sequence of `total` items.
    ///
    /// Reveals `min(step, total)` items and forgets any reveal still in flight.
    pub fn reset(&mut self, total: usize) {
        self.generation = self.generation.wrapping_add(1);
        if self.in_flight.take().is_some() {
            dtrace!("ListWindower::reset: dropping in-flight reveal");
        }
        self.total = total;
        self.cursor = cmp::min(self.options.step, total);
        ddebug!(
            total,
            cursor = self.cursor,
            generation = self.generation,
            "ListWindower::reset"
        );
        self.notify();
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of items currently revealed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn step(&self) -> usize {
        self.options.step
    }

    pub fn threshold(&self) -> u64 {
        self.options.threshold
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_more(&self) -> bool {
        self.cursor < self.total
    }

    pub fn remaining(&self) -> usize {
        self.total - self.cursor
    }

    pub fn is_revealing(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<RevealTicket> {
        self.in_flight
    }

    pub fn visible_len(&self) -> usize {
        self.cursor
    }

    /// Returns the revealed prefix of `sequence`.
    ///
    /// A sequence shorter than `cursor` (caller handed in the wrong generation) is clamped.
    pub fn visible<'a, T>(&self, sequence: &'a [T]) -> &'a [T] {
        if sequence.len() != self.total {
            dwarn!(
                len = sequence.len(),
                total = self.total,
                "ListWindower::visible: sequence length does not match total"
            );
        }
        let end = cmp::min(self.cursor, sequence.len());
        &sequence[..end]
    }

    pub fn state(&self) -> WindowState {
        WindowState {
            total: self.total,
            cursor: self.cursor,
            step: self.options.step,
            generation: self.generation,
            revealing: self.in_flight.is_some(),
        }
    }

    /// Reveals the next step immediately.
    ///
    /// No-op when everything is revealed or a deferred reveal is in flight.
    /// Returns `true` when the cursor moved.
    pub fn reveal(&mut self) -> bool {
        if self.in_flight.is_some() {
            dtrace!("ListWindower::reveal: suppressed, reveal in flight");
            return false;
        }
        if !self.has_more() {
            return false;
        }
        let next = self.next_cursor();
        self.apply_cursor(next)
    }

    /// Starts a deferred reveal and engages the reentrancy guard.
    ///
    /// Returns `None` when nothing is left or another reveal is already in flight.
    pub fn begin_reveal(&mut self) -> Option<RevealTicket> {
        if self.in_flight.is_some() || !self.has_more() {
            return None;
        }
        let ticket = RevealTicket {
            generation: self.generation,
            target: self.next_cursor(),
        };
        dtrace!(
            generation = ticket.generation,
            to = ticket.target,
            "ListWindower::begin_reveal"
        );
        self.in_flight = Some(ticket);
        Some(ticket)
    }

    /// Completes a deferred reveal started with [`Self::begin_reveal`].
    pub fn complete_reveal(&mut self, ticket: RevealTicket) -> RevealOutcome {
        if self.in_flight != Some(ticket) {
            dwarn!(
                generation = ticket.generation,
                current = self.generation,
                to = ticket.target,
                "ListWindower::complete_reveal: ignoring stale ticket"
            );
            return RevealOutcome::Stale;
        }
        self.in_flight = None;
        let next = cmp::max(self.cursor, cmp::min(ticket.target, self.total));
        self.apply_cursor(next);
        RevealOutcome::Applied
    }

    /// Releases the reentrancy guard without moving the cursor.
    ///
    /// Returns `false` for tickets that are not the one in flight.
    pub fn abort_reveal(&mut self, ticket: RevealTicket) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        ddebug!(
            generation = ticket.generation,
            to = ticket.target,
            "ListWindower::abort_reveal"
        );
        self.in_flight = None;
        true
    }

    /// Applies the proximity trigger: reveals when the viewport is within `threshold` of the end,
    /// more items remain, and no reveal is in flight.
    ///
    /// Returns `true` when the cursor moved.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        if !self.should_reveal(metrics) {
            return false;
        }
        self.reveal()
    }

    /// Evaluates the proximity trigger without mutating anything.
    pub fn should_reveal(&self, metrics: ScrollMetrics) -> bool {
        self.has_more()
            && self.in_flight.is_none()
            && ProximitySensor::new(self.options.threshold).is_near_end(metrics)
    }

    fn next_cursor(&self) -> usize {
        cmp::min(self.cursor.saturating_add(self.options.step), self.total)
    }

    fn apply_cursor(&mut self, next: usize) -> bool {
        debug_assert!(next <= self.total, "cursor past total ({next} > {})", self.total);
        if next <= self.cursor {
            return false;
        }
        dtrace!(from = self.cursor, to = next, total = self.total, "ListWindower: reveal");
        self.cursor = next;
        self.notify();
        true
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }
}

impl Default for ListWindower {
    fn default() -> Self {
        Self::new(WindowerOptions::default())
    }
}

fn sanitize_step(step: usize) -> usize {
    if step == 0 {
        dwarn!("ListWindower: step must be positive, using 1");
        return 1;
    }
    step
}
