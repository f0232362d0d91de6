use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use disclosure::ScrollMetrics;

/// Receives viewport scroll notifications.
///
/// Implemented for every `FnMut(ScrollMetrics)`, so closures can be registered directly.
pub trait ScrollObserver {
    fn on_scroll(&mut self, metrics: ScrollMetrics);
}

impl<F: FnMut(ScrollMetrics)> ScrollObserver for F {
    fn on_scroll(&mut self, metrics: ScrollMetrics) {
        self(metrics)
    }
}

/// Registration handle returned by [`ScrollHub::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// An explicit registry of scroll observers.
///
/// Views subscribe when they mount and unsubscribe when they unmount; the platform glue calls
/// `dispatch` with every scroll notification. Nothing is global, so tests can drive observers
/// with synthetic metrics.
#[derive(Default)]
pub struct ScrollHub {
    next_id: u64,
    observers: Vec<(ListenerId, Box<dyn ScrollObserver + Send>)>,
    last: Option<ScrollMetrics>,
}

impl ScrollHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl ScrollObserver + Send + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.observers.push((id, Box::new(observer)));
        atrace!(listeners = self.observers.len(), "ScrollHub::subscribe");
        id
    }

    /// Removes an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(other, _)| *other != id);
        before != self.observers.len()
    }

    /// Notifies every observer in subscription order. Returns the number notified.
    pub fn dispatch(&mut self, metrics: ScrollMetrics) -> usize {
        self.last = Some(metrics);
        for (_, observer) in self.observers.iter_mut() {
            observer.on_scroll(metrics);
        }
        self.observers.len()
    }

    /// Re-sends the most recent metrics, e.g. after content grew without a scroll event.
    pub fn redispatch(&mut self) -> usize {
        match self.last {
            Some(metrics) => self.dispatch(metrics),
            None => 0,
        }
    }

    pub fn last_metrics(&self) -> Option<ScrollMetrics> {
        self.last
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn clear(&mut self) {
        self.observers.clear();
    }
}

impl fmt::Debug for ScrollHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollHub")
            .field("listeners", &self.observers.len())
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}
