use disclosure::{
    ListWindower, RevealOutcome, RevealTicket, ScrollMetrics, WindowState, WindowerOptions,
};

/// Infinite-scroll pagination over a client-side sequence, keyed by a filter.
///
/// Wraps a [`ListWindower`] with the gates a catalog view needs:
/// - a filter key (category, design facet, ...); changing it starts a new generation and cancels
///   any reveal in flight
/// - an upstream "still loading" flag that suppresses reveals while the source is being fetched
/// - a halted state after an upstream failure: the window stays as it was and `has_more` reports
///   `false` until a new source arrives
///
/// Reveals are issued as [`RevealTicket`]s so the adapter can defer them (e.g. until the next
/// batch of images decoded). Use [`Self::on_scroll_immediate`] when items can be shown at once.
#[derive(Clone, Debug)]
pub struct Paginator<F = ()> {
    windower: ListWindower,
    filter: Option<F>,
    upstream_loading: bool,
    halted: bool,
}

impl<F: PartialEq> Paginator<F> {
    pub fn new(options: WindowerOptions) -> Self {
        Self::from_windower(ListWindower::new(options))
    }

    pub fn from_windower(windower: ListWindower) -> Self {
        Self {
            windower,
            filter: None,
            upstream_loading: false,
            halted: false,
        }
    }

    pub fn windower(&self) -> &ListWindower {
        &self.windower
    }

    pub fn into_windower(self) -> ListWindower {
        self.windower
    }

    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }

    /// Switches to a new filter.
    ///
    /// Clears the window, cancels any in-flight reveal and marks the upstream as loading until
    /// [`Self::set_source`] delivers the new sequence. Returns `false` if the filter is unchanged.
    pub fn set_filter(&mut self, filter: F) -> bool {
        if self.filter.as_ref() == Some(&filter) {
            return false;
        }
        self.filter = Some(filter);
        self.windower.reset(0);
        self.upstream_loading = true;
        self.halted = false;
        adebug!(
            generation = self.windower.generation(),
            "Paginator::set_filter"
        );
        true
    }

    /// Installs a freshly fetched sequence of `total` items for the current filter.
    pub fn set_source(&mut self, total: usize) {
        self.windower.reset(total);
        self.upstream_loading = false;
        self.halted = false;
    }

    pub fn set_source_from<T>(&mut self, sequence: &[T]) {
        self.set_source(sequence.len());
    }

    pub fn set_upstream_loading(&mut self, loading: bool) {
        self.upstream_loading = loading;
    }

    /// Marks the upstream fetch as failed.
    ///
    /// The revealed items stay visible, any in-flight reveal is released, and no further reveals
    /// happen until the next `set_source`.
    pub fn source_failed(&mut self) {
        awarn!(
            generation = self.windower.generation(),
            cursor = self.windower.cursor(),
            "Paginator: upstream failed, halting reveals"
        );
        if let Some(ticket) = self.windower.in_flight() {
            self.windower.abort_reveal(ticket);
        }
        self.upstream_loading = false;
        self.halted = true;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// `true` while the upstream fetch or a deferred reveal is pending.
    pub fn is_loading(&self) -> bool {
        self.upstream_loading || self.windower.is_revealing()
    }

    pub fn has_more(&self) -> bool {
        !self.halted && self.windower.has_more()
    }

    pub fn visible<'a, T>(&self, sequence: &'a [T]) -> &'a [T] {
        self.windower.visible(sequence)
    }

    pub fn state(&self) -> WindowState {
        self.windower.state()
    }

    /// Starts a deferred reveal when the viewport is near the end and nothing is loading.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<RevealTicket> {
        if !self.can_reveal(metrics) {
            return None;
        }
        self.windower.begin_reveal()
    }

    /// Same as `on_scroll`, but reveals synchronously. Returns `true` when the cursor moved.
    pub fn on_scroll_immediate(&mut self, metrics: ScrollMetrics) -> bool {
        if !self.can_reveal(metrics) {
            return false;
        }
        self.windower.on_scroll(metrics)
    }

    pub fn complete(&mut self, ticket: RevealTicket) -> RevealOutcome {
        self.windower.complete_reveal(ticket)
    }

    pub fn abort(&mut self, ticket: RevealTicket) -> bool {
        self.windower.abort_reveal(ticket)
    }

    fn can_reveal(&self, metrics: ScrollMetrics) -> bool {
        if self.halted || self.upstream_loading {
            atrace!(
                halted = self.halted,
                upstream_loading = self.upstream_loading,
                "Paginator: reveal gated"
            );
            return false;
        }
        self.windower.should_reveal(metrics)
    }
}

impl<F: PartialEq> Default for Paginator<F> {
    fn default() -> Self {
        Self::new(WindowerOptions::default())
    }
}
