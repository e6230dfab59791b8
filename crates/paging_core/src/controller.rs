//! Orchestration of the page store, index tracker and swipe reconciler.

use shared::{
    domain::{DisplayTicket, NavigationDirection, PageHandle},
    error::PagingError,
    protocol::{ContainerEvent, PagingSnapshot},
};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info, trace};

use crate::{
    container::RenderingContainer,
    index::{IndexTracker, Refresh},
    options::PagingOptions,
    settle::SettleTracker,
    state::PagingState,
    store::PageStore,
    transition::{SwipePhase, TransitionReconciler},
};

/// Keeps the displayed page, the current index and the page sequence in
/// agreement while the caller, structural edits and user swipes all move
/// them.
///
/// Every operation has a permissive form that silently ignores invalid input
/// and a `try_*` form that reports why nothing happened.
pub struct PagingController<P: ?Sized, C: RenderingContainer<P>> {
    store: PageStore<P>,
    tracker: IndexTracker,
    reconciler: TransitionReconciler,
    settle: SettleTracker<P>,
    state: PagingState<P>,
    container: C,
    options: PagingOptions,
    scroll_enabled: bool,
}

impl<P: ?Sized, C: RenderingContainer<P>> std::fmt::Debug for PagingController<P, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagingController")
            .field("snapshot", &self.snapshot())
            .field("phase", &self.reconciler.phase())
            .field("in_flight_displays", &self.settle.in_flight())
            .finish_non_exhaustive()
    }
}

fn ignore(operation: &'static str, result: Result<(), PagingError>) {
    if let Err(error) = result {
        debug!(operation, %error, "paging operation ignored");
    }
}

impl<P: ?Sized, C: RenderingContainer<P>> PagingController<P, C> {
    pub fn new(container: C) -> Self {
        Self::with_options(container, PagingOptions::default())
    }

    pub fn with_options(container: C, options: PagingOptions) -> Self {
        Self {
            store: PageStore::new(),
            tracker: IndexTracker::new(),
            reconciler: TransitionReconciler::default(),
            settle: SettleTracker::new(),
            state: PagingState::new(),
            container,
            options,
            scroll_enabled: true,
        }
    }

    pub fn options(&self) -> &PagingOptions {
        &self.options
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    // ---- observable state ------------------------------------------------

    pub fn current_index(&self) -> Option<usize> {
        self.tracker.current(self.store.len())
    }

    pub fn current_page(&self) -> Option<&PageHandle<P>> {
        self.current_index().and_then(|index| self.store.get(index))
    }

    pub fn total_pages(&self) -> usize {
        self.store.len()
    }

    pub fn pages(&self) -> &[PageHandle<P>] {
        self.store.pages()
    }

    pub fn swipe_phase(&self) -> SwipePhase {
        self.reconciler.phase()
    }

    pub fn snapshot(&self) -> PagingSnapshot {
        PagingSnapshot {
            current_index: self.current_index(),
            total_pages: self.total_pages(),
            scroll_enabled: self.scroll_enabled,
        }
    }

    pub fn subscribe_current_index(&self) -> watch::Receiver<Option<usize>> {
        self.state.subscribe_current_index()
    }

    pub fn subscribe_current_page(&self) -> watch::Receiver<Option<PageHandle<P>>> {
        self.state.subscribe_current_page()
    }

    pub fn subscribe_total_pages(&self) -> watch::Receiver<usize> {
        self.state.subscribe_total_pages()
    }

    pub fn subscribe_snapshot(&self) -> watch::Receiver<PagingSnapshot> {
        self.state.subscribe_snapshot()
    }

    pub fn current_index_stream(&self) -> WatchStream<Option<usize>> {
        self.state.current_index_stream()
    }

    pub fn total_pages_stream(&self) -> WatchStream<usize> {
        self.state.total_pages_stream()
    }

    pub fn snapshot_stream(&self) -> WatchStream<PagingSnapshot> {
        self.state.snapshot_stream()
    }

    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    pub fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
        self.container.set_scroll_enabled(enabled);
        self.publish();
    }

    // ---- structural mutations --------------------------------------------

    pub fn set_all<I>(&mut self, pages: I)
    where
        I: IntoIterator<Item = PageHandle<P>>,
    {
        let refresh = self.store.set_all(&mut self.tracker, pages);
        self.reconciler.reset(self.tracker.raw());
        info!(total_pages = self.store.len(), "page sequence replaced");
        self.refresh(refresh);
        self.publish();
    }

    pub fn append(&mut self, page: PageHandle<P>) {
        let refresh = self.store.append(page);
        debug!(total_pages = self.store.len(), "page appended");
        self.refresh(refresh);
        self.publish();
    }

    pub fn insert(&mut self, page: PageHandle<P>, index: usize) {
        ignore("insert", self.try_insert(page, index));
    }

    pub fn try_insert(&mut self, page: PageHandle<P>, index: usize) -> Result<(), PagingError> {
        let refresh = self.store.insert(&mut self.tracker, page, index)?;
        debug!(index, current = self.tracker.raw(), "page inserted");
        self.refresh(refresh);
        self.publish();
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) {
        ignore("remove_at", self.try_remove_at(index));
    }

    pub fn try_remove_at(&mut self, index: usize) -> Result<(), PagingError> {
        let (_, refresh) = self.store.remove(&mut self.tracker, index)?;
        debug!(index, "page removed");
        self.after_remove(refresh);
        Ok(())
    }

    pub fn remove_page(&mut self, page: &PageHandle<P>) {
        ignore("remove_page", self.try_remove_page(page));
    }

    pub fn try_remove_page(&mut self, page: &PageHandle<P>) -> Result<(), PagingError> {
        let (_, refresh) = self.store.remove_page(&mut self.tracker, page)?;
        debug!("page removed by identity");
        self.after_remove(refresh);
        Ok(())
    }

    pub fn remove_current(&mut self) {
        ignore("remove_current", self.try_remove_current());
    }

    pub fn try_remove_current(&mut self) -> Result<(), PagingError> {
        self.try_remove_at(self.tracker.raw())
    }

    pub fn reset(&mut self) {
        let refresh = self.store.reset(&mut self.tracker);
        self.reconciler.reset(self.tracker.raw());
        info!("page sequence reset");
        self.refresh(refresh);
        self.publish();
    }

    fn after_remove(&mut self, refresh: Refresh) {
        trace!(
            current = self.tracker.raw(),
            direction = ?refresh.direction,
            animated = refresh.animated,
            "refreshing after removal"
        );
        self.refresh(refresh);
        self.publish();
    }

    // ---- programmatic navigation -----------------------------------------

    pub fn scroll_to(&mut self, index: usize, animated: bool) {
        ignore("scroll_to", self.try_scroll_to(index, animated));
    }

    /// Displays `index` and moves the current index there without waiting
    /// for the animation to finish.
    pub fn try_scroll_to(&mut self, index: usize, animated: bool) -> Result<(), PagingError> {
        let direction = self.tracker.plan_scroll(index, self.store.len())?;
        if let Some(page) = self.store.get(index).cloned() {
            self.display(page, direction, animated);
        }
        self.tracker.set(index);
        debug!(index, ?direction, animated, "scrolled");
        self.publish();
        Ok(())
    }

    pub fn scroll_next(&mut self, animated: bool) {
        ignore("scroll_next", self.try_scroll_next(animated));
    }

    pub fn try_scroll_next(&mut self, animated: bool) -> Result<(), PagingError> {
        self.try_scroll_to(self.tracker.next_target(), animated)
    }

    pub fn scroll_previous(&mut self, animated: bool) {
        ignore("scroll_previous", self.try_scroll_previous(animated));
    }

    pub fn try_scroll_previous(&mut self, animated: bool) -> Result<(), PagingError> {
        let target = self.tracker.previous_target()?;
        self.try_scroll_to(target, animated)
    }

    // ---- container callbacks ---------------------------------------------

    pub fn page_before(&self, page: &PageHandle<P>) -> Option<PageHandle<P>> {
        self.store.before(page).cloned()
    }

    pub fn page_after(&self, page: &PageHandle<P>) -> Option<PageHandle<P>> {
        self.store.after(page).cloned()
    }

    pub fn will_transition(&mut self, candidates: &[PageHandle<P>]) {
        ignore("will_transition", self.try_will_transition(candidates));
    }

    pub fn try_will_transition(&mut self, candidates: &[PageHandle<P>]) -> Result<(), PagingError> {
        let candidate = candidates
            .first()
            .and_then(|page| self.store.position_of(page))
            .ok_or(PagingError::PageNotFound)?;
        self.reconciler.will_transition(candidate);
        Ok(())
    }

    pub fn did_finish_animating(&mut self, completed: bool, previous: &[PageHandle<P>]) {
        ignore(
            "did_finish_animating",
            self.try_did_finish_animating(completed, previous),
        );
    }

    pub fn try_did_finish_animating(
        &mut self,
        completed: bool,
        previous: &[PageHandle<P>],
    ) -> Result<(), PagingError> {
        if !completed {
            self.reconciler.abandon();
            return Ok(());
        }

        let Some(previous_index) = previous.first().and_then(|page| self.store.position_of(page))
        else {
            self.reconciler.abandon();
            return Err(PagingError::PageNotFound);
        };

        let resolution = self.reconciler.did_finish(previous_index);
        let len = self.store.len();
        if resolution.index >= len {
            return Err(PagingError::out_of_bounds(resolution.index, len));
        }

        self.tracker.set(resolution.index);
        debug!(
            previous_index,
            current = resolution.index,
            bounced = resolution.bounced,
            "swipe reconciled"
        );
        self.publish();
        Ok(())
    }

    pub fn display_finished(&mut self, ticket: DisplayTicket, finished: bool) {
        ignore("display_finished", self.try_display_finished(ticket, finished));
    }

    pub fn try_display_finished(
        &mut self,
        ticket: DisplayTicket,
        finished: bool,
    ) -> Result<(), PagingError> {
        if let Some(settle) = self.settle.complete(ticket, finished)? {
            self.container.display(settle);
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: ContainerEvent<P>) {
        match event {
            ContainerEvent::WillTransition { candidates } => self.will_transition(&candidates),
            ContainerEvent::DidFinishAnimating {
                completed,
                previous,
            } => self.did_finish_animating(completed, &previous),
            ContainerEvent::DisplayFinished { ticket, finished } => {
                self.display_finished(ticket, finished)
            }
        }
    }

    // ---- internals -------------------------------------------------------

    fn display(&mut self, page: PageHandle<P>, direction: NavigationDirection, animated: bool) {
        let request = self.settle.issue(page, direction, animated);
        trace!(ticket = %request.ticket, ?direction, animated, "display requested");
        self.container.display(request);
    }

    /// Re-presents the page at the current index, or clears the container
    /// when there is nothing to show.
    fn refresh(&mut self, refresh: Refresh) {
        match self.current_page().cloned() {
            Some(page) => self.display(page, refresh.direction, refresh.animated),
            None if self.store.is_empty() => {
                trace!("container cleared");
                self.container.clear();
            }
            None => {}
        }
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        if self.state.publish(self.current_page().cloned(), snapshot) {
            trace!(
                current_index = ?snapshot.current_index,
                total_pages = snapshot.total_pages,
                "paging state published"
            );
        }
    }
}

impl<P: ?Sized + Send + Sync + 'static, C: RenderingContainer<P>> PagingController<P, C> {
    pub fn current_page_stream(&self) -> WatchStream<Option<PageHandle<P>>> {
        self.state.current_page_stream()
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
