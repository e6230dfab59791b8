//! Observable paging state.
//!
//! Each value lives in a `watch` cell owned by the controller. Publishing
//! the same value twice does not wake subscribers.

use shared::{domain::PageHandle, protocol::PagingSnapshot};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

pub struct PagingState<P: ?Sized> {
    current_index: watch::Sender<Option<usize>>,
    current_page: watch::Sender<Option<PageHandle<P>>>,
    total_pages: watch::Sender<usize>,
    snapshot: watch::Sender<PagingSnapshot>,
}

impl<P: ?Sized> std::fmt::Debug for PagingState<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagingState")
            .field("snapshot", &*self.snapshot.borrow())
            .finish_non_exhaustive()
    }
}

impl<P: ?Sized> Default for PagingState<P> {
    fn default() -> Self {
        let (current_index, _) = watch::channel(None);
        let (current_page, _) = watch::channel(None);
        let (total_pages, _) = watch::channel(0);
        let (snapshot, _) = watch::channel(PagingSnapshot {
            current_index: None,
            total_pages: 0,
            scroll_enabled: true,
        });
        Self {
            current_index,
            current_page,
            total_pages,
            snapshot,
        }
    }
}

fn replace_if_changed<T: PartialEq>(sender: &watch::Sender<T>, value: T) -> bool {
    sender.send_if_modified(|current| {
        if *current == value {
            false
        } else {
            *current = value;
            true
        }
    })
}

impl<P: ?Sized> PagingState<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes fresh values; returns whether anything changed.
    pub fn publish(
        &self,
        current_page: Option<PageHandle<P>>,
        snapshot: PagingSnapshot,
    ) -> bool {
        let mut changed = replace_if_changed(&self.current_index, snapshot.current_index);
        changed |= replace_if_changed(&self.current_page, current_page);
        changed |= replace_if_changed(&self.total_pages, snapshot.total_pages);
        changed |= replace_if_changed(&self.snapshot, snapshot);
        changed
    }

    pub fn snapshot(&self) -> PagingSnapshot {
        *self.snapshot.borrow()
    }

    pub fn subscribe_current_index(&self) -> watch::Receiver<Option<usize>> {
        self.current_index.subscribe()
    }

    pub fn subscribe_current_page(&self) -> watch::Receiver<Option<PageHandle<P>>> {
        self.current_page.subscribe()
    }

    pub fn subscribe_total_pages(&self) -> watch::Receiver<usize> {
        self.total_pages.subscribe()
    }

    pub fn subscribe_snapshot(&self) -> watch::Receiver<PagingSnapshot> {
        self.snapshot.subscribe()
    }

    pub fn current_index_stream(&self) -> WatchStream<Option<usize>> {
        WatchStream::new(self.subscribe_current_index())
    }

    pub fn total_pages_stream(&self) -> WatchStream<usize> {
        WatchStream::new(self.subscribe_total_pages())
    }

    pub fn snapshot_stream(&self) -> WatchStream<PagingSnapshot> {
        WatchStream::new(self.subscribe_snapshot())
    }
}

impl<P: ?Sized + Send + Sync + 'static> PagingState<P> {
    pub fn current_page_stream(&self) -> WatchStream<Option<PageHandle<P>>> {
        WatchStream::new(self.subscribe_current_page())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(current_index: Option<usize>, total_pages: usize) -> PagingSnapshot {
        PagingSnapshot {
            current_index,
            total_pages,
            scroll_enabled: true,
        }
    }

    #[test]
    fn republishing_identical_values_does_not_notify() {
        let state: PagingState<&'static str> = PagingState::new();
        let page = PageHandle::new("a");
        let mut index_rx = state.subscribe_current_index();
        let mut page_rx = state.subscribe_current_page();

        assert!(state.publish(Some(page.clone()), snapshot(Some(0), 1)));
        assert!(index_rx.has_changed().expect("sender alive"));
        index_rx.borrow_and_update();
        page_rx.borrow_and_update();

        assert!(!state.publish(Some(page), snapshot(Some(0), 1)));
        assert!(!index_rx.has_changed().expect("sender alive"));
        assert!(!page_rx.has_changed().expect("sender alive"));
    }

    #[test]
    fn page_identity_change_notifies_even_with_equal_content() {
        let state: PagingState<&'static str> = PagingState::new();
        let mut page_rx = state.subscribe_current_page();
        state.publish(Some(PageHandle::new("a")), snapshot(Some(0), 1));
        page_rx.borrow_and_update();

        state.publish(Some(PageHandle::new("a")), snapshot(Some(0), 1));

        assert!(page_rx.has_changed().expect("sender alive"));
    }

    #[test]
    fn publishing_without_subscribers_still_updates_snapshot() {
        let state: PagingState<&'static str> = PagingState::new();
        state.publish(None, snapshot(None, 0));
        state.publish(Some(PageHandle::new("a")), snapshot(Some(0), 1));

        assert_eq!(state.snapshot(), snapshot(Some(0), 1));
    }
}
