//! Ordered page sequence and its structural mutations.

use shared::{domain::{NavigationDirection, PageHandle}, error::PagingError};

use crate::index::{IndexTracker, Refresh};

/// Ordered page handles. Lookups go by identity and resolve to the first
/// matching position when a handle appears more than once.
#[derive(Debug)]
pub struct PageStore<P: ?Sized> {
    pages: Vec<PageHandle<P>>,
}

impl<P: ?Sized> Default for PageStore<P> {
    fn default() -> Self {
        Self { pages: Vec::new() }
    }
}

impl<P: ?Sized> PageStore<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[PageHandle<P>] {
        &self.pages
    }

    pub fn get(&self, index: usize) -> Option<&PageHandle<P>> {
        self.pages.get(index)
    }

    pub fn position_of(&self, page: &PageHandle<P>) -> Option<usize> {
        self.pages.iter().position(|candidate| candidate.ptr_eq(page))
    }

    pub fn before(&self, page: &PageHandle<P>) -> Option<&PageHandle<P>> {
        let index = self.position_of(page)?;
        index.checked_sub(1).and_then(|previous| self.pages.get(previous))
    }

    pub fn after(&self, page: &PageHandle<P>) -> Option<&PageHandle<P>> {
        let index = self.position_of(page)?;
        self.pages.get(index + 1)
    }

    /// Empties the sequence and rewinds the tracker.
    pub fn reset(&mut self, tracker: &mut IndexTracker) -> Refresh {
        self.pages.clear();
        tracker.reset();
        Refresh::still(NavigationDirection::Forward)
    }

    pub fn set_all<I>(&mut self, tracker: &mut IndexTracker, pages: I) -> Refresh
    where
        I: IntoIterator<Item = PageHandle<P>>,
    {
        let refresh = self.reset(tracker);
        self.pages.extend(pages);
        refresh
    }

    pub fn append(&mut self, page: PageHandle<P>) -> Refresh {
        self.pages.push(page);
        Refresh::still(NavigationDirection::Forward)
    }

    pub fn insert(
        &mut self,
        tracker: &mut IndexTracker,
        page: PageHandle<P>,
        index: usize,
    ) -> Result<Refresh, PagingError> {
        let len_before = self.pages.len();
        if index > len_before {
            return Err(PagingError::InsertOutOfBounds {
                index,
                len: len_before,
            });
        }

        self.pages.insert(index, page);
        tracker.after_insert(index, len_before);
        Ok(Refresh::still(NavigationDirection::Forward))
    }

    pub fn remove(
        &mut self,
        tracker: &mut IndexTracker,
        index: usize,
    ) -> Result<(PageHandle<P>, Refresh), PagingError> {
        let len_before = self.pages.len();
        if index >= len_before {
            return Err(PagingError::out_of_bounds(index, len_before));
        }

        let refresh = tracker.after_remove(index, len_before);
        let removed = self.pages.remove(index);
        Ok((removed, refresh))
    }

    pub fn remove_page(
        &mut self,
        tracker: &mut IndexTracker,
        page: &PageHandle<P>,
    ) -> Result<(PageHandle<P>, Refresh), PagingError> {
        let index = self.position_of(page).ok_or(PagingError::PageNotFound)?;
        self.remove(tracker, index)
    }
}
