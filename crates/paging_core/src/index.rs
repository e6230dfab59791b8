//! Current-position bookkeeping.

use shared::{domain::NavigationDirection, error::PagingError};

/// How the container should re-present the current page after a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refresh {
    pub direction: NavigationDirection,
    pub animated: bool,
}

impl Refresh {
    pub const fn still(direction: NavigationDirection) -> Self {
        Self {
            direction,
            animated: false,
        }
    }

    pub const fn animated(direction: NavigationDirection) -> Self {
        Self {
            direction,
            animated: true,
        }
    }
}

/// Holds the raw current index.
///
/// The raw value is kept at `0` while the sequence is empty; callers read it
/// through [`IndexTracker::current`] which hides it in that case.
#[derive(Debug, Clone, Default)]
pub struct IndexTracker {
    current: usize,
}

impl IndexTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self) -> usize {
        self.current
    }

    pub fn current(&self, len: usize) -> Option<usize> {
        (self.current < len).then_some(self.current)
    }

    pub fn set(&mut self, index: usize) {
        self.current = index;
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Validates a scroll target and picks the animation direction for it.
    pub fn plan_scroll(&self, target: usize, len: usize) -> Result<NavigationDirection, PagingError> {
        if target >= len {
            return Err(PagingError::out_of_bounds(target, len));
        }
        if target == self.current {
            return Err(PagingError::AlreadyAtIndex { index: target });
        }
        Ok(NavigationDirection::toward(self.current, target))
    }

    pub fn next_target(&self) -> usize {
        self.current.saturating_add(1)
    }

    pub fn previous_target(&self) -> Result<usize, PagingError> {
        self.current.checked_sub(1).ok_or(PagingError::AtFirstPage)
    }

    /// Keeps pointing at the same logical page after an insertion.
    pub fn after_insert(&mut self, index: usize, len_before: usize) {
        if len_before > 0 && index <= self.current {
            self.current += 1;
        }
    }

    /// Adjusts for a removal and returns how the vacated slot is refilled.
    pub fn after_remove(&mut self, index: usize, len_before: usize) -> Refresh {
        if index < self.current {
            self.current -= 1;
            Refresh::still(NavigationDirection::Forward)
        } else if index == self.current {
            if index + 1 == len_before {
                self.current = self.current.saturating_sub(1);
                Refresh::animated(NavigationDirection::Reverse)
            } else {
                Refresh::animated(NavigationDirection::Forward)
            }
        } else {
            Refresh::still(NavigationDirection::Forward)
        }
    }
}
