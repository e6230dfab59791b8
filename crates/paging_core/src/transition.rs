//! Reconciliation of the two-phase swipe protocol.
//!
//! The container announces a swipe with `will_transition` and reports its
//! outcome with `did_finish_animating`. Under a fast back-and-forth gesture
//! the announcement can fire once for two logical transitions, so the
//! committed "previous" pages are kept in a short history and used to recover
//! the real destination.

use tracing::debug;

const HISTORY_CAPACITY: usize = 2;

/// Fixed-capacity ring of committed "previous" indices, oldest first.
#[derive(Debug, Clone)]
pub struct TransitionHistory<const N: usize = HISTORY_CAPACITY> {
    slots: [usize; N],
    head: usize,
    len: usize,
}

impl<const N: usize> Default for TransitionHistory<N> {
    fn default() -> Self {
        Self {
            slots: [0; N],
            head: 0,
            len: 0,
        }
    }
}

impl<const N: usize> TransitionHistory<N> {
    pub fn seeded(index: usize) -> Self {
        let mut history = Self::default();
        history.push(index);
        history
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, index: usize) {
        if N == 0 {
            return;
        }
        let slot = (self.head + self.len) % N;
        self.slots[slot] = index;
        if self.len < N {
            self.len += 1;
        } else {
            self.head = (self.head + 1) % N;
        }
    }

    /// Entry `back` steps from the newest one; `0` is the newest.
    pub fn from_newest(&self, back: usize) -> Option<usize> {
        if back >= self.len {
            return None;
        }
        let offset = self.len - 1 - back;
        Some(self.slots[(self.head + offset) % N])
    }

    pub fn latest(&self) -> Option<usize> {
        self.from_newest(0)
    }

    pub fn second_to_last(&self) -> Option<usize> {
        self.from_newest(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).map(move |offset| self.slots[(self.head + offset) % N])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwipePhase {
    #[default]
    Idle,
    PendingSwipe {
        candidate: usize,
    },
}

/// Destination chosen for a committed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub index: usize,
    /// The container reported the page it was already heading to as the one
    /// it left, so the user flicked away and straight back.
    pub bounced: bool,
}

#[derive(Debug, Clone)]
pub struct TransitionReconciler {
    phase: SwipePhase,
    last_pending: usize,
    history: TransitionHistory,
}

impl Default for TransitionReconciler {
    fn default() -> Self {
        Self::new(0)
    }
}

impl TransitionReconciler {
    pub fn new(current: usize) -> Self {
        Self {
            phase: SwipePhase::Idle,
            last_pending: current,
            history: TransitionHistory::seeded(current),
        }
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub fn last_pending(&self) -> usize {
        self.last_pending
    }

    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    pub fn reset(&mut self, current: usize) {
        *self = Self::new(current);
    }

    pub fn will_transition(&mut self, candidate: usize) {
        debug!(candidate, previous_phase = ?self.phase, "swipe pending");
        self.last_pending = candidate;
        self.phase = SwipePhase::PendingSwipe { candidate };
    }

    /// Ends the current swipe cycle; the pending index survives it.
    pub fn abandon(&mut self) {
        debug!(pending = self.last_pending, "swipe abandoned");
        self.phase = SwipePhase::Idle;
    }

    pub fn did_finish(&mut self, previous: usize) -> Resolution {
        if self.phase == SwipePhase::Idle {
            debug!(previous, "swipe finished without a fresh announcement");
        }
        self.phase = SwipePhase::Idle;
        self.history.push(previous);

        if previous == self.last_pending {
            let index = self.history.second_to_last().unwrap_or(self.last_pending);
            debug!(previous, index, "swipe bounced back");
            Resolution {
                index,
                bounced: true,
            }
        } else {
            debug!(previous, index = self.last_pending, "swipe committed");
            Resolution {
                index: self.last_pending,
                bounced: false,
            }
        }
    }
}
