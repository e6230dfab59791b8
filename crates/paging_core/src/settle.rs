//! Display tickets and the post-animation settle pass.
//!
//! Some paging containers keep stale navigation state after an animated
//! display that overlapped another one. Every animated display that finishes
//! is therefore followed by the same display without animation.

use std::collections::HashMap;

use shared::{
    domain::{DisplayTicket, NavigationDirection, PageHandle},
    error::PagingError,
    protocol::DisplayRequest,
};
use tracing::trace;

#[derive(Debug)]
pub struct SettleTracker<P: ?Sized> {
    next_ticket: u64,
    in_flight: HashMap<DisplayTicket, DisplayRequest<P>>,
}

impl<P: ?Sized> Default for SettleTracker<P> {
    fn default() -> Self {
        Self {
            next_ticket: 1,
            in_flight: HashMap::new(),
        }
    }
}

impl<P: ?Sized> SettleTracker<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn issue(
        &mut self,
        page: PageHandle<P>,
        direction: NavigationDirection,
        animated: bool,
    ) -> DisplayRequest<P> {
        let ticket = DisplayTicket(self.next_ticket);
        self.next_ticket += 1;

        let request = DisplayRequest {
            ticket,
            page,
            direction,
            animated,
        };
        self.in_flight.insert(ticket, request.clone());
        request
    }

    /// Retires `ticket` and returns the settle display to send, if any.
    pub fn complete(
        &mut self,
        ticket: DisplayTicket,
        finished: bool,
    ) -> Result<Option<DisplayRequest<P>>, PagingError> {
        let request = self
            .in_flight
            .remove(&ticket)
            .ok_or(PagingError::UnknownTicket { ticket })?;

        if !(finished && request.animated) {
            trace!(%ticket, finished, animated = request.animated, "display retired");
            return Ok(None);
        }

        let settle = self.issue(request.page, request.direction, false);
        trace!(%ticket, settle_ticket = %settle.ticket, "reissuing display to settle");
        Ok(Some(settle))
    }
}
