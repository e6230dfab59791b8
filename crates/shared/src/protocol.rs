use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{DisplayTicket, NavigationDirection, PageHandle};

/// Instruction sent to the rendering container.
///
/// The container answers exactly once through the controller's
/// `display_finished(ticket, finished)`.
#[derive(Debug)]
pub struct DisplayRequest<P: ?Sized> {
    pub ticket: DisplayTicket,
    pub page: PageHandle<P>,
    pub direction: NavigationDirection,
    pub animated: bool,
}

impl<P: ?Sized> Clone for DisplayRequest<P> {
    fn clone(&self) -> Self {
        Self {
            ticket: self.ticket,
            page: self.page.clone(),
            direction: self.direction,
            animated: self.animated,
        }
    }
}

/// Inbound notifications emitted by the rendering container.
#[derive(Debug)]
pub enum ContainerEvent<P: ?Sized> {
    WillTransition {
        candidates: Vec<PageHandle<P>>,
    },
    DidFinishAnimating {
        completed: bool,
        previous: Vec<PageHandle<P>>,
    },
    DisplayFinished {
        ticket: DisplayTicket,
        finished: bool,
    },
}

/// Point-in-time view of the observable paging state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingSnapshot {
    pub current_index: Option<usize>,
    pub total_pages: usize,
    pub scroll_enabled: bool,
}

impl fmt::Display for PagingSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.current_index {
            Some(index) => write!(
                f,
                "currentIndex = {index}, totalPages = {}",
                self.total_pages
            ),
            None => write!(f, "currentIndex = -, totalPages = {}", self.total_pages),
        }
    }
}
