//! Command queue that serializes paging calls from other threads onto the
//! thread that owns the controller.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use shared::{domain::PageHandle, error::PagingError, protocol::ContainerEvent};
use tracing::debug;

use crate::{container::RenderingContainer, controller::PagingController};

#[derive(Debug)]
pub enum PagingCommand<P: ?Sized> {
    SetAll(Vec<PageHandle<P>>),
    Append(PageHandle<P>),
    Insert {
        page: PageHandle<P>,
        index: usize,
    },
    RemoveAt {
        index: usize,
    },
    RemovePage(PageHandle<P>),
    RemoveCurrent,
    Reset,
    ScrollTo {
        index: usize,
        animated: Option<bool>,
    },
    ScrollNext {
        animated: Option<bool>,
    },
    ScrollPrevious {
        animated: Option<bool>,
    },
    SetScrollEnabled(bool),
    Container(ContainerEvent<P>),
    Shutdown,
}

impl<P: ?Sized> PagingCommand<P> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetAll(_) => "set_all",
            Self::Append(_) => "append",
            Self::Insert { .. } => "insert",
            Self::RemoveAt { .. } => "remove_at",
            Self::RemovePage(_) => "remove_page",
            Self::RemoveCurrent => "remove_current",
            Self::Reset => "reset",
            Self::ScrollTo { .. } => "scroll_to",
            Self::ScrollNext { .. } => "scroll_next",
            Self::ScrollPrevious { .. } => "scroll_previous",
            Self::SetScrollEnabled(_) => "set_scroll_enabled",
            Self::Container(ContainerEvent::WillTransition { .. }) => "will_transition",
            Self::Container(ContainerEvent::DidFinishAnimating { .. }) => "did_finish_animating",
            Self::Container(ContainerEvent::DisplayFinished { .. }) => "display_finished",
            Self::Shutdown => "shutdown",
        }
    }
}

/// Cloneable producer side of the command queue.
#[derive(Debug)]
pub struct PagingHandle<P: ?Sized> {
    tx: Sender<PagingCommand<P>>,
}

impl<P: ?Sized> Clone for PagingHandle<P> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

pub fn command_queue<P: ?Sized>(capacity: usize) -> (PagingHandle<P>, Receiver<PagingCommand<P>>) {
    let (tx, rx) = bounded(capacity);
    (PagingHandle { tx }, rx)
}

impl<P: ?Sized> PagingHandle<P> {
    pub fn dispatch(&self, command: PagingCommand<P>) -> Result<(), PagingError> {
        let name = command.name();
        match self.tx.try_send(command) {
            Ok(()) => {
                debug!(command = name, "queued paging command");
                Ok(())
            }
            Err(TrySendError::Full(_)) => Err(PagingError::QueueFull),
            Err(TrySendError::Disconnected(_)) => Err(PagingError::Disconnected),
        }
    }

    pub fn event(&self, event: ContainerEvent<P>) -> Result<(), PagingError> {
        self.dispatch(PagingCommand::Container(event))
    }
}

impl<P: ?Sized, C: RenderingContainer<P>> PagingController<P, C> {
    /// Applies one queued command. Returns `false` on [`PagingCommand::Shutdown`].
    pub fn apply(&mut self, command: PagingCommand<P>) -> bool {
        let options = *self.options();
        match command {
            PagingCommand::SetAll(pages) => self.set_all(pages),
            PagingCommand::Append(page) => self.append(page),
            PagingCommand::Insert { page, index } => self.insert(page, index),
            PagingCommand::RemoveAt { index } => self.remove_at(index),
            PagingCommand::RemovePage(page) => self.remove_page(&page),
            PagingCommand::RemoveCurrent => self.remove_current(),
            PagingCommand::Reset => self.reset(),
            PagingCommand::ScrollTo { index, animated } => {
                self.scroll_to(index, options.animated(animated))
            }
            PagingCommand::ScrollNext { animated } => self.scroll_next(options.animated(animated)),
            PagingCommand::ScrollPrevious { animated } => {
                self.scroll_previous(options.animated(animated))
            }
            PagingCommand::SetScrollEnabled(enabled) => self.set_scroll_enabled(enabled),
            PagingCommand::Container(event) => self.handle_event(event),
            PagingCommand::Shutdown => return false,
        }
        true
    }
}

/// Blocks on the queue and applies commands until shutdown or until every
/// handle is dropped.
pub fn run_command_loop<P: ?Sized, C: RenderingContainer<P>>(
    controller: &mut PagingController<P, C>,
    commands: &Receiver<PagingCommand<P>>,
) {
    for command in commands.iter() {
        if !controller.apply(command) {
            debug!("paging command loop shut down");
            return;
        }
    }
    debug!("paging command queue disconnected");
}

/// Applies whatever is queued without blocking; returns how many commands ran.
pub fn drain_pending<P: ?Sized, C: RenderingContainer<P>>(
    controller: &mut PagingController<P, C>,
    commands: &Receiver<PagingCommand<P>>,
) -> usize {
    let mut applied = 0;
    for command in commands.try_iter() {
        applied += 1;
        if !controller.apply(command) {
            break;
        }
    }
    applied
}

#[cfg(test)]
#[path = "tests/handle_tests.rs"]
mod tests;
