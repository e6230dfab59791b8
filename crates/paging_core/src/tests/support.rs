use shared::{
    domain::{DisplayTicket, NavigationDirection, PageHandle},
    protocol::DisplayRequest,
};

use crate::{container::RenderingContainer, controller::PagingController};

pub(crate) type Page = PageHandle<&'static str>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Display {
        ticket: DisplayTicket,
        page: &'static str,
        direction: NavigationDirection,
        animated: bool,
    },
    Clear,
    ScrollEnabled(bool),
}

/// A display call with the ticket stripped, for comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Shown {
    pub page: &'static str,
    pub direction: NavigationDirection,
    pub animated: bool,
}

pub(crate) fn shown(page: &'static str, direction: NavigationDirection, animated: bool) -> Shown {
    Shown {
        page,
        direction,
        animated,
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingContainer {
    pub calls: Vec<Call>,
}

impl RecordingContainer {
    pub(crate) fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    pub(crate) fn take_shown(&mut self) -> Vec<Shown> {
        self.take()
            .into_iter()
            .filter_map(|call| match call {
                Call::Display {
                    page,
                    direction,
                    animated,
                    ..
                } => Some(Shown {
                    page,
                    direction,
                    animated,
                }),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn last_ticket(&self) -> Option<DisplayTicket> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::Display { ticket, .. } => Some(*ticket),
            _ => None,
        })
    }
}

impl RenderingContainer<&'static str> for RecordingContainer {
    fn display(&mut self, request: DisplayRequest<&'static str>) {
        self.calls.push(Call::Display {
            ticket: request.ticket,
            page: *request.page,
            direction: request.direction,
            animated: request.animated,
        });
    }

    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.calls.push(Call::ScrollEnabled(enabled));
    }
}

pub(crate) fn pages(labels: &[&'static str]) -> Vec<Page> {
    labels.iter().map(|label| PageHandle::new(*label)).collect()
}

/// Controller already holding `labels`, with the initial display drained.
pub(crate) fn controller_with(
    labels: &[&'static str],
) -> (PagingController<&'static str, RecordingContainer>, Vec<Page>) {
    let all = pages(labels);
    let mut controller = PagingController::new(RecordingContainer::default());
    controller.set_all(all.clone());
    controller.container_mut().take();
    (controller, all)
}

pub(crate) fn current_label(
    controller: &PagingController<&'static str, RecordingContainer>,
) -> Option<&'static str> {
    controller.current_page().map(|page| **page)
}
