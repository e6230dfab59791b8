//! In-memory stand-in for a paging widget.

use std::collections::VecDeque;

use paging_core::{ContainerEvent, DisplayRequest, DisplayTicket, PageHandle, RenderingContainer};
use tracing::debug;

#[derive(Debug)]
pub struct DemoPage {
    pub label: String,
    pub color: &'static str,
}

const COLORS: [&str; 5] = ["red", "yellow", "blue", "purple", "cyan"];

/// Hands out pages with rotating colors.
#[derive(Debug, Default)]
pub struct PageFactory {
    created: usize,
}

impl PageFactory {
    pub fn next_page(&mut self) -> PageHandle<DemoPage> {
        let color = COLORS[self.created % COLORS.len()];
        self.created += 1;
        PageHandle::new(DemoPage {
            label: format!("page-{}", self.created),
            color,
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingDisplay {
    ticket: DisplayTicket,
    animated: bool,
    finished: bool,
}

#[derive(Debug)]
pub struct SimulatedPager {
    visible: Option<PageHandle<DemoPage>>,
    pending: VecDeque<PendingDisplay>,
    scroll_enabled: bool,
    displays: usize,
}

impl Default for SimulatedPager {
    fn default() -> Self {
        Self {
            visible: None,
            pending: VecDeque::new(),
            scroll_enabled: true,
            displays: 0,
        }
    }
}

impl SimulatedPager {
    pub fn visible(&self) -> Option<&PageHandle<DemoPage>> {
        self.visible.as_ref()
    }

    pub fn scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    pub fn displays(&self) -> usize {
        self.displays
    }

    pub fn show(&mut self, page: Option<PageHandle<DemoPage>>) {
        self.visible = page;
    }

    /// Completion callbacks for every display issued so far.
    pub fn take_completions(&mut self) -> Vec<ContainerEvent<DemoPage>> {
        self.pending
            .drain(..)
            .map(|pending| ContainerEvent::DisplayFinished {
                ticket: pending.ticket,
                finished: pending.finished,
            })
            .collect()
    }
}

impl RenderingContainer<DemoPage> for SimulatedPager {
    fn display(&mut self, request: DisplayRequest<DemoPage>) {
        for pending in self.pending.iter_mut().filter(|pending| pending.animated) {
            pending.finished = false;
        }
        debug!(
            ticket = %request.ticket,
            page = %request.page.label,
            color = request.page.color,
            direction = ?request.direction,
            animated = request.animated,
            "simulated display"
        );
        self.displays += 1;
        self.pending.push_back(PendingDisplay {
            ticket: request.ticket,
            animated: request.animated,
            finished: true,
        });
        self.visible = Some(request.page);
    }

    fn clear(&mut self) {
        debug!("simulated display cleared");
        self.visible = None;
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
    }
}
