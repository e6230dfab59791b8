//! Drives a controller through scripted steps the way a host screen would:
//! buttons become queued commands, the simulated widget answers with its
//! completion and swipe callbacks.

use crossbeam_channel::Receiver;
use paging_core::{
    command_queue, drain_pending, ContainerEvent, PagingCommand, PagingController, PagingHandle,
    PagingSnapshot,
};
use tracing::{debug, info, warn};

use crate::{
    config::Settings,
    script::Step,
    simulator::{DemoPage, PageFactory, SimulatedPager},
};

pub struct DemoSession {
    controller: PagingController<DemoPage, SimulatedPager>,
    handle: PagingHandle<DemoPage>,
    commands: Receiver<PagingCommand<DemoPage>>,
    factory: PageFactory,
}

impl DemoSession {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let options = settings.options();
        let (handle, commands) = command_queue(options.command_queue_capacity);
        let mut session = Self {
            controller: PagingController::with_options(SimulatedPager::default(), options),
            handle,
            commands,
            factory: PageFactory::default(),
        };

        let pages = (0..settings.initial_pages)
            .map(|_| session.factory.next_page())
            .collect();
        session.send(PagingCommand::SetAll(pages))?;
        session.pump()?;
        Ok(session)
    }

    pub fn controller(&self) -> &PagingController<DemoPage, SimulatedPager> {
        &self.controller
    }

    pub fn snapshot(&self) -> PagingSnapshot {
        self.controller.snapshot()
    }

    pub fn current_label(&self) -> Option<&str> {
        self.controller
            .current_page()
            .map(|page| page.label.as_str())
    }

    pub fn apply(&mut self, step: Step) -> anyhow::Result<()> {
        debug!(?step, "applying step");
        match step {
            Step::Next => self.send(PagingCommand::ScrollNext { animated: None })?,
            Step::Previous => self.send(PagingCommand::ScrollPrevious { animated: None })?,
            Step::GoTo(index) => self.send(PagingCommand::ScrollTo {
                index,
                animated: None,
            })?,
            Step::Add => {
                let page = self.factory.next_page();
                self.send(PagingCommand::Append(page))?;
            }
            Step::Insert(index) => {
                let page = self.factory.next_page();
                self.send(PagingCommand::Insert { page, index })?;
            }
            Step::Remove(index) => self.send(PagingCommand::RemoveAt { index })?,
            Step::RemoveCurrent => self.send(PagingCommand::RemoveCurrent)?,
            Step::Reset => self.send(PagingCommand::Reset)?,
            Step::Swipe { forward, completed } => self.swipe(forward, completed)?,
            Step::Bounce => self.bounce()?,
            Step::Lock => self.send(PagingCommand::SetScrollEnabled(false))?,
            Step::Unlock => self.send(PagingCommand::SetScrollEnabled(true))?,
        }
        self.pump()
    }

    /// Queues one command and applies it before anything else is queued, so
    /// a queue of capacity 1 is enough for every step.
    fn send(&mut self, command: PagingCommand<DemoPage>) -> anyhow::Result<()> {
        self.handle.dispatch(command)?;
        drain_pending(&mut self.controller, &self.commands);
        Ok(())
    }

    fn event(&mut self, event: ContainerEvent<DemoPage>) -> anyhow::Result<()> {
        self.handle.event(event)?;
        drain_pending(&mut self.controller, &self.commands);
        Ok(())
    }

    /// Feeds display completions back until the widget has nothing left to
    /// report.
    fn pump(&mut self) -> anyhow::Result<()> {
        loop {
            drain_pending(&mut self.controller, &self.commands);
            let completions = self.controller.container_mut().take_completions();
            if completions.is_empty() {
                return Ok(());
            }
            for event in completions {
                self.event(event)?;
            }
        }
    }

    fn swipe(&mut self, forward: bool, completed: bool) -> anyhow::Result<()> {
        let pager = self.controller.container();
        if !pager.scroll_enabled() {
            info!("swipe ignored while scrolling is disabled");
            return Ok(());
        }
        let Some(visible) = pager.visible().cloned() else {
            warn!("nothing to swipe");
            return Ok(());
        };
        let target = if forward {
            self.controller.page_after(&visible)
        } else {
            self.controller.page_before(&visible)
        };
        let Some(target) = target else {
            info!(forward, "swipe hit the edge");
            return Ok(());
        };

        self.event(ContainerEvent::WillTransition {
            candidates: vec![target.clone()],
        })?;
        self.event(ContainerEvent::DidFinishAnimating {
            completed,
            previous: vec![visible],
        })?;
        if completed {
            self.controller.container_mut().show(Some(target));
        }
        Ok(())
    }

    /// A flick away and straight back reported as a single transition.
    fn bounce(&mut self) -> anyhow::Result<()> {
        let Some(visible) = self.controller.container().visible().cloned() else {
            warn!("nothing to bounce");
            return Ok(());
        };

        self.event(ContainerEvent::WillTransition {
            candidates: vec![visible.clone()],
        })?;
        self.event(ContainerEvent::DidFinishAnimating {
            completed: true,
            previous: vec![visible],
        })?;
        let settled = self.controller.current_page().cloned();
        self.controller.container_mut().show(settled);
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
