//! Paging controller core.
//!
//! Tracks an ordered set of pages shown one at a time by an external paging
//! container, keeps the current index consistent across programmatic
//! scrolling, structural edits and user swipes, and publishes the result as
//! observable state.

pub mod container;
pub mod controller;
pub mod handle;
pub mod index;
pub mod options;
pub mod settle;
pub mod state;
pub mod store;
pub mod transition;

pub use container::RenderingContainer;
pub use controller::PagingController;
pub use handle::{command_queue, drain_pending, run_command_loop, PagingCommand, PagingHandle};
pub use options::PagingOptions;
pub use shared::{
    domain::{DisplayTicket, NavigationDirection, PageHandle},
    error::PagingError,
    protocol::{ContainerEvent, DisplayRequest, PagingSnapshot},
};
pub use transition::SwipePhase;

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
