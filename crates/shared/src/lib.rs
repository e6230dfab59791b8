//! Vocabulary shared between the paging core and its hosts.

pub mod domain;
pub mod error;
pub mod protocol;
