//! Git abstraction layer for relnote.
//!
//! This crate provides the commit record source:
//! - Repository discovery
//! - Commit retrieval between two revisions
//! - Branch and remote lookups used to presume revisions

mod error;
mod remote;
mod repository;

pub use error::{GitError, GitResult};
pub use remote::web_url;
pub use repository::Repository;
