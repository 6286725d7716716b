//! Commit types for relnote.
//!
//! This crate provides the data model shared by every stage of the pipeline:
//! - [`CommitRecord`]: A commit as retrieved from Git
//! - [`ClassifiedEntry`]: A changelog line derived from one commit
//! - [`Category`] and [`Platform`]: the two axes entries are grouped by

mod entry;
mod record;

pub use entry::{Category, ClassifiedEntry, Platform};
pub use record::{Author, CommitRecord};
