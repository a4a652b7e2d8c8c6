//! crudgen CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod input;
pub mod observability;
pub mod output;
pub mod report;
pub mod session;
pub mod starter;
pub mod watch;

pub use config::{CrudgenConfig, OutputSettings};
pub use observability::LogFormat;
pub use output::{OutputWriter, WriteOutcome, WrittenFile};
pub use report::DiffSummary;
pub use session::{Session, SessionUpdate};
pub use watch::{ModelWatch, Refresh};
