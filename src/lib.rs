//! Fetch a Microsoft To Do hierarchy (lists, tasks, checklist items) into a flat,
//! groupable record set and write completion state back.

pub mod cli;
pub mod config;
pub mod error;
pub mod integrations;
pub mod models;
pub mod render;
pub mod sync;

pub use error::TodoError;
