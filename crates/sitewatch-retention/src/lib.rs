//! Rolling retention for high-frequency telemetry tables.
//!
//! Every registered collection has a watermark (`max_records`) and a batch
//! size (`delete_count`). Routine cleanup trims a collection that is over its
//! watermark by at least one batch, oldest rows first. Aggressive cleanup only
//! touches collections that overshot their watermark by more than half and
//! trims them exactly back to it.

mod engine;
mod error;
mod job;
mod orchestrator;
mod policy;
mod registry;

#[cfg(test)]
mod testing;

pub use engine::cleanup_collection;
pub use error::{Result, RetentionError};
pub use job::run_cleanup_job;
pub use orchestrator::{CleanupMode, CleanupOrchestrator, CleanupReport, CollectionOutcome};
pub use policy::{PolicyUpdate, RetentionPolicy};
pub use registry::{CollectionSize, PolicyRegistry, PolicyView, RegisteredCollection, SizeStatus};
