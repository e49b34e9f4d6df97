//! Progress handler trait and events

use std::time::Duration;

/// Events emitted while an extraction run progresses
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Run started with this many extractors selected
    Started { extractors: usize },

    /// An extractor began reading its registry
    ExtractorStarted { file_name: String },

    /// An extractor produced its document
    ExtractorComplete {
        file_name: String,
        /// Top-level array items or object keys in the document
        entries: usize,
        duration: Duration,
    },

    /// All documents were written
    Completed {
        files_written: usize,
        total_time: Duration,
    },

    /// The run was aborted; nothing was written
    Failed { error: String },
}

/// Trait for handling progress events during extraction
pub trait ProgressHandler: Send + Sync {
    /// Called when a progress event occurs
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &ProgressEvent) {}
}
