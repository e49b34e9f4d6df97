//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, info, warn};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { extractors } => {
                info!(extractors, "Starting extraction");
            }
            ProgressEvent::ExtractorStarted { file_name } => {
                debug!(file = %file_name, "Running extractor");
            }
            ProgressEvent::ExtractorComplete {
                file_name,
                entries,
                duration,
            } => {
                info!(
                    file = %file_name,
                    entries,
                    duration_ms = duration.as_millis(),
                    "Extractor complete"
                );
            }
            ProgressEvent::Completed {
                files_written,
                total_time,
            } => {
                info!(
                    files = files_written,
                    total_time_ms = total_time.as_millis(),
                    "Extraction complete"
                );
            }
            ProgressEvent::Failed { error } => {
                warn!(error = %error, "Extraction failed, no files written");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_logging_all_events() {
        let handler = LoggingHandler;

        let events = vec![
            ProgressEvent::Started { extractors: 3 },
            ProgressEvent::ExtractorStarted {
                file_name: "noise_parameters.json".to_string(),
            },
            ProgressEvent::ExtractorComplete {
                file_name: "noise_parameters.json".to_string(),
                entries: 60,
                duration: Duration::from_millis(2),
            },
            ProgressEvent::Completed {
                files_written: 3,
                total_time: Duration::from_millis(20),
            },
            ProgressEvent::Failed {
                error: "Test error".to_string(),
            },
        ];

        for event in events {
            handler.on_progress(&event);
        }
    }
}
