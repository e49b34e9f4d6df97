use crate::extractors::ExtractorRegistry;
use crate::output::{ExtractedDocument, OutputWriter};
use crate::progress::{NoOpHandler, ProgressEvent, ProgressHandler};
use crate::server::Server;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

pub struct ExtractionOrchestrator {
    registry: ExtractorRegistry,
    selected: Vec<&'static str>,
    progress_handler: Arc<dyn ProgressHandler>,
}

impl ExtractionOrchestrator {
    /// Orchestrator running every extractor in the registry
    pub fn new(registry: ExtractorRegistry) -> Self {
        let selected = registry.file_names();
        Self {
            registry,
            selected,
            progress_handler: Arc::new(NoOpHandler),
        }
    }

    pub fn with_progress(mut self, handler: Arc<dyn ProgressHandler>) -> Self {
        self.progress_handler = handler;
        self
    }

    /// Restricts the run to the named extractors
    ///
    /// Run order stays the registry order. An empty list keeps everything
    /// selected; an unknown name is an error.
    pub fn select(mut self, file_names: &[String]) -> Result<Self> {
        if file_names.is_empty() {
            return Ok(self);
        }

        let known = self.registry.file_names();
        if let Some(unknown) = file_names.iter().find(|n| !known.contains(&n.as_str())) {
            bail!(
                "Unknown extractor '{}'. Valid options: {}",
                unknown,
                known.join(", ")
            );
        }

        self.selected = known
            .into_iter()
            .filter(|name| file_names.iter().any(|n| n == name))
            .collect();
        Ok(self)
    }

    pub fn selected(&self) -> &[&'static str] {
        &self.selected
    }

    fn report(&self, event: ProgressEvent) {
        self.progress_handler.on_progress(&event);
    }

    /// Runs the selected extractors, stopping at the first failure
    pub fn extract(&self, server: &dyn Server) -> Result<Vec<ExtractedDocument>> {
        let mut documents = Vec::with_capacity(self.selected.len());

        for extractor in self
            .selected
            .iter()
            .filter_map(|name| self.registry.get(name))
        {
            let file_name = extractor.file_name();
            self.report(ProgressEvent::ExtractorStarted {
                file_name: file_name.to_string(),
            });

            let start = Instant::now();
            let document = extractor
                .extract(server)
                .with_context(|| format!("Extractor {} failed", file_name))?;
            let extracted = ExtractedDocument {
                file_name,
                document,
            };

            self.report(ProgressEvent::ExtractorComplete {
                file_name: file_name.to_string(),
                entries: extracted.entry_count(),
                duration: start.elapsed(),
            });
            debug!("Extractor {} complete", file_name);
            documents.push(extracted);
        }

        Ok(documents)
    }

    /// Extracts everything, then writes all documents or none
    pub fn run(&self, server: &dyn Server, writer: &OutputWriter) -> Result<Vec<PathBuf>> {
        let start = Instant::now();
        info!(
            "Extracting {} document(s) into {}",
            self.selected.len(),
            writer.output_dir().display()
        );
        self.report(ProgressEvent::Started {
            extractors: self.selected.len(),
        });

        let result = self
            .extract(server)
            .and_then(|documents| writer.write_all(&documents));

        match result {
            Ok(written) => {
                self.report(ProgressEvent::Completed {
                    files_written: written.len(),
                    total_time: start.elapsed(),
                });
                Ok(written)
            }
            Err(e) => {
                self.report(ProgressEvent::Failed {
                    error: format!("{:#}", e),
                });
                Err(e)
            }
        }
    }
}
