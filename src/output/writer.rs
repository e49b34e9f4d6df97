//! Writes extracted documents into the output directory
//!
//! All documents of a run are staged next to their final location first.
//! Existing targets are moved aside to `.<name>.bak` before anything is
//! published, and restored if any rename fails, so a failed run leaves the
//! directory exactly as it found it.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A document produced by one extractor, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDocument {
    pub file_name: &'static str,
    pub document: Value,
}

impl ExtractedDocument {
    /// Number of top-level items (array elements or object keys)
    pub fn entry_count(&self) -> usize {
        match &self.document {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }
}

/// Writer for extracted documents
pub struct OutputWriter {
    output_dir: PathBuf,
    pretty: bool,
}

impl OutputWriter {
    pub fn new(output_dir: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            pretty,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Serializes a document the way it will appear on disk
    pub fn render(&self, document: &Value) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(document)
        } else {
            serde_json::to_string(document)
        };
        rendered.context("Failed to serialize document to JSON")
    }

    /// Writes every document, or none of them
    pub fn write_all(&self, documents: &[ExtractedDocument]) -> Result<Vec<PathBuf>> {
        let rendered = documents
            .iter()
            .map(|doc| -> Result<(&'static str, String)> {
                Ok((doc.file_name, self.render(&doc.document)?))
            })
            .collect::<Result<Vec<_>>>()?;

        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                self.output_dir.display()
            )
        })?;

        let mut staged: Vec<StagedFile> = Vec::with_capacity(rendered.len());
        for (file_name, content) in &rendered {
            let file = StagedFile::new(&self.output_dir, file_name);
            if let Err(e) = fs::write(&file.staging, content) {
                let _ = fs::remove_file(&file.staging);
                Self::roll_back(&staged, 0);
                return Err(e)
                    .with_context(|| format!("Failed to write {}", file.staging.display()));
            }
            staged.push(file);
        }

        if let Err(e) = staged.iter_mut().try_for_each(StagedFile::back_up) {
            Self::roll_back(&staged, 0);
            return Err(e);
        }

        for (index, file) in staged.iter().enumerate() {
            if let Err(e) = fs::rename(&file.staging, &file.target) {
                Self::roll_back(&staged, index);
                return Err(e)
                    .with_context(|| format!("Failed to move {}", file.target.display()));
            }
            debug!(path = %file.target.display(), "Wrote document");
        }

        for file in staged.iter().filter(|f| f.backed_up) {
            if let Err(e) = fs::remove_file(&file.backup) {
                warn!(path = %file.backup.display(), error = %e, "Failed to remove backup");
            }
        }

        Ok(staged.into_iter().map(|f| f.target).collect())
    }

    /// Undoes a partial run where the first `published` files already sit at
    /// their target
    fn roll_back(staged: &[StagedFile], published: usize) {
        for (index, file) in staged.iter().enumerate() {
            if index < published {
                let _ = fs::remove_file(&file.target);
            } else {
                let _ = fs::remove_file(&file.staging);
            }
            if file.backed_up {
                if let Err(e) = fs::rename(&file.backup, &file.target) {
                    warn!(path = %file.target.display(), error = %e, "Failed to restore previous file");
                }
            }
        }
    }
}

/// One document on its way from staging to its target
#[derive(Debug)]
struct StagedFile {
    staging: PathBuf,
    target: PathBuf,
    backup: PathBuf,
    backed_up: bool,
}

impl StagedFile {
    fn new(output_dir: &Path, file_name: &str) -> Self {
        Self {
            staging: output_dir.join(format!(".{}.tmp", file_name)),
            target: output_dir.join(file_name),
            backup: output_dir.join(format!(".{}.bak", file_name)),
            backed_up: false,
        }
    }

    /// Moves an existing target aside so a failed run can restore it
    fn back_up(&mut self) -> Result<()> {
        match fs::symlink_metadata(&self.target) {
            Ok(meta) if meta.is_dir() => {
                bail!("{} exists and is a directory", self.target.display())
            }
            Ok(_) => {
                fs::rename(&self.target, &self.backup)
                    .with_context(|| format!("Failed to back up {}", self.target.display()))?;
                self.backed_up = true;
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to inspect {}", self.target.display()))
            }
        }
    }
}
