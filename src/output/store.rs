//! Audio sample storage on the local filesystem.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while saving a sample.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid voice label: {0}")]
    InvalidLabel(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Writes synthesized samples as `test_<label>.mp3` into one directory.
pub struct AudioStore {
    output_dir: PathBuf,
}

impl AudioStore {
    /// Create a store rooted at the given directory.
    pub fn with_dir(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Validate a label before it becomes part of a file name.
    fn validate_label(label: &str) -> Result<(), StoreError> {
        if label.trim().is_empty() {
            return Err(StoreError::InvalidLabel("Label cannot be empty".to_string()));
        }

        // Prevent path traversal
        if label.contains('/') || label.contains('\\') || label.contains("..") {
            return Err(StoreError::InvalidLabel(
                "Label cannot contain path separators".to_string(),
            ));
        }

        Ok(())
    }

    /// File name derived from a voice label, ignoring surrounding whitespace.
    pub fn file_name(label: &str) -> Result<String, StoreError> {
        let label = label.trim();
        Self::validate_label(label)?;
        Ok(format!("test_{}.mp3", label.to_lowercase()))
    }

    /// Full path a label's sample is written to.
    pub fn path_for(&self, label: &str) -> Result<PathBuf, StoreError> {
        Ok(self.output_dir.join(Self::file_name(label)?))
    }

    /// Write a sample, replacing any previous file for the same label.
    pub fn save(&self, label: &str, audio: &[u8]) -> Result<PathBuf, StoreError> {
        let path = self.path_for(label)?;

        std::fs::create_dir_all(&self.output_dir)?;
        std::fs::write(&path, audio)?;

        Ok(path)
    }
}
