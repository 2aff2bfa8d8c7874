use std::fs;
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::parsing::segment;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Summary file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a summary file and return its content
pub fn read_summary(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read and segment a summary file
pub fn parse_file(path: &Path) -> Result<Document, IoError> {
    let text = read_summary(path)?;
    log::debug!("parsing summary {}", path.display());
    Ok(segment(&text))
}
