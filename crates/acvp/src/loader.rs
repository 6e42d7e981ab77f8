//! Loads ACVP vector sets from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AcvpError, Result};
use crate::model::VectorSetHeader;

/// File name ACVP uses for the request half of a vector set
pub const PROMPT_FILE: &str = "prompt.json";

/// A vector set read from disk, not yet processed
#[derive(Debug, Clone)]
pub struct LoadedVectorSet {
    pub path: PathBuf,
    pub header: VectorSetHeader,
    pub bytes: Vec<u8>,
}

/// ----------------------------------------------------------------
/// Normalise algorithm names from ACVP format to registry format.
/// Strips the "ACVP-" prefix and any leading/trailing hyphens.
/// ----------------------------------------------------------------
pub fn normalize_algorithm(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_prefix = trimmed.strip_prefix("ACVP-").unwrap_or(trimmed);
    without_prefix.trim_matches('-').to_string()
}

/// ----------------------------------------------------------------
/// Read a vector set. `path` is either the JSON file itself or a
/// directory holding `prompt.json`.
/// ----------------------------------------------------------------
pub fn load_vector_set(path: impl AsRef<Path>) -> Result<LoadedVectorSet> {
    let path = path.as_ref();
    let file = if path.is_dir() {
        path.join(PROMPT_FILE)
    } else {
        path.to_path_buf()
    };

    let bytes = fs::read(&file).map_err(|source| AcvpError::Io {
        path: file.clone(),
        source,
    })?;
    let header: VectorSetHeader = serde_json::from_slice(&bytes)?;

    Ok(LoadedVectorSet {
        path: file,
        header,
        bytes,
    })
}
