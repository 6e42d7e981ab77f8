//! Driver that runs whole vector sets against an oracle.

use std::path::Path;

use cipherval_api::Transactable;
use tracing::info;

use crate::config::ProcessorConfig;
use crate::dispatcher::lookup;
use crate::error::{AcvpError, Result};
use crate::loader::load_vector_set;
use crate::model::{GroupResponse, VectorSetHeader};
use crate::processor::BlockCipherProcessor;

/// Outcome of one vector set
#[derive(Debug, Clone)]
pub struct RunReport {
    pub vs_id: Option<u64>,
    pub algorithm: String,
    pub groups: usize,
    pub cases: usize,
    pub mct_cases: usize,
    pub response: Vec<GroupResponse>,
}

impl RunReport {
    /// The response document as JSON
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.response).map_err(AcvpError::Encode)
    }
}

/// Thin wrapper that selects the cipher for a vector set and processes it.
pub struct Runner<'o> {
    oracle: &'o dyn Transactable,
    config: ProcessorConfig,
}

impl<'o> Runner<'o> {
    pub fn new(oracle: &'o dyn Transactable, config: ProcessorConfig) -> Self {
        Self { oracle, config }
    }

    /// Process a vector set, taking the cipher from its `algorithm` field.
    pub fn run(&self, vector_set: &[u8]) -> Result<RunReport> {
        let header: VectorSetHeader = serde_json::from_slice(vector_set)?;
        let algorithm = header.algorithm.clone().ok_or(AcvpError::MissingAlgorithm)?;
        let mut report = self.run_as(&algorithm, vector_set)?;
        report.vs_id = header.vs_id;
        Ok(report)
    }

    /// Process a vector set as `algorithm`, ignoring its header.
    pub fn run_as(&self, algorithm: &str, vector_set: &[u8]) -> Result<RunReport> {
        let spec = lookup(algorithm)?;
        let processor = BlockCipherProcessor::new(spec.clone(), self.config.clone())?;

        info!(algorithm, "running vector set");
        let response = processor.process(vector_set, self.oracle)?;

        let cases = response.iter().map(|g| g.tests.len()).sum();
        let mct_cases = response
            .iter()
            .flat_map(|g| &g.tests)
            .filter(|t| t.mct_results.is_some())
            .count();
        info!(
            algorithm,
            groups = response.len(),
            cases,
            mct_cases,
            "vector set complete"
        );

        Ok(RunReport {
            vs_id: None,
            algorithm: algorithm.to_string(),
            groups: response.len(),
            cases,
            mct_cases,
            response,
        })
    }

    /// Load a vector set from disk and [`run`](Self::run) it.
    pub fn run_file(&self, path: impl AsRef<Path>) -> Result<RunReport> {
        let loaded = load_vector_set(path)?;
        info!(path = %loaded.path.display(), "loaded vector set");
        self.run(&loaded.bytes)
    }
}
