//! Validation helpers for oracle responses

use crate::error::{OracleError, Result};

/// Check that an oracle answered with exactly `expected` results
#[inline(always)]
pub fn result_count(operation: &str, expected: usize, results: &[Vec<u8>]) -> Result<()> {
    if results.len() != expected {
        return Err(OracleError::ResultCount {
            operation: operation.to_string(),
            expected,
            actual: results.len(),
        });
    }
    Ok(())
}
