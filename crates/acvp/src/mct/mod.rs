//! AES Monte Carlo test engines
//!
//! An MCT case runs `outer_rounds` outer rounds of `inner_rounds` chained
//! oracle calls each, re-keying between outer rounds with
//! [`key_shuffle`](crate::shuffle::key_shuffle). Every inner call depends on
//! the previous one, so a case is strictly sequential.

pub mod cbc;
pub mod ecb;

use cipherval_api::{validate, Transactable};
use tracing::error;

use crate::config::MctConfig;
use crate::error::{AcvpError, Result};
use crate::model::{Direction, MctResult};

/// Which Monte Carlo algorithm a cipher mode supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MctStrategy {
    /// The mode has no Monte Carlo test
    None,
    /// AES Monte Carlo Test, ECB mode
    Ecb,
    /// AES Monte Carlo Test, CBC mode
    Cbc,
}

impl MctStrategy {
    pub fn is_supported(self) -> bool {
        self != MctStrategy::None
    }

    /// Run the engine matching this strategy on one test case.
    pub fn run(
        self,
        op: &BlockOp<'_>,
        direction: Direction,
        seed: &MctSeed<'_>,
        config: &MctConfig,
    ) -> Result<Vec<MctResult>> {
        match self {
            MctStrategy::Ecb => ecb::run(op, direction, seed, config),
            MctStrategy::Cbc => cbc::run(op, direction, seed, config),
            MctStrategy::None => Err(AcvpError::MctUnsupported {
                group: seed.group,
                operation: op.operation().to_string(),
            }),
        }
    }
}

/// Starting state of one Monte Carlo case
#[derive(Debug, Clone, Copy)]
pub struct MctSeed<'s> {
    pub group: u64,
    pub case: u64,
    pub key: &'s [u8],
    pub input: &'s [u8],
    pub iv: Option<&'s [u8]>,
}

/// One oracle operation (algorithm + direction) bound to its oracle
pub struct BlockOp<'a> {
    oracle: &'a dyn Transactable,
    operation: String,
}

impl<'a> BlockOp<'a> {
    pub fn new(oracle: &'a dyn Transactable, operation: impl Into<String>) -> Self {
        Self {
            oracle,
            operation: operation.into(),
        }
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Invoke the oracle and return its single result.
    pub fn call(&self, args: &[&[u8]]) -> Result<Vec<u8>> {
        let mut results = self
            .oracle
            .transact(&self.operation, 1, args)
            .map_err(|e| {
                error!(operation = %self.operation, error = %e, "oracle call failed");
                e
            })?;
        validate::result_count(&self.operation, 1, &results)?;
        Ok(results.swap_remove(0))
    }

    /// Like [`call`](Self::call), but the result must be `expected_len` bytes.
    pub fn call_exact(&self, args: &[&[u8]], expected_len: usize) -> Result<Vec<u8>> {
        let out = self.call(args)?;
        if out.len() != expected_len {
            return Err(AcvpError::OutputLength {
                operation: self.operation.clone(),
                expected: expected_len,
                actual: out.len(),
            });
        }
        Ok(out)
    }
}
