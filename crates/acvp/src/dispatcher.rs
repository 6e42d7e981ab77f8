//! Registry of the block-cipher modes the processor can drive

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{AcvpError, Result};
use crate::loader::normalize_algorithm;
use crate::mct::MctStrategy;
use crate::model::Direction;

/// Static description of one block-cipher mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockCipherSpec {
    /// Prefix of the operation names sent to the oracle, e.g. `AES-CBC`
    pub algo: &'static str,
    pub block_size: usize,
    /// Inputs must be a whole number of blocks
    pub inputs_are_block_multiples: bool,
    /// Every call carries a block-sized IV
    pub has_iv: bool,
    pub mct: MctStrategy,
}

impl BlockCipherSpec {
    /// Operation name for one direction, e.g. `AES-CBC/decrypt`
    pub fn operation(&self, direction: Direction) -> String {
        format!("{}/{}", self.algo, direction.as_str())
    }
}

pub const AES_ECB: BlockCipherSpec = BlockCipherSpec {
    algo: "AES",
    block_size: 16,
    inputs_are_block_multiples: true,
    has_iv: false,
    mct: MctStrategy::Ecb,
};

pub const AES_CBC: BlockCipherSpec = BlockCipherSpec {
    algo: "AES-CBC",
    block_size: 16,
    inputs_are_block_multiples: true,
    has_iv: true,
    mct: MctStrategy::Cbc,
};

pub const AES_CTR: BlockCipherSpec = BlockCipherSpec {
    algo: "AES-CTR",
    block_size: 16,
    inputs_are_block_multiples: false,
    has_iv: true,
    mct: MctStrategy::None,
};

/// Global registry keyed by normalised algorithm name
pub static REGISTRY: Lazy<HashMap<&'static str, BlockCipherSpec>> = Lazy::new(|| {
    let mut m = HashMap::new();
    insert(&mut m, "AES-ECB", AES_ECB);
    insert(&mut m, "AES-CBC", AES_CBC);
    insert(&mut m, "AES-CTR", AES_CTR);
    m
});

/// Helper function for registering modes
pub fn insert(
    map: &mut HashMap<&'static str, BlockCipherSpec>,
    name: &'static str, // e.g. "AES-CBC"
    spec: BlockCipherSpec,
) {
    map.insert(name, spec);
}

/// Look up a mode by ACVP algorithm name (`ACVP-AES-CBC` or `AES-CBC`).
pub fn lookup(algorithm: &str) -> Result<&'static BlockCipherSpec> {
    let name = normalize_algorithm(algorithm);
    REGISTRY
        .get(name.as_str())
        .ok_or_else(|| AcvpError::UnknownAlgorithm(algorithm.to_string()))
}
