//! # cipherval
//!
//! A conformance-test driver for block-cipher implementations speaking the
//! ACVP JSON vector-set format.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cipherval = "0.3"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`cipherval-api`]: the operation oracle seam (`Transactable`, `OracleError`)
//! - [`cipherval-acvp`]: vector-set processing, Monte Carlo engines, registry

// Core re-exports
pub use cipherval_acvp as acvp;
pub use cipherval_api as api;

/// Common imports for cipherval users
pub mod prelude {
    pub use cipherval_acvp::{
        AcvpError, BlockCipherProcessor, BlockCipherSpec, MctConfig, MctStrategy,
        ProcessorConfig, Runner,
    };
    pub use cipherval_api::{OracleError, Transactable};
}
