//! ACVP block-cipher vector-set processing
//!
//! Parses ACVP block-cipher vector sets, forwards each operation to an
//! implementation under test through a [`Transactable`](cipherval_api::Transactable)
//! oracle, runs the AES Monte Carlo tests, and assembles the response
//! document. No cipher is computed here; the crate only validates input,
//! orders calls and threads bytes between them.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod loader;
pub mod mct;
pub mod model;
pub mod processor;
pub mod runner;
pub mod shuffle;

pub use config::{MctConfig, ProcessorConfig};
pub use dispatcher::{lookup, BlockCipherSpec, AES_CBC, AES_CTR, AES_ECB};
pub use error::{AcvpError, Result};
pub use loader::{load_vector_set, normalize_algorithm, LoadedVectorSet};
pub use mct::{BlockOp, MctSeed, MctStrategy};
pub use model::*;
pub use processor::BlockCipherProcessor;
pub use runner::{RunReport, Runner};
pub use shuffle::{key_shuffle, supports_key_len};
