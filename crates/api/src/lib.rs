//! Public oracle API for the cipherval conformance driver
//!
//! The implementation under test is reached through a single synchronous
//! seam, [`Transactable`]. Everything the driver knows about it is an
//! operation name, the number of results it expects back, and the byte
//! arguments it sends.

pub mod error;
pub mod oracle;
pub mod validate;

pub use error::{OracleError, Result};
pub use oracle::Transactable;
