//! The operation oracle trait

use crate::error::Result;

/// A synchronous request/response channel to an implementation under test.
///
/// `operation` names the primitive and direction, e.g. `"AES-CBC/encrypt"`.
/// `expected` is the number of byte strings the caller wants back. Each call
/// blocks until the implementation has answered.
pub trait Transactable {
    fn transact(&self, operation: &str, expected: usize, args: &[&[u8]]) -> Result<Vec<Vec<u8>>>;
}

impl<F> Transactable for F
where
    F: Fn(&str, usize, &[&[u8]]) -> Result<Vec<Vec<u8>>>,
{
    fn transact(&self, operation: &str, expected: usize, args: &[&[u8]]) -> Result<Vec<Vec<u8>>> {
        self(operation, expected, args)
    }
}
