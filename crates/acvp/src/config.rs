//! Processor configuration

use serde::Deserialize;

use crate::error::{AcvpError, Result};

/// Round counts of the AES Monte Carlo test.
///
/// The protocol fixes these at 100 outer and 1000 inner rounds; anything
/// else produces responses a validation server will reject.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MctConfig {
    pub outer_rounds: usize,
    pub inner_rounds: usize,
}

impl Default for MctConfig {
    fn default() -> Self {
        Self {
            outer_rounds: 100,
            inner_rounds: 1000,
        }
    }
}

impl MctConfig {
    pub fn with_rounds(mut self, outer: usize, inner: usize) -> Self {
        self.outer_rounds = outer;
        self.inner_rounds = inner;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.outer_rounds == 0 {
            return Err(AcvpError::Config("outer_rounds must be at least 1".into()));
        }
        // The key shuffle needs the last two outputs of the inner loop.
        if self.inner_rounds < 2 {
            return Err(AcvpError::Config(format!(
                "inner_rounds must be at least 2, got {}",
                self.inner_rounds
            )));
        }
        Ok(())
    }
}

/// Configuration for [`BlockCipherProcessor`](crate::BlockCipherProcessor)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessorConfig {
    pub mct: MctConfig,
}

impl ProcessorConfig {
    pub fn with_mct_rounds(mut self, outer: usize, inner: usize) -> Self {
        self.mct = self.mct.with_rounds(outer, inner);
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.mct.validate()
    }

    /// Parse and validate a TOML document such as
    ///
    /// ```toml
    /// [mct]
    /// outer_rounds = 100
    /// inner_rounds = 1000
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: ProcessorConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
