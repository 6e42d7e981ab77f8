//! Pure data model for ACVP block-cipher vector sets and responses.
//! No dependency on the rest of the crate apart from the error type.

use serde::{Deserialize, Serialize};

use crate::error::{AcvpError, Result};

/// ----------------------------------------------------------------
/// 1. Leaf-level test case
/// ----------------------------------------------------------------
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestCase {
    #[serde(rename = "tcId")]
    pub case_id: u64,
    #[serde(rename = "pt", default)]
    pub plaintext_hex: String,
    #[serde(rename = "ct", default)]
    pub ciphertext_hex: String,
    #[serde(rename = "iv", default)]
    pub iv_hex: String,
    #[serde(rename = "key", default)]
    pub key_hex: String,
}

/// ----------------------------------------------------------------
/// 2. Groups share direction, test type and key length
/// ----------------------------------------------------------------
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestGroup {
    #[serde(rename = "tgId")]
    pub group_id: u64,
    #[serde(rename = "testType", default)]
    pub test_type: String, // AFT / CTR / MCT
    #[serde(default)]
    pub direction: String, // encrypt / decrypt
    #[serde(rename = "keylen", default)]
    pub key_bits: u32,
    #[serde(default)]
    pub tests: Vec<TestCase>,
}

/// ----------------------------------------------------------------
/// 3. Whole vector set
/// ----------------------------------------------------------------
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VectorSet {
    #[serde(rename = "testGroups", default)]
    pub groups: Vec<TestGroup>,
}

/// Identifying fields at the top of an ACVP vector set. Only the runner
/// looks at these; the processor is handed the cipher explicitly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VectorSetHeader {
    #[serde(rename = "vsId", default)]
    pub vs_id: Option<u64>,
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub revision: Option<String>,
}

/// Operation direction of a test group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    pub fn parse(group: u64, raw: &str) -> Result<Self> {
        match raw {
            "encrypt" => Ok(Direction::Encrypt),
            "decrypt" => Ok(Direction::Decrypt),
            other => Err(AcvpError::UnknownDirection {
                group,
                direction: other.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }

    pub fn is_encrypt(self) -> bool {
        self == Direction::Encrypt
    }
}

/// Kind of test a group asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestType {
    /// Algorithm functional test: one oracle call per case
    Aft,
    /// Counter-mode functional test, also one oracle call per case
    Ctr,
    /// Monte Carlo test
    Mct,
}

impl TestType {
    pub fn parse(group: u64, raw: &str) -> Result<Self> {
        match raw {
            "AFT" => Ok(TestType::Aft),
            "CTR" => Ok(TestType::Ctr),
            "MCT" => Ok(TestType::Mct),
            other => Err(AcvpError::UnknownTestType {
                group,
                test_type: other.to_string(),
            }),
        }
    }

    pub fn is_mct(self) -> bool {
        self == TestType::Mct
    }
}

/// ----------------------------------------------------------------
/// 4. Response side
/// ----------------------------------------------------------------

/// One outer round of a Monte Carlo test
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MctResult {
    #[serde(rename = "key")]
    pub key_hex: String,
    #[serde(rename = "pt")]
    pub plaintext_hex: String,
    #[serde(rename = "ct")]
    pub ciphertext_hex: String,
    #[serde(rename = "iv", default, skip_serializing_if = "Option::is_none")]
    pub iv_hex: Option<String>,
}

impl MctResult {
    /// Record the state an outer round starts from.
    pub(crate) fn begin(direction: Direction, key: &[u8], input: &[u8], iv: Option<&[u8]>) -> Self {
        let mut round = MctResult {
            key_hex: hex::encode(key),
            iv_hex: iv.map(hex::encode),
            ..Default::default()
        };
        match direction {
            Direction::Encrypt => round.plaintext_hex = hex::encode(input),
            Direction::Decrypt => round.ciphertext_hex = hex::encode(input),
        }
        round
    }

    /// Record the output an outer round ended with.
    pub(crate) fn finish(&mut self, direction: Direction, output: &[u8]) {
        match direction {
            Direction::Encrypt => self.ciphertext_hex = hex::encode(output),
            Direction::Decrypt => self.plaintext_hex = hex::encode(output),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseResponse {
    #[serde(rename = "tcId")]
    pub case_id: u64,
    #[serde(rename = "ct", default, skip_serializing_if = "Option::is_none")]
    pub ciphertext_hex: Option<String>,
    #[serde(rename = "pt", default, skip_serializing_if = "Option::is_none")]
    pub plaintext_hex: Option<String>,
    #[serde(rename = "resultsArray", default, skip_serializing_if = "Option::is_none")]
    pub mct_results: Option<Vec<MctResult>>,
}

impl CaseResponse {
    /// Response for a single-call case; the output lands in the field
    /// opposite to the input's role.
    pub fn single(case_id: u64, direction: Direction, output: &[u8]) -> Self {
        let encoded = Some(hex::encode(output));
        let (ciphertext_hex, plaintext_hex) = match direction {
            Direction::Encrypt => (encoded, None),
            Direction::Decrypt => (None, encoded),
        };
        CaseResponse {
            case_id,
            ciphertext_hex,
            plaintext_hex,
            mct_results: None,
        }
    }

    pub fn monte_carlo(case_id: u64, results: Vec<MctResult>) -> Self {
        CaseResponse {
            case_id,
            ciphertext_hex: None,
            plaintext_hex: None,
            mct_results: Some(results),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupResponse {
    #[serde(rename = "tgId")]
    pub group_id: u64,
    pub tests: Vec<CaseResponse>,
}
