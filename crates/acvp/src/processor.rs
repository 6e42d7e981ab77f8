//! Test-group processor for block-cipher vector sets
//!
//! Processing happens in two passes. The first parses the document, checks
//! every group and case, and decodes all hex operands. Only when the whole
//! vector set is valid does the second pass start talking to the oracle, so
//! a malformed request never reaches the implementation under test.
//!
//! See <http://usnistgov.github.io/ACVP/artifacts/draft-celi-acvp-block-ciph-00.html#rfc.section.5.2>
//! for the test definitions.

use cipherval_api::Transactable;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::config::ProcessorConfig;
use crate::dispatcher::BlockCipherSpec;
use crate::error::{AcvpError, Result};
use crate::mct::{BlockOp, MctSeed};
use crate::model::{CaseResponse, Direction, GroupResponse, TestCase, TestGroup, TestType, VectorSet};
use crate::shuffle::supports_key_len;

/// Drives one block-cipher mode through an oracle
#[derive(Debug, Clone)]
pub struct BlockCipherProcessor {
    spec: BlockCipherSpec,
    config: ProcessorConfig,
}

/// A validated test group with decoded operands
struct GroupPlan {
    group_id: u64,
    direction: Direction,
    test_type: TestType,
    operation: String,
    cases: Vec<CasePlan>,
}

struct CasePlan {
    case_id: u64,
    key: Zeroizing<Vec<u8>>,
    input: Vec<u8>,
    iv: Option<Vec<u8>>,
}

impl BlockCipherProcessor {
    pub fn new(spec: BlockCipherSpec, config: ProcessorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { spec, config })
    }

    pub fn spec(&self) -> &BlockCipherSpec {
        &self.spec
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Process a serialized vector set and return the per-group responses.
    pub fn process(&self, vector_set: &[u8], oracle: &dyn Transactable) -> Result<Vec<GroupResponse>> {
        let parsed: VectorSet = serde_json::from_slice(vector_set)?;
        let plans = parsed
            .groups
            .iter()
            .map(|group| self.plan_group(group))
            .collect::<Result<Vec<_>>>()?;

        info!(
            algorithm = self.spec.algo,
            groups = plans.len(),
            "vector set validated"
        );

        plans
            .iter()
            .map(|plan| self.execute_group(plan, oracle))
            .collect()
    }

    /// Like [`process`](Self::process), serialized to the JSON response document.
    pub fn process_to_json(&self, vector_set: &[u8], oracle: &dyn Transactable) -> Result<Vec<u8>> {
        let responses = self.process(vector_set, oracle)?;
        serde_json::to_vec(&responses).map_err(AcvpError::Encode)
    }

    fn plan_group(&self, group: &TestGroup) -> Result<GroupPlan> {
        let group_id = group.group_id;
        let direction = Direction::parse(group_id, &group.direction)?;
        let operation = self.spec.operation(direction);

        let test_type = TestType::parse(group_id, &group.test_type)?;
        if test_type.is_mct() && !self.spec.mct.is_supported() {
            return Err(AcvpError::MctUnsupported {
                group: group_id,
                operation,
            });
        }

        if group.key_bits % 8 != 0 {
            return Err(AcvpError::KeyBits {
                group: group_id,
                bits: group.key_bits,
            });
        }
        let key_bytes = (group.key_bits / 8) as usize;
        if test_type.is_mct() && !supports_key_len(key_bytes) {
            return Err(AcvpError::MctKeySize {
                group: group_id,
                bits: group.key_bits,
            });
        }

        let cases = group
            .tests
            .iter()
            .map(|case| self.plan_case(group, direction, test_type, key_bytes, case))
            .collect::<Result<Vec<_>>>()?;

        Ok(GroupPlan {
            group_id,
            direction,
            test_type,
            operation,
            cases,
        })
    }

    fn plan_case(
        &self,
        group: &TestGroup,
        direction: Direction,
        test_type: TestType,
        key_bytes: usize,
        case: &TestCase,
    ) -> Result<CasePlan> {
        let (group_id, case_id) = (group.group_id, case.case_id);
        let block_size = self.spec.block_size;

        if case.key_hex.len() != key_bytes * 2 {
            return Err(AcvpError::KeyLength {
                group: group_id,
                case: case_id,
                key: case.key_hex.clone(),
                actual: case.key_hex.len(),
                bits: group.key_bits,
            });
        }
        let key = Zeroizing::new(decode(group_id, case_id, "key", &case.key_hex)?);

        let input = match direction {
            Direction::Encrypt => decode(group_id, case_id, "pt", &case.plaintext_hex)?,
            Direction::Decrypt => decode(group_id, case_id, "ct", &case.ciphertext_hex)?,
        };
        if self.spec.inputs_are_block_multiples && input.len() % block_size != 0 {
            return Err(AcvpError::InputLength {
                group: group_id,
                case: case_id,
                actual: input.len(),
                block_size,
            });
        }

        let iv = if self.spec.has_iv {
            let iv = decode(group_id, case_id, "iv", &case.iv_hex)?;
            if iv.len() != block_size {
                return Err(AcvpError::IvLength {
                    group: group_id,
                    case: case_id,
                    actual: iv.len(),
                    expected: block_size,
                });
            }
            Some(iv)
        } else {
            None
        };

        if test_type.is_mct() && input.len() != block_size {
            return Err(AcvpError::MctInputLength {
                group: group_id,
                case: case_id,
                actual: input.len(),
                block_size,
            });
        }

        Ok(CasePlan {
            case_id,
            key,
            input,
            iv,
        })
    }

    fn execute_group(&self, plan: &GroupPlan, oracle: &dyn Transactable) -> Result<GroupResponse> {
        info!(
            group = plan.group_id,
            operation = %plan.operation,
            test_type = ?plan.test_type,
            cases = plan.cases.len(),
            "running test group"
        );

        let op = BlockOp::new(oracle, plan.operation.as_str());
        let mut tests = Vec::with_capacity(plan.cases.len());
        for case in &plan.cases {
            debug!(group = plan.group_id, case = case.case_id, "running test case");
            let response = if plan.test_type.is_mct() {
                let seed = MctSeed {
                    group: plan.group_id,
                    case: case.case_id,
                    key: &case.key[..],
                    input: &case.input[..],
                    iv: case.iv.as_deref(),
                };
                let results = self.spec.mct.run(&op, plan.direction, &seed, &self.config.mct)?;
                CaseResponse::monte_carlo(case.case_id, results)
            } else {
                let mut args: Vec<&[u8]> = vec![&case.key[..], &case.input[..]];
                if let Some(iv) = &case.iv {
                    args.push(iv.as_slice());
                }
                let output = op.call(&args)?;
                CaseResponse::single(case.case_id, plan.direction, &output)
            };
            tests.push(response);
        }

        Ok(GroupResponse {
            group_id: plan.group_id,
            tests,
        })
    }
}

fn decode(group: u64, case: u64, field: &'static str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|source| AcvpError::Hex {
        group,
        case,
        field,
        source,
    })
}
