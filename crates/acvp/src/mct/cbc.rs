//! AES Monte Carlo Test, CBC mode
//!
//! A single-block CBC call computes `E(k, data ^ iv)`. The algorithm
//! threads two values through the inner loop:
//!
//! - encrypt: the IV of call `j > 0` is the output of call `j - 1`
//! - decrypt: the IV of call `j > 0` is the data input of call `j - 1`
//!
//! and in both directions the data input of call `j` is the round IV for
//! `j = 1` and the output of call `j - 2` for `j >= 2`.

use tracing::debug;
use zeroize::Zeroizing;

use super::{BlockOp, MctSeed};
use crate::config::MctConfig;
use crate::error::{AcvpError, Result};
use crate::model::{Direction, MctResult};
use crate::shuffle::key_shuffle;

/// Run the CBC Monte Carlo test.
pub fn run(
    op: &BlockOp<'_>,
    direction: Direction,
    seed: &MctSeed<'_>,
    config: &MctConfig,
) -> Result<Vec<MctResult>> {
    let seed_iv = seed.iv.ok_or(AcvpError::IvLength {
        group: seed.group,
        case: seed.case,
        actual: 0,
        expected: seed.input.len(),
    })?;

    let mut key = Zeroizing::new(seed.key.to_vec());
    let mut input = seed.input.to_vec();
    let mut iv = seed_iv.to_vec();
    let mut rounds = Vec::with_capacity(config.outer_rounds);

    for i in 0..config.outer_rounds {
        let mut round = MctResult::begin(direction, &key[..], &input, Some(&iv[..]));

        let mut result = Vec::new();
        let mut prev_result = Vec::new();
        let mut prev_input = Vec::new();
        for j in 0..config.inner_rounds {
            prev_result = std::mem::take(&mut result);
            if j > 0 {
                iv = match direction {
                    Direction::Encrypt => prev_result.clone(),
                    Direction::Decrypt => prev_input.clone(),
                };
            }

            result = op.call_exact(&[&key[..], &input[..], &iv[..]], input.len())?;

            let next_input = if j == 0 { iv.clone() } else { prev_result.clone() };
            prev_input = std::mem::replace(&mut input, next_input);
        }

        round.finish(direction, &result);
        key_shuffle(&mut key[..], &result, &prev_result);

        debug!(
            operation = op.operation(),
            group = seed.group,
            case = seed.case,
            round = i,
            key = %round.key_hex,
            "CBC MCT round complete"
        );
        rounds.push(round);

        input = prev_result;
        iv = result;
    }

    Ok(rounds)
}
