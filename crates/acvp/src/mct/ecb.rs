//! AES Monte Carlo Test, ECB mode

use tracing::debug;
use zeroize::Zeroizing;

use super::{BlockOp, MctSeed};
use crate::config::MctConfig;
use crate::error::Result;
use crate::model::{Direction, MctResult};
use crate::shuffle::key_shuffle;

/// Run the ECB Monte Carlo test.
///
/// Each inner round feeds the previous output straight back in as the next
/// input. After the inner loop the key is shuffled with the last two outputs
/// and the last output seeds the next outer round.
pub fn run(
    op: &BlockOp<'_>,
    direction: Direction,
    seed: &MctSeed<'_>,
    config: &MctConfig,
) -> Result<Vec<MctResult>> {
    let mut key = Zeroizing::new(seed.key.to_vec());
    let mut input = seed.input.to_vec();
    let mut rounds = Vec::with_capacity(config.outer_rounds);

    for i in 0..config.outer_rounds {
        let mut round = MctResult::begin(direction, &key[..], &input, None);

        // Holds the input of the latest call, i.e. the output of the one before.
        let mut prev_result = Vec::new();
        for _ in 0..config.inner_rounds {
            let output = op.call_exact(&[&key[..], &input[..]], input.len())?;
            prev_result = std::mem::replace(&mut input, output);
        }

        round.finish(direction, &input);
        key_shuffle(&mut key[..], &input, &prev_result);

        debug!(
            operation = op.operation(),
            group = seed.group,
            case = seed.case,
            round = i,
            key = %round.key_hex,
            "ECB MCT round complete"
        );
        rounds.push(round);
    }

    Ok(rounds)
}
