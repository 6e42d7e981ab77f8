//! Seeded random vector sets

use cipherval_acvp::BlockCipherSpec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::{json, Value};

fn random_hex(rng: &mut ChaCha8Rng, len: usize) -> String {
    let mut buf = vec![0u8; len];
    rng.fill(&mut buf[..]);
    hex::encode(buf)
}

/// Build an AFT vector set for `spec` with one encrypt and one decrypt
/// group per key size, `cases` cases each. Same seed, same document.
pub fn random_aft_vector_set(spec: &BlockCipherSpec, seed: u64, cases: usize) -> Value {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut groups = Vec::new();
    let mut tg_id = 1u64;
    let mut tc_id = 1u64;

    for keylen in [128usize, 192, 256] {
        for direction in ["encrypt", "decrypt"] {
            let mut tests = Vec::with_capacity(cases);
            for _ in 0..cases {
                let blocks = rng.gen_range(1..=4);
                let mut len = blocks * spec.block_size;
                if !spec.inputs_are_block_multiples {
                    len -= rng.gen_range(0..spec.block_size);
                }
                let input_field = if direction == "encrypt" { "pt" } else { "ct" };
                let mut test = json!({
                    "tcId": tc_id,
                    "key": random_hex(&mut rng, keylen / 8),
                });
                test[input_field] = Value::String(random_hex(&mut rng, len));
                if spec.has_iv {
                    test["iv"] = Value::String(random_hex(&mut rng, spec.block_size));
                }
                tests.push(test);
                tc_id += 1;
            }
            groups.push(json!({
                "tgId": tg_id,
                "testType": "AFT",
                "direction": direction,
                "keylen": keylen,
                "tests": tests,
            }));
            tg_id += 1;
        }
    }

    json!({ "vsId": seed, "algorithm": format!("ACVP-{}", registry_name(spec)), "testGroups": groups })
}

fn registry_name(spec: &BlockCipherSpec) -> &'static str {
    match spec.algo {
        "AES" => "AES-ECB",
        other => other,
    }
}
