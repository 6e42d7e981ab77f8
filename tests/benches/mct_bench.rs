use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cipherval_acvp::{BlockCipherProcessor, ProcessorConfig, AES_CBC, AES_ECB};
use cipherval_api::Result;
use cipherval_tests::ReferenceOracle;
use serde_json::json;

fn mct_doc(iv: bool, keylen: usize) -> Vec<u8> {
    let mut case = json!({"tcId": 1, "key": "00".repeat(keylen / 8), "pt": "00".repeat(16)});
    if iv {
        case["iv"] = json!("00".repeat(16));
    }
    serde_json::to_vec(&json!({"testGroups": [{
        "tgId": 1, "testType": "MCT", "direction": "encrypt", "keylen": keylen, "tests": [case]
    }]}))
    .unwrap()
}

// Echoes the data argument so only the driver's own work is measured.
fn echo(_op: &str, _expected: usize, args: &[&[u8]]) -> Result<Vec<Vec<u8>>> {
    Ok(vec![args[args.len() - 1].to_vec()])
}

fn bench_driver_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("MCT driver");
    let config = ProcessorConfig::default().with_mct_rounds(10, 1000);

    for (name, spec, iv) in [("ECB", AES_ECB, false), ("CBC", AES_CBC, true)] {
        let processor = BlockCipherProcessor::new(spec, config.clone()).unwrap();
        let doc = mct_doc(iv, 128);
        group.bench_function(BenchmarkId::new("echo", name), |b| {
            b.iter(|| processor.process(&doc, &echo).unwrap())
        });
    }
    group.finish();
}

fn bench_reference_aes(c: &mut Criterion) {
    let mut group = c.benchmark_group("MCT reference AES");
    group.sample_size(10);
    let config = ProcessorConfig::default().with_mct_rounds(5, 1000);

    for keylen in [128usize, 192, 256] {
        let processor = BlockCipherProcessor::new(AES_CBC, config.clone()).unwrap();
        let doc = mct_doc(true, keylen);
        let oracle = ReferenceOracle::new();
        group.bench_with_input(BenchmarkId::new("AES-CBC", keylen), &keylen, |b, _| {
            b.iter(|| processor.process(&doc, &oracle).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_driver_overhead, bench_reference_aes);
criterion_main!(benches);
