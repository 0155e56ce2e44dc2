use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hamming74::cs::ecc::{classify, ErrorClassAnalyzer, ErrorCorrection, Hamming74, HammingConfig};

fn bench_codec(c: &mut Criterion) {
    let code = Hamming74::new();

    c.bench_function("encode_all_words", |b| {
        b.iter(|| (0..16u64).map(|w| code.encode(black_box(w))).sum::<u64>())
    });

    c.bench_function("decode_all_received_words", |b| {
        b.iter(|| (0..128u64).map(|r| code.decode(black_box(r))).sum::<u64>())
    });

    let data: Vec<u8> = (0..4096).map(|i| (i * 31 % 256) as u8).collect();
    c.bench_function("byte_stream_round_trip_4k", |b| {
        b.iter(|| {
            let encoded = ErrorCorrection::encode(&code, black_box(&data)).unwrap();
            ErrorCorrection::decode(&code, &encoded).unwrap()
        })
    });
}

fn bench_analysis(c: &mut Criterion) {
    let analyzer = ErrorClassAnalyzer::new(HammingConfig::default()).unwrap();

    c.bench_function("classify_7", |b| b.iter(|| classify(black_box(7))));
    c.bench_function("analysis_sequential", |b| b.iter(|| analyzer.run()));
    c.bench_function("analysis_parallel", |b| b.iter(|| analyzer.run_parallel()));
}

criterion_group!(benches, bench_codec, bench_analysis);
criterion_main!(benches);
