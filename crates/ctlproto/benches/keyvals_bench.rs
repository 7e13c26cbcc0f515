use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn make_reply(tokens: usize) -> String {
    let mut s = String::new();
    for i in 0..tokens {
        match i % 3 {
            0 => s.push_str(&format!("FLAG{} ", i)),
            1 => s.push_str(&format!("KEY{}={} ", i, i * 7)),
            _ => s.push_str(&format!("DESC{}=\"quoted \\\"value\\\" {}\" ", i, i)),
        }
    }
    s
}

pub fn keyvals_benchmarks(c: &mut Criterion) {
    let cases = vec![
        ("bootstrap".to_string(), "BOOTSTRAP PROGRESS=85 TAG=handshake_or SUMMARY=\"Finishing handshake with first hop\"".to_string()),
        ("tokens_100".to_string(), make_reply(100)),
        ("tokens_1k".to_string(), make_reply(1000)),
    ];
    let mut group = c.benchmark_group("parse_keyvals");
    for (name, line) in cases {
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_function(name, |b| {
            b.iter_batched(
                || line.clone(),
                |s| black_box(ctlproto::parse_keyvals(&s).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

pub fn hex_benchmarks(c: &mut Criterion) {
    let buf: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();
    let mut group = c.benchmark_group("base16_encode");
    group.throughput(Throughput::Bytes(buf.len() as u64));
    group.bench_function("64k", |b| b.iter(|| black_box(ctlproto::base16_encode(black_box(&buf)))));
    group.finish();
}

criterion_group!(benches, keyvals_benchmarks, hex_benchmarks);
criterion_main!(benches);
