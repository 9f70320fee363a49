use canonical::{canonicalize, normalize, NormalizeConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const SNIPPET: &str = "def solve(a, b):  # entry\n    total = a + b  // sum\n    return total\n";

fn bench_normalize(c: &mut Criterion) {
    let config = NormalizeConfig::default();
    let mut group = c.benchmark_group("normalize");

    for lines in [4usize, 64, 512, 4096] {
        let code = SNIPPET.repeat(lines / 4);
        group.throughput(Throughput::Bytes(code.len() as u64));
        group.bench_function(format!("lines_{lines}"), |b| {
            b.iter(|| normalize(black_box(&code)))
        });
        group.bench_function(format!("canonicalize_lines_{lines}"), |b| {
            b.iter(|| canonicalize(black_box(&code), black_box(&config)).expect("canonicalize"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
