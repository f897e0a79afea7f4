//! Security parameter lifecycle benchmarks.
//!
//! Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tlsparams::crypt::secret::{SecretBytes, SecretSlot};
use tlsparams::params::SecurityParameters;

fn bench_secret_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("secrets");

    for len in [32usize, 48, 64] {
        group.bench_with_input(BenchmarkId::new("fill_and_clear", len), &len, |bench, &len| {
            bench.iter(|| {
                let mut params = SecurityParameters::new();
                let mut w = params.writer();
                for slot in SecretSlot::ALL {
                    let _ = w.set_secret(slot, Box::new(SecretBytes::new(vec![0x5A; len])));
                }
                params.clear()
            });
        });

        group.bench_with_input(BenchmarkId::new("replace_master", len), &len, |bench, &len| {
            let mut params = SecurityParameters::new();
            bench.iter(|| {
                params
                    .writer()
                    .set_master_secret(SecretBytes::new(vec![0xA5; len]))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_secret_lifecycle);
criterion_main!(benches);
