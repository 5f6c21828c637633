//! Pareto-distributed cache workload, comparing `ArcCache` against
//! `LruCache` on the same request trace.
//!
//! The request generator is a straight port of `CustomPareto` /
//! `Pareto` from the Go original: draw a page index from a Pareto
//! distribution over a working set much larger than the cache, coin-
//! flip each draw into a `Get` or a `Set`. Requests `rand` doesn't ship
//! a Pareto sampler, so the draw is done by inverse-CDF transform of a
//! uniform sample, which is all `distuv.Pareto.Rand()` does under the
//! hood.

use arc_cache::{ArcCache, Cache, LruCache};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

struct ParetoWorkload {
    alpha: f64,
    xm: f64,
    working_set: usize,
    read_prob: f64,
}

impl ParetoWorkload {
    /// Inverse-CDF sample from Pareto(alpha, xm), scaled into
    /// `[0, working_set)`. Mirrors `int(float64(pagesInMemory) *
    /// par.Rand())` from `main.go`, redrawing out-of-range samples the
    /// same way the original loop does.
    fn next_index(&self, rng: &mut impl Rng) -> usize {
        loop {
            let u: f64 = rng.random_range(0.0..1.0);
            let sample = self.xm / (1.0 - u).powf(1.0 / self.alpha);
            let index = (self.working_set as f64 * sample) as i64;
            if index >= 0 && (index as usize) < self.working_set {
                return index as usize;
            }
        }
    }

    fn run<C: Cache<usize, usize>>(&self, cache: &mut C, requests: usize, rng: &mut impl Rng) {
        for _ in 0..requests {
            let index = self.next_index(rng);
            if rng.random_range(0.0..1.0) < self.read_prob {
                cache.get(&index);
            } else {
                cache.set(index, index);
            }
        }
    }
}

fn skewed_workload() -> ParetoWorkload {
    ParetoWorkload {
        alpha: 1.0,
        xm: 0.001,
        working_set: 100_000,
        read_prob: 0.5,
    }
}

fn bench_arc_vs_lru(c: &mut Criterion) {
    let mut group = c.benchmark_group("pareto_workload");
    let workload = skewed_workload();
    let cache_capacity = 100;
    let requests = 5_000;

    group.bench_with_input(
        BenchmarkId::new("arc", requests),
        &requests,
        |b, &requests| {
            b.iter_batched(
                || (ArcCache::new(cache_capacity).unwrap(), rand::rng()),
                |(mut cache, mut rng)| {
                    workload.run(black_box(&mut cache), requests, &mut rng);
                    black_box(cache.stats());
                },
                criterion::BatchSize::LargeInput,
            );
        },
    );

    group.bench_with_input(
        BenchmarkId::new("lru", requests),
        &requests,
        |b, &requests| {
            b.iter_batched(
                || (LruCache::new(cache_capacity).unwrap(), rand::rng()),
                |(mut cache, mut rng)| {
                    workload.run(black_box(&mut cache), requests, &mut rng);
                    black_box(cache.stats());
                },
                criterion::BatchSize::LargeInput,
            );
        },
    );

    group.finish();
}

/// Printed once, outside the timing loop, for eyeballing during local
/// runs — the same comparison `main.go`'s `-plot` mode traces over a
/// growing request count. The pass/fail version of this comparison,
/// across several fixed seeds, lives in
/// `tests/arc_cache_tests.rs::s7_pareto_workload_arc_beats_lru_hit_rate`;
/// a `criterion` bench has no assertion mechanism worth using here.
fn bench_report_hit_rates(c: &mut Criterion) {
    let workload = skewed_workload();
    let cache_capacity = 100;
    let requests = 50_000;

    c.bench_function("pareto_hit_rate_report", |b| {
        b.iter_batched(
            || (ArcCache::new(cache_capacity).unwrap(), rand::rng()),
            |(mut cache, mut rng)| {
                workload.run(&mut cache, requests, &mut rng);
                let stats = cache.stats();
                eprintln!(
                    "ARC hit rate over {requests} requests: {:.2}%",
                    stats.hit_rate() * 100.0
                );
                black_box(stats);
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_arc_vs_lru, bench_report_hit_rates);
criterion_main!(benches);
