//! # Bloom Filter Benchmarks
//!
//! - Add: O(k) hash computations + k atomic stores
//! - Contains: O(k) worst case, stops at the first unset flag
//! - Parallel add across rayon workers, no lock
//! - Adversarial inputs sharing a long common prefix

use bloom_filter::{calculate_optimal_parameters, BloomFilter};
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use membership_benchmarks::utils::{generate_adversarial_elements, generate_elements};
use rayon::prelude::*;

pub fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom/add");

    for k in [1usize, 4, 7, 16] {
        group.bench_with_input(BenchmarkId::new("single_add", k), &k, |b, &k| {
            let filter = BloomFilter::new(100_000, k).expect("valid parameters");
            let element = generate_elements(1).remove(0);
            b.iter(|| filter.add(black_box(&element)));
        });
    }

    let elements = generate_elements(10_000);
    group.throughput(Throughput::Elements(elements.len() as u64));
    group.bench_function("bulk_add_10000", |b| {
        b.iter(|| {
            let filter = BloomFilter::with_fpr(10_000, 0.01).expect("valid parameters");
            for element in &elements {
                filter.add(black_box(element));
            }
            black_box(filter.bits_set())
        });
    });

    group.bench_function("parallel_add_10000", |b| {
        b.iter(|| {
            let filter = BloomFilter::with_fpr(10_000, 0.01).expect("valid parameters");
            elements.par_iter().for_each(|e| filter.add(black_box(e)));
            black_box(filter.bits_set())
        });
    });

    let adversarial = generate_adversarial_elements(10_000);
    group.bench_function("adversarial_add_10000", |b| {
        b.iter(|| {
            let filter = BloomFilter::with_fpr(10_000, 0.01).expect("valid parameters");
            for element in &adversarial {
                filter.add(black_box(element));
            }
            black_box(filter.bits_set())
        });
    });

    group.finish();
}

pub fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom/contains");

    let inserted = generate_elements(1000);
    let filter = BloomFilter::new(10_000, 4).expect("valid parameters");
    for element in &inserted {
        filter.add(element);
    }

    group.bench_function("contains_present", |b| {
        let target = &inserted[500];
        b.iter(|| black_box(filter.contains(black_box(target))))
    });

    group.bench_function("contains_absent", |b| {
        let absent = generate_elements(1).remove(0);
        b.iter(|| black_box(filter.contains(black_box(&absent))))
    });

    let probes = generate_elements(10_000);
    group.throughput(Throughput::Elements(probes.len() as u64));
    group.bench_function("observed_fpr_10000_probes", |b| {
        b.iter(|| {
            probes
                .iter()
                .filter(|p| filter.contains(black_box(p)))
                .count()
        })
    });

    group.finish();
}

pub fn bench_parameters(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom/parameters");

    group.bench_function("optimal_parameters", |b| {
        b.iter(|| calculate_optimal_parameters(black_box(1000), black_box(0.01)))
    });

    group.bench_function("construct_m_100000_k_7", |b| {
        b.iter(|| BloomFilter::new(black_box(100_000), black_box(7)))
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_add(c);
    bench_contains(c);
    bench_parameters(c);
}
