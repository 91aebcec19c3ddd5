//! # BitSet Benchmarks
//!
//! - Single set/query: O(1)
//! - Population count, set_all/clear_all, copy: O(num_bits / 64)
//! - Checked access overhead vs. the fast path

use bitset::BitSet;
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use membership_benchmarks::utils::generate_indices;

pub fn bench_single_bit_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitset/single_bit");

    let capacity = 1 << 20;
    let indices = generate_indices(10_000, capacity);
    group.throughput(Throughput::Elements(indices.len() as u64));

    group.bench_function("set_bit_on", |b| {
        let mut bits = BitSet::new(capacity);
        b.iter(|| {
            for &index in &indices {
                bits.set_bit_on(black_box(index));
            }
        });
    });

    group.bench_function("try_set_bit_on", |b| {
        let mut bits = BitSet::new(capacity);
        b.iter(|| {
            for &index in &indices {
                let _ = bits.try_set_bit_on(black_box(index));
            }
        });
    });

    let mut populated = BitSet::new(capacity);
    for &index in indices.iter().step_by(2) {
        populated.set_bit_on(index);
    }
    group.bench_function("is_bit_on", |b| {
        b.iter(|| {
            indices
                .iter()
                .filter(|&&index| populated.is_bit_on(black_box(index)))
                .count()
        });
    });

    group.finish();
}

pub fn bench_bulk_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitset/bulk");

    for capacity in [1_000usize, 100_000, 10_000_000] {
        let mut bits = BitSet::new(capacity);
        bits.set_all();

        group.throughput(Throughput::Bytes(bits.num_words() as u64 * 8));
        group.bench_with_input(
            BenchmarkId::new("count_bits_on", capacity),
            &bits,
            |b, bits| b.iter(|| black_box(bits.count_bits_on())),
        );
        group.bench_with_input(BenchmarkId::new("copy", capacity), &bits, |b, bits| {
            b.iter(|| black_box(bits.copy()))
        });
        group.bench_function(BenchmarkId::new("set_all_clear_all", capacity), |b| {
            let mut scratch = BitSet::new(capacity);
            b.iter(|| {
                scratch.set_all();
                scratch.clear_all();
            });
        });
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_single_bit_operations(c);
    bench_bulk_operations(c);
}
