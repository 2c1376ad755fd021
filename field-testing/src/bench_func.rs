use alloc::format;
use alloc::vec::Vec;
use core::hint::black_box;

use criterion::{BatchSize, Criterion};
use gf2m_field::{BinaryField, GfElement};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_elements(field: &BinaryField, n: usize) -> Vec<GfElement> {
    let mut rng = SmallRng::seed_from_u64(1);
    (0..n).map(|_| rng.sample(field)).collect()
}

/// Benchmark a chain of `N` dependent additions.
pub fn benchmark_add_latency<const N: usize>(c: &mut Criterion, field: &BinaryField, name: &str) {
    c.bench_function(&format!("add-latency/{N} {name}"), |b| {
        b.iter_batched(
            || random_elements(field, N),
            |x| {
                x.iter()
                    .try_fold(field.zero(), |acc, y| acc + y)
                    .map(black_box)
            },
            BatchSize::SmallInput,
        )
    });
}

/// Benchmark a chain of `N` dependent multiplications.
pub fn benchmark_mul_latency<const N: usize>(c: &mut Criterion, field: &BinaryField, name: &str) {
    c.bench_function(&format!("mul-latency/{N} {name}"), |b| {
        b.iter_batched(
            || random_elements(field, N),
            |x| {
                x.iter()
                    .try_fold(field.one(), |acc, y| acc * y)
                    .map(black_box)
            },
            BatchSize::SmallInput,
        )
    });
}

/// Benchmark a single multiplication of two random elements.
pub fn benchmark_mul(c: &mut Criterion, field: &BinaryField, name: &str) {
    let xs = random_elements(field, 2);
    let (x, y) = (&xs[0], &xs[1]);
    c.bench_function(&format!("{name} mul"), |b| {
        b.iter(|| black_box(x).try_mul(black_box(y)))
    });
}

/// Benchmark parsing and reducing a hex literal twice the width of the field.
pub fn benchmark_from_hex(c: &mut Criterion, field: &BinaryField, name: &str) {
    let wide = format!("0x{}", "f".repeat(field.degree().div_ceil(2) as usize));
    c.bench_function(&format!("{name} from_hex"), |b| {
        b.iter(|| field.from_hex(black_box(&wide)))
    });
}
