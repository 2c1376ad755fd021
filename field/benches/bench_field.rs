use criterion::{Criterion, criterion_group, criterion_main};
use gf2m_field::{BinaryField, moduli};
use gf2m_field_testing::{
    benchmark_add_latency, benchmark_from_hex, benchmark_mul, benchmark_mul_latency,
};

fn bench_field(c: &mut Criterion) {
    const REPS: usize = 100;
    let fields = [
        ("GF(2^8)", BinaryField::aes()),
        ("GF(2^16)", BinaryField::new(moduli::GF2_16).unwrap()),
        ("GF(2^64)", BinaryField::new(moduli::GF2_64).unwrap()),
        ("GF(2^128)", BinaryField::ghash()),
    ];

    for (name, field) in &fields {
        benchmark_mul(c, field, name);
        benchmark_from_hex(c, field, name);
        benchmark_add_latency::<REPS>(c, field, name);
        benchmark_mul_latency::<REPS>(c, field, name);
    }
}

criterion_group!(binary_field_arithmetic, bench_field);
criterion_main!(binary_field_arithmetic);
