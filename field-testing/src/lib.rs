//! Utilities for testing binary field implementations.

#![no_std]

extern crate alloc;

pub mod bench_func;

pub use bench_func::*;
use gf2m_field::{BinaryField, FieldError, GfElement};
use num_bigint::BigUint;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Number of random elements (or pairs, or triples) each property is checked on.
const SAMPLES: usize = 64;

fn sample_rng() -> SmallRng {
    SmallRng::seed_from_u64(1)
}

pub fn test_reduction_closure(field: &BinaryField) {
    let mut rng = sample_rng();
    for _ in 0..SAMPLES {
        // Feed raw integers up to three times wider than the field.
        let wide_bits = 3 * field.degree() + 1;
        let mut raw = BigUint::default();
        for bit in 0..wide_bits {
            raw.set_bit(bit, rng.random());
        }
        let x = GfElement::new(raw, field.modulus().clone()).unwrap();
        assert!(x.value().bits() <= field.degree());
        assert!(field.contains(&x));
    }
}

pub fn test_add_involution(field: &BinaryField) {
    let mut rng = sample_rng();
    for _ in 0..SAMPLES {
        let a: GfElement = rng.sample(field);
        let b: GfElement = rng.sample(field);
        let sum = (&a + &b).unwrap();
        assert_eq!((&sum + &b).unwrap(), a);
        assert_eq!((&sum - &b).unwrap(), a);
        assert_eq!((&a + &a).unwrap(), field.zero());
        assert_eq!((&a + &field.zero()).unwrap(), a);
    }
}

pub fn test_sub_is_add(field: &BinaryField) {
    let mut rng = sample_rng();
    for _ in 0..SAMPLES {
        let a: GfElement = rng.sample(field);
        let b: GfElement = rng.sample(field);
        assert_eq!(&a - &b, &a + &b);
    }
}

pub fn test_commutativity(field: &BinaryField) {
    let mut rng = sample_rng();
    for _ in 0..SAMPLES {
        let a: GfElement = rng.sample(field);
        let b: GfElement = rng.sample(field);
        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&a * &b, &b * &a);
    }
}

pub fn test_associativity(field: &BinaryField) {
    let mut rng = sample_rng();
    for _ in 0..SAMPLES {
        let a: GfElement = rng.sample(field);
        let b: GfElement = rng.sample(field);
        let c: GfElement = rng.sample(field);
        assert_eq!(
            (&a + &b).and_then(|ab| ab + &c),
            (&b + &c).and_then(|bc| &a + bc)
        );
        assert_eq!(
            (&a * &b).and_then(|ab| ab * &c),
            (&b * &c).and_then(|bc| &a * bc)
        );
    }
}

pub fn test_distributivity(field: &BinaryField) {
    let mut rng = sample_rng();
    for _ in 0..SAMPLES {
        let a: GfElement = rng.sample(field);
        let b: GfElement = rng.sample(field);
        let c: GfElement = rng.sample(field);
        let lhs = (&b + &c).and_then(|bc| &a * bc).unwrap();
        let rhs = ((&a * &b).unwrap() + (&a * &c).unwrap()).unwrap();
        assert_eq!(lhs, rhs);
    }
}

pub fn test_mul_identities(field: &BinaryField) {
    let mut rng = sample_rng();
    let zero = field.zero();
    let one = field.one();
    for _ in 0..SAMPLES {
        let a: GfElement = rng.sample(field);
        assert_eq!((&a * &one).unwrap(), a);
        assert_eq!((&one * &a).unwrap(), a);
        assert_eq!((&a * &zero).unwrap(), zero);
    }
}

/// Multiplying by the generator `x` is a shift followed by a single reduction.
pub fn test_mul_by_generator(field: &BinaryField) {
    let mut rng = sample_rng();
    let x = field.generator();
    for _ in 0..SAMPLES {
        let a: GfElement = rng.sample(field);
        let shifted = field.element(a.value() << 1u32);
        assert_eq!((&a * &x).unwrap(), shifted);
    }
}

pub fn test_hex_roundtrip(field: &BinaryField) {
    let mut rng = sample_rng();
    for _ in 0..SAMPLES {
        let a: GfElement = rng.sample(field);
        let hex = a.to_hex();
        assert_eq!(GfElement::from_hex(&hex, field.modulus().clone()), Ok(a.clone()));
        assert_eq!(field.from_hex(&hex), Ok(a));
    }
}

pub fn test_bitvector_roundtrip(field: &BinaryField) {
    let mut rng = sample_rng();
    for _ in 0..SAMPLES {
        let a: GfElement = rng.sample(field);
        let bits = a.to_bitvector();
        assert_eq!(bits.len() as u64, field.degree());
        assert_eq!(
            GfElement::from_bitvector(&bits, field.modulus().clone()),
            Ok(a.clone())
        );
        assert_eq!(field.from_bitvector(&bits), Ok(a));
    }
}

/// Checks that elements of `field` and `other` refuse to combine. The moduli must differ.
pub fn test_field_mismatch(field: &BinaryField, other: &BinaryField) {
    assert_ne!(field.modulus(), other.modulus());
    let mut rng = sample_rng();
    for _ in 0..SAMPLES {
        let a: GfElement = rng.sample(field);
        let b: GfElement = rng.sample(other);
        let expected = Err(FieldError::IncompatibleField {
            lhs: field.modulus().clone(),
            rhs: other.modulus().clone(),
        });
        assert_eq!(&a + &b, expected);
        assert_eq!(&a - &b, expected);
        assert_eq!(&a * &b, expected);
        assert_ne!(a, b);
    }
}

/// Generates the standard property tests for a [`BinaryField`] expression.
#[macro_export]
macro_rules! test_binary_field {
    ($mod:ident, $field:expr) => {
        mod $mod {
            #[test]
            fn test_reduction_closure() {
                $crate::test_reduction_closure(&$field);
            }

            #[test]
            fn test_add_involution() {
                $crate::test_add_involution(&$field);
            }

            #[test]
            fn test_sub_is_add() {
                $crate::test_sub_is_add(&$field);
            }

            #[test]
            fn test_commutativity() {
                $crate::test_commutativity(&$field);
            }

            #[test]
            fn test_associativity() {
                $crate::test_associativity(&$field);
            }

            #[test]
            fn test_distributivity() {
                $crate::test_distributivity(&$field);
            }

            #[test]
            fn test_mul_identities() {
                $crate::test_mul_identities(&$field);
            }

            #[test]
            fn test_mul_by_generator() {
                $crate::test_mul_by_generator(&$field);
            }

            #[test]
            fn test_hex_roundtrip() {
                $crate::test_hex_roundtrip(&$field);
            }

            #[test]
            fn test_bitvector_roundtrip() {
                $crate::test_bitvector_roundtrip(&$field);
            }
        }
    };
}
