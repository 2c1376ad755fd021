use gf2m_field::{BinaryField, FieldError, GfElement, moduli};
use gf2m_field_testing::{test_binary_field, test_field_mismatch};
use num_bigint::BigUint;

test_binary_field!(gf2, gf2m_field::BinaryField::new(0b10u8).unwrap());
test_binary_field!(gf2_4, gf2m_field::BinaryField::new(gf2m_field::moduli::GF2_4).unwrap());
test_binary_field!(aes, gf2m_field::BinaryField::aes());
test_binary_field!(
    reed_solomon,
    gf2m_field::BinaryField::new(gf2m_field::moduli::GF2_8_REED_SOLOMON).unwrap()
);
test_binary_field!(gf2_16, gf2m_field::BinaryField::new(gf2m_field::moduli::GF2_16).unwrap());
test_binary_field!(gf2_64, gf2m_field::BinaryField::new(gf2m_field::moduli::GF2_64).unwrap());
test_binary_field!(ghash, gf2m_field::BinaryField::ghash());
// Not irreducible, so only a ring. Every property above still holds in `GF(2)[x] / (x^8 + 1)`.
test_binary_field!(reducible, gf2m_field::BinaryField::new(0x101u32).unwrap());

const AES: u32 = 0b1_0001_1011;

fn aes(hex: &str) -> GfElement {
    GfElement::from_hex(hex, AES).unwrap()
}

#[test]
fn test_mismatched_fields() {
    let small = BinaryField::new(0b1011u8).unwrap();
    let other = BinaryField::new(0b1_0011u8).unwrap();
    test_field_mismatch(&small, &other);
    test_field_mismatch(&other, &small);
    // Same degree is not enough.
    test_field_mismatch(
        &BinaryField::aes(),
        &BinaryField::new(moduli::GF2_8_REED_SOLOMON).unwrap(),
    );
}

#[test]
fn test_from_hex() {
    assert_eq!(aes("0x02"), GfElement::new(0b0000_0010u8, AES).unwrap());
}

#[test]
fn test_to_polynomial() {
    assert_eq!(aes("0x02").to_polynomial(), "x");
    assert_eq!(aes("0x60").to_polynomial(), "x^6 + x^5");
}

#[test]
fn test_addition() {
    assert_eq!((aes("0x02") + aes("0x60")).unwrap(), aes("0x62"));
}

#[test]
fn test_subtraction() {
    assert_eq!((aes("0x02") - aes("0x60")).unwrap(), aes("0x62"));
}

#[test]
fn test_multiplication() {
    // x * (x^6 + x^5) = x^7 + x^6 needs no reduction.
    assert_eq!((aes("0x02") * aes("0x60")).unwrap(), aes("0xc0"));
    // FIPS-197, section 4.2.
    assert_eq!((aes("0x57") * aes("0x83")).unwrap(), aes("0xc1"));
    assert_eq!((aes("0x57") * aes("0x13")).unwrap(), aes("0xfe"));
}

#[test]
fn test_xtime_chain() {
    // FIPS-197, section 4.2.1: repeated multiplication of {57} by {02}.
    let x = BinaryField::aes().generator();
    let expected = ["0xae", "0x47", "0x8e", "0x7", "0xe"];
    let mut acc = aes("0x57");
    for hex in expected {
        acc = (&acc * &x).unwrap();
        assert_eq!(acc.to_hex(), hex);
    }
}

#[test]
fn test_equality() {
    let a = GfElement::new(0b1010u8, AES).unwrap();
    let b = GfElement::new(0b1010u8, AES).unwrap();
    let c = GfElement::new(0b1100u8, AES).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_invalid_addition() {
    let a = GfElement::new(0b1010u8, AES).unwrap();
    let b = GfElement::new(0b1100u8, 0b1011u8).unwrap();
    assert!(matches!(a + b, Err(FieldError::IncompatibleField { .. })));
}

#[test]
fn test_ghash_multiplication() {
    let field = BinaryField::ghash();
    // x^127 * x = x^128 = x^7 + x^2 + x + 1
    let top = field.element(BigUint::from(1u8) << 127u32);
    assert_eq!(top.to_polynomial(), "x^127");
    let product = (&top * &field.generator()).unwrap();
    assert_eq!(product.to_hex(), "0x87");
    assert_eq!(product.to_polynomial(), "x^7 + x^2 + x + 1");
}

#[test]
fn test_degree_zero_modulus() {
    // Modulus `1` collapses everything to zero and renders an empty bit vector.
    let a = GfElement::new(0xffu8, 1u8).unwrap();
    assert!(a.is_zero());
    assert_eq!(a.degree(), 0);
    assert!(a.to_bitvector().is_empty());
    assert_eq!(a.to_polynomial(), "0");
}

#[test]
fn test_malformed_inputs() {
    assert!(matches!(
        GfElement::from_hex("0xzz", AES),
        Err(FieldError::MalformedEncoding { .. })
    ));
    assert!(matches!(
        GfElement::from_bitvector(&[0, 1, 3], AES),
        Err(FieldError::MalformedEncoding { .. })
    ));
    assert_eq!(
        GfElement::new(1u8, 0u8).unwrap_err(),
        FieldError::InvalidModulus
    );
}
