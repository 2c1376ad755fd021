//! Irreducible polynomials for commonly used binary fields.
//!
//! Each constant encodes the polynomial with bit `i` holding the coefficient of `x^i`.

use num_bigint::BigUint;

/// `x^4 + x + 1`, the field of nibbles used by small BCH codes.
pub const GF2_4: u128 = 0b1_0011;

/// `x^8 + x^4 + x^3 + x + 1`, the Rijndael field used by AES.
pub const AES: u128 = 0x11b;

/// `x^8 + x^4 + x^3 + x^2 + 1`, the field commonly used for Reed-Solomon byte codes.
pub const GF2_8_REED_SOLOMON: u128 = 0x11d;

/// `x^16 + x^5 + x^3 + x^2 + 1`.
pub const GF2_16: u128 = 0x1_002d;

/// `x^32 + x^7 + x^3 + x^2 + 1`.
pub const GF2_32: u128 = 0x1_0000_008d;

/// `x^64 + x^4 + x^3 + x + 1`.
pub const GF2_64: u128 = 0x1_0000_0000_0000_001b;

/// `x^128 + x^7 + x^2 + x + 1`, the GHASH field of AES-GCM.
///
/// Needs 129 bits, so it cannot be a `u128` constant.
pub fn ghash_modulus() -> BigUint {
    (BigUint::from(1u8) << 128u32) | BigUint::from(0x87u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduction::poly_degree;

    #[test]
    fn test_degrees() {
        let cases = [
            (BigUint::from(GF2_4), 4),
            (BigUint::from(AES), 8),
            (BigUint::from(GF2_8_REED_SOLOMON), 8),
            (BigUint::from(GF2_16), 16),
            (BigUint::from(GF2_32), 32),
            (BigUint::from(GF2_64), 64),
            (ghash_modulus(), 128),
        ];
        for (modulus, degree) in cases {
            assert_eq!(poly_degree(&modulus), Some(degree));
            // Irreducible polynomials of degree > 1 have a constant term.
            assert!(modulus.bit(0));
        }
    }
}
