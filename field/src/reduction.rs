//! Polynomial arithmetic over `GF(2)` on integer encodings.
//!
//! Bit `i` of an integer is the coefficient of `x^i`, so XOR is polynomial addition and a left
//! shift by `k` multiplies by `x^k`.

use num_bigint::BigUint;
use num_traits::Zero;

/// Returns the degree of the polynomial encoded by `poly`, or `None` for the zero polynomial.
#[must_use]
#[inline]
pub fn poly_degree(poly: &BigUint) -> Option<u64> {
    poly.bits().checked_sub(1)
}

/// Computes `value mod modulus` by binary long division.
///
/// Each step cancels the leading term of `value` by XOR-ing in `modulus` shifted to the same
/// degree, so the bit length strictly decreases and the loop runs at most `value.bits()` times.
///
/// `modulus` must be non-zero.
#[must_use]
pub(crate) fn reduce(mut value: BigUint, modulus: &BigUint) -> BigUint {
    debug_assert!(!modulus.is_zero());
    let modulus_bits = modulus.bits();

    // deg(value) >= deg(modulus). A non-zero modulus has at least one bit, so this also
    // stops on a zero value.
    while value.bits() >= modulus_bits {
        let shift = value.bits() - modulus_bits;
        value ^= modulus << shift;
    }
    value
}

/// Multiplies two reduced polynomials modulo `modulus` using shift-and-add.
///
/// The running multiplicand is multiplied by `x` and reduced after every step, so no
/// intermediate value ever exceeds `deg(modulus) + 1` bits.
#[must_use]
pub(crate) fn mul_reduce(lhs: &BigUint, rhs: &BigUint, modulus: &BigUint) -> BigUint {
    let mut result = BigUint::zero();
    let mut a = lhs.clone();
    let mut b = rhs.clone();

    while !b.is_zero() {
        if b.bit(0) {
            result ^= &a;
        }
        b >>= 1u32;
        a <<= 1u32;
        a = reduce(a, modulus);
    }
    result
}
