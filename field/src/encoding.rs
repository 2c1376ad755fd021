//! Parsing and rendering of the textual and bit-vector encodings of field elements.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{EncodingKind, FieldError, FieldResult};

/// Parses a hexadecimal literal such as `"0x6"`, `"0XFF"` or `"1b"`.
///
/// Surrounding whitespace and a single `0x`/`0X` prefix are accepted. Signs, separators and
/// empty digit strings are rejected.
pub(crate) fn parse_hex(input: &str) -> FieldResult<BigUint> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(FieldError::malformed(
            EncodingKind::Hex,
            format!("no hex digits in {input:?}"),
        ));
    }
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(FieldError::malformed(
            EncodingKind::Hex,
            format!("invalid character {c:?} in {input:?}"),
        ));
    }

    BigUint::parse_bytes(digits.as_bytes(), 16).ok_or_else(|| {
        FieldError::malformed(EncodingKind::Hex, format!("cannot parse {input:?}"))
    })
}

/// Packs a most-significant-first bit vector into an integer.
pub(crate) fn pack_bits(bits: &[u8]) -> FieldResult<BigUint> {
    let mut value = BigUint::zero();
    for (weight, &bit) in bits.iter().rev().enumerate() {
        match bit {
            0 => {}
            1 => value.set_bit(weight as u64, true),
            other => {
                let index = bits.len() - 1 - weight;
                return Err(FieldError::malformed(
                    EncodingKind::BitVector,
                    format!("entry {index} is {other}, expected 0 or 1"),
                ));
            }
        }
    }
    Ok(value)
}

/// Renders `value` as a lowercase `0x`-prefixed literal.
pub(crate) fn render_hex(value: &BigUint) -> String {
    format!("{value:#x}")
}

/// Renders the low `width` bits of `value`, most significant first.
pub(crate) fn unpack_bits(value: &BigUint, width: u64) -> Vec<u8> {
    (0..width).rev().map(|i| u8::from(value.bit(i))).collect()
}

/// Renders `value` as a sum of powers of `x` in descending order, e.g. `x^6 + x^5 + 1`.
pub(crate) fn render_polynomial(value: &BigUint) -> String {
    let terms: Vec<String> = (0..value.bits())
        .rev()
        .filter(|&i| value.bit(i))
        .map(|i| match i {
            0 => String::from("1"),
            1 => String::from("x"),
            k => format!("x^{k}"),
        })
        .collect();

    if terms.is_empty() {
        String::from("0")
    } else {
        terms.join(" + ")
    }
}
