use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Binary, Debug, Display, Formatter, LowerHex, UpperHex};
use core::ops::{Add, Mul, Sub};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::encoding::{pack_bits, parse_hex, render_hex, render_polynomial, unpack_bits};
use crate::reduction::{mul_reduce, poly_degree, reduce};
use crate::{BinaryField, FieldError, FieldResult};

/// An element of `GF(2^m)`, stored as a reduced polynomial together with the modulus of its field.
///
/// Bit `i` of `value` is the coefficient of `x^i`. The modulus is carried by value, so two
/// elements can be combined exactly when their moduli are equal; sharing a degree is not enough.
///
/// Elements are immutable. Arithmetic returns a new element, or [`FieldError::IncompatibleField`]
/// when the operands come from different fields:
///
/// ```
/// use gf2m_field::GfElement;
///
/// let a = GfElement::from_hex("0x57", 0x11bu32)?;
/// let b = GfElement::from_hex("0x83", 0x11bu32)?;
/// assert_eq!((&a * &b)?.to_hex(), "0xc1");
/// assert_eq!((&a + &b)?.to_polynomial(), "x^7 + x^6 + x^4 + x^2");
/// # Ok::<(), gf2m_field::FieldError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ElementRepr", into = "ElementRepr")]
pub struct GfElement {
    /// Always satisfies `value.bits() <= degree`.
    value: BigUint,
    modulus: BigUint,
    degree: u64,
}

impl GfElement {
    /// Creates the element `value mod modulus`.
    ///
    /// Fails with [`FieldError::InvalidModulus`] if `modulus` is zero.
    pub fn new(value: impl Into<BigUint>, modulus: impl Into<BigUint>) -> FieldResult<Self> {
        let modulus = modulus.into();
        let degree = poly_degree(&modulus).ok_or(FieldError::InvalidModulus)?;
        let value = reduce(value.into(), &modulus);
        Ok(Self {
            value,
            modulus,
            degree,
        })
    }

    /// Creates an element from a hexadecimal literal such as `"0x6"`.
    pub fn from_hex(hex: &str, modulus: impl Into<BigUint>) -> FieldResult<Self> {
        Self::new(parse_hex(hex)?, modulus)
    }

    /// Creates an element from a most-significant-first bit vector, e.g. `[1, 1, 0]` for `x^2 + x`.
    pub fn from_bitvector(bits: &[u8], modulus: impl Into<BigUint>) -> FieldResult<Self> {
        Self::new(pack_bits(bits)?, modulus)
    }

    /// Builds an element of an already validated field.
    pub(crate) fn in_field(value: BigUint, field: &BinaryField) -> Self {
        Self {
            value: reduce(value, field.modulus()),
            modulus: field.modulus().clone(),
            degree: field.degree(),
        }
    }

    /// Wraps `value` in the same field as `self`.
    fn sibling(&self, value: BigUint) -> Self {
        Self {
            value: reduce(value, &self.modulus),
            modulus: self.modulus.clone(),
            degree: self.degree,
        }
    }

    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    #[inline]
    pub fn into_value(self) -> BigUint {
        self.value
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The extension degree `m` of the field this element lives in.
    #[inline]
    pub fn degree(&self) -> u64 {
        self.degree
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    /// Returns the descriptor of the field this element belongs to.
    pub fn field(&self) -> BinaryField {
        BinaryField::from_parts(self.modulus.clone(), self.degree)
    }

    fn check_same_field(&self, other: &Self) -> FieldResult<()> {
        if self.modulus != other.modulus {
            debug!(
                lhs = %self.modulus,
                rhs = %other.modulus,
                "rejecting operands from different fields"
            );
            return Err(FieldError::incompatible(&self.modulus, &other.modulus));
        }
        Ok(())
    }

    /// Field addition, the XOR of both coefficient vectors.
    pub fn try_add(&self, rhs: &Self) -> FieldResult<Self> {
        self.check_same_field(rhs)?;
        Ok(self.sibling(&self.value ^ &rhs.value))
    }

    /// Field subtraction. In characteristic 2 this coincides with addition.
    pub fn try_sub(&self, rhs: &Self) -> FieldResult<Self> {
        self.try_add(rhs)
    }

    /// Field multiplication, reducing after every shift of the multiplicand.
    #[instrument(level = "trace", skip_all, fields(degree = self.degree))]
    pub fn try_mul(&self, rhs: &Self) -> FieldResult<Self> {
        self.check_same_field(rhs)?;
        Ok(self.sibling(mul_reduce(&self.value, &rhs.value, &self.modulus)))
    }

    /// Renders the value as a lowercase `0x`-prefixed hex literal.
    pub fn to_hex(&self) -> String {
        render_hex(&self.value)
    }

    /// Renders the value as exactly `degree` bits, most significant first.
    pub fn to_bitvector(&self) -> Vec<u8> {
        unpack_bits(&self.value, self.degree)
    }

    /// Renders the value as a polynomial in `x`, e.g. `x^6 + x^5`, or `0`.
    pub fn to_polynomial(&self) -> String {
        render_polynomial(&self.value)
    }
}

macro_rules! impl_fallible_binop {
    ($trait:ident, $method:ident, $inner:ident) => {
        impl $trait<&GfElement> for &GfElement {
            type Output = FieldResult<GfElement>;

            #[inline]
            fn $method(self, rhs: &GfElement) -> Self::Output {
                self.$inner(rhs)
            }
        }

        impl $trait<GfElement> for &GfElement {
            type Output = FieldResult<GfElement>;

            #[inline]
            fn $method(self, rhs: GfElement) -> Self::Output {
                self.$inner(&rhs)
            }
        }

        impl $trait<&GfElement> for GfElement {
            type Output = FieldResult<GfElement>;

            #[inline]
            fn $method(self, rhs: &GfElement) -> Self::Output {
                self.$inner(rhs)
            }
        }

        impl $trait for GfElement {
            type Output = FieldResult<GfElement>;

            #[inline]
            fn $method(self, rhs: GfElement) -> Self::Output {
                self.$inner(&rhs)
            }
        }
    };
}

impl_fallible_binop!(Add, add, try_add);
impl_fallible_binop!(Sub, sub, try_sub);
impl_fallible_binop!(Mul, mul, try_mul);

impl Display for GfElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Debug for GfElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "GfElement({:#b}, GF(2^{}))", self.value, self.degree)
    }
}

impl LowerHex for GfElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(&self.value, f)
    }
}

impl UpperHex for GfElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        UpperHex::fmt(&self.value, f)
    }
}

impl Binary for GfElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Binary::fmt(&self.value, f)
    }
}

/// Wire form of a [`GfElement`]: both integers as hex literals.
#[derive(Serialize, Deserialize)]
struct ElementRepr {
    value: String,
    modulus: String,
}

impl From<GfElement> for ElementRepr {
    fn from(element: GfElement) -> Self {
        Self {
            value: element.to_hex(),
            modulus: render_hex(&element.modulus),
        }
    }
}

impl TryFrom<ElementRepr> for GfElement {
    type Error = FieldError;

    fn try_from(repr: ElementRepr) -> FieldResult<Self> {
        Self::from_hex(&repr.value, parse_hex(&repr.modulus)?)
    }
}
