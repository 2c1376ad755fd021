use alloc::string::String;
use alloc::vec;
use core::fmt::{self, Debug, Display, Formatter};

use num_bigint::BigUint;
use num_traits::One;
use rand::distr::Distribution;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::encoding::{pack_bits, parse_hex, render_hex};
use crate::moduli;
use crate::reduction::poly_degree;
use crate::{FieldError, FieldResult, GfElement};

/// A binary extension field `GF(2^m)`, identified by its modulus.
///
/// The modulus is assumed to be irreducible; this is not checked. Elements created through a
/// `BinaryField` skip modulus validation, since it already happened here.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FieldRepr", into = "FieldRepr")]
pub struct BinaryField {
    modulus: BigUint,
    degree: u64,
}

impl BinaryField {
    /// Fails with [`FieldError::InvalidModulus`] if `modulus` is zero.
    pub fn new(modulus: impl Into<BigUint>) -> FieldResult<Self> {
        let modulus = modulus.into();
        let degree = poly_degree(&modulus).ok_or(FieldError::InvalidModulus)?;
        debug!(modulus = %modulus, degree, "created binary field");
        Ok(Self { modulus, degree })
    }

    pub(crate) const fn from_parts(modulus: BigUint, degree: u64) -> Self {
        Self { modulus, degree }
    }

    /// The AES field, `GF(2^8)` modulo `x^8 + x^4 + x^3 + x + 1`.
    pub fn aes() -> Self {
        Self::from_parts(BigUint::from(moduli::AES), 8)
    }

    /// The GHASH field, `GF(2^128)` modulo `x^128 + x^7 + x^2 + x + 1`.
    pub fn ghash() -> Self {
        Self::from_parts(moduli::ghash_modulus(), 128)
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    #[inline]
    pub fn degree(&self) -> u64 {
        self.degree
    }

    /// The number of elements, `2^m`.
    pub fn order(&self) -> BigUint {
        BigUint::one() << self.degree
    }

    pub fn zero(&self) -> GfElement {
        self.element(0u8)
    }

    pub fn one(&self) -> GfElement {
        self.element(1u8)
    }

    /// The element `x`, which generates the field as an algebra over `GF(2)`.
    pub fn generator(&self) -> GfElement {
        self.element(2u8)
    }

    pub fn element(&self, value: impl Into<BigUint>) -> GfElement {
        GfElement::in_field(value.into(), self)
    }

    pub fn from_hex(&self, hex: &str) -> FieldResult<GfElement> {
        Ok(GfElement::in_field(parse_hex(hex)?, self))
    }

    pub fn from_bitvector(&self, bits: &[u8]) -> FieldResult<GfElement> {
        Ok(GfElement::in_field(pack_bits(bits)?, self))
    }

    /// Whether `element` belongs to this field.
    pub fn contains(&self, element: &GfElement) -> bool {
        element.modulus() == &self.modulus
    }
}

impl Display for BinaryField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "GF(2^{})", self.degree)
    }
}

impl Debug for BinaryField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryField")
            .field("modulus", &format_args!("{:#x}", self.modulus))
            .field("degree", &self.degree)
            .finish()
    }
}

/// Samples uniformly from all `2^m` elements.
impl Distribution<GfElement> for BinaryField {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GfElement {
        let mut bytes = vec![0u8; self.degree.div_ceil(8) as usize];
        rng.fill_bytes(&mut bytes);
        let mask = (BigUint::one() << self.degree) - BigUint::one();
        self.element(BigUint::from_bytes_le(&bytes) & mask)
    }
}

#[derive(Serialize, Deserialize)]
struct FieldRepr {
    modulus: String,
}

impl From<BinaryField> for FieldRepr {
    fn from(field: BinaryField) -> Self {
        Self {
            modulus: render_hex(&field.modulus),
        }
    }
}

impl TryFrom<FieldRepr> for BinaryField {
    type Error = FieldError;

    fn try_from(repr: FieldRepr) -> FieldResult<Self> {
        Self::new(parse_hex(&repr.modulus)?)
    }
}
