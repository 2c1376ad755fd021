//! Arithmetic over binary extension fields `GF(2^m)`.
//!
//! Elements are polynomials over `GF(2)` encoded as integers, reduced modulo a caller-supplied
//! irreducible polynomial of degree `m`.

#![no_std]

extern crate alloc;

mod element;
mod encoding;
mod error;
mod field;
pub mod moduli;
mod reduction;

pub use element::*;
pub use error::*;
pub use field::*;
pub use reduction::poly_degree;
