//! Core engine for compile-time dimensional analysis with exact rational scales.
//!
//! `qdim-core` models a measured value as a [`Quantity<T, S, D, C>`]:
//!
//! - `T` is the storage type (any primitive number, or a non-numeric [`Payload`]).
//! - `S` is a [`Scale`], an exact rational factor relative to the base unit (`Kilo` is `1000/1`).
//! - `D` is a dimension pair [`Dims<N, D>`]: a list of numerator tags over a list of denominator
//!   tags, each tag a zero-sized type implementing [`Dimension`].
//! - `C` is a capability policy ([`Caps`]) that turns operator families on or off.
//!
//! Everything except the stored value is resolved at compile time: adding a distance to a duration
//! does not type-check, conversions between scales use a rational coefficient computed in a
//! constant, and a product or quotient whose dimensions cancel collapses to a bare `T`.
//!
//! Most users should depend on `qdim` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions, including compound ones (`m*m`, `m/s`, `1/s`).
//! - Exact conversions between scales (no floating-point ratio for integer storage).
//! - Mixed-scale and mixed-storage arithmetic with a deterministic result type.
//! - Opting out of arithmetic, ordering or printing per quantity type.
//!
//! # What this crate does not try to solve
//!
//! - Affine units such as temperature offsets.
//! - Parsing or printing unit symbols; `Display` prints the raw value only.
//! - Dimension exponents beyond what repeated tags express.
//!
//! # Quick start
//!
//! Convert between predefined units:
//!
//! ```rust
//! use qdim_core::units::{Kilometers, Meters};
//!
//! let km = Kilometers::new(3);
//! let m: Meters = km.cast();
//! assert_eq!(m.value(), 3000);
//! ```
//!
//! Mix scales in one expression:
//!
//! ```rust
//! use qdim_core::units::{Centimeters, Kilometers, Meters};
//!
//! let total = Kilometers::new(1) + Meters::new(250) + Centimeters::new(50);
//! assert_eq!(total.value(), 125_050); // centimeters
//! ```
//!
//! Compose and cancel dimensions:
//!
//! ```rust
//! use qdim_core::units::{Kilometers, Meters, MetersPerSecond, Seconds};
//!
//! let v: MetersPerSecond = (Meters::new(100) / Seconds::new(20)).cast();
//! assert_eq!(v.value(), 5);
//!
//! let ratio: i64 = Kilometers::new(3) / Meters::new(1);
//! assert_eq!(ratio, 3000);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `qdim-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! qdim-core = { version = "0.3.0", default-features = false }
//! ```
//!
//! Floating-point helpers that aren't available in `core` come from `num-traits` with its `libm` backend.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support, `String`/`Vec` payloads and [`serde_with_scale`].
//! - `serde`: enables `serde` support for `Quantity`; serialization is the raw stored value only.
//!
//! # Panics and errors
//!
//! The unchecked conversions ([`Quantity::to`], [`Quantity::cast`], [`cast_value`]) follow the storage type's
//! native behaviour: integer overflow panics in debug builds and wraps in release, exactly like the same
//! multiplication written by hand. The checked counterparts ([`Quantity::try_to`], [`Quantity::try_cast`],
//! [`try_cast_value`]) return [`ConversionError`] instead.
//!
//! Rescaling a [`Payload`] to a different scale is rejected at compile time.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod capability;
mod dimension;
mod error;
mod macros;
mod ops;
mod quantity;
pub mod rational;
mod scale;
mod storage;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use qdim_derive::Dimension;
pub use typenum;

pub use capability::{Arithmetic, Caps, Full, Inert, Ordered, Streaming};
#[doc(hidden)]
pub use dimension::RemoveIf;
pub use dimension::{
    is_degenerate, Base, Collapse, Cons, DimDiv, DimMul, DimPair, DimSet, Dimension, Dimensionless, Dims,
    Inverted, IsDegenerate, IsEmpty, Join, Joined, Nil, Quotient, RemoveAll, RemoveOne, Removed, RemovedAll,
    SameDimension, Signature, Trim, Trimmed,
};
pub use error::ConversionError;
pub use quantity::{cast, CastFrom, Quantity, Simple, Singleton};
pub use rational::Fraction;
pub use scale::{
    Atto, Centi, CommonScale, Deca, Deci, Exa, Femto, Gibi, Giga, Hecto, Kibi, Kilo, Mebi, Mega, Micro, Milli,
    Nano, Pebi, Peta, Pico, Ratio, Scale, ScaleDiv, ScaleMul, ScaleRecip, Tebi, Tera, Transfer, Unity,
};
pub use storage::{cast_value, try_cast_value, Payload, Promote, Promoted, Rescale, Scalar};

#[cfg(all(feature = "serde", feature = "std"))]
pub use quantity::serde_with_scale;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined units (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined dimension tags and unit aliases.
///
/// These live in `qdim-core` so the reserved tag identities are claimed in one place.
pub mod units;
