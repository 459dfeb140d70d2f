//! Strongly typed quantities with compile-time dimension checks and exact rescaling.
//!
//! `qdim` is the user-facing crate in this workspace. It re-exports the full API from `qdim-core` plus the predefined
//! units (distance, duration, weight, memory volume).
//!
//! The core idea is: a value is always a `Quantity<T, S, D, C>`, where `T` is the stored number, `S` an exact
//! rational scale, `D` the dimension signature and `C` the capability policy. Only `T` exists at runtime.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Converts between scales exactly, with integer storage staying integer.
//! - Tracks compound dimensions through `*` and `/` and drops them when they cancel.
//! - Lets you declare your own dimensions with `#[derive(Dimension)]`.
//!
//! # What this crate does not try to solve
//!
//! - Affine conversions (Celsius to Fahrenheit).
//! - Unit symbols in `Display` output; quantities print their raw value.
//! - Runtime-typed quantities.
//!
//! # Quick start
//!
//! Sum distances at different scales:
//!
//! ```rust
//! use qdim::{Kilometers, Meters};
//!
//! let a = Kilometers::new(5);
//! let b = Meters::new(10);
//! let sum = a + b;
//! assert_eq!(sum.value(), 5010);
//! assert_eq!(sum, Meters::new(5010));
//! ```
//!
//! Square and divide back:
//!
//! ```rust
//! use qdim::{Kilometers, Meters, SquareMeters};
//!
//! let area = Kilometers::new(2) * Kilometers::new(3);
//! assert_eq!(area, SquareMeters::new(6_000_000));
//!
//! let side = area / Kilometers::new(2);
//! assert_eq!(side, Meters::new(3000));
//!
//! let ratio: i64 = Meters::new(10) / Meters::new(2);
//! assert_eq!(ratio, 5);
//! ```
//!
//! Declare a dimension of your own:
//!
//! ```rust
//! use qdim::{Dimension, Singleton};
//!
//! #[derive(Dimension)]
//! #[dimension(id = 16, crate = "qdim")]
//! pub enum Apples {}
//!
//! type AppleCount = Singleton<u32, Apples>;
//!
//! let basket = AppleCount::new(3) + AppleCount::new(4);
//! assert_eq!(basket.value(), 7);
//! ```
//!
//! Identities `0..=15` are reserved for this workspace; user tags should start at `16`.
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use qdim::{Kilometers, Seconds};
//!
//! let d = Kilometers::new(1);
//! let t = Seconds::new(1);
//! let _ = d + t; // cannot add different dimensions
//! ```
//!
//! Two singletons with distinct tags are distinct dimensions:
//!
//! ```compile_fail
//! use qdim::{Dimension, Singleton};
//!
//! #[derive(Dimension)]
//! #[dimension(id = 16, crate = "qdim")]
//! pub enum Width {}
//!
//! #[derive(Dimension)]
//! #[dimension(id = 17, crate = "qdim")]
//! pub enum Height {}
//!
//! let _ = Singleton::<i32, Width>::new(1) + Singleton::<i32, Height>::new(1);
//! ```
//!
//! A policy without arithmetic rejects operators:
//!
//! ```compile_fail
//! use qdim::{Inert, Singleton};
//! use qdim::Distance;
//!
//! type Frozen = Singleton<i32, Distance, Inert>;
//! let _ = Frozen::new(1) + Frozen::new(2);
//! ```
//!
//! Non-numeric payloads cannot be rescaled:
//!
//! ```compile_fail
//! use qdim::{Kilo, Simple, Unity, Distance};
//!
//! let label = Simple::<bool, Kilo, Distance>::new(true);
//! let _ = label.to::<Unity>();
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `qdim::distance` (micrometres to kilometres, inches, feet, yards, miles, nautical miles)
//! - `qdim::duration` (nanoseconds to weeks, conversions with `core::time::Duration`)
//! - `qdim::weight` (milligrams to tonnes)
//! - `qdim::memory` (bytes to terabytes, binary prefixes)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `qdim-core`.
//! - `serde`: enables `serde` support for `Quantity`; serialization is the raw stored value only, and
//!   `serde_with_scale` records the scale next to it.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! qdim = { version = "0.3.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Unchecked conversions and arithmetic follow the storage type: integer overflow panics in debug builds. Use the
//! `try_` conversions to get a `ConversionError` instead.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use qdim_core::*;

/// Derive macro for dimension tags.
///
/// Pass `crate = "qdim"` so the expansion names this crate: `#[dimension(id = 16, crate = "qdim")]`.
pub use qdim_derive::Dimension;

pub use qdim_core::units::distance;
pub use qdim_core::units::duration;
pub use qdim_core::units::memory;
pub use qdim_core::units::weight;

pub use qdim_core::units::distance::*;
pub use qdim_core::units::duration::*;
pub use qdim_core::units::memory::*;
pub use qdim_core::units::weight::*;
pub use qdim_core::units::{MetersPerSecond, SquareMeters};
