//! Capability policies: which operator families a quantity type exposes.
//!
//! A policy is the fourth parameter of [`Quantity`](crate::Quantity). Arithmetic, ordering and
//! `Display` are only implemented when the policy carries the matching marker trait, so a
//! disabled capability is a compile error rather than a runtime check.
//!
//! ```rust
//! use qdim_core::{Caps, Singleton};
//! use qdim_core::units::Distance;
//!
//! // Addable and printable, but not ordered.
//! type Offset = Singleton<i32, Distance, Caps<true, false, true>>;
//!
//! let a = Offset::new(3) + Offset::new(4);
//! assert_eq!(a.to_string(), "7");
//! ```
//!
//! ```compile_fail
//! use qdim_core::{Caps, Singleton};
//! use qdim_core::units::Distance;
//!
//! type Offset = Singleton<i32, Distance, Caps<true, false, true>>;
//! let _ = Offset::new(3) < Offset::new(4);
//! ```

/// Const-generic capability policy.
///
/// Each flag enables one operator family:
///
/// - `ARITHMETIC`: `+ - * / %`, their compound forms, scalar arithmetic and increments.
/// - `ORDERING`: `< <= > >=` and [`Ord`].
/// - `STREAMING`: [`Display`](core::fmt::Display).
///
/// Equality, hashing, cloning, `Debug` and negation are always available.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Caps<const ARITHMETIC: bool, const ORDERING: bool, const STREAMING: bool>;

/// Every capability enabled. The default policy.
pub type Full = Caps<true, true, true>;

/// Every capability disabled: a value that can only be stored, compared for equality and hashed.
pub type Inert = Caps<false, false, false>;

/// Policies that allow arithmetic.
#[diagnostic::on_unimplemented(
    message = "arithmetic is disabled by the capability policy `{Self}`",
    label = "this quantity type does not allow arithmetic"
)]
pub trait Arithmetic {}

impl<const ORDERING: bool, const STREAMING: bool> Arithmetic for Caps<true, ORDERING, STREAMING> {}

/// Policies that allow ordering.
#[diagnostic::on_unimplemented(
    message = "ordering is disabled by the capability policy `{Self}`",
    label = "this quantity type cannot be ordered"
)]
pub trait Ordered {}

impl<const ARITHMETIC: bool, const STREAMING: bool> Ordered for Caps<ARITHMETIC, true, STREAMING> {}

/// Policies that allow `Display`.
#[diagnostic::on_unimplemented(
    message = "streaming is disabled by the capability policy `{Self}`",
    label = "this quantity type cannot be displayed"
)]
pub trait Streaming {}

impl<const ARITHMETIC: bool, const ORDERING: bool> Streaming for Caps<ARITHMETIC, ORDERING, true> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn arithmetic<C: Arithmetic>() -> bool {
        true
    }

    fn ordered<C: Ordered>() -> bool {
        true
    }

    fn streaming<C: Streaming>() -> bool {
        true
    }

    #[test]
    fn full_policy_has_every_marker() {
        assert!(arithmetic::<Full>());
        assert!(ordered::<Full>());
        assert!(streaming::<Full>());
    }

    #[test]
    fn partial_policies() {
        assert!(arithmetic::<Caps<true, false, false>>());
        assert!(ordered::<Caps<false, true, false>>());
        assert!(streaming::<Caps<false, false, true>>());
    }
}
