//! Storage types: how stored values are rescaled, combined and passed through.
//!
//! Numeric primitives rescale through a widened intermediate (`i128` or `u128` by the sign of
//! the source integer, `f64` as soon as a float is involved). Types marked [`Payload`] carry no numeric
//! meaning and can only be moved through an identity conversion.

use crate::error::ConversionError;
use crate::rational::Fraction;
use crate::scale::{Scale, Transfer};
use num_traits::FromPrimitive;

/// Conversion of a stored value into storage `To` under a transfer coefficient.
///
/// The coefficient is applied in this order, which keeps integer results exact whenever they
/// can be:
///
/// 1. `1/1`: plain `as` conversion.
/// 2. `n/1`: multiply by `n`.
/// 3. `1/d`: divide by `d` (integers truncate toward zero).
/// 4. `n/d`: multiply by `n`, then divide by `d`.
pub trait Rescale<To>: Sized {
    /// `false` for values that only support the identity coefficient.
    const SCALABLE: bool = true;

    /// Applies `coef`. Overflow follows the storage type's native behaviour.
    fn rescale(self, coef: Fraction) -> To;

    /// Applies `coef` with checked intermediate arithmetic and a range-checked narrowing.
    fn try_rescale(self, coef: Fraction) -> Result<To, ConversionError>;
}

/// Marker for non-numeric stored values (strings, handles, user structs).
///
/// A payload converts only into itself and only under the identity coefficient; any attempt to
/// rescale it is rejected when the conversion is instantiated.
///
/// ```rust
/// use qdim_core::{Payload, Singleton};
/// use qdim_core::Dimension;
///
/// #[derive(Dimension)]
/// #[dimension(id = 40, name = "label", crate = "qdim_core")]
/// enum Label {}
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Name(&'static str);
/// impl Payload for Name {}
///
/// let name = Singleton::<Name, Label>::new(Name("west"));
/// assert_eq!(name.as_inner(), &Name("west"));
/// ```
pub trait Payload {}

impl<T: Payload> Rescale<T> for T {
    const SCALABLE: bool = false;

    #[inline]
    fn rescale(self, _: Fraction) -> T {
        self
    }

    #[inline]
    fn try_rescale(self, _: Fraction) -> Result<T, ConversionError> {
        Ok(self)
    }
}

impl Payload for bool {}
impl Payload for char {}
impl Payload for &'static str {}

#[cfg(feature = "std")]
impl Payload for std::string::String {}

#[cfg(feature = "std")]
impl<T> Payload for std::vec::Vec<T> {}

/// Converts `value`, stored at scale `From`, into storage `U` at scale `To`.
///
/// Both the coefficient and the choice of path are compile-time constants.
///
/// ```rust
/// use qdim_core::{cast_value, Kilo, Milli, Unity};
///
/// assert_eq!(cast_value::<Kilo, Unity, i64, i64>(3), 3_000);
/// assert_eq!(cast_value::<Unity, Kilo, i64, i64>(3_999), 3);
/// assert_eq!(cast_value::<Milli, Unity, i32, f64>(1_500), 1.5);
/// ```
///
/// Payloads cannot be rescaled:
///
/// ```compile_fail
/// use qdim_core::{cast_value, Kilo, Unity};
/// let _: bool = cast_value::<Kilo, Unity, bool, bool>(true);
/// ```
#[inline]
pub fn cast_value<From, To, T, U>(value: T) -> U
where
    From: Scale,
    To: Scale,
    T: Rescale<U>,
{
    const {
        assert!(
            T::SCALABLE || Transfer::<From, To>::COEF.is_one(),
            "a payload value can only be converted under the identity coefficient"
        )
    };
    value.rescale(Transfer::<From, To>::COEF)
}

/// Checked form of [`cast_value`].
///
/// ```rust
/// use qdim_core::{try_cast_value, ConversionError, Kilo, Unity};
///
/// assert_eq!(try_cast_value::<Kilo, Unity, i16, i16>(3), Ok(3_000));
/// assert_eq!(
///     try_cast_value::<Kilo, Unity, i16, i8>(3),
///     Err(ConversionError::OutOfRange { target: "i8" })
/// );
/// ```
pub fn try_cast_value<From, To, T, U>(value: T) -> Result<U, ConversionError>
where
    From: Scale,
    To: Scale,
    T: Rescale<U>,
{
    const {
        assert!(
            T::SCALABLE || Transfer::<From, To>::COEF.is_one(),
            "a payload value can only be converted under the identity coefficient"
        )
    };
    let coef = Transfer::<From, To>::COEF;
    value.try_rescale(coef).inspect_err(|err| {
        log::debug!(
            "checked rescale by {coef} into `{}` failed: {err}",
            core::any::type_name::<U>()
        );
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Primitive rescaling
// ─────────────────────────────────────────────────────────────────────────────

/// Narrowing from the `f64` intermediate.
trait Narrow: Sized {
    const NAME: &'static str;

    fn narrow(wide: f64) -> Self;

    fn try_narrow(wide: f64) -> Option<Self>;
}

macro_rules! narrow_int {
    ($($t:ty),*) => {
        $(
            impl Narrow for $t {
                const NAME: &'static str = stringify!($t);

                #[inline]
                fn narrow(wide: f64) -> Self {
                    wide as $t
                }

                #[inline]
                fn try_narrow(wide: f64) -> Option<Self> {
                    <$t as FromPrimitive>::from_f64(wide)
                }
            }
        )*
    };
}

narrow_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Narrow for f32 {
    const NAME: &'static str = "f32";

    #[inline]
    fn narrow(wide: f64) -> Self {
        wide as f32
    }

    #[inline]
    fn try_narrow(wide: f64) -> Option<Self> {
        let limit = f32::MAX as f64;
        if wide.is_finite() && !(-limit..=limit).contains(&wide) {
            None
        } else {
            Some(wide as f32)
        }
    }
}

impl Narrow for f64 {
    const NAME: &'static str = "f64";

    #[inline]
    fn narrow(wide: f64) -> Self {
        wide
    }

    #[inline]
    fn try_narrow(wide: f64) -> Option<Self> {
        Some(wide)
    }
}

#[inline]
fn apply_f64(value: f64, coef: Fraction) -> f64 {
    if coef.is_one() {
        value
    } else if coef.den() == 1 {
        value * coef.num() as f64
    } else if coef.num() == 1 {
        value / coef.den() as f64
    } else {
        value * coef.num() as f64 / coef.den() as f64
    }
}

// Transfer coefficients are positive, so an unsigned source widens to `u128` and a signed one
// to `i128`; either intermediate holds every value of its sources.
macro_rules! rescale_int {
    (@from $from:ty, $wide:ty => [$($to:ty),*]) => {
        $(
            impl Rescale<$to> for $from {
                #[inline]
                fn rescale(self, coef: Fraction) -> $to {
                    if coef.is_one() {
                        return self as $to;
                    }
                    let wide = self as $wide;
                    let out = if coef.den() == 1 {
                        wide * coef.num() as $wide
                    } else if coef.num() == 1 {
                        wide / coef.den() as $wide
                    } else {
                        wide * coef.num() as $wide / coef.den() as $wide
                    };
                    out as $to
                }

                fn try_rescale(self, coef: Fraction) -> Result<$to, ConversionError> {
                    let out_of_range = ConversionError::OutOfRange { target: stringify!($to) };
                    if coef.is_one() {
                        return <$to>::try_from(self).map_err(|_| out_of_range);
                    }
                    let overflow = ConversionError::Overflow { num: coef.num(), den: coef.den() };
                    let wide = self as $wide;
                    let out = if coef.num() == 1 {
                        wide / coef.den() as $wide
                    } else {
                        wide.checked_mul(coef.num() as $wide).ok_or(overflow)? / coef.den() as $wide
                    };
                    <$to>::try_from(out).map_err(|_| out_of_range)
                }
            }
        )*
    };
    ($wide:ty: [$($from:ty),*] => $to:tt) => {
        $( rescale_int!(@from $from, $wide => $to); )*
    };
}

macro_rules! rescale_float {
    (@from $from:ty => [$($to:ty),*]) => {
        $(
            impl Rescale<$to> for $from {
                #[inline]
                fn rescale(self, coef: Fraction) -> $to {
                    <$to as Narrow>::narrow(apply_f64(self as f64, coef))
                }

                fn try_rescale(self, coef: Fraction) -> Result<$to, ConversionError> {
                    let wide = self as f64;
                    let out = apply_f64(wide, coef);
                    if wide.is_finite() && !out.is_finite() {
                        return Err(ConversionError::Overflow { num: coef.num(), den: coef.den() });
                    }
                    <$to as Narrow>::try_narrow(out)
                        .ok_or(ConversionError::OutOfRange { target: <$to as Narrow>::NAME })
                }
            }
        )*
    };
    ([$($from:ty),*] => $to:tt) => {
        $( rescale_float!(@from $from => $to); )*
    };
}

rescale_int!(
    i128: [i8, i16, i32, i64, i128, isize]
        => [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize]
);

rescale_int!(
    u128: [u8, u16, u32, u64, u128, usize]
        => [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize]
);

rescale_float!(
    [f32, f64] => [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64]
);

rescale_float!(
    [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize] => [f32, f64]
);

// ─────────────────────────────────────────────────────────────────────────────
// Storage promotion
// ─────────────────────────────────────────────────────────────────────────────

/// The storage type two operands are combined in.
///
/// Every type promotes with itself. Primitive pairs widen losslessly where a lossless common
/// type exists (`i32` with `i64` is `i64`, `u8` with `i16` is `i16`), integers combined with
/// floats go to a float wide enough for the integer where possible. Pairs without a sensible
/// common type (`i64` with `u64`) are deliberately missing.
#[diagnostic::on_unimplemented(
    message = "no common storage type for `{Self}` and `{Rhs}`",
    label = "convert one operand with `cast` first"
)]
pub trait Promote<Rhs> {
    /// The common storage type.
    type Output;
}

impl<T> Promote<T> for T {
    type Output = T;
}

/// The common storage type of `A` and `B`.
pub type Promoted<A, B> = <A as Promote<B>>::Output;

macro_rules! promote {
    ($($a:ty, $b:ty => $out:ty;)*) => {
        $(
            impl Promote<$b> for $a {
                type Output = $out;
            }

            impl Promote<$a> for $b {
                type Output = $out;
            }
        )*
    };
}

promote! {
    i8, i16 => i16;
    i8, i32 => i32;
    i8, i64 => i64;
    i8, i128 => i128;
    i16, i32 => i32;
    i16, i64 => i64;
    i16, i128 => i128;
    i32, i64 => i64;
    i32, i128 => i128;
    i64, i128 => i128;

    u8, u16 => u16;
    u8, u32 => u32;
    u8, u64 => u64;
    u8, u128 => u128;
    u16, u32 => u32;
    u16, u64 => u64;
    u16, u128 => u128;
    u32, u64 => u64;
    u32, u128 => u128;
    u64, u128 => u128;

    u8, i16 => i16;
    u8, i32 => i32;
    u8, i64 => i64;
    u8, i128 => i128;
    u16, i32 => i32;
    u16, i64 => i64;
    u16, i128 => i128;
    u32, i64 => i64;
    u32, i128 => i128;
    u64, i128 => i128;

    f32, f64 => f64;

    i8, f32 => f32;
    i16, f32 => f32;
    u8, f32 => f32;
    u16, f32 => f32;
    i32, f32 => f64;
    i64, f32 => f64;
    i128, f32 => f64;
    u32, f32 => f64;
    u64, f32 => f64;
    u128, f32 => f64;

    i8, f64 => f64;
    i16, f64 => f64;
    i32, f64 => f64;
    i64, f64 => f64;
    i128, f64 => f64;
    u8, f64 => f64;
    u16, f64 => f64;
    u32, f64 => f64;
    u64, f64 => f64;
    u128, f64 => f64;
}

// ─────────────────────────────────────────────────────────────────────────────
// Scalars
// ─────────────────────────────────────────────────────────────────────────────

/// Bare numbers that may multiply, divide or take the remainder of a quantity.
pub trait Scalar: Copy + 'static {}

macro_rules! scalar {
    ($($t:ty),*) => {
        $( impl Scalar for $t {} )*
    };
}

scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{Atto, Centi, Deca, Exa, Kilo, Milli, Ratio, Unity};
    use approx::assert_relative_eq;

    type Inch = Ratio<10_000, 393_694>;
    type Foot = Ratio<120_000, 393_694>;
    type Minute = Ratio<60>;
    type Hour = Ratio<3_600>;

    trait Same<T> {}
    impl<T> Same<T> for T {}
    fn assert_same<A: Same<B>, B>() {}

    #[test]
    fn identity_is_a_plain_cast() {
        assert_eq!(cast_value::<Kilo, Kilo, i64, i32>(7), 7);
        assert_eq!(cast_value::<Unity, Unity, i32, i64>(-7), -7);
    }

    #[test]
    fn integral_coefficient_multiplies() {
        assert_eq!(cast_value::<Kilo, Unity, i64, i64>(3), 3_000);
        assert_eq!(cast_value::<Foot, Inch, i64, i64>(2), 24);
        assert_eq!(cast_value::<Hour, Minute, i32, i32>(2), 120);
    }

    #[test]
    fn unit_numerator_divides_and_truncates() {
        assert_eq!(cast_value::<Unity, Kilo, i64, i64>(3_500), 3);
        assert_eq!(cast_value::<Unity, Kilo, i64, i64>(-1_500), -1);
        assert_eq!(cast_value::<Inch, Foot, i64, i64>(30), 2);
        assert_eq!(cast_value::<Minute, Hour, i32, i32>(90), 1);
    }

    #[test]
    fn unsigned_values_above_i128_max_keep_their_magnitude() {
        let big = u128::MAX - 7;
        assert_eq!(
            cast_value::<Unity, Kilo, u128, u128>(u128::MAX),
            340_282_366_920_938_463_463_374_607_431_768_211
        );
        assert_eq!(cast_value::<Ratio<2>, Ratio<4>, u128, u128>(big), big / 2);
        assert_eq!(cast_value::<Kilo, Unity, u64, u128>(u64::MAX), u64::MAX as u128 * 1_000);
    }

    #[test]
    fn general_coefficient_multiplies_then_divides() {
        assert_eq!(cast_value::<Ratio<3>, Ratio<2>, i32, i32>(5), 7);
        assert_eq!(cast_value::<Centi, Ratio<1, 40>, i32, i32>(3), 1);
    }

    #[test]
    fn floats_widen_to_f64() {
        assert_relative_eq!(cast_value::<Milli, Unity, f64, f64>(1_500.0), 1.5);
        assert_relative_eq!(cast_value::<Unity, Kilo, i32, f64>(1_500), 1.5);
        assert_relative_eq!(cast_value::<Inch, Foot, f32, f32>(6.0), 0.5);
        assert_eq!(cast_value::<Milli, Unity, f64, i32>(2_999.0), 2);
    }

    #[test]
    fn payloads_pass_through() {
        let moved: String = cast_value::<Unity, Unity, String, String>(String::from("north"));
        assert_eq!(moved, "north");
        assert!(!<String as Rescale<String>>::SCALABLE);
        assert!(<i32 as Rescale<i32>>::SCALABLE);
    }

    #[test]
    fn checked_conversions() {
        assert_eq!(try_cast_value::<Kilo, Unity, i64, i64>(5), Ok(5_000));
        assert_eq!(
            try_cast_value::<Kilo, Unity, i8, i8>(1),
            Err(ConversionError::OutOfRange { target: "i8" })
        );
        assert_eq!(
            try_cast_value::<Exa, Atto, i128, i128>(i128::MAX),
            Err(ConversionError::Overflow {
                num: 1_000_000_000_000_000_000_000_000_000_000_000_000,
                den: 1
            })
        );
        assert_eq!(
            try_cast_value::<Unity, Unity, i32, u8>(-1),
            Err(ConversionError::OutOfRange { target: "u8" })
        );
        assert_eq!(
            try_cast_value::<Unity, Unity, f64, u8>(300.0),
            Err(ConversionError::OutOfRange { target: "u8" })
        );
        assert_eq!(
            try_cast_value::<Deca, Unity, f64, f64>(f64::MAX),
            Err(ConversionError::Overflow { num: 10, den: 1 })
        );
        assert_eq!(
            try_cast_value::<Unity, Kilo, u128, u128>(u128::MAX),
            Ok(u128::MAX / 1_000)
        );
        assert_eq!(
            try_cast_value::<Unity, Kilo, u128, i128>(u128::MAX),
            Ok(340_282_366_920_938_463_463_374_607_431_768_211)
        );
        assert_eq!(
            try_cast_value::<Kilo, Unity, u128, u128>(u128::MAX / 1_000 + 1),
            Err(ConversionError::Overflow { num: 1_000, den: 1 })
        );
        assert_eq!(
            try_cast_value::<Unity, Unity, u128, u128>(u128::MAX),
            Ok(u128::MAX)
        );
    }

    #[test]
    fn promotion_table() {
        assert_same::<Promoted<i32, i32>, i32>();
        assert_same::<Promoted<i32, i64>, i64>();
        assert_same::<Promoted<i64, i32>, i64>();
        assert_same::<Promoted<u8, i16>, i16>();
        assert_same::<Promoted<u32, u64>, u64>();
        assert_same::<Promoted<i16, f32>, f32>();
        assert_same::<Promoted<i32, f32>, f64>();
        assert_same::<Promoted<f32, f64>, f64>();
        assert_same::<Promoted<String, String>, String>();
    }
}
