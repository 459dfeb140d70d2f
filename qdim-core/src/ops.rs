//! Operators between quantities, and between quantities and bare scalars.
//!
//! | Operator | Dimension | Scale | Storage |
//! |---|---|---|---|
//! | `a + b`, `a - b`, `a % b` | same dimension required, keeps `a`'s | common scale | promoted |
//! | `a * b` | trimmed product | product | promoted |
//! | `a / b` | trimmed quotient | quotient | promoted |
//! | `a * x`, `x * a`, `a / x`, `a % x` | unchanged | unchanged | `a`'s |
//! | `a.scaled_by(x)`, `a.divided_by(x)` | unchanged | unchanged | promoted |
//! | `x / a` | inverted | reciprocal | `a`'s |
//! | `==`, `<`, … | same dimension required | compared at the common scale | promoted |
//!
//! A product or quotient whose dimension trims away entirely is a bare storage value, already
//! rescaled to the base scale; such a quotient divides its operands at their common scale.
//! Binary operators on two quantities require the same capability policy on both sides.

use crate::capability::{Arithmetic, Ordered};
use crate::dimension::{Collapse, DimDiv, DimMul, DimPair, Inverted, Quotient, SameDimension};
use crate::quantity::Quantity;
use crate::scale::{CommonScale, Scale, ScaleMul, ScaleRecip, Unity};
use crate::storage::{cast_value, Promote, Promoted, Rescale, Scalar};
use core::cmp::Ordering;
use core::ops::{Add, Div, Mul, Rem, Sub};

/// Brings two stored values to their common scale and storage type.
#[inline]
fn at_common_scale<T1, S1, T2, S2>(lhs: T1, rhs: T2) -> (Promoted<T1, T2>, Promoted<T1, T2>)
where
    T1: Promote<T2> + Rescale<Promoted<T1, T2>>,
    T2: Rescale<Promoted<T1, T2>>,
    S1: Scale,
    S2: Scale,
{
    (
        cast_value::<S1, CommonScale<S1, S2>, T1, _>(lhs),
        cast_value::<S2, CommonScale<S1, S2>, T2, _>(rhs),
    )
}

/// Brings two stored values to their common storage type, leaving scales alone.
#[inline]
fn promoted<T1, T2>(lhs: T1, rhs: T2) -> (Promoted<T1, T2>, Promoted<T1, T2>)
where
    T1: Promote<T2> + Rescale<Promoted<T1, T2>>,
    T2: Rescale<Promoted<T1, T2>>,
{
    (
        cast_value::<Unity, Unity, T1, _>(lhs),
        cast_value::<Unity, Unity, T2, _>(rhs),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Same-dimension operators
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! same_dimension_op {
    ($($trait:ident, $method:ident, $op:tt;)*) => {
        $(
            impl<T1, S1, D1, T2, S2, D2, C> $trait<Quantity<T2, S2, D2, C>> for Quantity<T1, S1, D1, C>
            where
                T1: Promote<T2> + Rescale<Promoted<T1, T2>>,
                T2: Rescale<Promoted<T1, T2>>,
                Promoted<T1, T2>: $trait<Output = Promoted<T1, T2>>,
                S1: Scale,
                S2: Scale,
                D1: SameDimension<D2>,
                D2: DimPair,
                C: Arithmetic,
            {
                type Output = Quantity<Promoted<T1, T2>, CommonScale<S1, S2>, D1, C>;

                #[inline]
                fn $method(self, rhs: Quantity<T2, S2, D2, C>) -> Self::Output {
                    let (a, b) = at_common_scale::<T1, S1, T2, S2>(self.into_inner(), rhs.into_inner());
                    Quantity::new(a $op b)
                }
            }
        )*
    };
}

same_dimension_op! {
    Add, add, +;
    Sub, sub, -;
    Rem, rem, %;
}

// ─────────────────────────────────────────────────────────────────────────────
// Products and quotients
// ─────────────────────────────────────────────────────────────────────────────

impl<T1, S1, D1, T2, S2, D2, C> Mul<Quantity<T2, S2, D2, C>> for Quantity<T1, S1, D1, C>
where
    T1: Promote<T2> + Rescale<Promoted<T1, T2>>,
    T2: Rescale<Promoted<T1, T2>>,
    Promoted<T1, T2>: Mul<Output = Promoted<T1, T2>>,
    S1: Scale,
    S2: Scale,
    D1: DimMul<D2>,
    D2: DimPair,
    <D1 as DimMul<D2>>::Output: Collapse<Promoted<T1, T2>, ScaleMul<S1, S2>, C>,
    C: Arithmetic,
{
    type Output =
        <<D1 as DimMul<D2>>::Output as Collapse<Promoted<T1, T2>, ScaleMul<S1, S2>, C>>::Output;

    #[inline]
    fn mul(self, rhs: Quantity<T2, S2, D2, C>) -> Self::Output {
        let (a, b) = promoted(self.into_inner(), rhs.into_inner());
        <<D1 as DimMul<D2>>::Output as Collapse<Promoted<T1, T2>, ScaleMul<S1, S2>, C>>::collapse(
            a * b,
        )
    }
}

impl<T1, S1, D1, T2, S2, D2, C> Div<Quantity<T2, S2, D2, C>> for Quantity<T1, S1, D1, C>
where
    T1: Promote<T2> + Rescale<Promoted<T1, T2>>,
    T2: Rescale<Promoted<T1, T2>>,
    S1: Scale,
    S2: Scale,
    D1: DimDiv<D2>,
    D2: DimPair,
    <D1 as DimDiv<D2>>::Output: Quotient<Promoted<T1, T2>, S1, S2, C>,
    C: Arithmetic,
{
    type Output = <<D1 as DimDiv<D2>>::Output as Quotient<Promoted<T1, T2>, S1, S2, C>>::Output;

    #[inline]
    fn div(self, rhs: Quantity<T2, S2, D2, C>) -> Self::Output {
        let (a, b) = promoted(self.into_inner(), rhs.into_inner());
        <<D1 as DimDiv<D2>>::Output as Quotient<Promoted<T1, T2>, S1, S2, C>>::quotient(a, b)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scalar operators
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! scalar_rhs_op {
    ($($trait:ident, $method:ident, $op:tt;)*) => {
        $(
            impl<T, S, D, C> $trait<T> for Quantity<T, S, D, C>
            where
                T: Scalar + $trait<Output = T>,
                C: Arithmetic,
            {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: T) -> Self {
                    Self::new(self.into_inner() $op rhs)
                }
            }
        )*
    };
}

scalar_rhs_op! {
    Mul, mul, *;
    Div, div, /;
    Rem, rem, %;
}

macro_rules! scalar_lhs_op {
    ($($t:ty),*) => {
        $(
            impl<S, D, C: Arithmetic> Mul<Quantity<$t, S, D, C>> for $t {
                type Output = Quantity<$t, S, D, C>;

                #[inline]
                fn mul(self, rhs: Quantity<$t, S, D, C>) -> Self::Output {
                    Quantity::new(self * rhs.into_inner())
                }
            }

            impl<S: Scale, D: DimPair, C: Arithmetic> Div<Quantity<$t, S, D, C>> for $t {
                type Output = Quantity<$t, ScaleRecip<S>, Inverted<D>, C>;

                #[inline]
                fn div(self, rhs: Quantity<$t, S, D, C>) -> Self::Output {
                    Quantity::new(self / rhs.into_inner())
                }
            }
        )*
    };
}

scalar_lhs_op!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Scalars of a different storage type.
///
/// The operators above take a scalar of the quantity's own storage type, which is what lets an
/// untyped literal such as `Meters::new(4) * 2` infer. These methods accept any scalar and work
/// in the promoted storage type instead:
///
/// ```rust
/// use qdim_core::units::Meters;
///
/// let stretched = Meters::new(4).scaled_by(2.5_f64);
/// assert_eq!(stretched.value(), 10.0);
///
/// let halved = Meters::new(9).divided_by(2_i32);
/// assert_eq!(halved.value(), 4_i64);
/// ```
impl<T, S, D, C: Arithmetic> Quantity<T, S, D, C> {
    /// `self * factor` in `Promoted<T, U>`.
    #[inline]
    pub fn scaled_by<U>(self, factor: U) -> Quantity<Promoted<T, U>, S, D, C>
    where
        T: Promote<U> + Rescale<Promoted<T, U>>,
        U: Scalar + Rescale<Promoted<T, U>>,
        Promoted<T, U>: Mul<Output = Promoted<T, U>>,
    {
        let (a, b) = promoted(self.into_inner(), factor);
        Quantity::new(a * b)
    }

    /// `self / divisor` in `Promoted<T, U>`.
    #[inline]
    pub fn divided_by<U>(self, divisor: U) -> Quantity<Promoted<T, U>, S, D, C>
    where
        T: Promote<U> + Rescale<Promoted<T, U>>,
        U: Scalar + Rescale<Promoted<T, U>>,
        Promoted<T, U>: Div<Output = Promoted<T, U>>,
    {
        let (a, b) = promoted(self.into_inner(), divisor);
        Quantity::new(a / b)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparisons
// ─────────────────────────────────────────────────────────────────────────────

impl<T1, S1, D1, T2, S2, D2, C> PartialEq<Quantity<T2, S2, D2, C>> for Quantity<T1, S1, D1, C>
where
    T1: Promote<T2> + Rescale<Promoted<T1, T2>> + Clone,
    T2: Rescale<Promoted<T1, T2>> + Clone,
    Promoted<T1, T2>: PartialEq,
    S1: Scale,
    S2: Scale,
    D1: SameDimension<D2>,
    D2: DimPair,
{
    #[inline]
    fn eq(&self, other: &Quantity<T2, S2, D2, C>) -> bool {
        let (a, b) =
            at_common_scale::<T1, S1, T2, S2>(self.as_inner().clone(), other.as_inner().clone());
        a == b
    }
}

impl<T, S, D, C> Eq for Quantity<T, S, D, C>
where
    T: Eq,
    Self: PartialEq,
{
}

impl<T1, S1, D1, T2, S2, D2, C> PartialOrd<Quantity<T2, S2, D2, C>> for Quantity<T1, S1, D1, C>
where
    T1: Promote<T2> + Rescale<Promoted<T1, T2>> + Clone,
    T2: Rescale<Promoted<T1, T2>> + Clone,
    Promoted<T1, T2>: PartialOrd,
    S1: Scale,
    S2: Scale,
    D1: SameDimension<D2>,
    D2: DimPair,
    C: Ordered,
{
    #[inline]
    fn partial_cmp(&self, other: &Quantity<T2, S2, D2, C>) -> Option<Ordering> {
        let (a, b) =
            at_common_scale::<T1, S1, T2, S2>(self.as_inner().clone(), other.as_inner().clone());
        a.partial_cmp(&b)
    }
}

/// Orders by stored value; within one type the scale is fixed, so this agrees with
/// [`PartialOrd`].
impl<T, S, D, C> Ord for Quantity<T, S, D, C>
where
    T: Ord,
    C: Ordered,
    Self: PartialOrd + Eq,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_inner().cmp(other.as_inner())
    }
}
