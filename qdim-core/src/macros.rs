//! Macros for spelling dimension lists.

/// Builds a tag list type: `tags![Distance, Duration]` is
/// `Cons<Distance, Cons<Duration, Nil>>`.
///
/// ```rust
/// use qdim_core::{tags, Cons, DimSet, Nil};
/// use qdim_core::units::{Distance, Duration};
///
/// let _: core::marker::PhantomData<tags![Distance, Duration]> =
///     core::marker::PhantomData::<Cons<Distance, Cons<Duration, Nil>>>;
/// assert_eq!(<tags![Distance, Distance, Duration] as DimSet>::LEN, 3);
/// ```
#[macro_export]
macro_rules! tags {
    () => {
        $crate::Nil
    };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::tags![$($tail),*]>
    };
}

/// Builds a dimension pair type: numerator tags, then `;`, then denominator tags.
///
/// `dims!(Distance; Duration, Duration)` is an acceleration, `dims!(Distance, Distance)` an
/// area, `dims!()` the dimensionless pair.
///
/// ```rust
/// use qdim_core::{dims, Quantity, Unity};
/// use qdim_core::units::{Distance, Duration, Meters, Seconds};
///
/// type Acceleration = Quantity<i64, Unity, dims!(Distance; Duration, Duration)>;
///
/// let a: Acceleration = (Meters::new(18) / Seconds::new(3) / Seconds::new(2)).cast();
/// assert_eq!(a.value(), 3);
/// ```
#[macro_export]
macro_rules! dims {
    ($($num:ty),* ; $($den:ty),* $(,)?) => {
        $crate::Dims<$crate::tags![$($num),*], $crate::tags![$($den),*]>
    };
    ($($num:ty),* $(,)?) => {
        $crate::Dims<$crate::tags![$($num),*], $crate::Nil>
    };
}
