//! Dimension tags and the type-level algebra over tag lists.
//!
//! A quantity's dimensionality is a pair of tag lists, `Dims<Num, Den>`, read as
//! `Num / Den`. Lists are built from [`Nil`] and [`Cons`] (see [`tags!`](crate::tags)) and may
//! repeat tags: `tags![Distance, Distance]` is an area. Everything in this module is evaluated
//! by trait resolution; nothing here exists at runtime.
//!
//! Tags are matched by identity only. Identity is the tag's [`Dimension::Id`], a `typenum`
//! unsigned compared with [`IsEqual`], so two different tag types never cancel each other.

use crate::quantity::Quantity;
use crate::scale::{CommonScale, Scale, ScaleDiv, Unity};
use crate::storage::{cast_value, Rescale};
use core::fmt::{self, Display, Formatter};
use core::marker::PhantomData;
use core::ops::Div;
use typenum::{Bit, IsEqual, Unsigned, B0, B1};

/// Marker trait for **dimension tags** (distance, duration, a user-defined "horizontal" …).
///
/// Model each tag as an empty enum and derive the impl, giving it a stable numeric identity:
///
/// ```rust
/// use qdim_core::Dimension;
///
/// #[derive(Dimension)]
/// #[dimension(id = 42, name = "horizontal", crate = "qdim_core")]
/// pub enum Horizontal {}
///
/// assert_eq!(<Horizontal as Dimension>::NAME, "horizontal");
/// ```
///
/// Ids `0..=15` are reserved for the tags shipped with this crate. Two tags with the same id
/// are treated as the same dimension.
pub trait Dimension: 'static {
    /// Type-level identity of the tag.
    type Id: Unsigned;
    /// Human-readable name, used by `Debug` output and diagnostics.
    const NAME: &'static str;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tag lists
// ─────────────────────────────────────────────────────────────────────────────

/// The empty tag list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Nil;

/// A tag list with head `H` and tail `T`.
#[derive(Debug)]
pub struct Cons<H, T>(PhantomData<(H, T)>);

/// An ordered list of dimension tags: one side of a dimension pair.
pub trait DimSet: 'static {
    /// Number of tags, counting repeats.
    const LEN: usize;
    /// `B1` for [`Nil`], `B0` otherwise.
    type Empty: Bit;

    /// Writes the tag names joined by `*`.
    #[doc(hidden)]
    fn write_names(f: &mut Formatter<'_>, first: bool) -> fmt::Result;
}

impl DimSet for Nil {
    const LEN: usize = 0;
    type Empty = B1;

    fn write_names(_: &mut Formatter<'_>, _: bool) -> fmt::Result {
        Ok(())
    }
}

impl<H: Dimension, T: DimSet> DimSet for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;
    type Empty = B0;

    fn write_names(f: &mut Formatter<'_>, first: bool) -> fmt::Result {
        if !first {
            f.write_str("*")?;
        }
        f.write_str(H::NAME)?;
        T::write_names(f, false)
    }
}

/// Concatenation of two tag lists, preserving order. No cancellation happens here.
pub trait Join<Rhs>: DimSet {
    /// `Self` followed by `Rhs`.
    type Output: DimSet;
}

impl<Rhs: DimSet> Join<Rhs> for Nil {
    type Output = Rhs;
}

impl<H: Dimension, T: Join<Rhs>, Rhs: DimSet> Join<Rhs> for Cons<H, T> {
    type Output = Cons<H, Joined<T, Rhs>>;
}

/// `A` followed by `B`.
pub type Joined<A, B> = <A as Join<B>>::Output;

/// Removal of the first occurrence of tag `X`; the list is unchanged when `X` is absent.
pub trait RemoveOne<X>: DimSet {
    /// The list without its first `X`.
    type Output: DimSet;
}

impl<X: Dimension> RemoveOne<X> for Nil {
    type Output = Nil;
}

impl<X, H, T> RemoveOne<X> for Cons<H, T>
where
    X: Dimension,
    H: Dimension,
    T: DimSet,
    X::Id: IsEqual<H::Id>,
    Cons<H, T>: RemoveIf<X, <X::Id as IsEqual<H::Id>>::Output>,
{
    type Output = <Cons<H, T> as RemoveIf<X, <X::Id as IsEqual<H::Id>>::Output>>::Output;
}

/// Dispatch step of [`RemoveOne`]: `Hit` is `B1` when the head matches.
#[doc(hidden)]
pub trait RemoveIf<X, Hit>: DimSet {
    /// The list after the step.
    type Output: DimSet;
}

impl<X, H: Dimension, T: DimSet> RemoveIf<X, B1> for Cons<H, T> {
    type Output = T;
}

impl<X, H: Dimension, T: RemoveOne<X>> RemoveIf<X, B0> for Cons<H, T> {
    type Output = Cons<H, Removed<T, X>>;
}

/// `A` without its first `X`.
pub type Removed<A, X> = <A as RemoveOne<X>>::Output;

/// For each tag of `Rhs`, in order, removes one matching occurrence from `Self`.
pub trait RemoveAll<Rhs>: DimSet {
    /// `Self` with `Rhs` subtracted as a multiset.
    type Output: DimSet;
}

impl<A: DimSet> RemoveAll<Nil> for A {
    type Output = A;
}

impl<A, H, T> RemoveAll<Cons<H, T>> for A
where
    A: RemoveOne<H>,
    Removed<A, H>: RemoveAll<T>,
{
    type Output = RemovedAll<Removed<A, H>, T>;
}

/// `A` with every tag of `B` removed once.
pub type RemovedAll<A, B> = <A as RemoveAll<B>>::Output;

// ─────────────────────────────────────────────────────────────────────────────
// Dimension pairs
// ─────────────────────────────────────────────────────────────────────────────

/// A numerator / denominator pair of tag lists.
///
/// Build one with [`dims!`](crate::dims): `dims!(Distance; Duration, Duration)` is an
/// acceleration.
#[derive(Debug)]
pub struct Dims<N, D>(PhantomData<(N, D)>);

/// Trait implemented by every [`Dims`] pair.
pub trait DimPair: 'static {
    /// Numerator tags.
    type Num: DimSet;
    /// Denominator tags.
    type Den: DimSet;
}

impl<N: DimSet, D: DimSet> DimPair for Dims<N, D> {
    type Num = N;
    type Den = D;
}

/// The pair with no tags at all.
pub type Dimensionless = Dims<Nil, Nil>;

/// The pair made of a single numerator tag.
pub type Base<Tag> = Dims<Cons<Tag, Nil>, Nil>;

/// `Den / Num` of `P`.
pub type Inverted<P> = Dims<<P as DimPair>::Den, <P as DimPair>::Num>;

/// Cancellation of tags shared by both sides.
///
/// `Trim(N, D) = (RemoveAll(N, D), RemoveAll(D, N))`, one occurrence per match, so
/// `distance*distance / distance` trims to `distance / 1`.
pub trait Trim: DimPair {
    /// The reduced pair.
    type Output: DimPair;
}

impl<N, D> Trim for Dims<N, D>
where
    N: RemoveAll<D>,
    D: RemoveAll<N>,
{
    type Output = Dims<RemovedAll<N, D>, RemovedAll<D, N>>;
}

/// The reduced form of `P`.
pub type Trimmed<P> = <P as Trim>::Output;

/// Whether both sides of a pair are empty, without trimming.
pub trait IsEmpty: DimPair {
    /// `B1` when empty.
    type Output: Bit;
    /// `Output` as a `bool`.
    const VALUE: bool = <Self::Output as Bit>::BOOL;
}

impl IsEmpty for Dims<Nil, Nil> {
    type Output = B1;
}

impl<H: Dimension, T: DimSet, D: DimSet> IsEmpty for Dims<Cons<H, T>, D> {
    type Output = B0;
}

impl<H: Dimension, T: DimSet> IsEmpty for Dims<Nil, Cons<H, T>> {
    type Output = B0;
}

/// Whether a pair is dimensionless once trimmed (`distance / distance` is, `distance` is not).
pub trait IsDegenerate: DimPair {
    /// `B1` when degenerate.
    type Output: Bit;
    /// `Output` as a `bool`.
    const VALUE: bool = <Self::Output as Bit>::BOOL;
}

impl<P> IsDegenerate for P
where
    P: Trim,
    Trimmed<P>: IsEmpty,
{
    type Output = <Trimmed<P> as IsEmpty>::Output;
}

/// Runtime view of [`IsDegenerate`].
///
/// ```rust
/// use qdim_core::{dims, is_degenerate};
/// use qdim_core::units::{Distance, Duration};
///
/// assert!(is_degenerate::<dims!(Distance, Duration; Duration, Distance)>());
/// assert!(!is_degenerate::<dims!(Distance; Duration)>());
/// ```
pub const fn is_degenerate<P: IsDegenerate>() -> bool {
    P::VALUE
}

// ─────────────────────────────────────────────────────────────────────────────
// Pair arithmetic
// ─────────────────────────────────────────────────────────────────────────────

/// Dimension of a product: `Trim(N1 ++ N2, D1 ++ D2)`.
pub trait DimMul<Rhs>: DimPair {
    /// The reduced product.
    type Output: DimPair;
}

impl<A, B> DimMul<B> for A
where
    A: DimPair,
    B: DimPair,
    A::Num: Join<B::Num>,
    A::Den: Join<B::Den>,
    Dims<Joined<A::Num, B::Num>, Joined<A::Den, B::Den>>: Trim,
{
    type Output = Trimmed<Dims<Joined<A::Num, B::Num>, Joined<A::Den, B::Den>>>;
}

/// Dimension of a quotient: `Trim(N1 ++ D2, D1 ++ N2)`.
pub trait DimDiv<Rhs>: DimPair {
    /// The reduced quotient.
    type Output: DimPair;
}

impl<A, B> DimDiv<B> for A
where
    A: DimPair,
    B: DimPair,
    A::Num: Join<B::Den>,
    A::Den: Join<B::Num>,
    Dims<Joined<A::Num, B::Den>, Joined<A::Den, B::Num>>: Trim,
{
    type Output = Trimmed<Dims<Joined<A::Num, B::Den>, Joined<A::Den, B::Num>>>;
}

/// Dimension compatibility: `Self / Rhs` trims down to nothing.
///
/// Addition, subtraction, remainder, comparison and conversion require it. Neither the scale
/// nor the storage type takes part in the check.
#[diagnostic::on_unimplemented(
    message = "dimension `{Self}` is not compatible with `{Rhs}`",
    label = "the dimension tags of the two operands do not cancel out",
    note = "only quantities of the same dimension can be added, compared or converted"
)]
pub trait SameDimension<Rhs>: DimPair {}

impl<A, B> SameDimension<B> for A
where
    A: DimPair,
    B: DimPair,
    A::Num: Join<B::Den>,
    B::Num: Join<A::Den>,
    Dims<Joined<A::Num, B::Den>, Joined<B::Num, A::Den>>: Trim<Output = Dimensionless>,
{
}

// ─────────────────────────────────────────────────────────────────────────────
// Collapse of dimensionless results
// ─────────────────────────────────────────────────────────────────────────────

/// Result-type selection for `*`.
///
/// A trimmed pair with no tags left yields the bare storage value, rescaled from `S` to the
/// base scale; any other pair wraps the value in a [`Quantity`] of that dimension at `S`.
pub trait Collapse<T, S, C>: DimPair {
    /// `T` or `Quantity<T, S, Self, C>`.
    type Output;
    /// Wraps (or unwraps) a value computed at scale `S`.
    fn collapse(value: T) -> Self::Output;
}

impl<T: Rescale<T>, S: Scale, C> Collapse<T, S, C> for Dims<Nil, Nil> {
    type Output = T;

    #[inline]
    fn collapse(value: T) -> T {
        cast_value::<S, Unity, T, T>(value)
    }
}

impl<T, S: Scale, C, H: Dimension, Tl: DimSet, D: DimSet> Collapse<T, S, C> for Dims<Cons<H, Tl>, D> {
    type Output = Quantity<T, S, Self, C>;

    #[inline]
    fn collapse(value: T) -> Self::Output {
        Quantity::new(value)
    }
}

impl<T, S: Scale, C, H: Dimension, Tl: DimSet> Collapse<T, S, C> for Dims<Nil, Cons<H, Tl>> {
    type Output = Quantity<T, S, Self, C>;

    #[inline]
    fn collapse(value: T) -> Self::Output {
        Quantity::new(value)
    }
}

/// Result-type selection for `/`.
///
/// Same shapes as [`Collapse`] with the scale fixed to `S1 / S2`. A quotient with no tags left
/// is taken at the common scale of both operands, so an integer ratio truncates only once, after
/// the operands are comparable: `1 km / 3 m` is `1000 / 3`, not `(1 / 3) * 1000`.
pub trait Quotient<T, S1, S2, C>: DimPair {
    /// `T` or `Quantity<T, S1 / S2, Self, C>`.
    type Output;
    /// Divides `num` (stored at `S1`) by `den` (stored at `S2`).
    fn quotient(num: T, den: T) -> Self::Output;
}

impl<T, S1: Scale, S2: Scale, C> Quotient<T, S1, S2, C> for Dims<Nil, Nil>
where
    T: Rescale<T> + Div<Output = T>,
{
    type Output = T;

    #[inline]
    fn quotient(num: T, den: T) -> T {
        let num = cast_value::<S1, CommonScale<S1, S2>, T, T>(num);
        let den = cast_value::<S2, CommonScale<S1, S2>, T, T>(den);
        num / den
    }
}

impl<T, S1: Scale, S2: Scale, C, H: Dimension, Tl: DimSet, D: DimSet> Quotient<T, S1, S2, C>
    for Dims<Cons<H, Tl>, D>
where
    T: Div<Output = T>,
{
    type Output = Quantity<T, ScaleDiv<S1, S2>, Self, C>;

    #[inline]
    fn quotient(num: T, den: T) -> Self::Output {
        Quantity::new(num / den)
    }
}

impl<T, S1: Scale, S2: Scale, C, H: Dimension, Tl: DimSet> Quotient<T, S1, S2, C> for Dims<Nil, Cons<H, Tl>>
where
    T: Div<Output = T>,
{
    type Output = Quantity<T, ScaleDiv<S1, S2>, Self, C>;

    #[inline]
    fn quotient(num: T, den: T) -> Self::Output {
        Quantity::new(num / den)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Printing
// ─────────────────────────────────────────────────────────────────────────────

/// Displays a pair as `distance*distance/duration`, or `1` when dimensionless.
pub struct Signature<P>(PhantomData<P>);

impl<P: DimPair> Signature<P> {
    /// Creates the display adapter.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<P: DimPair> Default for Signature<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: DimPair> Display for Signature<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if P::Num::LEN == 0 {
            f.write_str("1")?;
        } else {
            P::Num::write_names(f, true)?;
        }
        match P::Den::LEN {
            0 => Ok(()),
            1 => {
                f.write_str("/")?;
                P::Den::write_names(f, true)
            }
            _ => {
                f.write_str("/(")?;
                P::Den::write_names(f, true)?;
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dims, tags};
    use qdim_derive::Dimension;

    #[derive(Dimension)]
    #[dimension(id = 100, name = "a")]
    enum A {}

    #[derive(Dimension)]
    #[dimension(id = 101, name = "b")]
    enum B {}

    #[derive(Dimension)]
    #[dimension(id = 102, name = "c")]
    enum C {}

    // Hand-written impl, same shape as the derive output.
    enum D {}
    impl Dimension for D {
        type Id = typenum::U103;
        const NAME: &'static str = "d";
    }

    trait Same<T> {}
    impl<T> Same<T> for T {}

    fn assert_same<X: Same<Y>, Y>() {}

    fn assert_compatible<X: SameDimension<Y>, Y>() {}

    // ─────────────────────────────────────────────────────────────────────────────
    // List operations
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn join_concatenates_in_order() {
        assert_same::<Joined<tags![A], tags![B, C]>, tags![A, B, C]>();
        assert_same::<Joined<Nil, tags![B]>, tags![B]>();
        assert_same::<Joined<tags![A, A], Nil>, tags![A, A]>();
    }

    #[test]
    fn remove_one_drops_only_the_first_match() {
        assert_same::<Removed<tags![A, B, A], A>, tags![B, A]>();
        assert_same::<Removed<tags![B, A, C], A>, tags![B, C]>();
        assert_same::<Removed<tags![B, C], A>, tags![B, C]>();
        assert_same::<Removed<Nil, A>, Nil>();
        assert_same::<Removed<tags![D, A], D>, tags![A]>();
    }

    #[test]
    fn remove_all_matches_multiplicities() {
        assert_same::<RemovedAll<tags![A, A, B], tags![A, C]>, tags![A, B]>();
        assert_same::<RemovedAll<tags![A, B], tags![B, A]>, Nil>();
        assert_same::<RemovedAll<tags![A], tags![A, A]>, Nil>();
        assert_same::<RemovedAll<Nil, tags![A]>, Nil>();
    }

    #[test]
    fn list_lengths() {
        assert_eq!(<tags![A, A, B] as DimSet>::LEN, 3);
        assert_eq!(<Nil as DimSet>::LEN, 0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Trim and degeneracy
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn trim_cancels_shared_tags_once() {
        assert_same::<Trimmed<dims!(A, A, B; A, C)>, Dims<tags![A, B], tags![C]>>();
        assert_same::<Trimmed<dims!(A; A)>, Dimensionless>();
        assert_same::<Trimmed<dims!(A, B; C)>, dims!(A, B; C)>();
        assert_same::<Trimmed<dims!(; A, A)>, Dims<Nil, tags![A, A]>>();
    }

    #[test]
    fn trim_is_idempotent() {
        assert_same::<Trimmed<Trimmed<dims!(A, A, B; A, C)>>, Trimmed<dims!(A, A, B; A, C)>>();
        assert_same::<Trimmed<Trimmed<dims!(A, B, C; C, B, D)>>, Trimmed<dims!(A, B, C; C, B, D)>>();
        assert_same::<Trimmed<Trimmed<Dimensionless>>, Dimensionless>();
    }

    #[test]
    fn emptiness_and_degeneracy() {
        assert!(<Dimensionless as IsEmpty>::VALUE);
        assert!(!<dims!(A; A) as IsEmpty>::VALUE);
        assert!(is_degenerate::<dims!(A; A)>());
        assert!(is_degenerate::<dims!(A, B; B, A)>());
        assert!(is_degenerate::<Dimensionless>());
        assert!(!is_degenerate::<dims!(A; B)>());
        assert!(!is_degenerate::<dims!(; A)>());
        assert!(!is_degenerate::<dims!(A, A; A)>());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Pair arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn product_and_quotient_dimensions() {
        assert_same::<<dims!(A; B) as DimMul<Base<B>>>::Output, Base<A>>();
        assert_same::<<Base<A> as DimMul<Base<A>>>::Output, dims!(A, A)>();
        assert_same::<<Base<A> as DimDiv<Base<A>>>::Output, Dimensionless>();
        assert_same::<<dims!(A, A) as DimDiv<Base<A>>>::Output, Base<A>>();
        assert_same::<<Base<A> as DimDiv<Base<B>>>::Output, dims!(A; B)>();
        assert_same::<<Base<A> as DimMul<dims!(; A)>>::Output, Dimensionless>();
        assert_same::<Inverted<dims!(A; B, C)>, dims!(B, C; A)>();
    }

    #[test]
    fn compatibility_ignores_tag_order() {
        assert_compatible::<dims!(A, B), dims!(B, A)>();
        assert_compatible::<dims!(A; B), dims!(A, C; B, C)>();
        assert_compatible::<Base<D>, Base<D>>();
        assert_compatible::<Dimensionless, dims!(A; A)>();
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Printing
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn signature_display() {
        assert_eq!(format!("{}", Signature::<dims!(A, A; B)>::new()), "a*a/b");
        assert_eq!(format!("{}", Signature::<dims!(A; B, C)>::new()), "a/(b*c)");
        assert_eq!(format!("{}", Signature::<dims!(; B)>::new()), "1/b");
        assert_eq!(format!("{}", Signature::<Dimensionless>::new()), "1");
    }
}
