//! Quantity type and its implementations.

use crate::capability::{Arithmetic, Full, Streaming};
use crate::dimension::{Base, DimPair, Dimensionless, SameDimension, Signature};
use crate::error::ConversionError;
use crate::scale::{Scale, Unity};
use crate::storage::{cast_value, try_cast_value, Rescale, Scalar};
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{AddAssign, DivAssign, MulAssign, Neg, RemAssign, SubAssign};
use num_traits::{One, Signed};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A stored value tagged with a scale, a dimension and a capability policy.
///
/// - `T`: storage type (`i64`, `f64`, or any [`Payload`](crate::Payload)).
/// - `S`: [`Scale`], how many base units one stored unit is worth.
/// - `D`: dimension pair ([`Dims`](crate::Dims)), built with [`dims!`](crate::dims).
/// - `C`: capability policy ([`Caps`](crate::Caps)).
///
/// All three markers are compile-time only; the wrapper has the size and layout of `T`.
///
/// # Examples
///
/// ```rust
/// use qdim_core::units::{Kilometers, Meters};
///
/// let trip = Kilometers::new(2) + Meters::new(500);
/// assert_eq!(trip.value(), 2_500);
/// assert_eq!(trip, Meters::new(2_500));
/// assert!(Kilometers::new(1) > Meters::new(999));
/// ```
pub struct Quantity<T, S = Unity, D = Dimensionless, C = Full>(T, PhantomData<fn() -> (S, D, C)>);

/// A strongly typed value with a single tag and no scale: a width that must not be mixed up
/// with a height.
///
/// ```compile_fail
/// use qdim_core::{Dimension, Singleton};
///
/// #[derive(Dimension)]
/// #[dimension(id = 30, name = "width", crate = "qdim_core")]
/// enum Width {}
///
/// #[derive(Dimension)]
/// #[dimension(id = 31, name = "height", crate = "qdim_core")]
/// enum Height {}
///
/// let _ = Singleton::<i32, Width>::new(3) == Singleton::<i32, Height>::new(3);
/// ```
pub type Singleton<T, Tag, C = Full> = Quantity<T, Unity, Base<Tag>, C>;

/// A physical unit over one dimension tag, at scale `S`.
pub type Simple<T, S, Tag> = Quantity<T, S, Base<Tag>>;

impl<T, S, D, C> Quantity<T, S, D, C> {
    /// Wraps a stored value. This is the only way to build a quantity from a bare value.
    ///
    /// ```rust
    /// use qdim_core::units::Meters;
    /// let d = Meters::new(3);
    /// assert_eq!(d.value(), 3);
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value, PhantomData)
    }

    /// Returns a copy of the stored value.
    #[inline]
    pub const fn value(&self) -> T
    where
        T: Copy,
    {
        self.0
    }

    /// Borrows the stored value.
    #[inline]
    pub const fn as_inner(&self) -> &T {
        &self.0
    }

    /// Unwraps the stored value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Absolute value of the stored value.
    ///
    /// ```rust
    /// use qdim_core::units::Meters;
    /// assert_eq!(Meters::new(-10).abs().value(), 10);
    /// ```
    #[inline]
    pub fn abs(&self) -> Self
    where
        T: Signed,
    {
        Self::new(Signed::abs(&self.0))
    }
}

impl<T, S: Scale, D: DimPair, C> Quantity<T, S, D, C> {
    /// Re-expresses the value at scale `S2`, keeping the storage type.
    ///
    /// ```rust
    /// use qdim_core::{Milli, Unity};
    /// use qdim_core::units::Kilometers;
    ///
    /// let km = Kilometers::new(2);
    /// assert_eq!(km.to::<Unity>().value(), 2_000);
    /// assert_eq!(km.to::<Milli>().value(), 2_000_000);
    /// ```
    #[inline]
    pub fn to<S2: Scale>(self) -> Quantity<T, S2, D, C>
    where
        T: Rescale<T>,
    {
        Quantity::new(cast_value::<S, S2, T, T>(self.0))
    }

    /// Checked form of [`to`](Self::to).
    pub fn try_to<S2: Scale>(self) -> Result<Quantity<T, S2, D, C>, ConversionError>
    where
        T: Rescale<T>,
    {
        try_cast_value::<S, S2, T, T>(self.0).map(Quantity::new)
    }

    /// Converts into another quantity type of the same dimension and capability policy, with
    /// any scale and storage.
    ///
    /// ```rust
    /// use qdim_core::units::{Centimeters, Feet, Inches};
    ///
    /// let inches: Inches = Feet::new(3).cast();
    /// assert_eq!(inches.value(), 36);
    ///
    /// let cm: Centimeters = Inches::new(10).cast();
    /// assert_eq!(cm.value(), 25);
    /// ```
    #[inline]
    pub fn cast<Q>(self) -> Q
    where
        Q: CastFrom<Self>,
    {
        Q::cast_from(self)
    }

    /// Checked form of [`cast`](Self::cast).
    ///
    /// ```rust
    /// use qdim_core::{ConversionError, Quantity, Unity};
    /// use qdim_core::units::{Kilometers, Distance};
    /// use qdim_core::dims;
    ///
    /// type TinyMeters = Quantity<u8, Unity, dims!(Distance)>;
    ///
    /// assert_eq!(Kilometers::new(0).try_cast::<TinyMeters>().map(|m| m.value()), Ok(0));
    /// assert_eq!(
    ///     Kilometers::new(1).try_cast::<TinyMeters>(),
    ///     Err(ConversionError::OutOfRange { target: "u8" })
    /// );
    /// ```
    pub fn try_cast<Q>(self) -> Result<Q, ConversionError>
    where
        Q: CastFrom<Self>,
    {
        Q::try_cast_from(self)
    }

    /// Builds `Self` from a compatible quantity, rescaling exactly.
    #[inline]
    pub fn from_quantity<Q>(other: Q) -> Self
    where
        Self: CastFrom<Q>,
    {
        Self::cast_from(other)
    }
}

impl<T, S, D, C> Quantity<T, S, D, C>
where
    T: One + AddAssign + SubAssign,
    C: Arithmetic,
{
    /// Adds one stored unit in place and returns the updated quantity (`++q`).
    ///
    /// ```rust
    /// use qdim_core::units::Seconds;
    /// let mut t = Seconds::new(9);
    /// assert_eq!(t.increment().value(), 10);
    /// ```
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.0 += T::one();
        self
    }

    /// Subtracts one stored unit in place and returns the updated quantity (`--q`).
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        self.0 -= T::one();
        self
    }

    /// Adds one stored unit in place and returns the previous value (`q++`).
    ///
    /// ```rust
    /// use qdim_core::units::Seconds;
    /// let mut t = Seconds::new(9);
    /// assert_eq!(t.post_increment().value(), 9);
    /// assert_eq!(t.value(), 10);
    /// ```
    #[inline]
    pub fn post_increment(&mut self) -> Self
    where
        T: Clone,
    {
        let previous = Self::new(self.0.clone());
        self.0 += T::one();
        previous
    }

    /// Subtracts one stored unit in place and returns the previous value (`q--`).
    #[inline]
    pub fn post_decrement(&mut self) -> Self
    where
        T: Clone,
    {
        let previous = Self::new(self.0.clone());
        self.0 -= T::one();
        previous
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion
// ─────────────────────────────────────────────────────────────────────────────

/// Explicit conversion between quantity types of the same dimension and capability policy.
///
/// Implemented for every pair of quantities whose dimensions cancel, whatever their scale and
/// storage. See [`Quantity::cast`] and the free function [`cast`].
pub trait CastFrom<Src>: Sized {
    /// Converts `src`, rescaling exactly.
    fn cast_from(src: Src) -> Self;

    /// Converts `src` with checked arithmetic.
    fn try_cast_from(src: Src) -> Result<Self, ConversionError>;
}

impl<T1, S1, D1, T2, S2, D2, C> CastFrom<Quantity<T1, S1, D1, C>> for Quantity<T2, S2, D2, C>
where
    T1: Rescale<T2>,
    S1: Scale,
    S2: Scale,
    D1: SameDimension<D2>,
    D2: DimPair,
{
    #[inline]
    fn cast_from(src: Quantity<T1, S1, D1, C>) -> Self {
        Quantity::new(cast_value::<S1, S2, T1, T2>(src.0))
    }

    fn try_cast_from(src: Quantity<T1, S1, D1, C>) -> Result<Self, ConversionError> {
        try_cast_value::<S1, S2, T1, T2>(src.0).map(Quantity::new)
    }
}

/// Free-function form of [`Quantity::cast`].
///
/// ```rust
/// use qdim_core::cast;
/// use qdim_core::units::{Hours, Minutes};
///
/// let m: Minutes = cast(Hours::new(2));
/// assert_eq!(m.value(), 120);
/// ```
///
/// Converting across dimensions does not compile:
///
/// ```compile_fail
/// use qdim_core::cast;
/// use qdim_core::units::{Meters, Seconds};
///
/// let _: Seconds = cast(Meters::new(2));
/// ```
#[inline]
pub fn cast<Q, Src>(src: Src) -> Q
where
    Q: CastFrom<Src>,
{
    Q::cast_from(src)
}

// ─────────────────────────────────────────────────────────────────────────────
// Value-type traits
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Clone, S, D, C> Clone for Quantity<T, S, D, C> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.0.clone())
    }
}

impl<T: Copy, S, D, C> Copy for Quantity<T, S, D, C> {}

impl<T: Default, S, D, C> Default for Quantity<T, S, D, C> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Hashes the stored value only. Equal values of one quantity type hash equally; the scale is
/// part of the type, so keys of a single container never mix scales.
impl<T: Hash, S, D, C> Hash for Quantity<T, S, D, C> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: Debug, S: Scale, D: DimPair, C> Debug for Quantity<T, S, D, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.0)
            .field("scale", &format_args!("{}", S::RATIO))
            .field("dims", &format_args!("{}", Signature::<D>::new()))
            .finish()
    }
}

/// Writes the stored value only.
impl<T: Display, S, D, C: Streaming> Display for Quantity<T, S, D, C> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// In-place operators
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Neg<Output = T>, S, D, C> Neg for Quantity<T, S, D, C> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<T: AddAssign, S, D, C: Arithmetic> AddAssign for Quantity<T, S, D, C> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<T: SubAssign, S, D, C: Arithmetic> SubAssign for Quantity<T, S, D, C> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<T: Scalar + MulAssign, S, D, C: Arithmetic> MulAssign<T> for Quantity<T, S, D, C> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.0 *= rhs;
    }
}

impl<T: Scalar + DivAssign, S, D, C: Arithmetic> DivAssign<T> for Quantity<T, S, D, C> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.0 /= rhs;
    }
}

impl<T: Scalar + RemAssign, S, D, C: Arithmetic> RemAssign<T> for Quantity<T, S, D, C> {
    #[inline]
    fn rem_assign(&mut self, rhs: T) {
        self.0 %= rhs;
    }
}

impl<T: RemAssign, S, D, C: Arithmetic> RemAssign for Quantity<T, S, D, C> {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        self.0 %= rhs.0;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<T: Serialize, S, D, C> Serialize for Quantity<T, S, D, C> {
    fn serialize<Ser>(&self, serializer: Ser) -> core::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>, S, D, C> Deserialize<'de> for Quantity<T, S, D, C> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Quantity::new)
    }
}

/// Serde helper module that records the scale next to the value.
///
/// Use it with `#[serde(with = "...")]` where the stored number alone would be ambiguous, e.g.
/// in configuration files read by other tools.
///
/// ```rust
/// use qdim_core::units::{Kilometers, Meters};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Route {
///     #[serde(with = "qdim_core::serde_with_scale")]
///     length: Kilometers, // {"value": 12, "scale": "1000/1"}
///     margin: Meters,     // 50
/// }
///
/// let route = Route { length: Kilometers::new(12), margin: Meters::new(50) };
/// let json = serde_json::to_string(&route).unwrap();
/// assert_eq!(json, r#"{"length":{"value":12,"scale":"1000/1"},"margin":50}"#);
/// ```
#[cfg(all(feature = "serde", feature = "std"))]
pub mod serde_with_scale {
    use super::*;
    use crate::rational::Fraction;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a quantity as `{"value": v, "scale": "num/den"}`.
    pub fn serialize<T, S, D, C, Ser>(
        quantity: &Quantity<T, S, D, C>,
        serializer: Ser,
    ) -> Result<Ser::Ok, Ser::Error>
    where
        T: Serialize,
        S: Scale,
        Ser: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", quantity.as_inner())?;
        state.serialize_field("scale", &S::RATIO.to_string())?;
        state.end()
    }

    /// Deserializes a quantity from `value` and an optional `scale`.
    ///
    /// A present `scale` must reduce to `S::RATIO` (`"2000/2"` is accepted for kilo); the value
    /// is not rescaled.
    pub fn deserialize<'de, T, S, D, C, De>(
        deserializer: De,
    ) -> Result<Quantity<T, S, D, C>, De::Error>
    where
        T: Deserialize<'de>,
        S: Scale,
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Scale,
        }

        struct QuantityVisitor<T, S, D, C>(PhantomData<fn() -> (T, S, D, C)>);

        impl<'de, T, S, D, C> Visitor<'de> for QuantityVisitor<T, S, D, C>
        where
            T: Deserialize<'de>,
            S: Scale,
        {
            type Value = Quantity<T, S, D, C>;

            fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
                formatter.write_str("struct Quantity with value and scale fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Self::Value, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<T> = None;
                let mut scale: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Scale => {
                            if scale.is_some() {
                                return Err(de::Error::duplicate_field("scale"));
                            }
                            scale = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(text) = scale {
                    match parse_ratio(&text) {
                        Some(ratio) if ratio == S::RATIO => {}
                        _ => {
                            return Err(de::Error::custom(format!(
                                "scale mismatch: expected '{}', found '{}'",
                                S::RATIO,
                                text
                            )));
                        }
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "scale"],
            QuantityVisitor(PhantomData),
        )
    }

    /// Scale ratios are strictly positive; anything else is rejected before it reaches
    /// [`Fraction::new`], which cannot reduce `i128::MIN`.
    fn parse_ratio(text: &str) -> Option<Fraction> {
        let (num, den) = text.split_once('/').unwrap_or((text, "1"));
        let num: i128 = num.trim().parse().ok()?;
        let den: i128 = den.trim().parse().ok()?;
        (num > 0 && den > 0).then(|| Fraction::new(num, den))
    }
}
