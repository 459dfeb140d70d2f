//! Distance units.
//!
//! The base unit is the metre. Imperial units use the international definitions
//! (`1 in = 0.0254 m` exactly), so every ratio here is exact.
//!
//! ```rust
//! use qdim_core::units::{Feet, Meters, Miles, Yards};
//!
//! assert_eq!(Miles::new(1), Yards::new(1_760));
//! assert_eq!(Yards::new(1).cast::<Feet>().value(), 3);
//! assert!(Miles::new(1) > Meters::new(1_609));
//! ```

use crate::quantity::Simple;
use crate::scale::{Centi, Deci, Kilo, Micro, Milli, Ratio, Unity};
use qdim_derive::Dimension;

/// Dimension tag for distance.
#[derive(Dimension)]
#[dimension(id = 1, name = "distance")]
pub enum Distance {}

/// Micrometres.
pub type Micrometers = Simple<i64, Micro, Distance>;
/// Millimetres.
pub type Millimeters = Simple<i64, Milli, Distance>;
/// Centimetres.
pub type Centimeters = Simple<i64, Centi, Distance>;
/// Decimetres.
pub type Decimeters = Simple<i64, Deci, Distance>;
/// Metres (base unit).
pub type Meters = Simple<i64, Unity, Distance>;
/// Kilometres.
pub type Kilometers = Simple<i64, Kilo, Distance>;

/// The international inch, `127/5000 m`.
pub type Inch = Ratio<127, 5_000>;
/// The international foot, `12 in`.
pub type Foot = Ratio<381, 1_250>;
/// The international yard, `3 ft`.
pub type Yard = Ratio<1_143, 1_250>;
/// The statute mile, `1760 yd`.
pub type Mile = Ratio<201_168, 125>;
/// The international nautical mile, `1852 m`.
pub type NauticalMile = Ratio<1_852>;

/// Inches.
pub type Inches = Simple<i64, Inch, Distance>;
/// Feet.
pub type Feet = Simple<i64, Foot, Distance>;
/// Yards.
pub type Yards = Simple<i64, Yard, Distance>;
/// Statute miles.
pub type Miles = Simple<i64, Mile, Distance>;
/// Nautical miles.
pub type NauticalMiles = Simple<i64, NauticalMile, Distance>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_ladder() {
        assert_eq!(Kilometers::new(1), Meters::new(1_000));
        assert_eq!(Meters::new(1), Decimeters::new(10));
        assert_eq!(Decimeters::new(1), Centimeters::new(10));
        assert_eq!(Centimeters::new(1), Millimeters::new(10));
        assert_eq!(Millimeters::new(1), Micrometers::new(1_000));
    }

    #[test]
    fn imperial_ladder() {
        assert_eq!(Feet::new(1), Inches::new(12));
        assert_eq!(Yards::new(1), Feet::new(3));
        assert_eq!(Miles::new(1), Feet::new(5_280));
    }

    #[test]
    fn imperial_to_metric_is_exact() {
        assert_eq!(Inches::new(1), Micrometers::new(25_400));
        assert_eq!(Feet::new(1), Millimeters::new(305) - Micrometers::new(200));
        assert_eq!(Miles::new(1), Millimeters::new(1_609_344));
        assert_eq!(NauticalMiles::new(1), Meters::new(1_852));
    }

    #[test]
    fn conversions_truncate_toward_zero() {
        assert_eq!(Inches::new(10).cast::<Centimeters>().value(), 25);
        assert_eq!(Meters::new(1).cast::<Feet>().value(), 3);
        assert_eq!(Meters::new(-1).cast::<Feet>().value(), -3);
    }
}
