//! Predefined dimension tags and unit aliases.
//!
//! The tags here use the reserved identities `1..=4`. Every unit is a [`Simple`](crate::Simple) quantity: one
//! tag, one exact scale relative to the base unit of its dimension, and the storage type that
//! suits its usual magnitude.

use crate::dims;
use crate::quantity::Quantity;
use crate::scale::Unity;

pub mod distance;
pub mod duration;
pub mod memory;
pub mod weight;

pub use distance::*;
pub use duration::*;
pub use memory::*;
pub use weight::*;

/// Square metres.
pub type SquareMeters = Quantity<i64, Unity, dims!(Distance, Distance)>;

/// Metres per second.
///
/// ```rust
/// use qdim_core::units::{Meters, MetersPerSecond, Seconds};
///
/// let v: MetersPerSecond = (Meters::new(100) / Seconds::new(20)).cast();
/// assert_eq!(v.value(), 5);
/// ```
pub type MetersPerSecond = Quantity<i64, Unity, dims!(Distance; Duration)>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dimension;

    #[test]
    fn builtin_tags_have_distinct_identities() {
        use typenum::Unsigned;
        let ids = [
            <<Distance as Dimension>::Id as Unsigned>::U64,
            <<Duration as Dimension>::Id as Unsigned>::U64,
            <<Weight as Dimension>::Id as Unsigned>::U64,
            <<MemoryVolume as Dimension>::Id as Unsigned>::U64,
        ];
        assert_eq!(ids, [1, 2, 3, 4]);
    }

    #[test]
    fn builtin_tag_names() {
        assert_eq!(Distance::NAME, "distance");
        assert_eq!(Duration::NAME, "duration");
        assert_eq!(Weight::NAME, "weight");
        assert_eq!(MemoryVolume::NAME, "memory volume");
    }

    #[test]
    fn derived_aliases() {
        let area = Meters::new(20) * Meters::new(5);
        assert_eq!(area, SquareMeters::new(100));

        let v: MetersPerSecond = (Kilometers::new(36) / Hours::new(1)).cast();
        assert_eq!(v.value(), 10);
    }
}
