//! Weight units. The base unit is the gram.

use crate::quantity::Simple;
use crate::scale::{Kilo, Mega, Milli, Unity};
use qdim_derive::Dimension;

/// Dimension tag for weight.
#[derive(Dimension)]
#[dimension(id = 3, name = "weight")]
pub enum Weight {}

/// Milligrams.
pub type Milligrams = Simple<i64, Milli, Weight>;
/// Grams (base unit).
pub type Grams = Simple<i64, Unity, Weight>;
/// Kilograms.
pub type Kilograms = Simple<i64, Kilo, Weight>;
/// Metric tonnes.
pub type Tonnes = Simple<i64, Mega, Weight>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder() {
        assert_eq!(Tonnes::new(2), Kilograms::new(2_000));
        assert_eq!(Kilograms::new(1), Grams::new(1_000));
        assert_eq!(Grams::new(1), Milligrams::new(1_000));
        assert_eq!(Kilograms::new(1_500).cast::<Tonnes>().value(), 1);
    }
}
