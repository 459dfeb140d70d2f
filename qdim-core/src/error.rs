//! Errors reported by checked conversions.

use thiserror::Error;

/// Failure of a checked rescale ([`Quantity::try_cast`](crate::Quantity::try_cast),
/// [`Quantity::try_to`](crate::Quantity::try_to), [`try_cast_value`](crate::try_cast_value)).
///
/// The unchecked paths never produce this; they follow the storage type's native overflow
/// behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Multiplying by the transfer coefficient overflowed the intermediate type.
    #[error("rescaling by {num}/{den} overflowed the intermediate value")]
    Overflow {
        /// Numerator of the transfer coefficient.
        num: i128,
        /// Denominator of the transfer coefficient.
        den: i128,
    },
    /// The rescaled value does not fit the destination storage, or is not finite.
    #[error("rescaled value does not fit in `{target}`")]
    OutOfRange {
        /// Name of the destination storage type.
        target: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let overflow = ConversionError::Overflow { num: 1000, den: 1 };
        assert_eq!(
            overflow.to_string(),
            "rescaling by 1000/1 overflowed the intermediate value"
        );
        let range = ConversionError::OutOfRange { target: "u8" };
        assert_eq!(range.to_string(), "rescaled value does not fit in `u8`");
    }
}
