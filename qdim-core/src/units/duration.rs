//! Duration units, and interop with [`core::time::Duration`].
//!
//! The base unit is the second. Sub-second units and seconds are stored as `i64`; minutes and
//! longer as `i32` (an `i32` of minutes spans about four thousand years).

use crate::error::ConversionError;
use crate::quantity::Simple;
use crate::scale::{Micro, Milli, Nano, Ratio, Unity};
use qdim_derive::Dimension;

/// Dimension tag for duration.
#[derive(Dimension)]
#[dimension(id = 2, name = "duration")]
pub enum Duration {}

/// Nanoseconds.
pub type Nanoseconds = Simple<i64, Nano, Duration>;
/// Microseconds.
pub type Microseconds = Simple<i64, Micro, Duration>;
/// Milliseconds.
pub type Milliseconds = Simple<i64, Milli, Duration>;
/// Seconds (base unit).
pub type Seconds = Simple<i64, Unity, Duration>;
/// Minutes.
pub type Minutes = Simple<i32, Ratio<60>, Duration>;
/// Hours.
pub type Hours = Simple<i32, Ratio<3_600>, Duration>;
/// Days.
pub type Days = Simple<i32, Ratio<86_400>, Duration>;
/// Weeks.
pub type Weeks = Simple<i32, Ratio<604_800>, Duration>;

/// Saturates at `i64::MAX` nanoseconds (about 292 years).
///
/// ```rust
/// use qdim_core::units::{Milliseconds, Nanoseconds};
///
/// let ns = Nanoseconds::from(core::time::Duration::from_millis(1_500));
/// assert_eq!(ns, Milliseconds::new(1_500));
/// ```
impl From<core::time::Duration> for Nanoseconds {
    fn from(value: core::time::Duration) -> Self {
        Nanoseconds::new(i64::try_from(value.as_nanos()).unwrap_or(i64::MAX))
    }
}

/// Fails on negative values.
///
/// ```rust
/// use qdim_core::units::{Nanoseconds, Seconds};
///
/// let ns: Nanoseconds = Seconds::new(2).cast();
/// assert_eq!(core::time::Duration::try_from(ns), Ok(core::time::Duration::from_secs(2)));
/// assert!(core::time::Duration::try_from(Nanoseconds::new(-1)).is_err());
/// ```
impl TryFrom<Nanoseconds> for core::time::Duration {
    type Error = ConversionError;

    fn try_from(value: Nanoseconds) -> Result<Self, Self::Error> {
        u64::try_from(value.value())
            .map(core::time::Duration::from_nanos)
            .map_err(|_| ConversionError::OutOfRange {
                target: "core::time::Duration",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_ladder() {
        assert_eq!(Weeks::new(1), Days::new(7));
        assert_eq!(Days::new(1), Hours::new(24));
        assert_eq!(Hours::new(1), Minutes::new(60));
        assert_eq!(Minutes::new(1), Seconds::new(60));
        assert_eq!(Seconds::new(1), Milliseconds::new(1_000));
        assert_eq!(Milliseconds::new(1), Microseconds::new(1_000));
        assert_eq!(Microseconds::new(1), Nanoseconds::new(1_000));
    }

    #[test]
    fn mixed_storage_sums() {
        let total = Hours::new(1) + Minutes::new(30) + Seconds::new(15);
        assert_eq!(total, Seconds::new(5_415));
        assert_eq!(total.value(), 5_415);
    }

    #[test]
    fn std_duration_round_trip() {
        let d = core::time::Duration::new(3, 250);
        let ns = Nanoseconds::from(d);
        assert_eq!(ns.value(), 3_000_000_250);
        assert_eq!(core::time::Duration::try_from(ns), Ok(d));
    }

    #[test]
    fn std_duration_saturates() {
        let ns = Nanoseconds::from(core::time::Duration::MAX);
        assert_eq!(ns.value(), i64::MAX);
    }
}
