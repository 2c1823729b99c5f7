//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Minute` counter; one tick of the
//! simulation advances exactly one minute.  Keeping the canonical unit an
//! integer means all travel/service arithmetic is exact (no floating-point
//! drift) and comparisons are O(1).  The diurnal ambient-temperature
//! function in `reefer-thermal` is the only consumer of absolute time and
//! takes a `Minute` directly, so no wall-clock mapping is carried here.

use std::fmt;

/// An absolute simulation minute counter.
///
/// Stored as `u64`: a run would have to last ~35 billion millennia of
/// simulated minutes to overflow.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minute(pub u64);

impl Minute {
    pub const ZERO: Minute = Minute(0);

    /// Return the minute `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Minute {
        Minute(self.0 + n)
    }

    /// Minutes elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Minute) -> u64 {
        self.0 - earlier.0
    }

    /// Fractional hour-of-run, used by the diurnal ambient function.
    #[inline]
    pub fn as_hours(self) -> f64 {
        self.0 as f64 / 60.0
    }
}

impl std::ops::Add<u64> for Minute {
    type Output = Minute;
    #[inline]
    fn add(self, rhs: u64) -> Minute {
        Minute(self.0 + rhs)
    }
}

impl std::ops::Sub for Minute {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Minute) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}
