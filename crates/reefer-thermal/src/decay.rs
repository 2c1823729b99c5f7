//! Shelf-life decay rates.
//!
//! The Q10 relation: the effective shelf life at temperature `T` is
//!
//! ```text
//! L(T) = L_ref / Q10^((T − T_ref) / 10)
//! ```
//!
//! and the per-minute loss of remaining life is `1 / (60 · L(T))` hours of
//! life per minute of exposure.  The rate must be re-evaluated every minute
//! against the trailer temperature *at that minute* — decay is
//! path-dependent, not a function of elapsed time alone.

/// Floor for the effective-life denominator, in hours.  Keeps degenerate
/// reference lives from dividing by zero.
const MIN_EFFECTIVE_LIFE_HOURS: f64 = 1e-6;

/// Minutes of remaining shelf life lost during one minute spent at `temp_c`,
/// for a SKU with reference life `life_ref_hours` at `temp_ref_c` and
/// temperature sensitivity `q10`.
#[inline]
pub fn q10_decay_per_minute(life_ref_hours: f64, temp_c: f64, temp_ref_c: f64, q10: f64) -> f64 {
    let effective_life_hours = life_ref_hours / q10.powf((temp_c - temp_ref_c) / 10.0);
    let rate_per_hour = 1.0 / effective_life_hours.max(MIN_EFFECTIVE_LIFE_HOURS);
    rate_per_hour / 60.0
}

/// Arrhenius-kinetics variant for SKUs with calibrated `a` (pre-exponential
/// factor, 1/h) and `ea` (activation energy, J/mol).
pub fn arrhenius_decay_per_minute(a: f64, ea: f64, temp_c: f64) -> f64 {
    const R: f64 = 8.314; // gas constant, J/(mol·K)
    let temp_k = temp_c + 273.15;
    let k_per_hour = a * (-ea / (R * temp_k)).exp();
    k_per_hour / 60.0
}
