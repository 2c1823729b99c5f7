//! Run-level simulation and trailer-thermal parameters.
//!
//! Defaults reproduce the reference cold-chain configuration: a 4 °C
//! setpoint reefer trailer with fast active cooling, slow passive drift
//! toward ambient while the doors are open, and an 8-hour minute budget.

use crate::{CoreError, CoreResult};

/// Parameters of the stochastic trailer-temperature process.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThermalParams {
    /// Refrigeration setpoint, °C.  Closed-door ticks relax toward this.
    pub setpoint_c: f64,
    /// Closed-door relaxation coefficient per minute.
    pub cool_rate: f64,
    /// Open-door relaxation coefficient per minute (toward ambient).
    pub drift: f64,
    /// Instantaneous jump applied once at the moment doors open, °C.
    pub open_spike_c: f64,
    /// Standard deviation of the per-minute Gaussian sensor/compressor noise.
    pub noise_sigma: f64,
    /// Per-minute probability of a one-sided traffic/solar heat bump
    /// (closed-door ticks only).
    pub bump_prob: f64,
    /// Uniform range of the heat bump, °C.
    pub bump_min_c: f64,
    pub bump_max_c: f64,
}

impl Default for ThermalParams {
    fn default() -> Self {
        Self {
            setpoint_c: 4.0,
            cool_rate: 0.15,
            drift: 0.02,
            open_spike_c: 1.8,
            noise_sigma: 0.06,
            bump_prob: 0.02,
            bump_min_c: 0.2,
            bump_max_c: 0.5,
        }
    }
}

impl ThermalParams {
    /// Reject configurations the per-minute update cannot sample from.
    pub fn validate(&self) -> CoreResult<()> {
        if self.noise_sigma < 0.0 {
            return Err(CoreError::Config("noise_sigma must be >= 0".into()));
        }
        if !(0.0..=1.0).contains(&self.bump_prob) {
            return Err(CoreError::Config("bump_prob must be in [0, 1]".into()));
        }
        if self.bump_max_c < self.bump_min_c {
            return Err(CoreError::Config(
                "bump_max_c must be >= bump_min_c".into(),
            ));
        }
        Ok(())
    }
}

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Minutes the vehicle spends servicing each store (doors open).
    pub service_minutes: u32,
    /// Run budget: `run_until_done` stops after this many minutes even if
    /// the route is unfinished.
    pub max_minutes: u64,
    /// Trailer-temperature process parameters.
    pub thermal: ThermalParams,
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            service_minutes: 8,
            max_minutes: 8 * 60,
            thermal: ThermalParams::default(),
            seed: 123,
        }
    }
}

impl SimParams {
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_minutes == 0 {
            return Err(CoreError::Config("max_minutes must be > 0".into()));
        }
        self.thermal.validate()
    }
}
