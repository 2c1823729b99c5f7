//! The trailer-temperature process.
//!
//! One scalar temperature, advanced exactly once per simulated minute by one
//! of two relaxation rules:
//!
//! ```text
//! closed doors:  temp += cool_rate · (setpoint − temp) + noise [+ rare bump]
//! open doors:    temp += drift · (ambient(minute) − temp) + noise
//! ```
//!
//! plus an instantaneous `open_spike_c` jump applied once at the moment the
//! doors open for a delivery.  Closed-door dynamics model active
//! refrigeration (fast relaxation to setpoint); open-door dynamics model
//! passive drift toward ambient with no active cooling.

use rand::Rng;
use rand_distr::StandardNormal;

use reefer_core::{Minute, SimRng, ThermalParams};

/// Deterministic diurnal ambient temperature, °C: mean 21, amplitude 3,
/// 24-hour period, peaking at midday.  Pure function of the absolute
/// simulation minute.
#[inline]
pub fn ambient_c(minute: Minute) -> f64 {
    21.0 + 3.0 * ((minute.as_hours() - 6.0) / 24.0 * std::f64::consts::TAU).sin()
}

/// Per-vehicle stochastic trailer-temperature state.
///
/// Owns its own [`SimRng`] so multiple simulation instances never interfere;
/// seed it from the run's master seed for reproducible trajectories.
pub struct TrailerTemp {
    params: ThermalParams,
    rng: SimRng,
    temp: f64,
}

impl TrailerTemp {
    /// Start at the setpoint (the trailer is pre-chilled at the depot).
    pub fn new(params: ThermalParams, rng: SimRng) -> Self {
        let temp = params.setpoint_c;
        Self { params, rng, temp }
    }

    /// Current trailer temperature, °C.
    #[inline]
    pub fn temp_c(&self) -> f64 {
        self.temp
    }

    fn noise(&mut self) -> f64 {
        let z: f64 = self.rng.inner().sample(StandardNormal);
        z * self.params.noise_sigma
    }

    /// Advance one minute with the doors closed: relax toward the setpoint,
    /// add noise, and occasionally a one-sided traffic/solar heat bump.
    pub fn tick_closed(&mut self) {
        self.temp += self.params.cool_rate * (self.params.setpoint_c - self.temp);
        self.temp += self.noise();
        if self.rng.gen_bool(self.params.bump_prob) {
            self.temp += if self.params.bump_max_c > self.params.bump_min_c {
                self.rng.gen_range(self.params.bump_min_c..self.params.bump_max_c)
            } else {
                self.params.bump_min_c
            };
        }
    }

    /// Advance one minute with the doors open: drift toward `ambient`, add
    /// noise.  No traffic bump while parked at a store.
    pub fn tick_open(&mut self, ambient: f64) {
        self.temp += self.params.drift * (ambient - self.temp);
        self.temp += self.noise();
    }

    /// One-shot warm-air spike at the instant the doors open for a delivery.
    /// Not repeated during the servicing ticks that follow.
    pub fn spike_on_open(&mut self) {
        self.temp += self.params.open_spike_c;
    }
}
