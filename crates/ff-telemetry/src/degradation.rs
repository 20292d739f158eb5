//! Equipment degradation: condenser fouling, door traffic, efficiency jitter.
//!
//! All three effects are pure functions of the tick index, the configured
//! horizon, and a caller-supplied random source. Time remaining is derived
//! from the tick index rather than accumulated, so ticks can be evaluated in
//! any order or in parallel.

use rand::Rng;

/// Per-tick degraded operating values handed to the cycle solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegradedParameters {
    /// Condenser approach delta-T [°C], after door traffic and fouling
    pub condenser_approach_c: f64,
    /// Compressor isentropic efficiency, clamped to the operating range
    pub isentropic_efficiency: f64,
}

/// Degradation model with the door ladder, progressive fouling, and
/// efficiency jitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegradationModel {
    /// Clean-condenser approach delta-T [°C]
    pub base_approach_c: f64,
    /// Fouling starts when this many whole days remain in the horizon
    pub fouling_onset_days: u64,
    /// Fouling factor growth per day of remaining time lost
    pub fouling_rate_per_day: f64,
    /// Probability of a severe door excursion
    pub severe_door_probability: f64,
    /// Cumulative probability of a severe-or-moderate excursion
    pub moderate_door_probability: f64,
    /// Severe excursion magnitude range [°C]
    pub severe_door_range_c: (f64, f64),
    /// Moderate excursion magnitude range [°C]
    pub moderate_door_range_c: (f64, f64),
    /// Nameplate isentropic efficiency
    pub base_efficiency: f64,
    /// Uniform jitter bounds added to the base efficiency
    pub efficiency_jitter: (f64, f64),
    /// Hard clamp on the resulting efficiency
    pub efficiency_bounds: (f64, f64),
}

impl Default for DegradationModel {
    fn default() -> Self {
        Self {
            base_approach_c: 15.0,
            fouling_onset_days: 2,
            fouling_rate_per_day: 0.7,
            severe_door_probability: 0.05,
            moderate_door_probability: 0.20,
            severe_door_range_c: (3.0, 8.0),
            moderate_door_range_c: (1.0, 3.0),
            base_efficiency: 0.75,
            efficiency_jitter: (-0.03, 0.02),
            efficiency_bounds: (0.60, 0.85),
        }
    }
}

/// Uniform draw over `[lo, hi)`; a zero-width or inverted range is treated
/// as a disabled term and yields `lo`.
fn uniform_or_lo<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    if lo < hi { rng.gen_range(lo..hi) } else { lo }
}

impl DegradationModel {
    /// Door-traffic excursion [°C] added to the base approach this tick.
    ///
    /// Discrete probability ladder: a small chance of a severe excursion, a
    /// larger chance of a moderate one, otherwise zero.
    pub fn door_excursion<R: Rng>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.gen_range(0.0..1.0);
        if u < self.severe_door_probability {
            uniform_or_lo(rng, self.severe_door_range_c)
        } else if u < self.moderate_door_probability {
            uniform_or_lo(rng, self.moderate_door_range_c)
        } else {
            0.0
        }
    }

    /// Whole days remaining at `tick`, counting the current partial day.
    pub fn days_remaining(tick: u64, ticks_per_day: u32, horizon_days: u32) -> u64 {
        u64::from(horizon_days).saturating_sub(tick / u64::from(ticks_per_day))
    }

    /// Fouling multiplier applied to the approach delta-T.
    ///
    /// Unity until the onset threshold, then grows linearly as remaining
    /// time shrinks toward zero.
    pub fn fouling_factor(&self, days_remaining: u64) -> f64 {
        if days_remaining <= self.fouling_onset_days {
            1.0 + (self.fouling_onset_days - days_remaining) as f64 * self.fouling_rate_per_day
        } else {
            1.0
        }
    }

    /// Sample the degraded parameters for one (tick, unit) cell.
    ///
    /// Draw order is fixed (door ladder, then efficiency jitter) so a given
    /// seed always yields the same parameters.
    pub fn sample<R: Rng>(
        &self,
        tick: u64,
        ticks_per_day: u32,
        horizon_days: u32,
        rng: &mut R,
    ) -> DegradedParameters {
        let door = self.door_excursion(rng);
        let days_remaining = Self::days_remaining(tick, ticks_per_day, horizon_days);
        let approach = (self.base_approach_c + door) * self.fouling_factor(days_remaining);

        let jitter = uniform_or_lo(rng, self.efficiency_jitter);
        let eta = (self.base_efficiency + jitter)
            .clamp(self.efficiency_bounds.0, self.efficiency_bounds.1);

        DegradedParameters {
            condenser_approach_c: approach,
            isentropic_efficiency: eta,
        }
    }
}
