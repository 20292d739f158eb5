//! Ambient-temperature model for a subpolar coastal site.
//!
//! Ambient temperature is a pure function of (hour-of-day, day-of-year) plus
//! Gaussian noise drawn from a caller-supplied random source; the model never
//! touches global entropy, so runs are reproducible under a fixed seed.

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Seasonal + diurnal + noise ambient model, all terms in °C.
///
/// The seasonal term blends linearly between the winter and summer means as
/// the day-of-year moves away from the solstice reference. The diurnal term
/// peaks at `diurnal_peak_hour` and troughs twelve hours away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientModel {
    /// Mean winter temperature [°C]
    pub winter_mean_c: f64,
    /// Mean summer temperature [°C]
    pub summer_mean_c: f64,
    /// Day-of-year of the winter solstice reference
    pub solstice_day: f64,
    /// Peak-to-mean diurnal swing [°C]
    pub diurnal_amplitude_c: f64,
    /// Hour of day (0-23) at which the diurnal term peaks
    pub diurnal_peak_hour: f64,
    /// Standard deviation of the Gaussian noise term [°C]; <= 0 disables it
    pub noise_sigma_c: f64,
}

impl Default for AmbientModel {
    /// Punta Arenas-like climate: cold winters, cool summers.
    fn default() -> Self {
        Self {
            winter_mean_c: -5.0,
            summer_mean_c: 10.0,
            solstice_day: 172.0,
            diurnal_amplitude_c: 4.0,
            diurnal_peak_hour: 15.0,
            noise_sigma_c: 1.5,
        }
    }
}

impl AmbientModel {
    /// Deterministic part of the model: seasonal blend plus diurnal swing.
    pub fn mean_at(&self, hour_of_day: f64, day_of_year: f64) -> f64 {
        let season = 0.5 * (1.0 + (day_of_year - self.solstice_day) / self.solstice_day);
        let base = self.winter_mean_c + (self.summer_mean_c - self.winter_mean_c) * season;
        let diurnal = self.diurnal_amplitude_c
            * (1.0 - (hour_of_day - self.diurnal_peak_hour).abs() / 12.0);
        base + diurnal
    }

    /// Ambient temperature [°C] with noise from the supplied source.
    pub fn sample<R: Rng>(&self, hour_of_day: f64, day_of_year: f64, rng: &mut R) -> f64 {
        let mean = self.mean_at(hour_of_day, day_of_year);
        match Normal::new(0.0, self.noise_sigma_c) {
            Ok(noise) => mean + noise.sample(rng),
            // Non-positive sigma: noiseless model.
            Err(_) => mean,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn solstice_afternoon_is_mid_season_peak() {
        let model = AmbientModel::default();
        // Day 172 puts the seasonal blend exactly between winter and summer;
        // hour 15 is the diurnal peak.
        let t = model.mean_at(15.0, 172.0);
        assert!((t - 6.5).abs() < 1e-9, "t = {t}");
    }

    #[test]
    fn diurnal_trough_is_twelve_hours_from_peak() {
        let model = AmbientModel::default();
        let peak = model.mean_at(15.0, 172.0);
        let trough = model.mean_at(3.0, 172.0);
        assert!((peak - trough - 4.0).abs() < 1e-9);
    }

    #[test]
    fn late_year_runs_warmer_than_mid_year() {
        let model = AmbientModel::default();
        assert!(model.mean_at(12.0, 344.0) > model.mean_at(12.0, 172.0));
    }

    #[test]
    fn zero_sigma_is_noiseless() {
        let model = AmbientModel {
            noise_sigma_c: 0.0,
            ..AmbientModel::default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        let t = model.sample(15.0, 172.0, &mut rng);
        assert_eq!(t, model.mean_at(15.0, 172.0));
    }

    #[test]
    fn fixed_seed_reproduces_samples() {
        let model = AmbientModel::default();
        let a = model.sample(9.0, 40.0, &mut StdRng::seed_from_u64(11));
        let b = model.sample(9.0, 40.0, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn noise_stays_within_plausible_band() {
        let model = AmbientModel::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let t = model.sample(12.0, 100.0, &mut rng);
            let mean = model.mean_at(12.0, 100.0);
            assert!((t - mean).abs() < 10.0, "noise excursion {t} around {mean}");
        }
    }
}
