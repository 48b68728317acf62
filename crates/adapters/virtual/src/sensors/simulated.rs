//! Simulated sensors: uniformly random readings within household ranges.

use std::future::Future;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use homewarden_app::ports::SensorSource;
use homewarden_domain::error::HomeWardenError;
use homewarden_domain::sensor::SensorSnapshot;

const TEMPERATURE: RangeInclusive<f64> = 18.0..=30.0;
const HUMIDITY: RangeInclusive<f64> = 40.0..=80.0;
const SMOKE_PROBABILITY: f64 = 1.0 / 3.0;
const MOTION_PROBABILITY: f64 = 1.0 / 4.0;

/// A random sensor bank.
///
/// Temperature and humidity are rounded to one decimal, like a real
/// thermometer display would show them.
pub struct SimulatedSensors {
    rng: StdRng,
}

impl Default for SimulatedSensors {
    fn default() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl SimulatedSensors {
    /// Reproducible readings for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn sample(&mut self) -> SensorSnapshot {
        SensorSnapshot {
            temperature: round_tenth(self.rng.gen_range(TEMPERATURE)),
            humidity: round_tenth(self.rng.gen_range(HUMIDITY)),
            smoke: self.rng.gen_bool(SMOKE_PROBABILITY),
            motion: self.rng.gen_bool(MOTION_PROBABILITY),
        }
    }
}

impl SensorSource for SimulatedSensors {
    fn read(&mut self) -> impl Future<Output = Result<SensorSnapshot, HomeWardenError>> + Send {
        let snapshot = self.sample();
        async move { Ok(snapshot) }
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
