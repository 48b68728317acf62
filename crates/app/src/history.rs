//! Reading history: a bounded window of recent temperature and humidity
//! samples, kept for trend rendering.
//!
//! The engine never reads this: device decisions depend on the latest
//! snapshot only.

use std::collections::VecDeque;

use homewarden_domain::sensor::SensorSnapshot;

/// Number of samples kept when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 20;

/// Min / max / mean of one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl SeriesSummary {
    #[allow(clippy::cast_precision_loss)]
    fn of(samples: &VecDeque<f64>) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        Some(Self { min, max, mean })
    }
}

/// Summary of both series over the current window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistorySummary {
    pub temperature: SeriesSummary,
    pub humidity: SeriesSummary,
}

/// Sliding window over the most recent readings, oldest first.
#[derive(Debug, Clone)]
pub struct ReadingHistory {
    capacity: usize,
    temperatures: VecDeque<f64>,
    humidities: VecDeque<f64>,
}

impl Default for ReadingHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ReadingHistory {
    /// Create an empty history holding at most `capacity` samples (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            temperatures: VecDeque::with_capacity(capacity),
            humidities: VecDeque::with_capacity(capacity),
        }
    }

    /// Record a snapshot, evicting the oldest sample when full.
    pub fn push(&mut self, snapshot: &SensorSnapshot) {
        if self.temperatures.len() == self.capacity {
            self.temperatures.pop_front();
            self.humidities.pop_front();
        }
        self.temperatures.push_back(snapshot.temperature);
        self.humidities.push_back(snapshot.humidity);
    }

    pub fn temperatures(&self) -> impl Iterator<Item = f64> + '_ {
        self.temperatures.iter().copied()
    }

    pub fn humidities(&self) -> impl Iterator<Item = f64> + '_ {
        self.humidities.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `None` until the first sample arrives.
    #[must_use]
    pub fn summary(&self) -> Option<HistorySummary> {
        Some(HistorySummary {
            temperature: SeriesSummary::of(&self.temperatures)?,
            humidity: SeriesSummary::of(&self.humidities)?,
        })
    }
}
