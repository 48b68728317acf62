//! Scripted sensors: replay a fixed list of snapshots.

use std::future::Future;

use homewarden_app::ports::SensorSource;
use homewarden_domain::error::{HomeWardenError, SensorError};
use homewarden_domain::sensor::SensorSnapshot;

/// Replays readings in order; fails with [`SensorError::Exhausted`] once
/// they run out, unless built with [`looping`](Self::looping).
#[derive(Debug, Clone)]
pub struct ScriptedSensors {
    readings: Vec<SensorSnapshot>,
    cursor: usize,
    looping: bool,
}

impl ScriptedSensors {
    #[must_use]
    pub fn new(readings: impl IntoIterator<Item = SensorSnapshot>) -> Self {
        Self {
            readings: readings.into_iter().collect(),
            cursor: 0,
            looping: false,
        }
    }

    /// Start over from the first reading instead of failing at the end.
    #[must_use]
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    /// Readings left before exhaustion (`None` when looping).
    #[must_use]
    pub fn remaining(&self) -> Option<usize> {
        (!self.looping).then(|| self.readings.len().saturating_sub(self.cursor))
    }

    fn next_reading(&mut self) -> Result<SensorSnapshot, SensorError> {
        if self.looping && !self.readings.is_empty() {
            let snapshot = self.readings[self.cursor % self.readings.len()];
            self.cursor += 1;
            return Ok(snapshot);
        }
        let snapshot = self
            .readings
            .get(self.cursor)
            .copied()
            .ok_or(SensorError::Exhausted {
                readings: self.cursor,
            })?;
        self.cursor += 1;
        Ok(snapshot)
    }
}

impl SensorSource for ScriptedSensors {
    fn read(&mut self) -> impl Future<Output = Result<SensorSnapshot, HomeWardenError>> + Send {
        let next = self.next_reading().map_err(HomeWardenError::from);
        async move { next }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings() -> Vec<SensorSnapshot> {
        vec![
            SensorSnapshot::new(18.0, 60.0, false, true),
            SensorSnapshot::new(30.0, 40.0, true, false),
        ]
    }

    #[tokio::test]
    async fn should_replay_readings_in_order() {
        let mut sensors = ScriptedSensors::new(readings());
        assert_eq!(sensors.read().await.unwrap(), readings()[0]);
        assert_eq!(sensors.read().await.unwrap(), readings()[1]);
        assert_eq!(sensors.remaining(), Some(0));
    }

    #[tokio::test]
    async fn should_fail_when_exhausted() {
        let mut sensors = ScriptedSensors::new(readings());
        sensors.read().await.unwrap();
        sensors.read().await.unwrap();

        let result = sensors.read().await;
        assert!(matches!(
            result,
            Err(HomeWardenError::Sensor(SensorError::Exhausted { readings: 2 }))
        ));
    }

    #[tokio::test]
    async fn should_start_over_when_looping() {
        let mut sensors = ScriptedSensors::new(readings()).looping();
        for expected in readings().iter().cycle().take(5) {
            assert_eq!(&sensors.read().await.unwrap(), expected);
        }
        assert_eq!(sensors.remaining(), None);
    }

    #[tokio::test]
    async fn should_fail_immediately_when_empty_even_if_looping() {
        let mut sensors = ScriptedSensors::new(Vec::new()).looping();
        assert!(sensors.read().await.is_err());
    }
}
