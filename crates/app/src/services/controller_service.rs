//! Home controller: one zone's polling tick and manual overrides.
//!
//! The controller owns the zone's [`DeviceRegistry`] exclusively. Every
//! mutation, whether from the rule engine or a manual override, goes through
//! `&mut self`, so callers serialise access per zone by construction.

use homewarden_domain::device::DeviceKey;
use homewarden_domain::error::HomeWardenError;
use homewarden_domain::evaluation::EvaluationResult;
use homewarden_domain::event::{Event, EventKind};
use homewarden_domain::id::ZoneId;
use homewarden_domain::registry::DeviceRegistry;

use crate::automation_engine::AutomationEngine;
use crate::history::ReadingHistory;
use crate::ports::{EventPublisher, SensorSource};

const SMOKE_ALERT: &str = "ALERT: Smoke Detected!";

/// Controller for a single household zone.
pub struct HomeController<S, P> {
    zone_id: ZoneId,
    registry: DeviceRegistry,
    engine: AutomationEngine,
    history: ReadingHistory,
    source: S,
    publisher: P,
}

impl<S, P> HomeController<S, P>
where
    S: SensorSource,
    P: EventPublisher,
{
    /// Create a controller for a new zone.
    pub fn new(
        registry: DeviceRegistry,
        engine: AutomationEngine,
        source: S,
        publisher: P,
    ) -> Self {
        Self {
            zone_id: ZoneId::new(),
            registry,
            engine,
            history: ReadingHistory::default(),
            source,
            publisher,
        }
    }

    /// Replace the reading history, e.g. to change its window size.
    #[must_use]
    pub fn with_history(mut self, history: ReadingHistory) -> Self {
        self.history = history;
        self
    }

    #[must_use]
    pub fn zone_id(&self) -> ZoneId {
        self.zone_id
    }

    #[must_use]
    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    #[must_use]
    pub fn history(&self) -> &ReadingHistory {
        &self.history
    }

    /// Run one polling tick: read, record, evaluate, journal.
    ///
    /// Journal order is the sensor check first, then the smoke alert (if
    /// any), then every engine narration line in rule order.
    ///
    /// # Errors
    ///
    /// Returns [`HomeWardenError::Sensor`] when the sensor source fails; the
    /// registry is left untouched in that case.
    pub async fn tick(&mut self) -> Result<EvaluationResult, HomeWardenError> {
        let snapshot = self.source.read().await?;
        self.history.push(&snapshot);
        self.emit(EventKind::SensorCheck, format!("Sensor Check: {snapshot}"))
            .await;

        let result = self.engine.evaluate(snapshot, &mut self.registry);

        if result.smoke_alert {
            tracing::warn!(zone = %self.zone_id, "smoke detected");
            self.emit(EventKind::SmokeAlert, SMOKE_ALERT.to_string())
                .await;
        }
        for line in &result.logs {
            self.emit(EventKind::Automation, line.clone()).await;
        }

        Ok(result)
    }

    /// Flip a device by hand, outside the rule engine, and return its new state.
    ///
    /// The next [`tick`](Self::tick) may undo the change if a rule covers
    /// the device.
    ///
    /// # Errors
    ///
    /// Returns [`HomeWardenError::UnknownDevice`] when `key` names a camera
    /// this zone does not have.
    pub async fn toggle(&mut self, key: &DeviceKey) -> Result<bool, HomeWardenError> {
        let on = self.registry.toggle(key)?;
        tracing::info!(zone = %self.zone_id, device = %key, on, "manual override");
        self.emit(EventKind::ManualOverride, manual_override_message(key, on))
            .await;
        Ok(on)
    }

    async fn emit(&self, kind: EventKind, message: String) {
        let event = Event::new(self.zone_id, kind, message);
        if let Err(err) = self.publisher.publish(event).await {
            tracing::warn!(zone = %self.zone_id, error = %err, "failed to publish event");
        }
    }
}

fn manual_override_message(key: &DeviceKey, on: bool) -> String {
    match key {
        DeviceKey::WindowPanels => {
            format!("Manual: Window Panels {}", if on { "Opened" } else { "Closed" })
        }
        other => format!("Manual: {other} turned {}", if on { "ON" } else { "OFF" }),
    }
}
