//! Event: an immutable, timestamped journal entry.
//!
//! The engine only produces plain narration strings. Callers wrap them in
//! events, stamping the time and the zone they belong to, before handing
//! them to whatever renders or stores the journal.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::{EventId, ZoneId};
use crate::time::{Timestamp, now};

/// What produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The raw readings of a polling tick.
    SensorCheck,
    /// A narration line emitted by the automation engine.
    Automation,
    /// A device flipped by hand, outside the rule engine.
    ManualOverride,
    /// Smoke present in the latest readings.
    SmokeAlert,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SensorCheck => f.write_str("sensor_check"),
            Self::Automation => f.write_str("automation"),
            Self::ManualOverride => f.write_str("manual_override"),
            Self::SmokeAlert => f.write_str("smoke_alert"),
        }
    }
}

/// A journal entry for one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub zone_id: ZoneId,
    pub kind: EventKind,
    pub message: String,
    pub timestamp: Timestamp,
}

impl Event {
    /// Create an event stamped with the current time.
    #[must_use]
    pub fn new(zone_id: ZoneId, kind: EventKind, message: impl Into<String>) -> Self {
        Self {
            id: EventId::new(),
            zone_id,
            kind,
            message: message.into(),
            timestamp: now(),
        }
    }
}
