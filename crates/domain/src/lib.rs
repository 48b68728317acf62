//! # homewarden-domain
//!
//! Pure domain model for the homewarden home-environment controller.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (heater, window panels, exhaust fan, smoke alarm, cameras)
//! - Define the **Device Registry** that owns every device of one zone
//! - Define **Sensor snapshots** (one set of readings per evaluation tick)
//! - Define **Evaluation results** and the rule **Thresholds**
//! - Define **Events** (timestamped journal entries rendered by callers)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod evaluation;
pub mod event;
pub mod registry;
pub mod sensor;
pub mod thresholds;
