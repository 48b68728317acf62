//! # homewarden-app
//!
//! Application layer: the automation engine, use-cases and **port
//! definitions** (traits).
//!
//! ## Responsibilities
//! - Run the **Automation Engine**: sensor snapshot + registry → next device
//!   states and a narration of the transitions
//! - Define **port traits** that adapters must implement:
//!   - `SensorSource`: produces one snapshot per polling tick
//!   - `EventPublisher`: receives timestamped journal events
//! - Provide **in-process infrastructure** (event bus, reading history) that
//!   doesn't need IO
//! - Orchestrate one zone per `HomeController`: polling ticks and manual
//!   overrides
//!
//! ## Dependency rule
//! Depends on `homewarden-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod automation_engine;
pub mod event_bus;
pub mod history;
pub mod ports;
pub mod services;
