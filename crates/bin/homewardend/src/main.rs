//! # homewardend: homewarden daemon
//!
//! Composition root that wires the sensor adapter, the automation engine and
//! the console surface together, then runs the polling loop.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Build the zone's device registry, engine and sensor source
//! - Print journal events and the status board to stdout
//! - Poll the sensors on a fixed interval and accept manual overrides on stdin
//! - Handle graceful shutdown (Ctrl-C, `quit`, or the configured tick limit)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no decision logic belongs here.

mod command;
mod config;
mod render;

use std::ops::ControlFlow;
use std::sync::Arc;

use homewarden_adapter_virtual::SimulatedSensors;
use homewarden_app::automation_engine::AutomationEngine;
use homewarden_app::event_bus::InProcessEventBus;
use homewarden_app::history::ReadingHistory;
use homewarden_app::services::controller_service::HomeController;
use homewarden_domain::registry::DeviceRegistry;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tracing_subscriber::EnvFilter;

use crate::command::{Command, HELP};
use crate::config::Config;

type Controller = HomeController<SimulatedSensors, Arc<InProcessEventBus>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    // Zone
    let registry = DeviceRegistry::with_cameras(config.cameras.clone())?;
    let engine = AutomationEngine::new(config.thresholds);
    let sensors = match config.simulation.seed {
        Some(seed) => SimulatedSensors::seeded(seed),
        None => SimulatedSensors::default(),
    };

    // Journal
    let event_bus = Arc::new(InProcessEventBus::default());
    let mut journal = BroadcastStream::new(event_bus.subscribe());
    let printer = tokio::spawn(async move {
        while let Some(item) = journal.next().await {
            match item {
                Ok(event) => println!("{}", render::event_line(&event)),
                Err(err) => tracing::warn!(error = %err, "journal printer fell behind"),
            }
        }
    });

    let mut controller = HomeController::new(registry, engine, sensors, Arc::clone(&event_bus))
        .with_history(ReadingHistory::with_capacity(config.controller.history_size));

    tracing::info!(
        zone = %controller.zone_id(),
        interval_secs = config.controller.poll_interval_secs,
        "homewardend started, type `help` for commands"
    );

    let mut interval = tokio::time::interval(config.poll_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut commands = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut ticks: u64 = 0;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match controller.tick().await {
                    Ok(_) => {
                        ticks += 1;
                        if let Some(summary) = controller.history().summary() {
                            tracing::debug!(
                                samples = controller.history().len(),
                                mean_temperature = summary.temperature.mean,
                                mean_humidity = summary.humidity.mean,
                                "reading trend"
                            );
                        }
                    }
                    Err(err) => tracing::error!(error = %err, "polling tick failed"),
                }
                if config.controller.max_ticks.is_some_and(|max| ticks >= max) {
                    tracing::info!(ticks, "tick limit reached");
                    break;
                }
            }
            read = commands.next_line(), if stdin_open => {
                let Some(line) = console_line(read, &mut stdin_open) else {
                    continue;
                };
                if run_command(&mut controller, &line).await.is_break() {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupt received");
                break;
            }
        }
    }

    // Dropping every sender ends the journal stream once it is drained.
    drop(controller);
    drop(event_bus);
    printer.await?;
    tracing::info!(ticks, "homewardend stopped");

    Ok(())
}

/// Unwrap one stdin read. End of input or a read error closes the console
/// while polling carries on.
fn console_line(read: std::io::Result<Option<String>>, stdin_open: &mut bool) -> Option<String> {
    match read {
        Ok(Some(line)) => Some(line),
        Ok(None) => {
            tracing::info!("console input closed");
            *stdin_open = false;
            None
        }
        Err(err) => {
            tracing::warn!(error = %err, "console input failed, manual overrides disabled");
            *stdin_open = false;
            None
        }
    }
}

/// Execute one console line; `Break` asks the daemon to stop.
async fn run_command(controller: &mut Controller, line: &str) -> ControlFlow<()> {
    if line.trim().is_empty() {
        return ControlFlow::Continue(());
    }
    match line.parse::<Command>() {
        Ok(Command::Toggle(device)) => {
            if let Err(err) = controller.toggle(&device).await {
                tracing::warn!(device = %device, error = %err, "manual override rejected");
            }
        }
        Ok(Command::Status) => {
            for status in render::status_board(controller.registry()) {
                println!("{status}");
            }
        }
        Ok(Command::Help) => println!("{HELP}"),
        Ok(Command::Quit) => return ControlFlow::Break(()),
        Err(err) => eprintln!("{err}"),
    }
    ControlFlow::Continue(())
}
