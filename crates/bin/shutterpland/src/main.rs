//! # shutterpland — shutterplan daemon
//!
//! Composition root that wires the virtual host adapter to the scheduling
//! core and runs the timer chains.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Register the simulated base cover with the virtual host
//! - Run the setup flow and the schedule options flow against the host ports
//! - Instantiate the scheduled proxy cover and arm its timer chains
//! - Handle graceful shutdown (SIGINT), cancelling every armed timer
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use shutterplan_adapter_virtual::VirtualHost;
use shutterplan_app::flows::{ScheduleSession, ScheduleStepInput, SetupFlow, SetupInput};
use shutterplan_app::ports::{ConfigStore, RegistryEntry};
use shutterplan_app::proxy_cover::ScheduledCover;
use shutterplan_app::scheduler::CoverScheduler;
use shutterplan_domain::cover::{CoverFeatures, CoverSnapshot, CoverState};
use shutterplan_domain::time::now_local;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Virtual host with the simulated base cover.
    let host = Arc::new(VirtualHost::new());
    let features = if config.virtual_cover.positionable {
        CoverFeatures::OPEN | CoverFeatures::CLOSE | CoverFeatures::SET_POSITION
    } else {
        CoverFeatures::OPEN | CoverFeatures::CLOSE
    };
    let mut snapshot = CoverSnapshot::new(CoverState::Open)
        .with_device_class(config.virtual_cover.device_class.clone())
        .with_features(features);
    if config.virtual_cover.positionable {
        snapshot = snapshot.with_position(100);
    }
    host.register_cover(RegistryEntry::new(config.cover.base_cover.clone()), snapshot);

    // Setup flow: validate the base cover and create the config record.
    let setup = SetupFlow::new(Arc::clone(&host), Arc::clone(&host));
    let created = setup
        .submit(SetupInput::new(
            config.cover.name.clone(),
            config.cover.base_cover.clone(),
        ))
        .await
        .map_err(|err| anyhow::anyhow!("setup failed ({}): {err}", err.code()))?;
    tracing::info!(unique_id = %created.unique_id, name = %created.config.name, "cover configured");

    // Options flow: seed the persisted schedule from the config file.
    let mut session =
        ScheduleSession::open(Arc::clone(&host), created.unique_id.clone()).await?;
    for entry in config.schedule()?.entries() {
        session
            .submit(ScheduleStepInput {
                time: Some(entry.time),
                position: Some(entry.position),
                ..ScheduleStepInput::default()
            })
            .await?;
    }
    session
        .submit(ScheduleStepInput {
            finish: true,
            ..ScheduleStepInput::default()
        })
        .await?;

    // Proxy cover with the persisted schedule.
    let schedule = host.load_schedule(&created.unique_id).await?;
    tracing::info!(schedule = %schedule.render(), "schedule loaded");
    let cover = Arc::new(
        ScheduledCover::new(&created.config, schedule, Arc::clone(&host), Arc::clone(&host))
            .with_links(created.area_id, created.device_id),
    );

    for at in cover.initial_fire_times(now_local()) {
        tracing::info!(cover = %cover.base_cover(), at = %at, "next fire time");
    }

    let mut scheduler = CoverScheduler::start(Arc::clone(&cover));
    tracing::info!(timers = scheduler.timer_count(), "shutterpland running, press ctrl-c to stop");

    tokio::signal::ctrl_c()
        .await
        .context("listening for shutdown signal")?;

    scheduler.shutdown();
    tracing::info!("all timers cancelled, bye");
    Ok(())
}
