//! Headless battle client.
//!
//! Plays one match between two computer-controlled fighters in real time and
//! prints the combat log to stderr through `tracing`.
mod config;

use std::fs;

use anyhow::{Context, Result};
use config::CliConfig;
use game_content::ContentFactory;
use game_core::{CombatEvent, PlayerSlot};
use runtime::{
    Event, MatchEvent, RandomIntentProvider, Runtime, RuntimeConfig, TickEvent, Topic,
};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    // Dropping the guard flushes the file writer
    let _guard = setup_logging(&config)?;

    let content = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };
    let game_config = content.load_config().context("loading game config")?;
    let roster = content.load_roster().context("loading roster")?;

    let (one, two) = match config.seed {
        Some(seed) => (
            RandomIntentProvider::new(seed),
            RandomIntentProvider::new(seed.wrapping_add(1)),
        ),
        None => (
            RandomIntentProvider::from_entropy(),
            RandomIntentProvider::from_entropy(),
        ),
    };

    let mut runtime = Runtime::builder()
        .config(RuntimeConfig {
            game_config,
            max_ticks: config.max_ticks,
            ..RuntimeConfig::default()
        })
        .roster(roster)
        .fighters(config.player_one.clone(), config.player_two.clone())
        .provider(PlayerSlot::One, one)
        .provider(PlayerSlot::Two, two)
        .build()
        .await?;

    let handle = runtime.handle();
    let reporters: Vec<_> = [Topic::Match, Topic::Combat, Topic::Notification]
        .into_iter()
        .map(|topic| tokio::spawn(log_events(handle.subscribe(topic))))
        .collect();
    drop(handle);

    let result = runtime.run().await;
    runtime.shutdown().await?;
    // The bus closes once the runtime and its handles are gone
    for reporter in reporters {
        let _ = reporter.await;
    }

    let outcome = result?;
    println!("{outcome}");
    Ok(())
}

async fn log_events(mut events: broadcast::Receiver<Event>) {
    loop {
        match events.recv().await {
            Ok(event) => report(&event),
            Err(RecvError::Lagged(skipped)) => warn!(skipped, "event log lagged"),
            Err(RecvError::Closed) => break,
        }
    }
}

fn report(event: &Event) {
    match event {
        Event::Match(MatchEvent::Started {
            player_one,
            player_two,
        }) => info!("{player_one} vs {player_two}"),
        Event::Match(MatchEvent::Finished {
            tick,
            elapsed_ms,
            outcome,
        }) => info!(tick, elapsed_ms, "{outcome}"),
        Event::Combat(TickEvent { tick, event, .. }) => match event {
            CombatEvent::DamageApplied {
                attacker,
                slot,
                damage,
                remaining_hp,
            } => info!(tick, "{attacker} hits with {slot} for {damage} ({remaining_hp} hp left)"),
            CombatEvent::Evolved {
                player,
                evolution_name,
                ..
            } => info!(tick, "{player} evolves into {evolution_name}"),
            CombatEvent::ProjectileNeutralized { player, slot } => {
                info!(tick, "{player}'s {slot} was neutralized")
            }
            other => debug!(tick, event = ?other),
        },
        Event::Notification(TickEvent { tick, event, .. }) => debug!(tick, event = ?event),
    }
}

/// Logs to stderr, and to `LOG_DIR/battle.log` when configured.
fn setup_logging(config: &CliConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating log directory {}", dir.display()))?;
            let file_appender = tracing_appender::rolling::never(dir, "battle.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = &config.log_dir {
        info!("Log file: {}/battle.log", dir.display());
    }

    Ok(guard)
}
