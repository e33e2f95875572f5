//! pitclock - a terminal countdown timer for multi-phase cook cycles.
//!
//! Run with: pitclock [-c|--config <FILE>]

mod alert;
mod app;
mod config;
mod constants;
mod editor;
mod event;
mod status;
mod timer;
mod trigger;
mod ui;

use std::env;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing_subscriber::EnvFilter;

use crate::app::{App, Cmd, Msg};
use crate::config::ConfigStore;
use crate::constants::{LOG_FILE, STATUS_FILE, TICK_INTERVAL};

/// Parses command line arguments.
///
/// Supports:
/// - `-c <FILE>` or `--config <FILE>` to override the config file path
/// - `-h` or `--help` to show usage
///
/// Returns Some(path) if a config path override was specified.
fn parse_args() -> Option<PathBuf> {
    let args: Vec<String> = env::args().collect();

    let mut args_iter = args.iter().skip(1); // Skip program name

    while let Some(arg) = args_iter.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                if let Some(path) = args_iter.next() {
                    return Some(PathBuf::from(path));
                } else {
                    eprintln!("Error: --config requires a FILE argument");
                    std::process::exit(1);
                }
            }
            "-h" | "--help" => {
                println!("pitclock - terminal countdown timer for multi-phase cook cycles");
                println!();
                println!("Usage: pitclock [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <FILE>  Use FILE instead of the default config path");
                println!("  -h, --help           Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Error: Unknown argument '{}'", other);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
        }
    }

    None
}

/// Routes tracing output to a log file next to the config; the terminal
/// itself runs in raw alt-screen mode and cannot carry diagnostics.
/// Logging is best-effort: init failures leave the app without a subscriber.
fn init_logging(dir: &Path) {
    if std::fs::create_dir_all(dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
}

/// Entry point for the application.
///
/// Loads (or creates) the config, then runs the dispatch loop until quit.
/// A Config Store that cannot be created or loaded is fatal.
#[tokio::main]
async fn main() -> Result<()> {
    let store = match parse_args() {
        Some(path) => ConfigStore::at(path),
        None => ConfigStore::default_location()?,
    };
    if let Some(dir) = store.path().parent() {
        init_logging(dir);
    }
    let config = store
        .load_or_create()
        .with_context(|| format!("failed to load config from {}", store.path().display()))?;

    let home = directories::BaseDirs::new()
        .context("could not determine home directory")?
        .home_dir()
        .to_path_buf();

    // Initialize the terminal
    let terminal = ratatui::init();

    let result = run_app(terminal, App::new(config), store, home).await;

    // Restore the terminal to its original state
    ratatui::restore();

    result
}

/// Interprets scheduled commands outside the pure state machine.
///
/// Background work (ticks, trigger polls, alerts) is spawned as independent
/// tasks that each re-enter the dispatch loop with exactly one message;
/// config and status writes happen inline so this loop stays the files'
/// single writer.
struct Effects {
    tx: UnboundedSender<Msg>,
    store: ConfigStore,
    status_path: PathBuf,
    marker_dir: PathBuf,
}

impl Effects {
    fn run(&self, cmd: Cmd) {
        match cmd {
            Cmd::ScheduleTick => {
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(TICK_INTERVAL).await;
                    let _ = tx.send(Msg::Tick(Instant::now()));
                });
            }
            Cmd::SchedulePoll => {
                let tx = self.tx.clone();
                let dir = self.marker_dir.clone();
                tokio::spawn(async move {
                    if let Some(profile) = trigger::poll_once(&dir) {
                        let _ = tx.send(Msg::Trigger(profile));
                    }
                });
            }
            Cmd::PlayAlert { phase, temp } => {
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    alert::play_alert(phase, temp).await;
                    let _ = tx.send(Msg::AlertDone);
                });
            }
            Cmd::PublishStatus(record) => {
                if let Err(err) = status::publish(&self.status_path, &record) {
                    tracing::warn!(%err, "failed to write status file");
                }
            }
            Cmd::SaveConfig(config) => {
                if let Err(err) = self.store.save(&config) {
                    tracing::warn!(%err, "failed to save config");
                }
            }
            // Handled by the dispatch loop.
            Cmd::Quit => {}
        }
    }
}

/// Main dispatch loop.
///
/// Processes exactly one message at a time: apply it to the state machine,
/// run the scheduled commands, redraw, wait for the next message. This loop
/// is the sole mutator of application state.
async fn run_app(
    mut terminal: ratatui::DefaultTerminal,
    mut app: App,
    store: ConfigStore,
    home: PathBuf,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    let shutdown = Arc::new(AtomicBool::new(false));
    event::spawn_input_pump(tx.clone(), shutdown.clone());

    let effects = Effects {
        tx: tx.clone(),
        store,
        status_path: home.join(STATUS_FILE),
        marker_dir: home,
    };
    for cmd in App::init_cmds() {
        effects.run(cmd);
    }

    terminal
        .draw(|frame| ui::draw(frame, &app))
        .context("failed to draw UI")?;

    'dispatch: while let Some(msg) = rx.recv().await {
        let (next, cmds) = app.update(msg);
        app = next;

        for cmd in cmds {
            if matches!(cmd, Cmd::Quit) {
                break 'dispatch;
            }
            effects.run(cmd);
        }

        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("failed to draw UI")?;
    }

    // Stops the input pump; in-flight alert tasks die with the process.
    shutdown.store(true, Ordering::Relaxed);
    Ok(())
}
