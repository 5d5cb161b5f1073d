use std::fs;
use std::io;
use std::path::Path;

use clap::Parser;
use color_eyre::eyre::{Report, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use assembly_endgame::catalog::Catalog;
use config::{Cli, Config, LogTarget, Mode};

mod config;
mod plain;
mod tui;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_cli(Cli::parse());

    match config.mode {
        Mode::Tui => tui::install_hooks()?,
        Mode::Plain => color_eyre::install()?,
    }
    let _guard = setup_logging(&config.log)?;

    let catalog = Catalog::load().map_err(report)?;
    let mut rng = config.rng();
    tracing::info!(
        mode = ?config.mode,
        seed = ?config.seed,
        words = catalog.words().len(),
        "starting"
    );

    match config.mode {
        Mode::Tui => {
            let mut terminal = tui::init()?;
            let app_result = tui::App::new(catalog, rng).run(&mut terminal).await;
            tui::restore()?;
            app_result?;
        }
        Mode::Plain => {
            let stdin = io::stdin();
            plain::run(&catalog, &mut rng, stdin.lock(), io::stdout())?;
        }
    }
    Ok(())
}

/// Keep the whole context chain, not just the outermost message.
fn report(err: anyhow::Error) -> Report {
    Report::msg(format!("{err:#}"))
}

/// Route `tracing` output to the configured target.
///
/// The returned guard flushes the file writer when dropped and has to live
/// until the end of `main`.
fn setup_logging(target: &LogTarget) -> Result<Option<WorkerGuard>> {
    let guard = match target {
        LogTarget::File { path, required } => {
            let (writer, guard) = match open_log_file(path) {
                Ok(opened) => opened,
                Err(err) if !required => {
                    // nothing is listening yet, and the TUI hasn't taken the screen
                    eprintln!("Not logging to {}: {err}", path.display());
                    return Ok(None);
                }
                Err(err) => {
                    return Err(Report::new(err)
                        .wrap_err(format!("Opening log file {}", path.display())))
                }
            };

            let env_filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .init();
            Some(guard)
        }
        LogTarget::Stderr => {
            let env_filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn"));
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
            None
        }
        LogTarget::Off => None,
    };
    if let LogTarget::File { path, .. } = target {
        tracing::info!("Log file: {}", path.display());
    }
    Ok(guard)
}

fn open_log_file(path: &Path) -> io::Result<(NonBlocking, WorkerGuard)> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = dir {
        fs::create_dir_all(dir)?;
    }
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a file", path.display()),
        )
    })?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir.unwrap_or(Path::new(".")))
        .map_err(io::Error::other)?;
    Ok(tracing_appender::non_blocking(appender))
}
