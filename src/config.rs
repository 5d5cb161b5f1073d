use std::path::PathBuf;

use clap::Parser;
use directories::ProjectDirs;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Parser, Debug)]
#[command(
    name = "assembly-endgame",
    version,
    about = "Guess the word within eight attempts to keep the programming world safe from Assembly!"
)]
pub struct Cli {
    /// Seed for picking secret words, random when omitted
    #[arg(short, long, env = "ENDGAME_SEED")]
    pub seed: Option<u64>,

    /// Play line by line instead of in the full-screen interface
    #[arg(long)]
    pub plain: bool,

    /// Where to write logs
    #[arg(long, env = "ENDGAME_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Mode {
    Tui,
    Plain,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LogTarget {
    /// `required` is false for the per-user default, which may be skipped
    /// when it can't be opened.
    File { path: PathBuf, required: bool },
    Stderr,
    /// The full-screen interface owns the terminal and no log file could
    /// be placed.
    Off,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub seed: Option<u64>,
    pub mode: Mode,
    pub log: LogTarget,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        let mode = if cli.plain { Mode::Plain } else { Mode::Tui };
        let log = match (cli.log_file, mode) {
            (Some(path), _) => LogTarget::File {
                path,
                required: true,
            },
            (None, Mode::Plain) => LogTarget::Stderr,
            (None, Mode::Tui) => match default_log_file() {
                Some(path) => LogTarget::File {
                    path,
                    required: false,
                },
                None => LogTarget::Off,
            },
        };
        Config {
            seed: cli.seed,
            mode,
            log,
        }
    }

    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

fn default_log_file() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "assembly-endgame")?;
    Some(dirs.data_local_dir().join("endgame.log"))
}
