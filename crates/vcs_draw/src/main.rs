#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::too_many_lines, clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, Naming};
use lazy_static::lazy_static;
use semver::Version;
use vcs_engine::{PlayfieldMode, Position, RegisterMode};
use vcs_engine_edit::DrawMode;

mod commands;
mod render;
mod settings;

pub use settings::Settings;

lazy_static! {
    pub static ref VERSION: Version = Version::parse(env!("CARGO_PKG_VERSION")).unwrap();
}

#[derive(Parser, Debug)]
#[command(version, about = "Edit Atari VCS playfields stored as named states", long_about = None)]
pub struct Args {
    /// Directory holding the saved states (overrides settings.toml)
    #[arg(long, global = true, value_name = "DIR")]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new state with one empty playfield on the map
    New {
        name: String,
        /// Playfield height in rows (default from settings)
        #[arg(long)]
        height: Option<usize>,
        /// Replace an existing state
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// List saved states
    List,

    /// Print the palette, the map and the playfields of a state
    Show {
        name: String,
        /// Only show this playfield
        #[arg(long)]
        id: Option<u32>,
    },

    /// Print a playfield as assembler `.byte` lines
    Export {
        name: String,
        #[arg(long)]
        id: u32,
        /// Registers to include, e.g. `0,2`
        #[arg(long, value_delimiter = ',', default_values_t = [0usize, 1, 2])]
        registers: Vec<usize>,
    },

    /// Draw a stroke through the given cells, e.g. `draw lvl --id 1 --mode line 0,0 12,5`
    Draw {
        name: String,
        #[arg(long)]
        id: u32,
        /// Draw mode (default from settings)
        #[arg(long)]
        mode: Option<DrawMode>,
        /// Erase instead of draw
        #[arg(long, default_value_t = false)]
        erase: bool,
        /// Cells visited by the pointer, the first one is where the stroke starts
        #[arg(required = true, value_name = "X,Y", value_parser = parse_point)]
        points: Vec<Position>,
    },

    /// Add an empty playfield to the palette
    Add {
        name: String,
        #[arg(long)]
        height: Option<usize>,
    },

    /// Add a copy of a playfield to the palette
    Copy {
        name: String,
        #[arg(long)]
        id: u32,
    },

    /// Delete a playfield and all its map entries
    Delete {
        name: String,
        #[arg(long)]
        id: u32,
    },

    /// Edit the map of a state
    Map {
        name: String,
        #[command(subcommand)]
        action: MapAction,
    },

    /// Set the mirror mode of a playfield
    SetMode {
        name: String,
        #[arg(long)]
        id: u32,
        mode: PlayfieldMode,
    },

    /// Set the override of one register zone (0 = PF0, 1 = PF1, 2 = PF2)
    SetRegister {
        name: String,
        #[arg(long)]
        id: u32,
        register: usize,
        mode: RegisterMode,
    },

    /// Delete a saved state
    Remove { name: String },

    /// Show the settings file location and values
    Config {
        /// Write the current settings to settings.toml
        #[arg(long, default_value_t = false)]
        write: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MapAction {
    /// Insert a playfield into the map, before `--at` or at the end
    Add {
        #[arg(long)]
        id: u32,
        #[arg(long)]
        at: Option<usize>,
    },
    /// Remove the map entry at an index
    Remove { idx: usize },
    /// Move a map entry
    Move { from: usize, to: usize },
}

fn parse_point(s: &str) -> Result<Position, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse::<i32>().map_err(|err| format!("invalid x in {s:?}: {err}"))?;
    let y = y.trim().parse::<i32>().map_err(|err| format!("invalid y in {s:?}: {err}"))?;
    Ok(Position::new(x, y))
}

fn get_log_dir() -> Option<PathBuf> {
    if let Some(dir) = Settings::config_dir() {
        if !dir.exists() {
            std::fs::create_dir_all(&dir).ok()?;
        }
        return Some(dir);
    }
    None
}

fn main() {
    let args = Args::parse();

    if let Some(log_dir) = get_log_dir() {
        let _logger = Logger::try_with_env_or_str("info")
            .unwrap()
            .log_to_file(FileSpec::default().directory(&log_dir).basename("vcs_draw").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
            .start();
    } else {
        let _logger = Logger::try_with_env_or_str("warn").unwrap().log_to_stderr().start();
    }

    log::info!("Starting vcs_draw {}", *VERSION);

    let settings = Settings::load();
    if let Err(err) = commands::run(args, &settings) {
        log::error!("{err:#}");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
