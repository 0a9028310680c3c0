use clap::{Parser, ValueEnum};
use dawnpro_types::{DacFilter, GainMode, LedStatus};
use directories::ProjectDirs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(about, version, author)]
pub struct Cli {
    /// Minimum log level to print out
    #[clap(long, value_enum, default_value = "info")]
    pub log_level: LevelFilter,

    /// Location of the settings file on disk
    #[clap(long, default_value_os_t = default_config_location())]
    pub config: PathBuf,

    /// Set the output volume (0-100%)
    #[clap(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub volume: Option<u8>,

    /// Set the case LED behaviour
    #[clap(long, value_enum)]
    pub led: Option<LedStatus>,

    /// Set the headphone gain
    #[clap(long, value_enum)]
    pub gain: Option<GainMode>,

    /// Set the DAC reconstruction filter
    #[clap(long, value_enum)]
    pub filter: Option<DacFilter>,

    /// Push the defaults from the settings file to the device first
    #[clap(long)]
    pub load_defaults: bool,

    /// Store the device's current settings as the new defaults
    #[clap(long)]
    pub save_defaults: bool,

    /// Print the current device settings
    #[clap(long)]
    pub status: bool,
}

fn default_config_location() -> PathBuf {
    let proj_dirs = ProjectDirs::from("org", "dawn-on-linux", "Dawn-Utility")
        .expect("Couldn't find project directory");

    proj_dirs.config_dir().join("settings.json")
}

#[repr(usize)]
#[derive(ValueEnum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum LevelFilter {
    /// A level lower than all log levels.
    Off,
    /// Corresponds to the `Error` log level.
    Error,
    /// Corresponds to the `Warn` log level.
    Warn,
    /// Corresponds to the `Info` log level.
    Info,
    /// Corresponds to the `Debug` log level.
    Debug,
    /// Corresponds to the `Trace` log level.
    Trace,
}
