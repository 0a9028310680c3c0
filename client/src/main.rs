mod cli;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use dawnpro_usb::codec;
use dawnpro_usb::dawn::DawnPro;
use log::{info, warn};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

use crate::cli::{Cli, LevelFilter};
use crate::settings::Settings;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    CombinedLogger::init(vec![TermLogger::new(
        match args.log_level {
            LevelFilter::Off => log::LevelFilter::Off,
            LevelFilter::Error => log::LevelFilter::Error,
            LevelFilter::Warn => log::LevelFilter::Warn,
            LevelFilter::Info => log::LevelFilter::Info,
            LevelFilter::Debug => log::LevelFilter::Debug,
            LevelFilter::Trace => log::LevelFilter::Trace,
        },
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .context("Could not configure the logger")?;

    info!("Starting Dawn Utility v{}", VERSION);
    let mut settings = Settings::read(&args.config)?;

    let mut dawn = DawnPro::open().context("Unable to connect to the Dawn Pro")?;

    if args.load_defaults {
        apply_defaults(&mut dawn, &settings);
    }

    if let Some(volume) = args.volume {
        if !dawn.set_volume(volume) {
            warn!("Setting the volume was unsuccessful");
        }
    }
    if let Some(gain) = args.gain {
        if !dawn.set_gain(gain) {
            warn!("Setting the gain was unsuccessful");
        }
    }
    if let Some(led) = args.led {
        if !dawn.set_led_status(led) {
            warn!("Setting the LED status was unsuccessful");
        }
    }
    if let Some(filter) = args.filter {
        if !dawn.set_filter(filter) {
            warn!("Setting the filter was unsuccessful");
        }
    }

    if args.status {
        print_status(&mut dawn);
    }

    if args.save_defaults {
        let cached = dawn.settings();
        settings.defaults.volume = cached.volume;
        settings.defaults.led_status = cached.led_status.clone();
        settings.defaults.gain = cached.gain.clone();
        settings.defaults.filter = cached.filter.clone();
        settings.write(&args.config)?;
        info!("Saved current settings to {}", args.config.to_string_lossy());
    }

    Ok(())
}

fn apply_defaults(dawn: &mut DawnPro, settings: &Settings) {
    let defaults = &settings.defaults;

    if !dawn.set_volume(defaults.volume) {
        warn!("Applying the default volume was unsuccessful");
    }
    if !dawn.set_gain(codec::string_to_gain(&defaults.gain)) {
        warn!("Applying the default gain was unsuccessful");
    }
    if !dawn.set_led_status(codec::string_to_led_status(&defaults.led_status)) {
        warn!("Applying the default LED status was unsuccessful");
    }
    if !dawn.set_filter(codec::string_to_filter(&defaults.filter)) {
        warn!("Applying the default filter was unsuccessful");
    }
}

fn print_status(dawn: &mut DawnPro) {
    // Read authoritatively where possible, degrade to the last-known cache
    // entry when a read fails.
    match dawn.get_volume() {
        Some(volume) => println!("Volume: {}%", volume),
        None => println!("Volume: {}% (cached)", dawn.settings().volume),
    }
    match dawn.get_gain() {
        Some(gain) => println!("Gain: {}", gain),
        None => println!("Gain: {} (cached)", dawn.settings().gain),
    }
    match dawn.get_led_status() {
        Some(status) => println!("LED: {}", status),
        None => println!("LED: {} (cached)", dawn.settings().led_status),
    }
    match dawn.get_filter() {
        Some(filter) => println!("Filter: {}", filter),
        None => println!("Filter: {} (cached)", dawn.settings().filter),
    }
}
