/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use clap::{ArgAction, Parser};

use crate::Preset;

#[derive(Parser, Clone, Debug)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Unit Converter
///
/// Converts a value between two units, or lists the accepted units.
pub struct Args {
    /// number to convert
    #[clap(short = 'n', default_value_t = 1.0, allow_negative_numbers = true)]
    pub number: f64,
    /// input unit of measure
    #[clap(short = 'i', default_value = "f")]
    pub input: String,
    /// output unit of measure
    #[clap(short = 'o', default_value = "c")]
    pub output: String,
    /// show accepted units
    #[clap(short = 'u')]
    pub units: bool,
    /// the unit table to use
    #[clap(long, value_enum, default_value_t = Preset::Area)]
    pub preset: Preset,
    /// print the result as json
    #[clap(short = 'j', long)]
    pub json: bool,
    /// increase verbosity. Every additional v will increase the verbosity by one stage.
    /// log messages are sent to stderr. turned off by default.
    #[clap(short = 'v', action = ArgAction::Count)]
    pub verbosity: u8,
}

impl Args {
    pub fn log_level(&self) -> simplelog::LevelFilter {
        match self.verbosity {
            0 => simplelog::LevelFilter::Off,
            1 => simplelog::LevelFilter::Error,
            2 => simplelog::LevelFilter::Warn,
            3 => simplelog::LevelFilter::Info,
            4 => simplelog::LevelFilter::Debug,
            5.. => simplelog::LevelFilter::Trace,
        }
    }

    pub fn init_logger(&self) {
        if let Err(e) = simplelog::TermLogger::init(
            self.log_level(),
            simplelog::ConfigBuilder::new().build(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        ) {
            eprintln!("Warning: failed to initialize logging: {}", e);
        }
    }
}
