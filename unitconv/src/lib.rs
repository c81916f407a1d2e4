/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::io::Write;

use log::{debug, info};

pub mod args;
pub mod conversion;
pub mod error;
pub mod preset;
pub mod registry;
pub mod report;

pub use args::Args;
pub use conversion::Conversion;
pub use error::{Error, Result};
pub use preset::Preset;
pub use registry::{Registry, RegistryBuilder};
pub use report::Report;

/// Perform the single action requested on the command line and write
/// its output. A missing conversion is reported, not returned as an
/// error.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<Report> {
    let registry = args.preset.registry();
    debug!("using {} unit table", args.preset);

    let report = if args.units {
        Report::listing(registry)
    } else {
        Report::conversion(registry, args.number, &args.input, &args.output)
    };

    if !report.is_found() {
        info!("no conversion from {} to {}", args.input, args.output);
    }

    match args.json {
        true => {
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
        false => writeln!(out, "{}", report)?,
    }

    Ok(report)
}
