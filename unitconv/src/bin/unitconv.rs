/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use clap::Parser;
use std::io;
use unitconv::Args;

fn main() {
    let args = Args::parse();
    args.init_logger();

    if let Err(err) = unitconv::run(&args, &mut io::stdout().lock()) {
        eprintln!("Error: {}", err);
    }
}
