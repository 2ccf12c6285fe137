mod artifact_name;
mod commands;
mod compose;
mod data;
mod discover;
mod export;
mod icon;
mod layout;
mod loader;
mod options;
mod raster_size;
mod rasterizer;
mod svg_size;

use std::process;

use env_logger::Env;
use structopt::StructOpt;

use crate::options::{Options, Subcommand};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let options = Options::from_args();

    match run(options) {
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    }
}

fn run(options: Options) -> anyhow::Result<()> {
    match options.command {
        Subcommand::Build(build_options) => commands::build(options.global, build_options)?,
        Subcommand::Inspect(inspect_options) => {
            commands::inspect(options.global, inspect_options)?
        }
    }

    Ok(())
}
