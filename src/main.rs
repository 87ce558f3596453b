#![doc = include_str!("../README.md")]

use clap::Parser;
use core::error::Error;
use html_element::read_config;
use log::LevelFilter;
use std::{
    io::{Write, stdout},
    path::PathBuf,
    process::exit,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// A TOML file describing an element.
    file: PathBuf,
    /// Becomes verbose.
    #[arg(long)]
    verbose: bool,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{error}");
        exit(1)
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let Arguments { file, verbose } = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    writeln!(stdout().lock(), "{}", read_config(&file)?.build())?;

    Ok(())
}
