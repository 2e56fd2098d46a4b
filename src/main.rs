// Author: Dustin Pilgrim
// License: MIT

mod app;
mod cli;
mod config;
mod core;
mod log;
mod ui;

use clap::Parser;

fn main() {
    let args = cli::Args::parse();

    if let Err(e) = app::run::run(args) {
        eprintln!("tempo: {e}");
        std::process::exit(1);
    }
}
