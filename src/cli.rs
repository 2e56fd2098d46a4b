// Author: Dustin Pilgrim
// License: MIT

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tempo",
    version = env!("CARGO_PKG_VERSION"),
    about = "Tempo multi-stopwatch"
)]
pub struct Args {
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    #[arg(short, long, action)]
    pub verbose: bool,
}
