use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub const ABOUT: &str = concat!(
    "tictactoe ",
    env!("CARGO_PKG_VERSION"),
    " - a simple terminal tic tac toe game\n\n",
    "Pick X or O, then enter a row and a column (both starting at 1) for each move.\n",
    "The computer answers with a random free cell. X always moves first.\n",
);

#[derive(Debug, Parser)]
#[command(name = "tictactoe", version, about = "A simple terminal tic tac toe game")]
pub struct Config {
    /// Seed the computer's moves, for a repeatable game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Don't clear the screen between turns
    #[arg(long)]
    pub no_clear: bool,

    /// Log level for messages on stderr
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Also write debug logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print information about the game and exit
    #[arg(long)]
    pub about: bool,
}

impl Config {
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
}
