use clap::Parser;

use crate::core::game::Difficulty;

#[derive(Parser)]
#[command(name = "guessterm")]
#[command(about = "🎯 Guess the secret number (1-100) in your terminal")]
#[command(version)]
pub struct Cli {
    /// Starting difficulty (changeable in-game until the first guess)
    #[arg(short, long, value_enum, default_value_t = Difficulty::Easy)]
    pub difficulty: Difficulty,

    /// Seed the secret-number generator for a reproducible game
    #[arg(short, long)]
    pub seed: Option<u64>,
}
