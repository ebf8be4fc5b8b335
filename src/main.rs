use anyhow::Result;
use clap::Parser;
use guessterm::cli::Cli;
use guessterm::core::game::{RngSecret, SecretSource};
use guessterm::game_runner::GameRunner;
use guessterm::GameEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr and stay silent unless RUST_LOG is set; the
    // alternate screen owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let secrets: Box<dyn SecretSource> = match cli.seed {
        Some(seed) => Box::new(RngSecret::new(StdRng::seed_from_u64(seed))),
        None => Box::new(RngSecret::new(rand::rng())),
    };
    let engine = GameEngine::new(cli.difficulty, secrets);

    let terminal = ratatui::init();
    let result = GameRunner::new(engine).run(terminal);
    ratatui::restore();
    result
}
