pub mod core {
	pub mod engine;
	pub mod game;
}

pub mod cli;
pub mod game_runner;
pub mod ui;

// Re-export for convenience
pub use crate::core::engine::GameEngine;
pub use crate::core::game::{Difficulty, GameState, GameStatus, SecretSource};
