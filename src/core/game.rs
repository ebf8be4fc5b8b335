/// Data model for the number-guessing game: difficulty presets, the session
/// state record, and the secret-number source abstraction.
use clap::ValueEnum;
use rand::Rng;
use rand_core::RngCore;

/// Inclusive bounds of the secret number.
pub const SECRET_MIN: u8 = 1;
pub const SECRET_MAX: u8 = 100;

/// Longest guess the input buffer will hold. Anything past this could never
/// be a number in range anyway.
pub const MAX_INPUT_LEN: usize = 8;

pub const MSG_PROMPT: &str = "Make your guess!";
pub const MSG_INVALID: &str = "Please enter a valid number between 1 and 100.";
pub const MSG_TOO_LOW: &str = "Too low! Try a higher number.";
pub const MSG_TOO_HIGH: &str = "Too high! Try a lower number.";

/// Difficulty presets. Each preset fixes the attempt budget for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn max_attempts(self) -> u8 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 7,
            Difficulty::Hard => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy (10 attempts)",
            Difficulty::Medium => "Medium (7 attempts)",
            Difficulty::Hard => "Hard (5 attempts)",
        }
    }

    /// Next preset in display order, wrapping around.
    pub fn next(self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    /// Previous preset in display order, wrapping around.
    pub fn prev(self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}

/// Where one game stands. `Won` and `Lost` are terminal until a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// The one mutable session record. Owned by `GameEngine`; everyone else
/// reads it through a shared reference.
#[derive(Debug, Clone)]
pub struct GameState {
    pub secret: u8,
    pub difficulty: Difficulty,
    pub attempts_left: u8,
    pub status: GameStatus,
    /// Most recent feedback line. Kept as state so it survives redraws.
    pub message: String,
    /// Raw, unvalidated guess text being composed.
    pub input: String,
}

impl GameState {
    /// A freshly started game: full attempt budget, prompt message, empty
    /// input buffer.
    pub fn fresh(secret: u8, difficulty: Difficulty) -> Self {
        Self {
            secret,
            difficulty,
            attempts_left: difficulty.max_attempts(),
            status: GameStatus::InProgress,
            message: MSG_PROMPT.to_string(),
            input: String::new(),
        }
    }

    /// A game is fresh while no attempt has been consumed since the last
    /// reset or difficulty change. Difficulty may only change while fresh.
    pub fn is_fresh(&self) -> bool {
        self.status == GameStatus::InProgress
            && self.attempts_left == self.difficulty.max_attempts()
    }
}

/// Source of secret numbers, uniform over 1..=100. Swappable so tests can
/// pin the secret.
pub trait SecretSource {
    fn next_secret(&mut self) -> u8;
}

/// Production source over any rng: the thread rng normally, a seeded
/// `StdRng` when the player asked for a reproducible run.
pub struct RngSecret<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RngSecret<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> SecretSource for RngSecret<R> {
    fn next_secret(&mut self) -> u8 {
        self.rng.random_range(SECRET_MIN..=SECRET_MAX)
    }
}
