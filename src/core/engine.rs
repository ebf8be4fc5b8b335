use tracing::{debug, info};

use crate::core::game::{
    Difficulty, GameState, GameStatus, SecretSource, MAX_INPUT_LEN, MSG_INVALID, MSG_TOO_HIGH,
    MSG_TOO_LOW, SECRET_MAX, SECRET_MIN,
};

/// Owns the one `GameState` and enforces every rule of the game: attempt
/// budgets, the difficulty freshness policy, guess validation, and the
/// terminal Won/Lost states.
pub struct GameEngine {
    state: GameState,
    secrets: Box<dyn SecretSource>,
}

impl GameEngine {
    pub fn new(difficulty: Difficulty, mut secrets: Box<dyn SecretSource>) -> Self {
        let secret = secrets.next_secret();
        debug_assert!((SECRET_MIN..=SECRET_MAX).contains(&secret));
        Self {
            state: GameState::fresh(secret, difficulty),
            secrets,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Start a new game, replacing the whole session record. Difficulty
    /// defaults to the currently selected one. Always succeeds.
    pub fn start_or_reset(&mut self, difficulty: Option<Difficulty>) {
        let difficulty = difficulty.unwrap_or(self.state.difficulty);
        let secret = self.secrets.next_secret();
        debug_assert!((SECRET_MIN..=SECRET_MAX).contains(&secret));
        self.state = GameState::fresh(secret, difficulty);
        info!(?difficulty, "game reset");
    }

    /// Change difficulty. Rejected (returns `false`, nothing changes) once
    /// an attempt has been consumed or the game is over; the caller is free
    /// to ignore the result since the engine guarantees the no-op. While
    /// the game is fresh the attempt budget is re-aligned in place and the
    /// secret is kept.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if !self.state.is_fresh() {
            debug!(?difficulty, "difficulty change rejected mid-game");
            return false;
        }
        self.state.difficulty = difficulty;
        self.state.attempts_left = difficulty.max_attempts();
        true
    }

    /// Append one character of guess text. Printable ASCII only, bounded,
    /// and ignored once the game is over (the input control is hidden).
    pub fn push_input(&mut self, c: char) {
        if self.state.status.is_over() {
            return;
        }
        if self.state.input.len() < MAX_INPUT_LEN && c.is_ascii_graphic() {
            self.state.input.push(c);
        }
    }

    pub fn pop_input(&mut self) {
        self.state.input.pop();
    }

    /// Evaluate the pending input as a guess.
    ///
    /// Text that does not parse as an integer in 1..=100 is a validation
    /// rejection: the message changes, no attempt is consumed, and the input
    /// is kept for editing. A valid guess clears the input and either wins,
    /// loses (budget exhausted), or yields directional feedback.
    pub fn submit_guess(&mut self) {
        if self.state.status.is_over() {
            return;
        }

        let guess = match self.state.input.parse::<i64>() {
            Ok(n) if (i64::from(SECRET_MIN)..=i64::from(SECRET_MAX)).contains(&n) => n as u8,
            _ => {
                debug!(input = %self.state.input, "guess rejected as invalid");
                self.state.message = MSG_INVALID.to_string();
                return;
            }
        };
        self.state.input.clear();

        if guess == self.state.secret {
            self.state.status = GameStatus::Won;
            self.state.message = format!(
                "Correct! The number was {}. You win!",
                self.state.secret
            );
            info!(secret = self.state.secret, "player won");
            return;
        }

        self.state.attempts_left -= 1;
        if self.state.attempts_left == 0 {
            self.state.status = GameStatus::Lost;
            self.state.message = format!(
                "Out of attempts! The number was {}. You lose.",
                self.state.secret
            );
            info!(secret = self.state.secret, "player lost");
            return;
        }

        self.state.message = if guess < self.state.secret {
            MSG_TOO_LOW.to_string()
        } else {
            MSG_TOO_HIGH.to_string()
        };
        debug!(
            guess,
            attempts_left = self.state.attempts_left,
            "wrong guess"
        );
    }
}
