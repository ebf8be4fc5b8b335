/// The interactive loop: draw the current state, block until the player
/// presses a key, translate that key into one engine operation, repeat.
/// Everything is synchronous - the game has no ticks and no remote peers,
/// so there is nothing to multiplex.
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tracing::debug;

use crate::core::engine::GameEngine;
use crate::ui;

pub struct GameRunner {
    engine: GameEngine,
}

impl GameRunner {
    pub fn new(engine: GameEngine) -> Self {
        Self { engine }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| ui::render(frame, self.engine.state()))?;

            if let Event::Key(key) = event::read()? {
                // Windows terminals also report key releases.
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if self.handle_key(key) {
                    debug!("player quit");
                    break;
                }
            }
        }
        Ok(())
    }

    /// Returns true when the player asked to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Esc
            || (key.modifiers.contains(KeyModifiers::CONTROL)
                && key.code == KeyCode::Char('c'))
        {
            return true;
        }

        let game_over = self.engine.state().status.is_over();
        match key.code {
            // The restart control exists exactly when the game is over.
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter if game_over => {
                self.engine.start_or_reset(None);
            }
            KeyCode::Enter => self.engine.submit_guess(),
            KeyCode::Backspace => self.engine.pop_input(),
            // Engine-gated: a no-op once an attempt has been consumed.
            KeyCode::Left => {
                let _ = self.engine.set_difficulty(self.engine.state().difficulty.prev());
            }
            KeyCode::Right => {
                let _ = self.engine.set_difficulty(self.engine.state().difficulty.next());
            }
            KeyCode::Char(c) => self.engine.push_input(c),
            _ => {}
        }
        false
    }
}
