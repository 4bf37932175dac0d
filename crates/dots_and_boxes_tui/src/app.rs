//! Application state and key handling.

use crate::input::{move_cursor, SegmentCursor};
use anyhow::Result;
use crossterm::event::KeyCode;
use dots_and_boxes::{Game, GameError, Phase};
use tracing::debug;

/// Main application state: the live game plus the segment cursor.
pub struct App {
    game: Game,
    cursor: SegmentCursor,
    status: String,
    rows: usize,
    cols: usize,
    ply: u32,
}

impl App {
    /// Starts a fresh game with the configured dimensions and depth.
    pub fn new(rows: usize, cols: usize, ply: u32) -> Result<Self> {
        let game = Game::new(rows, cols, ply)?;
        Ok(Self {
            game,
            cursor: SegmentCursor::new(),
            status: String::from("Your turn. Arrows move, Tab flips, Enter draws."),
            rows,
            cols,
            ply,
        })
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current cursor position.
    pub fn cursor(&self) -> SegmentCursor {
        self.cursor
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Routes a key press to the cursor or the game.
    pub fn on_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('r') => {
                if let Err(e) = self.restart() {
                    self.status = format!("Restart failed: {e}");
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(),
            other => {
                self.cursor = move_cursor(self.cursor, other, self.rows, self.cols);
            }
        }
    }

    /// Plays the segment under the cursor, then lets the AI reply.
    fn submit(&mut self) {
        if self.game.phase() != Phase::AwaitingPlayer {
            return;
        }
        let segment = self.cursor.segment();
        debug!(%segment, "human move submitted");
        match self.game.play_human(segment) {
            Ok(outcome) => {
                self.status = match *outcome.completed() {
                    0 => String::from("Thinking..."),
                    n => format!("You completed {n} box(es)!"),
                };
            }
            Err(GameError::Move(_)) => {
                self.status =
                    String::from("That segment is already drawn. Pick another.");
                return;
            }
            Err(GameError::OutOfTurn) => return,
        }

        if self.game.phase() == Phase::AwaitingAi {
            match self.game.play_ai() {
                Ok((reply, outcome)) => {
                    self.status = match *outcome.completed() {
                        0 => format!("AI drew {reply}. Your turn."),
                        n => format!("AI drew {reply} and completed {n} box(es)."),
                    };
                }
                Err(e) => self.status = format!("AI error: {e}"),
            }
        }

        if self.game.phase() == Phase::GameOver {
            if let Some(result) = self.game.result() {
                self.status = format!("{result}! Press 'r' to restart or 'q' to quit.");
            }
        }
    }

    /// Ends the game early; the standing is reported on current scores.
    pub fn quit_game(&mut self) {
        self.game.quit();
        if let Some(result) = self.game.result() {
            self.status = format!("{result}.");
        }
    }

    /// Starts a new game with the same configuration.
    pub fn restart(&mut self) -> Result<()> {
        debug!("restarting game");
        self.game = Game::new(self.rows, self.cols, self.ply)?;
        self.cursor = SegmentCursor::new();
        self.status = String::from("New game. Your turn.");
        Ok(())
    }
}
