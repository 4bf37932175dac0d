//! Game controller: alternates turns between the human and the search
//! engine and reports the terminal result.

use crate::board::{Board, Outcome};
use crate::error::{ConfigError, GameError};
use crate::search;
use crate::segment::Segment;
use crate::types::Side;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Phase of the controller's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to pick a segment.
    AwaitingPlayer,
    /// Waiting for the search engine to reply.
    AwaitingAi,
    /// No segments remain, or the human quit.
    GameOver,
}

/// Final standing reported once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum GameResult {
    /// The human outscored the AI.
    #[strum(serialize = "Human wins")]
    Human,
    /// The AI outscored the human.
    #[strum(serialize = "AI wins")]
    Ai,
    /// Scores are equal.
    Draw,
}

/// One match of Dots and Boxes against the computer.
///
/// Turns alternate strictly: completing a box does not grant an extra
/// turn. The human moves first. The controller owns the only live board;
/// the search engine works on clones and never touches it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    ply_limit: u32,
    phase: Phase,
}

impl Game {
    /// Starts a new game on a `rows x cols` board.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDimensions`] for a zero dimension
    /// and [`ConfigError::InvalidPlyLimit`] for a zero search depth.
    #[instrument]
    pub fn new(rows: usize, cols: usize, ply_limit: u32) -> Result<Self, ConfigError> {
        if ply_limit == 0 {
            return Err(ConfigError::InvalidPlyLimit);
        }
        let board = Board::generate(rows, cols)?;
        info!(rows, cols, ply_limit, "game started");
        Ok(Self::from_board(board, ply_limit))
    }

    /// Resumes play over an existing board, human to move.
    pub fn from_board(board: Board, ply_limit: u32) -> Self {
        let phase = if board.is_over() {
            Phase::GameOver
        } else {
            Phase::AwaitingPlayer
        };
        Self {
            board,
            ply_limit,
            phase,
        }
    }

    /// Applies the human's chosen segment.
    ///
    /// On success the turn passes to the AI, or the game ends if no
    /// segments remain.
    ///
    /// # Errors
    ///
    /// [`GameError::Move`] when the segment is not open — the caller
    /// reports it and prompts again, the turn is not forfeited.
    /// [`GameError::OutOfTurn`] when it is not the human's turn.
    #[instrument(skip(self))]
    pub fn play_human(&mut self, segment: Segment) -> Result<Outcome, GameError> {
        if self.phase != Phase::AwaitingPlayer {
            return Err(GameError::OutOfTurn);
        }
        let outcome = self.board.apply_move(segment, Side::Human)?;
        self.advance(Phase::AwaitingAi);
        Ok(outcome)
    }

    /// Runs the search engine and applies its chosen segment.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfTurn`] when it is not the AI's turn. The
    /// controller only searches while open segments remain, so the
    /// search precondition holds by construction.
    #[instrument(skip(self))]
    pub fn play_ai(&mut self) -> Result<(Segment, Outcome), GameError> {
        if self.phase != Phase::AwaitingAi {
            return Err(GameError::OutOfTurn);
        }
        let segment = search::select_move(&self.board, self.ply_limit, Side::Ai);
        let outcome = self
            .board
            .apply_move(segment, Side::Ai)
            .expect("search always returns an open segment");
        self.advance(Phase::AwaitingPlayer);
        Ok((segment, outcome))
    }

    /// Ends the game immediately; the result stands on current scores.
    pub fn quit(&mut self) {
        info!("game quit");
        self.phase = Phase::GameOver;
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Configured search depth.
    pub fn ply_limit(&self) -> u32 {
        self.ply_limit
    }

    /// The final standing, once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        if self.phase != Phase::GameOver {
            return None;
        }
        Some(match self.board.scores().leader() {
            Some(Side::Human) => GameResult::Human,
            Some(Side::Ai) => GameResult::Ai,
            None => GameResult::Draw,
        })
    }

    fn advance(&mut self, next: Phase) {
        self.phase = if self.board.is_over() {
            info!(result = ?self.board.scores(), "game over");
            Phase::GameOver
        } else {
            next
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game(rows: usize, cols: usize, ply: u32) -> Game {
        let mut rng = StdRng::seed_from_u64(21);
        let board = Board::generate_with_rng(rows, cols, &mut rng).unwrap();
        Game::from_board(board, ply)
    }

    #[test]
    fn test_rejects_zero_ply() {
        assert_eq!(Game::new(2, 2, 0).unwrap_err(), ConfigError::InvalidPlyLimit);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            Game::new(0, 2, 2).unwrap_err(),
            ConfigError::InvalidDimensions { .. }
        ));
    }

    #[test]
    fn test_out_of_turn_calls_are_rejected() {
        let mut game = game(1, 1, 1);
        assert_eq!(game.play_ai().unwrap_err(), GameError::OutOfTurn);

        let segment = *game.board().open().iter().next().unwrap();
        game.play_human(segment).unwrap();
        let next = *game.board().open().iter().next().unwrap();
        assert_eq!(game.play_human(next).unwrap_err(), GameError::OutOfTurn);
    }

    #[test]
    fn test_rejected_move_keeps_the_turn() {
        let mut game = game(2, 2, 1);
        let segment = *game.board().open().iter().next().unwrap();
        game.play_human(segment).unwrap();
        game.play_ai().unwrap();

        // Replaying a connected segment is reported, not fatal.
        let err = game.play_human(segment).unwrap_err();
        assert!(matches!(err, GameError::Move(_)));
        assert_eq!(game.phase(), Phase::AwaitingPlayer);
    }

    #[test]
    fn test_alternates_to_game_over() {
        let mut game = game(1, 1, 2);
        while game.phase() != Phase::GameOver {
            match game.phase() {
                Phase::AwaitingPlayer => {
                    let segment = *game.board().open().iter().next().unwrap();
                    game.play_human(segment).unwrap();
                }
                Phase::AwaitingAi => {
                    game.play_ai().unwrap();
                }
                Phase::GameOver => unreachable!(),
            }
        }
        assert!(game.board().is_over());
        assert!(game.result().is_some());
        // Once over, the controller refuses to search at all.
        assert_eq!(game.play_ai().unwrap_err(), GameError::OutOfTurn);
    }

    #[test]
    fn test_quit_reports_on_current_scores() {
        let mut game = game(2, 2, 1);
        assert_eq!(game.result(), None);
        game.quit();
        assert_eq!(game.result(), Some(GameResult::Draw));
    }

    #[test]
    fn test_result_matches_score_leader() {
        let mut game = game(1, 1, 1);
        while game.phase() != Phase::GameOver {
            match game.phase() {
                Phase::AwaitingPlayer => {
                    let segment = *game.board().open().iter().next().unwrap();
                    game.play_human(segment).unwrap();
                }
                _ => {
                    game.play_ai().unwrap();
                }
            }
        }
        let scores = game.board().scores();
        let expected = match scores.leader() {
            Some(Side::Human) => GameResult::Human,
            Some(Side::Ai) => GameResult::Ai,
            None => GameResult::Draw,
        };
        assert_eq!(game.result(), Some(expected));
    }
}
