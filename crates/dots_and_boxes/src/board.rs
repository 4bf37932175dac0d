//! Board state: the grid of squares and the open/connected segment sets.

use crate::error::{ConfigError, MoveError};
use crate::segment::{segment_universe, Dot, Segment};
use crate::square::Square;
use crate::types::{Scores, Side};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// What a single move accomplished.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new,
)]
pub struct Outcome {
    /// Boxes newly completed by the move: 0, 1, or 2.
    completed: u8,
    /// Value of the most recently completed box, when any completed.
    value: Option<u8>,
}

/// Full game state for one Dots and Boxes match.
///
/// The board owns every square plus a partition of the fixed segment
/// universe into `open` (still playable) and `connected` (already drawn).
/// A segment crosses from open to connected exactly once, in
/// [`Board::apply_move`], and never returns. Cloning yields a fully
/// independent copy; the search engine clones one board per hypothetical
/// branch so no branch ever sees another's mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    squares: Vec<Square>,
    open: BTreeSet<Segment>,
    connected: BTreeSet<Segment>,
    scores: Scores,
    last_value: u8,
    last_completed: bool,
}

impl Board {
    /// Builds a fresh board of `rows x cols` boxes with random values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDimensions`] when either dimension
    /// is zero.
    pub fn generate(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        Self::generate_with_rng(rows, cols, &mut rand::thread_rng())
    }

    /// Builds a fresh board drawing box values from the given generator.
    ///
    /// Seed the generator to make board values reproducible in tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDimensions`] when either dimension
    /// is zero.
    pub fn generate_with_rng(
        rows: usize,
        cols: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::InvalidDimensions { rows, cols });
        }
        let mut squares = Vec::with_capacity(rows * cols);
        for y in 0..rows {
            for x in 0..cols {
                squares.push(Square::new(Dot::new(x, y), rng.gen_range(1..=5)));
            }
        }
        debug!(rows, cols, boxes = squares.len(), "board generated");
        Ok(Self {
            rows,
            cols,
            squares,
            open: segment_universe(rows, cols),
            connected: BTreeSet::new(),
            scores: Scores::default(),
            last_value: 0,
            last_completed: false,
        })
    }

    /// Draws a segment for the given side.
    ///
    /// The only mutator. Moves the segment from the open set to the
    /// connected set, applies it to every bordering square (at most two),
    /// and claims each square it newly completes for `side`, crediting
    /// that square's value to the side's score. Completing the last side
    /// of two adjacent boxes at once awards both.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotOpen`] when the segment is not currently
    /// open, leaving all state unchanged.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, segment: Segment, side: Side) -> Result<Outcome, MoveError> {
        if !self.open.remove(&segment) {
            return Err(MoveError::NotOpen);
        }
        self.connected.insert(segment);

        let mut completed = 0u8;
        let mut completed_value = None;
        let mut gained = 0u32;
        let mut touched = self.last_value;
        for square in &mut self.squares {
            if !square.contains(&segment) {
                continue;
            }
            let was_complete = square.is_complete();
            square.apply(&segment);
            touched = square.value();
            if square.is_complete() && !was_complete {
                square.claim(side);
                completed += 1;
                completed_value = Some(square.value());
                gained += u32::from(square.value());
            }
        }
        if gained > 0 {
            self.scores.credit(side, gained);
        }
        self.last_value = touched;
        self.last_completed = completed > 0;
        debug!(
            completed,
            human = self.scores.of(Side::Human),
            ai = self.scores.of(Side::Ai),
            remaining = self.open.len(),
            "move applied"
        );
        Ok(Outcome::new(completed, completed_value))
    }

    /// Segments still playable, in their fixed iteration order.
    pub fn open(&self) -> &BTreeSet<Segment> {
        &self.open
    }

    /// Segments already drawn.
    pub fn connected(&self) -> &BTreeSet<Segment> {
        &self.connected
    }

    /// Cumulative scores for both sides.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// The square whose top-left dot is `(x, y)`, if in range.
    pub fn square_at(&self, x: usize, y: usize) -> Option<&Square> {
        if x < self.cols && y < self.rows {
            self.squares.get(y * self.cols + x)
        } else {
            None
        }
    }

    /// Rows of boxes.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Columns of boxes.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value of the box most recently touched by a move, zero before the
    /// first move.
    pub fn last_value(&self) -> u8 {
        self.last_value
    }

    /// Whether the most recent move completed at least one box.
    pub fn last_completed(&self) -> bool {
        self.last_completed
    }

    /// True once no playable segments remain.
    pub fn is_over(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board(rows: usize, cols: usize) -> Board {
        let mut rng = StdRng::seed_from_u64(7);
        Board::generate_with_rng(rows, cols, &mut rng).unwrap()
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            Board::generate(0, 3).unwrap_err(),
            ConfigError::InvalidDimensions { rows: 0, cols: 3 }
        );
        assert!(Board::generate(3, 0).is_err());
    }

    #[test]
    fn test_open_starts_as_full_universe() {
        let board = board(2, 3);
        assert_eq!(*board.open(), segment_universe(2, 3));
        assert!(board.connected().is_empty());
        assert_eq!(board.scores(), Scores::default());
    }

    #[test]
    fn test_move_without_completion_scores_nothing() {
        let mut board = board(2, 2);
        let outcome = board
            .apply_move(Segment::horizontal(0, 0), Side::Human)
            .unwrap();
        assert_eq!(*outcome.completed(), 0);
        assert_eq!(*outcome.value(), None);
        assert_eq!(board.scores(), Scores::default());
        assert!(!board.last_completed());
        assert!(board.last_value() > 0);
    }

    #[test]
    fn test_replayed_segment_is_rejected_unchanged() {
        let mut board = board(2, 2);
        let segment = Segment::vertical(1, 0);
        board.apply_move(segment, Side::Human).unwrap();
        let before = board.clone();
        assert_eq!(
            board.apply_move(segment, Side::Ai).unwrap_err(),
            MoveError::NotOpen
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_completing_a_box_awards_its_value() {
        let mut board = board(1, 1);
        let value = board.square_at(0, 0).unwrap().value();
        let sides = board.square_at(0, 0).unwrap().sides();
        for segment in &sides[..3] {
            board.apply_move(*segment, Side::Human).unwrap();
        }
        let outcome = board.apply_move(sides[3], Side::Ai).unwrap();
        assert_eq!(*outcome.completed(), 1);
        assert_eq!(*outcome.value(), Some(value));
        assert_eq!(board.scores().of(Side::Ai), u32::from(value));
        assert_eq!(board.scores().of(Side::Human), 0);
        assert!(board.last_completed());
        assert!(board.is_over());
    }

    #[test]
    fn test_one_segment_can_complete_two_boxes() {
        // On a 1x2 board the shared vertical is the last side of both
        // boxes once every other segment is drawn.
        let mut board = board(1, 2);
        let shared = Segment::vertical(1, 0);
        let others: Vec<Segment> = board
            .open()
            .iter()
            .copied()
            .filter(|s| *s != shared)
            .collect();
        for segment in others {
            let outcome = board.apply_move(segment, Side::Human).unwrap();
            assert_eq!(*outcome.completed(), 0);
        }
        let total: u32 = board.squares().iter().map(|s| u32::from(s.value())).sum();
        let outcome = board.apply_move(shared, Side::Ai).unwrap();
        assert_eq!(*outcome.completed(), 2);
        assert_eq!(board.scores().of(Side::Ai), total);
        assert!(board.is_over());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = board(2, 2);
        let clone = board.clone();
        board.apply_move(Segment::horizontal(0, 0), Side::Ai).unwrap();
        assert!(clone.open().contains(&Segment::horizontal(0, 0)));
        assert_ne!(board, clone);
    }
}
