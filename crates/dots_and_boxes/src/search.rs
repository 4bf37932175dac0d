//! Adversarial move selection: depth-bounded minimax with alpha-beta
//! pruning over cloned board snapshots.

use crate::board::Board;
use crate::segment::Segment;
use crate::types::Side;
use tracing::{debug, instrument};

/// Static evaluation of a position, from the AI's perspective.
///
/// Returns the AI's cumulative score plus a tie-breaking bias: one tenth
/// of the most recently touched box's value when the most recent move did
/// not complete a box, zero when it did. With scores otherwise equal the
/// bias steers play toward lines that leave high-value boxes one segment
/// from completion for the mover to collect.
pub fn evaluate(board: &Board) -> f32 {
    let bias = if board.last_completed() {
        0.0
    } else {
        f32::from(board.last_value()) / 10.0
    };
    board.scores().of(Side::Ai) as f32 + bias
}

/// Picks the best open segment for `side`, searching `ply_limit` plies.
///
/// The AI maximizes and the human minimizes [`evaluate`]. Candidate
/// segments are explored in the open set's fixed order and ties keep the
/// first move discovered, so a given position always yields the same
/// answer. Every explored branch plays on its own clone; the live board
/// is never touched.
///
/// # Panics
///
/// The board must have at least one open segment and `ply_limit` must be
/// positive. Both are caller contracts; violating either means the
/// controller failed to check for game over, so the search panics rather
/// than guessing.
#[instrument(skip(board), fields(open = board.open().len()))]
pub fn select_move(board: &Board, ply_limit: u32, side: Side) -> Segment {
    assert!(!board.is_over(), "select_move requires an open segment");
    assert!(ply_limit > 0, "select_move requires a positive ply limit");

    let (value, best) = minimax(board, ply_limit, side, f32::NEG_INFINITY, f32::INFINITY);
    let segment = best.expect("a non-terminal search yields a move");
    debug!(%segment, value, "search complete");
    segment
}

/// One search node: returns the backed-up value and the move that reaches
/// it, or `None` at a terminal node (depth exhausted or no open segments).
///
/// `alpha` is the best value already guaranteed to the maximizer along
/// this path, `beta` the best guaranteed to the minimizer; both travel as
/// call parameters, never as board state.
fn minimax(
    board: &Board,
    ply: u32,
    to_move: Side,
    mut alpha: f32,
    mut beta: f32,
) -> (f32, Option<Segment>) {
    if ply == 0 || board.is_over() {
        return (evaluate(board), None);
    }

    let maximizing = to_move == Side::Ai;
    let mut best_value = if maximizing {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    };
    let mut best_move = None;
    for &segment in board.open() {
        let mut child = board.clone();
        child
            .apply_move(segment, to_move)
            .expect("open segments are always playable");
        let (value, _) = minimax(&child, ply - 1, to_move.opponent(), alpha, beta);
        if maximizing {
            if value > best_value {
                best_value = value;
                best_move = Some(segment);
            }
            alpha = alpha.max(best_value);
        } else {
            if value < best_value {
                best_value = value;
                best_move = Some(segment);
            }
            beta = beta.min(best_value);
        }
        // Remaining siblings cannot change the decision above this node.
        if beta <= alpha {
            break;
        }
    }
    (best_value, best_move)
}
