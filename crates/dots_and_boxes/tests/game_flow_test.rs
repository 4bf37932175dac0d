//! End-to-end controller flow and state serialization.

use dots_and_boxes::{Board, Game, GameResult, Phase, Side};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_game(rows: usize, cols: usize, ply: u32, seed: u64) -> Game {
    let mut rng = StdRng::seed_from_u64(seed);
    let board = Board::generate_with_rng(rows, cols, &mut rng).unwrap();
    Game::from_board(board, ply)
}

#[test]
fn test_human_vs_ai_runs_to_completion() {
    let mut game = seeded_game(2, 2, 2, 77);
    while game.phase() != Phase::GameOver {
        match game.phase() {
            Phase::AwaitingPlayer => {
                let segment = *game.board().open().iter().next().unwrap();
                game.play_human(segment).unwrap();
            }
            Phase::AwaitingAi => {
                let (segment, _) = game.play_ai().unwrap();
                assert!(game.board().connected().contains(&segment));
            }
            Phase::GameOver => unreachable!(),
        }
    }
    assert!(game.board().is_over());

    let scores = game.board().scores();
    let expected = match scores.leader() {
        Some(Side::Human) => GameResult::Human,
        Some(Side::Ai) => GameResult::Ai,
        None => GameResult::Draw,
    };
    assert_eq!(game.result(), Some(expected));
}

#[test]
fn test_quit_mid_game_reports_current_standing() {
    let mut game = seeded_game(2, 2, 1, 5);
    let segment = *game.board().open().iter().next().unwrap();
    game.play_human(segment).unwrap();
    game.play_ai().unwrap();

    game.quit();
    assert_eq!(game.phase(), Phase::GameOver);
    assert!(game.result().is_some());
}

#[test]
fn test_board_serde_round_trip() {
    let mut game = seeded_game(2, 3, 1, 23);
    let segment = *game.board().open().iter().next().unwrap();
    game.play_human(segment).unwrap();
    game.play_ai().unwrap();

    let json = serde_json::to_string(game.board()).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(*game.board(), restored);
}

#[test]
fn test_game_serde_round_trip_preserves_phase() {
    let mut game = seeded_game(2, 2, 3, 41);
    let segment = *game.board().open().iter().next().unwrap();
    game.play_human(segment).unwrap();
    assert_eq!(game.phase(), Phase::AwaitingAi);

    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.phase(), Phase::AwaitingAi);
    assert_eq!(restored.ply_limit(), 3);
    assert_eq!(*restored.board(), *game.board());
}
