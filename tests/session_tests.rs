//! Game session tests - move orchestration, warm-up gate, end of game

use tui_lifewar::core::{Board, GameSession, PlacementError, Population};
use tui_lifewar::types::{Cell, Outcome, Player, WARMUP_ROUNDS};

#[test]
fn test_first_move_on_3x3_reports_raw_winner_but_game_goes_on() {
    let mut game = GameSession::new(3);

    let raw = game.apply_move(1, 1).unwrap();

    assert_eq!(game.board().get(1, 1), Cell::Player1);
    // Player 2 has no cells, so the raw check names Player 1...
    assert_eq!(raw, Outcome::Winner(Player::Player1));
    // ...but the warm-up gate keeps the game open.
    assert!(game.round() < WARMUP_ROUNDS);
    assert_eq!(game.final_outcome(), Outcome::Undecided);
    assert!(!game.is_over());
}

#[test]
fn test_failed_moves_change_nothing() {
    let mut game = GameSession::new(4);
    game.apply_move(0, 0).unwrap();
    let board = game.board().clone();

    for _ in 0..3 {
        assert!(matches!(
            game.apply_move(0, 0),
            Err(PlacementError::Occupied { .. })
        ));
        assert!(matches!(
            game.apply_move(-1, 2),
            Err(PlacementError::OutOfBounds { .. })
        ));
    }

    assert_eq!(game.round(), 1);
    assert_eq!(game.current_player(), Player::Player2);
    assert_eq!(game.board(), &board);

    // A corrected move still works.
    game.apply_move(3, 3).unwrap();
    assert_eq!(game.board().get(3, 3), Cell::Player2);
}

#[test]
fn test_automaton_starts_on_fifth_move() {
    let mut game = GameSession::new(5);
    // Player 1 builds an L in the corner; Player 2 plays far away.
    game.apply_move(0, 0).unwrap();
    game.apply_move(4, 4).unwrap();
    game.apply_move(0, 1).unwrap();
    game.apply_move(4, 3).unwrap();

    // Four placement-only rounds: exactly the placed pieces are on the board.
    assert_eq!(game.round(), WARMUP_ROUNDS);
    assert_eq!(
        game.board().to_pattern(),
        ["OO...", ".....", ".....", ".....", "...xx"]
    );

    // Fifth move completes the L, then the automaton runs: (1, 1) is born
    // and the lone Player 2 pair starves.
    let raw = game.apply_move(1, 0).unwrap();
    assert_eq!(
        game.board().to_pattern(),
        ["OO...", "OO...", ".....", ".....", "....."]
    );
    assert_eq!(raw, Outcome::Winner(Player::Player1));
    assert_eq!(game.final_outcome(), Outcome::Winner(Player::Player1));
    assert!(game.is_over());
}

#[test]
fn test_double_elimination_goes_to_player2() {
    let mut game = GameSession::new(5);
    for (row, col) in [(0, 0), (4, 4), (0, 4), (4, 0), (2, 2)] {
        game.apply_move(row, col).unwrap();
    }
    assert_eq!(game.board(), &Board::new(5));
    assert_eq!(game.final_outcome(), Outcome::Winner(Player::Player2));
}

#[test]
fn test_player1_eliminated_goes_to_player2() {
    let mut game = GameSession::new(7);
    // Two Player 2 pieces and one Player 1 piece surround (1, 1), which is
    // born to Player 2. Every placed piece is isolated and starves.
    for (row, col) in [(2, 1), (0, 0), (6, 6), (0, 2)] {
        game.apply_move(row, col).unwrap();
    }
    let raw = game.apply_move(6, 0).unwrap();

    assert_eq!(
        game.board().population(),
        Population {
            player1: 0,
            player2: 1
        }
    );
    assert_eq!(game.board().get(1, 1), Cell::Player2);
    assert_eq!(raw, Outcome::Winner(Player::Player2));
    assert_eq!(game.final_outcome(), Outcome::Winner(Player::Player2));
}

#[test]
fn test_board_is_replaced_after_warmup_not_before() {
    let mut game = GameSession::new(7);
    let mut expected = Board::new(7);
    let moves = [(0, 0), (6, 6), (0, 6), (6, 0)];
    let mut player = Player::Player1;
    for (row, col) in moves {
        game.apply_move(row, col).unwrap();
        expected.place(row, col, player).unwrap();
        player = player.opponent();
        assert_eq!(game.board(), &expected);
    }

    let before_step = {
        let mut b = expected.clone();
        b.place(3, 3, Player::Player1).unwrap();
        b
    };
    game.apply_move(3, 3).unwrap();
    assert_eq!(game.board(), &before_step.step());
}

#[test]
fn test_turn_and_round_progress() {
    let mut game = GameSession::new(9);
    let mut expected_player = Player::Player1;
    for i in 0..9 {
        assert_eq!(game.current_player(), expected_player);
        assert_eq!(game.round(), i as u32);
        game.apply_move(i, (i * 2) % 9).unwrap();
        expected_player = expected_player.opponent();
    }
}
