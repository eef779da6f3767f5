//! Tests for move history, time travel, and ignored moves.

use timetravel_tictactoe::{
    GameError, GamePhase, GameState, IgnoreReason, MoveOutcome, MoveRecord, Player, Position,
    Square,
};

#[test]
fn test_history_length_tracks_accepted_moves() {
    let mut game = GameState::new();
    for (n, index) in [4, 0, 8, 2, 6].into_iter().enumerate() {
        assert!(game.activate_index(index).unwrap().is_placed());
        assert_eq!(game.history().len(), n + 2);
        assert_eq!(game.cursor(), n + 1);
    }
}

#[test]
fn test_activating_occupied_cell_twice_changes_state_once() {
    let mut game = GameState::new();
    game.activate_cell(Position::Center);
    let after_first = game.clone();

    game.activate_cell(Position::Center);
    assert_eq!(game, after_first);
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_each_snapshot_differs_by_one_cell() {
    let game = GameState::replay(&[0, 1, 4, 2, 8]).unwrap();
    let history = game.history();

    assert_eq!(history[0].board().occupied_count(), 0);
    assert_eq!(*history[0].last_move(), None);

    for k in 1..history.len() {
        let before = history[k - 1].board();
        let after = history[k].board();
        let changed: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|&pos| before.get(pos) != after.get(pos))
            .collect();
        assert_eq!(changed.len(), 1);

        let record = history[k].last_move().as_ref().expect("move recorded");
        assert_eq!(*record.position(), changed[0]);
        assert_eq!(before.get(changed[0]), Square::Empty);
        assert_eq!(after.get(changed[0]), Square::Occupied(*record.player()));
        assert_eq!(*record.player(), Player::for_move_count(k - 1));
    }
}

#[test]
fn test_jump_then_move_discards_future() {
    let mut game = GameState::replay(&[0, 1, 2, 3, 4]).unwrap();
    assert_eq!(game.history().len(), 6);

    game.jump_to(2).unwrap();
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.next_player(), Player::X);

    let outcome = game.activate_cell(Position::BottomRight);
    assert_eq!(
        outcome,
        MoveOutcome::Placed(MoveRecord::new(Player::X, Position::BottomRight))
    );
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.cursor(), 3);
    assert!(game.current().board().is_empty(Position::TopRight));
}

#[test]
fn test_jump_only_moves_cursor() {
    let mut game = GameState::replay(&[0, 1, 2]).unwrap();
    let history_before = game.history().to_vec();

    game.jump_to(0).unwrap();
    assert_eq!(game.history(), history_before.as_slice());
    assert_eq!(game.next_player(), Player::X);
    game.jump_to(1).unwrap();
    assert_eq!(game.next_player(), Player::O);
    game.jump_to(3).unwrap();
    assert_eq!(game.cursor(), 3);
}

#[test]
fn test_main_diagonal_win() {
    let mut game = GameState::replay(&[0, 1, 4, 2, 8]).unwrap();
    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::Center, Position::BottomRight])
    );
    assert_eq!(game.phase(), GamePhase::Won(Player::X));

    let outcome = game.activate_cell(Position::BottomLeft);
    assert_eq!(
        outcome,
        MoveOutcome::Ignored(IgnoreReason::AlreadyWon(Player::X))
    );
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_drawn_game() {
    // X O X / O X X / O X O
    let game = GameState::replay(&[0, 1, 2, 3, 4, 6, 5, 8, 7]).unwrap();
    assert_eq!(game.history().len(), 10);
    assert_eq!(game.winning_line(), None);
    assert_eq!(game.current().board().occupied_count(), 9);
    assert_eq!(game.phase(), GamePhase::Drawn);
}

#[test]
fn test_drawn_board_ignores_moves_until_jump() {
    let mut game = GameState::replay(&[0, 1, 2, 3, 4, 6, 5, 8, 7]).unwrap();
    assert!(!game.activate_cell(Position::Center).is_placed());

    game.jump_to(8).unwrap();
    assert_eq!(game.phase(), GamePhase::InProgress);
    assert!(game.activate_cell(Position::BottomCenter).is_placed());
    assert_eq!(game.history().len(), 10);
}

#[test]
fn test_out_of_range_indices_are_errors() {
    let mut game = GameState::replay(&[0]).unwrap();
    assert_eq!(
        game.activate_index(42),
        Err(GameError::CellOutOfRange { index: 42 })
    );
    assert_eq!(
        game.jump_to(2),
        Err(GameError::StepOutOfRange { step: 2, len: 2 })
    );
    assert_eq!(game.cursor(), 1);
    assert!(GameState::replay(&[0, 9]).is_err());
}

#[test]
fn test_toggle_does_not_touch_history() {
    let mut game = GameState::replay(&[4, 0]).unwrap();
    let before = game.history().to_vec();
    game.toggle_move_order();
    assert!(!game.move_order_ascending());
    assert_eq!(game.history(), before.as_slice());
    assert_eq!(game.cursor(), 2);
}
