//! End-to-end scenarios for the move controller.

use strictly_oxo::{
    Axis, Controller, EditOutcome, GameConfig, GameState, GameStatus, MoveError, Player,
};

const X: Player = Player::new('X');
const O: Player = Player::new('O');

fn standard_game() -> Controller {
    GameConfig::default().build().expect("default config is valid")
}

fn send(game: &mut Controller, commands: &[&str]) {
    for command in commands {
        game.handle_command(command)
            .unwrap_or_else(|e| panic!("command {command} rejected: {e}"));
    }
}

#[test]
fn test_basic_move_taking() {
    let mut game = standard_game();
    let first = game
        .state()
        .player_by_number(game.state().current_player_index())
        .expect("first player exists");
    send(&mut game, &["a1"]);
    assert_eq!(game.state().cell_owner(0, 0), Ok(Some(first)));
}

#[test]
fn test_basic_win() {
    let mut game = standard_game();
    send(&mut game, &["a1", "b1", "a2", "b2", "a3"]);
    assert_eq!(game.state().winner(), Some(X));
    assert!(!game.state().is_drawn());
}

#[test]
fn test_invalid_length() {
    let mut game = standard_game();
    assert_eq!(
        game.handle_command("abc123"),
        Err(MoveError::InvalidIdentifierLength(6))
    );
    assert_eq!(
        game.handle_command("aa1"),
        Err(MoveError::InvalidIdentifierLength(3))
    );
}

#[test]
fn test_invalid_characters() {
    let mut game = standard_game();
    assert_eq!(
        game.handle_command("1a"),
        Err(MoveError::InvalidIdentifierCharacter(Axis::Row, '1'))
    );
    assert_eq!(
        game.handle_command("Ą1"),
        Err(MoveError::InvalidIdentifierCharacter(Axis::Row, 'Ą'))
    );
    assert_eq!(
        game.handle_command("a?"),
        Err(MoveError::InvalidIdentifierCharacter(Axis::Column, '?'))
    );
}

#[test]
fn test_outside_cell_range() {
    let mut game = standard_game();
    assert_eq!(
        game.handle_command("g2"),
        Err(MoveError::OutsideCellRange(Axis::Row, 6))
    );
    assert_eq!(
        game.handle_command("a9"),
        Err(MoveError::OutsideCellRange(Axis::Column, 8))
    );
}

#[test]
fn test_rejected_command_changes_nothing() {
    let mut game = standard_game();
    send(&mut game, &["a1"]);
    let before = game.state().clone();
    for bad in ["a1", "zz", "", "d1", "A1"] {
        assert!(game.handle_command(bad).is_err(), "{bad} should be rejected");
        assert_eq!(game.state(), &before);
    }
    send(&mut game, &["b1"]);
    assert_eq!(game.state().cell_owner(1, 0), Ok(Some(O)));
}

#[test]
fn test_three_players_rotate() {
    let mut game = GameConfig::default()
        .with_players(vec!['X', 'O', 'Z'])
        .build()
        .expect("valid config");
    assert_eq!(game.state().player_count(), 3);
    send(&mut game, &["a1", "a2", "a3", "b1", "b2", "b3", "c1"]);

    let state = game.state();
    let owner = |row, col| state.cell_owner(row, col).expect("in bounds");
    let player = |n| Some(state.player_by_number(n).expect("in roster"));
    assert_eq!(owner(0, 0), player(0));
    assert_eq!(owner(0, 1), player(1));
    assert_eq!(owner(0, 2), player(2));
    assert_eq!(owner(1, 0), player(0));
    assert_eq!(owner(1, 1), player(1));
    assert_eq!(owner(1, 2), player(2));
    assert_eq!(owner(2, 0), player(0));
    // a1, b1, c1 is a column for the first player.
    assert_eq!(state.winner(), Some(X));
}

#[test]
fn test_draw_with_raised_threshold() {
    let mut game = standard_game();
    game.state_mut().set_win_threshold(4);
    send(&mut game, &["a1", "b1", "a2", "b2", "c1"]);
    assert_eq!(game.decrease_win_threshold(), EditOutcome::Refused);
    send(&mut game, &["a3", "c2", "c3", "b3"]);
    assert_eq!(game.state().win_threshold(), 4);
    assert!(game.state().is_drawn());
    assert_eq!(game.state().winner(), None);
}

#[test]
fn test_draw_on_standard_board() {
    let mut game = standard_game();
    send(
        &mut game,
        &["a1", "a2", "a3", "b2", "b1", "b3", "c2", "c1", "c3"],
    );
    assert!(game.state().is_drawn());
    assert_eq!(game.state().winner(), None);
    assert!(game.check_for_win());
}

#[test]
fn test_grow_board_then_win_reset_and_refuse_removal() {
    let mut game = standard_game();
    send(&mut game, &["b1", "a1"]);
    assert!(game.add_row().is_applied());
    assert!(game.add_column().is_applied());
    send(&mut game, &["c1", "b2", "d1"]);
    assert!(!game.state().is_drawn());
    assert_eq!(game.state().winner(), Some(X));

    game.reset();
    assert!(game.is_board_empty());
    send(&mut game, &["a1", "a4", "d1"]);
    assert_eq!(game.remove_column(), EditOutcome::Refused);
    assert_eq!(game.remove_row(), EditOutcome::Refused);
    assert_eq!(game.state().column_count(), 4);
    assert_eq!(game.state().row_count(), 4);
}

#[test]
fn test_single_cell_board_draws_immediately() {
    let mut game = standard_game();
    for _ in 0..2 {
        assert!(game.remove_row().is_applied());
        assert!(game.remove_column().is_applied());
    }
    assert_eq!(game.remove_row(), EditOutcome::Refused);
    assert_eq!(game.remove_column(), EditOutcome::Refused);
    assert_eq!((game.state().row_count(), game.state().column_count()), (1, 1));

    send(&mut game, &["a1"]);
    assert!(game.state().is_drawn());
    assert_eq!(game.state().current_player_index(), 0);
}

#[test]
fn test_long_diagonal_on_large_board() {
    let mut game = standard_game();
    for _ in 0..2 {
        game.add_row();
        game.add_column();
    }
    game.increase_win_threshold();
    send(&mut game, &["a1", "a2", "b2"]);
    game.increase_win_threshold();
    send(&mut game, &["a3", "c3", "d1", "d4", "d5", "e5"]);
    assert_eq!(game.state().win_threshold(), 5);
    assert!(game.check_for_win());
    assert_eq!(game.state().status(), GameStatus::Won(X));
}

#[test]
fn test_decrease_threshold_mid_game_is_refused() {
    let mut game = standard_game();
    send(&mut game, &["a1", "b2"]);
    assert_eq!(game.decrease_win_threshold(), EditOutcome::Refused);
    assert_eq!(game.state().win_threshold(), 3);
}

#[test]
fn test_board_growth_caps_at_nine() {
    let mut game = standard_game();
    let applied = (0..10).filter(|_| game.add_row().is_applied()).count();
    assert_eq!(applied, 6);
    assert_eq!(game.state().row_count(), 9);
    send(&mut game, &["i1"]);
    assert_eq!(game.state().cell_owner(8, 0), Ok(Some(X)));
}

#[test]
fn test_growing_a_drawn_board_reopens_play() {
    let mut game = standard_game();
    send(
        &mut game,
        &["a1", "a2", "a3", "b2", "b1", "b3", "c2", "c1", "c3"],
    );
    assert!(game.state().is_drawn());
    assert!(game.add_row().is_applied());
    assert!(!game.state().is_drawn());
    // The drawing move left the turn with X.
    send(&mut game, &["d1"]);
    assert_eq!(game.state().cell_owner(3, 0), Ok(Some(X)));
}

#[test]
fn test_controller_from_hand_built_state() {
    let mut state = GameState::new(4, 4, 4);
    state.add_player(O).expect("new player");
    state.add_player(X).expect("new player");
    let mut game = Controller::new(state).expect("has players");
    send(&mut game, &["d4", "a1", "c3", "b1", "b2", "c1", "a4"]);
    assert_eq!(game.state().winner(), None);
    assert_eq!(game.state().current_player_index(), 1);
    send(&mut game, &["d1"]);
    assert_eq!(game.state().winner(), Some(X));
}
