//! Minimax as ground truth: game value and self-consistency of play.

use tictactoe_td::{
    minimax::{DRAW, Minimax},
    tictactoe::{BoardState, GameStatus, GameTree, Player, Position},
};

#[test]
fn empty_board_is_a_draw_for_every_assignment() {
    let search = Minimax::new();
    for player in [Player::X, Player::O] {
        for maximizing in [true, false] {
            assert_eq!(
                search.evaluate(&BoardState::new(), player, maximizing),
                DRAW,
                "player {player}, maximizing {maximizing}"
            );
        }
    }
}

/// Play minimax against itself from `position` to the end and score the
/// result for `player`.
fn play_out(search: &Minimax, mut position: Position, player: Player) -> i32 {
    while !position.is_terminal() {
        let (action, _) = search
            .choose_move(&position.board, position.to_move)
            .expect("in-progress positions have a move");
        position = position.play(action).unwrap();
    }
    match position.status() {
        GameStatus::Win(winner) if winner == player => 1,
        GameStatus::Win(_) => -1,
        _ => 0,
    }
}

#[test]
fn minimax_self_play_realizes_the_minimax_value() {
    let search = Minimax::new();
    let tree = GameTree::build(Player::X);
    let mut checked = 0;

    for mover in [Player::X, Player::O] {
        for position in tree.decision_positions(mover) {
            if position.board.occupied_count() < 4 {
                continue;
            }
            let value = search.evaluate(&position.board, mover, true);
            assert_eq!(
                play_out(&search, position, mover),
                value,
                "mover {mover} on\n{}",
                position.board
            );
            checked += 1;
        }
    }

    assert!(checked > 4_000);
}

#[test]
fn scenario_takes_the_winning_corner() {
    let board = BoardState::from_codes([1, 1, 0, 0, 2, 0, 0, 0, 2]);
    let (action, value) = Minimax::new().choose_move(&board, Player::X).unwrap();
    assert_eq!((action.x, action.y), (2, 0));
    assert_eq!(value, 1);
}
