//! Exact counts for the enumerated game tree.

use tictactoe_td::tictactoe::{GameOutcome, GameTree, Player};

#[test]
fn full_tree_has_known_node_and_leaf_counts() {
    let tree = GameTree::build(Player::X);
    assert_eq!(tree.node_count(), 549_946);
    assert_eq!(tree.leaf_count(), 255_168);
}

#[test]
fn x_opening_reaches_known_number_of_boards() {
    let tree = GameTree::build(Player::X);
    assert_eq!(tree.distinct_boards().len(), 5_478);
}

#[test]
fn o_opening_tree_mirrors_x_opening() {
    let tree = GameTree::build(Player::O);
    assert_eq!(tree.node_count(), 549_946);
    assert_eq!(tree.leaf_count(), 255_168);
    assert!(tree.nodes().iter().all(|node| node.position.first_player == Player::O));
}

#[test]
fn leaves_are_exactly_the_terminal_positions() {
    let tree = GameTree::build(Player::X);
    let mut x_wins = 0;
    let mut o_wins = 0;
    let mut draws = 0;

    for node in tree.nodes() {
        assert_eq!(node.is_leaf(), node.position.is_terminal());
        if let Some(outcome) = GameOutcome::from_status(node.position.status()) {
            match outcome {
                GameOutcome::Win(Player::X) => x_wins += 1,
                GameOutcome::Win(Player::O) => o_wins += 1,
                GameOutcome::Draw => draws += 1,
            }
        }
    }

    assert_eq!(x_wins, 131_184);
    assert_eq!(o_wins, 77_904);
    assert_eq!(draws, 46_080);
}
