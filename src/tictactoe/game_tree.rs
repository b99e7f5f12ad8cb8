//! Explicit game-tree enumeration
//!
//! The tree is an ordinary value built on demand by whoever needs it (a test
//! harness, an analysis command). Nothing is precomputed at start-up.

use std::collections::HashSet;

use super::{BoardState, Player, Position};

/// One node of the enumerated tree
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub position: Position,
    /// Indices into [`GameTree::nodes`]
    pub children: Vec<usize>,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Every line of play from the empty board, one node per move sequence.
///
/// Transpositions are not merged: two move orders reaching the same board are
/// two distinct nodes. Expansion stops at wins and draws.
#[derive(Debug, Clone)]
pub struct GameTree {
    nodes: Vec<TreeNode>,
}

impl GameTree {
    /// Enumerate the full tree for games opened by `first_player`
    pub fn build(first_player: Player) -> Self {
        let mut nodes = vec![TreeNode {
            position: Position::new(first_player),
            children: Vec::new(),
        }];
        let mut to_expand = vec![0usize];

        while let Some(index) = to_expand.pop() {
            let position = nodes[index].position;
            let mut children = Vec::new();
            for action in position.legal_actions() {
                let child = position
                    .play(action)
                    .expect("legal actions always apply during enumeration");
                let child_index = nodes.len();
                nodes.push(TreeNode {
                    position: child,
                    children: Vec::new(),
                });
                children.push(child_index);
                to_expand.push(child_index);
            }
            nodes[index].children = children;
        }

        Self { nodes }
    }

    pub fn root(&self) -> &TreeNode {
        &self.nodes[0]
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of finished games (terminal nodes)
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// Distinct boards appearing anywhere in the tree
    pub fn distinct_boards(&self) -> HashSet<BoardState> {
        self.nodes.iter().map(|node| node.position.board).collect()
    }

    /// Distinct non-terminal positions where `player` is to move
    pub fn decision_positions(&self, player: Player) -> Vec<Position> {
        let mut seen = HashSet::new();
        self.nodes
            .iter()
            .filter(|node| !node.is_leaf() && node.position.to_move == player)
            .map(|node| node.position)
            .filter(|position| seen.insert(*position))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_has_nine_children() {
        let tree = GameTree::build(Player::X);
        assert_eq!(tree.root().children.len(), 9);
        assert_eq!(tree.root().position, Position::new(Player::X));
    }

    #[test]
    fn test_children_alternate_turns() {
        let tree = GameTree::build(Player::O);
        let root = tree.root();
        for &child in &root.children {
            let node = &tree.nodes()[child];
            assert_eq!(node.position.to_move, Player::X);
            assert_eq!(node.position.board.occupied_count(), 1);
        }
    }
}
