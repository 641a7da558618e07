//! The assignment trail.
//!
//! An ordered stack of assignments, with a per-variable slot holding the node of each assigned variable for constant-time lookup.
//! Nodes appear on the stack in the order they were assigned, so levels never interleave.
//!
//! A cursor marks the first assignment propagation has not yet examined.
//! Popping below the cursor pulls the cursor back, so a backjump never leaves stale positions behind.
//!
//! The implication graph is kept implicitly: a node stores only the identifier of its antecedent clause, and traversal re-reads the clause from the clause database.

use crate::{
    db::keys::{ClauseId, LevelIndex, TrailIndex},
    structures::{literal::Literal, variable::Variable},
};

/// A variable, the value it was assigned, and the circumstances of the assignment.
#[derive(Clone, Copy, Debug)]
pub struct AssignedNode {
    pub variable: Variable,
    pub value: bool,
    pub level: LevelIndex,
    /// The clause which implied the assignment, or none for a decision or a unit clause settled at level zero.
    pub antecedent: Option<ClauseId>,
    pub index: TrailIndex,
}

pub struct Trail {
    stack: Vec<AssignedNode>,
    nodes: Vec<Option<AssignedNode>>,
    level: LevelIndex,
    cursor: usize,
}

impl Trail {
    pub fn new(variable_count: usize) -> Self {
        Trail {
            stack: Vec::with_capacity(variable_count),
            nodes: vec![None; variable_count + 1],
            level: 0,
            cursor: 0,
        }
    }

    pub fn assign(
        &mut self,
        variable: Variable,
        value: bool,
        level: LevelIndex,
        antecedent: Option<ClauseId>,
    ) {
        debug_assert!(self.nodes[variable as usize].is_none());

        let node = AssignedNode {
            variable,
            value,
            level,
            antecedent,
            index: self.stack.len(),
        };
        self.nodes[variable as usize] = Some(node);
        self.stack.push(node);
    }

    pub fn pop(&mut self) -> Option<AssignedNode> {
        let node = self.stack.pop();
        if let Some(node) = &node {
            self.nodes[node.variable as usize] = None;
        }
        if self.cursor > self.stack.len() {
            self.cursor = self.stack.len();
        }
        node
    }

    pub fn top(&self) -> Option<&AssignedNode> {
        self.stack.last()
    }

    pub fn node_of(&self, variable: Variable) -> Option<&AssignedNode> {
        self.nodes[variable as usize].as_ref()
    }

    pub fn value_of(&self, variable: Variable) -> Option<bool> {
        self.nodes[variable as usize].map(|node| node.value)
    }

    pub fn is_assigned(&self, variable: Variable) -> bool {
        self.nodes[variable as usize].is_some()
    }

    pub fn satisfies(&self, literal: Literal) -> bool {
        self.value_of(literal.variable()) == Some(literal.polarity())
    }

    pub fn falsifies(&self, literal: Literal) -> bool {
        self.value_of(literal.variable()) == Some(!literal.polarity())
    }

    pub fn level(&self) -> LevelIndex {
        self.level
    }

    pub fn begin_level(&mut self) -> LevelIndex {
        self.level += 1;
        self.level
    }

    pub fn set_level(&mut self, level: LevelIndex) {
        self.level = level;
    }

    /// The next assignment propagation has not examined, if any.
    pub fn unpropagated(&self) -> Option<AssignedNode> {
        self.stack.get(self.cursor).copied()
    }

    pub fn advance(&mut self) {
        self.cursor += 1;
    }

    pub fn length(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_retreat_the_cursor() {
        let mut trail = Trail::new(3);
        trail.assign(1, true, 0, None);
        trail.assign(2, false, 0, Some(0));

        trail.advance();
        trail.advance();
        assert!(trail.unpropagated().is_none());

        trail.pop();
        assert_eq!(trail.value_of(2), None);
        assert_eq!(trail.value_of(1), Some(true));

        trail.assign(3, true, 1, None);
        let fresh = trail.unpropagated().expect("fresh assignment");
        assert_eq!(fresh.variable, 3);
    }

    #[test]
    fn trail_indicies_follow_assignment_order() {
        let mut trail = Trail::new(3);
        trail.assign(2, true, 0, None);
        trail.assign(3, false, 1, None);
        trail.assign(1, true, 1, Some(4));

        assert_eq!(trail.node_of(2).map(|n| n.index), Some(0));
        assert_eq!(trail.node_of(3).map(|n| n.index), Some(1));
        assert_eq!(trail.node_of(1).map(|n| n.index), Some(2));
        assert_eq!(trail.node_of(1).and_then(|n| n.antecedent), Some(4));
    }
}
