//! Recovery from a conflict, by a jump to a lower decision level.
//!
//! Assignments above the target level are popped from the trail, and each freed variable returns to the branching queue with its accumulated score.
//! When analysis supplied an asserting literal it is settled at the target level once the jump is made, with the learnt clause as its antecedent.

use crate::{
    context::Context,
    db::keys::{ClauseId, LevelIndex},
    misc::log::targets::{self},
    structures::literal::Literal,
};

impl Context {
    /// Backjumps to the target level, then settles the pending literal if one was supplied.
    ///
    /// A target at or above the current level pops nothing.
    pub fn backjump(
        &mut self,
        target: LevelIndex,
        pending: Option<(Literal, Option<ClauseId>)>,
    ) {
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());

        while self.trail.top().is_some_and(|node| node.level > target) {
            if let Some(node) = self.trail.pop() {
                self.activity.note_unassignment(node.variable);
            }
        }
        self.trail.set_level(target);

        if let Some((literal, antecedent)) = pending {
            self.trail
                .assign(literal.variable(), literal.polarity(), target, antecedent);
            self.activity.note_assignment(literal.variable(), literal.polarity());
            self.counters.implications += 1;
        }
    }
}
