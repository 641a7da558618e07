//! Boolean constraint propagation.
//!
//! Takes unexamined assignments from the trail and checks every clause watching the literal each assignment falsified.
//! For each such clause, in order:
//! - If the other watch is satisfied the clause is settled, and the watches stay put.
//! - Otherwise the clause is scanned for a replacement watch, a non-watched literal which is not falsified.
//! - With no replacement and the other watch unassigned, the clause is unit and the other watch is implied.
//! - With no replacement and the other watch falsified, the clause is in conflict.
//!
//! Watch lists are traversed in reverse insertion order, so recently learnt clauses are examined first --- these tend to be asserting, and settle propagation sooner.
//! A clause which moves to a fresh watch is removed from the list by a swap with the last element, which is safe only because traversal proceeds from the current position downward.
//!
//! On a conflict the restart controller is consulted, and a scheduled restart takes precedence over analysis of the conflict.

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::literal::Literal,
    types::err::{self},
};

/// Possible 'Ok' results of propagation.
pub enum Ok {
    /// Every assignment was examined without conflict.
    Stable,
    /// A conflict met the restart schedule, and the search should return to level zero.
    Restart,
}

impl Context {
    pub fn propagate(&mut self) -> Result<Ok, err::Bcp> {
        while let Some(node) = self.trail.unpropagated() {
            let falsified = Literal::new(node.variable, !node.value);
            let falsified_index = falsified.index(self.variable_count);

            let mut position = self.clause_db.watch_list_length(falsified_index);
            'watching_clauses: while position > 0 {
                position -= 1;
                let id = self.clause_db.watched_at(falsified_index, position);

                let (first, second) = self.clause_db.watch_pair(id);
                let other = if first == falsified { second } else { first };

                if self.trail.satisfies(other) {
                    continue 'watching_clauses;
                }

                let replacement = self
                    .clause_db
                    .clause(id)
                    .iter()
                    .find(|literal| {
                        **literal != first && **literal != second && !self.trail.falsifies(**literal)
                    })
                    .copied();

                if let Some(fresh_watch) = replacement {
                    self.clause_db.shift_watch(id, falsified, fresh_watch, position);
                    continue 'watching_clauses;
                }

                if !self.trail.is_assigned(other.variable()) {
                    // The clause is unit on the other watch.
                    let level = self.trail.level();
                    self.trail
                        .assign(other.variable(), other.polarity(), level, Some(id));
                    self.activity.note_assignment(other.variable(), other.polarity());
                    self.counters.implications += 1;
                    log::trace!(target: targets::PROPAGATION, "Implication of clause {id}: {other}");
                    continue 'watching_clauses;
                }

                // Every literal of the clause is falsified.
                self.counters.conflicts += 1;
                log::trace!(target: targets::PROPAGATION, "Conflict with clause {id}");

                if self.restarts.note_conflict() {
                    self.counters.restarts += 1;
                    log::trace!(target: targets::RESTART, "Restart scheduled, threshold now {}", self.restarts.threshold());
                    return Result::Ok(Ok::Restart);
                }

                return Err(err::Bcp::Conflict(id));
            }

            self.trail.advance();
        }

        Result::Ok(Ok::Stable)
    }
}
