//! Conflict analysis, by resolution to the first unique implication point.
//!
//! The working clause starts as the conflict clause.
//! While more than one of its literals was assigned at the conflict level, the working clause is resolved with the antecedent of whichever of those assignments came last on the trail.
//! Each resolution removes the pivot variable, so the loop terminates --- at the latest, when only the level's decision remains.
//!
//! The clause which remains is asserting: after a backjump its one conflict-level literal is unit.
//! Its watches are ordered so the asserting literal is watched together with a literal from the backjump level, which keeps both watches sound once the jump is made.

use crate::{
    context::Context,
    db::{
        clause::Source,
        keys::{ClauseId, LevelIndex},
        trail::AssignedNode,
    },
    misc::log::targets::{self},
    structures::{
        clause::{self, Clause},
        literal::Literal,
        variable::Variable,
    },
    types::err::{self},
};

/// Possible 'Ok' results of analysis.
pub enum Ok {
    /// The conflict does not rest on any decision, so the formula is unsatisfiable.
    Fundamental,
    /// An asserting clause was learnt.
    /// The literal is implied at the given level, by the recorded antecedent.
    Asserting {
        level: LevelIndex,
        literal: Literal,
        antecedent: Option<ClauseId>,
    },
}

impl Context {
    pub fn analyze(&mut self, conflict: ClauseId) -> Result<Ok, err::Analysis> {
        let conflict_level = self.trail.level();
        if conflict_level == 0 {
            return Result::Ok(Ok::Fundamental);
        }

        let mut working: Clause = self.clause_db.clause(conflict).to_vec();

        let uip_node = loop {
            let mut at_conflict_level = 0;
            let mut latest: Option<AssignedNode> = None;

            for literal in &working {
                let node = self
                    .trail
                    .node_of(literal.variable())
                    .ok_or(err::Analysis::Unvalued(literal.variable()))?;
                if node.level == conflict_level {
                    at_conflict_level += 1;
                    if latest.is_none() || latest.is_some_and(|seen| node.index > seen.index) {
                        latest = Some(*node);
                    }
                }
            }

            let latest = latest.ok_or(err::Analysis::EmptyResolution)?;
            if at_conflict_level == 1 {
                break latest;
            }

            let antecedent = latest
                .antecedent
                .ok_or(err::Analysis::MissingAntecedent(latest.variable))?;
            working = resolve_on(&working, self.clause_db.clause(antecedent), latest.variable);
        };

        if working.len() == 1 {
            let literal = working[0];
            log::trace!(target: targets::ANALYSIS, "Unit clause learnt: {literal}");
            return Result::Ok(Ok::Asserting {
                level: 0,
                literal,
                antecedent: None,
            });
        }

        // Order the watches: the asserting literal first, then the literal from the deepest remaining level.
        let asserting_position = working
            .iter()
            .position(|literal| literal.variable() == uip_node.variable)
            .ok_or(err::Analysis::EmptyResolution)?;
        working.swap(0, asserting_position);

        let mut second = 1;
        let mut second_level = self.level_of(working[1])?;
        for position in 2..working.len() {
            let level = self.level_of(working[position])?;
            if level > second_level {
                second = position;
                second_level = level;
            }
        }
        working.swap(1, second);

        self.activity.bump_clause(&working);

        let literal = working[0];
        log::trace!(target: targets::ANALYSIS, "Clause learnt: {}", clause::dimacs_form(&working));
        let id = self.clause_db.store(working, Source::Learnt);
        self.counters.learnt += 1;

        Result::Ok(Ok::Asserting {
            level: second_level,
            literal,
            antecedent: Some(id),
        })
    }

    fn level_of(&self, literal: Literal) -> Result<LevelIndex, err::Analysis> {
        self.trail
            .node_of(literal.variable())
            .map(|node| node.level)
            .ok_or(err::Analysis::Unvalued(literal.variable()))
    }
}

/// The resolvent of two clauses on a variable, deduplicated.
fn resolve_on(left: &[Literal], right: &[Literal], pivot: Variable) -> Clause {
    let mut resolvent: Clause = left
        .iter()
        .chain(right.iter())
        .filter(|literal| literal.variable() != pivot)
        .copied()
        .collect();
    resolvent.sort_unstable();
    resolvent.dedup();
    resolvent
}
