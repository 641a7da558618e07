//! Activity scores for the branching heuristics, with phase saving.
//!
//! The heap is keyed by literal index for VSIDS and by variable for MiniSat, and holds only unassigned keys --- assignment removes a key, backtracking restores it with whatever score it has accumulated.
//! The ORDERED decider keeps no heap at all.
//!
//! Scores grow rather than decay: the bump applied on each learnt clause increases over time, which has the same effect as decaying every score.
//! When any score would pass the cap, every score and the bump are rescaled.

use crate::{
    config::{defaults, Activity, Config, Decider},
    db::trail::Trail,
    generic::index_heap::IndexHeap,
    structures::{literal::Literal, variable::Variable},
};

pub struct ActivityDB {
    decider: Decider,
    heap: IndexHeap<Activity>,
    phase: Vec<bool>,
    bump: Activity,
    bump_step: Activity,
    decay: Activity,
    score_cap: Activity,
    score_rescale: Activity,
    variable_count: usize,
}

impl ActivityDB {
    pub fn from_config(config: &Config, variable_count: usize) -> Self {
        let keys = match config.decider {
            Decider::Ordered => 0,
            Decider::Vsids => 2 * variable_count + 1,
            Decider::MiniSat => variable_count + 1,
        };

        ActivityDB {
            decider: config.decider,
            heap: IndexHeap::with_capacity(keys),
            phase: vec![false; variable_count + 1],
            bump: 1.0,
            bump_step: config.vsids_bump_step,
            decay: config.minisat_decay,
            score_cap: config.score_cap,
            score_rescale: config.score_rescale,
            variable_count,
        }
    }

    /// Notes an occurrence of the literal in a stored clause, seeding its initial score.
    pub fn note_occurrence(&mut self, literal: Literal) {
        let key = match self.decider {
            Decider::Ordered => return,
            Decider::Vsids => literal.index(self.variable_count),
            Decider::MiniSat => literal.variable() as usize,
        };
        let seeded = self.heap.value_of(key) + defaults::OCCURRENCE_SCORE;
        self.heap.revalue(key, seeded);
    }

    /// Places every key of an unassigned variable on the heap.
    /// Called once, after the formula has been read and unit clauses settled.
    pub fn build_queue(&mut self, trail: &Trail) {
        match self.decider {
            Decider::Ordered => {}
            Decider::Vsids => {
                for variable in 1..=self.variable_count {
                    if !trail.is_assigned(variable as Variable) {
                        self.heap.activate(variable);
                        self.heap.activate(variable + self.variable_count);
                    }
                }
            }
            Decider::MiniSat => {
                for variable in 1..=self.variable_count {
                    if !trail.is_assigned(variable as Variable) {
                        self.heap.activate(variable);
                    }
                }
            }
        }
    }

    /// Removes the keys of a freshly assigned variable from the heap, and saves its phase.
    pub fn note_assignment(&mut self, variable: Variable, value: bool) {
        match self.decider {
            Decider::Ordered => {}
            Decider::Vsids => {
                self.heap.remove(variable as usize);
                self.heap.remove(variable as usize + self.variable_count);
            }
            Decider::MiniSat => {
                self.heap.remove(variable as usize);
                self.phase[variable as usize] = value;
            }
        }
    }

    /// Restores the keys of an unassigned variable to the heap with their current scores.
    pub fn note_unassignment(&mut self, variable: Variable) {
        match self.decider {
            Decider::Ordered => {}
            Decider::Vsids => {
                self.heap.activate(variable as usize);
                self.heap.activate(variable as usize + self.variable_count);
            }
            Decider::MiniSat => {
                self.heap.activate(variable as usize);
            }
        }
    }

    /// Bumps every literal of a learnt clause, then advances the bump.
    pub fn bump_clause(&mut self, clause: &[Literal]) {
        match self.decider {
            Decider::Ordered => {}
            Decider::Vsids => {
                for literal in clause {
                    self.bump_key(literal.index(self.variable_count));
                }
                self.bump += self.bump_step;
            }
            Decider::MiniSat => {
                for literal in clause {
                    self.bump_key(literal.variable() as usize);
                }
                self.bump /= self.decay;
            }
        }
    }

    /// Chooses the next decision, skipping any stale heap entries for assigned variables.
    pub fn pick(&mut self, trail: &Trail) -> Option<(Variable, bool)> {
        match self.decider {
            Decider::Ordered => (1..=self.variable_count as Variable)
                .find(|variable| !trail.is_assigned(*variable))
                .map(|variable| (variable, true)),

            Decider::Vsids => {
                while let Some(key) = self.heap.pop_max() {
                    let (variable, polarity) = match key <= self.variable_count {
                        true => (key as Variable, true),
                        false => ((key - self.variable_count) as Variable, false),
                    };
                    if trail.is_assigned(variable) {
                        continue;
                    }
                    // The sibling literal must go too, or the variable could be chosen twice.
                    let sibling = match polarity {
                        true => variable as usize + self.variable_count,
                        false => variable as usize,
                    };
                    self.heap.remove(sibling);
                    return Some((variable, polarity));
                }
                None
            }

            Decider::MiniSat => {
                while let Some(key) = self.heap.pop_max() {
                    let variable = key as Variable;
                    if trail.is_assigned(variable) {
                        continue;
                    }
                    return Some((variable, self.phase[key]));
                }
                None
            }
        }
    }
}

impl ActivityDB {
    fn bump_key(&mut self, key: usize) {
        if self.heap.value_of(key) + self.bump > self.score_cap {
            self.rescale();
        }
        let bumped = self.heap.value_of(key) + self.bump;
        self.heap.revalue(key, bumped);
    }

    fn rescale(&mut self) {
        let factor = self.score_rescale;
        self.heap.apply_to_all(|value| value * factor);
        self.heap.reheap();
        self.bump *= factor;
    }
}
