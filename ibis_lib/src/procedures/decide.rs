//! Making a decision, when propagation settles without exhausting the variables.

use crate::{
    context::Context,
    misc::log::targets::{self},
};

/// Possible 'Ok' results of asking for a decision.
pub enum Ok {
    /// Some variable was assigned a value at a fresh level.
    Made,
    /// Every variable already had a value, so the formula is satisfied.
    Exhausted,
}

impl Context {
    pub fn make_decision(&mut self) -> Ok {
        match self.activity.pick(&self.trail) {
            Some((variable, value)) => {
                let level = self.trail.begin_level();
                self.trail.assign(variable, value, level, None);
                self.activity.note_assignment(variable, value);
                self.counters.decisions += 1;
                log::trace!(target: targets::DECIDE, "Decision at level {level}: {variable} as {value}");
                Ok::Made
            }
            None => Ok::Exhausted,
        }
    }
}
