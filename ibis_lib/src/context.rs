//! A context for a solve: every database, the counters, and the status of the formula.

use std::time::Duration;

use crate::{
    config::Config,
    db::{activity::ActivityDB, clause::ClauseDB, trail::Trail},
    restart::Restarts,
    structures::variable::Variable,
};

/// What is known about the formula of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    Satisfiable,
    Unsatisfiable,
    /// No solve has settled the formula.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SAT"),
            Self::Unsatisfiable => write!(f, "UNSAT"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Counts of the things a solve did, and where the time went.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    pub decisions: usize,
    pub implications: usize,
    pub conflicts: usize,
    pub restarts: usize,
    pub learnt: usize,

    pub bcp_time: Duration,
    pub decide_time: Duration,
    pub analysis_time: Duration,
    pub backjump_time: Duration,
}

pub struct Context {
    pub config: Config,
    pub clause_db: ClauseDB,
    pub trail: Trail,
    pub activity: ActivityDB,
    pub restarts: Restarts,
    pub counters: Counters,

    pub(crate) status: Report,
    pub(crate) variable_count: usize,
    pub(crate) declared_clause_count: usize,
}

impl Context {
    pub fn from_config(config: Config) -> Self {
        let clause_db = ClauseDB::new(0);
        let trail = Trail::new(0);
        let activity = ActivityDB::from_config(&config, 0);
        let restarts = Restarts::from_config(&config);

        Context {
            config,
            clause_db,
            trail,
            activity,
            restarts,
            counters: Counters::default(),
            status: Report::Unknown,
            variable_count: 0,
            declared_clause_count: 0,
        }
    }

    /// Sizes every database for a formula over the given number of variables.
    /// Clears any clauses and assignments from a previous problem.
    pub fn set_problem(&mut self, variable_count: usize) {
        self.variable_count = variable_count;
        self.clause_db = ClauseDB::new(variable_count);
        self.trail = Trail::new(variable_count);
        self.activity = ActivityDB::from_config(&self.config, variable_count);
        self.status = Report::Unknown;
    }

    pub fn report(&self) -> Report {
        self.status
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// The number of clauses declared in the problem header, which may differ from the number stored.
    pub fn declared_clause_count(&self) -> usize {
        self.declared_clause_count
    }

    pub fn value_of(&self, variable: Variable) -> Option<bool> {
        self.trail.value_of(variable)
    }

    /// The value of each assigned variable, in variable order.
    pub fn assignment(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        (1..=self.variable_count as Variable)
            .filter_map(|variable| self.trail.value_of(variable).map(|value| (variable, value)))
    }
}
