//! Configuration of a context.
//!
//! All configuration for a solve is fixed when the context is built.
//! The activity database and the restart controller clone the parts they use.

pub mod defaults;

use crate::types::err;

/// Representation used for literal and variable activity.
pub type Activity = f64;

/// Variant heuristics for choosing the next decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decider {
    /// The unassigned variable with the smallest index, assigned true.
    Ordered,
    /// The unassigned literal with the most activity, with activity kept per literal.
    Vsids,
    /// The unassigned variable with the most activity, assigned its saved phase.
    MiniSat,
}

/// Variant schedules for forgetting all choices after enough conflicts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestartPolicy {
    /// Never restart.
    None,
    /// Restart thresholds double, from an initial threshold.
    Geometric,
    /// Restart thresholds follow the luby sequence, scaled by a base.
    Luby,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub decider: Decider,
    pub restarts: RestartPolicy,

    /// The first geometric restart threshold, in conflicts.
    pub geometric_start: usize,
    /// The factor applied to the geometric threshold on each restart.
    pub geometric_multiplier: usize,
    /// The factor applied to each term of the luby sequence.
    pub luby_base: usize,

    /// The amount added to the VSIDS bump after each learnt clause.
    pub vsids_bump_step: Activity,
    /// The divisor applied to the MiniSat bump after each learnt clause.
    pub minisat_decay: Activity,
    /// Scores above the cap trigger a rescale of every score.
    pub score_cap: Activity,
    /// The factor used when rescaling scores.
    pub score_rescale: Activity,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            decider: Decider::Vsids,
            restarts: RestartPolicy::None,

            geometric_start: defaults::GEOMETRIC_START,
            geometric_multiplier: defaults::GEOMETRIC_MULTIPLIER,
            luby_base: defaults::LUBY_BASE,

            vsids_bump_step: defaults::VSIDS_BUMP_STEP,
            minisat_decay: defaults::MINISAT_DECAY,
            score_cap: defaults::SCORE_CAP,
            score_rescale: defaults::SCORE_RESCALE,
        }
    }
}

impl std::str::FromStr for Decider {
    type Err = err::Config;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ORDERED" => Ok(Decider::Ordered),
            "VSIDS" => Ok(Decider::Vsids),
            "MINISAT" => Ok(Decider::MiniSat),
            _ => Err(err::Config::UnknownDecider),
        }
    }
}

impl std::str::FromStr for RestartPolicy {
    type Err = err::Config;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(RestartPolicy::None),
            "GEOMETRIC" => Ok(RestartPolicy::Geometric),
            "LUBY" => Ok(RestartPolicy::Luby),
            _ => Err(err::Config::UnknownRestarter),
        }
    }
}

impl std::fmt::Display for Decider {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Ordered => write!(f, "ORDERED"),
            Self::Vsids => write!(f, "VSIDS"),
            Self::MiniSat => write!(f, "MINISAT"),
        }
    }
}

impl std::fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Geometric => write!(f, "GEOMETRIC"),
            Self::Luby => write!(f, "LUBY"),
        }
    }
}
