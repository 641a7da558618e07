use crate::config::{self};

pub const GEOMETRIC_START: usize = 512;
pub const GEOMETRIC_MULTIPLIER: usize = 2;
pub const LUBY_BASE: usize = 512;

pub const VSIDS_BUMP_STEP: config::Activity = 0.75;
pub const MINISAT_DECAY: config::Activity = 0.85;

pub const SCORE_CAP: config::Activity = 1e100;
pub const SCORE_RESCALE: config::Activity = 1e-100;

/// Every occurrence of a literal in a stored clause contributes this much initial activity.
pub const OCCURRENCE_SCORE: config::Activity = 1.0;
