/// The identifier of a stored clause, assigned densely in insertion order.
pub type ClauseId = usize;

/// A decision level, with level zero holding consequences of the formula alone.
pub type LevelIndex = usize;

/// A position in the assignment trail.
pub type TrailIndex = usize;
