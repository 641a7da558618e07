//! (The internal representation of) a variable.
//!
//! Variables are numbered 1 up to the count given in the problem header, as in DIMACS input.
//! Index 0 is never used, so a variable may be used directly as the index of per-variable structures.

/// A propositional variable.
pub type Variable = u32;
