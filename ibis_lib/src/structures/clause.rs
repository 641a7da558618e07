//! A clause, stored as a sequence of literals.
//!
//! Clauses in the database never contain duplicate literals, and never contain a literal together with its negation.

use crate::structures::literal::Literal;

pub type Clause = Vec<Literal>;

/// The clause as a DIMACS line, without the terminating zero.
pub fn dimacs_form(clause: &[Literal]) -> String {
    clause
        .iter()
        .map(|literal| literal.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
