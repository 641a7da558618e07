//! Error types used in the library.
//!
//! Some of these are expected and used to control the flow of a solve --- e.g. a BCP conflict is a learning opportunity, not a failure.
//! Others mark corruption of some database, and are very unlikely to occur during use.
//
//  Throughout the library `err::{self}` is imported so uses read as `err::Bcp`, etc.

use crate::{db::keys::ClauseId, structures::variable::Variable};

/// Noted errors during boolean constraint propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bcp {
    /// Propagation falsified every literal of the clause.
    /// Expected from time to time, and a learning opportunity.
    Conflict(ClauseId),
}

/// Noted errors during conflict analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Analysis {
    /// A literal of the working clause had no value on the trail.
    Unvalued(Variable),
    /// Resolution required the antecedent of a decision.
    MissingAntecedent(Variable),
    /// Somehow resolution resolved to an empty clause.
    EmptyResolution,
}

/// An error while reading a DIMACS source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parse {
    /// Some issue with the problem specification line.
    ProblemSpecification,
    /// Some unspecific problem at a specific line.
    Line(usize),
    /// A clause was read before the problem specification line.
    MisplacedClause(usize),
    /// A literal over a variable outside [1, n].
    LiteralBounds(i32),
}

/// An error while building a context, wrapping the specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Build {
    Parse(Parse),
    /// The source could not be read at all.
    Io(std::io::ErrorKind),
}

/// An error in the configuration of a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Config {
    UnknownDecider,
    UnknownRestarter,
}

/// A failure of the search loop, wrapping the specific errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solve {
    Analysis(Analysis),
}

impl From<Parse> for Build {
    fn from(e: Parse) -> Self {
        Build::Parse(e)
    }
}

impl From<std::io::Error> for Build {
    fn from(e: std::io::Error) -> Self {
        Build::Io(e.kind())
    }
}

impl From<Analysis> for Solve {
    fn from(e: Analysis) -> Self {
        Solve::Analysis(e)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::UnknownDecider => write!(f, "unknown decider"),
            Self::UnknownRestarter => write!(f, "unknown restarter"),
        }
    }
}
