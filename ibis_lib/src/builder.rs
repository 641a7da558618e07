//! Methods for building the formula of a context.
//!
//! Clauses pass through a pipeline on the way to the database:
//! - Literals are translated from their DIMACS form, then sorted and deduplicated.
//! - A clause containing a literal and its negation is a tautology, and dropped.
//! - An empty clause settles the formula as unsatisfiable.
//! - A unit clause settles its literal on the trail at level zero, and unsatisfiability follows if the variable already carries the opposite value.
//! - Everything else is stored, watching its first two literals, with an occurrence score noted for each literal.

use std::io::BufRead;

use crate::{
    context::{Context, Report},
    db::clause::Source,
    misc::log::targets::{self},
    structures::{clause::Clause, literal::Literal},
    types::err::{self},
};

impl Context {
    /// Adds a clause given as signed DIMACS integers.
    ///
    /// [set_problem](Context::set_problem) must have sized the context first.
    /// If the clause settles the formula as unsatisfiable the status of the context is updated, and no error is returned.
    pub fn add_dimacs_clause(&mut self, literals: &[i32]) -> Result<(), err::Build> {
        let mut clause: Clause = Vec::with_capacity(literals.len());
        for int in literals {
            let magnitude = int.unsigned_abs() as usize;
            if magnitude == 0 || magnitude > self.variable_count {
                return Err(err::Build::Parse(err::Parse::LiteralBounds(*int)));
            }
            clause.push(Literal::from_dimacs(*int));
        }

        clause.sort_unstable();
        clause.dedup();

        if clause
            .windows(2)
            .any(|pair| pair[0].variable() == pair[1].variable())
        {
            log::trace!(target: targets::BUILD, "Tautology dropped: {literals:?}");
            return Ok(());
        }

        match clause.len() {
            0 => {
                self.status = Report::Unsatisfiable;
                Ok(())
            }

            1 => {
                let literal = clause[0];
                match self.trail.value_of(literal.variable()) {
                    None => {
                        self.trail.assign(literal.variable(), literal.polarity(), 0, None);
                        self.counters.implications += 1;
                        log::trace!(target: targets::BUILD, "Unit clause settled: {literal}");
                    }
                    Some(value) if value != literal.polarity() => {
                        log::trace!(target: targets::BUILD, "Unit clauses conflict on: {literal}");
                        self.status = Report::Unsatisfiable;
                    }
                    Some(_) => {}
                }
                Ok(())
            }

            _ => {
                for literal in &clause {
                    self.activity.note_occurrence(*literal);
                }
                self.clause_db.store(clause, Source::Original);
                Ok(())
            }
        }
    }

    /// Reads a DIMACS CNF source into the context.
    ///
    /// Comment lines begin with 'c', a line beginning with '%' ends the input, and the problem line must come before any clause.
    /// A clause is a sequence of literals terminated by 0, and may span lines.
    pub fn read_dimacs(&mut self, reader: impl BufRead) -> Result<(), err::Build> {
        let mut header_read = false;
        let mut pending: Vec<i32> = Vec::default();
        let mut line_count = 0;

        'line_loop: for line in reader.lines() {
            let line = line?;
            line_count += 1;
            let line = line.trim();
            if line.is_empty() {
                continue 'line_loop;
            }

            match line.chars().next() {
                Some('c') => continue 'line_loop,

                Some('%') => break 'line_loop,

                Some('p') => {
                    let mut details = line.split_whitespace();
                    let variable_count: usize = match details.nth(2) {
                        None => return Err(err::Parse::ProblemSpecification.into()),
                        Some(string) => match string.parse() {
                            Err(_) => return Err(err::Parse::ProblemSpecification.into()),
                            Ok(count) => count,
                        },
                    };
                    let clause_count: usize = match details.next() {
                        None => return Err(err::Parse::ProblemSpecification.into()),
                        Some(string) => match string.parse() {
                            Err(_) => return Err(err::Parse::ProblemSpecification.into()),
                            Ok(count) => count,
                        },
                    };

                    self.set_problem(variable_count);
                    self.declared_clause_count = clause_count;
                    header_read = true;
                }

                Some(_) => {
                    if !header_read {
                        return Err(err::Parse::MisplacedClause(line_count).into());
                    }

                    for token in line.split_whitespace() {
                        let literal: i32 = match token.parse() {
                            Err(_) => return Err(err::Parse::Line(line_count).into()),
                            Ok(int) => int,
                        };

                        if literal == 0 {
                            self.add_dimacs_clause(&pending)?;
                            pending.clear();
                            if self.status == Report::Unsatisfiable {
                                return Ok(());
                            }
                        } else {
                            pending.push(literal);
                        }
                    }
                }

                None => {}
            }
        }

        // A final clause without its terminating zero is accepted.
        if !pending.is_empty() {
            self.add_dimacs_clause(&pending)?;
        }

        self.prepare_queue();
        Ok(())
    }

    /// Seeds the branching queue from the occurrence scores, leaving out settled variables.
    /// Required before a solve whenever clauses were added directly rather than through [read_dimacs](Context::read_dimacs).
    pub fn prepare_queue(&mut self) {
        self.activity.build_queue(&self.trail);
    }
}
