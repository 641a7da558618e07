//! Determines the satisfiability of the formula in a context.
//!
//! The loop interleaves two activities until one settles the formula:
//! - Propagation, with analysis and a backjump after each conflict.
//! - A decision, once propagation is stable.
//!
//! A conflict without any decision in force settles unsatisfiability.
//! Exhausting the variables without conflict settles satisfiability, as propagation leaves no clause unit or falsified.

use std::time::Instant;

use crate::{
    context::{Context, Report},
    procedures::{
        analysis::{self},
        bcp::{self},
        decide::{self},
    },
    types::err::{self},
};

impl Context {
    pub fn solve(&mut self) -> Result<Report, err::Solve> {
        // A contradiction may already have surfaced while reading the formula.
        if self.status != Report::Unknown {
            return Ok(self.status);
        }

        'search: loop {
            'conflicts: loop {
                let bcp_timer = Instant::now();
                let propagation = self.propagate();
                self.counters.bcp_time += bcp_timer.elapsed();

                match propagation {
                    Ok(bcp::Ok::Stable) => break 'conflicts,

                    Ok(bcp::Ok::Restart) => {
                        let backjump_timer = Instant::now();
                        self.backjump(0, None);
                        self.counters.backjump_time += backjump_timer.elapsed();
                        break 'conflicts;
                    }

                    Err(err::Bcp::Conflict(id)) => {
                        let analysis_timer = Instant::now();
                        let outcome = self.analyze(id)?;
                        self.counters.analysis_time += analysis_timer.elapsed();

                        match outcome {
                            analysis::Ok::Fundamental => {
                                self.status = Report::Unsatisfiable;
                                break 'search;
                            }

                            analysis::Ok::Asserting {
                                level,
                                literal,
                                antecedent,
                            } => {
                                let backjump_timer = Instant::now();
                                self.backjump(level, Some((literal, antecedent)));
                                self.counters.backjump_time += backjump_timer.elapsed();
                            }
                        }
                    }
                }
            }

            let decide_timer = Instant::now();
            let decision = self.make_decision();
            self.counters.decide_time += decide_timer.elapsed();

            match decision {
                decide::Ok::Made => continue 'search,
                decide::Ok::Exhausted => {
                    self.status = Report::Satisfiable;
                    break 'search;
                }
            }
        }

        Ok(self.status)
    }
}
