//! An independent check that an assignment satisfies a formula.
//!
//! The formula is re-read from its DIMACS source and the assignment from the map written by the solver.
//! A clause counts as satisfied only by a variable present in the map --- a missing variable satisfies nothing.

use std::{collections::HashMap, path::PathBuf};

use clap::{value_parser, Arg, Command};

use ibis_lib::structures::variable::Variable;

fn cli() -> Command {
    Command::new("ibis_verify")
        .about("Checks a satisfying assignment against the formula it was reported for")
        .arg(
            Arg::new("input")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("The DIMACS form CNF file."),
        )
        .arg(
            Arg::new("assignment")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("The assignment file written by the solver."),
        )
}

fn main() {
    let matches = cli().get_matches();
    let input = matches.get_one::<PathBuf>("input").cloned();
    let assignment = matches.get_one::<PathBuf>("assignment").cloned();
    let (Some(input), Some(assignment)) = (input, assignment) else {
        std::process::exit(1);
    };

    let assignment = match std::fs::read_to_string(&assignment) {
        Ok(content) => parse_assignment(&content),
        Err(e) => {
            eprintln!("Error opening {}: {e}", assignment.display());
            std::process::exit(1);
        }
    };

    let formula = match std::fs::read_to_string(&input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error opening {}: {e}", input.display());
            std::process::exit(1);
        }
    };

    match every_clause_satisfied(&formula, &assignment) {
        true => println!("YES!! The assignment is valid."),
        false => println!("NO!! The assignment is not valid."),
    }
}

/// Parses the brace-delimited `"variable": bool` map written by the solver.
fn parse_assignment(content: &str) -> HashMap<Variable, bool> {
    let mut map = HashMap::default();
    let plain = content.replace(['{', '}', '"', ',', ':'], " ");
    let mut tokens = plain.split_whitespace();

    while let (Some(key), Some(value)) = (tokens.next(), tokens.next()) {
        if let Ok(variable) = key.parse::<Variable>() {
            map.insert(variable, value == "true");
        }
    }
    map
}

fn every_clause_satisfied(formula: &str, assignment: &HashMap<Variable, bool>) -> bool {
    let mut pending: Vec<i32> = Vec::default();

    for line in formula.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.chars().next() {
            Some('c') | Some('p') => continue,
            Some('%') => break,
            _ => {}
        }

        for token in line.split_whitespace() {
            let Ok(literal) = token.parse::<i32>() else {
                continue;
            };
            if literal == 0 {
                if !clause_satisfied(&pending, assignment) {
                    return false;
                }
                pending.clear();
            } else {
                pending.push(literal);
            }
        }
    }

    if !pending.is_empty() && !clause_satisfied(&pending, assignment) {
        return false;
    }

    true
}

fn clause_satisfied(clause: &[i32], assignment: &HashMap<Variable, bool>) -> bool {
    clause.iter().any(|literal| {
        match assignment.get(&literal.unsigned_abs()) {
            None => false,
            Some(value) => *value == (*literal > 0),
        }
    })
}
