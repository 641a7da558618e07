use ibis_lib::{
    config::Config,
    context::{Context, Report},
};

fn context_over(dimacs: &str, config: Config) -> Context {
    let mut the_context = Context::from_config(config);
    the_context
        .read_dimacs(std::io::Cursor::new(dimacs))
        .expect("a well formed formula");
    the_context
}

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        let mut the_context = context_over("p cnf 1 1\n1 0\n", Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.value_of(1), Some(true));
    }

    #[test]
    fn contradictory_units() {
        let mut the_context = context_over("p cnf 1 2\n1 0\n-1 0\n", Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn three_variables_satisfiable() {
        let dimacs = "p cnf 3 3\n1 2 0\n-1 3 0\n-2 -3 0\n";
        let mut the_context = context_over(dimacs, Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

        let value = |v| the_context.value_of(v).expect("a total assignment");
        assert!(value(1) || value(2));
        assert!(!value(1) || value(3));
        assert!(!value(2) || !value(3));
    }

    #[test]
    fn duplicate_literals_collapse() {
        let the_context = context_over("p cnf 2 1\n1 2 2 1 0\n", Config::default());
        assert_eq!(the_context.clause_db.stored_count(), 1);
        assert_eq!(the_context.clause_db.clause(0).len(), 2);
    }

    #[test]
    fn tautologies_are_dropped() {
        let mut the_context = context_over("p cnf 2 1\n1 2 -1 0\n", Config::default());
        assert_eq!(the_context.clause_db.stored_count(), 0);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn no_clauses_still_assigns_everything() {
        let mut the_context = context_over("p cnf 3 0\n", Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        for variable in 1..=3 {
            assert!(the_context.value_of(variable).is_some());
        }
    }

    #[test]
    fn unsatisfiable_by_propagation_alone() {
        // The unit settles 1, and the remaining clauses conflict at level zero.
        let dimacs = "p cnf 2 3\n1 0\n-1 2 0\n-1 -2 0\n";
        let mut the_context = context_over(dimacs, Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(the_context.counters.decisions, 0);
    }

    #[test]
    fn comments_and_terminator_are_ignored() {
        let dimacs = "c a comment\np cnf 2 1\nc another\n1 -2 0\n%\n0\n";
        let mut the_context = context_over(dimacs, Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn clauses_may_span_lines() {
        let dimacs = "p cnf 3 1\n1\n2\n3 0\n";
        let the_context = context_over(dimacs, Config::default());
        assert_eq!(the_context.clause_db.stored_count(), 1);
        assert_eq!(the_context.clause_db.clause(0).len(), 3);
    }

    #[test]
    fn literal_out_of_bounds_is_an_error() {
        let mut the_context = Context::from_config(Config::default());
        let result = the_context.read_dimacs(std::io::Cursor::new("p cnf 2 1\n1 3 0\n"));
        assert!(result.is_err());
    }
}
