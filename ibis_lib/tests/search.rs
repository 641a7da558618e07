use ibis_lib::{
    config::{Config, Decider, RestartPolicy},
    context::{Context, Report},
};

fn context_over(dimacs: &str, config: Config) -> Context {
    let mut the_context = Context::from_config(config);
    the_context
        .read_dimacs(std::io::Cursor::new(dimacs))
        .expect("a well formed formula");
    the_context
}

fn every_configuration() -> Vec<Config> {
    let mut configurations = Vec::default();
    for decider in [Decider::Ordered, Decider::Vsids, Decider::MiniSat] {
        for restarts in [
            RestartPolicy::None,
            RestartPolicy::Geometric,
            RestartPolicy::Luby,
        ] {
            configurations.push(Config {
                decider,
                restarts,
                ..Config::default()
            });
        }
    }
    configurations
}

/// Three pigeons into two holes, with variable (pigeon - 1) * 2 + hole.
fn pigeonhole_three_two() -> String {
    let mut dimacs = String::from("p cnf 6 9\n");
    for pigeon in 0..3 {
        dimacs.push_str(&format!("{} {} 0\n", pigeon * 2 + 1, pigeon * 2 + 2));
    }
    for hole in 1..=2 {
        for first in 0..3 {
            for second in (first + 1)..3 {
                dimacs.push_str(&format!("-{} -{} 0\n", first * 2 + hole, second * 2 + hole));
            }
        }
    }
    dimacs
}

fn satisfied_by(the_context: &Context) -> bool {
    the_context.clause_db.ids().all(|id| {
        the_context
            .clause_db
            .clause(id)
            .iter()
            .any(|literal| the_context.value_of(literal.variable()) == Some(literal.polarity()))
    })
}

mod search {
    use super::*;

    #[test]
    fn pigeonhole_is_unsatisfiable_however_configured() {
        let dimacs = pigeonhole_three_two();
        for config in every_configuration() {
            let mut the_context = context_over(&dimacs, config);
            assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        }
    }

    #[test]
    fn implication_chain_learns_a_unit_and_closes() {
        // A decision on 1 propagates along the chain to a conflict whose analysis
        // forces 3 false at level zero, after which the formula closes at level zero.
        let dimacs = "p cnf 4 5\n-1 2 0\n-2 3 0\n-3 4 0\n-3 -4 0\n1 3 0\n";
        let config = Config {
            decider: Decider::Ordered,
            ..Config::default()
        };
        let mut the_context = context_over(dimacs, config);
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        assert!(the_context.counters.decisions >= 1);
        assert!(the_context.counters.conflicts >= 2);
    }

    #[test]
    fn independent_formulas_are_satisfied_together() {
        let dimacs = "p cnf 4 4\n1 2 0\n-1 -2 0\n3 4 0\n-3 -4 0\n";
        for config in every_configuration() {
            let mut the_context = context_over(dimacs, config);
            assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
            assert!(satisfied_by(&the_context));
        }
    }

    #[test]
    fn reported_models_satisfy_the_formula() {
        let dimacs = "p cnf 8 10
1 2 3 0
-1 -2 0
-2 -3 0
2 4 -5 0
-4 5 6 0
-6 7 0
-6 -7 8 0
-8 -1 0
3 5 -7 0
-3 -5 7 0
";
        for config in every_configuration() {
            let mut the_context = context_over(dimacs, config);
            assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
            assert!(satisfied_by(&the_context));
        }
    }

    #[test]
    fn restarts_fire_and_preserve_the_answer() {
        let dimacs = pigeonhole_three_two();
        let config = Config {
            decider: Decider::Vsids,
            restarts: RestartPolicy::Geometric,
            geometric_start: 2,
            ..Config::default()
        };
        let mut the_context = context_over(&dimacs, config);
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        assert!(the_context.counters.restarts >= 1);
    }

    #[test]
    fn identical_runs_match_exactly() {
        let dimacs = pigeonhole_three_two();
        for config in every_configuration() {
            let mut first = context_over(&dimacs, config.clone());
            let mut second = context_over(&dimacs, config);

            assert_eq!(first.solve(), second.solve());
            assert_eq!(first.counters.decisions, second.counters.decisions);
            assert_eq!(first.counters.implications, second.counters.implications);
            assert_eq!(first.counters.conflicts, second.counters.conflicts);
            assert_eq!(first.counters.restarts, second.counters.restarts);
            assert_eq!(first.counters.learnt, second.counters.learnt);
        }
    }
}
