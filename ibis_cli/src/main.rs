use std::{
    fmt::Write as _,
    fs::File,
    io::BufReader,
    path::PathBuf,
    time::Instant,
};

use clap::{value_parser, Arg, Command};

use ibis_lib::{
    config::Config,
    context::{Context, Report},
};

fn cli() -> Command {
    Command::new("ibis")
        .about("Determines whether a formula in DIMACS form is satisfiable or unsatisfiable")
        .arg(
            Arg::new("log")
                .required(true)
                .value_parser(value_parser!(bool))
                .help("Whether to trace the solve (true or false)."),
        )
        .arg(
            Arg::new("decider")
                .required(true)
                .value_parser(["ORDERED", "VSIDS", "MINISAT"])
                .help("The heuristic used to choose decisions."),
        )
        .arg(
            Arg::new("restarter")
                .required(true)
                .value_parser(["None", "GEOMETRIC", "LUBY"])
                .help("The restart schedule, if any."),
        )
        .arg(
            Arg::new("input")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("The DIMACS form CNF file to solve."),
        )
}

fn main() {
    let matches = cli().get_matches();

    let to_log = *matches.get_one::<bool>("log").unwrap_or(&false);
    let path = match matches.get_one::<PathBuf>("input") {
        Some(path) => path.clone(),
        None => std::process::exit(1),
    };

    let mut config = Config::default();
    match matches.get_one::<String>("decider").map(|s| s.parse()) {
        Some(Ok(decider)) => config.decider = decider,
        _ => {
            eprintln!("Invalid decider");
            std::process::exit(1);
        }
    }
    match matches.get_one::<String>("restarter").map(|s| s.parse()) {
        Some(Ok(restarter)) => config.restarts = restarter,
        _ => {
            eprintln!("Invalid restarter");
            std::process::exit(1);
        }
    }

    let mut log_builder = env_logger::Builder::new();
    log_builder.filter_level(match to_log {
        true => log::LevelFilter::Trace,
        false => log::LevelFilter::Warn,
    });
    log_builder.parse_default_env();
    log_builder.init();

    let start_time = Instant::now();

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error opening {}: {e}", path.display());
            std::process::exit(1);
        }
    };

    let mut the_context = Context::from_config(config);
    if let Err(e) = the_context.read_dimacs(BufReader::new(file)) {
        eprintln!("Error reading DIMACS: {e:?}");
        std::process::exit(1);
    }
    let read_time = start_time.elapsed();

    let report = match the_context.solve() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Context error: {e:?}");
            std::process::exit(1);
        }
    };

    let total_time = start_time.elapsed();

    println!("{report}");

    let case_name = match path.file_stem() {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => String::from("formula"),
    };
    let statistics_file = format!("stats_{case_name}.txt");
    let assignment_file = format!("assgn_{case_name}.txt");

    let block = statistics_block(
        &the_context,
        report,
        &path.display().to_string(),
        &statistics_file,
        &assignment_file,
        read_time.as_secs_f64(),
        total_time.as_secs_f64(),
    );
    println!("{block}");

    if let Err(e) = std::fs::write(&statistics_file, &block) {
        eprintln!("Error writing {statistics_file}: {e}");
        std::process::exit(1);
    }

    if report == Report::Satisfiable {
        let mut pairs = Vec::with_capacity(the_context.variable_count());
        for (variable, value) in the_context.assignment() {
            pairs.push(format!("\"{variable}\": {value}"));
        }
        let map = format!("{{{}}}", pairs.join(", "));
        if let Err(e) = std::fs::write(&assignment_file, map) {
            eprintln!("Error writing {assignment_file}: {e}");
            std::process::exit(1);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn statistics_block(
    context: &Context,
    report: Report,
    input: &str,
    statistics_file: &str,
    assignment_file: &str,
    read_seconds: f64,
    total_seconds: f64,
) -> String {
    let counters = &context.counters;
    let mut block = String::new();

    let _ = writeln!(block, "=========================== STATISTICS ===============================");
    let _ = writeln!(block, "Solving formula from file: {input}");
    let _ = writeln!(
        block,
        "Vars:{}, Clauses:{} Stored Clauses:{}",
        context.variable_count(),
        context.declared_clause_count(),
        context.clause_db.stored_count(),
    );
    let _ = writeln!(block, "Input Reading Time: {read_seconds}");
    let _ = writeln!(block, "-------------------------------");
    let _ = writeln!(block, "Restarts: {}", counters.restarts);
    let _ = writeln!(block, "Learned clauses: {}", counters.learnt);
    let _ = writeln!(block, "Decisions made: {}", counters.decisions);
    let _ = writeln!(block, "Implications made: {}", counters.implications);
    let _ = writeln!(block, "Time taken: {total_seconds}");
    let _ = writeln!(block, "----------- Time breakup ----------------------");
    let _ = writeln!(block, "BCP Time: {}", counters.bcp_time.as_secs_f64());
    let _ = writeln!(block, "Decide Time: {}", counters.decide_time.as_secs_f64());
    let _ = writeln!(block, "Conflict Analyze Time: {}", counters.analysis_time.as_secs_f64());
    let _ = writeln!(block, "Backtrack Time: {}", counters.backjump_time.as_secs_f64());
    let _ = writeln!(block, "-------------------------------");
    let _ = writeln!(block, "RESULT: {report}");
    let _ = writeln!(block, "Statistics stored in file: {statistics_file}");
    if report == Report::Satisfiable {
        let _ = writeln!(block, "Satisfying Assignment stored in file: {assignment_file}");
    }
    let _ = write!(block, "======================================================================");

    block
}
