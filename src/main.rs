//! CLI binary: argument parsing, logging initialization, timing, and the
//! textual result format.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use cdcl_sat::branching::{BranchingStrategy, Dlis, Frequency, Ordered, Random};
use cdcl_sat::dimacs::parse_dimacs;
use cdcl_sat::literal::Variable;
use cdcl_sat::solver::{SolveResult, Solver};

/// RNG seed used by `--heuristic random` when none is given on the command
/// line, fixed so default runs stay reproducible.
const DEFAULT_SEED: u64 = 0xC0FF_EE00_D15E_A5E5;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Heuristic {
    Ordered,
    Random,
    Frequency,
    Dlis,
}

#[derive(Parser, Debug)]
#[command(name = "cdcl-sat", about = "A CDCL SAT solver with non-chronological backjumping")]
struct Cli {
    /// Path to a DIMACS CNF file.
    path: PathBuf,

    /// Branching heuristic.
    #[arg(long, value_enum, default_value_t = Heuristic::Ordered)]
    heuristic: Heuristic,

    /// Log level forwarded to `env_logger`.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// RNG seed for the Random heuristic.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let path_display = cli.path.display().to_string();
    let contents = std::fs::read_to_string(&cli.path).with_context(|| format!("failed to read {}", path_display))?;
    let parsed = parse_dimacs(&contents).with_context(|| format!("failed to parse {}", path_display))?;

    let strategy: Box<dyn BranchingStrategy> = match cli.heuristic {
        Heuristic::Ordered => Box::new(Ordered),
        Heuristic::Random => Box::new(Random::new(cli.seed)),
        Heuristic::Frequency => Box::new(Frequency::default()),
        Heuristic::Dlis => Box::new(Dlis),
    };

    println!("c ====================");
    println!("c reading from {}", path_display);
    println!("c ====================");

    let solver = Solver::new(parsed.formula, parsed.num_variables, strategy);

    let start = Instant::now();
    let (result, picked) = solver.solve();
    let elapsed = start.elapsed();

    match result {
        SolveResult::Sat(assignment) => {
            println!("s SATISFIABLE");
            let v_line: String = (1..=assignment.num_variables())
                .map(|idx| {
                    let variable = Variable::new(idx as u32);
                    let sign = if assignment.value_of_variable(variable).is_true() { "+" } else { "-" };
                    format!("{}{}", sign, idx)
                })
                .collect::<Vec<_>>()
                .join(" ");
            println!("v {}", v_line);
        }
        SolveResult::Unsat => {
            println!("s UNSATISFIABLE");
        }
    }

    println!("c Done (time: {:.6} s, picked: {} times)", elapsed.as_secs_f64(), picked);

    Ok(())
}
