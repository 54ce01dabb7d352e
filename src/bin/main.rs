use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, ValueEnum};
use env_logger::Env;

use dictionary_lp::{OptimizationResult, Options, Phase, PivotRuleKind};
use dictionary_lp::io::import;

/// A linear program solver written in rust.
///
/// Maximizes `objective^T x + constant` subject to `constraints x <= b`, `x >= 0`.
#[derive(Parser)]
#[command(version, author)]
struct Opts {
    /// File containing the problem description, in JSON format
    problem_file: PathBuf,
    /// Rule deciding which variable enters the basis
    #[arg(long, value_enum, default_value_t = Rule::FirstProfitable)]
    rule: Rule,
    /// Largest artificial objective value for which the problem counts as feasible
    #[arg(long, default_value_t = 1e-12)]
    tolerance: f64,
    /// Log the progress of both phases
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Rule {
    FirstProfitable,
    SmallestIndex,
    SteepestAscent,
}

impl From<Rule> for PivotRuleKind {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::FirstProfitable => PivotRuleKind::FirstProfitable,
            Rule::SmallestIndex => PivotRuleKind::SmallestIndex,
            Rule::SteepestAscent => PivotRuleKind::SteepestAscentAlongVariable,
        }
    }
}

fn main() {
    let opts: Opts = Opts::parse();

    let default_filter = if opts.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    println!("Reading problem file: \"{}\"...", opts.problem_file.to_string_lossy());
    let problem = match import(&opts.problem_file) {
        Ok(problem) => problem,
        Err(error) => {
            eprintln!("Couldn't read the problem: {}", error);
            exit(1);
        },
    };

    let options = Options {
        feasibility_tolerance: opts.tolerance,
        pivot_rule: opts.rule.into(),
    };

    println!("Solving...");
    let (result, statistics) = problem.solve_with_statistics(&options);

    match result {
        OptimizationResult::FiniteOptimum(solution) => {
            println!("Solution computed.\n{}", solution);
        },
        OptimizationResult::Infeasible => println!("Problem is not feasible."),
        OptimizationResult::Unbounded => println!("Problem is unbounded."),
    }
    println!(
        "Basis changes: {} in phase one, {} in phase two.",
        statistics.basis_changes[Phase::One], statistics.basis_changes[Phase::Two],
    );
}
