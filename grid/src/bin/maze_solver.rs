//! Batch maze solver: load a maze file, run one algorithm, print the
//! result.
//!
//! Exit code 0 when a path was found, 1 when the search finished without
//! one, 2 on usage or input errors.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use wayfind_grid::cell::{Cell, Direction};
use wayfind_grid::maze::{load_maze, render_solution};
use wayfind_search::algorithm::Algorithm;
use wayfind_search::policy::SearchPolicy;
use wayfind_search::report::SearchReport;
use wayfind_search::solver::Solver;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Maze file: `#` wall, `A` source, `B` target, space or `.` open.
    maze: PathBuf,

    /// Search algorithm: dfs, bfs, greedy, or astar.
    #[clap(long, default_value = "bfs")]
    algorithm: String,

    /// Mark explored squares with `.` in the rendered board.
    #[clap(long)]
    show_explored: bool,

    /// Emit a JSON object instead of the rendered board.
    #[clap(long)]
    json: bool,

    /// Stop after this many node expansions.
    #[clap(long)]
    max_expansions: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<bool, String> {
    let algorithm: Algorithm = args.algorithm.parse().map_err(|e| format!("{e}"))?;
    let grid = load_maze(&args.maze).map_err(|e| format!("{e}"))?;

    let policy = SearchPolicy {
        max_expansions: args.max_expansions,
        cancel: None,
    };
    let solver = Solver::with_policy(&grid, policy);
    let report = solver.solve(algorithm).map_err(|e| format!("{e}"))?;

    if args.json {
        println!("{}", report_to_json(&report));
    } else {
        print!("{}", render_solution(&grid, &report, args.show_explored));
        match report.path_len() {
            Some(steps) => println!("{algorithm}: solved in {steps} steps"),
            None => println!("{algorithm}: no path ({})", report.stats.termination),
        }
        let stats = report.stats;
        println!(
            "expanded {} / generated {} / duplicates {} / frontier peak {}",
            stats.expanded,
            stats.generated,
            stats.duplicates_suppressed,
            stats.frontier_high_water
        );
    }

    Ok(report.is_solved())
}

fn report_to_json(report: &SearchReport<Cell, Direction>) -> serde_json::Value {
    let path = report.path.as_ref().map(|steps| {
        steps
            .iter()
            .map(|step| {
                serde_json::json!({
                    "action": step.action.as_str(),
                    "col": step.state.col,
                    "row": step.state.row,
                })
            })
            .collect::<Vec<_>>()
    });

    serde_json::json!({
        "algorithm": report.algorithm.as_str(),
        "path": path,
        "solved": report.is_solved(),
        "stats": report.stats.to_json_value(),
    })
}
