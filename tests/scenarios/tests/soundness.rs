//! Path soundness and report coherence locks.
//!
//! - Every solved path replays step by step through the environment.
//! - Explored lists start at the source and carry no duplicates.
//! - Counter relationships hold across all algorithms and outcomes.

use std::collections::HashSet;

use scenario_tests::{assert_path_valid, grid_with_walls, solvable_grids};
use wayfind_grid::cell::Cell;
use wayfind_grid::grid::Grid;
use wayfind_search::algorithm::Algorithm;
use wayfind_search::report::Termination;
use wayfind_search::solver::Solver;

fn enclosed_target() -> Grid {
    grid_with_walls(5, 5, (0, 0), (2, 2), &[(1, 2), (3, 2), (2, 1), (2, 3)])
}

// --- path replay ---

#[test]
fn solved_paths_replay_through_the_environment() {
    for (i, grid) in solvable_grids().iter().enumerate() {
        for algorithm in Algorithm::ALL {
            let report = Solver::new(grid).solve(algorithm).unwrap();
            assert!(report.is_solved(), "grid {i}: {algorithm} found no path");
            assert_path_valid(grid, &report);
        }
    }
}

// --- explored discipline ---

#[test]
fn explored_starts_at_the_source_and_has_no_duplicates() {
    let mut grids = solvable_grids();
    grids.push(enclosed_target());

    for (i, grid) in grids.iter().enumerate() {
        for algorithm in Algorithm::ALL {
            let report = Solver::new(grid).solve(algorithm).unwrap();
            assert_eq!(
                report.explored.first(),
                Some(&grid.source_cell()),
                "grid {i}: {algorithm} expanded something before the source"
            );
            let unique: HashSet<Cell> = report.explored.iter().copied().collect();
            assert_eq!(
                unique.len(),
                report.explored.len(),
                "grid {i}: {algorithm} expanded a state twice"
            );
            for cell in &report.explored {
                assert!(
                    grid.in_bounds(*cell),
                    "grid {i}: {algorithm} expanded the out-of-bounds cell {cell}"
                );
            }
        }
    }
}

// --- outcome coherence ---

#[test]
fn outcome_signals_agree() {
    for (i, grid) in solvable_grids().iter().enumerate() {
        for algorithm in Algorithm::ALL {
            let report = Solver::new(grid).solve(algorithm).unwrap();
            assert!(report.is_solved(), "grid {i}: {algorithm} found no path");
            assert_eq!(report.stats.termination, Termination::TargetReached);
            let path = report.path.as_ref().unwrap();
            assert_eq!(report.path_len(), Some(path.len()));
        }
    }

    let blocked = enclosed_target();
    for algorithm in Algorithm::ALL {
        let report = Solver::new(&blocked).solve(algorithm).unwrap();
        assert!(!report.is_solved(), "{algorithm} solved an enclosed target");
        assert_eq!(report.path, None);
        assert_eq!(report.path_len(), None);
        assert_eq!(report.stats.termination, Termination::FrontierExhausted);
    }
}

// --- counter relationships ---

#[test]
fn counters_stay_mutually_consistent() {
    let mut grids = solvable_grids();
    grids.push(enclosed_target());

    for (i, grid) in grids.iter().enumerate() {
        for algorithm in Algorithm::ALL {
            let report = Solver::new(grid).solve(algorithm).unwrap();
            let stats = report.stats;

            // The frontier never holds more than the root plus every
            // generated node; neither does the expansion count.
            assert!(
                stats.frontier_high_water <= stats.generated + 1,
                "grid {i}: {algorithm} high water {} exceeds generated {}",
                stats.frontier_high_water,
                stats.generated
            );
            assert!(
                stats.expanded <= stats.generated + 1,
                "grid {i}: {algorithm} expanded {} exceeds generated {}",
                stats.expanded,
                stats.generated
            );
            assert_eq!(
                stats.expanded,
                u64::try_from(report.explored.len()).unwrap(),
                "grid {i}: {algorithm} expansion count disagrees with the explored list"
            );
            if let Some(len) = report.path_len() {
                assert!(
                    u64::try_from(len).unwrap() <= stats.generated,
                    "grid {i}: {algorithm} path is longer than everything it generated"
                );
            }
        }
    }
}
