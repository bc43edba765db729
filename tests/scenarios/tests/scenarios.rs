//! End-to-end scenarios over concrete boards and minimal environments.
//!
//! - Canonical boards: open corner-to-corner, forced detour, enclosed
//!   target, walled endpoints, trivial source-on-target.
//! - Policy behavior: expansion budgets and cooperative cancellation.
//! - Heuristic pre-flight for informed algorithms.
//! - Stable JSON shape of the stats surface.

use scenario_tests::{assert_path_valid, grid_with_walls};
use wayfind_grid::cell::{Cell, Direction};
use wayfind_search::algorithm::Algorithm;
use wayfind_search::environment::Environment;
use wayfind_search::error::SearchError;
use wayfind_search::node::Step;
use wayfind_search::policy::{CancelToken, SearchPolicy};
use wayfind_search::report::{SearchStats, Termination};
use wayfind_search::solver::Solver;

/// Linear chain counting down to zero. Provides no heuristic.
struct Countdown {
    start: u32,
}

impl Environment for Countdown {
    type State = u32;
    type Action = ();

    fn source(&self) -> u32 {
        self.start
    }

    fn actions(&self, state: &u32) -> Vec<()> {
        if *state == 0 {
            Vec::new()
        } else {
            vec![()]
        }
    }

    fn transition(&self, state: &u32, _action: &()) -> u32 {
        *state - 1
    }

    fn is_target(&self, state: &u32) -> bool {
        *state == 0
    }
}

/// Environment with no moves at all; its target is unreachable.
struct Stuck;

impl Environment for Stuck {
    type State = u8;
    type Action = ();

    fn source(&self) -> u8 {
        0
    }

    fn actions(&self, _state: &u8) -> Vec<()> {
        Vec::new()
    }

    fn transition(&self, state: &u8, _action: &()) -> u8 {
        *state
    }

    fn is_target(&self, _state: &u8) -> bool {
        false
    }
}

// --- canonical boards ---

#[test]
fn open_board_corner_to_corner() {
    let grid = grid_with_walls(5, 5, (0, 0), (4, 4), &[]);

    let bfs = Solver::new(&grid).solve(Algorithm::Bfs).unwrap();
    assert_eq!(bfs.path_len(), Some(8), "bfs must find an 8-step path");

    let astar = Solver::new(&grid).solve(Algorithm::AStar).unwrap();
    assert_eq!(astar.path_len(), Some(8), "astar must find an 8-step path");

    let greedy = Solver::new(&grid).solve(Algorithm::GreedyBfs).unwrap();
    assert_eq!(
        greedy.path_len(),
        Some(8),
        "greedy descends the heuristic straight to the corner"
    );

    let dfs = Solver::new(&grid).solve(Algorithm::Dfs).unwrap();
    assert_path_valid(&grid, &dfs);
    assert!(
        dfs.path_len().unwrap() >= 8,
        "no path can beat the optimum"
    );
}

#[test]
fn forced_detour_returns_the_unique_path() {
    // The middle column is walled except at the top, leaving exactly one
    // simple path from source to target.
    let grid = grid_with_walls(3, 3, (2, 0), (2, 2), &[(1, 1), (2, 1)]);
    let expected = vec![
        Step {
            action: Direction::Up,
            state: Cell::new(1, 0),
        },
        Step {
            action: Direction::Up,
            state: Cell::new(0, 0),
        },
        Step {
            action: Direction::Right,
            state: Cell::new(0, 1),
        },
        Step {
            action: Direction::Right,
            state: Cell::new(0, 2),
        },
        Step {
            action: Direction::Down,
            state: Cell::new(1, 2),
        },
        Step {
            action: Direction::Down,
            state: Cell::new(2, 2),
        },
    ];

    for algorithm in Algorithm::ALL {
        let report = Solver::new(&grid).solve(algorithm).unwrap();
        assert_eq!(
            report.path.as_ref(),
            Some(&expected),
            "{algorithm} deviated from the only path"
        );
    }
}

#[test]
fn enclosed_target_exhausts_the_reachable_region() {
    // A closed ring of walls around the target cell.
    let grid = grid_with_walls(5, 5, (0, 0), (2, 2), &[(1, 2), (3, 2), (2, 1), (2, 3)]);

    for algorithm in Algorithm::ALL {
        let report = Solver::new(&grid).solve(algorithm).unwrap();
        assert_eq!(report.path, None, "{algorithm} crossed a wall");
        assert_eq!(report.stats.termination, Termination::FrontierExhausted);
        // Everything outside the ring: 25 cells minus 4 walls minus the
        // sealed target.
        assert_eq!(
            report.explored.len(),
            20,
            "{algorithm} missed part of the reachable region"
        );
    }
}

#[test]
fn source_on_target_solves_without_searching() {
    let open = grid_with_walls(3, 3, (1, 1), (1, 1), &[]);
    // A wall on the shared endpoint changes nothing: the run ends before
    // any move is considered.
    let walled = grid_with_walls(3, 3, (1, 1), (1, 1), &[(1, 1)]);

    for grid in [&open, &walled] {
        for algorithm in Algorithm::ALL {
            let report = Solver::new(grid).solve(algorithm).unwrap();
            assert_eq!(report.path, Some(Vec::new()));
            assert!(report.explored.is_empty());
            assert_eq!(
                report.stats,
                SearchStats {
                    expanded: 0,
                    generated: 0,
                    duplicates_suppressed: 0,
                    frontier_high_water: 0,
                    termination: Termination::TargetReached,
                }
            );
        }
    }
}

#[test]
fn walled_target_is_unreachable() {
    let grid = grid_with_walls(3, 3, (0, 0), (2, 2), &[(2, 2)]);

    for algorithm in Algorithm::ALL {
        let report = Solver::new(&grid).solve(algorithm).unwrap();
        assert_eq!(report.path, None, "{algorithm} entered a walled target");
        assert_eq!(report.stats.termination, Termination::FrontierExhausted);
        assert_eq!(report.explored.len(), 8);
    }
}

#[test]
fn walled_source_can_still_be_left() {
    // Walls block entry, not occupancy.
    let grid = grid_with_walls(1, 3, (0, 0), (0, 2), &[(0, 0)]);

    for algorithm in Algorithm::ALL {
        let report = Solver::new(&grid).solve(algorithm).unwrap();
        assert_eq!(
            report.path_len(),
            Some(2),
            "{algorithm} failed to leave a walled source"
        );
        assert_path_valid(&grid, &report);
    }
}

// --- policies ---

#[test]
fn zero_budget_stops_before_the_first_expansion() {
    let grid = grid_with_walls(5, 5, (0, 0), (4, 4), &[]);
    let policy = SearchPolicy {
        max_expansions: Some(0),
        cancel: None,
    };

    for algorithm in Algorithm::ALL {
        let report = Solver::with_policy(&grid, policy.clone())
            .solve(algorithm)
            .unwrap();
        assert_eq!(report.stats.termination, Termination::BudgetExceeded);
        assert_eq!(report.path, None);
        assert!(report.explored.is_empty());
        assert_eq!(report.stats.expanded, 0);
        assert_eq!(report.stats.generated, 0);
        // The root entered the frontier before the budget was consulted.
        assert_eq!(report.stats.frontier_high_water, 1);
    }
}

#[test]
fn ample_budget_never_fires() {
    let grid = grid_with_walls(3, 3, (2, 0), (2, 2), &[(1, 1), (2, 1)]);
    let policy = SearchPolicy {
        max_expansions: Some(1000),
        cancel: None,
    };

    for algorithm in Algorithm::ALL {
        let report = Solver::with_policy(&grid, policy.clone())
            .solve(algorithm)
            .unwrap();
        assert_eq!(report.stats.termination, Termination::TargetReached);
        assert_eq!(report.path_len(), Some(6));
    }
}

#[test]
fn pre_cancelled_token_stops_before_the_first_expansion() {
    let grid = grid_with_walls(5, 5, (0, 0), (4, 4), &[]);
    let token = CancelToken::new();
    token.cancel();
    let policy = SearchPolicy {
        max_expansions: None,
        cancel: Some(token),
    };

    for algorithm in Algorithm::ALL {
        let report = Solver::with_policy(&grid, policy.clone())
            .solve(algorithm)
            .unwrap();
        assert_eq!(report.stats.termination, Termination::Cancelled);
        assert_eq!(report.path, None);
        assert!(report.explored.is_empty());
        assert_eq!(report.stats.expanded, 0);
    }
}

#[test]
fn untriggered_token_changes_nothing() {
    let grid = grid_with_walls(3, 3, (2, 0), (2, 2), &[(1, 1), (2, 1)]);
    let policy = SearchPolicy {
        max_expansions: None,
        cancel: Some(CancelToken::new()),
    };

    for algorithm in Algorithm::ALL {
        let plain = Solver::new(&grid).solve(algorithm).unwrap();
        let with_token = Solver::with_policy(&grid, policy.clone())
            .solve(algorithm)
            .unwrap();
        assert_eq!(with_token.path, plain.path);
        assert_eq!(with_token.explored, plain.explored);
        assert_eq!(with_token.stats, plain.stats);
    }
}

#[test]
fn budget_is_checked_before_cancellation() {
    let grid = grid_with_walls(3, 3, (0, 0), (2, 2), &[]);
    let token = CancelToken::new();
    token.cancel();
    let policy = SearchPolicy {
        max_expansions: Some(0),
        cancel: Some(token),
    };

    let report = Solver::with_policy(&grid, policy)
        .solve(Algorithm::Bfs)
        .unwrap();
    assert_eq!(report.stats.termination, Termination::BudgetExceeded);
}

// --- heuristic-free environments ---

#[test]
fn informed_algorithms_require_a_heuristic() {
    let env = Countdown { start: 4 };

    for algorithm in [Algorithm::GreedyBfs, Algorithm::AStar] {
        assert_eq!(
            Solver::new(&env).solve(algorithm).unwrap_err(),
            SearchError::HeuristicUnavailable { algorithm }
        );
    }

    for algorithm in [Algorithm::Dfs, Algorithm::Bfs] {
        let report = Solver::new(&env).solve(algorithm).unwrap();
        assert_eq!(report.path_len(), Some(4), "{algorithm} missed the chain");
        assert_eq!(report.explored, vec![4, 3, 2]);
        assert_eq!(report.stats.expanded, 3);
        assert_eq!(report.stats.generated, 4);
        assert_eq!(report.stats.frontier_high_water, 1);
    }
}

#[test]
fn heuristic_check_precedes_the_trivial_solve() {
    // Even a source that already satisfies the target does not excuse a
    // missing heuristic.
    let env = Countdown { start: 0 };
    assert_eq!(
        Solver::new(&env).solve(Algorithm::AStar).unwrap_err(),
        SearchError::HeuristicUnavailable {
            algorithm: Algorithm::AStar
        }
    );
    let report = Solver::new(&env).solve(Algorithm::Bfs).unwrap();
    assert_eq!(report.path, Some(Vec::new()));
}

#[test]
fn environment_without_moves_exhausts_immediately() {
    let env = Stuck;

    for algorithm in [Algorithm::Dfs, Algorithm::Bfs] {
        let report = Solver::new(&env).solve(algorithm).unwrap();
        assert_eq!(report.stats.termination, Termination::FrontierExhausted);
        assert_eq!(report.path, None);
        assert_eq!(report.explored, vec![0]);
        assert_eq!(report.stats.expanded, 1);
        assert_eq!(report.stats.generated, 0);
    }
}

// --- wall editing between solves ---

#[test]
fn wall_edits_apply_to_the_next_solve() {
    let mut grid = grid_with_walls(3, 3, (0, 0), (2, 2), &[]);
    let before = Solver::new(&grid).solve(Algorithm::Bfs).unwrap();
    assert_eq!(before.path_len(), Some(4));

    // Seal the source in its corner.
    grid.add_wall(Cell::new(0, 1)).unwrap();
    grid.add_wall(Cell::new(1, 0)).unwrap();
    let sealed = Solver::new(&grid).solve(Algorithm::Bfs).unwrap();
    assert_eq!(sealed.path, None);
    assert_eq!(sealed.explored, vec![Cell::new(0, 0)]);

    // Clearing the walls restores the original result exactly.
    grid.clear_walls();
    let after = Solver::new(&grid).solve(Algorithm::Bfs).unwrap();
    assert_eq!(after.path, before.path);
    assert_eq!(after.explored, before.explored);
    assert_eq!(after.stats, before.stats);
}

// --- stats surface ---

#[test]
fn stats_serialize_with_a_stable_shape() {
    let grid = grid_with_walls(3, 3, (0, 0), (2, 2), &[]);
    let report = Solver::new(&grid).solve(Algorithm::Bfs).unwrap();

    let value = report.stats.to_json_value();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 5, "unexpected stats key count");
    for key in [
        "duplicates_suppressed",
        "expanded",
        "frontier_high_water",
        "generated",
        "termination",
    ] {
        assert!(object.contains_key(key), "missing stats key {key}");
    }
    assert_eq!(value["termination"], "target_reached");
}
