//! Wayfind Search: four classic search strategies over one environment
//! contract.
//!
//! This crate is the engine layer. It knows nothing about grids, mazes, or
//! any concrete domain — those live in `wayfind_grid`, which depends on
//! this crate and not the other way around.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfind_search  ←  wayfind_grid
//! (engine)            (grid environment, maze I/O, CLI)
//! ```
//!
//! # Key types
//!
//! - [`environment::Environment`] — contract a searchable domain implements
//! - [`algorithm::Algorithm`] — DFS, BFS, greedy best-first, or A*
//! - [`solver::Solver`] — the uniform expansion loop
//! - [`report::SearchReport`] — path, explored order, and run statistics
//! - [`frontier::Frontier`] — one frontier, three removal disciplines
//! - [`policy::SearchPolicy`] — optional budget and cancellation

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod environment;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod report;
pub mod solver;
