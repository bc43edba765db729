//! Wayfind Grid: a rectangular wall-grid environment plus maze text I/O.
//!
//! States are [`cell::Cell`] coordinates, actions are [`cell::Direction`]
//! moves, and [`grid::Grid`] implements the engine's environment contract
//! with a Manhattan-distance heuristic. [`maze`] reads and renders the
//! text form (`#` wall, `A` source, `B` target); the `maze_solver` binary
//! drives one solve over a maze file.

#![forbid(unsafe_code)]

pub mod cell;
pub mod grid;
pub mod maze;
