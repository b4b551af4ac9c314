//! Toroidal Cellular Automata Core Library
//!
//! Discrete-time cellular automata on a square lattice with periodic
//! boundaries, driven by a shared double-buffered stepping engine:
//! - a fire-spread model (threshold contagion over a radius-parameterized
//!   Moore-style window)
//! - an activation-inhibition pattern-formation model (short-range
//!   activation competing against long-range inhibition)
//!
//! Rendering, animation, and progress reporting are external collaborators:
//! they read a grid snapshot and the step counter between steps and never
//! mutate simulation state.

pub mod engine;
pub mod error;
pub mod fire;
pub mod grid;
pub mod pattern;
pub mod sampling;

// Re-export the engine surface
pub use engine::{Model, Simulation};
pub use error::SimulationError;
pub use grid::Grid;

// Re-export both automata
pub use fire::{FireCell, FireCensus, FireModel, ForestFire};
pub use pattern::{PatternCell, PatternModel, TuringPattern};
