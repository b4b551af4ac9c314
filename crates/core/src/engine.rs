//! Shared stepping engine: double-buffered grids driven by a model's rule
//!
//! Both automata follow one structural pattern: a model supplies the seeding
//! policy and a pure per-cell transition rule, and [`Simulation`] owns the
//! two state buffers, sweeps every cell in row-major order reading only the
//! current buffer, then swaps buffers and advances the step counter. A step
//! is atomic with respect to observers: the current grid is never exposed in
//! a partially-updated state.

use crate::error::SimulationError;
use crate::grid::Grid;
use rand::Rng;
use tracing::{debug, trace};

/// Seeding policy and transition rule for one cellular automaton
///
/// `next_state` must be a pure function of the current grid: it may read any
/// cell of `current` but must not depend on previously computed next states.
pub trait Model {
    /// Discrete per-cell state
    type Cell: Copy + Default + PartialEq + std::fmt::Debug;

    /// Side length of the lattice this model was configured for
    fn size(&self) -> usize;

    /// Populate an all-default grid with the model's initial state
    ///
    /// # Errors
    /// Returns [`SimulationError::InsufficientCells`] when the model's
    /// seeding formula asks for more distinct positions than the lattice
    /// holds.
    fn seed<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid<Self::Cell>,
        rng: &mut R,
    ) -> Result<(), SimulationError>;

    /// Next state of the cell at `(row, col)` given the current grid
    fn next_state(&self, current: &Grid<Self::Cell>, row: usize, col: usize) -> Self::Cell;
}

/// Double-buffered stepper for a [`Model`]
///
/// Owns both grid buffers and the step counter exclusively; the only
/// externally visible state is a read-only snapshot of the current grid
/// between steps. Buffer exchange is an O(1) ownership swap, never an
/// element copy.
#[derive(Debug, Clone)]
pub struct Simulation<M: Model> {
    model: M,
    current: Grid<M::Cell>,
    next: Grid<M::Cell>,
    step_counter: u64,
    initialized: bool,
}

impl<M: Model> Simulation<M> {
    /// Create a simulation with both buffers filled with the default cell
    /// state
    ///
    /// The grids stay blank until [`Simulation::initialize`] seeds them.
    pub fn new(model: M) -> Self {
        let size = model.size();
        Simulation {
            model,
            current: Grid::new(size, M::Cell::default()),
            next: Grid::new(size, M::Cell::default()),
            step_counter: 0,
            initialized: false,
        }
    }

    /// The model this simulation was constructed with
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Seed the initial state from the thread-local RNG
    ///
    /// Must be called once before the first [`Simulation::step`]. Calling it
    /// again discards all state and reseeds from scratch (step counter back
    /// to 0).
    ///
    /// # Errors
    /// Propagates seeding failures from the model, see [`Model::seed`].
    pub fn initialize(&mut self) -> Result<(), SimulationError> {
        self.initialize_with_rng(&mut rand::rng())
    }

    /// Seed the initial state from a caller-provided RNG
    ///
    /// Use with a seeded RNG for reproducible runs; all randomness is
    /// confined to this call, stepping is fully deterministic.
    ///
    /// # Errors
    /// Propagates seeding failures from the model, see [`Model::seed`].
    pub fn initialize_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), SimulationError> {
        self.current.fill(M::Cell::default());
        self.next.fill(M::Cell::default());
        self.step_counter = 0;
        self.initialized = false;

        self.model.seed(&mut self.current, rng)?;
        self.initialized = true;
        debug!(size = self.model.size(), "lattice initialized");
        Ok(())
    }

    /// Advance the simulation by one discrete time step
    ///
    /// Computes every cell of the next grid from the current one in a fixed
    /// row-major order, then swaps buffers and increments the step counter.
    ///
    /// # Errors
    /// Returns [`SimulationError::NotInitialized`] if called before a
    /// successful [`Simulation::initialize`] (fail-fast; stepping a blank
    /// grid is almost certainly a driver bug).
    pub fn step(&mut self) -> Result<(), SimulationError> {
        if !self.initialized {
            return Err(SimulationError::NotInitialized);
        }

        let size = self.model.size();
        for row in 0..size {
            for col in 0..size {
                let state = self.model.next_state(&self.current, row, col);
                self.next.set(row, col, state);
            }
        }

        std::mem::swap(&mut self.current, &mut self.next);
        self.step_counter += 1;
        trace!(step = self.step_counter, "step complete");
        Ok(())
    }

    /// Advance the simulation by `steps` discrete time steps
    ///
    /// Equivalent to calling [`Simulation::step`] in a loop; every sub-step
    /// is executed in full.
    ///
    /// # Errors
    /// Returns [`SimulationError::NotInitialized`] if called before a
    /// successful [`Simulation::initialize`].
    pub fn run(&mut self, steps: u64) -> Result<(), SimulationError> {
        for _ in 0..steps {
            self.step()?;
        }
        Ok(())
    }

    /// Read-only snapshot of the current grid
    pub fn grid(&self) -> &Grid<M::Cell> {
        &self.current
    }

    /// Number of completed steps since the last initialization
    pub fn step_count(&self) -> u64 {
        self.step_counter
    }
}
