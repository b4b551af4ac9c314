//! Activation-inhibition automaton (Turing-style pattern formation)
//!
//! Each cell compares a short-range activation sum against a long-range
//! inhibition sum over two square windows centered on it. Short-range
//! cooperation pushes the cell toward `Active`, long-range competition
//! toward `Inactive`; the tug-of-war settles into stripes and spots.

use crate::engine::{Model, Simulation};
use crate::error::SimulationError;
use crate::grid::Grid;
use crate::sampling::sample_distinct_indices;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Binary state of one pattern cell; flips freely every step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternCell {
    /// Not contributing to either sum
    #[default]
    Inactive,
    /// Contributing 1 to every window that covers it
    Active,
}

impl PatternCell {
    /// Contribution of this cell to a window sum
    #[inline]
    pub fn as_bit(self) -> u32 {
        match self {
            PatternCell::Inactive => 0,
            PatternCell::Active => 1,
        }
    }
}

/// Validated parameters for the activation-inhibition automaton
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternModel {
    size: usize,
    density: f64,
    short_radius: usize,
    long_radius: usize,
    short_weight: f64,
    long_weight: f64,
}

impl PatternModel {
    /// Validate and build activation-inhibition parameters
    ///
    /// `short_radius`/`short_weight` control the activation window,
    /// `long_radius`/`long_weight` the inhibition window; both windows
    /// include the center cell. `density` is the fraction of cells activated
    /// at initialization.
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidParameter`] when `size == 0`,
    /// `density` is outside `[0, 1]`, either radius is `< 1`,
    /// `long_radius < short_radius`, or a weight is not finite.
    pub fn new(
        size: usize,
        density: f64,
        short_radius: usize,
        long_radius: usize,
        short_weight: f64,
        long_weight: f64,
    ) -> Result<Self, SimulationError> {
        if size == 0 {
            return Err(SimulationError::InvalidParameter(
                "size must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&density) {
            return Err(SimulationError::InvalidParameter(format!(
                "density must be in [0, 1], got {density}"
            )));
        }
        if short_radius < 1 || long_radius < 1 {
            return Err(SimulationError::InvalidParameter(
                "radii must be at least 1".to_string(),
            ));
        }
        if long_radius < short_radius {
            return Err(SimulationError::InvalidParameter(format!(
                "long_radius ({long_radius}) must be at least short_radius ({short_radius})"
            )));
        }
        if !short_weight.is_finite() || !long_weight.is_finite() {
            return Err(SimulationError::InvalidParameter(
                "weights must be finite".to_string(),
            ));
        }
        Ok(PatternModel {
            size,
            density,
            short_radius,
            long_radius,
            short_weight,
            long_weight,
        })
    }

    /// Configured initial activation density
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Configured activation window radius
    pub fn short_radius(&self) -> usize {
        self.short_radius
    }

    /// Configured inhibition window radius
    pub fn long_radius(&self) -> usize {
        self.long_radius
    }

    /// How many cells `seed` will activate for this configuration
    ///
    /// `⌊density · size²⌋ + 1`: the `+ 1` guarantees at least one active
    /// cell even at `density = 0`, so a freshly seeded lattice always has
    /// something to evolve from. Note the count can exceed `size²` at
    /// `density = 1`, in which case seeding fails with `InsufficientCells`.
    pub fn seed_count(&self) -> usize {
        let total = self.size * self.size;
        (self.density * total as f64).floor() as usize + 1
    }
}

impl Model for PatternModel {
    type Cell = PatternCell;

    fn size(&self) -> usize {
        self.size
    }

    /// Activate [`PatternModel::seed_count`] distinct cells uniformly at
    /// random without replacement.
    ///
    /// # Errors
    /// Returns [`SimulationError::InsufficientCells`] when the seed count
    /// exceeds `size²` (reachable at `density = 1`).
    fn seed<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid<PatternCell>,
        rng: &mut R,
    ) -> Result<(), SimulationError> {
        let total = self.size * self.size;
        let active_count = self.seed_count();

        let positions = sample_distinct_indices(rng, total, active_count)?;
        for &idx in &positions {
            grid.set_flat(idx, PatternCell::Active);
        }

        debug!(active = active_count, "pattern seeded");
        Ok(())
    }

    fn next_state(&self, current: &Grid<PatternCell>, row: usize, col: usize) -> PatternCell {
        let na = current.window_sum(row, col, self.short_radius, PatternCell::as_bit);
        let ni = current.window_sum(row, col, self.long_radius, PatternCell::as_bit);

        let diff = self.short_weight * f64::from(na) - self.long_weight * f64::from(ni);
        if diff > 0.0 {
            PatternCell::Active
        } else {
            PatternCell::Inactive
        }
    }
}

/// Activation-inhibition simulation over a [`PatternModel`]
pub type TuringPattern = Simulation<PatternModel>;

impl Simulation<PatternModel> {
    /// Number of active cells in the current grid
    pub fn active_count(&self) -> usize {
        self.grid()
            .cells()
            .iter()
            .filter(|&&c| c == PatternCell::Active)
            .count()
    }
}
