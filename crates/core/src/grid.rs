//! Square toroidal lattice with radius-parameterized window aggregation
//!
//! The lattice wraps at its edges: all coordinate arithmetic is performed
//! modulo the side length, so every cell sees a full square window for any
//! radius without out-of-bounds access. Cells are stored in a flat row-major
//! `Vec` with index `row * size + col`.

use serde::{Deserialize, Serialize};

/// Fixed-size square lattice of cell states with periodic boundaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<C> {
    size: usize,
    cells: Vec<C>,
}

impl<C: Copy> Grid<C> {
    /// Create a `size × size` lattice with every cell set to `fill`
    pub fn new(size: usize, fill: C) -> Self {
        Grid {
            size,
            cells: vec![fill; size * size],
        }
    }

    /// Side length of the lattice
    pub fn size(&self) -> usize {
        self.size
    }

    /// Flat row-major index for in-range coordinates
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Cell state at in-range coordinates
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> C {
        self.cells[self.index(row, col)]
    }

    /// Set the cell state at in-range coordinates
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: C) {
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// Cell state at possibly out-of-range coordinates, wrapped onto the torus
    #[inline]
    pub fn get_wrapped(&self, row: isize, col: isize) -> C {
        let size = self.size as isize;
        let row = row.rem_euclid(size) as usize;
        let col = col.rem_euclid(size) as usize;
        self.get(row, col)
    }

    /// Set the cell state at a flat row-major index
    #[inline]
    pub(crate) fn set_flat(&mut self, idx: usize, value: C) {
        self.cells[idx] = value;
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    /// Iterator over rows as slices, top row first
    pub fn rows(&self) -> impl Iterator<Item = &[C]> {
        self.cells.chunks(self.size)
    }

    /// Reset every cell to `fill`
    pub(crate) fn fill(&mut self, fill: C) {
        self.cells.fill(fill);
    }

    /// True if any cell in the square window of the given radius around
    /// `(row, col)` satisfies `pred`, excluding the center offset itself.
    ///
    /// Visits `(2·radius + 1)² − 1` candidate offsets and short-circuits on
    /// the first match. With `radius ≥ size / 2` the same physical cell can
    /// be reached through several wraparound offsets; that is the intended
    /// small-torus semantics and is not special-cased.
    pub fn window_contains(
        &self,
        row: usize,
        col: usize,
        radius: usize,
        pred: impl Fn(C) -> bool,
    ) -> bool {
        let r = radius as isize;
        for dr in -r..=r {
            for dc in -r..=r {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if pred(self.get_wrapped(row as isize + dr, col as isize + dc)) {
                    return true;
                }
            }
        }
        false
    }

    /// Sum `weight` over the full square window of the given radius around
    /// `(row, col)`, center cell included.
    ///
    /// Visits all `(2·radius + 1)²` offsets with no short-circuit. Wrapped
    /// offsets that land on the same physical cell are counted once per
    /// offset (see [`Grid::window_contains`]).
    pub fn window_sum(
        &self,
        row: usize,
        col: usize,
        radius: usize,
        weight: impl Fn(C) -> u32,
    ) -> u32 {
        let r = radius as isize;
        let mut sum = 0;
        for dr in -r..=r {
            for dc in -r..=r {
                sum += weight(self.get_wrapped(row as isize + dr, col as isize + dc));
            }
        }
        sum
    }
}
