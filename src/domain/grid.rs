use rand::Rng;
use rayon::prelude::*;

use super::Cell;
use crate::error::ConfigError;

/// Offsets of the 26-cell Moore neighborhood, (0, 0, 0) excluded.
const NEIGHBOR_OFFSETS: [(i64, i64, i64); 26] = {
    let mut offsets = [(0, 0, 0); 26];
    let mut i = 0;
    let mut dz = -1;
    while dz <= 1 {
        let mut dy = -1;
        while dy <= 1 {
            let mut dx = -1;
            while dx <= 1 {
                if dx != 0 || dy != 0 || dz != 0 {
                    offsets[i] = (dx, dy, dz);
                    i += 1;
                }
                dx += 1;
            }
            dy += 1;
        }
        dz += 1;
    }
    offsets
};

/// VoxelGrid is a fixed cube of `edge³` cells.
/// Cells are stored flat with x varying fastest: `x + y*edge + z*edge*edge`.
/// Generations are computed functionally; `evolve` never mutates `self`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    edge: usize,
    cells: Vec<Cell>,
}

impl VoxelGrid {
    /// Create a new grid with all cells dead
    pub fn new(edge: usize) -> Result<Self, ConfigError> {
        Self::from_fn(edge, |_, _, _| Cell::Dead)
    }

    /// Create a grid whose cells are computed from their coordinates
    pub fn from_fn(
        edge: usize,
        mut f: impl FnMut(usize, usize, usize) -> Cell,
    ) -> Result<Self, ConfigError> {
        let len = match edge.checked_pow(3) {
            Some(len) if len > 0 => len,
            _ => return Err(ConfigError::InvalidEdge(edge)),
        };
        let cells = (0..len)
            .map(|idx| {
                let (x, y, z) = Self::coords_of(edge, idx);
                f(x, y, z)
            })
            .collect();
        Ok(Self { edge, cells })
    }

    /// Seed a grid where every cell is independently alive with `probability`.
    /// One uniform draw in [0, 1) is consumed per cell, in index order.
    pub fn random<R: Rng + ?Sized>(
        edge: usize,
        probability: f64,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigError::InvalidProbability(probability));
        }
        Self::from_fn(edge, |_, _, _| {
            Cell::from_alive(rng.random::<f64>() < probability)
        })
    }

    /// Edge length of the cube
    pub const fn edge(&self) -> usize {
        self.edge
    }

    /// Number of cells (`edge³`)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert 3D coordinates to the flat index, `None` when out of bounds
    pub const fn index_of(&self, x: usize, y: usize, z: usize) -> Option<usize> {
        let n = self.edge;
        if x < n && y < n && z < n {
            Some(x + y * n + z * n * n)
        } else {
            None
        }
    }

    const fn coords_of(edge: usize, idx: usize) -> (usize, usize, usize) {
        (idx % edge, (idx / edge) % edge, idx / (edge * edge))
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<Cell> {
        self.index_of(x, y, z).map(|idx| self.cells[idx])
    }

    /// Out-of-bounds coordinates read as dead
    pub fn is_alive(&self, x: usize, y: usize, z: usize) -> bool {
        self.get(x, y, z).is_some_and(Cell::is_alive)
    }

    /// Set cell at position, ignoring out-of-bounds writes
    pub fn set(&mut self, x: usize, y: usize, z: usize, cell: Cell) {
        if let Some(idx) = self.index_of(x, y, z) {
            self.cells[idx] = cell;
        }
    }

    /// Count live cells among the 26 Moore neighbors.
    /// The grid is bounded, not toroidal: neighbors outside [0, edge) on any
    /// axis count as dead.
    pub fn neighbor_count(&self, x: usize, y: usize, z: usize) -> u8 {
        let n = self.edge as i64;
        let (x, y, z) = (x as i64, y as i64, z as i64);

        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy, dz)| (x + dx, y + dy, z + dz))
            .filter(|&(nx, ny, nz)| {
                (0..n).contains(&nx) && (0..n).contains(&ny) && (0..n).contains(&nz)
            })
            .filter(|&(nx, ny, nz)| self.is_alive(nx as usize, ny as usize, nz as usize))
            .count() as u8
    }

    fn next_cell(&self, idx: usize) -> Cell {
        let (x, y, z) = Self::coords_of(self.edge, idx);
        self.cells[idx].evolve(self.neighbor_count(x, y, z))
    }

    /// Pure functional evolution - returns the next generation (serial)
    pub fn evolve(&self) -> Self {
        let cells = (0..self.cells.len()).map(|idx| self.next_cell(idx)).collect();
        Self {
            edge: self.edge,
            cells,
        }
    }

    /// Parallel evolution using rayon.
    /// Every worker reads the same snapshot and writes a disjoint cell, so the
    /// result is identical to `evolve`.
    pub fn evolve_parallel(&self) -> Self {
        let cells = (0..self.cells.len())
            .into_par_iter()
            .map(|idx| self.next_cell(idx))
            .collect();
        Self {
            edge: self.edge,
            cells,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(idx, &cell)| {
            let (x, y, z) = Self::coords_of(self.edge, idx);
            (x, y, z, cell)
        })
    }

    /// Positions of live cells in index order
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, _, cell)| cell.is_alive())
            .map(|(x, y, z, _)| (x, y, z))
    }
}
