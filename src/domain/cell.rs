/// Cell represents one voxel of the 3D automaton.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Next state under the fixed 3D rule (B6/S56) over 26 Moore neighbors:
    /// 1. Live cell with 5 or 6 neighbors survives
    /// 2. Dead cell with exactly 6 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 5 | 6) => Cell::Alive,
            (Cell::Dead, 6) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
