use rand::Rng;
use serde::{Deserialize, Serialize};

/// Cell nobody has played.
pub const EMPTY: u8 = 0;
/// Cell claimed by a committed move.
pub const CLAIMED: u8 = 1;
/// Cell occupied before the move.
pub const OCCUPIED: u8 = 2;

/// The board a network plays against: a flat vector of cell markers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    cells: Vec<u8>,
}

impl Environment {
    pub fn new(width: usize) -> Self {
        Self {
            cells: vec![EMPTY; width],
        }
    }

    pub fn from_cells(cells: Vec<u8>) -> Self {
        Self { cells }
    }

    /// Fresh random board of `width` cells.
    pub fn random<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Self {
        let mut env = Self::new(width);
        env.randomize(rng);
        env
    }

    /// Re-deal the board. Scanning left to right each cell is occupied with
    /// probability one half, except the last cell which always stays empty
    /// so a legal move exists.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let width = self.cells.len();
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = if rng.gen_bool(0.5) && i + 1 < width {
                OCCUPIED
            } else {
                EMPTY
            };
        }
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cells.get(index) == Some(&EMPTY)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == EMPTY).count()
    }
}
