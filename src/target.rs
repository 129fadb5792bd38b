use log::trace;
use rand::Rng;

use crate::Coords;
use crate::config::{BOARD_COLS, BOARD_ROWS, CELL_SIZE, TARGET_START};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pos: Coords,
}

impl Target {
    pub fn new() -> Self {
        Target::at(TARGET_START)
    }

    pub fn at(pos: Coords) -> Self {
        Target { pos }
    }

    pub fn position(&self) -> Coords {
        self.pos
    }

    /// Jumps to a random cell anywhere on the board. Cells under the snake are fair game.
    pub fn relocate<R: Rng>(&mut self, rng: &mut R) {
        let col = rng.gen_range(0..BOARD_COLS);
        let row = rng.gen_range(0..BOARD_ROWS);
        self.pos = (col * CELL_SIZE, row * CELL_SIZE);
        trace!("target moved to {:?}", self.pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BOARD_HEIGHT_PX, BOARD_WIDTH_PX};
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn starts_at_fixed_cell() {
        assert_eq!(Target::new().position(), (125, 125));
    }

    #[test]
    fn relocate_stays_on_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut target = Target::new();

        for _ in 0..500 {
            target.relocate(&mut rng);
            let (x, y) = target.position();
            assert!((0..BOARD_WIDTH_PX).contains(&x));
            assert!((0..BOARD_HEIGHT_PX).contains(&y));
            assert_eq!(x % CELL_SIZE, 0);
            assert_eq!(y % CELL_SIZE, 0);
        }
    }

    #[test]
    fn relocate_spreads_over_the_board() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut target = Target::new();
        let mut seen = HashSet::new();

        for _ in 0..100 {
            target.relocate(&mut rng);
            seen.insert(target.position());
        }

        assert!(seen.len() > 50);
    }
}
