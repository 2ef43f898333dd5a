// board.rs - The simulation engine: a fixed-size toroidal board evolving under B3/S23

use crate::grid::{TGrid, init_grid, wrap};

/// Owns the only copy of the cell states.
///
/// The grid is never mutated while a generation is being computed: the next generation is
/// built into a fresh buffer from the current one and then swapped in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: TGrid,
    generation: u64,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board must be at least 1x1, got {width}x{height}");
        Self {
            width,
            height,
            cells: init_grid(width, height),
            generation: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Generations advanced since construction or the last `clear`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cells[x][y]
    }

    /// A fresh all-dead grid with this board's dimensions.
    pub fn init_grid(&self) -> TGrid {
        init_grid(self.width, self.height)
    }

    /// Writes a single cell. Out-of-range coordinates are a caller bug.
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) {
        debug_assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} board",
            self.width,
            self.height
        );
        self.cells[x][y] = alive;
    }

    pub fn clear(&mut self) {
        self.cells = self.init_grid();
        self.generation = 0;
    }

    /// Live cells among the eight wrapped neighbours of `(x, y)`, excluding the cell itself.
    /// On boards one cell wide or tall a neighbour slot can wrap back onto the cell, and is
    /// counted once per slot.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> usize {
        let mut count = 0;
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = wrap(x, dx, self.width);
                let ny = wrap(y, dy, self.height);
                if self.cells[nx][ny] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Whether `(x, y)` is alive in the next generation.
    pub fn survives(&self, x: usize, y: usize) -> bool {
        match (self.cells[x][y], self.count_live_neighbors(x, y)) {
            (true, 2) | (true, 3) => true, // Survival
            (false, 3) => true,            // Birth
            _ => false,                    // Death or stays dead
        }
    }

    pub fn advance_generation(&mut self) {
        let mut next = self.init_grid();
        for (x, column) in next.iter_mut().enumerate() {
            for (y, cell) in column.iter_mut().enumerate() {
                *cell = self.survives(x, y);
            }
        }
        self.cells = next;
        self.generation += 1;
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&alive| alive).count()
    }
}

#[cfg(test)]
impl Board {
    fn with_live_cells(width: usize, height: usize, live: &[(usize, usize)]) -> Self {
        let mut board = Self::new(width, height);
        for &(x, y) in live {
            board.set_cell(x, y, true);
        }
        board
    }

    /// Column by column.
    fn live_cells(&self) -> Vec<(usize, usize)> {
        let mut live = Vec::new();
        for (x, column) in self.cells.iter().enumerate() {
            for (y, &alive) in column.iter().enumerate() {
                if alive {
                    live.push((x, y));
                }
            }
        }
        live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn horizontal_blinker() -> Vec<(usize, usize)> {
        vec![(1, 2), (2, 2), (3, 2)]
    }

    #[test]
    fn new_board_is_all_dead() {
        let board = Board::new(7, 4);
        assert_eq!(board.width(), 7);
        assert_eq!(board.height(), 4);
        assert_eq!(board.live_count(), 0);
        assert_eq!(board.generation(), 0);
    }

    #[test]
    fn set_cell_touches_only_that_cell() {
        let mut board = Board::new(5, 5);
        board.set_cell(3, 1, true);
        assert_eq!(board.live_cells(), vec![(3, 1)]);
        board.set_cell(3, 1, false);
        assert_eq!(board.live_count(), 0);
    }

    #[test]
    #[should_panic]
    fn set_cell_out_of_range_panics() {
        let mut board = Board::new(5, 5);
        board.set_cell(5, 0, true);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut board = Board::with_live_cells(5, 5, &horizontal_blinker());

        board.advance_generation();
        assert_eq!(board.live_cells(), vec![(2, 1), (2, 2), (2, 3)]);

        board.advance_generation();
        assert_eq!(board.live_cells(), horizontal_blinker());
        assert_eq!(board.generation(), 2);
    }

    #[test]
    fn advance_reads_only_the_previous_generation() {
        // Updating in place column by column would let (0, 0) come alive first and change
        // what its neighbours see, leaving a partial board.
        let mut board = Board::with_live_cells(3, 3, &[(0, 1), (1, 1), (2, 1)]);
        board.advance_generation();
        // Row cells keep 2 neighbours, every other cell sees exactly 3.
        assert_eq!(board.live_count(), 9);

        board.advance_generation();
        assert_eq!(board.live_count(), 0);
    }

    #[test]
    fn neighbours_wrap_across_every_edge() {
        let board = Board::with_live_cells(4, 3, &[(3, 2), (0, 2), (3, 0)]);
        // (0, 0) touches (3, 2) diagonally, (0, 2) above and (3, 0) to the left via wrap.
        assert_eq!(board.count_live_neighbors(0, 0), 3);
    }

    #[test]
    fn single_cell_board_sees_itself_in_every_neighbour_slot() {
        let board = Board::with_live_cells(1, 1, &[(0, 0)]);
        assert_eq!(board.count_live_neighbors(0, 0), 8);
    }

    #[test]
    fn one_wide_column_wraps_sideways_onto_itself() {
        let board = Board::with_live_cells(1, 3, &[(0, 1)]);
        // Sideways wraps land back in column 0, so (0, 1) fills all three slots below (0, 0).
        assert_eq!(board.count_live_neighbors(0, 0), 3);
        // The cell itself is reached only through the dx = -1 and dx = +1 slots.
        assert_eq!(board.count_live_neighbors(0, 1), 2);
    }

    #[test]
    fn neighbour_count_excludes_the_cell_itself() {
        let board = Board::with_live_cells(5, 5, &[(2, 2)]);
        assert_eq!(board.count_live_neighbors(2, 2), 0);
        assert_eq!(board.count_live_neighbors(1, 1), 1);
    }

    #[test]
    fn clear_kills_everything_and_resets_generation() {
        let mut board = Board::with_live_cells(6, 6, &[(0, 0), (5, 5), (2, 3), (4, 1)]);
        board.advance_generation();
        board.clear();
        assert_eq!(board.live_count(), 0);
        assert_eq!(board.generation(), 0);
        assert_eq!(board.width(), 6);
        assert_eq!(board.height(), 6);
    }

    #[test]
    fn block_is_a_still_life() {
        let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
        let mut board = Board::with_live_cells(6, 6, &block);
        board.advance_generation();
        assert_eq!(board.live_cells(), block.to_vec());
    }

    #[test]
    fn glider_wraps_back_to_its_start() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut board = Board::with_live_cells(8, 8, &glider);
        // A glider moves one cell diagonally every four generations.
        for _ in 0..4 * 8 {
            board.advance_generation();
        }
        let mut expected = glider.to_vec();
        expected.sort();
        assert_eq!(board.live_cells(), expected);
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        (1usize..9, 1usize..9)
            .prop_flat_map(|(w, h)| (Just(w), Just(h), prop::collection::vec(any::<bool>(), w * h)))
            .prop_map(|(w, h, states)| {
                let mut board = Board::new(w, h);
                for (i, alive) in states.into_iter().enumerate() {
                    board.set_cell(i % w, i / w, alive);
                }
                board
            })
    }

    proptest! {
        #[test]
        fn neighbour_count_matches_modular_definition(board in arb_board()) {
            let (w, h) = (board.width() as i64, board.height() as i64);
            for x in 0..w {
                for y in 0..h {
                    let mut expected = 0;
                    for dx in -1i64..=1 {
                        for dy in -1i64..=1 {
                            if dx == 0 && dy == 0 {
                                continue;
                            }
                            let nx = (x + dx).rem_euclid(w) as usize;
                            let ny = (y + dy).rem_euclid(h) as usize;
                            if board.is_alive(nx, ny) {
                                expected += 1;
                            }
                        }
                    }
                    prop_assert_eq!(board.count_live_neighbors(x as usize, y as usize), expected);
                }
            }
        }

        #[test]
        fn next_generation_follows_b3_s23(board in arb_board()) {
            let mut next = board.clone();
            next.advance_generation();
            for x in 0..board.width() {
                for y in 0..board.height() {
                    let n = board.count_live_neighbors(x, y);
                    let expected = n == 3 || (n == 2 && board.is_alive(x, y));
                    prop_assert_eq!(next.is_alive(x, y), expected);
                }
            }
        }
    }
}
