// grid.rs - Cell storage for the toroidal board

/// Column-major cell states, indexed `[x][y]`.
pub type TColumn = Vec<bool>;
pub type TGrid = Vec<TColumn>;

/// A `width` x `height` grid with every cell dead.
pub fn init_grid(width: usize, height: usize) -> TGrid {
    vec![vec![false; height]; width]
}

/// Index `delta` steps away from `index` on a ring of `len` slots.
pub(crate) fn wrap(index: usize, delta: isize, len: usize) -> usize {
    (index as isize + delta).rem_euclid(len as isize) as usize
}
