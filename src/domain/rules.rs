//! Conway's rule (B3/S23) expressed over the live-neighbor-block count:
//! the number of alive cells in the clipped 3x3 block around a cell,
//! the cell itself included.

/// Living cells with fewer neighbors die of loneliness
pub const STAY_ALIVE_MIN_NEIGHBORS: usize = 2;

/// Living cells with more neighbors die of overpopulation
pub const STAY_ALIVE_MAX_NEIGHBORS: usize = 3;

/// Dead cells with exactly this many neighbors are born
pub const NEWBORN_NEIGHBORS: usize = 3;

/// Number of live neighbors, excluding the cell itself from its block count
pub const fn live_neighbors(alive: bool, block_count: usize) -> usize {
    if alive { block_count.saturating_sub(1) } else { block_count }
}

/// Pure function to compute the next status of a cell:
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
pub const fn next_state(alive: bool, block_count: usize) -> bool {
    match (alive, live_neighbors(alive, block_count)) {
        (true, n) => n >= STAY_ALIVE_MIN_NEIGHBORS && n <= STAY_ALIVE_MAX_NEIGHBORS,
        (false, n) => n == NEWBORN_NEIGHBORS,
    }
}
