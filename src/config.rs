use crate::ship::ShipDef;

/// Width and height of a grid.
pub const GRID_SIZE: usize = 10;
/// Number of cells on a grid, indexed `0..CELL_COUNT` in row-major order.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Carrier", 5),
    ShipDef::new("Battleship", 4),
    ShipDef::new("Cruiser", 3),
    ShipDef::new("Submarine", 3),
    ShipDef::new("Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Upper bound on random placement draws for a single ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Returns `true` if some ship of the fleet has this length.
pub fn is_fleet_length(length: usize) -> bool {
    FLEET.iter().any(|def| def.length() == length)
}

/// Fleet lengths in configuration order, e.g. `[5, 4, 3, 3, 2]`.
pub fn fleet_lengths() -> [usize; NUM_SHIPS] {
    core::array::from_fn(|i| FLEET[i].length())
}
