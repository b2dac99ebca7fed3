//! The 9x9 tile grid and the board that carries the crown.

use serde::{Deserialize, Serialize};

use crate::board::position::GridPosition;
use crate::core::error::EngineError;
use crate::core::player::PlayerIndex;

/// Board edge length in tiles.
pub const GRID_SIZE: usize = 9;

/// Where the crown sits before the first move.
pub const CROWN_START: GridPosition = GridPosition::new(4, 4);

/// A single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// The seat holding this tile, if any.
    pub occupant: Option<PlayerIndex>,
}

/// Tile occupancy for the whole board.
///
/// Rows are indexed by y and columns by x, so `(x, y)` lookups go through
/// `tile` rather than raw nesting. All access is bounds-checked; the only
/// way to address a tile is through a `GridPosition`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    tiles: [[Tile; GRID_SIZE]; GRID_SIZE],
}

impl TileGrid {
    /// An empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: [[Tile { occupant: None }; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Parse a grid from a 9-row text layout.
    ///
    /// Each row is read left to right: `'0'` marks a first-player tile,
    /// `'1'` a second-player tile and anything else an empty one. The
    /// layout must have exactly 9 rows; columns past the ninth are
    /// ignored and short rows leave their remaining tiles empty.
    pub fn from_layout(layout: &str) -> Result<Self, EngineError> {
        let rows: Vec<&str> = layout.lines().collect();
        if rows.len() != GRID_SIZE {
            return Err(EngineError::InvalidInitialOccupation { rows: rows.len() });
        }

        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, mark) in row.chars().take(GRID_SIZE).enumerate() {
                grid.tiles[y][x].occupant = match mark {
                    '0' => Some(PlayerIndex::First),
                    '1' => Some(PlayerIndex::Second),
                    _ => None,
                };
            }
        }
        Ok(grid)
    }

    /// Look up the tile at `position`.
    pub fn tile(&self, position: GridPosition) -> Result<Tile, EngineError> {
        if !position.is_in_bounds() {
            return Err(EngineError::InvalidPosition(position));
        }
        Ok(self.tiles[position.y as usize][position.x as usize])
    }

    /// A copy of this grid with `position` held by `player`.
    pub fn with_occupant(
        &self,
        position: GridPosition,
        player: PlayerIndex,
    ) -> Result<Self, EngineError> {
        let mut next = *self;
        next.set_occupant(position, Some(player))?;
        Ok(next)
    }

    /// Overwrite the occupant at `position`.
    pub fn set_occupant(
        &mut self,
        position: GridPosition,
        occupant: Option<PlayerIndex>,
    ) -> Result<(), EngineError> {
        if !position.is_in_bounds() {
            return Err(EngineError::InvalidPosition(position));
        }
        self.tiles[position.y as usize][position.x as usize].occupant = occupant;
        Ok(())
    }

    /// How many tiles are held by either seat.
    #[must_use]
    pub fn occupied_tile_count(&self) -> usize {
        self.tiles
            .iter()
            .flatten()
            .filter(|tile| tile.occupant.is_some())
            .count()
    }

    /// All positions held by `player`, in row-major scan order.
    #[must_use]
    pub fn occupied_positions(&self, player: PlayerIndex) -> Vec<GridPosition> {
        let mut positions = Vec::new();
        for (y, row) in self.tiles.iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                if tile.occupant == Some(player) {
                    positions.push(GridPosition::new(x as i8, y as i8));
                }
            }
        }
        positions
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TileGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.tiles {
            for tile in row {
                let mark = match tile.occupant {
                    Some(PlayerIndex::First) => '0',
                    Some(PlayerIndex::Second) => '1',
                    None => '.',
                };
                write!(f, "{}", mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The playing surface: tile occupancy plus the shared crown marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub grid: TileGrid,
    pub crown_position: GridPosition,
}

impl Board {
    /// An untouched board: empty grid, crown on the centre tile.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid: TileGrid::new(),
            crown_position: CROWN_START,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
