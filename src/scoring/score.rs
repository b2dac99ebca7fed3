//! Territory scoring.
//!
//! A player's score is the sum of squared region sizes, where a region is
//! a maximal set of the player's tiles connected through any of the eight
//! surrounding tiles. Region discovery is an iterative flood fill over an
//! explicit queue; board size is fixed, but recursion depth should not
//! scale with territory size anyway.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::{GridPosition, TileGrid};
use crate::core::player::PlayerIndex;

/// Connected-territory summary for one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// One entry per region, in row-major discovery order. Within a
    /// region, coordinates are sorted ascending by x and then by y.
    pub occupied_areas: Vec<Vec<GridPosition>>,
    /// Sum of squared region sizes.
    pub total: u32,
}

/// Score `player`'s territory on `grid`.
///
/// Deterministic for a given grid: region order follows the row-major
/// scan and coordinates within a region are canonically sorted.
#[must_use]
pub fn calculate_score(grid: &TileGrid, player: PlayerIndex) -> Score {
    let positions = grid.occupied_positions(player);
    let occupied: FxHashSet<GridPosition> = positions.iter().copied().collect();
    let mut visited: FxHashSet<GridPosition> = FxHashSet::default();

    let mut occupied_areas = Vec::new();
    for &seed in &positions {
        if !visited.insert(seed) {
            continue;
        }

        let mut area = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(seed);
        while let Some(position) = queue.pop_front() {
            area.push(position);
            for neighbour in neighbours(position) {
                if occupied.contains(&neighbour) && visited.insert(neighbour) {
                    queue.push_back(neighbour);
                }
            }
        }

        area.sort_unstable();
        occupied_areas.push(area);
    }

    let total = occupied_areas
        .iter()
        .map(|area| (area.len() * area.len()) as u32)
        .sum();
    Score {
        occupied_areas,
        total,
    }
}

/// The eight surrounding positions, bounds not checked.
fn neighbours(position: GridPosition) -> [GridPosition; 8] {
    let GridPosition { x, y } = position;
    [
        GridPosition::new(x - 1, y - 1),
        GridPosition::new(x, y - 1),
        GridPosition::new(x + 1, y - 1),
        GridPosition::new(x - 1, y),
        GridPosition::new(x + 1, y),
        GridPosition::new(x - 1, y + 1),
        GridPosition::new(x, y + 1),
        GridPosition::new(x + 1, y + 1),
    ]
}
