//! Grid coordinates.

use serde::{Deserialize, Serialize};

use crate::board::grid::GRID_SIZE;
use crate::cards::PowerCard;

/// A coordinate on (or off) the board.
///
/// Components are signed on purpose: translating by a card never clamps,
/// so a position may land outside the grid and legality checks decide
/// what that means. The derived ordering is ascending x, then ascending
/// y, which is the canonical order used when listing scored regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i8,
    pub y: i8,
}

impl GridPosition {
    /// Create a position from raw coordinates.
    #[must_use]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The position reached by following `card` from here.
    ///
    /// The direction's unit offset is scaled by the step count. No bounds
    /// checking happens here.
    #[must_use]
    pub fn translated_by(self, card: PowerCard) -> Self {
        let (dx, dy) = card.direction.offset();
        let steps = card.steps.count() as i8;
        Self {
            x: self.x + dx * steps,
            y: self.y + dy * steps,
        }
    }

    /// Whether this position lies on the 9x9 grid.
    #[must_use]
    pub const fn is_in_bounds(self) -> bool {
        self.x >= 0 && self.x < GRID_SIZE as i8 && self.y >= 0 && self.y < GRID_SIZE as i8
    }
}

impl std::fmt::Display for GridPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Direction, StepCount};

    #[test]
    fn test_translation_scales_by_steps() {
        let center = GridPosition::new(4, 4);

        let up = center.translated_by(PowerCard::new(Direction::Up, StepCount::One));
        assert_eq!(up, GridPosition::new(4, 3));

        let right = center.translated_by(PowerCard::new(Direction::Right, StepCount::Three));
        assert_eq!(right, GridPosition::new(7, 4));

        let diagonal = center.translated_by(PowerCard::new(Direction::DownLeft, StepCount::Two));
        assert_eq!(diagonal, GridPosition::new(2, 6));
    }

    #[test]
    fn test_translation_may_leave_the_board() {
        let corner = GridPosition::new(0, 0);
        let off = corner.translated_by(PowerCard::new(Direction::UpLeft, StepCount::Two));
        assert_eq!(off, GridPosition::new(-2, -2));
        assert!(!off.is_in_bounds());
    }

    #[test]
    fn test_bounds() {
        assert!(GridPosition::new(0, 0).is_in_bounds());
        assert!(GridPosition::new(8, 8).is_in_bounds());
        assert!(GridPosition::new(4, 8).is_in_bounds());

        assert!(!GridPosition::new(-1, 4).is_in_bounds());
        assert!(!GridPosition::new(4, -1).is_in_bounds());
        assert!(!GridPosition::new(9, 4).is_in_bounds());
        assert!(!GridPosition::new(4, 9).is_in_bounds());
    }

    #[test]
    fn test_canonical_ordering_is_x_then_y() {
        let mut positions = vec![
            GridPosition::new(2, 0),
            GridPosition::new(0, 2),
            GridPosition::new(0, 1),
            GridPosition::new(1, 1),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                GridPosition::new(0, 1),
                GridPosition::new(0, 2),
                GridPosition::new(1, 1),
                GridPosition::new(2, 0),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", GridPosition::new(3, 7)), "(3, 7)");
    }
}
