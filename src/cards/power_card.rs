//! Power card value types.
//!
//! A power card is a direction paired with a step count. Cards carry no
//! identity beyond their face: two cards with the same direction and step
//! count are interchangeable everywhere in the engine.

use serde::{Deserialize, Serialize};

/// Compass direction printed on a power card.
///
/// Offsets follow screen coordinates: y grows downward, so `Up` is
/// `(0, -1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All eight directions, in deck enumeration order.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Unit offset as `(dx, dy)`.
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::DownRight => (1, 1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::UpLeft => "up-left",
            Direction::UpRight => "up-right",
            Direction::DownLeft => "down-left",
            Direction::DownRight => "down-right",
        };
        f.write_str(name)
    }
}

/// Number of tiles a power card carries the crown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepCount {
    One,
    Two,
    Three,
}

impl StepCount {
    /// All step counts, in deck enumeration order.
    pub const ALL: [StepCount; 3] = [StepCount::One, StepCount::Two, StepCount::Three];

    /// The numeric step count.
    #[must_use]
    pub const fn count(self) -> u8 {
        match self {
            StepCount::One => 1,
            StepCount::Two => 2,
            StepCount::Three => 3,
        }
    }
}

/// A directional movement card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PowerCard {
    pub direction: Direction,
    pub steps: StepCount,
}

impl PowerCard {
    /// Create a card from its face values.
    #[must_use]
    pub const fn new(direction: Direction, steps: StepCount) -> Self {
        Self { direction, steps }
    }
}

impl std::fmt::Display for PowerCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.direction, self.steps.count())
    }
}
