//! Deck construction and pile draws.
//!
//! Piles are persistent vectors: drawing produces a new pile and leaves
//! the input untouched, so history snapshots can share structure.

use im::Vector;

use crate::cards::power_card::{Direction, PowerCard, StepCount};
use crate::core::error::EngineError;

/// Cards in a full deck: every direction at every step count.
pub const DECK_SIZE: usize = 24;

/// The full deck in its fixed enumeration order, unshuffled.
///
/// Directions vary in the outer loop and step counts in the inner one,
/// so the deck always starts `up 1, up 2, up 3, down 1, ...`.
#[must_use]
pub fn create_deck() -> Vector<PowerCard> {
    let mut deck = Vector::new();
    for direction in Direction::ALL {
        for steps in StepCount::ALL {
            deck.push_back(PowerCard::new(direction, steps));
        }
    }
    deck
}

/// Result of drawing from a pile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawOutcome {
    /// The pile after the draw.
    pub remaining: Vector<PowerCard>,
    /// The cards taken, in pile order.
    pub drawn: Vector<PowerCard>,
}

/// Take `count` cards off the top of `pile`.
///
/// Fails with `InsufficientCards` when the pile is short; a partial draw
/// is never produced.
pub fn draw_cards(pile: &Vector<PowerCard>, count: usize) -> Result<DrawOutcome, EngineError> {
    if pile.len() < count {
        return Err(EngineError::InsufficientCards {
            requested: count,
            available: pile.len(),
        });
    }
    Ok(DrawOutcome {
        remaining: pile.skip(count),
        drawn: pile.take(count),
    })
}
