//! Power cards and the deck they come from.
//!
//! ## Components
//!
//! - **power_card**: `Direction`, `StepCount` and the `PowerCard` face
//! - **deck**: fixed deck enumeration and pile draws

pub mod deck;
pub mod power_card;

pub use deck::{create_deck, draw_cards, DrawOutcome, DECK_SIZE};
pub use power_card::{Direction, PowerCard, StepCount};
