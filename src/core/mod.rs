//! Core engine types.
//!
//! ## Components
//!
//! - **player**: seat identifiers and per-seat state
//! - **action**: the closed action set and turn history records
//! - **state**: the immutable game snapshot
//! - **rng**: the randomness boundary and the shuffle
//! - **error**: the engine error taxonomy

pub mod action;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{PlayerAction, TurnRecord};
pub use error::EngineError;
pub use player::{Player, PlayerIndex, PlayerPair, HAND_LIMIT, KNIGHT_CARDS_PER_PLAYER};
pub use rng::{shuffled, GameRng, RandomSource};
pub use state::Game;
