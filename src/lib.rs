//! # rosenkoenig
//!
//! A deterministic rules engine for a two-player crown-and-territory
//! board game on a 9x9 grid. Players spend directional power cards to
//! move a shared crown, claiming the tiles it lands on; knight cards pay
//! for taking tiles the opponent already holds; the larger connected
//! territories win.
//!
//! ## Design principles
//!
//! - **Snapshots, not mutation**: every turn produces a fresh `Game`
//!   value, and the full history of snapshots is kept. Persistent
//!   collections keep those copies cheap.
//! - **Closed rule surface**: actions, seats and outcomes are small
//!   exhaustive enums, so every rule decision is a total match.
//! - **Randomness behind a trait**: the engine asks a `RandomSource` for
//!   uniform values and nothing else. Seed it and a whole match replays.
//! - **Errors, not panics**: rejected input returns an `EngineError` and
//!   leaves the match exactly as it was.
//!
//! ## Modules
//!
//! - [`core`]: seats, actions, snapshots, randomness, errors
//! - [`cards`]: power cards and the deck
//! - [`board`]: positions, the tile grid and the crown
//! - [`rules`]: legality checks and action resolution
//! - [`scoring`]: connected-territory scoring
//! - [`play`]: the match driver hosts talk to

pub mod board;
pub mod cards;
pub mod core;
pub mod play;
pub mod rules;
pub mod scoring;

pub use crate::board::{Board, GridPosition, Tile, TileGrid, CROWN_START, GRID_SIZE};
pub use crate::cards::{
    create_deck, draw_cards, Direction, DrawOutcome, PowerCard, StepCount, DECK_SIZE,
};
pub use crate::core::{
    shuffled, EngineError, Game, GameRng, Player, PlayerAction, PlayerIndex, PlayerPair,
    RandomSource, TurnRecord, HAND_LIMIT, KNIGHT_CARDS_PER_PLAYER,
};
pub use crate::play::{GamePlay, GamePlayBuilder, MatchOutcome, OCCUPIED_TILE_CUTOFF};
pub use crate::rules::{check_crown_move, resolve_action, selectable_actions, MoveCheck};
pub use crate::scoring::{calculate_score, Score};
