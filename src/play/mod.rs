//! Running a match from deal to decided outcome.

pub mod game_play;

pub use game_play::{GamePlay, GamePlayBuilder, MatchOutcome, OCCUPIED_TILE_CUTOFF};
