//! Territory scoring over connected regions.

pub mod score;

pub use score::{calculate_score, Score};
