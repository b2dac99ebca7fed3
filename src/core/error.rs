//! Engine error taxonomy.
//!
//! Every fallible entry point returns `Result<_, EngineError>`. A returned
//! error always means the submitted input was rejected as a whole: no
//! snapshot is ever left partially updated.

use thiserror::Error;

use crate::board::GridPosition;
use crate::core::action::PlayerAction;

/// Everything that can go wrong while driving a match.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A pile was asked for more cards than it holds.
    #[error("requested {requested} cards but the pile holds {available}")]
    InsufficientCards { requested: usize, available: usize },

    /// A tile lookup used a coordinate outside the 9x9 grid.
    #[error("position {0} is outside the board")]
    InvalidPosition(GridPosition),

    /// The submitted action is not in the acting player's selectable set.
    #[error("action {0:?} is not selectable for the current player")]
    UnselectableAction(PlayerAction),

    /// A turn was submitted after the winner had already been decided.
    #[error("the match has already finished")]
    GameAlreadyFinished,

    /// An initial occupation layout did not describe exactly 9 rows.
    #[error("initial occupation layout must have 9 rows, got {rows}")]
    InvalidInitialOccupation { rows: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GridPosition;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InsufficientCards {
            requested: 5,
            available: 3,
        };
        assert_eq!(
            format!("{}", err),
            "requested 5 cards but the pile holds 3"
        );

        let err = EngineError::InvalidPosition(GridPosition::new(9, 4));
        assert_eq!(format!("{}", err), "position (9, 4) is outside the board");

        let err = EngineError::GameAlreadyFinished;
        assert_eq!(format!("{}", err), "the match has already finished");
    }
}
