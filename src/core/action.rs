//! Player actions and the turn history they leave behind.

use serde::{Deserialize, Serialize};

use crate::cards::PowerCard;
use crate::core::player::PlayerIndex;
use crate::core::state::Game;

/// One of the three things a player can do on their turn.
///
/// The set is closed on purpose: rule code matches exhaustively, so a new
/// kind of turn cannot be added without revisiting every decision point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Take the top card of the draw pile into the hand.
    DrawCard,
    /// Play a power card, moving the crown and claiming the landing tile.
    MoveCrown(PowerCard),
    /// Do nothing. Two passes in a row end the match.
    Pass,
}

/// One entry in a match's history: the snapshot after an action resolved.
///
/// The first entry records the opening deal and carries no player or
/// action. Snapshots are immutable once recorded; replaying a match is a
/// walk over its records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The game as it stood once this entry's action had resolved.
    pub game: Game,
    /// The seat that acted, absent on the opening entry.
    pub player: Option<PlayerIndex>,
    /// The action taken, absent on the opening entry.
    pub action: Option<PlayerAction>,
}

impl TurnRecord {
    /// The opening entry, before anyone has acted.
    #[must_use]
    pub fn initial(game: Game) -> Self {
        Self {
            game,
            player: None,
            action: None,
        }
    }

    /// An entry for a resolved action.
    #[must_use]
    pub fn new(game: Game, player: PlayerIndex, action: PlayerAction) -> Self {
        Self {
            game,
            player: Some(player),
            action: Some(action),
        }
    }
}
