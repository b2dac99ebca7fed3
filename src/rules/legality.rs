//! Which actions a player may take.
//!
//! Legality is pure inspection: nothing here changes a snapshot. The
//! selectable set drives both hosts (what to offer the acting player) and
//! resolution (anything outside the set is rejected).

use crate::board::Board;
use crate::cards::PowerCard;
use crate::core::action::PlayerAction;
use crate::core::player::{PlayerIndex, HAND_LIMIT};
use crate::core::state::Game;

/// Verdict on moving the crown with one particular card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveCheck {
    /// The crown may be moved there by the acting player.
    pub can_move: bool,
    /// The landing tile is held by the opponent, so taking it costs a
    /// knight card. Reported even when the move itself is impossible.
    pub needs_knight_card: bool,
}

/// Check whether `player` could play `card` on `board`.
///
/// A move is possible when the landing tile exists, is not the player's
/// own, and, if the opponent holds it, a knight card is available to pay
/// for the capture.
#[must_use]
pub fn check_crown_move(
    board: &Board,
    card: PowerCard,
    player: PlayerIndex,
    has_knight_card: bool,
) -> MoveCheck {
    let destination = board.crown_position.translated_by(card);
    let Ok(tile) = board.grid.tile(destination) else {
        return MoveCheck {
            can_move: false,
            needs_knight_card: false,
        };
    };

    let needs_knight_card = tile.occupant.map_or(false, |occupant| occupant != player);
    let can_move = match tile.occupant {
        None => true,
        Some(occupant) => occupant != player && has_knight_card,
    };
    MoveCheck {
        can_move,
        needs_knight_card,
    }
}

/// Every action `player` may currently submit, in a stable order.
///
/// Crown moves come first, one per playable card in hand order, then
/// `DrawCard` while the hand is below its limit. `Pass` appears only as
/// the sole fallback when nothing else is possible.
#[must_use]
pub fn selectable_actions(game: &Game, player: PlayerIndex) -> Vec<PlayerAction> {
    let seat = &game.players[player];

    let mut actions: Vec<PlayerAction> = seat
        .hand
        .iter()
        .copied()
        .filter(|&card| check_crown_move(&game.board, card, player, seat.has_knight_card()).can_move)
        .map(PlayerAction::MoveCrown)
        .collect();

    if seat.hand.len() < HAND_LIMIT {
        actions.push(PlayerAction::DrawCard);
    }
    if actions.is_empty() {
        actions.push(PlayerAction::Pass);
    }
    actions
}
