//! Action resolution.
//!
//! `resolve_action` maps one snapshot to the next. The input snapshot is
//! never touched: on success the caller gets a fresh `Game`, on failure
//! the old one is still the current state of the match.

use im::Vector;

use crate::cards::{draw_cards, PowerCard};
use crate::core::action::PlayerAction;
use crate::core::error::EngineError;
use crate::core::player::PlayerIndex;
use crate::core::state::Game;
use crate::rules::legality::selectable_actions;

/// Resolve `action` for `player` against `game`.
///
/// The action must be in the player's selectable set; anything else is
/// rejected with `UnselectableAction`. `recycled_discard` is the shuffled
/// replacement draw pile, consumed only when a draw finds the pile empty.
pub fn resolve_action(
    game: &Game,
    player: PlayerIndex,
    action: PlayerAction,
    recycled_discard: Vector<PowerCard>,
) -> Result<Game, EngineError> {
    if !selectable_actions(game, player).contains(&action) {
        return Err(EngineError::UnselectableAction(action));
    }

    match action {
        PlayerAction::DrawCard => draw_to_hand(game, player, recycled_discard),
        PlayerAction::MoveCrown(card) => move_crown(game, player, card),
        PlayerAction::Pass => Ok(game.clone()),
    }
}

fn draw_to_hand(
    game: &Game,
    player: PlayerIndex,
    recycled_discard: Vector<PowerCard>,
) -> Result<Game, EngineError> {
    let mut next = game.clone();
    if next.draw_pile.is_empty() {
        next.draw_pile = recycled_discard;
        next.discard_pile = Vector::new();
    }

    let outcome = draw_cards(&next.draw_pile, 1)?;
    next.draw_pile = outcome.remaining;
    next.players[player].hand.extend(outcome.drawn.iter().copied());
    Ok(next)
}

fn move_crown(game: &Game, player: PlayerIndex, card: PowerCard) -> Result<Game, EngineError> {
    let destination = game.board.crown_position.translated_by(card);
    // Read the occupant before the capture overwrites it.
    let captures_opposing_tile = game
        .board
        .grid
        .tile(destination)?
        .occupant
        .map_or(false, |occupant| occupant != player);

    let mut next = game.clone();
    next.board.grid = game.board.grid.with_occupant(destination, player)?;
    next.board.crown_position = destination;

    let seat = &mut next.players[player];
    if let Some(held) = seat.hand.iter().position(|&held_card| held_card == card) {
        seat.hand.remove(held);
    }
    if captures_opposing_tile {
        seat.knight_cards -= 1;
    }
    next.discard_pile.push_back(card);
    Ok(next)
}
