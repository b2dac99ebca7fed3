//! The game snapshot.
//!
//! `Game` is everything on the table between two actions: board, piles
//! and both seats. Snapshots are treated as immutable values; resolution
//! builds a new snapshot instead of editing the old one, and the
//! persistent piles make those copies cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::{draw_cards, PowerCard};
use crate::core::error::EngineError;
use crate::core::player::{Player, PlayerIndex, PlayerPair, HAND_LIMIT, KNIGHT_CARDS_PER_PLAYER};

/// Complete game state between actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Tile occupancy and the crown.
    pub board: Board,
    /// Face-down cards still to be drawn.
    pub draw_pile: Vector<PowerCard>,
    /// Cards spent on crown moves.
    pub discard_pile: Vector<PowerCard>,
    /// Both seats' hands and knight reserves.
    pub players: PlayerPair<Player>,
}

impl Game {
    /// Deal the opening hands from an already shuffled deck.
    ///
    /// The first seat takes the top five cards, the second seat the next
    /// five. The rest becomes the draw pile; the discard pile starts
    /// empty and the crown sits on the centre tile.
    pub fn deal(deck: Vector<PowerCard>) -> Result<Self, EngineError> {
        let first = draw_cards(&deck, HAND_LIMIT)?;
        let second = draw_cards(&first.remaining, HAND_LIMIT)?;
        let hands = [&first.drawn, &second.drawn];

        Ok(Self {
            board: Board::new(),
            draw_pile: second.remaining.clone(),
            discard_pile: Vector::new(),
            players: PlayerPair::new(|player| Player {
                hand: hands[player.index()].iter().copied().collect(),
                knight_cards: KNIGHT_CARDS_PER_PLAYER,
            }),
        })
    }

    /// Cards across both piles and both hands.
    ///
    /// Stays at the full deck size for the whole match; nothing ever
    /// leaves play.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let in_hands: usize = self.players.iter().map(|(_, seat)| seat.hand.len()).sum();
        self.draw_pile.len() + self.discard_pile.len() + in_hands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CROWN_START;
    use crate::cards::{create_deck, DECK_SIZE};

    #[test]
    fn test_deal_gives_five_cards_each() {
        let game = Game::deal(create_deck()).unwrap();

        assert_eq!(game.players[PlayerIndex::First].hand.len(), HAND_LIMIT);
        assert_eq!(game.players[PlayerIndex::Second].hand.len(), HAND_LIMIT);
        assert_eq!(game.draw_pile.len(), DECK_SIZE - 2 * HAND_LIMIT);
        assert!(game.discard_pile.is_empty());
    }

    #[test]
    fn test_deal_takes_cards_from_the_top() {
        let deck = create_deck();
        let game = Game::deal(deck.clone()).unwrap();

        let first_hand: Vec<_> = game.players[PlayerIndex::First].hand.to_vec();
        let second_hand: Vec<_> = game.players[PlayerIndex::Second].hand.to_vec();
        let expected_first: Vec<_> = deck.iter().take(5).copied().collect();
        let expected_second: Vec<_> = deck.iter().skip(5).take(5).copied().collect();

        assert_eq!(first_hand, expected_first);
        assert_eq!(second_hand, expected_second);
        assert_eq!(game.draw_pile, deck.skip(10));
    }

    #[test]
    fn test_deal_starts_seats_fresh() {
        let game = Game::deal(create_deck()).unwrap();

        assert_eq!(
            game.players[PlayerIndex::First].knight_cards,
            KNIGHT_CARDS_PER_PLAYER
        );
        assert_eq!(
            game.players[PlayerIndex::Second].knight_cards,
            KNIGHT_CARDS_PER_PLAYER
        );
        assert_eq!(game.board.crown_position, CROWN_START);
        assert_eq!(game.board.grid.occupied_tile_count(), 0);
    }

    #[test]
    fn test_deal_rejects_short_deck() {
        let short = create_deck().take(9);
        let err = Game::deal(short).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InsufficientCards {
                requested: 5,
                available: 4,
            }
        ));
    }

    #[test]
    fn test_card_count_is_full_deck() {
        let game = Game::deal(create_deck()).unwrap();
        assert_eq!(game.card_count(), DECK_SIZE);
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let game = Game::deal(create_deck()).unwrap();
        let json = serde_json::to_string(&game).unwrap();
        let back: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(game, back);
    }
}
