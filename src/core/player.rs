//! Player identification and per-seat state.
//!
//! ## PlayerIndex
//!
//! The game is strictly two-player, so seats are a closed enum rather than
//! a numeric id. Exhaustive matches keep "third player" states
//! unrepresentable.
//!
//! ## Player
//!
//! Everything one seat owns between turns: the hand of power cards and the
//! remaining knight cards.
//!
//! ## PlayerPair
//!
//! Per-seat data storage indexable by `PlayerIndex`, the two-seat analogue
//! of a player map.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::cards::PowerCard;

/// Most power cards a hand may hold; drawing is only offered below this.
pub const HAND_LIMIT: usize = 5;

/// Knight cards each seat starts the match with.
pub const KNIGHT_CARDS_PER_PLAYER: u8 = 4;

/// Seat identifier for the two players.
///
/// `First` is "player 0" and `Second` is "player 1" in rendered output.
/// Which seat takes the opening turn is decided per match, not by this
/// type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerIndex {
    First,
    Second,
}

impl PlayerIndex {
    /// Both seats, in rendering order.
    pub const BOTH: [PlayerIndex; 2] = [PlayerIndex::First, PlayerIndex::Second];

    /// The opposing seat.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            PlayerIndex::First => PlayerIndex::Second,
            PlayerIndex::Second => PlayerIndex::First,
        }
    }

    /// Raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerIndex::First => 0,
            PlayerIndex::Second => 1,
        }
    }
}

impl std::fmt::Display for PlayerIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.index())
    }
}

/// One seat's private state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Power cards currently held, in draw order.
    pub hand: SmallVec<[PowerCard; HAND_LIMIT]>,
    /// Knight cards left for taking opposing tiles.
    pub knight_cards: u8,
}

impl Player {
    /// A seat before the opening deal: empty hand, full knight reserve.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hand: SmallVec::new(),
            knight_cards: KNIGHT_CARDS_PER_PLAYER,
        }
    }

    /// Whether this seat can still pay for taking an opposing tile.
    #[must_use]
    pub fn has_knight_card(&self) -> bool {
        self.knight_cards > 0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-seat data storage indexable by `PlayerIndex`.
///
/// ## Example
///
/// ```
/// use rosenkoenig::core::{PlayerIndex, PlayerPair};
///
/// let mut passes: PlayerPair<u32> = PlayerPair::with_value(0);
///
/// passes[PlayerIndex::Second] = 2;
/// assert_eq!(passes[PlayerIndex::First], 0);
/// assert_eq!(passes[PlayerIndex::Second], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(factory: impl Fn(PlayerIndex) -> T) -> Self {
        Self {
            data: [factory(PlayerIndex::First), factory(PlayerIndex::Second)],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to one seat's entry.
    #[must_use]
    pub fn get(&self, player: PlayerIndex) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to one seat's entry.
    pub fn get_mut(&mut self, player: PlayerIndex) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerIndex, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerIndex, &T)> {
        PlayerIndex::BOTH.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for PlayerPair<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerIndex> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerIndex) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerIndex> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerIndex) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_index_basics() {
        assert_eq!(PlayerIndex::First.index(), 0);
        assert_eq!(PlayerIndex::Second.index(), 1);
        assert_eq!(format!("{}", PlayerIndex::First), "player 0");
        assert_eq!(format!("{}", PlayerIndex::Second), "player 1");
    }

    #[test]
    fn test_player_index_toggle() {
        assert_eq!(PlayerIndex::First.toggle(), PlayerIndex::Second);
        assert_eq!(PlayerIndex::Second.toggle(), PlayerIndex::First);
        assert_eq!(PlayerIndex::First.toggle().toggle(), PlayerIndex::First);
    }

    #[test]
    fn test_new_player_is_fully_stocked() {
        let player = Player::new();
        assert!(player.hand.is_empty());
        assert_eq!(player.knight_cards, KNIGHT_CARDS_PER_PLAYER);
        assert!(player.has_knight_card());
    }

    #[test]
    fn test_knight_card_exhaustion() {
        let mut player = Player::new();
        player.knight_cards = 0;
        assert!(!player.has_knight_card());
    }

    #[test]
    fn test_player_pair_new() {
        let pair: PlayerPair<usize> = PlayerPair::new(|p| p.index() * 10);
        assert_eq!(pair[PlayerIndex::First], 0);
        assert_eq!(pair[PlayerIndex::Second], 10);
    }

    #[test]
    fn test_player_pair_mutation() {
        let mut pair: PlayerPair<i32> = PlayerPair::with_value(0);
        pair[PlayerIndex::Second] = 7;
        assert_eq!(pair[PlayerIndex::First], 0);
        assert_eq!(pair[PlayerIndex::Second], 7);
    }

    #[test]
    fn test_player_pair_iter() {
        let pair: PlayerPair<i32> = PlayerPair::new(|p| p.index() as i32);
        let entries: Vec<_> = pair.iter().collect();
        assert_eq!(
            entries,
            vec![(PlayerIndex::First, &0), (PlayerIndex::Second, &1)]
        );
    }

    #[test]
    fn test_player_pair_serialization() {
        let pair: PlayerPair<i32> = PlayerPair::new(|p| p.index() as i32 + 1);
        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: PlayerPair<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
