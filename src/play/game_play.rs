//! The match driver.
//!
//! `GamePlay` owns everything a running match needs: the current
//! snapshot, the full turn history, the random source and the decided
//! winner. Hosts ask for the selectable actions and submit one; all rule
//! knowledge stays behind this boundary.

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::TileGrid;
use crate::cards::create_deck;
use crate::core::action::{PlayerAction, TurnRecord};
use crate::core::error::EngineError;
use crate::core::player::PlayerIndex;
use crate::core::rng::{shuffled, GameRng, RandomSource};
use crate::core::state::Game;
use crate::rules::legality::selectable_actions;
use crate::rules::resolve::resolve_action;
use crate::scoring::calculate_score;

/// Occupied-tile count at which the match ends after the current turn.
pub const OCCUPIED_TILE_CUTOFF: usize = 52;

/// Final result of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// One seat scored higher.
    Winner(PlayerIndex),
    /// Both seats scored the same.
    Draw,
}

impl MatchOutcome {
    /// Whether `player` won outright.
    #[must_use]
    pub fn is_winner(&self, player: PlayerIndex) -> bool {
        matches!(self, MatchOutcome::Winner(winner) if *winner == player)
    }
}

/// A running match.
///
/// Create one through [`GamePlay::builder`]. Submitting a turn either
/// commits it completely or rejects it; a rejected submission leaves the
/// snapshot, the history and the random stream exactly as they were.
///
/// ```
/// use rosenkoenig::play::GamePlay;
///
/// let mut play = GamePlay::builder().seed(7).build()?;
///
/// let opening = play.selectable_actions();
/// assert!(!opening.is_empty());
///
/// play.play_turn(opening[0])?;
/// assert_eq!(play.history().len(), 2);
/// # Ok::<(), rosenkoenig::core::EngineError>(())
/// ```
pub struct GamePlay {
    first_player: PlayerIndex,
    game: Game,
    random: Box<dyn RandomSource>,
    history: Vector<TurnRecord>,
    winner: Option<MatchOutcome>,
}

impl GamePlay {
    /// Start configuring a new match.
    #[must_use]
    pub fn builder() -> GamePlayBuilder {
        GamePlayBuilder::new()
    }

    /// The current snapshot.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Every snapshot so far, opening deal first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// The decided outcome, if the match has ended.
    #[must_use]
    pub fn winner(&self) -> Option<MatchOutcome> {
        self.winner
    }

    /// Whether the match has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// The seat that took (or would have taken) the opening turn.
    #[must_use]
    pub fn first_player(&self) -> PlayerIndex {
        self.first_player
    }

    /// The seat that acted last, or `None` before the first turn.
    ///
    /// Derived from the history length, so replaying a recorded match
    /// cannot drift out of step with whose turn it is.
    #[must_use]
    pub fn last_acting_player(&self) -> Option<PlayerIndex> {
        if self.history.len() == 1 {
            None
        } else if self.history.len() % 2 == 0 {
            Some(self.first_player)
        } else {
            Some(self.first_player.toggle())
        }
    }

    /// The seat to act next.
    #[must_use]
    pub fn next_player(&self) -> PlayerIndex {
        match self.last_acting_player() {
            None => self.first_player,
            Some(last) => last.toggle(),
        }
    }

    /// Every action the next player may submit right now.
    #[must_use]
    pub fn selectable_actions(&self) -> Vec<PlayerAction> {
        selectable_actions(&self.game, self.next_player())
    }

    /// Submit the next player's action.
    ///
    /// On success the new snapshot is appended to the history and the
    /// winner is decided if this turn ended the match. The discard pile
    /// is reshuffled on every accepted turn, whether or not the action
    /// consumes it, so seeded matches replay identically however the
    /// turns interleave draws and moves.
    pub fn play_turn(&mut self, action: PlayerAction) -> Result<(), EngineError> {
        if self.winner.is_some() {
            return Err(EngineError::GameAlreadyFinished);
        }
        let player = self.next_player();
        if !selectable_actions(&self.game, player).contains(&action) {
            return Err(EngineError::UnselectableAction(action));
        }

        let recycled = shuffled(&self.game.discard_pile, self.random.as_mut());
        let next_game = resolve_action(&self.game, player, action, recycled)?;

        let previous_action = self.history.last().and_then(|record| record.action);
        self.winner = compute_winner(action, previous_action, &next_game.board.grid);
        self.history
            .push_back(TurnRecord::new(next_game.clone(), player, action));
        self.game = next_game;
        Ok(())
    }
}

impl fmt::Debug for GamePlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GamePlay")
            .field("first_player", &self.first_player)
            .field("turns_played", &(self.history.len() - 1))
            .field("winner", &self.winner)
            .finish_non_exhaustive()
    }
}

/// The match ends on a double pass or once enough tiles are occupied;
/// the higher total wins and equal totals draw.
fn compute_winner(
    action: PlayerAction,
    previous_action: Option<PlayerAction>,
    grid: &TileGrid,
) -> Option<MatchOutcome> {
    let double_pass =
        action == PlayerAction::Pass && previous_action == Some(PlayerAction::Pass);
    if !double_pass && grid.occupied_tile_count() < OCCUPIED_TILE_CUTOFF {
        return None;
    }

    let first = calculate_score(grid, PlayerIndex::First).total;
    let second = calculate_score(grid, PlayerIndex::Second).total;
    Some(match first.cmp(&second) {
        std::cmp::Ordering::Greater => MatchOutcome::Winner(PlayerIndex::First),
        std::cmp::Ordering::Less => MatchOutcome::Winner(PlayerIndex::Second),
        std::cmp::Ordering::Equal => MatchOutcome::Draw,
    })
}

/// Configures and starts a match.
///
/// Both knobs are optional: without a seat the opening player is decided
/// by one draw from the random source (below one half means the first
/// seat), and without a source a fresh entropy-seeded one is used.
pub struct GamePlayBuilder {
    first_player: Option<PlayerIndex>,
    random: Option<Box<dyn RandomSource>>,
}

impl GamePlayBuilder {
    /// An unconfigured builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            first_player: None,
            random: None,
        }
    }

    /// Fix the seat that takes the opening turn.
    #[must_use]
    pub fn first_player(mut self, player: PlayerIndex) -> Self {
        self.first_player = Some(player);
        self
    }

    /// Supply the random source for the whole match.
    #[must_use]
    pub fn random_source(mut self, source: impl RandomSource + 'static) -> Self {
        self.random = Some(Box::new(source));
        self
    }

    /// Shorthand for a seeded default source.
    #[must_use]
    pub fn seed(self, seed: u64) -> Self {
        self.random_source(GameRng::new(seed))
    }

    /// Shuffle and deal, then return the running match.
    pub fn build(self) -> Result<GamePlay, EngineError> {
        let mut random = self
            .random
            .unwrap_or_else(|| Box::new(GameRng::from_entropy()));
        let first_player = match self.first_player {
            Some(player) => player,
            None => {
                if random.next_uniform() < 0.5 {
                    PlayerIndex::First
                } else {
                    PlayerIndex::Second
                }
            }
        };

        let deck = shuffled(&create_deck(), random.as_mut());
        let game = Game::deal(deck)?;
        let history = Vector::unit(TurnRecord::initial(game.clone()));

        Ok(GamePlay {
            first_player,
            game,
            random,
            history,
            winner: None,
        })
    }
}

impl Default for GamePlayBuilder {
    fn default() -> Self {
        Self::new()
    }
}
