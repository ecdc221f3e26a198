//! Rules engine.
//!
//! `RulesEngine` is the seam a host drives:
//! - Which decision is pending
//! - What a chosen index does (a previewable change)
//! - Committing a change and configuring the next turn
//! - Win conditions
//!
//! `Rules` is the implementation over a shared, immutable `Board`.

use std::sync::Arc;

use tracing::debug;

use crate::actions::PossibleActions;
use crate::board::Board;
use crate::changes::GameStateChange;
use crate::core::{GameConfig, PlayError, PlayerColor, SetupError, Shuffler};
use crate::state::GameState;
use crate::turn;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerColor),
    /// Shared victory on equal scores.
    Winners(Vec<PlayerColor>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerColor) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }

    /// Result from final scores: highest score wins, ties share.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let best = state.players().iter().map(|p| p.score).max().unwrap_or(0);
        let mut winners: Vec<PlayerColor> = state
            .players()
            .iter()
            .filter(|p| p.score == best)
            .map(|p| p.color())
            .collect();

        if winners.len() == 1 {
            GameResult::Winner(winners.remove(0))
        } else {
            GameResult::Winners(winners)
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `execute` must be pure: the host may preview and discard its change
/// - `commit` must leave a decision pending unless the game is over
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// The board all states of this engine live on.
    fn board(&self) -> &Board;

    /// Install the turn menu if no decision is pending.
    fn configure(&self, state: &GameState) -> GameState;

    /// Change produced by choosing `index` from the pending menu.
    fn execute(&self, state: &GameState, index: usize) -> Result<GameStateChange, PlayError>;

    /// Apply a change produced by `execute` and configure what follows.
    fn commit(&self, state: &GameState, change: &GameStateChange) -> GameState;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// The pending menu.
    fn pending<'a>(&self, state: &'a GameState) -> Result<&'a PossibleActions, PlayError> {
        state.possible_actions().ok_or(PlayError::NoPendingDecision)
    }

    /// Number of choices in the pending menu (0 when none is pending).
    fn nb_choices(&self, state: &GameState) -> usize {
        state.possible_actions().map_or(0, PossibleActions::nb_actions)
    }

    /// Execute then commit.
    fn play(&self, state: &GameState, index: usize) -> Result<GameState, PlayError> {
        let change = self.execute(state, index)?;
        Ok(self.commit(state, &change))
    }
}

/// The rules over a shared board.
#[derive(Clone, Debug)]
pub struct Rules {
    board: Arc<Board>,
}

impl Rules {
    #[must_use]
    pub fn new(board: Arc<Board>) -> Self {
        Self { board }
    }

    /// Rules on the standard board.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Arc::new(Board::standard()))
    }

    /// Shared handle to the board.
    #[must_use]
    pub fn shared_board(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    /// Set up a game with its first turn menu installed.
    pub fn new_game(
        &self,
        config: &GameConfig,
        shuffler: &mut impl Shuffler,
    ) -> Result<GameState, SetupError> {
        let state = GameState::new(&self.board, config, shuffler)?;
        debug!(players = state.player_count(), "new game");
        Ok(self.configure(&state))
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::standard()
    }
}

impl RulesEngine for Rules {
    fn board(&self) -> &Board {
        &self.board
    }

    fn configure(&self, state: &GameState) -> GameState {
        if state.possible_actions().is_some() {
            return state.clone();
        }
        turn::configure_possible_actions(&self.board, state)
    }

    fn execute(&self, state: &GameState, index: usize) -> Result<GameStateChange, PlayError> {
        let menu = self.pending(state)?;
        menu.execute(index, &self.board, state)
            .ok_or(PlayError::IndexOutOfRange {
                index,
                available: menu.nb_actions(),
            })
    }

    fn commit(&self, state: &GameState, change: &GameStateChange) -> GameState {
        let next = change.apply(&state.with_possible_actions(None));
        if cfg!(debug_assertions) && !next.is_over() && next.possible_actions().is_none() {
            next.assert_invariants();
        }
        self.configure(&next)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.is_over().then(|| GameResult::from_state(state))
    }
}
