//! A game in progress.
//!
//! `Game` owns the current state and the history of choices that produced
//! it. Because setup is deterministic for a given shuffler and every change
//! is a pure function of the state, the history alone replays the game.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::engine::{GameResult, Rules, RulesEngine};
use crate::actions::PossibleActions;
use crate::changes::GameStateChange;
use crate::core::{GameConfig, PlayError, PlayerColor, Shuffler};
use crate::state::GameState;

/// A recorded choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who chose.
    pub player: PlayerColor,

    /// Index into the menu pending at the time.
    pub index: usize,

    /// Century when the choice was made.
    pub century: u8,

    /// Turn number when the choice was made.
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerColor, index: usize, century: u8, turn: u32) -> Self {
        Self {
            player,
            index,
            century,
            turn,
        }
    }
}

/// A running game.
#[derive(Clone, Debug)]
pub struct Game {
    rules: Rules,
    state: GameState,
    history: Vector<ActionRecord>,
}

impl Game {
    /// Set up a game on the standard board.
    pub fn new(config: &GameConfig, shuffler: &mut impl Shuffler) -> Result<Self, PlayError> {
        Self::with_rules(Rules::standard(), config, shuffler)
    }

    /// Set up a game with the given rules.
    pub fn with_rules(
        rules: Rules,
        config: &GameConfig,
        shuffler: &mut impl Shuffler,
    ) -> Result<Self, PlayError> {
        let state = rules.new_game(config, shuffler)?;
        Ok(Self {
            rules,
            state,
            history: Vector::new(),
        })
    }

    /// Rebuild a game from its history.
    ///
    /// Fails with `ReplayDiverged` if a record names a different player than
    /// the one holding the decision at that point.
    pub fn replay(
        config: &GameConfig,
        shuffler: &mut impl Shuffler,
        records: &[ActionRecord],
    ) -> Result<Self, PlayError> {
        let mut game = Self::new(config, shuffler)?;
        for (i, record) in records.iter().enumerate() {
            let found = game.state.current_color();
            if found != record.player {
                return Err(PlayError::ReplayDiverged {
                    record: i,
                    expected: record.player,
                    found,
                });
            }
            game.play(record.index)?;
        }
        Ok(game)
    }

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The pending menu, `None` once the game is over.
    #[must_use]
    pub fn possible_actions(&self) -> Option<&PossibleActions> {
        self.state.possible_actions()
    }

    /// The player holding the current decision.
    #[must_use]
    pub fn deciding_player(&self) -> PlayerColor {
        self.state.current_color()
    }

    /// The change choosing `index` would make, without making it.
    pub fn preview(&self, index: usize) -> Result<GameStateChange, PlayError> {
        self.rules.execute(&self.state, index)
    }

    /// Choose `index` from the pending menu.
    ///
    /// Returns the applied change so a renderer can animate it.
    pub fn play(&mut self, index: usize) -> Result<GameStateChange, PlayError> {
        let change = self.rules.execute(&self.state, index)?;
        let record = ActionRecord::new(
            self.state.current_color(),
            index,
            self.state.century(),
            self.state.turn(),
        );
        debug!(
            player = %record.player,
            index,
            century = record.century,
            turn = record.turn,
            "play"
        );

        self.state = self.rules.commit(&self.state, &change);
        self.history.push_back(record);
        Ok(change)
    }

    /// Final result once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }
}
