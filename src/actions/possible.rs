//! Decision menus.
//!
//! A `PossibleActions` is an ordered menu of actions and nested menus. Its
//! index space is flat: the concatenation of every entry's actions, in
//! entry order. Hosts see one list; the menu routes a global index to the
//! owning entry.
//!
//! ## Continuations
//!
//! A menu may carry a continuation change, appended to whatever the chosen
//! action produces. Nested menus carry their own; the innermost runs first.
//! The top-level turn menu uses this to end every turn choice with
//! `NextPlayer`, and interjections use it to resume the interrupted turn.

use serde::{Deserialize, Serialize};

use super::action::GameAction;
use crate::board::Board;
use crate::changes::GameStateChange;
use crate::core::Message;
use crate::state::GameState;

/// One entry of a menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuEntry {
    Action(GameAction),
    Nested(PossibleActions),
}

impl MenuEntry {
    fn nb_actions(&self) -> usize {
        match self {
            MenuEntry::Action(_) => 1,
            MenuEntry::Nested(menu) => menu.nb_actions(),
        }
    }
}

/// A branching decision menu.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossibleActions {
    message: Option<Message>,
    entries: Vec<MenuEntry>,
    continuation: Option<Box<GameStateChange>>,
}

impl PossibleActions {
    /// A flat menu.
    #[must_use]
    pub fn new(actions: Vec<GameAction>) -> Self {
        Self {
            message: None,
            entries: actions.into_iter().map(MenuEntry::Action).collect(),
            continuation: None,
        }
    }

    /// A menu of sub-menus. Empty children are dropped.
    #[must_use]
    pub fn composite(children: Vec<PossibleActions>) -> Self {
        Self {
            message: None,
            entries: children
                .into_iter()
                .filter(|child| !child.is_empty())
                .map(MenuEntry::Nested)
                .collect(),
            continuation: None,
        }
    }

    /// A menu with a single action.
    #[must_use]
    pub fn single(action: GameAction) -> Self {
        Self::new(vec![action])
    }

    #[must_use]
    pub fn with_message(mut self, message: Message) -> Self {
        self.message = Some(message);
        self
    }

    /// Append `change` to this menu's continuation.
    #[must_use]
    pub fn with_continuation(mut self, change: GameStateChange) -> Self {
        self.push_continuation(change);
        self
    }

    /// Append `change` to this menu's continuation.
    pub fn push_continuation(&mut self, change: GameStateChange) {
        self.continuation = Some(Box::new(match self.continuation.take() {
            Some(existing) => existing.then(change),
            None => change,
        }));
    }

    /// Add an entry at the end.
    pub fn push(&mut self, entry: MenuEntry) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    #[must_use]
    pub fn continuation(&self) -> Option<&GameStateChange> {
        self.continuation.as_deref()
    }

    /// Number of selectable actions, nested menus flattened.
    #[must_use]
    pub fn nb_actions(&self) -> usize {
        self.entries.iter().map(MenuEntry::nb_actions).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nb_actions() == 0
    }

    /// The action at a global index.
    #[must_use]
    pub fn action(&self, index: usize) -> Option<&GameAction> {
        self.locate(index, &mut Vec::new())
    }

    /// Message of the innermost menu owning a global index.
    #[must_use]
    pub fn message_for(&self, index: usize) -> Option<&Message> {
        let mut offset = index;
        for entry in &self.entries {
            let size = entry.nb_actions();
            if offset < size {
                return match entry {
                    MenuEntry::Action(_) => self.message(),
                    MenuEntry::Nested(menu) => menu.message_for(offset).or(self.message()),
                };
            }
            offset -= size;
        }
        None
    }

    /// Every action, in global index order.
    #[must_use]
    pub fn actions(&self) -> Vec<&GameAction> {
        let mut out = Vec::with_capacity(self.nb_actions());
        self.collect_actions(&mut out);
        out
    }

    fn collect_actions<'a>(&'a self, out: &mut Vec<&'a GameAction>) {
        for entry in &self.entries {
            match entry {
                MenuEntry::Action(action) => out.push(action),
                MenuEntry::Nested(menu) => menu.collect_actions(out),
            }
        }
    }

    /// Find the action at `index`, recording continuations outermost first.
    fn locate<'a>(
        &'a self,
        index: usize,
        continuations: &mut Vec<&'a GameStateChange>,
    ) -> Option<&'a GameAction> {
        let mut offset = index;
        for entry in &self.entries {
            let size = entry.nb_actions();
            if offset < size {
                if let Some(continuation) = self.continuation() {
                    continuations.push(continuation);
                }
                return match entry {
                    MenuEntry::Action(action) => Some(action),
                    MenuEntry::Nested(menu) => menu.locate(offset, continuations),
                };
            }
            offset -= size;
        }
        None
    }

    /// Execute the action at a global index.
    ///
    /// The action's change is followed by the continuations of every menu on
    /// the path to it, innermost first. Returns `None` if `index` is out of
    /// range.
    #[must_use]
    pub fn execute(
        &self,
        index: usize,
        board: &Board,
        state: &GameState,
    ) -> Option<GameStateChange> {
        let mut continuations = Vec::new();
        let action = self.locate(index, &mut continuations)?;

        let change = continuations
            .into_iter()
            .rev()
            .fold(action.execute(board, state), |change, next| {
                change.then(next.clone())
            });
        Some(change)
    }
}
