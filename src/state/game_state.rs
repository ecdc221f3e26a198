//! Game state: the authoritative snapshot.
//!
//! ## Snapshots
//!
//! `GameState` uses `im` persistent vectors for players and tiles, so
//! `clone()` shares structure instead of copying every record. State is only
//! ever changed by applying a [`GameStateChange`](crate::changes::GameStateChange),
//! which clones first and mutates the clone. The renderer can therefore hold
//! an old snapshot (to preview a change) while the new one is built.
//!
//! ## Invariants
//!
//! - Exactly one player is current, except transiently inside an
//!   out-of-turn interjection chain.
//! - Per-player cube conservation: active + passive + tile spots + zones is
//!   constant for the whole game.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player_state::PlayerState;
use super::tile_state::TileState;
use super::zone_state::InfluenceZoneState;
use crate::actions::PossibleActions;
use crate::board::{Board, Location, Tile};
use crate::core::{
    ArchitectColor, GameConfig, InfluenceColor, LeaderCard, PlayerColor, SetupError, Shuffler,
    NB_INFLUENCE_ZONES,
};

/// Where the neutral architect currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeutralArchitect {
    OffBoard,
    Held(PlayerColor),
    OnTile(Location),
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current century (0-3).
    century: u8,

    /// Seated players in turn order.
    players: Vector<PlayerState>,

    /// One tile per valid location, in board order.
    tiles: Vector<TileState>,

    /// Leader cards nobody holds yet.
    leader_cards: Vector<LeaderCard>,

    /// Cube banks, indexed by `InfluenceColor::index`.
    zones: [InfluenceZoneState; NB_INFLUENCE_ZONES],

    /// Pending decision menu.
    possible_actions: Option<PossibleActions>,

    /// Turns taken since the start of the game.
    turn: u32,

    /// Turns taken in the current century.
    century_turns: u32,

    max_turns_per_century: Option<u32>,

    /// Final scoring has run.
    over: bool,
}

impl GameState {
    /// Set up a new game.
    ///
    /// The tile deck is ordered by `shuffler` and dealt onto the board's
    /// locations in canonical order. The first configured player starts.
    pub fn new(
        board: &Board,
        config: &GameConfig,
        shuffler: &mut impl Shuffler,
    ) -> Result<Self, SetupError> {
        let total = config.validate()?;

        let mut deck = Tile::standard_deck();
        if deck.len() != board.len() {
            return Err(SetupError::DeckSize {
                tiles: deck.len(),
                locations: board.len(),
            });
        }
        shuffler.shuffle_tiles(&mut deck);

        let tiles = board
            .locations()
            .zip(deck)
            .map(|(location, tile)| TileState::new(tile, location))
            .collect();

        let passive = total - config.initial_active_cubes;
        let players = config
            .players
            .iter()
            .enumerate()
            .map(|(i, player)| {
                let active = config.initial_active_cubes;
                let mut state = PlayerState::new(player.clone(), active, passive);
                state.is_current_player = i == 0;
                state
            })
            .collect();

        Ok(Self {
            century: 0,
            players,
            tiles,
            leader_cards: LeaderCard::for_player_count(config.player_count()).into(),
            zones: [InfluenceZoneState::new(); NB_INFLUENCE_ZONES],
            possible_actions: None,
            turn: 0,
            century_turns: 0,
            max_turns_per_century: config.max_turns_per_century,
            over: false,
        })
    }

    // === Progression ===

    #[must_use]
    pub fn century(&self) -> u8 {
        self.century
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn century_turns(&self) -> u32 {
        self.century_turns
    }

    #[must_use]
    pub fn max_turns_per_century(&self) -> Option<u32> {
        self.max_turns_per_century
    }

    /// Final scoring has run; no more decisions.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    // === Players ===

    #[must_use]
    pub fn players(&self) -> &Vector<PlayerState> {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Seated colors in turn order.
    pub fn colors(&self) -> impl Iterator<Item = PlayerColor> + '_ {
        self.players.iter().map(PlayerState::color)
    }

    /// Turn-order position of a seated color.
    #[must_use]
    pub fn player_index(&self, color: PlayerColor) -> Option<usize> {
        self.players.iter().position(|p| p.color() == color)
    }

    /// State of a seated player.
    ///
    /// # Panics
    ///
    /// Panics if `color` is not seated.
    #[must_use]
    pub fn player(&self, color: PlayerColor) -> &PlayerState {
        &self.players[self.expect_player_index(color)]
    }

    /// The current player.
    ///
    /// # Panics
    ///
    /// Panics if no player is current.
    #[must_use]
    pub fn current_player(&self) -> &PlayerState {
        match self.players.iter().find(|p| p.is_current_player) {
            Some(player) => player,
            None => panic!("no current player"),
        }
    }

    #[must_use]
    pub fn current_color(&self) -> PlayerColor {
        self.current_player().color()
    }

    /// Who holds a leader card, if anyone.
    #[must_use]
    pub fn holder_of(&self, card: LeaderCard) -> Option<PlayerColor> {
        self.players.iter().find(|p| p.holds(card)).map(PlayerState::color)
    }

    /// Players currently holding any leader card.
    #[must_use]
    pub fn nb_leader_holders(&self) -> usize {
        self.players.iter().filter(|p| p.leader_card.is_some()).count()
    }

    // === Board ===

    /// Tiles in board order.
    #[must_use]
    pub fn tiles(&self) -> &Vector<TileState> {
        &self.tiles
    }

    /// Tile on a location.
    ///
    /// # Panics
    ///
    /// Panics if no tile is dealt on `location`.
    #[must_use]
    pub fn tile(&self, location: Location) -> &TileState {
        &self.tiles[self.expect_tile_index(location)]
    }

    /// Tile carrying a given architect, if any.
    #[must_use]
    pub fn tile_with_architect(&self, architect: ArchitectColor) -> Option<&TileState> {
        self.tiles.iter().find(|t| t.architect == Some(architect))
    }

    /// Where the neutral architect is.
    #[must_use]
    pub fn neutral_architect(&self) -> NeutralArchitect {
        if let Some(holder) = self.players.iter().find(|p| p.is_holding_neutral_architect) {
            return NeutralArchitect::Held(holder.color());
        }
        match self.tile_with_architect(ArchitectColor::Neutral) {
            Some(tile) => NeutralArchitect::OnTile(tile.location),
            None => NeutralArchitect::OffBoard,
        }
    }

    #[must_use]
    pub fn leader_cards(&self) -> &Vector<LeaderCard> {
        &self.leader_cards
    }

    #[must_use]
    pub fn zone(&self, zone: InfluenceColor) -> &InfluenceZoneState {
        &self.zones[zone.index()]
    }

    #[must_use]
    pub fn zones(&self) -> &[InfluenceZoneState; NB_INFLUENCE_ZONES] {
        &self.zones
    }

    /// Every cube a player owns, wherever it is. Constant over a game.
    #[must_use]
    pub fn total_cubes(&self, board: &Board, color: PlayerColor) -> u32 {
        let player = self.player(color);
        let reserve = u32::from(player.reserve_cubes());
        let zones: u32 = self.zones.iter().map(|z| u32::from(z.count(color))).sum();
        let spots: u32 = self
            .tiles
            .iter()
            .map(|tile| {
                let owned = tile.spots.iter().filter(|s| **s == Some(color)).count() as u32;
                owned * u32::from(board.cubes_per_spot(tile.location))
            })
            .sum();
        reserve + zones + spots
    }

    // === Decisions ===

    #[must_use]
    pub fn possible_actions(&self) -> Option<&PossibleActions> {
        self.possible_actions.as_ref()
    }

    /// Copy of this state with a different pending menu.
    #[must_use]
    pub fn with_possible_actions(&self, possible_actions: Option<PossibleActions>) -> Self {
        let mut next = self.clone();
        next.possible_actions = possible_actions;
        next
    }

    // === Invariants ===

    /// Check structural invariants.
    ///
    /// # Panics
    ///
    /// Panics with a description of the first violated invariant.
    pub fn assert_invariants(&self) {
        let current = self.players.iter().filter(|p| p.is_current_player).count();
        assert_eq!(current, 1, "expected exactly one current player, found {current}");

        for player in &self.players {
            let architect = ArchitectColor::Player(player.color());
            let on_tiles = self.tiles.iter().filter(|t| t.architect == Some(architect)).count();
            let placements = on_tiles + usize::from(player.is_holding_architect);
            assert!(placements <= 1, "{architect} is in {placements} places");
        }

        let neutral_on_tiles = self
            .tiles
            .iter()
            .filter(|t| t.architect == Some(ArchitectColor::Neutral))
            .count();
        let neutral_held = self.players.iter().filter(|p| p.is_holding_neutral_architect).count();
        assert!(
            neutral_on_tiles + neutral_held <= 1,
            "neutral architect is in {} places",
            neutral_on_tiles + neutral_held
        );

        for tile in &self.tiles {
            if tile.building_facing {
                let location = tile.location;
                assert!(tile.architect.is_none(), "completed tile {location} has an architect");
                assert_eq!(tile.nb_filled_spots(), 0, "completed tile {location} has workers");
            }
            if let Some(star) = tile.star {
                assert!(
                    (1..=3).contains(&star.nb_stars),
                    "tile {} has {} stars",
                    tile.location,
                    star.nb_stars
                );
            }
        }
    }

    // === Mutation (change application only) ===

    pub(crate) fn player_mut(&mut self, color: PlayerColor) -> &mut PlayerState {
        let index = self.expect_player_index(color);
        &mut self.players[index]
    }

    pub(crate) fn players_mut(&mut self) -> &mut Vector<PlayerState> {
        &mut self.players
    }

    pub(crate) fn tile_mut(&mut self, location: Location) -> &mut TileState {
        let index = self.expect_tile_index(location);
        &mut self.tiles[index]
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut Vector<TileState> {
        &mut self.tiles
    }

    pub(crate) fn zone_mut(&mut self, zone: InfluenceColor) -> &mut InfluenceZoneState {
        &mut self.zones[zone.index()]
    }

    pub(crate) fn leader_cards_mut(&mut self) -> &mut Vector<LeaderCard> {
        &mut self.leader_cards
    }

    pub(crate) fn set_possible_actions(&mut self, possible_actions: Option<PossibleActions>) {
        self.possible_actions = possible_actions;
    }

    pub(crate) fn count_turn(&mut self) {
        self.turn += 1;
        self.century_turns += 1;
    }

    pub(crate) fn start_next_century(&mut self) {
        self.century += 1;
        self.century_turns = 0;
    }

    pub(crate) fn finish(&mut self) {
        self.over = true;
    }

    fn expect_player_index(&self, color: PlayerColor) -> usize {
        match self.player_index(color) {
            Some(i) => i,
            None => panic!("{color} is not seated"),
        }
    }

    fn expect_tile_index(&self, location: Location) -> usize {
        match self.tiles.iter().position(|t| t.location == location) {
            Some(i) => i,
            None => panic!("no tile on {location}"),
        }
    }
}
