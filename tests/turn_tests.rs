//! Turn flow: worker placement triggering board actions, scoring sequence,
//! century transitions.

use rust_citadel::actions::{GameAction, PossibleActions};
use rust_citadel::board::{Board, Location};
use rust_citadel::changes::{ArchitectLocation, CubeLocation, GameStateChange};
use rust_citadel::core::{
    ArchitectColor, GameConfig, InfluenceColor, MessageKind, NoShuffle, PlayerColor,
};
use rust_citadel::rules::{Game, GameResult, Rules, RulesEngine};
use rust_citadel::state::GameState;
use rust_citadel::turn::ScoringPhase;

// Century-0 Politic tile, 3 cubes per spot, Star board action.
const SITE: Location = Location::new(3, 0);

fn index_of(menu: &PossibleActions, target: &GameAction) -> usize {
    menu.actions()
        .iter()
        .position(|action| *action == target)
        .unwrap_or_else(|| panic!("{target:?} not offered"))
}

/// Red builds on `SITE`, Red and Green each fill one spot.
fn two_spots_filled(rules: &Rules) -> GameState {
    let config = GameConfig::with_player_count(2).with_initial_active_cubes(10);
    let state = GameState::new(rules.board(), &config, &mut NoShuffle).unwrap();

    let setup = GameStateChange::Composite(vec![
        GameStateChange::move_architect(
            ArchitectLocation::own_held(PlayerColor::Red),
            ArchitectLocation::Tile {
                location: SITE,
                architect: ArchitectColor::Player(PlayerColor::Red),
            },
        ),
        GameStateChange::move_cubes(
            3,
            CubeLocation::ActiveReserve(PlayerColor::Red),
            CubeLocation::TileSpot {
                location: SITE,
                spot: 0,
                color: PlayerColor::Red,
            },
        ),
        GameStateChange::move_cubes(
            3,
            CubeLocation::ActiveReserve(PlayerColor::Green),
            CubeLocation::TileSpot {
                location: SITE,
                spot: 1,
                color: PlayerColor::Green,
            },
        ),
    ]);
    rules.configure(&setup.apply(&state))
}

#[test]
fn test_last_spot_queues_board_action() {
    let rules = Rules::standard();
    let state = two_spots_filled(&rules);
    let red = PlayerColor::Red;

    let menu = rules.pending(&state).unwrap();
    let index = index_of(
        menu,
        &GameAction::SendWorkers {
            location: SITE,
            color: red,
        },
    );
    let change = rules.execute(&state, index).unwrap();

    let atomic = change.atomic_changes();
    assert_eq!(atomic.len(), 2);
    assert_eq!(
        atomic[0],
        &GameStateChange::MoveCubes {
            count: 3,
            from: CubeLocation::ActiveReserve(red),
            to: CubeLocation::TileSpot {
                location: SITE,
                spot: 2,
                color: red,
            },
        }
    );
    assert!(matches!(atomic[1], GameStateChange::QueuePossibleActions(_)));
    assert!(!atomic
        .iter()
        .any(|c| matches!(c, GameStateChange::NextPlayer { .. })));

    let next = rules.commit(&state, &change);
    assert_eq!(next.current_color(), red);
    assert_eq!(next.tile(SITE).nb_filled_spots(), 3);
    let board_menu = next.possible_actions().unwrap();
    assert_eq!(board_menu.message().map(|m| m.kind), Some(MessageKind::BoardAction));

    // Red has no star token yet: skipping is the only option, and it ends
    // the turn.
    assert_eq!(board_menu.nb_actions(), 1);
    let after = rules.play(&next, 0).unwrap();
    assert_eq!(after.current_color(), PlayerColor::Green);
    assert_eq!(after.turn(), 1);
}

#[test]
fn test_completing_after_board_action_places_star() {
    let rules = Rules::standard();
    let state = two_spots_filled(&rules);
    let red = PlayerColor::Red;

    let send = index_of(
        rules.pending(&state).unwrap(),
        &GameAction::SendWorkers {
            location: SITE,
            color: red,
        },
    );
    let state = rules.play(&state, send).unwrap();
    let state = rules.play(&state, 0).unwrap();
    // Green sends a cube anywhere.
    let state = rules.play(&state, 0).unwrap();

    let back = index_of(
        rules.pending(&state).unwrap(),
        &GameAction::MoveArchitect {
            from: ArchitectLocation::Tile {
                location: SITE,
                architect: ArchitectColor::Player(red),
            },
            to: ArchitectLocation::own_held(red),
        },
    );
    let state = rules.play(&state, back).unwrap();

    let tile = state.tile(SITE);
    assert!(tile.building_facing);
    assert_eq!(tile.stars_of(red), 3);
    assert_eq!(state.zone(InfluenceColor::Politic).count(red), 6);
    assert_eq!(state.zone(InfluenceColor::Politic).count(PlayerColor::Green), 3);
    state.assert_invariants();
}

#[test]
fn test_scoring_sequence_is_single_step_menus() {
    let rules = Rules::standard();
    let config = GameConfig::with_player_count(2).with_max_turns_per_century(2);
    let mut state = rules.new_game(&config, &mut NoShuffle).unwrap();

    state = rules.play(&state, 0).unwrap();
    state = rules.play(&state, 0).unwrap();

    let mut phases = Vec::new();
    while let Some(GameAction::ScoringStep(phase)) =
        state.possible_actions().and_then(|menu| menu.action(0)).cloned()
    {
        assert_eq!(rules.nb_choices(&state), 1);
        phases.push(phase);
        state = rules.play(&state, 0).unwrap();
    }

    assert_eq!(phases.first(), Some(&ScoringPhase::Init));
    assert_eq!(phases.last(), Some(&ScoringPhase::PrepareNextCentury));
    assert_eq!(phases.len(), 10);
    assert_eq!(state.century(), 1);
    assert_eq!(state.century_turns(), 0);
    // Two turns were taken, then the turn passes without counting.
    assert_eq!(state.turn(), 2);
    assert_eq!(state.current_color(), PlayerColor::Green);
}

#[test]
fn test_zone_scoring_through_the_sequence() {
    let rules = Rules::standard();
    let config = GameConfig::with_player_count(2).with_max_turns_per_century(2);
    let mut state = rules.new_game(&config, &mut NoShuffle).unwrap();

    // Both players send their cube to the first zone offered: Religious.
    state = rules.play(&state, 0).unwrap();
    state = rules.play(&state, 0).unwrap();
    assert_eq!(state.zone(InfluenceColor::Religious).count(PlayerColor::Red), 1);

    for _ in 0..10 {
        state = rules.play(&state, 0).unwrap();
    }

    // 1 point for the Religious cube, 2 for four active cubes.
    assert_eq!(state.player(PlayerColor::Red).score, 3);
    assert_eq!(state.player(PlayerColor::Green).score, 3);
}

#[test]
fn test_full_game_reaches_result() {
    let config = GameConfig::with_player_count(3).with_max_turns_per_century(6);
    let mut game = Game::new(&config, &mut NoShuffle).unwrap();

    let mut steps = 0;
    while game.result().is_none() {
        let choices = game.possible_actions().map_or(0, PossibleActions::nb_actions);
        assert!(choices > 0, "a running game always has a decision");
        game.play(steps % choices).unwrap();
        steps += 1;
        assert!(steps < 2_000, "game did not finish");
    }

    let state = game.state();
    assert!(state.is_over());
    assert_eq!(state.century(), 3);
    assert!(state.possible_actions().is_none());

    let best = state.players().iter().map(|p| p.score).max().unwrap();
    match game.result().unwrap() {
        GameResult::Winner(color) => assert_eq!(state.player(color).score, best),
        GameResult::Winners(colors) => {
            assert!(colors.len() > 1);
            assert!(colors.iter().all(|&c| state.player(c).score == best));
        }
    }
}

#[test]
fn test_full_game_without_turn_limit() {
    let config = GameConfig::with_player_count(2);
    let mut game = Game::new(&config, &mut NoShuffle).unwrap();

    // Always the first choice: cubes go to the religious zone until a player
    // has nothing left to spend, which ends the century.
    let mut steps = 0;
    let mut scoring_started = Vec::new();
    while game.result().is_none() {
        let menu = game.possible_actions().unwrap();
        if menu.message().map(|m| m.kind) == Some(MessageKind::BeginScoring) {
            scoring_started.push(game.state().century());
        }
        game.play(0).unwrap();
        steps += 1;
        assert!(steps < 20_000, "game did not finish");
    }

    assert_eq!(scoring_started, vec![0, 1, 2, 3]);
    assert!(game.state().is_over());
    assert_eq!(game.state().century(), 3);
}

#[test]
fn test_board_is_shared_by_reference() {
    let board = Board::standard();
    assert_eq!(board.len(), 20);
    assert!(!board.contains(Location::new(0, 0)));
    assert!(board.are_adjacent(Location::new(1, 0), Location::new(1, 1)));
}
