//! Player-count coverage.
//!
//! These tests verify that setup, turn rotation and full games hold for
//! every supported table size, 2 to 5 players.

use rust_citadel::actions::GameAction;
use rust_citadel::core::{
    starting_cubes, GameConfig, GameRng, LeaderCard, NoShuffle, Player, PlayerColor, SetupError,
};
use rust_citadel::rules::{Game, Rules, RulesEngine};
use rust_citadel::state::GameState;

/// Test setup values for each supported player count.
#[test]
fn test_setup_per_player_count() {
    let rules = Rules::standard();
    for player_count in 2..=5 {
        let state = rules
            .new_game(&GameConfig::with_player_count(player_count), &mut NoShuffle)
            .unwrap();
        let total = starting_cubes(player_count).unwrap();

        assert_eq!(state.player_count(), player_count);
        for player in state.players().iter() {
            assert_eq!(player.nb_active_cubes, 5);
            assert_eq!(player.nb_passive_cubes, total - 5);
            assert!(player.is_holding_architect);
            assert_eq!(player.score, 0);
        }
        assert_eq!(state.current_color(), PlayerColor::Red);

        let economic = state.leader_cards().contains(&LeaderCard::ECONOMIC);
        assert_eq!(economic, player_count >= 4);
        state.assert_invariants();
    }
}

/// Test that unsupported tables are refused.
#[test]
fn test_rejects_invalid_tables() {
    let rules = Rules::standard();

    let solo = rules.new_game(&GameConfig::with_player_count(1), &mut NoShuffle);
    assert_eq!(solo.unwrap_err(), SetupError::PlayerCount(1));

    let twins = GameConfig::new(vec![
        Player::new(PlayerColor::Blue, "Ada"),
        Player::new(PlayerColor::Blue, "Grace"),
    ]);
    assert_eq!(
        rules.new_game(&twins, &mut NoShuffle).unwrap_err(),
        SetupError::DuplicateColor(PlayerColor::Blue)
    );

    let greedy = GameConfig::with_player_count(5).with_initial_active_cubes(21);
    assert_eq!(
        rules.new_game(&greedy, &mut NoShuffle).unwrap_err(),
        SetupError::TooManyActiveCubes {
            active: 21,
            total: 20
        }
    );
}

/// Test that seating order, not color order, drives turn rotation.
#[test]
fn test_turn_order_follows_seating() {
    let rules = Rules::standard();
    let config = GameConfig::new(vec![
        Player::new(PlayerColor::Purple, "P"),
        Player::new(PlayerColor::Green, "G"),
        Player::new(PlayerColor::Yellow, "Y"),
        Player::new(PlayerColor::Red, "R"),
    ]);
    let mut state = rules.new_game(&config, &mut NoShuffle).unwrap();

    let mut seen = Vec::new();
    for _ in 0..5 {
        seen.push(state.current_color());
        // First offered action: a cube to the religious zone.
        assert!(matches!(
            state.possible_actions().unwrap().action(0),
            Some(GameAction::SendCubesToZone { .. })
        ));
        state = rules.play(&state, 0).unwrap();
    }

    assert_eq!(
        seen,
        vec![
            PlayerColor::Purple,
            PlayerColor::Green,
            PlayerColor::Yellow,
            PlayerColor::Red,
            PlayerColor::Purple,
        ]
    );
    assert_eq!(state.turn(), 5);
}

fn random_game(config: &GameConfig, seed: u64) -> Game {
    let player_count = config.player_count();
    let mut game = Game::new(config, &mut GameRng::new(seed)).unwrap();
    let mut policy = GameRng::new(seed.wrapping_mul(31).wrapping_add(7));

    let mut steps = 0;
    while game.result().is_none() {
        let choices = game.possible_actions().map_or(0, |menu| menu.nb_actions());
        assert!(choices > 0, "{player_count} players: no choice offered");
        game.play(policy.gen_range_usize(0..choices)).unwrap();
        steps += 1;
        assert!(steps < 20_000, "{player_count} players: game did not finish");
    }
    game
}

fn assert_finished(game: &Game) {
    let state = game.state();
    assert!(state.is_over());
    assert_eq!(state.century(), 3);
    assert!(state.possible_actions().is_none());

    let result = game.result().unwrap();
    let best = state.players().iter().map(|p| p.score).max().unwrap();
    for player in state.players().iter() {
        assert_eq!(result.is_winner(player.color()), player.score == best);
    }
}

/// Test random playouts to completion for every table size.
#[test]
fn test_random_playouts_finish() {
    for player_count in 2..=5 {
        let config = GameConfig::with_player_count(player_count).with_max_turns_per_century(15);
        for seed in [1, 42, 1234] {
            assert_finished(&random_game(&config, seed));
        }
    }
}

/// Test that games without a turn limit end once players run out of moves.
#[test]
fn test_unlimited_playouts_finish() {
    for player_count in 2..=5 {
        let config = GameConfig::with_player_count(player_count);
        for seed in 0..10 {
            let game = random_game(&config, seed);
            assert_finished(&game);
            assert!(game.state().max_turns_per_century().is_none());
        }
    }
}

/// Test that a recorded game replays to the same final state.
#[test]
fn test_history_replays() {
    let config = GameConfig::with_player_count(4);
    let game = random_game(&config, 99);
    let records: Vec<_> = game.history().iter().cloned().collect();

    let replayed = Game::replay(&config, &mut GameRng::new(99), &records).unwrap();
    assert_eq!(replayed.state(), game.state());
    assert_eq!(replayed.history().len(), records.len());
}

/// Test that a seeded shuffle is reproducible and keeps every tile.
#[test]
fn test_shuffled_setups() {
    let rules = Rules::standard();
    let config = GameConfig::with_player_count(3);
    let a = rules.new_game(&config, &mut GameRng::new(5)).unwrap();
    let b = rules.new_game(&config, &mut GameRng::new(5)).unwrap();
    let c = rules.new_game(&config, &mut NoShuffle).unwrap();

    assert_eq!(a, b);
    let centuries = |state: &GameState| {
        let mut counts = [0usize; 4];
        for tile in state.tiles().iter() {
            counts[usize::from(tile.tile.century)] += 1;
        }
        counts
    };
    assert_eq!(centuries(&a), centuries(&c));
}
