//! Random self-play through the host-facing traits.
//!
//! Uses a seeded ChaCha generator so failures reproduce.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use abalone_engine::core::{ActionId, PlayerId};
use abalone_engine::games::abalone::{AbaloneGame, AbaloneGameBuilder, AbaloneState, Layout};
use abalone_engine::rules::{GameState, RulesEngine};

fn play_random_game(game: &AbaloneGame, rng: &mut ChaCha8Rng) -> AbaloneState {
    let mut state = game.new_initial_state();
    let mut last_marbles = [14u8, 14u8];

    while !state.is_terminal() {
        let player = state.current_player().unwrap();
        let legal = state.legal_actions();
        assert!(!legal.is_empty(), "no moves for {player}");
        let action = *legal.choose(rng).unwrap();
        let moves_before = state.num_moves();

        state.apply_action(action).unwrap();

        assert_eq!(state.num_moves(), moves_before + 1);
        assert_eq!(state.marble_count(player), last_marbles[player.index()]);
        let opponent = player.opponent();
        let lost = last_marbles[opponent.index()] - state.marble_count(opponent);
        assert!(lost <= 1);
        last_marbles[opponent.index()] = state.marble_count(opponent);

        if !state.is_terminal() {
            assert_eq!(state.current_player(), Some(opponent));
        }
    }
    state
}

#[test]
fn test_random_self_play() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let game = AbaloneGame::default();

    for _ in 0..100 {
        let state = play_random_game(&game, &mut rng);

        assert!(state.is_terminal());
        assert_eq!(state.current_player(), None);
        assert!(state.legal_actions().is_empty());
        assert!(state.num_moves() as usize <= game.max_game_length());
        assert_eq!(state.history().len(), state.num_moves() as usize);

        let returns = state.returns();
        assert!(returns.as_slice().iter().sum::<f64>().abs() < 1e-9);
        for &r in returns.as_slice() {
            assert!(r >= game.min_utility() && r <= game.max_utility());
        }
        assert!(state.result().is_some());
    }
}

#[test]
fn test_random_self_play_belgian_daisy_blitz() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let (game, _) = AbaloneGameBuilder::new()
        .layout(Layout::BelgianDaisy)
        .marbles_to_win(4)
        .max_moves(300)
        .build()
        .unwrap();

    for _ in 0..20 {
        let state = play_random_game(&game, &mut rng);
        if let Some(winner) = state.outcome() {
            assert!(state.marbles_lost(winner.opponent()) >= 4);
            assert_eq!(state.returns()[winner], 1.0);
        }
    }
}

#[test]
fn test_random_ids_either_play_or_forfeit() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    let game = AbaloneGame::default();

    for _ in 0..200 {
        let mut state = game.new_initial_state();

        // walk a few legal moves first so positions vary
        for _ in 0..rng.gen_range(0..6) {
            let legal = state.legal_actions();
            state.apply_action(*legal.choose(&mut rng).unwrap()).unwrap();
        }
        let mover = state.current_player().unwrap();

        let action = ActionId::new(rng.gen_range(0..game.num_distinct_actions() as u32));
        let legal = state.is_legal(action);
        let before = state.board().clone();
        state.apply_action(action).unwrap();

        if legal {
            assert_eq!(state.outcome(), None);
        } else {
            assert_eq!(state.outcome(), Some(mover.opponent()));
            assert_eq!(state.board(), &before);
            assert_eq!(state.returns()[mover], -1.0);
        }
    }
}

#[test]
fn test_observation_tensor_tracks_board() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let (game, mut state) = AbaloneGameBuilder::new().max_moves(40).build().unwrap();

    while !state.is_terminal() {
        let encoded = state.observation_tensor(PlayerId::new(0));
        assert_eq!(encoded.shape, game.observation_shape());
        assert_eq!(encoded.tensor.iter().sum::<f32>(), 81.0);
        for (coord, cell) in state.board().iter() {
            let index = [cell.plane(), coord.row as usize, coord.col as usize];
            assert_eq!(encoded.at(&index), Some(1.0));
        }
        let legal = state.legal_actions();
        state.apply_action(*legal.choose(&mut rng).unwrap()).unwrap();
    }
}
