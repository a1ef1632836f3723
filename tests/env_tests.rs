//! Episode lifecycle tests.

use sheep_env::{
    Area, Card, ClickPolicy, Deck, EnvConfig, EnvError, FirstClickable, GameStatus,
    RandomClickable, SheepEnv, StepKind,
};

/// Seven distinct types clicked in a row fill the queue and lose.
fn lost_env() -> SheepEnv {
    let cards = (0..8u8)
        .map(|i| {
            let id = format!("stack-left-{}", i);
            Card::stack(id, i + 1, Area::LeftStack, u32::from(i), 400.0, 50.0)
        })
        .collect();
    let mut env = SheepEnv::from_deck(EnvConfig::default(), Deck::from_cards(cards)).unwrap();
    for a in 0..7 {
        env.step(a).unwrap();
    }
    env
}

/// Play until the episode ends or nothing is clickable, choosing among
/// exported nodes.
fn play_out<P: ClickPolicy>(env: &mut SheepEnv, policy: &mut P) -> (f32, u32) {
    let mut total = 0.0;
    while !env.is_done() {
        let nodes = env.export_nodes();
        let Some(action) = policy.choose(&nodes) else {
            break;
        };
        total += env.step(action).unwrap().reward;
    }
    (total, env.steps())
}

// =============================================================================
// Full episodes
// =============================================================================

#[test]
fn test_first_clickable_episode_terminates() {
    let mut env = SheepEnv::new(EnvConfig::default()).unwrap();
    let (_, steps) = play_out(&mut env, &mut FirstClickable);

    assert!(env.status().is_terminal() || env.legal_actions().is_empty());
    assert!(steps as usize <= env.deck().len());
}

#[test]
fn test_random_episodes_terminate() {
    let mut env = SheepEnv::new(EnvConfig::default()).unwrap();
    let mut policy = RandomClickable::new(17);

    for seed in 0..10 {
        env.reset_with_seed(seed);
        play_out(&mut env, &mut policy);
        match env.status() {
            GameStatus::Won => assert!(env.deck().all_eliminated()),
            GameStatus::Lost => assert_eq!(env.queue().len(), 7),
            // Only selected cards left on top: no move remains.
            GameStatus::InProgress => assert!(env.legal_actions().is_empty()),
        }
    }
}

#[test]
fn test_same_seed_same_episode() {
    let run = || {
        let mut env = SheepEnv::new(EnvConfig::default().with_seed(123)).unwrap();
        let mut policy = RandomClickable::new(5);
        play_out(&mut env, &mut policy)
    };
    assert_eq!(run(), run());
}

#[test]
fn test_small_game_can_be_won() {
    let config = EnvConfig::default()
        .with_card_types(2)
        .with_copies_per_type(3)
        .with_layout(3, 0);
    let mut env = SheepEnv::new(config).unwrap();

    // Every card is clickable; clicking by type never fills the queue.
    let mut order: Vec<usize> = env.legal_actions();
    order.sort_by_key(|&a| env.deck().cards()[a].card_type);
    let mut last = None;
    for a in order {
        last = Some(env.step(a).unwrap());
    }

    let last = last.unwrap();
    assert_eq!(last.status, GameStatus::Won);
    assert!(last.reward > 10.0);
}

// =============================================================================
// Terminal handling and reset
// =============================================================================

#[test]
fn test_step_after_end_is_rejected() {
    let mut env = lost_env();
    assert_eq!(env.status(), GameStatus::Lost);
    let steps = env.steps();
    let queue = env.queue().to_vec();

    let err = env.step(7).unwrap_err();
    assert!(matches!(err, EnvError::EpisodeFinished { status: GameStatus::Lost }));
    assert_eq!(env.steps(), steps);
    assert_eq!(env.queue(), &queue[..]);
}

#[test]
fn test_reset_after_terminal_starts_fresh() {
    let mut env = lost_env();
    assert!(env.is_done());

    let obs = env.reset();
    assert_eq!(env.status(), GameStatus::InProgress);
    assert_eq!(env.steps(), 0);
    assert!(env.queue().is_empty());
    assert!(obs.valid_actions() >= 30);
    assert!(env.step(env.legal_actions()[0]).is_ok());
}

#[test]
fn test_reset_continues_rng_stream() {
    let mut env = SheepEnv::new(EnvConfig::default()).unwrap();
    let first = env.export_nodes();
    env.reset();
    assert_ne!(env.export_nodes(), first);

    let mut fresh = SheepEnv::new(EnvConfig::default()).unwrap();
    assert_eq!(fresh.export_nodes(), first);
    fresh.reset();
    assert_eq!(fresh.export_nodes(), env.export_nodes());
}

#[test]
fn test_rejected_steps_count_but_do_not_end() {
    let mut env = SheepEnv::new(EnvConfig::default()).unwrap();
    let covered = env
        .deck()
        .iter()
        .find(|(_, c)| !c.is_clickable())
        .map(|(i, _)| i.index())
        .unwrap();

    assert_eq!(env.step(covered).unwrap().kind, StepKind::NotClickable);
    assert_eq!(env.step(10_000).unwrap().kind, StepKind::InvalidIndex);
    assert_eq!(env.steps(), 2);
    assert_eq!(env.status(), GameStatus::InProgress);
}
