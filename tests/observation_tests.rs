//! Observation encoding tests against live games.

use sheep_env::{Area, EncoderConfig, EnvConfig, SheepEnv};

/// Index and type of the first clickable stack card.
fn first_stack_card(env: &SheepEnv) -> Option<(usize, u8)> {
    env.deck()
        .iter()
        .filter(|(_, c)| c.area.is_stack() && c.is_clickable())
        .map(|(i, c)| (i.index(), c.card_type))
        .next()
}

#[test]
fn test_fresh_mask_marks_both_stacks() {
    let mut env = SheepEnv::new(EnvConfig::default()).unwrap();
    for seed in [0, 7, 99] {
        let obs = env.reset_with_seed(seed);
        assert_eq!(obs.mask.len(), 80);
        assert!(obs.mask[..30].iter().all(|&m| m == 1));
        assert!(obs.valid_actions() >= 30);
    }
}

#[test]
fn test_default_shapes() {
    let env = SheepEnv::new(EnvConfig::default()).unwrap();
    let obs = env.observe();

    assert_eq!(obs.global.shape, vec![24]);
    assert_eq!(obs.cards.shape, vec![80, 80]);
    assert_eq!(obs.cards.len(), 6400);
    assert_eq!(obs.queue.shape, vec![30]);
    assert_eq!(obs.mask.len(), 80);
    assert_eq!(env.encoder().global_len(), 24);
}

#[test]
fn test_full_deck_window_covers_every_card() {
    let config = EnvConfig::default();
    let env = SheepEnv::with_encoder(config.clone(), EncoderConfig::full_deck(&config)).unwrap();
    let obs = env.observe();

    assert_eq!(obs.cards.shape, vec![270, 80]);
    assert_eq!(obs.mask.len(), 270);
    assert_eq!(obs.valid_actions(), env.legal_actions().len());
    assert!(obs.cards.row(269).unwrap()[0] > 0.0);
}

#[test]
fn test_global_vector_after_reset() {
    let env = SheepEnv::new(EnvConfig::default()).unwrap();
    let global = env.observe().global.tensor;

    assert_eq!(&global[..6], &[270.0, 0.0, 0.0, 0.0, 1.0, 2.0]);
    assert!(global[6..].iter().all(|&n| n == 15.0));
}

#[test]
fn test_observe_does_not_mutate() {
    let env = SheepEnv::new(EnvConfig::default()).unwrap();
    let a = env.observe();
    let b = env.observe();
    assert_eq!(a, b);
}

#[test]
fn test_observation_tracks_queue() {
    let mut env = SheepEnv::new(EnvConfig::default()).unwrap();
    let (action, card_type) = first_stack_card(&env).unwrap();
    env.step(action).unwrap();
    let obs = env.observe();

    assert_eq!(obs.global.tensor[1], 1.0);
    assert!((obs.queue.get(0).unwrap() - card_type as f32 / 18.0).abs() < 1e-6);
    assert_eq!(obs.queue.get(1), Some(0.0));
    assert_eq!(obs.mask[action], 0);

    // Selected state is ordinal 2 of 3.
    let row = obs.cards.row(action).unwrap();
    assert!((row[1] - 2.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_remaining_counts_drop_after_match() {
    let mut env = SheepEnv::new(EnvConfig::default()).unwrap();
    let found = (0..200u64).find_map(|seed| {
        env.reset_with_seed(seed);
        let stack: Vec<(usize, u8)> = env
            .deck()
            .iter()
            .filter(|(_, c)| c.area == Area::LeftStack || c.area == Area::RightStack)
            .map(|(i, c)| (i.index(), c.card_type))
            .collect();
        (1..=18u8).find_map(|t| {
            let picks: Vec<usize> = stack
                .iter()
                .filter(|(_, ct)| *ct == t)
                .map(|(i, _)| *i)
                .collect();
            (picks.len() >= 3).then(|| (t, picks[..3].to_vec()))
        })
    });
    let (card_type, picks) = found.unwrap();

    for a in picks {
        env.step(a).unwrap();
    }
    let global = env.observe().global.tensor;
    assert_eq!(global[5 + card_type as usize], 12.0);
    assert_eq!(global[0], 270.0);
    assert_eq!(global[1], 0.0);
}
