//! The episode controller.
//!
//! `SheepEnv` owns one game: the deck, the selection queue and the RNG that
//! deals new decks. It drives the step/reset state machine
//!
//! ```text
//! InProgress --(last card eliminated)--> Won
//! InProgress --(queue reaches capacity)--> Lost
//! Won | Lost --reset()--> InProgress
//! ```
//!
//! and hands out observations through the `ObservationEncoder`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::{update_coverage, CardGraphGenerator};
use crate::core::{CardIdx, Deck, EnvConfig, EnvError, GameRng, GameRngState, GameState, GameStatus};
use crate::nn::{EncoderConfig, Observation, ObservationEncoder};
use crate::protocol::NodeView;
use crate::rules::{select, StepKind};

/// Result of one `step`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Shaped reward, terminal bonus or penalty included.
    pub reward: f32,
    /// True once the episode is over.
    pub done: bool,
    pub status: GameStatus,
    pub kind: StepKind,
}

impl StepOutcome {
    /// The `(reward, done)` pair agents consume.
    #[must_use]
    pub fn into_pair(self) -> (f32, bool) {
        (self.reward, self.done)
    }
}

/// Single-player tile-matching environment.
#[derive(Clone, Debug)]
pub struct SheepEnv {
    config: EnvConfig,
    generator: CardGraphGenerator,
    encoder: ObservationEncoder,
    rng: GameRng,
    state: GameState,
}

impl SheepEnv {
    /// Create an environment and deal the first game.
    pub fn new(config: EnvConfig) -> Result<Self, EnvError> {
        Self::with_encoder(config, EncoderConfig::default())
    }

    /// Create an environment with a custom observation window.
    pub fn with_encoder(config: EnvConfig, encoder: EncoderConfig) -> Result<Self, EnvError> {
        let rng = GameRng::new(config.seed);
        let mut env = Self::build(config, encoder, rng, GameState::default())?;
        env.reset();
        Ok(env)
    }

    /// Start an episode on an explicit layout.
    ///
    /// The deck is used as given apart from a coverage pass. A later
    /// `reset` deals a generated deck as usual.
    pub fn from_deck(config: EnvConfig, deck: Deck) -> Result<Self, EnvError> {
        let rng = GameRng::new(config.seed);
        let mut state = GameState::new(deck);
        update_coverage(&mut state.deck);
        Self::build(config, EncoderConfig::default(), rng, state)
    }

    fn build(
        config: EnvConfig,
        encoder: EncoderConfig,
        rng: GameRng,
        state: GameState,
    ) -> Result<Self, EnvError> {
        let generator = CardGraphGenerator::new(&config)?;
        let encoder = ObservationEncoder::new(&config, encoder);
        Ok(Self {
            config,
            generator,
            encoder,
            rng,
            state,
        })
    }

    /// Deal a fresh game, continuing the RNG stream.
    pub fn reset(&mut self) -> Observation {
        let mut deck = self.generator.generate(&mut self.rng);
        update_coverage(&mut deck);
        self.state = GameState::new(deck);

        debug!(
            seed = self.rng.seed(),
            layers = self.state.deck.layer_count(),
            clickable = self.state.deck.clickable().len(),
            "reset"
        );
        self.observe()
    }

    /// Re-seed the RNG and deal a fresh game.
    pub fn reset_with_seed(&mut self, seed: u64) -> Observation {
        self.rng = GameRng::new(seed);
        self.reset()
    }

    /// Click the card at `action`.
    ///
    /// Bad indices, covered cards and a full queue are answered with a
    /// negative reward and leave the game untouched. Fails only when the
    /// episode has already ended.
    pub fn step(&mut self, action: usize) -> Result<StepOutcome, EnvError> {
        let status = self.state.status;
        if status.is_terminal() {
            warn!(?status, action, "step after episode end");
            return Err(EnvError::EpisodeFinished { status });
        }

        self.state.steps += 1;
        let kind = if action < self.state.deck.len() {
            select(&mut self.state, CardIdx::from(action), self.config.queue_capacity)
        } else {
            StepKind::InvalidIndex
        };

        let rewards = &self.config.rewards;
        let mut reward = kind.reward(rewards);

        if matches!(kind, StepKind::Inserted | StepKind::Matched | StepKind::QueueFull) {
            update_coverage(&mut self.state.deck);

            if self.state.deck.all_eliminated() {
                reward += rewards.win_bonus;
                self.finish(GameStatus::Won);
            } else if self.state.queue.len() >= self.config.queue_capacity {
                reward -= rewards.lose_penalty;
                self.finish(GameStatus::Lost);
            }
        }

        Ok(StepOutcome {
            reward,
            done: self.state.status.is_terminal(),
            status: self.state.status,
            kind,
        })
    }

    fn finish(&mut self, status: GameStatus) {
        self.state.status = status;
        debug!(?status, steps = self.state.steps, "episode finished");
    }

    /// Encode the current state. Never mutates.
    #[must_use]
    pub fn observe(&self) -> Observation {
        self.encoder.encode(&self.state)
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    #[must_use]
    pub fn encoder(&self) -> &ObservationEncoder {
        &self.encoder
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state.status.is_terminal()
    }

    /// Selection queue, in order.
    #[must_use]
    pub fn queue(&self) -> &[CardIdx] {
        &self.state.queue
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.state.deck
    }

    /// Actions taken this episode, rejected ones included.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.state.steps
    }

    /// Every clickable card index over the full deck.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<usize> {
        self.state.deck.clickable().into_iter().map(CardIdx::index).collect()
    }

    /// RNG position, for replaying the next deal.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Resume dealing from a saved RNG position.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    /// The table as collaborator nodes, in deck order.
    #[must_use]
    pub fn export_nodes(&self) -> Vec<NodeView> {
        self.state.deck.cards().iter().map(NodeView::from).collect()
    }
}
