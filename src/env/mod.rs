//! The agent-facing environment.
//!
//! ```
//! use sheep_env::{EnvConfig, SheepEnv};
//!
//! let mut env = SheepEnv::new(EnvConfig::default()).unwrap();
//! let obs = env.reset();
//! let action = env.legal_actions()[0];
//! let (reward, done) = env.step(action).unwrap().into_pair();
//! assert!(reward > 0.0);
//! assert!(!done);
//! assert!(obs.valid_actions() >= 30);
//! ```

mod controller;
mod render;

pub use controller::{SheepEnv, StepOutcome};
