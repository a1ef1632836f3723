//! Observation encoding for the learner.
//!
//! - `tensor`: flat row-major `EncodedState` buffers
//! - `encoder`: `ObservationEncoder`, projecting a `GameState` into the
//!   global vector, card matrix, queue vector and action mask
//!
//! ```
//! use sheep_env::core::{EnvConfig, GameState};
//! use sheep_env::nn::{EncoderConfig, ObservationEncoder};
//!
//! let encoder = ObservationEncoder::new(&EnvConfig::default(), EncoderConfig::default());
//! let obs = encoder.encode(&GameState::default());
//! assert_eq!(obs.global.len(), 24);
//! assert_eq!(obs.mask.len(), 80);
//! ```

pub mod encoder;
pub mod tensor;

pub use encoder::{EncoderConfig, Observation, ObservationEncoder};
pub use tensor::EncodedState;
