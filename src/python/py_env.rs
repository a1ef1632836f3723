//! Environment bindings for Python.

use numpy::{PyArray1, PyArrayMethods};
use pyo3::exceptions::{PyLookupError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{EnvConfig, EnvError};
use crate::env::SheepEnv;
use crate::nn::{EncoderConfig, Observation};
use crate::protocol::{self, FirstClickable, ProtocolError};

fn env_err(err: EnvError) -> PyErr {
    match err {
        EnvError::Config(e) => PyValueError::new_err(e.to_string()),
        e @ EnvError::EpisodeFinished { .. } => PyRuntimeError::new_err(e.to_string()),
    }
}

fn protocol_err(err: ProtocolError) -> PyErr {
    match err {
        ProtocolError::NoClickable => PyLookupError::new_err(err.body()),
        ProtocolError::Malformed(_) => PyValueError::new_err(err.body()),
    }
}

fn observation_dict<'py>(py: Python<'py>, obs: Observation) -> PyResult<Bound<'py, PyDict>> {
    let [rows, width] = match obs.cards.shape[..] {
        [rows, width] => [rows, width],
        _ => return Err(PyValueError::new_err("card matrix must be 2-D")),
    };
    let cards = PyArray1::from_vec_bound(py, obs.cards.tensor)
        .reshape([rows, width])
        .map_err(|e| PyValueError::new_err(format!("{}", e)))?;

    let dict = PyDict::new_bound(py);
    dict.set_item("global", PyArray1::from_vec_bound(py, obs.global.tensor))?;
    dict.set_item("cards", cards)?;
    dict.set_item("queue", PyArray1::from_vec_bound(py, obs.queue.tensor))?;
    dict.set_item("mask", PyArray1::from_vec_bound(py, obs.mask))?;
    Ok(dict)
}

/// Python wrapper for SheepEnv.
///
/// Observations are dicts of numpy arrays: `global`, `cards` (2-D),
/// `queue` and `mask`.
#[pyclass(name = "SheepEnv")]
pub struct PySheepEnv(SheepEnv);

#[pymethods]
impl PySheepEnv {
    /// Create an environment.
    ///
    /// # Arguments
    /// - seed: RNG seed for deck generation
    /// - config_json: optional JSON config; missing fields take defaults
    /// - full_deck: widen the card matrix and mask to every card
    #[new]
    #[pyo3(signature = (seed = 42, config_json = None, full_deck = false))]
    fn new(seed: u64, config_json: Option<&str>, full_deck: bool) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => {
                EnvConfig::from_json(json).map_err(|e| PyValueError::new_err(e.to_string()))?
            }
            None => EnvConfig::default(),
        }
        .with_seed(seed);

        let encoder = if full_deck {
            EncoderConfig::full_deck(&config)
        } else {
            EncoderConfig::default()
        };
        SheepEnv::with_encoder(config, encoder).map(Self).map_err(env_err)
    }

    /// Deal a new game; a seed re-seeds the RNG first.
    #[pyo3(signature = (seed = None))]
    fn reset<'py>(&mut self, py: Python<'py>, seed: Option<u64>) -> PyResult<Bound<'py, PyDict>> {
        let obs = match seed {
            Some(seed) => self.0.reset_with_seed(seed),
            None => self.0.reset(),
        };
        observation_dict(py, obs)
    }

    /// Click a card. Returns `(reward, done)`.
    ///
    /// Negative indices are out of range, like any index past the deck.
    fn step(&mut self, action: i64) -> PyResult<(f32, bool)> {
        let action = usize::try_from(action).unwrap_or(usize::MAX);
        self.0.step(action).map(|o| o.into_pair()).map_err(env_err)
    }

    /// Current observation.
    fn observe<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        observation_dict(py, self.0.observe())
    }

    /// Indices of all clickable cards.
    fn legal_actions(&self) -> Vec<usize> {
        self.0.legal_actions()
    }

    /// Text dump of the table.
    fn render(&self) -> String {
        self.0.render()
    }

    /// The table as a JSON request body for `predict`.
    fn export_nodes(&self) -> PyResult<String> {
        let body = protocol::PredictRequest {
            nodes: self.0.export_nodes(),
        };
        serde_json::to_string(&body).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn done(&self) -> bool {
        self.0.is_done()
    }

    #[getter]
    fn status(&self) -> String {
        format!("{:?}", self.0.status())
    }

    #[getter]
    fn steps(&self) -> u32 {
        self.0.steps()
    }

    #[getter]
    fn queue_len(&self) -> usize {
        self.0.queue().len()
    }

    #[getter]
    fn deck_size(&self) -> usize {
        self.0.deck().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "SheepEnv(status={:?}, queue={}, steps={})",
            self.0.status(),
            self.0.queue().len(),
            self.0.steps()
        )
    }
}

/// Pick the first clickable node of a JSON request body.
///
/// Returns the JSON response. Raises `LookupError` when nothing can be
/// clicked and `ValueError` on a malformed body.
#[pyfunction]
pub fn predict(body: &str) -> PyResult<String> {
    protocol::predict_json(body, &mut FirstClickable).map_err(protocol_err)
}
