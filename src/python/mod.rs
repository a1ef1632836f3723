//! Python bindings for the sheep environment.
//!
//! # Quick Start
//!
//! ```python
//! import sheep_env
//!
//! env = sheep_env.SheepEnv(seed=42)
//! obs = env.reset()
//! reward, done = env.step(env.legal_actions()[0])
//! print(obs["cards"].shape)  # (80, 80)
//!
//! reply = sheep_env.predict(env.export_nodes())
//! ```

use pyo3::prelude::*;

mod py_env;

pub use py_env::*;

/// sheep_env: a tile-matching puzzle environment for RL agents.
#[pymodule]
fn sheep_env(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySheepEnv>()?;
    m.add_function(wrap_pyfunction!(predict, m)?)?;
    Ok(())
}
