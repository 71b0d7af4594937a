// wave-runup/src/models/beuzen2019.rs
//
// Beuzen, T., Goldstein, E. B., & Splinter, K. D., 2019. Ensemble models from
// machine learning: an example of wave runup and coastal dune erosion.
// https://doi.org/10.5194/nhess-19-2295-2019

use super::kind::ModelKind;
use super::traits::EmpiricalModel;
use crate::constants::{GP_MODEL_DEFAULT_PATH, GP_MODEL_ENV};
use crate::errors::RunupError;
use crate::gp::{GaussianProcess, GpPrediction};
use crate::wave::WaveCondition;
use ndarray::Array1;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// R2 from a pre-trained Gaussian process over (Hs, Tp, beta).
///
/// The regressor is read from disk on first evaluation and kept for the
/// lifetime of this value. Use [`Beuzen2019::with_model`] to share one loaded
/// regressor between instances.
#[derive(Debug)]
pub struct Beuzen2019 {
    path: PathBuf,
    gp: OnceLock<Arc<GaussianProcess>>,
}

impl Default for Beuzen2019 {
    fn default() -> Self {
        Self::new()
    }
}

impl Beuzen2019 {
    /// Reads the artifact from `$WAVE_RUNUP_GP_MODEL`, falling back to
    /// `data/beuzen2019/gp_runup_model.json`.
    pub fn new() -> Self {
        Self::from_path(Self::default_path())
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Beuzen2019 {
            path: path.into(),
            gp: OnceLock::new(),
        }
    }

    pub fn with_model(gp: Arc<GaussianProcess>) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(gp);
        Beuzen2019 {
            path: PathBuf::new(),
            gp: cell,
        }
    }

    pub fn default_path() -> PathBuf {
        env::var_os(GP_MODEL_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(GP_MODEL_DEFAULT_PATH))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The loaded regressor, reading it on first call.
    pub fn model(&self) -> Result<Arc<GaussianProcess>, RunupError> {
        if let Some(gp) = self.gp.get() {
            return Ok(Arc::clone(gp));
        }
        let gp = Arc::new(GaussianProcess::from_path(&self.path)?);
        Ok(Arc::clone(self.gp.get_or_init(|| gp)))
    }

    pub fn predict(&self, wave: &WaveCondition) -> Result<GpPrediction, RunupError> {
        Ok(self.model()?.predict(wave.hs(), wave.tp(), wave.beta())?)
    }
}

impl EmpiricalModel for Beuzen2019 {
    fn kind(&self) -> ModelKind {
        ModelKind::Beuzen2019
    }
    fn r2(&self, wave: &WaveCondition) -> Result<Array1<f64>, RunupError> {
        Ok(self.predict(wave)?.mean)
    }
    fn r2_std(&self, wave: &WaveCondition) -> Option<Result<Array1<f64>, RunupError>> {
        Some(self.predict(wave).map(|prediction| prediction.std))
    }
}
