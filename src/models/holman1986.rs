// wave-runup/src/models/holman1986.rs
//
// Holman, R.A., 1986. Extreme value statistics for wave run-up on a natural
// beach. Coastal Engineering 9, 527-544.
// https://doi.org/10.1016/0378-3839(86)90002-5

use super::kind::ModelKind;
use super::traits::EmpiricalModel;
use crate::errors::RunupError;
use crate::wave::{WaveCondition, WavePoint};
use ndarray::Array1;

#[derive(Clone, Copy, Debug, Default)]
pub struct Holman1986;

impl Holman1986 {
    /// R2 = 0.83 tan(beta) (Hs Lp)^0.5 + 0.2 Hs
    pub fn r2_point(w: &WavePoint) -> f64 {
        0.83 * libm::tan(w.beta) * (w.hs * w.lp).sqrt() + 0.2 * w.hs
    }

    pub fn setup_point(w: &WavePoint) -> f64 {
        0.2 * w.hs
    }
}

impl EmpiricalModel for Holman1986 {
    fn kind(&self) -> ModelKind {
        ModelKind::Holman1986
    }
    fn r2(&self, wave: &WaveCondition) -> Result<Array1<f64>, RunupError> {
        Ok(wave.map(Self::r2_point))
    }
    fn setup(&self, wave: &WaveCondition) -> Result<Array1<f64>, RunupError> {
        Ok(wave.map(Self::setup_point))
    }
}
