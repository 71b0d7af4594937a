// wave-runup/src/models/atkinson2017.rs
//
// Atkinson, A.L., Power, H.E., Moura, T., Hammond, T., Callaghan, D.P.,
// Baldock, T.E., 2017. Assessment of runup predictions by empirical models on
// non-truncated beaches on the south-east Australian coast. Coastal
// Engineering 119, 15-31. https://doi.org/10.1016/j.coastaleng.2016.10.001

use super::kind::ModelKind;
use super::traits::EmpiricalModel;
use crate::errors::RunupError;
use crate::wave::{WaveCondition, WavePoint};
use ndarray::Array1;

#[derive(Clone, Copy, Debug, Default)]
pub struct Atkinson2017;

impl Atkinson2017 {
    /// R2 = 0.92 tan(beta) (Hs Lp)^0.5 + 0.16 Hs
    pub fn r2_point(w: &WavePoint) -> f64 {
        0.92 * libm::tan(w.beta) * (w.hs * w.lp).sqrt() + 0.16 * w.hs
    }
}

impl EmpiricalModel for Atkinson2017 {
    fn kind(&self) -> ModelKind {
        ModelKind::Atkinson2017
    }
    fn r2(&self, wave: &WaveCondition) -> Result<Array1<f64>, RunupError> {
        Ok(wave.map(Self::r2_point))
    }
}
