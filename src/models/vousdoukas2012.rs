// wave-runup/src/models/vousdoukas2012.rs
//
// Vousdoukas, M.I., Wziatek, D., Almeida, L.P., 2012. Coastal vulnerability
// assessment based on video wave run-up observations at a mesotidal,
// steep-sloped beach. Ocean Dynamics 62, 123-137.
// https://doi.org/10.1007/s10236-011-0480-x

use super::kind::ModelKind;
use super::traits::EmpiricalModel;
use crate::errors::RunupError;
use crate::wave::{WaveCondition, WavePoint};
use ndarray::Array1;

#[derive(Clone, Copy, Debug, Default)]
pub struct Vousdoukas2012;

impl Vousdoukas2012 {
    /// R2 = 0.53 beta (Hs Lp)^0.5 + 0.58 tan(beta) Hs + 0.45
    pub fn r2_point(w: &WavePoint) -> f64 {
        0.53 * w.beta * (w.hs * w.lp).sqrt() + 0.58 * libm::tan(w.beta) * w.hs + 0.45
    }
}

impl EmpiricalModel for Vousdoukas2012 {
    fn kind(&self) -> ModelKind {
        ModelKind::Vousdoukas2012
    }
    fn r2(&self, wave: &WaveCondition) -> Result<Array1<f64>, RunupError> {
        Ok(wave.map(Self::r2_point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reflective() {
        let wave = WaveCondition::new(4., 11., 0.1).unwrap();
        assert_abs_diff_eq!(Vousdoukas2012.r2(&wave).unwrap()[0], 2.14, epsilon = 0.01);
    }

    #[test]
    fn test_dissipative() {
        let wave = WaveCondition::new(4., 11., 0.001).unwrap();
        assert_abs_diff_eq!(Vousdoukas2012.r2(&wave).unwrap()[0], 0.47, epsilon = 0.01);
    }
}
