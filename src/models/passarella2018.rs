// wave-runup/src/models/passarella2018.rs
//
// Passarella, M., E. B. Goldstein, S. De Muro, G. Coco, 2018. The use of
// genetic programming to develop a predictor of swash excursion on sandy
// beaches. Nat. Hazards Earth Syst. Sci., 18, 599-611.
// https://doi.org/10.5194/nhess-18-599-2018

use super::kind::ModelKind;
use super::traits::EmpiricalModel;
use crate::errors::RunupError;
use crate::wave::{WaveCondition, WavePoint};
use ndarray::Array1;

/// Swash-only model. R2 is not defined.
#[derive(Clone, Copy, Debug, Default)]
pub struct Passarella2018;

impl Passarella2018 {
    /// Eqn (14)
    pub fn sig_point(w: &WavePoint) -> f64 {
        (w.beta / (0.028 + w.beta))
            + (-1. / ((2412.255 * w.beta) - (5.521 * w.beta * w.lp)))
            + ((w.hs - 0.711) / (0.465 + (173.470 * (w.hs / w.lp))))
    }

    /// Eqn (12)
    pub fn swash_point(w: &WavePoint) -> f64 {
        let hs3 = w.hs.powi(3);
        (146.737 * w.beta.powi(2)) + ((w.tp * hs3) / (5.800 + (10.595 * hs3)))
            - 4397.838 * w.beta.powi(4)
    }
}

impl EmpiricalModel for Passarella2018 {
    fn kind(&self) -> ModelKind {
        ModelKind::Passarella2018
    }
    fn sig(&self, wave: &WaveCondition) -> Result<Array1<f64>, RunupError> {
        Ok(wave.map(Self::sig_point))
    }
    fn swash(&self, wave: &WaveCondition) -> Result<Array1<f64>, RunupError> {
        Ok(wave.map(Self::swash_point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Output;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reflective() {
        let wave = WaveCondition::new(4., 11., 0.1).unwrap();
        assert_abs_diff_eq!(
            Passarella2018.sig(&wave).unwrap()[0],
            1.5687930560916425,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(Passarella2018.swash(&wave).unwrap()[0], 2.05, epsilon = 0.01);
    }

    #[test]
    fn test_dissipative() {
        let wave = WaveCondition::new(4., 11., 0.001).unwrap();
        assert_abs_diff_eq!(Passarella2018.sig(&wave).unwrap()[0], 0.10, epsilon = 0.01);
        assert_abs_diff_eq!(Passarella2018.swash(&wave).unwrap()[0], 1.02, epsilon = 0.01);
    }

    #[test]
    fn test_r2_is_undefined() {
        let wave = WaveCondition::new(4., 11., 0.1).unwrap();
        match Passarella2018.r2(&wave) {
            Err(RunupError::UndefinedOutput(e)) => {
                assert_eq!(e.model, ModelKind::Passarella2018);
                assert_eq!(e.output, Output::R2);
            }
            other => panic!("expected undefined output, got {other:?}"),
        }
    }
}
