// wave-runup/src/models/ruggiero2001.rs
//
// Ruggiero, P., Komar, P.D., McDougal, W.G., Marra, J.J., Beach, R.A., 2001.
// Wave Runup, Extreme Water Levels and the Erosion of Properties Backing
// Beaches. Journal of Coastal Research 17, 407-419.

use super::kind::ModelKind;
use super::traits::EmpiricalModel;
use crate::errors::RunupError;
use crate::wave::{WaveCondition, WavePoint};
use ndarray::Array1;

#[derive(Clone, Copy, Debug, Default)]
pub struct Ruggiero2001;

impl Ruggiero2001 {
    /// R2 = 0.27 (beta Hs Lp)^0.5
    pub fn r2_point(w: &WavePoint) -> f64 {
        0.27 * (w.beta * w.hs * w.lp).sqrt()
    }
}

impl EmpiricalModel for Ruggiero2001 {
    fn kind(&self) -> ModelKind {
        ModelKind::Ruggiero2001
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
        assert_abs_diff_eq!(Ruggiero2001.r2(&wave).unwrap()[0], 2.35, epsilon = 0.01);
    }

    #[test]
    fn test_dissipative() {
        let wave = WaveCondition::new(4., 11., 0.001).unwrap();
        assert_abs_diff_eq!(Ruggiero2001.r2(&wave).unwrap()[0], 0.23, epsilon = 0.01);
    }

    #[test]
    fn test_flat_beach() {
        let wave = WaveCondition::new(4., 11., 0.).unwrap();
        assert_eq!(Ruggiero2001.r2(&wave).unwrap()[0], 0.);
    }
}
