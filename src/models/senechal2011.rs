// wave-runup/src/models/senechal2011.rs
//
// Senechal, N., Coco, G., Bryan, K.R., Holman, R.A., 2011. Wave runup during
// extreme storm conditions. Journal of Geophysical Research 116.
// https://doi.org/10.1029/2010JC006819

use super::kind::ModelKind;
use super::traits::EmpiricalModel;
use crate::errors::RunupError;
use crate::wave::{WaveCondition, WavePoint};
use ndarray::Array1;

#[derive(Clone, Copy, Debug, Default)]
pub struct Senechal2011;

impl Senechal2011 {
    /// R2 = 2.14 tanh(0.4 Hs). Independent of slope and period.
    pub fn r2_point(w: &WavePoint) -> f64 {
        2.14 * libm::tanh(0.4 * w.hs)
    }

    /// S_ig = 0.05 (Hs Lp)^0.5
    pub fn sig_point(w: &WavePoint) -> f64 {
        0.05 * (w.hs * w.lp).sqrt()
    }
}

impl EmpiricalModel for Senechal2011 {
    fn kind(&self) -> ModelKind {
        ModelKind::Senechal2011
    }
    fn r2(&self, wave: &WaveCondition) -> Result<Array1<f64>, RunupError> {
        Ok(wave.map(Self::r2_point))
    }
    fn sig(&self, wave: &WaveCondition) -> Result<Array1<f64>, RunupError> {
        Ok(wave.map(Self::sig_point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_slope_independent() {
        for beta in [0.1, 0.001] {
            let wave = WaveCondition::new(4., 11., beta).unwrap();
            assert_abs_diff_eq!(Senechal2011.r2(&wave).unwrap()[0], 1.97, epsilon = 0.01);
            assert_abs_diff_eq!(Senechal2011.sig(&wave).unwrap()[0], 1.37, epsilon = 0.01);
        }
    }

    #[test]
    fn test_saturates_for_large_waves() {
        let wave = WaveCondition::new(50., 11., 0.1).unwrap();
        assert_abs_diff_eq!(Senechal2011.r2(&wave).unwrap()[0], 2.14, epsilon = 1e-6);
    }
}
