// wave-runup/src/models/nielsen2009.rs
//
// P. Nielsen, Coastal and Estuarine Processes, Singapore, World Scientific, 2009.

use super::kind::ModelKind;
use super::traits::EmpiricalModel;
use crate::constants::NIELSEN_STEEP_SLOPE;
use crate::errors::RunupError;
use crate::wave::{WaveCondition, WavePoint};
use ndarray::Array1;

#[derive(Clone, Copy, Debug, Default)]
pub struct Nielsen2009;

impl Nielsen2009 {
    /// Runup length scale L_R. Hs and Lp stand in for Hrms and Ls.
    pub fn runup_scale(w: &WavePoint) -> f64 {
        let tan_beta = libm::tan(w.beta);
        if tan_beta < NIELSEN_STEEP_SLOPE {
            0.06 * (w.hs * w.lp).sqrt()
        } else {
            0.6 * tan_beta * (w.hs * w.lp).sqrt()
        }
    }

    /// R2 = 1.98 L_R, with the Z100 reference level taken as zero.
    pub fn r2_point(w: &WavePoint) -> f64 {
        1.98 * Self::runup_scale(w)
    }
}

impl EmpiricalModel for Nielsen2009 {
    fn kind(&self) -> ModelKind {
        ModelKind::Nielsen2009
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
        assert_abs_diff_eq!(Nielsen2009.r2(&wave).unwrap()[0], 3.27, epsilon = 0.01);
    }

    #[test]
    fn test_mild_slope_branch() {
        let wave = WaveCondition::new(4., 11., 0.001).unwrap();
        assert_abs_diff_eq!(Nielsen2009.r2(&wave).unwrap()[0], 3.266, epsilon = 0.001);
    }

    #[test]
    fn test_branch_is_per_element() {
        let wave = WaveCondition::builder()
            .hs(vec![1., 2.])
            .lp(vec![100., 200.])
            .beta(vec![0.05, 0.12])
            .build()
            .unwrap();
        let r2 = Nielsen2009.r2(&wave).unwrap();
        assert_abs_diff_eq!(r2[0], 1.188, epsilon = 1e-9);
        assert_abs_diff_eq!(r2[1], 2.865, epsilon = 0.001);
    }
}
