// wave-runup/src/models/power2018.rs
//
// Power, H.E., Gharabaghi, B., Bonakdari, H., Robertson, B., Atkinson, A.L.,
// Baldock, T.E., 2018. Prediction of wave runup on beaches using
// Gene-Expression Programming and empirical relationships. Coastal Engineering.
// https://doi.org/10.1016/j.coastaleng.2018.10.006

use super::kind::ModelKind;
use super::traits::EmpiricalModel;
use crate::errors::{RunupError, ValidationError};
use crate::wave::condition::from_index_fn;
use crate::wave::{Param, WaveCondition, WavePoint};
use ndarray::Array1;
use std::f64::consts::LN_2;

#[derive(Clone, Copy, Debug, Default)]
pub struct Power2018;

impl Power2018 {
    /// Gene-expression-programming fit in the dimensionless groups of Eqn (9):
    /// x1 = Hs / Lp, x2 = beta, x3 = r / Hs.
    fn r2_point(w: &WavePoint, r: f64) -> f64 {
        let x1 = w.hs / w.lp;
        let x2 = w.beta;
        let x3 = r / w.hs;
        let third = 1. / 3.;
        let logistic = |x: f64| 1. / (1. + (-x).exp());
        let steepness_term = (2. * (((x3 / x2) - x2) + x1)).powi(2);

        let terms = [
            x2 + (((x3 * 3.) / (-5f64).exp()) * ((3. * x3) * x3)),
            (((x1 + x3) - 2.) - (x3 - x2)) + ((x2 - x1) - x3),
            ((x3.powf(x1)) - (x3.powf(third))) - (x2.exp().powf(x1 * 3.)),
            (((x3 + x1) - x2) - (x2 + x3.log10())).sqrt(),
            (((x2.powi(2)) / (x1.powf(third))).powf(x1.powf(third))) - x3.sqrt(),
            (x2 + ((x3 / x1).powf(third))) + (LN_2 - logistic(x2 + x3)),
            (x3.sqrt() - (12. * x2.powi(2))).powi(2),
            (((x3 * -5.).powi(2)).powi(2)) + (((x3 + x3) * x1) / (x2.powi(2))),
            ((x2.powi(2) + x3.powf(third)).sqrt() + (x2 + 3.).powf(third)).ln(),
            (((x1 / x3) * -25.) * x3.powi(2)) - logistic(x2 + x3).log10(),
            x1.powf(x3),
            (-(((x3 / x1).powf(4f64.exp()) + x3.exp().powi(3)).powi(2))).exp(),
            ((x2 - x3).ln() - (-((-1. + x1).powi(2))).exp().ln()).exp(),
            steepness_term,
            2. * ((((-5. * x3) + x1) * (2. - x3)) - 2.),
            steepness_term,
            (((-5. + x1) - x2) * (x2 - x3)) * ((x1 - x2) + 4f64.powi(-5)),
            (-((x2 + (-5. - x1)).powi(2))).exp() + ((x2 + 5.) * x3.powi(2)),
            logistic((x1.exp() - (-((x3 + x3).powi(2))).exp()) + (x1.powf(x3) - (x3 * 4.))).sqrt(),
            (-((((-(((x3.sqrt() * 4.) + logistic(x2 + 2.)).powi(2))).exp()).powi(2) + x1).powi(2)))
                .exp()
                .powi(3),
        ];
        w.hs * terms.iter().sum::<f64>()
    }
}

impl EmpiricalModel for Power2018 {
    fn kind(&self) -> ModelKind {
        ModelKind::Power2018
    }
    fn r2(&self, wave: &WaveCondition) -> Result<Array1<f64>, RunupError> {
        let r = wave.r().ok_or(ValidationError::MissingForModel {
            model: self.kind(),
            param: Param::R,
        })?;
        Ok(from_index_fn(wave.len(), |i| {
            Self::r2_point(&wave.point(i), r[i])
        }))
    }
}
