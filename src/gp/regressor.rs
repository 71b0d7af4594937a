// wave-runup/src/gp/regressor.rs

use super::artifact::GpArtifact;
use crate::constants::{GP_JITTER, PARALLEL_MIN_LEN};
use crate::errors::ArtifactError;
use humantime::format_duration;
use nalgebra::{DMatrix, DVector};
use ndarray::Array1;
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;

/// Predictive distribution of the GP at each queried condition.
#[derive(Clone, Debug, PartialEq)]
pub struct GpPrediction {
    pub mean: Array1<f64>,
    pub std: Array1<f64>,
}

/// Gaussian-process regressor with kernel
/// `signal_variance * RBF(length_scale) + WhiteKernel(noise_level)`,
/// conditioned on its training data once at construction.
#[derive(Clone, Debug)]
pub struct GaussianProcess {
    /// Training inputs, one row per point.
    x_train: Vec<Vec<f64>>,
    length_scale: Vec<f64>,
    signal_variance: f64,
    noise_level: f64,
    /// Lower Cholesky factor of the training covariance.
    l: DMatrix<f64>,
    alpha: DVector<f64>,
    y_mean: f64,
    y_std: f64,
}

impl GaussianProcess {
    pub fn from_path(path: &Path) -> Result<Self, ArtifactError> {
        let start = Instant::now();
        let gp = Self::fit(GpArtifact::load(path)?)?;
        log::info!(
            "Loaded GP runup model from {} ({} training points) in {}",
            path.display(),
            gp.n_train(),
            format_duration(start.elapsed())
        );
        Ok(gp)
    }

    pub fn fit(artifact: GpArtifact) -> Result<Self, ArtifactError> {
        artifact.check()?;
        let n = artifact.x_train.len();
        let y = DVector::from_vec(artifact.y_train);
        let (y_mean, y_std) = if artifact.normalize_y {
            let mean = y.mean();
            let std = y.variance().sqrt();
            (mean, if std == 0. { 1. } else { std })
        } else {
            (0., 1.)
        };
        let y = y.map(|v| (v - y_mean) / y_std);

        let mut gp = GaussianProcess {
            x_train: artifact.x_train,
            length_scale: artifact.kernel.length_scale.per_feature(),
            signal_variance: artifact.kernel.signal_variance,
            noise_level: artifact.kernel.noise_level,
            l: DMatrix::zeros(0, 0),
            alpha: DVector::zeros(0),
            y_mean,
            y_std,
        };

        let mut k = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in 0..=i {
                let kij = gp.rbf(&gp.x_train[i], &gp.x_train[j]);
                k[(i, j)] = kij;
                k[(j, i)] = kij;
            }
            k[(i, i)] += gp.noise_level + GP_JITTER;
        }
        let cholesky = k.cholesky().ok_or(ArtifactError::NotPositiveDefinite)?;
        gp.alpha = cholesky.solve(&y);
        gp.l = cholesky.l();
        Ok(gp)
    }

    pub fn n_train(&self) -> usize {
        self.x_train.len()
    }

    fn rbf(&self, a: &[f64], b: &[f64]) -> f64 {
        let sq_dist: f64 = a
            .iter()
            .zip(b)
            .zip(&self.length_scale)
            .map(|((ai, bi), l)| ((ai - bi) / l).powi(2))
            .sum();
        self.signal_variance * (-0.5 * sq_dist).exp()
    }

    fn predict_point(&self, x: &[f64]) -> Result<(f64, f64), ArtifactError> {
        let k_star = DVector::from_iterator(
            self.n_train(),
            self.x_train.iter().map(|row| self.rbf(x, row)),
        );
        let mean = k_star.dot(&self.alpha);
        let v = self
            .l
            .solve_lower_triangular(&k_star)
            .ok_or(ArtifactError::NotPositiveDefinite)?;
        let variance = (self.signal_variance + self.noise_level - v.norm_squared()).max(0.);
        Ok((
            mean * self.y_std + self.y_mean,
            variance.sqrt() * self.y_std,
        ))
    }

    /// Predictive mean and standard deviation at each row of the feature
    /// columns (Hs, Tp, beta), which must share one length.
    pub fn predict(
        &self,
        hs: &Array1<f64>,
        tp: &Array1<f64>,
        beta: &Array1<f64>,
    ) -> Result<GpPrediction, ArtifactError> {
        let n = hs.len();
        if tp.len() != n || beta.len() != n {
            return Err(ArtifactError::Incompatible(format!(
                "feature columns have lengths {}, {} and {}",
                n,
                tp.len(),
                beta.len()
            )));
        }
        let point = |i: usize| self.predict_point(&[hs[i], tp[i], beta[i]]);
        let predictions: Vec<(f64, f64)> = if n >= PARALLEL_MIN_LEN {
            (0..n).into_par_iter().map(point).collect::<Result<_, _>>()?
        } else {
            (0..n).map(point).collect::<Result<_, _>>()?
        };
        let (mean, std): (Vec<f64>, Vec<f64>) = predictions.into_iter().unzip();
        Ok(GpPrediction {
            mean: Array1::from_vec(mean),
            std: Array1::from_vec(std),
        })
    }
}
