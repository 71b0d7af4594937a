// wave-runup/src/gp/artifact.rs

use crate::constants::{GP_FEATURES, GP_FORMAT_VERSION};
use crate::errors::ArtifactError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// RBF length scale, either shared by every feature or one per feature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LengthScale {
    Isotropic(f64),
    Anisotropic(Vec<f64>),
}

impl LengthScale {
    pub fn per_feature(&self) -> Vec<f64> {
        match self {
            Self::Isotropic(l) => vec![*l; GP_FEATURES.len()],
            Self::Anisotropic(ls) => ls.clone(),
        }
    }
}

/// Hyperparameters of `signal_variance * RBF(length_scale) + WhiteKernel(noise_level)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KernelParams {
    pub length_scale: LengthScale,
    pub signal_variance: f64,
    pub noise_level: f64,
}

/// On-disk form of a fitted Gaussian process.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GpArtifact {
    pub format_version: u32,
    pub features: Vec<String>,
    pub kernel: KernelParams,
    #[serde(default)]
    pub normalize_y: bool,
    pub x_train: Vec<Vec<f64>>,
    pub y_train: Vec<f64>,
}

impl GpArtifact {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ArtifactError::Missing(path.to_path_buf()),
            _ => ArtifactError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let artifact: GpArtifact =
            serde_json::from_str(&contents).map_err(|source| ArtifactError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        artifact.check()?;
        Ok(artifact)
    }

    /// Rejects artifacts whose version, feature layout or hyperparameters this
    /// crate cannot evaluate.
    pub fn check(&self) -> Result<(), ArtifactError> {
        if self.format_version != GP_FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedVersion {
                found: self.format_version,
                expected: GP_FORMAT_VERSION,
            });
        }
        if self.features != GP_FEATURES {
            return Err(ArtifactError::Incompatible(format!(
                "features must be {:?}, got {:?}",
                GP_FEATURES, self.features
            )));
        }
        if self.x_train.is_empty() {
            return Err(ArtifactError::Incompatible(
                "x_train has no rows".to_string(),
            ));
        }
        if let Some((i, row)) = self
            .x_train
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != GP_FEATURES.len())
        {
            return Err(ArtifactError::Incompatible(format!(
                "x_train row {} has {} columns, expected {}",
                i,
                row.len(),
                GP_FEATURES.len()
            )));
        }
        if self.y_train.len() != self.x_train.len() {
            return Err(ArtifactError::Incompatible(format!(
                "y_train has {} values but x_train has {} rows",
                self.y_train.len(),
                self.x_train.len()
            )));
        }
        if !self
            .x_train
            .iter()
            .flatten()
            .chain(self.y_train.iter())
            .all(|v| v.is_finite())
        {
            return Err(ArtifactError::Incompatible(
                "training data contains non-finite values".to_string(),
            ));
        }
        let length_scale = self.kernel.length_scale.per_feature();
        if length_scale.len() != GP_FEATURES.len() {
            return Err(ArtifactError::Incompatible(format!(
                "expected {} length scales, got {}",
                GP_FEATURES.len(),
                length_scale.len()
            )));
        }
        if !length_scale.iter().all(|l| l.is_finite() && *l > 0.) {
            return Err(ArtifactError::Incompatible(
                "length scales must be positive".to_string(),
            ));
        }
        if !(self.kernel.signal_variance.is_finite() && self.kernel.signal_variance > 0.) {
            return Err(ArtifactError::Incompatible(
                "signal_variance must be positive".to_string(),
            ));
        }
        if !(self.kernel.noise_level.is_finite() && self.kernel.noise_level >= 0.) {
            return Err(ArtifactError::Incompatible(
                "noise_level must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    /// Two well separated training points, y = 1 and y = 3.
    pub(crate) fn two_point_artifact() -> GpArtifact {
        GpArtifact {
            format_version: GP_FORMAT_VERSION,
            features: GP_FEATURES.iter().map(|f| f.to_string()).collect(),
            kernel: KernelParams {
                length_scale: LengthScale::Isotropic(1.),
                signal_variance: 1.,
                noise_level: 1e-5,
            },
            normalize_y: true,
            x_train: vec![vec![1., 5., 0.05], vec![10., 50., 0.9]],
            y_train: vec![1., 3.],
        }
    }

    pub(crate) fn write_artifact(dir: &Path, artifact: &GpArtifact) -> PathBuf {
        let path = dir.join("gp_runup_model.json");
        fs::write(&path, serde_json::to_string_pretty(artifact).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_load() {
        let dir = tempdir().unwrap();
        let path = write_artifact(dir.path(), &two_point_artifact());
        assert_eq!(GpArtifact::load(&path).unwrap(), two_point_artifact());
    }

    #[test]
    fn test_anisotropic_length_scale() {
        let json = r#"{
            "format_version": 1,
            "features": ["Hs", "Tp", "beta"],
            "kernel": {"length_scale": [1.0, 2.0, 0.5], "signal_variance": 2.0, "noise_level": 0.1},
            "x_train": [[1.0, 8.0, 0.1]],
            "y_train": [1.5]
        }"#;
        let artifact: GpArtifact = serde_json::from_str(json).unwrap();
        assert!(!artifact.normalize_y);
        assert_eq!(artifact.kernel.length_scale.per_feature(), vec![1., 2., 0.5]);
        artifact.check().unwrap();
    }

    #[test]
    fn test_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(
            GpArtifact::load(&path),
            Err(ArtifactError::Missing(p)) if p == path
        ));
    }

    #[test]
    fn test_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gp_runup_model.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            GpArtifact::load(&path),
            Err(ArtifactError::Parse { .. })
        ));
    }

    #[test]
    fn test_unsupported_version() {
        let dir = tempdir().unwrap();
        let mut artifact = two_point_artifact();
        artifact.format_version = 7;
        let path = write_artifact(dir.path(), &artifact);
        assert!(matches!(
            GpArtifact::load(&path),
            Err(ArtifactError::UnsupportedVersion {
                found: 7,
                expected: 1
            })
        ));
    }

    #[test]
    fn test_incompatible_shape() {
        let mut artifact = two_point_artifact();
        artifact.x_train[1].pop();
        assert!(matches!(artifact.check(), Err(ArtifactError::Incompatible(_))));

        let mut artifact = two_point_artifact();
        artifact.y_train.push(2.);
        assert!(matches!(artifact.check(), Err(ArtifactError::Incompatible(_))));

        let mut artifact = two_point_artifact();
        artifact.features.reverse();
        assert!(matches!(artifact.check(), Err(ArtifactError::Incompatible(_))));

        let mut artifact = two_point_artifact();
        artifact.kernel.length_scale = LengthScale::Anisotropic(vec![1., 1.]);
        assert!(matches!(artifact.check(), Err(ArtifactError::Incompatible(_))));
    }
}
