// wave-runup/src/errors.rs

use crate::ensemble::EnsembleOptsBuilderError;
use crate::models::{ModelKind, Output};
use crate::shoaling::ShoalingError;
use crate::wave::Param;
use ndarray_stats::errors::QuantileError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(Param),
    #[error("Expected either Lp or Tp to be given")]
    MissingPeriodOrWavelength,
    #[error("{0} was given as an empty array")]
    EmptyParameter(Param),
    #[error("{param} must be a finite number, but got {value} at index {index}")]
    NonFinite {
        param: Param,
        index: usize,
        value: f64,
    },
    #[error("{param} must be > 0, but got {value} at index {index}")]
    NonPositive {
        param: Param,
        index: usize,
        value: f64,
    },
    #[error("{param} must be in [{min}, {max}], but got {value} at index {index}")]
    OutOfRange {
        param: Param,
        index: usize,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{param} has length {len} which does not broadcast against length {expected}")]
    ShapeMismatch {
        param: Param,
        len: usize,
        expected: usize,
    },
    #[error("{model} requires parameter {param}")]
    MissingForModel { model: ModelKind, param: Param },
}

impl ValidationError {
    /// The parameter that failed validation, if the failure concerns exactly one.
    pub fn parameter(&self) -> Option<Param> {
        match self {
            Self::MissingParameter(param) | Self::EmptyParameter(param) => Some(*param),
            Self::NonFinite { param, .. }
            | Self::NonPositive { param, .. }
            | Self::OutOfRange { param, .. }
            | Self::ShapeMismatch { param, .. }
            | Self::MissingForModel { param, .. } => Some(*param),
            Self::MissingPeriodOrWavelength => None,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{model} does not define output {output}")]
pub struct UndefinedOutputError {
    pub model: ModelKind,
    pub output: Output,
}

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("GP runup model artifact not found at {0}")]
    Missing(PathBuf),
    #[error("Could not read GP runup model artifact at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse GP runup model artifact at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported GP artifact format_version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("Incompatible GP artifact: {0}")]
    Incompatible(String),
    #[error("GP training covariance is not positive definite")]
    NotPositiveDefinite,
}

#[derive(Error, Debug)]
pub enum AggregationError {
    #[error("Ensemble has no member models")]
    NoMembers,
    #[error("No ensemble member produced output {0}")]
    NoEstimates(Output),
    #[error("Ensemble already has a member named {0}")]
    DuplicateMember(String),
    #[error("{model} was evaluated on {len} conditions, but the ensemble has {expected}")]
    MismatchedLengths {
        model: ModelKind,
        len: usize,
        expected: usize,
    },
    #[error("{model} was evaluated on different wave conditions than the rest of the ensemble")]
    MismatchedConditions { model: ModelKind },
    #[error(transparent)]
    UndefinedOutput(UndefinedOutputError),
    #[error(transparent)]
    InvalidOptions(#[from] EnsembleOptsBuilderError),
    #[error(transparent)]
    Quantile(#[from] QuantileError),
}

#[derive(Error, Debug)]
pub enum RunupError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    UndefinedOutput(#[from] UndefinedOutputError),
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
    #[error(transparent)]
    Shoaling(#[from] ShoalingError),
    #[error("Unknown output {0:?}, expected one of R2, setup, sinc, sig or swash")]
    UnknownOutput(String),
}
