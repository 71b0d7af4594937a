// wave-runup/src/gp/mod.rs

pub use artifact::{GpArtifact, KernelParams, LengthScale};
pub use regressor::{GaussianProcess, GpPrediction};

pub mod artifact;
pub mod regressor;
