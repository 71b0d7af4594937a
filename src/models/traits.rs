use super::kind::{ModelKind, Output};
use crate::errors::{RunupError, UndefinedOutputError};
use crate::wave::WaveCondition;
use ndarray::Array1;
use std::fmt;

/// Equation set of one published model.
///
/// Outputs a model does not define keep the default implementation, which
/// reports an [`UndefinedOutputError`]. Implementations are pure functions of
/// the wave condition (and, for the GP model, of its read-only artifact).
pub trait EmpiricalModel: fmt::Debug + Send + Sync {
    fn kind(&self) -> ModelKind;

    fn r2(&self, _wave: &WaveCondition) -> Result<Array1<f64>, RunupError> {
        Err(self.undefined(Output::R2))
    }
    fn setup(&self, _wave: &WaveCondition) -> Result<Array1<f64>, RunupError> {
        Err(self.undefined(Output::Setup))
    }
    fn sinc(&self, _wave: &WaveCondition) -> Result<Array1<f64>, RunupError> {
        Err(self.undefined(Output::Sinc))
    }
    fn sig(&self, _wave: &WaveCondition) -> Result<Array1<f64>, RunupError> {
        Err(self.undefined(Output::Sig))
    }
    fn swash(&self, _wave: &WaveCondition) -> Result<Array1<f64>, RunupError> {
        Err(self.undefined(Output::Swash))
    }

    /// Predictive standard deviation of R2. `None` for deterministic equations.
    fn r2_std(&self, _wave: &WaveCondition) -> Option<Result<Array1<f64>, RunupError>> {
        None
    }

    fn evaluate(&self, output: Output, wave: &WaveCondition) -> Result<Array1<f64>, RunupError> {
        match output {
            Output::R2 => self.r2(wave),
            Output::Setup => self.setup(wave),
            Output::Sinc => self.sinc(wave),
            Output::Sig => self.sig(wave),
            Output::Swash => self.swash(wave),
        }
    }

    fn undefined(&self, output: Output) -> RunupError {
        UndefinedOutputError {
            model: self.kind(),
            output,
        }
        .into()
    }
}
