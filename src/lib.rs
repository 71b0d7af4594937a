use pretty_env_logger;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn _setup_pretty_env_logger_default() {
    INIT.call_once(|| {
        pretty_env_logger::init();
    });
}

pub use ensemble::{EnsembleOpts, EnsembleRaw, EnsembleResult, MissingOutputPolicy};
pub use errors::{
    AggregationError, ArtifactError, RunupError, UndefinedOutputError, ValidationError,
};
pub use models::{EmpiricalModel, ModelKind, Output, RunupModel};
pub use wave::{Estimate, Param, WaveCondition, WaveConditionBuilder, WaveParam};

pub mod constants;
pub mod ensemble;
pub mod errors;
pub mod gp;
pub mod models;
pub mod shoaling;
pub mod wave;
