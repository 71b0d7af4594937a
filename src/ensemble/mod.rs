// wave-runup/src/ensemble/mod.rs

pub use opts::{EnsembleOpts, EnsembleOptsBuilder, EnsembleOptsBuilderError, MissingOutputPolicy};
pub use raw::{EnsembleRaw, EnsembleResult};

pub mod opts;
pub mod raw;
pub mod stats;
