// wave-runup/src/wave/mod.rs

pub use condition::{WaveCondition, WaveConditionBuilder, WavePoint};
pub use param::{Estimate, Param, WaveParam};

pub mod condition;
pub mod dispersion;
pub mod param;
pub mod validation;
