// wave-runup/src/models/mod.rs

pub use atkinson2017::Atkinson2017;
pub use beuzen2019::Beuzen2019;
pub use holman1986::Holman1986;
pub use kind::{ModelKind, Output};
pub use nielsen2009::Nielsen2009;
pub use passarella2018::Passarella2018;
pub use power2018::Power2018;
pub use ruggiero2001::Ruggiero2001;
pub use runup_model::RunupModel;
pub use senechal2011::Senechal2011;
pub use stockdon2006::{BeachRegime, Stockdon2006};
pub use traits::EmpiricalModel;
pub use vousdoukas2012::Vousdoukas2012;

pub mod atkinson2017;
pub mod beuzen2019;
pub mod holman1986;
pub mod kind;
pub mod nielsen2009;
pub mod passarella2018;
pub mod power2018;
pub mod ruggiero2001;
pub mod runup_model;
pub mod senechal2011;
pub mod stockdon2006;
pub mod traits;
pub mod vousdoukas2012;
