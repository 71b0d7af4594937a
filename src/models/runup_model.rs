// wave-runup/src/models/runup_model.rs

use super::kind::{ModelKind, Output};
use super::traits::EmpiricalModel;
use super::{
    Atkinson2017, Beuzen2019, Holman1986, Nielsen2009, Passarella2018, Power2018, Ruggiero2001,
    Senechal2011, Stockdon2006, Vousdoukas2012,
};
use crate::errors::{RunupError, ValidationError};
use crate::wave::{Estimate, WaveCondition};
use ndarray::Array1;
use std::sync::OnceLock;

impl ModelKind {
    /// The equation set of this variant. Beuzen2019 reads its artifact from
    /// the default location.
    pub fn formula(&self) -> Box<dyn EmpiricalModel> {
        match self {
            Self::Stockdon2006 => Box::new(Stockdon2006),
            Self::Power2018 => Box::new(Power2018),
            Self::Holman1986 => Box::new(Holman1986),
            Self::Nielsen2009 => Box::new(Nielsen2009),
            Self::Ruggiero2001 => Box::new(Ruggiero2001),
            Self::Vousdoukas2012 => Box::new(Vousdoukas2012),
            Self::Atkinson2017 => Box::new(Atkinson2017),
            Self::Senechal2011 => Box::new(Senechal2011),
            Self::Beuzen2019 => Box::new(Beuzen2019::new()),
            Self::Passarella2018 => Box::new(Passarella2018),
        }
    }
}

/// One model variant bound to one wave condition.
///
/// Each output is computed on first access and cached; the condition is
/// immutable so the cache is never invalidated.
#[derive(Debug)]
pub struct RunupModel {
    formula: Box<dyn EmpiricalModel>,
    wave: WaveCondition,
    cache: [OnceLock<Array1<f64>>; 5],
    r2_std: OnceLock<Option<Array1<f64>>>,
}

impl RunupModel {
    pub fn new(kind: ModelKind, wave: WaveCondition) -> Result<Self, ValidationError> {
        Self::from_formula(kind.formula(), wave)
    }

    /// Binds an explicit equation set, e.g. a [`Beuzen2019`] holding a shared
    /// regressor.
    pub fn from_formula(
        formula: Box<dyn EmpiricalModel>,
        wave: WaveCondition,
    ) -> Result<Self, ValidationError> {
        let kind = formula.kind();
        if let Some(param) = kind
            .required_inputs()
            .iter()
            .find(|param| !wave.has(**param))
        {
            return Err(ValidationError::MissingForModel {
                model: kind,
                param: *param,
            });
        }
        Ok(RunupModel {
            formula,
            wave,
            cache: Default::default(),
            r2_std: OnceLock::new(),
        })
    }

    pub fn kind(&self) -> ModelKind {
        self.formula.kind()
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn wave(&self) -> &WaveCondition {
        &self.wave
    }

    pub fn len(&self) -> usize {
        self.wave.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wave.is_empty()
    }

    /// Raw values of `output`, one per wave condition.
    pub fn values(&self, output: Output) -> Result<&Array1<f64>, RunupError> {
        let cell = &self.cache[output.index()];
        if let Some(values) = cell.get() {
            return Ok(values);
        }
        if !self.kind().defines(output) {
            return Err(self.formula.undefined(output));
        }
        log::debug!(
            "Evaluating {} {} over {} condition(s)",
            self.name(),
            output,
            self.len()
        );
        let values = self.formula.evaluate(output, &self.wave)?;
        Ok(cell.get_or_init(|| values))
    }

    pub fn get(&self, output: Output) -> Result<Estimate, RunupError> {
        Ok(self.wave.estimate(self.values(output)?.clone()))
    }

    pub fn r2(&self) -> Result<Estimate, RunupError> {
        self.get(Output::R2)
    }

    pub fn setup(&self) -> Result<Estimate, RunupError> {
        self.get(Output::Setup)
    }

    pub fn sinc(&self) -> Result<Estimate, RunupError> {
        self.get(Output::Sinc)
    }

    pub fn sig(&self) -> Result<Estimate, RunupError> {
        self.get(Output::Sig)
    }

    pub fn swash(&self) -> Result<Estimate, RunupError> {
        self.get(Output::Swash)
    }

    /// Predictive standard deviation of R2, for probabilistic variants only.
    pub fn r2_std(&self) -> Result<Option<Estimate>, RunupError> {
        let values = match self.r2_std.get() {
            Some(values) => values,
            None => {
                let values = self.formula.r2_std(&self.wave).transpose()?;
                self.r2_std.get_or_init(|| values)
            }
        };
        Ok(values
            .as_ref()
            .map(|values| self.wave.estimate(values.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::UndefinedOutputError;
    use crate::wave::Param;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_scalar_inputs_give_scalar_outputs() {
        let wave = WaveCondition::new(4., 11., 0.1).unwrap();
        let model = RunupModel::new(ModelKind::Stockdon2006, wave).unwrap();
        let r2 = model.r2().unwrap().as_scalar().unwrap();
        assert_abs_diff_eq!(r2, 2.54, epsilon = 0.01);
        assert!(model.setup().unwrap().is_scalar());
        assert_eq!(model.name(), "Stockdon2006");
    }

    #[test]
    fn test_memoized_access_is_bit_identical() {
        let wave = WaveCondition::new(vec![1., 2., 4.], 11., 0.07).unwrap();
        let model = RunupModel::new(ModelKind::Stockdon2006, wave).unwrap();
        for output in Output::ALL {
            let first = model.get(output).unwrap();
            let second = model.get(output).unwrap();
            assert_eq!(first, second);
            assert!(std::ptr::eq(
                model.values(output).unwrap(),
                model.values(output).unwrap()
            ));
        }
    }

    #[test]
    fn test_broadcasting_law() {
        let hs = [0.5, 1., 2., 4., 8.];
        let wave = WaveCondition::new(hs.to_vec(), 11., 0.1).unwrap();
        for kind in ModelKind::CLOSED_FORM {
            if kind == ModelKind::Power2018 {
                continue;
            }
            let model = RunupModel::new(kind, wave.clone()).unwrap();
            for &output in kind.outputs() {
                let vectorized = model.get(output).unwrap().to_array();
                assert_eq!(vectorized.len(), hs.len());
                for (i, &h) in hs.iter().enumerate() {
                    let single = WaveCondition::new(h, 11., 0.1).unwrap();
                    let scalar = RunupModel::new(kind, single)
                        .unwrap()
                        .get(output)
                        .unwrap()
                        .as_scalar()
                        .unwrap();
                    assert_eq!(vectorized[i], scalar, "{kind} {output} at {i}");
                }
            }
        }
    }

    #[test]
    fn test_length_one_array_stays_an_array() {
        let wave = WaveCondition::new(vec![4.], 11., 0.1).unwrap();
        let model = RunupModel::new(ModelKind::Holman1986, wave).unwrap();
        let r2 = model.r2().unwrap();
        assert!(!r2.is_scalar());
        assert_eq!(r2.len(), 1);
    }

    #[test]
    fn test_undefined_output() {
        let wave = WaveCondition::new(4., 11., 0.1).unwrap();
        let model = RunupModel::new(ModelKind::Passarella2018, wave).unwrap();
        match model.r2() {
            Err(RunupError::UndefinedOutput(UndefinedOutputError { model, output })) => {
                assert_eq!(model, ModelKind::Passarella2018);
                assert_eq!(output, Output::R2);
            }
            other => panic!("expected undefined output, got {other:?}"),
        }
        assert!(model.r2_std().unwrap().is_none());
    }

    #[test]
    fn test_power2018_requires_roughness() {
        let wave = WaveCondition::new(4., 11., 0.1).unwrap();
        let err = RunupModel::new(ModelKind::Power2018, wave).unwrap_err();
        assert_eq!(err.parameter(), Some(Param::R));

        let wave = WaveCondition::builder()
            .hs(4.)
            .tp(11.)
            .beta(0.1)
            .r(0.00075)
            .build()
            .unwrap();
        let model = RunupModel::new(ModelKind::Power2018, wave).unwrap();
        assert_abs_diff_eq!(model.r2().unwrap().as_scalar().unwrap(), 4.79, epsilon = 0.01);
    }

    #[test]
    fn test_negative_slope_names_beta() {
        let err = WaveCondition::new(4., 11., -0.1).unwrap_err();
        assert_eq!(err.parameter(), Some(Param::Beta));
        assert!(err.to_string().contains("beta"));
    }
}
