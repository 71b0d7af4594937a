// wave-runup/src/ensemble/raw.rs

use super::opts::{EnsembleOpts, MissingOutputPolicy};
use super::stats::{member_stats, weighted_mean};
use crate::errors::{AggregationError, RunupError};
use crate::models::{ModelKind, Output, RunupModel};
use crate::wave::{Estimate, WaveCondition};
use ndarray::{Array1, Array2};
use std::collections::BTreeMap;

/// Several runup models evaluated against the same wave conditions.
#[derive(Debug)]
pub struct EnsembleRaw {
    models: Vec<RunupModel>,
    vectorized: bool,
}

impl EnsembleRaw {
    pub fn new(models: Vec<RunupModel>) -> Result<Self, AggregationError> {
        let first = models.first().ok_or(AggregationError::NoMembers)?;
        let expected = first.len();
        let vectorized = first.wave().is_vectorized();
        for (i, model) in models.iter().enumerate() {
            if model.len() != expected {
                return Err(AggregationError::MismatchedLengths {
                    model: model.kind(),
                    len: model.len(),
                    expected,
                });
            }
            if model.wave() != first.wave() {
                return Err(AggregationError::MismatchedConditions {
                    model: model.kind(),
                });
            }
            if models[..i].iter().any(|other| other.kind() == model.kind()) {
                return Err(AggregationError::DuplicateMember(model.name().to_string()));
            }
        }
        Ok(EnsembleRaw { models, vectorized })
    }

    /// Instantiates each of `kinds` against `wave`.
    pub fn from_kinds(wave: &WaveCondition, kinds: &[ModelKind]) -> Result<Self, RunupError> {
        let models = kinds
            .iter()
            .map(|kind| RunupModel::new(*kind, wave.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(models)?)
    }

    pub fn models(&self) -> &[RunupModel] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Runs the default options for the output named `output` ("R2", "setup",
    /// "sinc", "sig" or "swash").
    pub fn estimate(&self, output: &str) -> Result<EnsembleResult, RunupError> {
        let opts = EnsembleOpts {
            output: output.parse()?,
            ..EnsembleOpts::default()
        };
        self.run(&opts)
    }

    pub fn run(&self, opts: &EnsembleOpts) -> Result<EnsembleResult, RunupError> {
        let output = opts.output;
        let mut members: Vec<(ModelKind, &Array1<f64>)> = Vec::with_capacity(self.len());
        let mut skipped = Vec::new();
        for model in &self.models {
            match model.values(output) {
                Ok(values) => {
                    log::debug!("{} {} = {}", model.name(), output, values);
                    members.push((model.kind(), values));
                }
                Err(RunupError::UndefinedOutput(e)) => match opts.policy {
                    MissingOutputPolicy::FailFast => {
                        return Err(AggregationError::UndefinedOutput(e).into())
                    }
                    MissingOutputPolicy::SkipAndWarn => {
                        log::warn!("Skipping {} in ensemble: {}", model.name(), e);
                        skipped.push(model.name().to_string());
                    }
                },
                Err(e) => return Err(e),
            }
        }
        if members.is_empty() {
            return Err(AggregationError::NoEstimates(output).into());
        }

        let n_conditions = self.models[0].len();
        let table = Array2::from_shape_fn((members.len(), n_conditions), |(i, j)| {
            members[i].1[j]
        });
        let stats = member_stats(&table, &opts.percentiles, opts.ddof)?;
        let estimate = |values: Array1<f64>| Estimate::from_values(values, self.vectorized);
        let weighted = if opts.weights.is_empty() {
            None
        } else {
            let weights = members
                .iter()
                .map(|(kind, _)| opts.weight_of(*kind))
                .collect::<Array1<f64>>();
            Some(estimate(weighted_mean(&table, &weights)))
        };

        Ok(EnsembleResult {
            output,
            estimates: members
                .into_iter()
                .map(|(kind, values)| (kind.name().to_string(), estimate(values.clone())))
                .collect(),
            skipped,
            mean: estimate(stats.mean),
            weighted_mean: weighted,
            std: estimate(stats.std),
            percentiles: stats
                .percentiles
                .into_iter()
                .map(|(q, values)| (q, estimate(values)))
                .collect(),
        })
    }
}

/// Per-model estimates of one output and their cross-model statistics.
///
/// A condition where any member is NaN has a NaN mean, std, weighted mean and
/// percentiles.
#[derive(Clone, Debug, PartialEq)]
pub struct EnsembleResult {
    output: Output,
    estimates: BTreeMap<String, Estimate>,
    skipped: Vec<String>,
    mean: Estimate,
    weighted_mean: Option<Estimate>,
    std: Estimate,
    percentiles: Vec<(f64, Estimate)>,
}

impl EnsembleResult {
    pub fn output(&self) -> Output {
        self.output
    }

    /// Estimates keyed by model name.
    pub fn estimates(&self) -> &BTreeMap<String, Estimate> {
        &self.estimates
    }

    pub fn get(&self, model: ModelKind) -> Option<&Estimate> {
        self.estimates.get(model.name())
    }

    /// Members left out under [`MissingOutputPolicy::SkipAndWarn`].
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    pub fn mean(&self) -> &Estimate {
        &self.mean
    }

    /// Present when the run was given member weights.
    pub fn weighted_mean(&self) -> Option<&Estimate> {
        self.weighted_mean.as_ref()
    }

    pub fn std(&self) -> &Estimate {
        &self.std
    }

    pub fn percentiles(&self) -> &[(f64, Estimate)] {
        &self.percentiles
    }

    pub fn percentile(&self, q: f64) -> Option<&Estimate> {
        self.percentiles
            .iter()
            .find(|(p, _)| *p == q)
            .map(|(_, estimate)| estimate)
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }
}
