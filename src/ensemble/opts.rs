// wave-runup/src/ensemble/opts.rs

use crate::models::{ModelKind, Output};
use derive_builder::Builder;

/// What an ensemble does with a member that does not define the requested
/// output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingOutputPolicy {
    /// Abort the run with an aggregation error.
    #[default]
    FailFast,
    /// Leave the member out of the statistics and log a warning.
    SkipAndWarn,
}

#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct EnsembleOpts {
    #[builder(default = "Output::R2")]
    pub output: Output,
    #[builder(default)]
    pub policy: MissingOutputPolicy,
    /// Percentiles in [0, 100], linearly interpolated between members.
    #[builder(default = "vec![5., 50., 95.]", setter(into))]
    pub percentiles: Vec<f64>,
    /// Delta degrees of freedom of the standard deviation.
    #[builder(default)]
    pub ddof: f64,
    /// Non-negative weights for a weighted mean. Members not listed weigh 1.
    /// No weighted mean is computed when empty.
    #[builder(default, setter(into))]
    pub weights: Vec<(ModelKind, f64)>,
}

impl Default for EnsembleOpts {
    fn default() -> Self {
        EnsembleOpts {
            output: Output::R2,
            policy: MissingOutputPolicy::default(),
            percentiles: vec![5., 50., 95.],
            ddof: 0.,
            weights: Vec::new(),
        }
    }
}

impl EnsembleOpts {
    pub fn builder() -> EnsembleOptsBuilder {
        EnsembleOptsBuilder::default()
    }

    pub(crate) fn weight_of(&self, kind: ModelKind) -> f64 {
        self.weights
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(1., |(_, w)| *w)
    }
}

impl EnsembleOptsBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(percentiles) = &self.percentiles {
            if let Some(q) = percentiles
                .iter()
                .find(|q| !(q.is_finite() && (0. ..=100.).contains(*q)))
            {
                return Err(format!("percentile {} is not in [0, 100]", q));
            }
        }
        if let Some(ddof) = self.ddof {
            if !(ddof.is_finite() && ddof >= 0.) {
                return Err(format!("ddof must be a non-negative number, got {}", ddof));
            }
        }
        if let Some(weights) = &self.weights {
            if let Some((kind, w)) = weights.iter().find(|(_, w)| !(w.is_finite() && *w >= 0.)) {
                return Err(format!("weight of {} must be non-negative, got {}", kind, w));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = EnsembleOpts::builder().build().unwrap();
        assert_eq!(opts, EnsembleOpts::default());
        assert_eq!(opts.policy, MissingOutputPolicy::FailFast);
    }

    #[test]
    fn test_overrides() {
        let opts = EnsembleOpts::builder()
            .output(Output::Sig)
            .policy(MissingOutputPolicy::SkipAndWarn)
            .percentiles([25., 75.])
            .ddof(1.)
            .build()
            .unwrap();
        assert_eq!(opts.output, Output::Sig);
        assert_eq!(opts.percentiles, vec![25., 75.]);
        assert_eq!(opts.ddof, 1.);
    }

    #[test]
    fn test_invalid_percentile() {
        let err = EnsembleOpts::builder()
            .percentiles(vec![50., 101.])
            .build()
            .unwrap_err();
        assert!(matches!(err, EnsembleOptsBuilderError::ValidationError(_)));
    }

    #[test]
    fn test_weights() {
        let opts = EnsembleOpts::builder()
            .weights(vec![(ModelKind::Holman1986, 2.)])
            .build()
            .unwrap();
        assert_eq!(opts.weight_of(ModelKind::Holman1986), 2.);
        assert_eq!(opts.weight_of(ModelKind::Stockdon2006), 1.);
        assert!(EnsembleOpts::builder()
            .weights(vec![(ModelKind::Holman1986, -1.)])
            .build()
            .is_err());
    }

    #[test]
    fn test_invalid_ddof() {
        assert!(EnsembleOpts::builder().ddof(-1.).build().is_err());
    }
}
