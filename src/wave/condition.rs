// wave-runup/src/wave/condition.rs

use super::dispersion;
use super::param::{Estimate, Param, WaveParam};
use super::validation::{broadcast_len, validated};
use crate::constants::PARALLEL_MIN_LEN;
use crate::errors::ValidationError;
use ndarray::Array1;
use rayon::prelude::*;

/// Validated, broadcast wave inputs shared by every runup model.
///
/// All arrays have the same length. `Lp` and `Tp` are both always present:
/// whichever one was not supplied is derived with linear wave theory.
#[derive(Clone, Debug)]
pub struct WaveCondition {
    hs: Array1<f64>,
    tp: Array1<f64>,
    beta: Array1<f64>,
    lp: Array1<f64>,
    zeta: Array1<f64>,
    h: Option<Array1<f64>>,
    r: Option<Array1<f64>>,
    supplied: Vec<Param>,
    vectorized: bool,
}

/// Two conditions are equal when they carry the same inputs, supplied or
/// derived, and the same scalar-or-array shape.
impl PartialEq for WaveCondition {
    fn eq(&self, other: &Self) -> bool {
        self.vectorized == other.vectorized
            && self.hs == other.hs
            && self.tp == other.tp
            && self.beta == other.beta
            && self.lp == other.lp
            && self.h == other.h
            && self.r == other.r
    }
}

/// The inputs of a single wave condition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WavePoint {
    pub hs: f64,
    pub tp: f64,
    pub beta: f64,
    pub lp: f64,
    /// Iribarren number beta / sqrt(Hs / Lp)
    pub zeta: f64,
    pub h: Option<f64>,
    pub r: Option<f64>,
}

impl WaveCondition {
    pub fn builder() -> WaveConditionBuilder {
        WaveConditionBuilder::default()
    }

    /// Deep-water condition from the three inputs every model needs.
    pub fn new(
        hs: impl Into<WaveParam>,
        tp: impl Into<WaveParam>,
        beta: impl Into<WaveParam>,
    ) -> Result<Self, ValidationError> {
        WaveConditionBuilder::default()
            .hs(hs)
            .tp(tp)
            .beta(beta)
            .build()
    }

    pub fn hs(&self) -> &Array1<f64> {
        &self.hs
    }
    pub fn tp(&self) -> &Array1<f64> {
        &self.tp
    }
    pub fn beta(&self) -> &Array1<f64> {
        &self.beta
    }
    pub fn lp(&self) -> &Array1<f64> {
        &self.lp
    }
    pub fn iribarren(&self) -> &Array1<f64> {
        &self.zeta
    }
    pub fn h(&self) -> Option<&Array1<f64>> {
        self.h.as_ref()
    }
    pub fn r(&self) -> Option<&Array1<f64>> {
        self.r.as_ref()
    }

    pub fn len(&self) -> usize {
        self.hs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hs.is_empty()
    }

    /// True when any input was given as an array, in which case every output is
    /// an array too.
    pub fn is_vectorized(&self) -> bool {
        self.vectorized
    }

    /// Whether `param` was supplied by the caller, as opposed to derived.
    pub fn was_supplied(&self, param: Param) -> bool {
        self.supplied.contains(&param)
    }

    /// Whether `param` is available, supplied or derived.
    pub fn has(&self, param: Param) -> bool {
        match param {
            Param::Hs | Param::Tp | Param::Beta | Param::Lp => true,
            Param::H => self.h.is_some(),
            Param::R => self.r.is_some(),
        }
    }

    pub fn point(&self, index: usize) -> WavePoint {
        WavePoint {
            hs: self.hs[index],
            tp: self.tp[index],
            beta: self.beta[index],
            lp: self.lp[index],
            zeta: self.zeta[index],
            h: self.h.as_ref().map(|h| h[index]),
            r: self.r.as_ref().map(|r| r[index]),
        }
    }

    /// Applies an elementwise equation to every condition.
    pub fn map<F>(&self, equation: F) -> Array1<f64>
    where
        F: Fn(&WavePoint) -> f64 + Sync + Send,
    {
        from_index_fn(self.len(), |i| equation(&self.point(i)))
    }

    pub fn estimate(&self, values: Array1<f64>) -> Estimate {
        Estimate::from_values(values, self.vectorized)
    }
}

pub(crate) fn from_index_fn<F>(len: usize, f: F) -> Array1<f64>
where
    F: Fn(usize) -> f64 + Sync + Send,
{
    if len >= PARALLEL_MIN_LEN {
        Array1::from_vec((0..len).into_par_iter().map(f).collect())
    } else {
        Array1::from_shape_fn(len, f)
    }
}

#[derive(Default, Clone, Debug)]
pub struct WaveConditionBuilder {
    hs: Option<WaveParam>,
    tp: Option<WaveParam>,
    beta: Option<WaveParam>,
    lp: Option<WaveParam>,
    h: Option<WaveParam>,
    r: Option<WaveParam>,
}

impl WaveConditionBuilder {
    pub fn build(&self) -> Result<WaveCondition, ValidationError> {
        let hs = self
            .hs
            .as_ref()
            .ok_or(ValidationError::MissingParameter(Param::Hs))?;
        let beta = self
            .beta
            .as_ref()
            .ok_or(ValidationError::MissingParameter(Param::Beta))?;
        if self.tp.is_none() && self.lp.is_none() {
            return Err(ValidationError::MissingPeriodOrWavelength);
        }
        let supplied: Vec<(Param, &WaveParam)> = [
            (Param::Hs, Some(hs)),
            (Param::Tp, self.tp.as_ref()),
            (Param::Beta, Some(beta)),
            (Param::Lp, self.lp.as_ref()),
            (Param::H, self.h.as_ref()),
            (Param::R, self.r.as_ref()),
        ]
        .into_iter()
        .filter_map(|(param, value)| value.map(|value| (param, value)))
        .collect();
        let len = broadcast_len(&supplied)?;
        let vectorized = supplied.iter().any(|(_, value)| value.is_array());

        let hs = validated(Param::Hs, hs, len)?;
        let beta = validated(Param::Beta, beta, len)?;
        let h = Self::validated_optional(Param::H, &self.h, len)?;
        let r = Self::validated_optional(Param::R, &self.r, len)?;
        let tp = Self::validated_optional(Param::Tp, &self.tp, len)?;
        let lp = Self::validated_optional(Param::Lp, &self.lp, len)?;

        let depth_at = |i: usize| h.as_ref().map(|h| h[i]);
        let (tp, lp) = match (tp, lp) {
            (Some(tp), Some(lp)) => (tp, lp),
            (Some(tp), None) => {
                let lp = from_index_fn(len, |i| dispersion::wavelength(tp[i], depth_at(i)));
                (tp, lp)
            }
            (None, Some(lp)) => {
                let tp = from_index_fn(len, |i| dispersion::period(lp[i], depth_at(i)));
                (tp, lp)
            }
            (None, None) => return Err(ValidationError::MissingPeriodOrWavelength),
        };
        let zeta = from_index_fn(len, |i| beta[i] / (hs[i] / lp[i]).sqrt());

        log::debug!(
            "Built wave condition with {} element(s), vectorized={}, supplied={:?}",
            len,
            vectorized,
            supplied.iter().map(|(p, _)| p.name()).collect::<Vec<_>>()
        );
        Ok(WaveCondition {
            hs,
            tp,
            beta,
            lp,
            zeta,
            h,
            r,
            supplied: supplied.iter().map(|(param, _)| *param).collect(),
            vectorized,
        })
    }

    fn validated_optional(
        param: Param,
        value: &Option<WaveParam>,
        len: usize,
    ) -> Result<Option<Array1<f64>>, ValidationError> {
        value
            .as_ref()
            .map(|value| validated(param, value, len))
            .transpose()
    }

    pub fn hs(&mut self, hs: impl Into<WaveParam>) -> &mut Self {
        self.hs = Some(hs.into());
        self
    }
    pub fn tp(&mut self, tp: impl Into<WaveParam>) -> &mut Self {
        self.tp = Some(tp.into());
        self
    }
    pub fn beta(&mut self, beta: impl Into<WaveParam>) -> &mut Self {
        self.beta = Some(beta.into());
        self
    }
    pub fn lp(&mut self, lp: impl Into<WaveParam>) -> &mut Self {
        self.lp = Some(lp.into());
        self
    }
    pub fn h(&mut self, h: impl Into<WaveParam>) -> &mut Self {
        self.h = Some(h.into());
        self
    }
    pub fn r(&mut self, r: impl Into<WaveParam>) -> &mut Self {
        self.r = Some(r.into());
        self
    }
}
