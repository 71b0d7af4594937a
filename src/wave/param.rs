use ndarray::Array1;
use std::fmt;

/// Named wave inputs accepted by the runup models.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Param {
    Hs,
    Tp,
    Beta,
    Lp,
    H,
    R,
}

impl Param {
    pub const ALL: [Param; 6] = [
        Param::Hs,
        Param::Tp,
        Param::Beta,
        Param::Lp,
        Param::H,
        Param::R,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hs => "Hs",
            Self::Tp => "Tp",
            Self::Beta => "beta",
            Self::Lp => "Lp",
            Self::H => "h",
            Self::R => "r",
        }
    }

    /// Closed interval the values must lie in. `None` means strictly positive.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            Self::Beta => Some((0.0, 1.0)),
            _ => None,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A wave input given either as one value or as one value per condition.
#[derive(Clone, Debug, PartialEq)]
pub enum WaveParam {
    Scalar(f64),
    Array(Array1<f64>),
}

impl WaveParam {
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Array(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_array(&self) -> Array1<f64> {
        match self {
            Self::Scalar(value) => Array1::from_elem(1, *value),
            Self::Array(values) => values.clone(),
        }
    }
}

impl From<f64> for WaveParam {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<f64>> for WaveParam {
    fn from(values: Vec<f64>) -> Self {
        Self::Array(Array1::from_vec(values))
    }
}

impl From<&[f64]> for WaveParam {
    fn from(values: &[f64]) -> Self {
        Self::Array(Array1::from_vec(values.to_vec()))
    }
}

impl<const N: usize> From<[f64; N]> for WaveParam {
    fn from(values: [f64; N]) -> Self {
        Self::Array(Array1::from_vec(values.to_vec()))
    }
}

impl From<Array1<f64>> for WaveParam {
    fn from(values: Array1<f64>) -> Self {
        Self::Array(values)
    }
}

/// A model output: a single value for scalar inputs, otherwise one value per
/// broadcast wave condition.
#[derive(Clone, Debug, PartialEq)]
pub enum Estimate {
    Scalar(f64),
    Array(Array1<f64>),
}

impl Estimate {
    pub(crate) fn from_values(values: Array1<f64>, vectorized: bool) -> Self {
        if !vectorized && values.len() == 1 {
            Self::Scalar(values[0])
        } else {
            Self::Array(values)
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array1<f64>> {
        match self {
            Self::Scalar(_) => None,
            Self::Array(values) => Some(values),
        }
    }

    pub fn to_array(&self) -> Array1<f64> {
        match self {
            Self::Scalar(value) => Array1::from_elem(1, *value),
            Self::Array(values) => values.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Array(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }
}
