// wave-runup/src/wave/validation.rs
//
// Checks presence, range and broadcast shape of wave inputs.

use super::param::{Param, WaveParam};
use crate::errors::ValidationError;
use ndarray::Array1;

/// Checks every value of `param` against its physical bounds.
pub fn validate_param(param: Param, values: &Array1<f64>) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::EmptyParameter(param));
    }
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite {
                param,
                index,
                value,
            });
        }
        match param.bounds() {
            Some((min, max)) => {
                if !(min <= value && value <= max) {
                    return Err(ValidationError::OutOfRange {
                        param,
                        index,
                        value,
                        min,
                        max,
                    });
                }
            }
            None => {
                if value <= 0. {
                    return Err(ValidationError::NonPositive {
                        param,
                        index,
                        value,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Length all inputs broadcast to. Length-one inputs stretch to any length,
/// every other length must agree.
pub fn broadcast_len(params: &[(Param, &WaveParam)]) -> Result<usize, ValidationError> {
    let mut expected: Option<usize> = None;
    for (param, value) in params {
        let len = value.len();
        if len == 0 {
            return Err(ValidationError::EmptyParameter(*param));
        }
        if len == 1 {
            continue;
        }
        match expected {
            None => expected = Some(len),
            Some(expected) if expected != len => {
                return Err(ValidationError::ShapeMismatch {
                    param: *param,
                    len,
                    expected,
                });
            }
            Some(_) => (),
        }
    }
    Ok(expected.unwrap_or(1))
}

pub fn broadcast(value: &WaveParam, len: usize) -> Array1<f64> {
    match value {
        WaveParam::Scalar(value) => Array1::from_elem(len, *value),
        WaveParam::Array(values) if values.len() == 1 && len != 1 => {
            Array1::from_elem(len, values[0])
        }
        WaveParam::Array(values) => values.clone(),
    }
}

/// Broadcasts and range-checks one input in a single pass.
pub fn validated(
    param: Param,
    value: &WaveParam,
    len: usize,
) -> Result<Array1<f64>, ValidationError> {
    let values = broadcast(value, len);
    validate_param(param, &values)?;
    Ok(values)
}
