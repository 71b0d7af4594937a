// wave-runup/src/shoaling.rs
//
// Reverse shoaling of nearshore wave heights to deep water, for use as model
// input. Depths are positive downwards.

use crate::constants::{DEEP_WATER_RATIO, GRAVITY, SHALLOW_WATER_RATIO};
use crate::wave::dispersion;
use ndarray::{Array1, Zip};
use std::f64::consts::PI;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaterDepth {
    /// h < L0 / 50
    Shallow,
    /// L0 / 50 <= h <= L0 / 2
    Intermediate,
    /// h > L0 / 2
    Deep,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShoalingError {
    #[error(
        "Deep water waves detected at index {index} (h = {depth} > L0 / 2 = {limit}). \
         For deep water waves, Hs = H0"
    )]
    DeepWater { index: usize, depth: f64, limit: f64 },
    #[error("Input {name} has length {len}, expected {expected}")]
    LengthMismatch {
        name: &'static str,
        len: usize,
        expected: usize,
    },
}

/// L0 = g Tp² / 2π for each period.
pub fn deep_water_wavelength(tp: &Array1<f64>) -> Array1<f64> {
    tp.mapv(dispersion::deep_water_wavelength)
}

/// `None` when either value is NaN.
pub fn classify_water_depth(h: f64, l0: f64) -> Option<WaterDepth> {
    if h.is_nan() || l0.is_nan() {
        None
    } else if h < SHALLOW_WATER_RATIO * l0 {
        Some(WaterDepth::Shallow)
    } else if h <= DEEP_WATER_RATIO * l0 {
        Some(WaterDepth::Intermediate)
    } else {
        Some(WaterDepth::Deep)
    }
}

pub fn classify_water_depths(
    h: &Array1<f64>,
    l0: &Array1<f64>,
) -> Result<Vec<Option<WaterDepth>>, ShoalingError> {
    check_len("L0", l0.len(), h.len())?;
    Ok(h
        .iter()
        .zip(l0.iter())
        .map(|(&h, &l0)| classify_water_depth(h, l0))
        .collect())
}

fn check_len(name: &'static str, len: usize, expected: usize) -> Result<(), ShoalingError> {
    if len != expected {
        return Err(ShoalingError::LengthMismatch {
            name,
            len,
            expected,
        });
    }
    Ok(())
}

/// Shoaling coefficient Ks = sqrt(Cg0 / Cg) at depth `h` for period `tp`, with
/// kh from Hunt's approximation of the dispersion relation.
pub fn shoaling_coefficient(h: f64, tp: f64) -> f64 {
    let y = 4.03 * h / tp.powi(2);
    let kh = (y.powi(2)
        + y / (1.
            + 0.666 * y
            + 0.355 * y.powi(2)
            + 0.161 * y.powi(3)
            + 0.0632 * y.powi(4)
            + 0.0218 * y.powi(5)
            + 0.00564 * y.powi(6)))
    .sqrt();
    let cg = GRAVITY * tp / (2. * PI)
        * libm::tanh(kh)
        * (0.5 * (1. + 2. * kh / libm::sinh(2. * kh)));
    let cg0 = GRAVITY * tp / (4. * PI);
    (cg0 / cg).sqrt()
}

/// Deep water wave height H0 = Hs / Ks for records in intermediate water.
///
/// Fails if any record is in deep water; shallow records are computed anyway
/// with a warning.
pub fn reverse_shoal_intermediate(
    h: &Array1<f64>,
    l0: &Array1<f64>,
    tp: &Array1<f64>,
    hs: &Array1<f64>,
) -> Result<Array1<f64>, ShoalingError> {
    let n = h.len();
    check_len("L0", l0.len(), n)?;
    check_len("Tp", tp.len(), n)?;
    check_len("Hs", hs.len(), n)?;
    if let Some((index, (&depth, &l0))) = h
        .iter()
        .zip(l0.iter())
        .enumerate()
        .find(|(_, (&h, &l0))| h > DEEP_WATER_RATIO * l0)
    {
        return Err(ShoalingError::DeepWater {
            index,
            depth,
            limit: DEEP_WATER_RATIO * l0,
        });
    }
    let n_shallow = h
        .iter()
        .zip(l0.iter())
        .filter(|(&h, &l0)| h < SHALLOW_WATER_RATIO * l0)
        .count();
    if n_shallow > 0 {
        log::warn!(
            "Shallow water waves detected in {} of {} records: depth should be at least L0 / 50 \
             for the intermediate water approximation",
            n_shallow,
            n
        );
    }
    Ok(Zip::from(h)
        .and(tp)
        .and(hs)
        .map_collect(|&h, &tp, &hs| hs / shoaling_coefficient(h, tp)))
}

/// Deep water wave height for mixed records: deep water heights are kept,
/// intermediate ones reverse shoaled, and shallow or unclassifiable ones are
/// NaN.
pub fn reverse_shoal(
    h: &Array1<f64>,
    l0: &Array1<f64>,
    tp: &Array1<f64>,
    hs: &Array1<f64>,
) -> Result<Array1<f64>, ShoalingError> {
    let depths = classify_water_depths(h, l0)?;
    check_len("Tp", tp.len(), h.len())?;
    check_len("Hs", hs.len(), h.len())?;
    Ok(Array1::from_shape_fn(h.len(), |i| match depths[i] {
        Some(WaterDepth::Deep) => hs[i],
        Some(WaterDepth::Intermediate) => hs[i] / shoaling_coefficient(h[i], tp[i]),
        Some(WaterDepth::Shallow) | None => f64::NAN,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_deep_water_wavelength() {
        let l0 = deep_water_wavelength(&array![10., 12.]);
        assert_abs_diff_eq!(l0[0], 9.81 * 100. / (2. * PI), epsilon = 1e-12);
        assert_abs_diff_eq!(l0[1], 9.81 * 144. / (2. * PI), epsilon = 1e-12);
    }

    #[test]
    fn test_classify_water_depth() {
        assert_eq!(classify_water_depth(2., 200.), Some(WaterDepth::Shallow));
        assert_eq!(classify_water_depth(10., 200.), Some(WaterDepth::Intermediate));
        assert_eq!(classify_water_depth(150., 200.), Some(WaterDepth::Deep));
        assert_eq!(classify_water_depth(f64::NAN, 200.), None);
    }

    #[test]
    fn test_classify_boundaries_are_intermediate() {
        assert_eq!(classify_water_depth(4., 200.), Some(WaterDepth::Intermediate));
        assert_eq!(classify_water_depth(100., 200.), Some(WaterDepth::Intermediate));
    }

    #[test]
    fn test_reverse_shoal_intermediate() {
        let h0 = reverse_shoal_intermediate(
            &array![10., 5.],
            &array![200., 200.],
            &array![11.28, 11.28],
            &array![2., 2.],
        )
        .unwrap();
        assert_abs_diff_eq!(h0[0], 1.958039729854842, epsilon = 1e-9);
        assert_abs_diff_eq!(h0[1], 1.7144778943656058, epsilon = 1e-9);
    }

    #[test]
    fn test_reverse_shoal_intermediate_rejects_deep_water() {
        let err = reverse_shoal_intermediate(
            &array![10., 150.],
            &array![200., 200.],
            &array![11.28, 11.28],
            &array![2., 2.],
        )
        .unwrap_err();
        assert!(matches!(err, ShoalingError::DeepWater { index: 1, .. }));
    }

    #[test]
    fn test_reverse_shoal_intermediate_computes_shallow_records() {
        let h0 = reverse_shoal_intermediate(
            &array![2.],
            &array![200.],
            &array![11.28],
            &array![2.],
        )
        .unwrap();
        assert!(h0[0].is_finite() && h0[0] > 0.);
    }

    #[test]
    fn test_reverse_shoal_mixed() {
        let h0 = reverse_shoal(
            &array![2., 10., 150., f64::NAN],
            &array![200., 200., 200., 200.],
            &array![11.28, 11.28, 11.28, 11.28],
            &array![2., 2., 2., 2.],
        )
        .unwrap();
        assert!(h0[0].is_nan());
        assert_abs_diff_eq!(h0[1], 1.958039729854842, epsilon = 1e-9);
        assert_eq!(h0[2], 2.);
        assert!(h0[3].is_nan());
    }

    #[test]
    fn test_length_mismatch() {
        let err = reverse_shoal(&array![10.], &array![200.], &array![11.28, 11.28], &array![2.])
            .unwrap_err();
        assert_eq!(
            err,
            ShoalingError::LengthMismatch {
                name: "Tp",
                len: 2,
                expected: 1
            }
        );
    }
}
