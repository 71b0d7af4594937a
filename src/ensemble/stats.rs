// wave-runup/src/ensemble/stats.rs

use crate::errors::AggregationError;
use ndarray::{Array1, Array2, Axis, Zip};
use ndarray_stats::interpolate::Linear;
use ndarray_stats::QuantileExt;
use noisy_float::types::n64;

/// Cross-model statistics of a (members x conditions) table.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberStats {
    pub mean: Array1<f64>,
    pub std: Array1<f64>,
    pub percentiles: Vec<(f64, Array1<f64>)>,
}

pub fn member_stats(
    table: &Array2<f64>,
    percentiles: &[f64],
    ddof: f64,
) -> Result<MemberStats, AggregationError> {
    let n_members = table.nrows();
    let n_conditions = table.ncols();
    let mean = table
        .mean_axis(Axis(0))
        .ok_or(AggregationError::NoMembers)?;
    // ndarray panics for ddof > n; a zero divisor yields NaN instead.
    let std = if ddof >= n_members as f64 {
        Array1::from_elem(n_conditions, f64::NAN)
    } else {
        table.std_axis(Axis(0), ddof)
    };
    // A NaN member makes every statistic of its condition NaN, percentiles included.
    let has_nan = table.map_axis(Axis(0), |column| column.iter().any(|v| v.is_nan()));
    let mut scratch = table.clone();
    let percentiles = percentiles
        .iter()
        .map(|&q| -> Result<(f64, Array1<f64>), AggregationError> {
            let mut values =
                scratch.quantile_axis_skipnan_mut(Axis(0), n64(q / 100.), &Linear)?;
            Zip::from(&mut values).and(&has_nan).for_each(|v, &nan| {
                if nan {
                    *v = f64::NAN;
                }
            });
            Ok((q, values))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MemberStats {
        mean,
        std,
        percentiles,
    })
}

/// Per-condition mean of the table rows weighted by `weights`. NaN where the
/// weights sum to zero.
pub fn weighted_mean(table: &Array2<f64>, weights: &Array1<f64>) -> Array1<f64> {
    weights.dot(table) / weights.sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_statistics_per_condition() {
        let table = array![[1., 10.], [2., 20.], [3., 30.], [4., 40.]];
        let stats = member_stats(&table, &[0., 50., 100.], 0.).unwrap();
        assert_eq!(stats.mean, array![2.5, 25.]);
        assert_abs_diff_eq!(stats.std[0], 1.25f64.sqrt(), epsilon = 1e-12);
        assert_eq!(stats.percentiles[0].1, array![1., 10.]);
        assert_eq!(stats.percentiles[1].1, array![2.5, 25.]);
        assert_eq!(stats.percentiles[2].1, array![4., 40.]);
    }

    #[test]
    fn test_sample_std() {
        let table = array![[1.], [3.]];
        let stats = member_stats(&table, &[], 1.).unwrap();
        assert_abs_diff_eq!(stats.std[0], 2f64.sqrt(), epsilon = 1e-12);
        let stats = member_stats(&table, &[], 2.).unwrap();
        assert!(stats.std[0].is_nan());
    }

    #[test]
    fn test_nan_member_propagates_to_every_statistic() {
        let table = array![[1., 1.], [f64::NAN, 2.], [3., 3.]];
        let stats = member_stats(&table, &[5., 50.], 0.).unwrap();
        assert!(stats.mean[0].is_nan());
        assert!(stats.std[0].is_nan());
        for (_, values) in &stats.percentiles {
            assert!(values[0].is_nan());
        }
        assert_eq!(stats.mean[1], 2.);
        assert_eq!(stats.percentiles[1].1[1], 2.);
    }

    #[test]
    fn test_weighted_mean() {
        let table = array![[1., 10.], [4., 40.]];
        assert_eq!(weighted_mean(&table, &array![2., 1.]), array![2., 20.]);
        assert!(weighted_mean(&table, &array![0., 0.])[0].is_nan());
    }

    #[test]
    fn test_empty_table() {
        let table = Array2::<f64>::zeros((0, 3));
        assert!(matches!(
            member_stats(&table, &[50.], 0.),
            Err(AggregationError::NoMembers)
        ));
    }
}
