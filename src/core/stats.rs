use crate::domain::model::Summary;
use crate::utils::error::{CalcError, Result};

/// Count, mean, min and max of `values` in a single pass.
///
/// Fails on an empty slice even though validated input never is one.
pub fn summarize(values: &[f64]) -> Result<Summary> {
    let first = *values.first().ok_or(CalcError::EmptyInputError)?;

    let mut sum = 0.0;
    let mut min = first;
    let mut max = first;
    for &v in values {
        sum += v;
        min = min.min(v);
        max = max.max(v);
    }

    let count = values.len();
    let mut mean = sum / count as f64;
    if !mean.is_finite() && values.iter().all(|v| v.is_finite()) {
        // sum overflowed; scale first
        mean = values.iter().map(|v| v / count as f64).sum();
    }
    // rounding in the sum can land a hair outside [min, max]
    if mean < min {
        mean = min;
    } else if mean > max {
        mean = max;
    }

    Ok(Summary {
        count,
        mean,
        min,
        max,
    })
}

pub fn is_positive(value: f64) -> bool {
    value > 0.0
}

pub fn calculate_percentage(part: f64, total: f64) -> Result<f64> {
    if total == 0.0 {
        return Err(CalcError::ZeroTotalError);
    }
    Ok((part / total) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_summary(values: &[f64], mean: f64, min: f64, max: f64) {
        let s = summarize(values).unwrap();
        assert_eq!(s.count, values.len());
        assert_eq!(s.mean, mean, "mean of {:?}", values);
        assert_eq!(s.min, min);
        assert_eq!(s.max, max);
    }

    #[test]
    fn test_summarize_typical_case() {
        assert_summary(&[1.0, 2.0, 3.0, 4.0, 5.0], 3.0, 1.0, 5.0);
    }

    #[test]
    fn test_summarize_single_value() {
        assert_summary(&[42.5], 42.5, 42.5, 42.5);
    }

    #[test]
    fn test_summarize_negative_numbers() {
        assert_summary(&[-5.0, -2.0, 0.0, 3.0, 8.0], 0.8, -5.0, 8.0);
    }

    #[test]
    fn test_summarize_floating_point_precision() {
        let s = summarize(&[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(s.count, 3);
        assert!((s.mean - 0.2).abs() < 1e-10);
        assert_eq!(s.min, 0.1);
        assert_eq!(s.max, 0.3);
    }

    #[test]
    fn test_summarize_mean_stays_within_bounds() {
        assert_summary(&[0.1, 0.1, 0.1], 0.1, 0.1, 0.1);
        assert_summary(&[0.7, 0.7, 0.7, 0.7, 0.7, 0.7, 0.7], 0.7, 0.7, 0.7);
    }

    #[test]
    fn test_summarize_large_values() {
        assert_summary(&[1e6, 2e6, 3e6, 4e6, 5e6], 3e6, 1e6, 5e6);
    }

    #[test]
    fn test_summarize_duplicate_values() {
        assert_summary(&[5.0, 5.0, 5.0], 5.0, 5.0, 5.0);
    }

    #[test]
    fn test_summarize_table() {
        let cases: &[(&[f64], f64, f64, f64)] = &[
            (&[1.0, 2.0, 3.0], 2.0, 1.0, 3.0),
            (&[10.0, 20.0, 30.0, 40.0], 25.0, 10.0, 40.0),
            (&[0.5, 1.5, 2.5], 1.5, 0.5, 2.5),
            (&[-10.0, 0.0, 10.0], 0.0, -10.0, 10.0),
        ];
        for (values, mean, min, max) in cases {
            assert_summary(values, *mean, *min, *max);
        }
    }

    #[test]
    fn test_summarize_survives_sum_overflow() {
        let s = summarize(&[f64::MAX, f64::MAX]).unwrap();
        assert!(s.mean.is_finite());
        assert_eq!(s.mean, f64::MAX);
        assert_eq!(s.min, f64::MAX);
    }

    #[test]
    fn test_summarize_empty_list_raises_error() {
        let err = summarize(&[]).unwrap_err();
        assert!(matches!(err, CalcError::EmptyInputError));
        assert_eq!(err.to_string(), "Cannot summarize an empty list");
    }

    #[test]
    fn test_is_positive() {
        for (value, expected) in [
            (5.0, true),
            (0.1, true),
            (1e6, true),
            (0.0001, true),
            (0.0, false),
            (-0.0001, false),
            (-5.0, false),
            (-999999.0, false),
        ] {
            assert_eq!(is_positive(value), expected, "is_positive({})", value);
        }
    }

    #[test]
    fn test_calculate_percentage() {
        for (part, total, expected) in [
            (25.0, 100.0, 25.0),
            (150.0, 100.0, 150.0),
            (0.0, 100.0, 0.0),
            (-25.0, 100.0, -25.0),
            (25.0, -100.0, -25.0),
            (50.0, 200.0, 25.0),
            (1.0, 3.0, 33.333333333333336),
            (100.0, 50.0, 200.0),
        ] {
            let result = calculate_percentage(part, total).unwrap();
            assert!((result - expected).abs() < 1e-10, "{} / {}", part, total);
        }
    }

    #[test]
    fn test_calculate_percentage_zero_total() {
        let err = calculate_percentage(50.0, 0.0).unwrap_err();
        assert!(matches!(err, CalcError::ZeroTotalError));
    }
}
