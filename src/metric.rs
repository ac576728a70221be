//! Distance metrics over feature vectors

use std::str::FromStr;

use ndarray::Array1;

use crate::error::{ClusterError, Result};

/// Distance metric applied to a pair of feature vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceMetric {
    /// Root of the summed squared per-feature differences.
    Euclidean,
    /// Sum of the absolute per-feature differences.
    Manhattan,
}

impl FromStr for DistanceMetric {
    type Err = ClusterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "euclidean" => Ok(DistanceMetric::Euclidean),
            "manhattan" => Ok(DistanceMetric::Manhattan),
            _ => Err(ClusterError::UnsupportedMetric(s.to_string())),
        }
    }
}

/// Calculate the distance between two feature vectors.
///
/// Both vectors must have the same length; unequal lengths fail with
/// `DimensionMismatch` rather than silently truncating.
pub fn distance(a: &Array1<f64>, b: &Array1<f64>, metric: DistanceMetric) -> Result<f64> {
    if a.len() != b.len() {
        return Err(ClusterError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let value = match metric {
        DistanceMetric::Euclidean => a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).powi(2))
            .sum::<f64>()
            .sqrt(),
        DistanceMetric::Manhattan => a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum(),
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_euclidean_distance() {
        let a = array![0.0, 0.0];
        let b = array![3.0, 4.0];
        let d = distance(&a, &b, DistanceMetric::Euclidean).unwrap();
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_manhattan_distance() {
        let a = array![0.0, 0.0];
        let b = array![3.0, 4.0];
        let d = distance(&a, &b, DistanceMetric::Manhattan).unwrap();
        assert!((d - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = array![1.5, -2.0, 7.25];
        for metric in [DistanceMetric::Euclidean, DistanceMetric::Manhattan] {
            assert_eq!(distance(&a, &a, metric).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![-4.0, 0.5, 9.0];
        for metric in [DistanceMetric::Euclidean, DistanceMetric::Manhattan] {
            let ab = distance(&a, &b, metric).unwrap();
            let ba = distance(&b, &a, metric).unwrap();
            assert_eq!(ab, ba);
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = array![1.0, 2.0];
        let b = array![1.0, 2.0, 3.0];
        let result = distance(&a, &b, DistanceMetric::Euclidean);
        assert!(matches!(
            result,
            Err(ClusterError::DimensionMismatch { left: 2, right: 3 })
        ));
    }

    #[test]
    fn test_metric_from_str() {
        assert_eq!(
            "euclidean".parse::<DistanceMetric>().unwrap(),
            DistanceMetric::Euclidean
        );
        assert_eq!(
            "Manhattan".parse::<DistanceMetric>().unwrap(),
            DistanceMetric::Manhattan
        );
        assert!("cosine".parse::<DistanceMetric>().is_err());
    }
}
