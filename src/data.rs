//! Point and cluster data model, plus CSV data loading

use ndarray::Array1;

use crate::error::{ClusterError, Result};
use crate::metric::{self, DistanceMetric};

/// A single observation: a numeric feature vector and an optional label.
///
/// Loaded observations carry the label from the last CSV column; synthetic
/// centroids carry no label. Algorithms never mutate a point in place, a
/// centroid update always produces a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    /// Feature values, fixed length per dataset
    features: Array1<f64>,
    /// Label of the observation, `None` for computed centroids
    label: Option<String>,
}

impl DataPoint {
    /// Create a new data point.
    pub fn new(features: Array1<f64>, label: Option<String>) -> Self {
        Self { features, label }
    }

    /// Feature vector of this point.
    pub fn features(&self) -> &Array1<f64> {
        &self.features
    }

    /// Label of this point, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Distance to another point under the given metric.
    pub fn distance_to(&self, other: &DataPoint, metric: DistanceMetric) -> Result<f64> {
        metric::distance(&self.features, &other.features, metric)
    }
}

/// A group of member points together with a representative centroid.
///
/// Members are borrowed views into the caller's input slice; the centroid is
/// owned by the cluster. A cluster that loses all members keeps its last
/// centroid.
#[derive(Debug, Clone)]
pub struct Cluster<'a> {
    points: Vec<&'a DataPoint>,
    centroid: DataPoint,
}

impl<'a> Cluster<'a> {
    /// Create an empty cluster around the given centroid.
    pub fn new(centroid: DataPoint) -> Self {
        Self {
            points: Vec::new(),
            centroid,
        }
    }

    /// Create a cluster whose sole member and centroid are the same point.
    pub fn singleton(point: &'a DataPoint) -> Self {
        Self {
            points: vec![point],
            centroid: point.clone(),
        }
    }

    /// Add a member point to the cluster.
    pub fn add_point(&mut self, point: &'a DataPoint) {
        self.points.push(point);
    }

    /// Remove all member points from the cluster.
    pub fn clear_points(&mut self) {
        self.points.clear();
    }

    /// Member points currently assigned to the cluster.
    pub fn points(&self) -> &[&'a DataPoint] {
        &self.points
    }

    /// Number of member points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cluster currently has no members.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Centroid of the cluster.
    pub fn centroid(&self) -> &DataPoint {
        &self.centroid
    }

    /// Replace the centroid of the cluster.
    pub fn set_centroid(&mut self, centroid: DataPoint) {
        self.centroid = centroid;
    }

    /// Recompute the centroid as the per-feature mean of the members.
    ///
    /// An empty cluster keeps its previous centroid unchanged. The new
    /// centroid is an unlabeled point.
    pub fn recompute_centroid(&mut self) {
        if self.points.is_empty() {
            return;
        }

        let dim = self.points[0].features().len();
        let mut mean = Array1::<f64>::zeros(dim);
        for point in &self.points {
            mean += point.features();
        }
        mean /= self.points.len() as f64;

        self.centroid = DataPoint::new(mean, None);
    }
}

/// Load data points from a comma-delimited file.
///
/// The first line is treated as a header and discarded. In every following
/// row, all but the last column are parsed as numeric features and the last
/// column is kept as the label. A non-numeric feature field fails the whole
/// load with `MalformedInput`; a header-only file loads as an empty vector,
/// which the caller must detect before clustering.
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Returns
/// * The loaded points, in file order
pub fn load_from_csv(path: &str) -> Result<Vec<DataPoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut points = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        // 1-based line number, accounting for the header line
        let line = row + 2;

        if record.len() < 2 {
            return Err(ClusterError::MalformedInput {
                line,
                value: record.iter().collect::<Vec<_>>().join(","),
            });
        }

        let mut features = Vec::with_capacity(record.len() - 1);
        for field in record.iter().take(record.len() - 1) {
            let value: f64 = field.parse().map_err(|_| ClusterError::MalformedInput {
                line,
                value: field.to_string(),
            })?;
            features.push(value);
        }

        let label = record.get(record.len() - 1).unwrap_or_default().to_string();
        points.push(DataPoint::new(Array1::from(features), Some(label)));
    }

    Ok(points)
}
