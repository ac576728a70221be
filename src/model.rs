//! Clustering algorithms: K-Means and agglomerative hierarchical clustering

use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::{Cluster, DataPoint};
use crate::error::{ClusterError, Result};
use crate::metric::DistanceMetric;

/// Rule for deriving an inter-cluster distance from pairwise point distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkageType {
    /// Minimum distance over all cross-cluster point pairs.
    Single,
    /// Maximum distance over all cross-cluster point pairs.
    Complete,
}

impl FromStr for LinkageType {
    type Err = ClusterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(LinkageType::Single),
            "complete" => Ok(LinkageType::Complete),
            _ => Err(ClusterError::UnsupportedLinkage(s.to_string())),
        }
    }
}

/// A clustering algorithm: partitions a sequence of points into clusters.
///
/// The input slice is read-only to the algorithm; only cluster membership
/// views and centroid values are produced. Implementations hold no state
/// across calls, so repeated `fit` calls re-run from scratch.
pub trait ClusteringAlgorithm {
    /// Run the algorithm over the given points and return the clusters.
    fn fit<'a>(&self, data: &'a [DataPoint]) -> Result<Vec<Cluster<'a>>>;
}

/// K-Means clustering with a fixed iteration budget.
///
/// Initial centroids are drawn uniformly at random with replacement from the
/// input, so duplicate seeds are possible. The loop runs exactly
/// `max_iterations` times with no early convergence exit, giving a bounded
/// cost of `O(max_iterations * k * n)` distance evaluations.
#[derive(Debug, Clone)]
pub struct KMeans {
    k: usize,
    max_iterations: usize,
    metric: DistanceMetric,
    seed: Option<u64>,
}

impl KMeans {
    /// Create a K-Means instance.
    ///
    /// # Arguments
    /// * `k` - Number of clusters to form
    /// * `max_iterations` - Fixed number of assign/update passes
    /// * `metric` - Distance metric for the assignment step
    pub fn new(k: usize, max_iterations: usize, metric: DistanceMetric) -> Self {
        Self {
            k,
            max_iterations,
            metric,
            seed: None,
        }
    }

    /// Seed the centroid initialization for reproducible runs.
    ///
    /// Without a seed the initial centroids are drawn from system randomness.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pick k initial centroids at random, with replacement.
    fn initialize_clusters<'a>(&self, data: &'a [DataPoint]) -> Vec<Cluster<'a>> {
        let mut rng: StdRng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        (0..self.k)
            .map(|_| Cluster::new(data[rng.gen_range(0..data.len())].clone()))
            .collect()
    }

    /// Clear every cluster, then assign each point to its nearest centroid.
    ///
    /// Ties go to the first cluster encountered, since only a strictly
    /// smaller distance replaces the running minimum.
    fn assign_points<'a>(&self, data: &'a [DataPoint], clusters: &mut [Cluster<'a>]) -> Result<()> {
        for cluster in clusters.iter_mut() {
            cluster.clear_points();
        }

        for point in data {
            let mut best: Option<usize> = None;
            let mut min_distance = f64::INFINITY;
            for (idx, cluster) in clusters.iter().enumerate() {
                let distance = point.distance_to(cluster.centroid(), self.metric)?;
                if distance < min_distance {
                    min_distance = distance;
                    best = Some(idx);
                }
            }
            if let Some(idx) = best {
                clusters[idx].add_point(point);
            }
        }

        Ok(())
    }
}

impl ClusteringAlgorithm for KMeans {
    fn fit<'a>(&self, data: &'a [DataPoint]) -> Result<Vec<Cluster<'a>>> {
        if data.is_empty() {
            return Err(ClusterError::EmptyDataset);
        }
        if self.k == 0 {
            return Err(ClusterError::InvalidParameter(
                "number of clusters must be positive".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(ClusterError::InvalidParameter(
                "iteration budget must be positive".to_string(),
            ));
        }

        let mut clusters = self.initialize_clusters(data);
        for _ in 0..self.max_iterations {
            self.assign_points(data, &mut clusters)?;
            // Empty clusters keep their stale centroid
            for cluster in &mut clusters {
                cluster.recompute_centroid();
            }
        }

        Ok(clusters)
    }
}

/// Bottom-up agglomerative clustering with selectable linkage.
///
/// Starts from one singleton cluster per point and repeatedly merges the
/// closest pair until the desired cluster count remains. Every merge
/// rescans all cluster pairs and all cross point pairs; no distances are
/// cached, which is acceptable for the small datasets this is meant for.
#[derive(Debug, Clone)]
pub struct HierarchicalClustering {
    metric: DistanceMetric,
    linkage: LinkageType,
    desired_cluster_count: usize,
}

impl HierarchicalClustering {
    /// Create a hierarchical clustering instance.
    pub fn new(metric: DistanceMetric, linkage: LinkageType, desired_cluster_count: usize) -> Self {
        Self {
            metric,
            linkage,
            desired_cluster_count,
        }
    }

    /// Find the closest pair of clusters and merge the second into the first.
    ///
    /// The pair scan keeps the first minimum encountered, so tie-breaking is
    /// deterministic in scan order.
    fn merge_closest_pair<'a>(&self, clusters: &mut Vec<Cluster<'a>>) -> Result<()> {
        let mut min_distance = f64::INFINITY;
        let mut pair: Option<(usize, usize)> = None;

        for i in 0..clusters.len() {
            for j in (i + 1)..clusters.len() {
                let distance = self.cluster_distance(&clusters[i], &clusters[j])?;
                if distance < min_distance {
                    min_distance = distance;
                    pair = Some((i, j));
                }
            }
        }

        if let Some((i, j)) = pair {
            let absorbed = clusters.remove(j);
            for &point in absorbed.points() {
                clusters[i].add_point(point);
            }
            clusters[i].recompute_centroid();
        }

        Ok(())
    }

    /// Inter-cluster distance under the configured linkage rule.
    fn cluster_distance(&self, a: &Cluster<'_>, b: &Cluster<'_>) -> Result<f64> {
        let mut result = match self.linkage {
            LinkageType::Single => f64::INFINITY,
            LinkageType::Complete => f64::NEG_INFINITY,
        };

        for &p in a.points() {
            for &q in b.points() {
                let distance = p.distance_to(q, self.metric)?;
                result = match self.linkage {
                    LinkageType::Single => result.min(distance),
                    LinkageType::Complete => result.max(distance),
                };
            }
        }

        Ok(result)
    }
}

impl ClusteringAlgorithm for HierarchicalClustering {
    fn fit<'a>(&self, data: &'a [DataPoint]) -> Result<Vec<Cluster<'a>>> {
        if data.is_empty() {
            return Err(ClusterError::EmptyDataset);
        }
        if self.desired_cluster_count == 0 {
            return Err(ClusterError::InvalidParameter(
                "desired cluster count must be positive".to_string(),
            ));
        }

        let mut clusters: Vec<Cluster<'a>> = data.iter().map(Cluster::singleton).collect();
        while clusters.len() > self.desired_cluster_count {
            self.merge_closest_pair(&mut clusters)?;
        }

        Ok(clusters)
    }
}

/// Number of members in each cluster.
pub fn cluster_sizes(clusters: &[Cluster<'_>]) -> Vec<usize> {
    clusters.iter().map(|cluster| cluster.len()).collect()
}

/// Within-cluster sum of squared member-to-centroid distances.
pub fn inertia(clusters: &[Cluster<'_>], metric: DistanceMetric) -> Result<f64> {
    let mut total = 0.0;
    for cluster in clusters {
        for &point in cluster.points() {
            let distance = point.distance_to(cluster.centroid(), metric)?;
            total += distance * distance;
        }
    }
    Ok(total)
}

/// Mean silhouette coefficient over all clustered points.
///
/// For each point, a(i) is the mean distance to the other members of its own
/// cluster and b(i) the smallest mean distance to the members of another
/// non-empty cluster; the coefficient is (b - a) / max(a, b). Degenerate
/// cases (single cluster, singleton point with no neighbors) contribute 0.
pub fn mean_silhouette(clusters: &[Cluster<'_>], metric: DistanceMetric) -> Result<f64> {
    let total_points: usize = clusters.iter().map(|cluster| cluster.len()).sum();
    if total_points < 2 || clusters.len() < 2 {
        return Ok(0.0);
    }

    let mut silhouette_sum = 0.0;
    for (ci, cluster) in clusters.iter().enumerate() {
        for &point in cluster.points() {
            let a = if cluster.len() < 2 {
                0.0
            } else {
                let mut acc = 0.0;
                for &other in cluster.points() {
                    if std::ptr::eq(point, other) {
                        continue;
                    }
                    acc += point.distance_to(other, metric)?;
                }
                acc / (cluster.len() - 1) as f64
            };

            let mut b = f64::INFINITY;
            for (cj, other_cluster) in clusters.iter().enumerate() {
                if cj == ci || other_cluster.is_empty() {
                    continue;
                }
                let mut acc = 0.0;
                for &other in other_cluster.points() {
                    acc += point.distance_to(other, metric)?;
                }
                b = b.min(acc / other_cluster.len() as f64);
            }

            silhouette_sum += if b.is_infinite() || (a == 0.0 && b == 0.0) {
                0.0
            } else {
                (b - a) / a.max(b)
            };
        }
    }

    Ok(silhouette_sum / total_points as f64)
}
