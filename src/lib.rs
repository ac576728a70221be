//! ClusterKit: a small clustering library and CLI
//!
//! This library groups unlabeled numeric feature vectors into clusters with
//! two unsupervised algorithms: K-Means (centroid relocation with a fixed
//! iteration budget) and agglomerative hierarchical clustering (bottom-up
//! merging with single or complete linkage).

pub mod cli;
pub mod data;
pub mod error;
pub mod metric;
pub mod model;
pub mod viz;

// Re-export public items for easier access
pub use cli::{Algorithm, Args};
pub use data::{load_from_csv, Cluster, DataPoint};
pub use error::{ClusterError, Result};
pub use metric::{distance, DistanceMetric};
pub use model::{
    cluster_sizes, inertia, mean_silhouette, ClusteringAlgorithm, HierarchicalClustering, KMeans,
    LinkageType,
};
