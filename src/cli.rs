//! Command-line interface definitions and argument parsing

use clap::Parser;

use crate::error::Result;
use crate::metric::DistanceMetric;
use crate::model::LinkageType;

/// Clustering CLI: K-Means and hierarchical clustering on CSV feature data
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input CSV file (numeric feature columns, label in the last column)
    #[arg(short, long, default_value = "data.csv")]
    pub input: String,

    /// Clustering algorithm to run: "kmeans" or "hierarchical"
    #[arg(short, long, default_value = "kmeans")]
    pub algorithm: String,

    /// Number of clusters to produce
    #[arg(short = 'k', long, default_value = "3")]
    pub clusters: usize,

    /// Distance metric: "euclidean" or "manhattan"
    #[arg(short, long, default_value = "euclidean")]
    pub metric: String,

    /// Linkage rule for hierarchical clustering: "single" or "complete"
    #[arg(short, long, default_value = "single")]
    pub linkage: String,

    /// Iteration budget for K-Means
    #[arg(long, default_value = "100")]
    pub max_iters: usize,

    /// Seed for K-Means centroid initialization (system randomness when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Optional output path for a cluster scatter plot (PNG)
    #[arg(short, long)]
    pub plot: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse the metric selector into a `DistanceMetric`.
    pub fn parse_metric(&self) -> Result<DistanceMetric> {
        self.metric.parse()
    }

    /// Parse the linkage selector into a `LinkageType`.
    pub fn parse_linkage(&self) -> Result<LinkageType> {
        self.linkage.parse()
    }
}

/// Supported clustering algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    KMeans,
    Hierarchical,
}

impl Algorithm {
    /// Resolve a case-insensitive algorithm name.
    ///
    /// Returns `None` for an unknown name so the caller can report it and
    /// skip the run instead of aborting.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "kmeans" => Some(Algorithm::KMeans),
            "hierarchical" => Some(Algorithm::Hierarchical),
            _ => None,
        }
    }
}
