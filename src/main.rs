//! ClusterKit CLI entrypoint: load a CSV, run the selected clustering
//! algorithm and report the resulting clusters.

use anyhow::Result;
use clap::Parser;
use std::time::Instant;

use clusterkit::{
    load_from_csv, viz, Algorithm, Args, Cluster, ClusteringAlgorithm, DataPoint, DistanceMetric,
    HierarchicalClustering, KMeans,
};

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        println!("ClusterKit - K-Means and Hierarchical Clustering");
        println!("================================================\n");
    }

    // An unknown algorithm name is reported and skipped, not a hard failure
    let algorithm = match Algorithm::from_name(&args.algorithm) {
        Some(algorithm) => algorithm,
        None => {
            eprintln!(
                "Unknown algorithm {:?}: expected \"kmeans\" or \"hierarchical\". Skipping run.",
                args.algorithm
            );
            return Ok(());
        }
    };

    let start_time = Instant::now();

    // Step 1: Load the dataset
    if args.verbose {
        println!("Step 1: Loading data from {}", args.input);
    }

    let load_start = Instant::now();
    let points = load_from_csv(&args.input)?;
    let load_time = load_start.elapsed();

    println!("✓ Data loaded: {} points", points.len());
    if args.verbose {
        println!("  Loading time: {:.2}s", load_time.as_secs_f64());
        for point in &points {
            println!(
                "  {} {}",
                viz::format_features(point),
                point.label().unwrap_or("(unlabeled)")
            );
        }
    }

    // Step 2: Fit the selected algorithm
    let metric = args.parse_metric()?;
    let fit_start = Instant::now();
    let clusters = match algorithm {
        Algorithm::KMeans => run_kmeans(&args, &points, metric)?,
        Algorithm::Hierarchical => run_hierarchical(&args, &points, metric)?,
    };
    let fit_time = fit_start.elapsed();

    println!("✓ Model fitted successfully");
    if args.verbose {
        println!("  Fitting time: {:.2}s", fit_time.as_secs_f64());
    }

    // Step 3: Report the clusters
    viz::print_clusters(&clusters);
    viz::print_cluster_statistics(&clusters, metric)?;

    // Step 4: Optional scatter plot
    if let Some(plot_path) = &args.plot {
        viz::plot_clusters(&clusters, plot_path, None)?;
        println!("\n✓ Cluster plot saved to: {}", plot_path);
    }

    println!(
        "\nTotal processing time: {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Run K-Means with the configured parameters.
fn run_kmeans<'a>(
    args: &Args,
    points: &'a [DataPoint],
    metric: DistanceMetric,
) -> Result<Vec<Cluster<'a>>> {
    if args.verbose {
        println!("\nStep 2: Fitting K-Means");
        println!("  Number of clusters: {}", args.clusters);
        println!("  Iteration budget: {}", args.max_iters);
        println!("  Metric: {}", args.metric);
    }

    let mut model = KMeans::new(args.clusters, args.max_iters, metric);
    if let Some(seed) = args.seed {
        model = model.with_seed(seed);
    }

    Ok(model.fit(points)?)
}

/// Run hierarchical clustering with the configured parameters.
fn run_hierarchical<'a>(
    args: &Args,
    points: &'a [DataPoint],
    metric: DistanceMetric,
) -> Result<Vec<Cluster<'a>>> {
    let linkage = args.parse_linkage()?;

    if args.verbose {
        println!("\nStep 2: Fitting hierarchical clustering");
        println!("  Desired cluster count: {}", args.clusters);
        println!("  Metric: {}", args.metric);
        println!("  Linkage: {}", args.linkage);
    }

    let model = HierarchicalClustering::new(metric, linkage, args.clusters);
    Ok(model.fit(points)?)
}
