//! Console reporting and Plotters visualization of clustering results

use plotters::prelude::*;

use crate::data::{Cluster, DataPoint};
use crate::metric::DistanceMetric;
use crate::model;

/// Color palette for different clusters
const CLUSTER_COLORS: [RGBColor; 5] = [RED, BLUE, GREEN, YELLOW, MAGENTA];

/// Render a feature vector for console output.
pub fn format_features(point: &DataPoint) -> String {
    let values: Vec<String> = point.features().iter().map(|v| v.to_string()).collect();
    format!("[{}]", values.join(", "))
}

/// Print every cluster with a 1-based index, its members and its centroid.
pub fn print_clusters(clusters: &[Cluster<'_>]) {
    println!("\n=== Clusters ===");
    for (i, cluster) in clusters.iter().enumerate() {
        println!("Cluster {}:", i + 1);
        for point in cluster.points() {
            println!(
                "  {} {}",
                format_features(point),
                point.label().unwrap_or("(unlabeled)")
            );
        }
        if cluster.is_empty() {
            println!("  (no members)");
        }
        println!("  centroid: {}", format_features(cluster.centroid()));
    }
}

/// Print cluster statistics to console
pub fn print_cluster_statistics(
    clusters: &[Cluster<'_>],
    metric: DistanceMetric,
) -> crate::Result<()> {
    let sizes = model::cluster_sizes(clusters);
    let total: usize = sizes.iter().sum();

    println!("\n=== Cluster Statistics ===");
    println!("Number of clusters: {}", clusters.len());
    println!("Total points: {}", total);

    println!("\nCluster sizes:");
    for (i, &size) in sizes.iter().enumerate() {
        let percentage = if total > 0 {
            (size as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        println!("  Cluster {}: {} points ({:.1}%)", i + 1, size, percentage);
    }

    let wcss = model::inertia(clusters, metric)?;
    let silhouette = model::mean_silhouette(clusters, metric)?;
    println!("\nWithin-cluster sum of squares: {:.2}", wcss);
    println!("Mean silhouette score: {:.3}", silhouette);

    Ok(())
}

/// Create a scatter plot of the clusters over their first two features.
///
/// Members are drawn as circles colored per cluster, centroids as squares.
/// Fails if no cluster has members or the data has fewer than two features.
///
/// # Arguments
/// * `clusters` - Fitted clusters to draw
/// * `output_path` - Path to save the PNG plot
/// * `plot_title` - Title for the plot
pub fn plot_clusters(
    clusters: &[Cluster<'_>],
    output_path: &str,
    plot_title: Option<&str>,
) -> anyhow::Result<()> {
    let title = plot_title.unwrap_or("Cluster Assignment (first two features)");

    let members: Vec<(usize, &DataPoint)> = clusters
        .iter()
        .enumerate()
        .flat_map(|(i, cluster)| cluster.points().iter().map(move |&p| (i, p)))
        .collect();

    if members.is_empty() {
        anyhow::bail!("nothing to plot: all clusters are empty");
    }
    if members.iter().any(|(_, p)| p.features().len() < 2) {
        anyhow::bail!("plotting requires at least two features per point");
    }

    // Plot bounds with some padding, covering members and centroids
    let xs = members
        .iter()
        .map(|(_, p)| p.features()[0])
        .chain(clusters.iter().map(|c| c.centroid().features()[0]));
    let ys = members
        .iter()
        .map(|(_, p)| p.features()[1])
        .chain(clusters.iter().map(|c| c.centroid().features()[1]));
    let x_min = xs.clone().fold(f64::INFINITY, f64::min) - 0.5;
    let x_max = xs.fold(f64::NEG_INFINITY, f64::max) + 0.5;
    let y_min = ys.clone().fold(f64::INFINITY, f64::min) - 0.5;
    let y_max = ys.fold(f64::NEG_INFINITY, f64::max) + 0.5;

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Feature 1")
        .y_desc("Feature 2")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    for &(cluster_id, point) in &members {
        let color = CLUSTER_COLORS[cluster_id % CLUSTER_COLORS.len()];
        let x = point.features()[0];
        let y = point.features()[1];
        chart.draw_series(std::iter::once(Circle::new((x, y), 4, color.filled())))?;
    }

    // Centroids as larger squares
    for (cluster_id, cluster) in clusters.iter().enumerate() {
        let color = CLUSTER_COLORS[cluster_id % CLUSTER_COLORS.len()];
        let cx = cluster.centroid().features()[0];
        let cy = cluster.centroid().features()[1];

        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(cx - 0.1, cy - 0.1), (cx + 0.1, cy + 0.1)],
                color.filled(),
            )))?
            .label(format!("Cluster {} centroid", cluster_id + 1))
            .legend(move |(x, y)| Rectangle::new([(x, y), (x + 10, y + 10)], color.filled()));
    }

    chart.configure_series_labels().draw()?;
    root.present()?;

    Ok(())
}
