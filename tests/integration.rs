//! Integration tests for ClusterKit

use std::io::Write;

use tempfile::NamedTempFile;

use clusterkit::{
    cluster_sizes, load_from_csv, Cluster, ClusterError, ClusteringAlgorithm,
    DistanceMetric, HierarchicalClustering, KMeans, LinkageType,
};

/// Create a test CSV file with two well separated groups of points
fn create_test_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "x,y,label").unwrap();
    writeln!(file, "0.0,0.0,a").unwrap();
    writeln!(file, "0.0,1.0,b").unwrap();
    writeln!(file, "8.0,8.0,c").unwrap();
    writeln!(file, "8.0,9.0,d").unwrap();
    file
}

fn sorted_member_labels(cluster: &Cluster<'_>) -> Vec<String> {
    let mut labels: Vec<String> = cluster
        .points()
        .iter()
        .map(|p| p.label().unwrap_or_default().to_string())
        .collect();
    labels.sort();
    labels
}

#[test]
fn test_end_to_end_hierarchical_pipeline() {
    let file = create_test_csv();
    let points = load_from_csv(file.path().to_str().unwrap()).unwrap();
    assert_eq!(points.len(), 4);

    let model = HierarchicalClustering::new(DistanceMetric::Euclidean, LinkageType::Single, 2);
    let clusters = model.fit(&points).unwrap();

    // Nearest pairs merge first, splitting the file into its two groups
    let mut groups: Vec<Vec<String>> = clusters.iter().map(sorted_member_labels).collect();
    groups.sort();
    assert_eq!(groups, vec![vec!["a", "b"], vec!["c", "d"]]);
}

#[test]
fn test_end_to_end_kmeans_pipeline() {
    let file = create_test_csv();
    let points = load_from_csv(file.path().to_str().unwrap()).unwrap();

    let model = KMeans::new(2, 25, DistanceMetric::Euclidean).with_seed(42);
    let clusters = model.fit(&points).unwrap();

    // Exactly k clusters, memberships partition the input
    assert_eq!(clusters.len(), 2);
    assert_eq!(cluster_sizes(&clusters).iter().sum::<usize>(), 4);

    let mut all_labels: Vec<String> = clusters
        .iter()
        .flat_map(|c| sorted_member_labels(c))
        .collect();
    all_labels.sort();
    assert_eq!(all_labels, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_kmeans_k1_centroid_is_dataset_mean() {
    let file = create_test_csv();
    let points = load_from_csv(file.path().to_str().unwrap()).unwrap();

    let model = KMeans::new(1, 10, DistanceMetric::Manhattan).with_seed(7);
    let clusters = model.fit(&points).unwrap();

    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].len(), 4);
    let centroid = clusters[0].centroid().features();
    assert!((centroid[0] - 4.0).abs() < 1e-12);
    assert!((centroid[1] - 4.5).abs() < 1e-12);
}

#[test]
fn test_header_only_file_fails_as_empty_dataset() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "x,y,label").unwrap();

    let points = load_from_csv(file.path().to_str().unwrap()).unwrap();
    assert!(points.is_empty());

    let kmeans = KMeans::new(2, 10, DistanceMetric::Euclidean);
    assert!(matches!(kmeans.fit(&points), Err(ClusterError::EmptyDataset)));

    let hierarchical =
        HierarchicalClustering::new(DistanceMetric::Euclidean, LinkageType::Complete, 2);
    assert!(matches!(
        hierarchical.fit(&points),
        Err(ClusterError::EmptyDataset)
    ));
}

#[test]
fn test_malformed_row_fails_whole_load() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "x,y,label").unwrap();
    writeln!(file, "1.0,2.0,a").unwrap();
    writeln!(file, "not-a-number,2.0,b").unwrap();

    let result = load_from_csv(file.path().to_str().unwrap());
    assert!(matches!(
        result,
        Err(ClusterError::MalformedInput { line: 3, .. })
    ));
}

#[test]
fn test_algorithms_share_the_fit_contract() {
    let file = create_test_csv();
    let points = load_from_csv(file.path().to_str().unwrap()).unwrap();

    let algorithms: Vec<Box<dyn ClusteringAlgorithm>> = vec![
        Box::new(KMeans::new(2, 10, DistanceMetric::Euclidean).with_seed(1)),
        Box::new(HierarchicalClustering::new(
            DistanceMetric::Euclidean,
            LinkageType::Single,
            2,
        )),
    ];

    for algorithm in &algorithms {
        let clusters = algorithm.fit(&points).unwrap();
        assert_eq!(clusters.len(), 2);
        assert_eq!(cluster_sizes(&clusters).iter().sum::<usize>(), points.len());
    }
}
