// =========================================================================
// FALSIFY-TR: Cluster-to-label translation contract (agrupar classifier)
// =========================================================================

use super::*;

/// FALSIFY-TR-001: A cluster with zero training votes translates to label 0
#[test]
fn falsify_tr_001_unvoted_cluster_defaults_to_zero() {
    // Train points all sit near (0,0) with label 2; the far centroid at
    // (100,100) attracts none of them.
    let train = LabeledDataset::new(
        vec![
            Point::from_slice(&[0.0, 0.0]),
            Point::from_slice(&[0.5, 0.5]),
        ],
        vec![2, 2],
    )
    .expect("valid dataset");

    let anchors = LabeledDataset::new(
        vec![
            Point::from_slice(&[0.0, 0.0]),
            Point::from_slice(&[100.0, 100.0]),
        ],
        vec![0, 0],
    )
    .expect("valid dataset");
    let clusters = ClusterSet::from_dataset(&anchors);

    let model = NearestCentroidClassifier::fit(&clusters, &train).expect("fit succeeds");
    assert_eq!(
        model.translation()[0],
        2,
        "FALSIFIED TR-001: voted cluster should carry the majority label"
    );
    assert_eq!(
        model.translation()[1],
        0,
        "FALSIFIED TR-001: unvoted cluster must default to label 0"
    );
}

/// FALSIFY-TR-002: Vote ties resolve to the lowest label index
#[test]
fn falsify_tr_002_tie_resolves_to_earliest_label() {
    // One cluster, two votes each for labels 1 and 2; label 1 must win.
    let train = LabeledDataset::new(
        vec![
            Point::from_slice(&[0.0]),
            Point::from_slice(&[0.1]),
            Point::from_slice(&[-0.1]),
            Point::from_slice(&[0.2]),
        ],
        vec![1, 1, 2, 2],
    )
    .expect("valid dataset");

    let anchor = LabeledDataset::new(vec![Point::from_slice(&[0.0])], vec![0]).expect("valid");
    let clusters = ClusterSet::from_dataset(&anchor);

    let model = NearestCentroidClassifier::fit(&clusters, &train).expect("fit succeeds");
    assert_eq!(
        model.translation()[0],
        1,
        "FALSIFIED TR-002: tie resolved to {}, expected 1",
        model.translation()[0]
    );
}

/// FALSIFY-TR-003: Majority vote picks the most frequent label per cluster
#[test]
fn falsify_tr_003_majority_wins() {
    let train = LabeledDataset::new(
        vec![
            Point::from_slice(&[0.0]),
            Point::from_slice(&[0.1]),
            Point::from_slice(&[0.2]),
            Point::from_slice(&[10.0]),
            Point::from_slice(&[10.1]),
        ],
        vec![1, 1, 0, 0, 0],
    )
    .expect("valid dataset");

    let anchors = LabeledDataset::new(
        vec![Point::from_slice(&[0.0]), Point::from_slice(&[10.0])],
        vec![0, 0],
    )
    .expect("valid dataset");
    let clusters = ClusterSet::from_dataset(&anchors);

    let model = NearestCentroidClassifier::fit(&clusters, &train).expect("fit succeeds");
    // Cluster 0 sees labels {1, 1, 0} -> 1; cluster 1 sees {0, 0} -> 0.
    assert_eq!(model.translation(), &[1, 0], "FALSIFIED TR-003");
}
