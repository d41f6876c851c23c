// =========================================================================
// FALSIFY-RD: Agglomerative reduction contract (agrupar cluster)
//
// References:
//   - Ward (1963) "Hierarchical grouping to optimize an objective function"
// =========================================================================

use super::*;

fn unlabeled(points: &[&[f32]]) -> LabeledDataset {
    LabeledDataset::new(
        points.iter().map(|p| Point::from_slice(p)).collect(),
        vec![0; points.len()],
    )
    .expect("valid dataset")
}

/// FALSIFY-RD-001: Weight sum equals original point count after any merges
#[test]
fn falsify_rd_001_weight_conservation() {
    let d = unlabeled(&[&[0.0], &[0.1], &[5.0], &[5.1], &[9.0], &[9.2]]);
    let mut cs = ClusterSet::from_dataset(&d);

    for target in (1..=5).rev() {
        cs.reduce_to(target).expect("reduction succeeds");
        assert_eq!(
            cs.total_weight(),
            6,
            "FALSIFIED RD-001: weight sum {} at {} clusters, expected 6",
            cs.total_weight(),
            cs.len()
        );
    }
}

/// FALSIFY-RD-002: reduce_to lands exactly on the target count
#[test]
fn falsify_rd_002_reduce_to_exact() {
    let d = unlabeled(&[&[0.0], &[1.0], &[2.0], &[3.0], &[4.0]]);

    for target in 1..=5 {
        let mut cs = ClusterSet::from_dataset(&d);
        cs.reduce_to(target).expect("reduction succeeds");
        assert_eq!(
            cs.len(),
            target,
            "FALSIFIED RD-002: len={} after reduce_to({target})",
            cs.len()
        );
    }
}

/// FALSIFY-RD-003: reduce_to is idempotent for same-or-larger targets
#[test]
fn falsify_rd_003_reduce_to_idempotent() {
    let d = unlabeled(&[&[0.0], &[1.0], &[2.0], &[3.0]]);
    let mut cs = ClusterSet::from_dataset(&d);

    cs.reduce_to(2).expect("reduction succeeds");
    let centroids_after: Vec<Vec<f32>> = cs.centroids().iter().map(|c| c.as_slice().to_vec()).collect();

    cs.reduce_to(2).expect("no-op succeeds");
    cs.reduce_to(4).expect("no-op succeeds");

    let centroids_now: Vec<Vec<f32>> = cs.centroids().iter().map(|c| c.as_slice().to_vec()).collect();
    assert_eq!(
        centroids_now, centroids_after,
        "FALSIFIED RD-003: repeated reduce_to mutated the set"
    );
}

/// FALSIFY-RD-004: Equidistant pairs resolve to the first in scan order
#[test]
fn falsify_rd_004_closest_pair_tie_break() {
    // Pairs (0,1) and (2,3) are both at distance 1; (0,1) scans first.
    let d = unlabeled(&[&[0.0], &[1.0], &[100.0], &[101.0]]);
    let cs = ClusterSet::from_dataset(&d);

    let pair = cs.closest_pair().expect("four clusters");
    assert_eq!(
        pair,
        (0, 1),
        "FALSIFIED RD-004: tie resolved to {pair:?}, expected (0, 1)"
    );
}

/// FALSIFY-RD-005: Weighted centroid of weights 2 and 3 at [0,0] and [5,5]
#[test]
fn falsify_rd_005_weighted_centroid() {
    // Build weight 2 at [0,0] and weight 3 at [5,5] through real merges.
    let d = unlabeled(&[&[0.0, 0.0], &[0.0, 0.0], &[5.0, 5.0], &[5.0, 5.0], &[5.0, 5.0]]);
    let mut cs = ClusterSet::from_dataset(&d);
    cs.reduce_to(2).expect("reduction succeeds");

    let heavy = (0..cs.len()).find(|&i| cs.weight(i) == 3).expect("weight-3 cluster");
    let light = (0..cs.len()).find(|&i| cs.weight(i) == 2).expect("weight-2 cluster");
    assert_eq!(cs.centroid(heavy).as_slice(), &[5.0, 5.0]);
    assert_eq!(cs.centroid(light).as_slice(), &[0.0, 0.0]);

    cs.reduce_to(1).expect("final merge succeeds");
    assert_eq!(cs.weight(0), 5, "FALSIFIED RD-005: merged weight");
    assert_eq!(
        cs.centroid(0).as_slice(),
        &[3.0, 3.0],
        "FALSIFIED RD-005: (2*0 + 3*5)/5 = 3 per coordinate"
    );
}

/// FALSIFY-RD-006: A reduction step decreases len by exactly one
#[test]
fn falsify_rd_006_single_step_shrink() {
    let d = unlabeled(&[&[0.0], &[3.0], &[7.0]]);
    let mut cs = ClusterSet::from_dataset(&d);

    cs.reduce_one_step().expect("three clusters");
    assert_eq!(cs.len(), 2, "FALSIFIED RD-006: len={}", cs.len());
    cs.reduce_one_step().expect("two clusters");
    assert_eq!(cs.len(), 1, "FALSIFIED RD-006: len={}", cs.len());
    assert!(
        cs.reduce_one_step().is_err(),
        "FALSIFIED RD-006: single cluster must not reduce"
    );
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_points(max_len: usize) -> impl Strategy<Value = Vec<Vec<f32>>> {
        prop::collection::vec(
            prop::collection::vec(-100.0_f32..100.0, 3),
            2..max_len,
        )
    }

    proptest! {
        /// Any reduction sequence conserves the total weight.
        #[test]
        fn prop_weight_conserved(points in arb_points(20), target in 1_usize..20) {
            let n = points.len();
            let d = LabeledDataset::new(
                points.into_iter().map(Point::from_vec).collect(),
                vec![0; n],
            ).expect("valid dataset");

            let mut cs = ClusterSet::from_dataset(&d);
            let target = target.min(n);
            cs.reduce_to(target).expect("reduction succeeds");

            prop_assert_eq!(cs.total_weight(), n);
            prop_assert_eq!(cs.len(), target);
        }

        /// Every weight stays positive across reductions.
        #[test]
        fn prop_weights_positive(points in arb_points(15)) {
            let n = points.len();
            let d = LabeledDataset::new(
                points.into_iter().map(Point::from_vec).collect(),
                vec![0; n],
            ).expect("valid dataset");

            let mut cs = ClusterSet::from_dataset(&d);
            cs.reduce_to(1).expect("reduction succeeds");
            prop_assert!(cs.weights().iter().all(|&w| w >= 1));
            prop_assert_eq!(cs.weight(0), n);
        }
    }
}
