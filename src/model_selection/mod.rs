//! Train/test splitting and cluster-count sweeps.
//!
//! The sweep is the model-selection loop of this crate: reduce one live
//! cluster set through candidate cluster counts, snapshotting a classifier
//! and an evaluation report at each count. All printing belongs to the
//! caller; the sweep only produces data.

use crate::classifier::NearestCentroidClassifier;
use crate::cluster::ClusterSet;
use crate::dataset::LabeledDataset;
use crate::error::{AgruparError, Result};
use crate::metrics::{evaluate, EvaluationReport};

/// The outcome of evaluating one candidate cluster count.
#[derive(Debug, Clone)]
pub struct SweepPoint {
    /// Cluster count this point was evaluated at.
    pub n_clusters: usize,
    /// Classifier snapshotted at this count.
    pub classifier: NearestCentroidClassifier,
    /// Evaluation of that classifier against the test set.
    pub report: EvaluationReport,
    /// True when this count's overall accuracy strictly exceeds every
    /// earlier count's.
    pub is_best_so_far: bool,
}

/// Sweeps candidate cluster counts from `min(max_clusters, n)` down to 1.
///
/// One cluster set is built from `train` and reduced stepwise, so the work
/// of earlier reductions is reused rather than redone per count. At each
/// count the live set is snapshotted into a classifier (fitted against
/// `train`) and scored against `test`.
///
/// # Errors
///
/// Returns `InvalidHyperparameter` if `max_clusters < 1`, and the usual
/// dataset errors if `train` or `test` is empty or dimensions disagree.
///
/// # Examples
///
/// ```
/// use agrupar::prelude::*;
///
/// let train = LabeledDataset::new(
///     vec![
///         Point::from_slice(&[0.0, 0.0]),
///         Point::from_slice(&[0.0, 1.0]),
///         Point::from_slice(&[10.0, 10.0]),
///         Point::from_slice(&[10.0, 11.0]),
///     ],
///     vec![0, 0, 1, 1],
/// ).unwrap();
///
/// let results = sweep_cluster_counts(&train, &train, 4).unwrap();
/// assert_eq!(results.len(), 4);
/// assert_eq!(results[0].n_clusters, 4);
/// assert!(results[0].is_best_so_far);
/// ```
pub fn sweep_cluster_counts(
    train: &LabeledDataset,
    test: &LabeledDataset,
    max_clusters: usize,
) -> Result<Vec<SweepPoint>> {
    if max_clusters < 1 {
        return Err(AgruparError::InvalidHyperparameter {
            param: "max_clusters".to_string(),
            value: max_clusters.to_string(),
            constraint: ">= 1".to_string(),
        });
    }
    if train.is_empty() {
        return Err("cannot sweep an empty training dataset".into());
    }

    let mut live = ClusterSet::from_dataset(train);
    let start = max_clusters.min(live.len());

    let mut results = Vec::with_capacity(start);
    let mut best_accuracy = f32::NEG_INFINITY;

    for target in (1..=start).rev() {
        live.reduce_to(target)?;

        let classifier = NearestCentroidClassifier::fit(&live, train)?;
        let report = evaluate(&classifier, test)?;

        let accuracy = report.overall_accuracy();
        let is_best_so_far = accuracy > best_accuracy;
        if is_best_so_far {
            best_accuracy = accuracy;
        }

        results.push(SweepPoint {
            n_clusters: target,
            classifier,
            report,
            is_best_so_far,
        });
    }

    Ok(results)
}

/// Validates sizes for a train/test split.
fn validate_split_inputs(d: &LabeledDataset, test_size: f32) -> Result<(usize, usize)> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(AgruparError::InvalidHyperparameter {
            param: "test_size".to_string(),
            value: test_size.to_string(),
            constraint: "between 0 and 1 exclusive".to_string(),
        });
    }

    let n_samples = d.len();
    let n_test = (n_samples as f32 * test_size).round() as usize;
    let n_train = n_samples - n_test;

    if n_test == 0 || n_train == 0 {
        return Err(format!(
            "split would leave an empty side (n_train={n_train}, n_test={n_test})"
        )
        .into());
    }

    Ok((n_train, n_test))
}

/// Shuffles sample indices with an optional random seed.
fn shuffle_indices(n_samples: usize, random_state: Option<u64>) -> Vec<usize> {
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    let mut indices: Vec<usize> = (0..n_samples).collect();

    if let Some(seed) = random_state {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);
    } else {
        let mut rng = rand::thread_rng();
        indices.shuffle(&mut rng);
    }

    indices
}

/// Extracts the subset of a dataset selected by `indices`.
fn extract_samples(d: &LabeledDataset, indices: &[usize]) -> Result<LabeledDataset> {
    let points = indices.iter().map(|&i| d.point(i).clone()).collect();
    let labels = indices.iter().map(|&i| d.label(i)).collect();
    LabeledDataset::new(points, labels)
}

/// Splits a dataset into shuffled train and test halves.
///
/// With `random_state` set the shuffle is reproducible; without it the
/// thread RNG decides. Each returned dataset recomputes its own label
/// count from its contents.
///
/// # Errors
///
/// Returns `InvalidHyperparameter` for a `test_size` outside (0, 1) and a
/// generic error when either side of the split would be empty.
///
/// # Examples
///
/// ```
/// use agrupar::prelude::*;
///
/// let d = LabeledDataset::new(
///     (0..10).map(|i| Point::from_slice(&[i as f32])).collect(),
///     vec![0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
/// ).unwrap();
///
/// let (train, test) = train_test_split(&d, 0.2, Some(42)).unwrap();
/// assert_eq!(train.len(), 8);
/// assert_eq!(test.len(), 2);
/// ```
pub fn train_test_split(
    d: &LabeledDataset,
    test_size: f32,
    random_state: Option<u64>,
) -> Result<(LabeledDataset, LabeledDataset)> {
    let (n_train, _) = validate_split_inputs(d, test_size)?;

    let indices = shuffle_indices(d.len(), random_state);
    let train = extract_samples(d, &indices[..n_train])?;
    let test = extract_samples(d, &indices[n_train..])?;

    Ok((train, test))
}
