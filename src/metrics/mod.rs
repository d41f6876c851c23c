//! Evaluation metrics for nearest-centroid classifiers.
//!
//! [`evaluate`] scores a classifier against a held-out dataset, producing
//! overall accuracy, per-label hit/miss statistics, and an unweighted
//! average of per-label accuracies.

use crate::classifier::NearestCentroidClassifier;
use crate::dataset::LabeledDataset;
use crate::error::Result;

/// Hit/miss counts for one label, indexed by the true label of each test
/// point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelStats {
    /// Test points with this true label that were predicted correctly.
    pub hits: usize,
    /// Test points with this true label that were predicted incorrectly.
    pub misses: usize,
}

impl LabelStats {
    /// Accuracy for this label, or `None` when the label never occurs in
    /// the test set.
    ///
    /// The `None` sentinel makes the 0/0 case explicit instead of
    /// coercing it to 0 or 1; callers decide how to fold it into
    /// aggregates.
    #[must_use]
    pub fn accuracy(&self) -> Option<f32> {
        let total = self.hits + self.misses;
        if total == 0 {
            None
        } else {
            Some(self.hits as f32 / total as f32)
        }
    }
}

/// The outcome of scoring a classifier against a test dataset.
///
/// Distinguishes two aggregate metrics:
///
/// - [`overall_accuracy`](Self::overall_accuracy) weights every test point
///   equally, so frequent labels dominate it.
/// - [`average_label_accuracy`](Self::average_label_accuracy) weights
///   every label equally, regardless of how many test points carry it.
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    label_stats: Vec<LabelStats>,
    total_hits: usize,
    total_count: usize,
}

impl EvaluationReport {
    /// Returns the per-label hit/miss statistics, indexed by label.
    #[must_use]
    pub fn label_stats(&self) -> &[LabelStats] {
        &self.label_stats
    }

    /// Returns the number of labels the report covers.
    #[must_use]
    pub fn n_labels(&self) -> usize {
        self.label_stats.len()
    }

    /// Returns the number of correctly classified test points.
    #[must_use]
    pub fn total_hits(&self) -> usize {
        self.total_hits
    }

    /// Returns the number of test points scored.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Fraction of all test points classified correctly.
    ///
    /// This is `total_hits / total_count` exactly, weighted by class
    /// frequency.
    #[must_use]
    pub fn overall_accuracy(&self) -> f32 {
        self.total_hits as f32 / self.total_count as f32
    }

    /// Accuracy for one label, or `None` when the label never occurs in
    /// the test set (or is out of range).
    #[must_use]
    pub fn label_accuracy(&self, label: usize) -> Option<f32> {
        self.label_stats.get(label).and_then(LabelStats::accuracy)
    }

    /// Unweighted mean of per-label accuracies over the labels that are
    /// defined.
    ///
    /// Labels absent from the test set are excluded from the mean (see
    /// [`undefined_labels`](Self::undefined_labels) for how many were
    /// skipped). Returns 0.0 if no label is defined.
    #[must_use]
    pub fn average_label_accuracy(&self) -> f32 {
        let defined: Vec<f32> = self
            .label_stats
            .iter()
            .filter_map(LabelStats::accuracy)
            .collect();

        if defined.is_empty() {
            return 0.0;
        }

        defined.iter().sum::<f32>() / defined.len() as f32
    }

    /// Number of labels with zero test occurrences, excluded from
    /// [`average_label_accuracy`](Self::average_label_accuracy).
    #[must_use]
    pub fn undefined_labels(&self) -> usize {
        self.label_stats
            .iter()
            .filter(|s| s.accuracy().is_none())
            .count()
    }
}

/// Scores a classifier against a held-out dataset.
///
/// Every test point is predicted and compared to its true label; hits and
/// misses accumulate globally and per true label.
///
/// # Errors
///
/// Returns an error if the test set is empty (overall accuracy would be
/// 0/0) or if prediction fails on a dimension mismatch.
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
/// let mut clusters = ClusterSet::from_dataset(&train);
/// clusters.reduce_to(2).unwrap();
/// let model = NearestCentroidClassifier::fit(&clusters, &train).unwrap();
///
/// let report = evaluate(&model, &train).unwrap();
/// assert_eq!(report.overall_accuracy(), 1.0);
/// ```
pub fn evaluate(
    classifier: &NearestCentroidClassifier,
    test: &LabeledDataset,
) -> Result<EvaluationReport> {
    if test.is_empty() {
        return Err("cannot evaluate against an empty dataset".into());
    }

    let mut label_stats = vec![LabelStats::default(); test.n_labels()];
    let mut total_hits = 0;

    for (point, truth) in test.iter() {
        let predicted = classifier.predict(point)?;
        if predicted == truth {
            label_stats[truth].hits += 1;
            total_hits += 1;
        } else {
            label_stats[truth].misses += 1;
        }
    }

    Ok(EvaluationReport {
        label_stats,
        total_hits,
        total_count: test.len(),
    })
}
