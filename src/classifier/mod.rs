//! Nearest-centroid classification with majority-vote labeling.
//!
//! A [`NearestCentroidClassifier`] freezes a reduced [`ClusterSet`] and
//! assigns each cluster the label most of its nearest training points
//! carry. Prediction is then a nearest-centroid lookup through that
//! translation table.

use crate::cluster::ClusterSet;
use crate::dataset::LabeledDataset;
use crate::error::{AgruparError, Result};
use crate::primitives::Point;
use serde::{Deserialize, Serialize};

/// An immutable snapshot of a cluster set plus its cluster → label table.
///
/// The classifier owns a deep copy of the cluster set it was fitted from,
/// so continued reduction of the live set cannot corrupt an issued model.
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
///
/// let model = NearestCentroidClassifier::fit(&clusters, &train).unwrap();
/// assert_eq!(model.predict(&Point::from_slice(&[0.0, 0.2])).unwrap(), 0);
/// assert_eq!(model.predict(&Point::from_slice(&[10.0, 10.8])).unwrap(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearestCentroidClassifier {
    clusters: ClusterSet,
    translation: Vec<usize>,
}

impl NearestCentroidClassifier {
    /// Fits a classifier by voting training labels onto clusters.
    ///
    /// Each training point votes its label into the cluster whose centroid
    /// is nearest. A cluster's translation is the earliest label whose
    /// vote count strictly exceeds the running best, which keeps ties
    /// deterministic. A cluster that receives no votes at all keeps label
    /// 0: with every count at zero, nothing ever strictly exceeds the
    /// initial best. That default is part of the contract, not an
    /// accident.
    ///
    /// # Errors
    ///
    /// Returns `EmptyClusterSet` if `clusters` is empty, or
    /// `DimensionMismatch` if the training points disagree with the
    /// centroid dimension.
    pub fn fit(clusters: &ClusterSet, train: &LabeledDataset) -> Result<Self> {
        if clusters.is_empty() {
            return Err(AgruparError::EmptyClusterSet {
                required: 1,
                actual: 0,
            });
        }

        let clusters = clusters.clone();
        let mut freq = vec![vec![0usize; train.n_labels()]; clusters.len()];

        for (point, label) in train.iter() {
            let nearest = clusters.nearest(point)?;
            freq[nearest][label] += 1;
        }

        let translation = freq.iter().map(|counts| majority_label(counts)).collect();

        Ok(Self {
            clusters,
            translation,
        })
    }

    /// Returns the number of clusters in the snapshot.
    #[must_use]
    pub fn n_clusters(&self) -> usize {
        self.clusters.len()
    }

    /// Returns the frozen cluster set.
    #[must_use]
    pub fn clusters(&self) -> &ClusterSet {
        &self.clusters
    }

    /// Returns the cluster → label translation table.
    #[must_use]
    pub fn translation(&self) -> &[usize] {
        &self.translation
    }

    /// Predicts the label of a point.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `p` disagrees with the centroid
    /// dimension.
    pub fn predict(&self, p: &Point) -> Result<usize> {
        let nearest = self.clusters.nearest(p)?;
        Ok(self.translation[nearest])
    }
}

/// Index of the maximum vote count, earliest index winning ties.
///
/// The running best starts at label 0's count and only a strictly greater
/// count displaces it; an all-zero row therefore yields label 0.
fn majority_label(counts: &[usize]) -> usize {
    let mut best_label = 0;
    let mut best_count = counts.first().copied().unwrap_or(0);

    for (label, &count) in counts.iter().enumerate().skip(1) {
        if count > best_count {
            best_count = count;
            best_label = label;
        }
    }

    best_label
}

#[cfg(test)]
#[path = "tests_translation_contract.rs"]
mod tests_translation_contract;
