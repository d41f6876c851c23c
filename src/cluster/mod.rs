//! Agglomerative clustering over weighted centroids.
//!
//! A [`ClusterSet`] starts with one centroid per data point and is reduced
//! in place by repeatedly merging the two closest centroids, down to a
//! target cluster count.
//!
//! # Algorithm
//!
//! 1. Seed one centroid per input point, weight 1
//! 2. Find the closest pair of centroids (squared Euclidean distance)
//! 3. Replace the pair with its weighted average, summing weights
//! 4. Repeat until the target cluster count is reached
//!
//! # Performance
//!
//! Each reduction step scans all pairs, O(k²) in the number of live
//! clusters, so reducing n points to k clusters costs O(n³) in the worst
//! case. Correctness over asymptotics: the scan order is what makes
//! tie-breaking deterministic.

use crate::dataset::LabeledDataset;
use crate::error::{AgruparError, Result};
use crate::primitives::Point;
use serde::{Deserialize, Serialize};

/// A mutable collection of weighted centroids.
///
/// Each entry pairs a centroid position with the count of original data
/// points absorbed into it. The sum of weights stays equal to the size of
/// the originating dataset across any sequence of merges.
///
/// # Examples
///
/// ```
/// use agrupar::cluster::ClusterSet;
/// use agrupar::dataset::LabeledDataset;
/// use agrupar::primitives::Point;
///
/// let d = LabeledDataset::new(
///     vec![
///         Point::from_slice(&[0.0, 0.0]),
///         Point::from_slice(&[0.0, 1.0]),
///         Point::from_slice(&[10.0, 10.0]),
///         Point::from_slice(&[10.0, 11.0]),
///     ],
///     vec![0, 0, 1, 1],
/// ).unwrap();
///
/// let mut clusters = ClusterSet::from_dataset(&d);
/// clusters.reduce_to(2).unwrap();
/// assert_eq!(clusters.len(), 2);
/// assert_eq!(clusters.total_weight(), 4);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSet {
    centroids: Vec<Point>,
    weights: Vec<usize>,
}

impl ClusterSet {
    /// Builds a cluster set with one centroid per dataset point.
    ///
    /// Every centroid is a copy of its point with weight 1, in dataset
    /// order. No merging happens here.
    #[must_use]
    pub fn from_dataset(d: &LabeledDataset) -> Self {
        Self {
            centroids: d.points().to_vec(),
            weights: vec![1; d.len()],
        }
    }

    /// Returns the current number of clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.centroids.len()
    }

    /// Returns true if the set holds no clusters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.centroids.is_empty()
    }

    /// Returns the shared dimension of the centroids (0 when empty).
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.centroids.first().map_or(0, Point::dimension)
    }

    /// Returns the centroid at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn centroid(&self, i: usize) -> &Point {
        &self.centroids[i]
    }

    /// Returns the weight at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn weight(&self, i: usize) -> usize {
        self.weights[i]
    }

    /// Returns all centroids as a slice.
    #[must_use]
    pub fn centroids(&self) -> &[Point] {
        &self.centroids
    }

    /// Returns all weights as a slice.
    #[must_use]
    pub fn weights(&self) -> &[usize] {
        &self.weights
    }

    /// Returns the sum of all cluster weights.
    ///
    /// Merging conserves this sum, so it equals the size of the dataset
    /// the set was built from.
    #[must_use]
    pub fn total_weight(&self) -> usize {
        self.weights.iter().sum()
    }

    /// Finds the indices `(i, j)` with `i < j` of the two closest
    /// centroids.
    ///
    /// Scans all unordered pairs in increasing (i, then j) order; a strict
    /// `<` comparison keeps the earliest-found minimum, so ties resolve
    /// deterministically to the first pair encountered.
    ///
    /// # Errors
    ///
    /// Returns `EmptyClusterSet` if fewer than two clusters are present.
    pub fn closest_pair(&self) -> Result<(usize, usize)> {
        if self.len() < 2 {
            return Err(AgruparError::EmptyClusterSet {
                required: 2,
                actual: self.len(),
            });
        }

        let mut best = (0, 1);
        let mut best_dist = f32::INFINITY;

        for i in 0..self.len() {
            for j in (i + 1)..self.len() {
                let dist = self.centroids[i].squared_distance_unchecked(&self.centroids[j]);
                if dist < best_dist {
                    best_dist = dist;
                    best = (i, j);
                }
            }
        }

        Ok(best)
    }

    /// Merges cluster `j` into cluster `i`.
    ///
    /// The merged centroid is the weighted average of the two positions,
    /// stored at `i` with the summed weight. Entry `j` is then removed by
    /// swapping in the last entry: removal does NOT preserve the order of
    /// surviving clusters. That is the price of O(1) deletion; callers
    /// must not rely on stable indices across merges.
    ///
    /// # Errors
    ///
    /// Returns an error unless `i < j < len()`.
    pub fn merge(&mut self, i: usize, j: usize) -> Result<()> {
        if i >= j || j >= self.len() {
            return Err(format!(
                "merge requires i < j < len, got i={i}, j={j}, len={}",
                self.len()
            )
            .into());
        }

        let wi = self.weights[i] as f32;
        let wj = self.weights[j] as f32;
        let total = wi + wj;

        let merged: Vec<f32> = self.centroids[i]
            .as_slice()
            .iter()
            .zip(self.centroids[j].as_slice().iter())
            .map(|(a, b)| (wi * a + wj * b) / total)
            .collect();

        self.centroids[i] = Point::from_vec(merged);
        self.weights[i] += self.weights[j];
        self.centroids.swap_remove(j);
        self.weights.swap_remove(j);

        Ok(())
    }

    /// Performs one reduction step: merge the two closest clusters.
    ///
    /// Decreases `len()` by exactly 1.
    ///
    /// # Errors
    ///
    /// Returns `EmptyClusterSet` if fewer than two clusters are present.
    pub fn reduce_one_step(&mut self) -> Result<()> {
        let (i, j) = self.closest_pair()?;
        self.merge(i, j)
    }

    /// Reduces the set until at most `target` clusters remain.
    ///
    /// A no-op if the set is already at or below the target, which also
    /// makes the call idempotent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` if `target < 1`.
    pub fn reduce_to(&mut self, target: usize) -> Result<()> {
        if target < 1 {
            return Err(AgruparError::InvalidHyperparameter {
                param: "target".to_string(),
                value: target.to_string(),
                constraint: ">= 1".to_string(),
            });
        }

        while self.len() > target {
            self.reduce_one_step()?;
        }

        Ok(())
    }

    /// Finds the index of the centroid closest to `p`.
    ///
    /// Linear scan with the same earliest-minimum tie-break as
    /// [`closest_pair`](Self::closest_pair). Shared by classifier fitting
    /// and prediction.
    ///
    /// # Errors
    ///
    /// Returns `EmptyClusterSet` on an empty set and `DimensionMismatch`
    /// if `p` disagrees with the centroid dimension.
    pub fn nearest(&self, p: &Point) -> Result<usize> {
        if self.is_empty() {
            return Err(AgruparError::EmptyClusterSet {
                required: 1,
                actual: 0,
            });
        }
        if p.dimension() != self.dimension() {
            return Err(AgruparError::dimension_mismatch(
                "dimension",
                self.dimension(),
                p.dimension(),
            ));
        }

        let mut best = 0;
        let mut best_dist = f32::INFINITY;

        for (idx, centroid) in self.centroids.iter().enumerate() {
            let dist = centroid.squared_distance_unchecked(p);
            if dist < best_dist {
                best_dist = dist;
                best = idx;
            }
        }

        Ok(best)
    }
}

#[cfg(test)]
#[path = "tests_reduction_contract.rs"]
mod tests_reduction_contract;
