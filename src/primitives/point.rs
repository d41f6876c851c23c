//! Point type for fixed-dimension numeric data.

use crate::error::{AgruparError, Result};
use serde::{Deserialize, Serialize};

/// A point in d-dimensional space, backed by an owned coordinate buffer.
///
/// Points read from input stay immutable; `Clone` provides the deep copy
/// used wherever a centroid accumulator or model snapshot needs its own
/// storage.
///
/// # Examples
///
/// ```
/// use agrupar::primitives::Point;
///
/// let p = Point::from_slice(&[1.0, 2.0, 3.0]);
/// assert_eq!(p.dimension(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    coords: Vec<f32>,
}

impl Point {
    /// Creates a point from an owned coordinate vector.
    #[must_use]
    pub fn from_vec(coords: Vec<f32>) -> Self {
        Self { coords }
    }

    /// Creates a point by copying a coordinate slice.
    #[must_use]
    pub fn from_slice(coords: &[f32]) -> Self {
        Self {
            coords: coords.to_vec(),
        }
    }

    /// Creates the origin of a d-dimensional space.
    #[must_use]
    pub fn zeros(dimension: usize) -> Self {
        Self {
            coords: vec![0.0; dimension],
        }
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// Gets the coordinate at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn get(&self, i: usize) -> f32 {
        self.coords[i]
    }

    /// Returns the coordinates as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.coords
    }

    /// Computes the squared Euclidean distance to another point.
    ///
    /// No square root is taken anywhere in this crate: only the relative
    /// ordering of distances matters, and squaring preserves it.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the points have different
    /// dimensionality.
    ///
    /// # Examples
    ///
    /// ```
    /// use agrupar::primitives::Point;
    ///
    /// let a = Point::from_slice(&[0.0, 0.0]);
    /// let b = Point::from_slice(&[3.0, 4.0]);
    /// assert_eq!(a.squared_distance(&b).unwrap(), 25.0);
    /// ```
    pub fn squared_distance(&self, other: &Point) -> Result<f32> {
        if self.dimension() != other.dimension() {
            return Err(AgruparError::dimension_mismatch(
                "dimension",
                self.dimension(),
                other.dimension(),
            ));
        }
        Ok(self.squared_distance_unchecked(other))
    }

    /// Squared distance without the dimension check.
    ///
    /// Callers must hold the uniform-dimension invariant (all points in a
    /// dataset or cluster set share one dimension, enforced at
    /// construction).
    pub(crate) fn squared_distance_unchecked(&self, other: &Point) -> f32 {
        debug_assert_eq!(self.dimension(), other.dimension());
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }
}

impl std::ops::Index<usize> for Point {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        &self.coords[i]
    }
}
