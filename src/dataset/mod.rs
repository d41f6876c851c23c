//! Labeled dataset container and CSV loading.
//!
//! A [`LabeledDataset`] holds parallel point/label arrays. Rows come from
//! CSV input where the columns are the coordinates of a point and the last
//! column is a non-negative integer label.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{AgruparError, Result};
use crate::primitives::Point;
use serde::{Deserialize, Serialize};

/// A collection of (point, label) pairs with a dense label space.
///
/// Invariants enforced at construction: `points` and `labels` have equal
/// length and all points share one dimension. `n_labels` is 1 + the
/// maximum observed label; labels are assumed to densely populate
/// `[0, n_labels)` but this is not verified.
///
/// # Examples
///
/// ```
/// use agrupar::dataset::LabeledDataset;
/// use agrupar::primitives::Point;
///
/// let d = LabeledDataset::new(
///     vec![Point::from_slice(&[0.0, 0.0]), Point::from_slice(&[1.0, 1.0])],
///     vec![0, 1],
/// ).unwrap();
/// assert_eq!(d.len(), 2);
/// assert_eq!(d.n_labels(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledDataset {
    points: Vec<Point>,
    labels: Vec<usize>,
    n_labels: usize,
}

impl LabeledDataset {
    /// Creates a dataset from parallel point and label arrays.
    ///
    /// # Errors
    ///
    /// Returns an error if the arrays differ in length or if the points do
    /// not all share one dimension.
    pub fn new(points: Vec<Point>, labels: Vec<usize>) -> Result<Self> {
        if points.len() != labels.len() {
            return Err(format!(
                "points and labels must have the same length, got {} and {}",
                points.len(),
                labels.len()
            )
            .into());
        }

        if let Some(first) = points.first() {
            let dimension = first.dimension();
            for p in &points {
                if p.dimension() != dimension {
                    return Err(AgruparError::dimension_mismatch(
                        "dimension",
                        dimension,
                        p.dimension(),
                    ));
                }
            }
        }

        let n_labels = labels.iter().max().map_or(0, |&m| m + 1);

        Ok(Self {
            points,
            labels,
            n_labels,
        })
    }

    /// Returns the number of (point, label) pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the dataset holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the shared dimension of the points (0 when empty).
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.points.first().map_or(0, Point::dimension)
    }

    /// Returns 1 + the maximum observed label.
    #[must_use]
    pub fn n_labels(&self) -> usize {
        self.n_labels
    }

    /// Returns the point at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn point(&self, i: usize) -> &Point {
        &self.points[i]
    }

    /// Returns the label at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn label(&self, i: usize) -> usize {
        self.labels[i]
    }

    /// Returns all points as a slice.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns all labels as a slice.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Iterates over (point, label) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Point, usize)> {
        self.points.iter().zip(self.labels.iter().copied())
    }

    /// Loads a dataset from a CSV file.
    ///
    /// Each row holds the coordinates of one point followed by its integer
    /// label: `x1,x2,...,xd,label`. The column count is inferred from the
    /// first row and enforced on every later row.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be opened or read, and the
    /// `from_csv_reader` format errors otherwise.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_csv_reader(BufReader::new(file))
    }

    /// Loads a dataset from any buffered CSV source.
    ///
    /// Blank lines (such as a trailing newline) are skipped. Parsing is
    /// all-or-nothing: a malformed row fails the whole load rather than
    /// producing a partial dataset.
    ///
    /// # Errors
    ///
    /// Returns `FormatError` on a ragged row, a non-numeric coordinate, a
    /// label that is not a non-negative integer, or input with no rows;
    /// `Io` if reading fails.
    pub fn from_csv_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut points = Vec::new();
        let mut labels = Vec::new();
        let mut columns = None;

        for (line_idx, line) in reader.lines().enumerate() {
            let line = line?;
            let row = line.trim();
            if row.is_empty() {
                continue;
            }
            let line_no = line_idx + 1;

            let fields: Vec<&str> = row.split(',').collect();
            let expected = *columns.get_or_insert(fields.len());
            if fields.len() != expected {
                return Err(AgruparError::format_error(format!(
                    "line {line_no}: expected {expected} columns, got {}",
                    fields.len()
                )));
            }
            if fields.len() < 2 {
                return Err(AgruparError::format_error(format!(
                    "line {line_no}: a row needs at least one coordinate and a label"
                )));
            }

            let (coord_fields, label_field) = fields.split_at(fields.len() - 1);
            let mut coords = Vec::with_capacity(coord_fields.len());
            for field in coord_fields {
                let value: f32 = field.trim().parse().map_err(|_| {
                    AgruparError::format_error(format!(
                        "line {line_no}: invalid coordinate {field:?}"
                    ))
                })?;
                coords.push(value);
            }

            let label: usize = label_field[0].trim().parse().map_err(|_| {
                AgruparError::format_error(format!(
                    "line {line_no}: label {:?} is not a non-negative integer",
                    label_field[0]
                ))
            })?;

            points.push(Point::from_vec(coords));
            labels.push(label);
        }

        if points.is_empty() {
            return Err(AgruparError::format_error("input contains no data rows"));
        }

        Self::new(points, labels)
    }
}
