//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use agrupar::prelude::*;
//! ```

pub use crate::classifier::NearestCentroidClassifier;
pub use crate::cluster::ClusterSet;
pub use crate::dataset::LabeledDataset;
pub use crate::error::{AgruparError, Result};
pub use crate::metrics::{evaluate, EvaluationReport, LabelStats};
pub use crate::model_selection::{sweep_cluster_counts, train_test_split, SweepPoint};
pub use crate::primitives::Point;
