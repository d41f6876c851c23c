//! Agrupar: agglomerative clustering and nearest-centroid classification.
//!
//! Agrupar reduces a labeled dataset to a small set of weighted centroids
//! by repeatedly merging the closest pair, translates each cluster to a
//! label by majority vote, and evaluates the resulting classifier against
//! a held-out set.
//!
//! # Quick Start
//!
//! ```
//! use agrupar::prelude::*;
//!
//! // Two well-separated groups, one label each.
//! let train = LabeledDataset::new(
//!     vec![
//!         Point::from_slice(&[0.0, 0.0]),
//!         Point::from_slice(&[0.0, 1.0]),
//!         Point::from_slice(&[10.0, 10.0]),
//!         Point::from_slice(&[10.0, 11.0]),
//!     ],
//!     vec![0, 0, 1, 1],
//! ).unwrap();
//!
//! // Reduce four singleton clusters down to two.
//! let mut clusters = ClusterSet::from_dataset(&train);
//! clusters.reduce_to(2).unwrap();
//!
//! // Vote training labels onto the clusters, then classify.
//! let model = NearestCentroidClassifier::fit(&clusters, &train).unwrap();
//! assert_eq!(model.predict(&Point::from_slice(&[0.0, 0.2])).unwrap(), 0);
//!
//! // Score against a held-out set.
//! let report = evaluate(&model, &train).unwrap();
//! assert_eq!(report.overall_accuracy(), 1.0);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the Point type and squared-distance primitive
//! - [`dataset`]: labeled datasets and CSV loading
//! - [`cluster`]: the cluster set and its nearest-pair merge engine
//! - [`classifier`]: majority-vote nearest-centroid classification
//! - [`metrics`]: evaluation reports with per-label statistics
//! - [`model_selection`]: train/test splitting and cluster-count sweeps

pub mod classifier;
pub mod cluster;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod model_selection;
pub mod prelude;
pub mod primitives;

pub use classifier::NearestCentroidClassifier;
pub use cluster::ClusterSet;
pub use dataset::LabeledDataset;
pub use error::{AgruparError, Result};
pub use primitives::Point;
