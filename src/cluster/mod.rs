//! Clustering of dense points into a fixed number of groups.
//!
//! ## K-means by label refinement
//!
//! Every point carries a label in `1..=k`. A round groups the points by label,
//! computes each group's center (coordinate-wise mean), and moves each point to
//! the group whose center is nearest. Rounds repeat until nothing moves or the
//! iteration cap is hit.
//!
//! **Objective**: Minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! **Assumptions**:
//! - Clusters are roughly spherical
//! - You know k in advance
//!
//! The result is a local optimum that depends on the initial labels. Fix the seed
//! with [`Kmeans::with_seed`] for reproducible runs.
//!
//! ## Usage
//!
//! ```rust
//! use kgroup::cluster::{clustering, Clustering, Kmeans, DEFAULT_MAX_ITER};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! // Groups of points
//! let groups = clustering(&data, 2, DEFAULT_MAX_ITER).unwrap();
//! assert_eq!(groups.len(), 2);
//!
//! // One label per point, in 1..=k
//! let labels = Kmeans::new(2).with_seed(42).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);  // First two together
//! assert_ne!(labels[0], labels[2]);  // Separate from last two
//! ```

mod kmeans;
mod traits;
mod util;

pub use kmeans::{clustering, Kmeans, KmeansFit, Reassignment, DEFAULT_MAX_ITER};
pub use traits::Clustering;
pub use util::{center, euclidean_distance, squared_euclidean};
