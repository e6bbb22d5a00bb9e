//! Label-refinement k-means.
//!
//! `kgroup` partitions dense points in `R^d` into a fixed number of groups. Every point
//! starts with a random label in `1..=k`; each round recomputes the cluster centers and
//! moves points to the nearest one until a round changes nothing or the iteration cap
//! is reached.
//!
//! The primary public API is under [`cluster`]:
//! - [`clustering`]: one-shot entry point returning `k` groups of points
//! - [`Kmeans`]: configurable model (cap, seed, reassignment mode) with a fit report
//! - [`euclidean_distance`] and [`center`]: the two geometric primitives

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    center, clustering, euclidean_distance, squared_euclidean, Clustering, Kmeans, KmeansFit,
    Reassignment, DEFAULT_MAX_ITER,
};
pub use error::{Error, Result};
