//! K-means by iterative label refinement.
//!
//! # The Algorithm
//!
//! 1. Give every point a uniformly random label in `1..=k` (or take the caller's labels).
//! 2. Group points by label and compute the center (coordinate-wise mean) of every
//!    non-empty group. Empty groups get no center for the round.
//! 3. Reassign labels according to the [`Reassignment`] mode.
//! 4. Stop after a round in which no label changed, or after `max_iter` rounds.
//!
//! The final labels are grouped back into exactly `k` groups; group `i` holds the
//! points labelled `i + 1`. When `k` exceeds the number of points some groups are empty.
//!
//! ## Empty clusters
//!
//! In [`Reassignment::Corrected`] mode a cluster can lose all of its members, either
//! from the initial random labels or because two centers coincide. By default such a
//! cluster is refilled at the end of the round with the point farthest from its own
//! center, taken from a cluster that keeps at least one other member. Points sitting
//! exactly on their center are never moved, so duplicates cannot ping-pong between
//! clusters. Disable with [`Kmeans::with_reseed_empty`].
//!
//! ## Complexity
//!
//! - **Time**: O(n k d) per round.
//! - **Space**: O(n + k d).

use log::{debug, trace};
use rand::prelude::*;

use super::traits::Clustering;
use super::util::{self, center, euclidean_distance};
use crate::error::{Error, Result};

/// Suggested iteration cap.
pub const DEFAULT_MAX_ITER: usize = 5000;

/// How labels move during a refinement round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reassignment {
    /// Standard k-means: every point moves to the cluster with the nearest center.
    ///
    /// Centers are compared in label order and the first of several equidistant
    /// centers wins.
    #[default]
    Corrected,

    /// Reproduces the historical within-cluster step.
    ///
    /// Each cluster looks up the member nearest to its own center and assigns it the
    /// label of that cluster. The member already carries that label, so no point ever
    /// moves and the run converges after its first round with the initial grouping.
    /// This is almost certainly a defect in the algorithm it mirrors; use it only for
    /// behavioral parity checks.
    Literal,
}

/// K-means model configuration.
///
/// ```rust
/// use kgroup::{Kmeans, Reassignment};
///
/// let data = vec![
///     vec![0.0, 0.0],
///     vec![0.0, 1.0],
///     vec![10.0, 10.0],
///     vec![10.0, 11.0],
/// ];
///
/// let fit = Kmeans::new(2).with_seed(7).fit(&data).unwrap();
/// assert!(fit.converged());
/// assert_eq!(fit.labels()[0], fit.labels()[1]);
/// assert_ne!(fit.labels()[0], fit.labels()[2]);
///
/// let literal = Kmeans::new(2)
///     .with_seed(7)
///     .with_mode(Reassignment::Literal)
///     .fit(&data)
///     .unwrap();
/// assert_eq!(literal.iterations(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Kmeans {
    k: usize,
    max_iter: usize,
    seed: Option<u64>,
    mode: Reassignment,
    reseed_empty: bool,
}

/// Outcome of a k-means run.
///
/// Only produced by [`Kmeans::fit`] and [`Kmeans::fit_from_labels`], so every label
/// lies in `1..=k` and there is one label per fitted point.
#[derive(Debug, Clone, PartialEq)]
pub struct KmeansFit {
    labels: Vec<usize>,
    centers: Vec<Option<Vec<f64>>>,
    iterations: usize,
    converged: bool,
}

/// A point paired with its current label for the duration of one run.
#[derive(Debug, Clone, Copy)]
struct LabeledPoint<'a> {
    coords: &'a [f64],
    label: usize,
}

impl Kmeans {
    /// Create a k-means model for `k` clusters with default settings.
    ///
    /// Defaults: `max_iter = DEFAULT_MAX_ITER`, no seed, [`Reassignment::Corrected`],
    /// empty-cluster reseeding on.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: DEFAULT_MAX_ITER,
            seed: None,
            mode: Reassignment::default(),
            reseed_empty: true,
        }
    }

    /// Set the number of clusters.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the maximum number of refinement rounds.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Fix the random source used for the initial labels.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Choose the reassignment step.
    pub fn with_mode(mut self, mode: Reassignment) -> Self {
        self.mode = mode;
        self
    }

    /// Toggle refilling of clusters that lose all members (corrected mode only).
    pub fn with_reseed_empty(mut self, reseed_empty: bool) -> Self {
        self.reseed_empty = reseed_empty;
        self
    }

    /// The configured iteration cap.
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// The configured reassignment mode.
    pub fn mode(&self) -> Reassignment {
        self.mode
    }

    /// Run k-means from uniformly random initial labels.
    pub fn fit(&self, data: &[Vec<f64>]) -> Result<KmeansFit> {
        let d = self.validate(data)?;

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };
        let labels: Vec<usize> = (0..data.len())
            .map(|_| rng.random_range(1..=self.k))
            .collect();

        Ok(self.run(data, d, labels))
    }

    /// Run k-means starting from caller-supplied labels (each in `1..=k`).
    pub fn fit_from_labels(&self, data: &[Vec<f64>], labels: &[usize]) -> Result<KmeansFit> {
        let d = self.validate(data)?;

        if labels.len() != data.len() {
            return Err(Error::InvalidParameter {
                name: "labels",
                message: "must have one label per point",
            });
        }
        if let Some((index, &label)) = labels
            .iter()
            .enumerate()
            .find(|&(_, &l)| l == 0 || l > self.k)
        {
            return Err(Error::InvalidLabel {
                index,
                label,
                k: self.k,
            });
        }

        Ok(self.run(data, d, labels.to_vec()))
    }

    /// Run k-means and return the `k` groups of points.
    pub fn fit_groups(&self, data: &[Vec<f64>]) -> Result<Vec<Vec<Vec<f64>>>> {
        self.fit(data)?.groups(data)
    }

    fn validate(&self, data: &[Vec<f64>]) -> Result<usize> {
        let d = util::dimension(data)?;

        if self.k == 0 {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: data.len(),
            });
        }

        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }

        Ok(d)
    }

    fn run(&self, data: &[Vec<f64>], d: usize, labels: Vec<usize>) -> KmeansFit {
        debug!(
            "kmeans: n={} d={} k={} max_iter={} mode={:?} seeded={}",
            data.len(),
            d,
            self.k,
            self.max_iter,
            self.mode,
            self.seed.is_some()
        );

        let mut points: Vec<LabeledPoint<'_>> = data
            .iter()
            .zip(labels)
            .map(|(p, label)| LabeledPoint {
                coords: p.as_slice(),
                label,
            })
            .collect();

        let mut iterations = 0;
        let mut converged = false;
        while iterations < self.max_iter {
            iterations += 1;

            let changed = match self.mode {
                Reassignment::Corrected => {
                    let centers = cluster_centers(&points, self.k);
                    let mut changed = reassign_nearest(&mut points, &centers);
                    if self.reseed_empty {
                        changed += reseed_empty(&mut points, &centers, self.k);
                    }
                    changed
                }
                Reassignment::Literal => reassign_literal(&mut points, self.k),
            };
            trace!("kmeans round {}: {} labels changed", iterations, changed);

            if changed == 0 {
                converged = true;
                break;
            }
        }

        if converged {
            debug!("kmeans converged after {} rounds", iterations);
        } else {
            debug!("kmeans stopped at iteration cap ({} rounds)", iterations);
        }

        KmeansFit {
            labels: points.iter().map(|p| p.label).collect(),
            centers: cluster_centers(&points, self.k),
            iterations,
            converged,
        }
    }
}

impl Clustering for Kmeans {
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.into_labels())
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

impl KmeansFit {
    /// Final label of every input point, in input order.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Consume the fit, keeping only the labels.
    pub fn into_labels(self) -> Vec<usize> {
        self.labels
    }

    /// Center of each cluster under the final labels; `centers()[i]` belongs to label
    /// `i + 1` and is `None` for clusters without members.
    pub fn centers(&self) -> &[Option<Vec<f64>>] {
        &self.centers
    }

    /// Number of refinement rounds performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether the last round changed no label. `false` means the cap was hit.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Number of clusters the run was configured with.
    pub fn n_clusters(&self) -> usize {
        self.centers.len()
    }

    /// Members per cluster, indexed by `label - 1`.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.n_clusters()];
        for &label in &self.labels {
            sizes[label - 1] += 1;
        }
        sizes
    }

    /// Split `data` (the points this fit was computed on) into `k` groups by label.
    pub fn groups(&self, data: &[Vec<f64>]) -> Result<Vec<Vec<Vec<f64>>>> {
        self.check_len(data)?;
        let mut groups = vec![Vec::new(); self.n_clusters()];
        for (point, &label) in data.iter().zip(&self.labels) {
            groups[label - 1].push(point.clone());
        }
        Ok(groups)
    }

    /// Sum of squared distances from every point to its cluster's center.
    pub fn inertia(&self, data: &[Vec<f64>]) -> Result<f64> {
        self.check_len(data)?;
        Ok(data
            .iter()
            .zip(&self.labels)
            .filter_map(|(point, &label)| {
                self.centers[label - 1]
                    .as_deref()
                    .map(|c| util::squared_euclidean(point, c))
            })
            .sum())
    }

    fn check_len(&self, data: &[Vec<f64>]) -> Result<()> {
        if data.len() != self.labels.len() {
            return Err(Error::InvalidParameter {
                name: "data",
                message: "must be the points the fit was computed on",
            });
        }
        Ok(())
    }
}

/// Partition `points` into `k` clusters and return the groups.
///
/// Group `i` holds the points labelled `i + 1`; groups may be empty. The run uses
/// [`Reassignment::Corrected`] and a thread-local random source. Use [`Kmeans`] for a
/// fixed seed or a fit report.
///
/// ```rust
/// let points = vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![10.0, 10.0], vec![10.0, 11.0]];
/// let groups = kgroup::clustering(&points, 2, kgroup::DEFAULT_MAX_ITER).unwrap();
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups.iter().map(Vec::len).sum::<usize>(), 4);
/// ```
pub fn clustering(
    points: &[Vec<f64>],
    k: usize,
    max_iterations: usize,
) -> Result<Vec<Vec<Vec<f64>>>> {
    Kmeans::new(k)
        .with_max_iter(max_iterations)
        .fit_groups(points)
}

/// Indices of the members of each cluster, in input order; `groups[label - 1]`.
fn group_by_label(points: &[LabeledPoint<'_>], k: usize) -> Vec<Vec<usize>> {
    let mut groups = vec![Vec::new(); k];
    for (i, p) in points.iter().enumerate() {
        groups[p.label - 1].push(i);
    }
    groups
}

fn cluster_centers(points: &[LabeledPoint<'_>], k: usize) -> Vec<Option<Vec<f64>>> {
    group_by_label(points, k)
        .into_iter()
        .map(|members| center(members.iter().map(|&i| points[i].coords)).ok())
        .collect()
}

/// Move every point to the cluster with the nearest center. Returns the number of moves.
fn reassign_nearest(points: &mut [LabeledPoint<'_>], centers: &[Option<Vec<f64>>]) -> usize {
    let mut changed = 0;
    for p in points.iter_mut() {
        let mut nearest: Option<(usize, f64)> = None;
        for (i, c) in centers.iter().enumerate() {
            let Some(c) = c else { continue };
            let dist = euclidean_distance(p.coords, c);
            if nearest.map_or(true, |(_, best)| dist < best) {
                nearest = Some((i + 1, dist));
            }
        }

        if let Some((label, _)) = nearest {
            if label != p.label {
                p.label = label;
                changed += 1;
            }
        }
    }
    changed
}

/// Refill each empty cluster with the point farthest from its round center, taken
/// from a cluster that keeps at least one member. Returns the number of moves.
fn reseed_empty(points: &mut [LabeledPoint<'_>], centers: &[Option<Vec<f64>>], k: usize) -> usize {
    let mut sizes = vec![0usize; k];
    for p in points.iter() {
        sizes[p.label - 1] += 1;
    }

    let mut moved = 0;
    for empty in 0..k {
        if sizes[empty] != 0 {
            continue;
        }

        let mut farthest: Option<(usize, f64)> = None;
        for (i, p) in points.iter().enumerate() {
            if sizes[p.label - 1] < 2 {
                continue;
            }
            let Some(c) = centers[p.label - 1].as_deref() else {
                continue;
            };
            let dist = euclidean_distance(p.coords, c);
            if dist > 0.0 && farthest.map_or(true, |(_, best)| dist > best) {
                farthest = Some((i, dist));
            }
        }

        let Some((i, _)) = farthest else { break };
        sizes[points[i].label - 1] -= 1;
        sizes[empty] += 1;
        points[i].label = empty + 1;
        moved += 1;
    }
    moved
}

/// Within-cluster step of [`Reassignment::Literal`]. Returns the number of moves.
fn reassign_literal(points: &mut [LabeledPoint<'_>], k: usize) -> usize {
    let mut changed = 0;
    for (idx, members) in group_by_label(points, k).into_iter().enumerate() {
        let label = idx + 1;
        let Ok(c) = center(members.iter().map(|&i| points[i].coords)) else {
            continue;
        };

        let mut nearest: Option<(usize, f64)> = None;
        for &i in &members {
            let dist = euclidean_distance(points[i].coords, &c);
            if nearest.map_or(true, |(_, best)| dist < best) {
                nearest = Some((i, dist));
            }
        }

        if let Some((i, _)) = nearest {
            if points[i].label != label {
                points[i].label = label;
                changed += 1;
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_points() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![10.0, 10.0],
            vec![10.0, 11.0],
        ]
    }

    fn sorted(mut group: Vec<Vec<f64>>) -> Vec<Vec<f64>> {
        group.sort_by(|a, b| a.partial_cmp(b).unwrap());
        group
    }

    fn assert_natural_split(groups: Vec<Vec<Vec<f64>>>) {
        let mut groups: Vec<_> = groups.into_iter().map(sorted).collect();
        groups.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(
            groups,
            vec![
                vec![vec![0.0, 0.0], vec![0.0, 1.0]],
                vec![vec![10.0, 10.0], vec![10.0, 11.0]],
            ]
        );
    }

    #[test]
    fn converges_to_natural_groups_from_every_start() {
        let data = four_points();
        let model = Kmeans::new(2);

        for mask in 0..16u32 {
            let labels: Vec<usize> = (0..4).map(|i| ((mask >> i) & 1) as usize + 1).collect();
            let fit = model.fit_from_labels(&data, &labels).unwrap();
            assert!(fit.converged(), "start {:?} did not converge", labels);
            assert_natural_split(fit.groups(&data).unwrap());
        }
    }

    #[test]
    fn converges_from_random_starts() {
        let data = four_points();
        for seed in 0..32 {
            let fit = Kmeans::new(2).with_seed(seed).fit(&data).unwrap();
            assert!(fit.converged());
            assert_natural_split(fit.groups(&data).unwrap());
        }
    }

    #[test]
    fn clustering_entry_point() {
        let groups = clustering(&four_points(), 2, DEFAULT_MAX_ITER).unwrap();
        assert_natural_split(groups);
    }

    #[test]
    fn seeded_runs_are_deterministic() {
        let data: Vec<Vec<f64>> = (0..50)
            .map(|i| vec![(i * 37 % 101) as f64, (i * 53 % 97) as f64])
            .collect();
        let model = Kmeans::new(4).with_seed(42);
        assert_eq!(model.fit(&data).unwrap(), model.fit(&data).unwrap());
    }

    #[test]
    fn more_clusters_than_points() {
        let data = vec![vec![0.0], vec![5.0], vec![9.0]];
        for seed in 0..16 {
            let groups = Kmeans::new(5).with_seed(seed).fit_groups(&data).unwrap();
            assert_eq!(groups.len(), 5);
            assert_eq!(groups.iter().filter(|g| !g.is_empty()).count(), 3);

            let mut all: Vec<Vec<f64>> = groups.into_iter().flatten().collect();
            all.sort_by(|a, b| a.partial_cmp(b).unwrap());
            assert_eq!(all, data);
        }
    }

    #[test]
    fn empty_clusters_stay_empty_without_reseeding() {
        let data = four_points();
        let fit = Kmeans::new(3)
            .with_reseed_empty(false)
            .fit_from_labels(&data, &[1, 1, 2, 2])
            .unwrap();
        assert!(fit.converged());
        assert_eq!(fit.labels(), &[1, 1, 2, 2]);
        assert_eq!(fit.cluster_sizes(), vec![2, 2, 0]);
        assert_eq!(fit.centers()[2], None);
    }

    #[test]
    fn coincident_centers_collapse_without_reseeding() {
        // Both initial centers sit at (5, 5.5); ties go to label 1.
        let data = four_points();
        let fit = Kmeans::new(2)
            .with_reseed_empty(false)
            .fit_from_labels(&data, &[1, 2, 2, 1])
            .unwrap();
        assert!(fit.converged());
        assert_eq!(fit.labels(), &[1, 1, 1, 1]);
        assert_eq!(fit.iterations(), 2);
    }

    #[test]
    fn duplicate_points_do_not_oscillate() {
        let data = vec![vec![1.0, 1.0]; 4];
        let fit = Kmeans::new(2).fit_from_labels(&data, &[1, 1, 1, 1]).unwrap();
        assert!(fit.converged());
        assert_eq!(fit.iterations(), 1);
        assert_eq!(fit.cluster_sizes(), vec![4, 0]);
    }

    #[test]
    fn hitting_the_cap_is_not_an_error() {
        let data = four_points();
        let fit = Kmeans::new(2)
            .with_max_iter(1)
            .fit_from_labels(&data, &[1, 2, 1, 2])
            .unwrap();
        assert!(!fit.converged());
        assert_eq!(fit.iterations(), 1);
        assert_eq!(fit.labels(), &[1, 1, 2, 2]);
    }

    #[test]
    fn refit_after_convergence_is_idempotent() {
        let data: Vec<Vec<f64>> = (0..40)
            .map(|i| vec![(i % 7) as f64 * 1.5, (i / 7) as f64, (i * 3 % 5) as f64])
            .collect();
        let model = Kmeans::new(3).with_seed(9);
        let fit = model.fit(&data).unwrap();
        assert!(fit.converged());

        let again = model.fit_from_labels(&data, fit.labels()).unwrap();
        assert!(again.converged());
        assert_eq!(again.iterations(), 1);
        assert_eq!(again.labels(), fit.labels());
        assert_eq!(again.groups(&data).unwrap(), fit.groups(&data).unwrap());
    }

    #[test]
    fn literal_mode_never_moves_points() {
        let data = four_points();
        let start = [1, 2, 1, 2];
        let fit = Kmeans::new(2)
            .with_mode(Reassignment::Literal)
            .fit_from_labels(&data, &start)
            .unwrap();
        assert!(fit.converged());
        assert_eq!(fit.iterations(), 1);
        assert_eq!(fit.labels(), &start);
    }

    #[test]
    fn centers_and_inertia() {
        let data = four_points();
        let fit = Kmeans::new(2).fit_from_labels(&data, &[1, 1, 2, 2]).unwrap();
        assert_eq!(fit.centers()[0].as_deref(), Some(&[0.0, 0.5][..]));
        assert_eq!(fit.centers()[1].as_deref(), Some(&[10.0, 10.5][..]));
        assert!((fit.inertia(&data).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn fit_predict_labels_in_range() {
        let data = four_points();
        let model = Kmeans::new(3).with_seed(1);
        let labels = model.fit_predict(&data).unwrap();
        assert_eq!(labels.len(), 4);
        assert!(labels.iter().all(|&l| (1..=3).contains(&l)));
        assert_eq!(model.n_clusters(), 3);
    }

    #[test]
    fn reseed_tie_keeps_first_donor() {
        // Both points are 1.0 from the shared center at 0.0.
        let data = vec![vec![-1.0], vec![1.0]];
        let mut points: Vec<LabeledPoint<'_>> = data
            .iter()
            .map(|p| LabeledPoint {
                coords: p.as_slice(),
                label: 1,
            })
            .collect();
        let centers = cluster_centers(&points, 2);

        assert_eq!(reseed_empty(&mut points, &centers, 2), 1);
        assert_eq!(points[0].label, 2);
        assert_eq!(points[1].label, 1);

        let fit = Kmeans::new(2).fit_from_labels(&data, &[1, 1]).unwrap();
        assert!(fit.converged());
        assert_eq!(fit.iterations(), 2);
        assert_eq!(fit.labels(), &[2, 1]);

        let swapped = vec![vec![1.0], vec![-1.0]];
        let fit = Kmeans::new(2).fit_from_labels(&swapped, &[1, 1]).unwrap();
        assert_eq!(fit.labels(), &[2, 1]);
    }

    #[test]
    fn builder_settings() {
        let model = Kmeans::new(2)
            .with_k(3)
            .with_max_iter(17)
            .with_mode(Reassignment::Literal);
        assert_eq!(model.n_clusters(), 3);
        assert_eq!(model.max_iter(), 17);
        assert_eq!(model.mode(), Reassignment::Literal);

        let defaults = Kmeans::new(4);
        assert_eq!(defaults.max_iter(), DEFAULT_MAX_ITER);
        assert_eq!(defaults.mode(), Reassignment::Corrected);

        let fit = model.fit_from_labels(&four_points(), &[3, 3, 1, 2]).unwrap();
        assert_eq!(fit.n_clusters(), 3);
        assert_eq!(fit.labels(), &[3, 3, 1, 2]);
    }

    #[test]
    fn report_rejects_foreign_data() {
        let data = four_points();
        let fit = Kmeans::new(2).fit_from_labels(&data, &[1, 1, 2, 2]).unwrap();
        let shorter = &data[..3];
        assert!(matches!(
            fit.groups(shorter),
            Err(Error::InvalidParameter { name: "data", .. })
        ));
        assert!(matches!(
            fit.inertia(shorter),
            Err(Error::InvalidParameter { name: "data", .. })
        ));
    }

    #[test]
    fn invalid_inputs() {
        let data = four_points();
        let empty: Vec<Vec<f64>> = vec![];

        assert_eq!(clustering(&empty, 2, 10), Err(Error::EmptyInput));
        assert_eq!(
            clustering(&data, 0, 10),
            Err(Error::InvalidClusterCount {
                requested: 0,
                n_items: 4
            })
        );
        assert_eq!(
            clustering(&[vec![0.0, 0.0], vec![1.0]], 1, 10),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
        assert!(matches!(
            clustering(&data, 2, 0),
            Err(Error::InvalidParameter {
                name: "max_iter",
                ..
            })
        ));
    }

    #[test]
    fn invalid_initial_labels() {
        let data = four_points();
        let model = Kmeans::new(2);
        assert!(matches!(
            model.fit_from_labels(&data, &[1, 2]),
            Err(Error::InvalidParameter { name: "labels", .. })
        ));
        assert_eq!(
            model.fit_from_labels(&data, &[1, 2, 0, 1]),
            Err(Error::InvalidLabel {
                index: 2,
                label: 0,
                k: 2
            })
        );
        assert_eq!(
            model.fit_from_labels(&data, &[1, 3, 1, 1]),
            Err(Error::InvalidLabel {
                index: 1,
                label: 3,
                k: 2
            })
        );
    }
}
