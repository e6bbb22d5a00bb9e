//! Geometric primitives shared by the engine: distances and centers.

use crate::error::{Error, Result};

/// Squared Euclidean distance between two points of equal dimensionality.
#[inline]
pub fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Euclidean distance between two points of equal dimensionality.
///
/// ```rust
/// use kgroup::euclidean_distance;
///
/// assert_eq!(euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
/// ```
#[inline]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    squared_euclidean(a, b).sqrt()
}

/// Coordinate-wise arithmetic mean of a set of points.
///
/// Returns [`Error::EmptyInput`] when `points` yields nothing; the engine never asks
/// for the center of an empty cluster.
pub fn center<'a, I>(points: I) -> Result<Vec<f64>>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let mut points = points.into_iter();
    let first = points.next().ok_or(Error::EmptyInput)?;

    let mut sum = first.to_vec();
    let mut count = 1usize;
    for p in points {
        debug_assert_eq!(p.len(), sum.len());
        for (s, x) in sum.iter_mut().zip(p) {
            *s += x;
        }
        count += 1;
    }

    let n = count as f64;
    for s in &mut sum {
        *s /= n;
    }
    Ok(sum)
}

/// Validate a dataset and return its dimensionality.
pub(crate) fn dimension(data: &[Vec<f64>]) -> Result<usize> {
    let first = data.first().ok_or(Error::EmptyInput)?;
    let d = first.len();
    if d == 0 {
        return Err(Error::InvalidParameter {
            name: "dimension",
            message: "must be at least 1",
        });
    }
    for point in data.iter().skip(1) {
        if point.len() != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: point.len(),
            });
        }
    }
    Ok(d)
}
