//! Dense distance matrix.

use crate::models::{Delivery, GeoPoint};

use super::DistanceMetric;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per route construction so each pairwise distance is
/// computed a single time. Index 0 is the depot and index `i + 1` is the
/// `i`-th delivery passed to [`DistanceMatrix::from_stops`].
///
/// # Examples
///
/// ```
/// use u_tour::distance::{DistanceMatrix, Haversine};
/// use u_tour::models::{Delivery, GeoPoint};
///
/// let depot = GeoPoint::new(0.0, 0.0);
/// let stops = vec![
///     Delivery::new(1, GeoPoint::new(0.0, 1.0), 1.0, 0.1),
///     Delivery::new(2, GeoPoint::new(1.0, 0.0), 1.0, 0.1),
/// ];
/// let dm = DistanceMatrix::from_stops(depot, &stops, &Haversine);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 0), 0.0);
/// assert_eq!(dm.get(1, 2), dm.get(2, 1));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the matrix over the depot followed by `deliveries`.
    ///
    /// The metric is evaluated once per unordered pair and mirrored.
    pub fn from_stops<M: DistanceMetric>(
        depot: GeoPoint,
        deliveries: &[Delivery],
        metric: &M,
    ) -> Self {
        let points: Vec<GeoPoint> = std::iter::once(depot)
            .chain(deliveries.iter().map(Delivery::position))
            .collect();
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric.distance_km(&points[i], &points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Wraps an explicit n×n grid, or `None` if the length is not `size * size`.
    #[cfg(test)]
    fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the nearest of `candidates` as seen from `from`.
    ///
    /// Ties go to the candidate listed first. NaN distances sort after every
    /// real distance. Returns `None` if `candidates` is empty.
    pub fn nearest<I>(&self, from: usize, candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        candidates
            .into_iter()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Haversine;

    fn sample() -> (GeoPoint, Vec<Delivery>) {
        let depot = GeoPoint::new(0.0, 0.0);
        let stops = vec![
            Delivery::new(10, GeoPoint::new(0.0, 1.0), 1.0, 0.1),
            Delivery::new(20, GeoPoint::new(0.0, 3.0), 1.0, 0.1),
        ];
        (depot, stops)
    }

    #[test]
    fn test_from_stops() {
        let (depot, stops) = sample();
        let dm = DistanceMatrix::from_stops(depot, &stops, &Haversine);
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 2) - 3.0 * dm.get(0, 1)).abs() < 1e-6);
        assert_eq!(dm.get(1, 2), dm.get(2, 1));
        assert_eq!(dm.get(2, 2), 0.0);
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_nearest() {
        let (depot, stops) = sample();
        let dm = DistanceMatrix::from_stops(depot, &stops, &Haversine);
        assert_eq!(dm.nearest(0, [1, 2]), Some(1));
        assert_eq!(dm.nearest(0, [2]), Some(2));
        assert_eq!(dm.nearest(0, []), None);
    }

    #[test]
    fn test_nearest_tie_prefers_first() {
        let dm = DistanceMatrix::from_data(3, vec![0.0, 4.0, 4.0, 4.0, 0.0, 1.0, 4.0, 1.0, 0.0])
            .expect("valid");
        assert_eq!(dm.nearest(0, [2, 1]), Some(2));
        assert_eq!(dm.nearest(0, [1, 2]), Some(1));
    }

    #[test]
    fn test_nearest_skips_nan() {
        let dm = DistanceMatrix::from_data(3, vec![0.0, f64::NAN, 9.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])
            .expect("valid");
        assert_eq!(dm.nearest(0, [1, 2]), Some(2));
    }
}
