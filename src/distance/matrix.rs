//! Labelled square distance matrix.

use crate::models::LocationId;

/// A dense n×n matrix over a sorted set of location ids, stored in row-major
/// order.
///
/// Each cell is either a known distance or unknown. The diagonal is always a
/// known `0`. Unknown cells read as `0.0` through [`get`](Self::get), which
/// is how they appear in unrolled output; use [`known`](Self::known) to tell
/// a real zero apart from a gap.
///
/// # Examples
///
/// ```
/// use u_tolling::distance::DistanceMatrix;
///
/// let mut dm = DistanceMatrix::new(vec![30, 10, 20]);
/// assert_eq!(dm.ids(), &[10, 20, 30]);
/// dm.set(0, 1, 5.0);
/// assert_eq!(dm.get(0, 1), 5.0);
/// assert_eq!(dm.known(1, 0), None);
/// assert_eq!(dm.get(1, 0), 0.0);
/// assert_eq!(dm.known(2, 2), Some(0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    ids: Vec<LocationId>,
    data: Vec<Option<f64>>,
}

/// Square matrix of car toll values, laid out like a [`DistanceMatrix`].
pub type CarMatrix = DistanceMatrix;

impl DistanceMatrix {
    /// Creates a matrix over the given ids (sorted, deduplicated) with every
    /// off-diagonal cell unknown.
    pub fn new(mut ids: Vec<LocationId>) -> Self {
        ids.sort_unstable();
        ids.dedup();
        let n = ids.len();
        let mut data = vec![None; n * n];
        for i in 0..n {
            data[i * n + i] = Some(0.0);
        }
        Self { ids, data }
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the matrix has no locations.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Location ids in row/column order (ascending).
    pub fn ids(&self) -> &[LocationId] {
        &self.ids
    }

    /// Row/column index of a location id.
    pub fn index_of(&self, id: LocationId) -> Option<usize> {
        self.ids.binary_search(&id).ok()
    }

    /// Returns the cell at `(from, to)`, `None` if unknown.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn known(&self, from: usize, to: usize) -> Option<f64> {
        self.data[from * self.size() + to]
    }

    /// Returns the cell at `(from, to)`, `0.0` if unknown.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.known(from, to).unwrap_or(0.0)
    }

    /// Looks a cell up by location ids.
    ///
    /// Returns `None` if either id is outside the matrix or the cell is unknown.
    pub fn distance(&self, from: LocationId, to: LocationId) -> Option<f64> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        self.known(i, j)
    }

    /// Sets the cell at `(from, to)`.
    pub fn set(&mut self, from: usize, to: usize, value: f64) {
        let n = self.size();
        self.data[from * n + to] = Some(value);
    }

    /// Applies `f` to every known off-diagonal cell.
    pub(crate) fn map_known(&mut self, mut f: impl FnMut(f64) -> f64) {
        let n = self.size();
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                if let Some(v) = self.data[i * n + j].as_mut() {
                    *v = f(*v);
                }
            }
        }
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// A known cell facing an unknown one is never symmetric.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size() {
            for j in (i + 1)..self.size() {
                match (self.known(i, j), self.known(j, i)) {
                    (Some(a), Some(b)) if (a - b).abs() <= tol => {}
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_and_dedups() {
        let dm = DistanceMatrix::new(vec![3, 1, 2, 1]);
        assert_eq!(dm.ids(), &[1, 2, 3]);
        assert_eq!(dm.size(), 3);
    }

    #[test]
    fn test_diagonal_known_zero() {
        let dm = DistanceMatrix::new(vec![1, 2]);
        assert_eq!(dm.known(0, 0), Some(0.0));
        assert_eq!(dm.known(1, 1), Some(0.0));
        assert_eq!(dm.known(0, 1), None);
    }

    #[test]
    fn test_empty() {
        let dm = DistanceMatrix::new(Vec::new());
        assert!(dm.is_empty());
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(vec![1, 2, 3]);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_distance_by_id() {
        let mut dm = DistanceMatrix::new(vec![100, 200]);
        dm.set(0, 1, 7.5);
        assert_eq!(dm.distance(100, 200), Some(7.5));
        assert_eq!(dm.distance(200, 100), None);
        assert_eq!(dm.distance(100, 300), None);
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(vec![1, 2]);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_half_known_is_asymmetric() {
        let mut dm = DistanceMatrix::new(vec![1, 2]);
        dm.set(0, 1, 10.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_map_known_skips_diagonal_and_gaps() {
        let mut dm = DistanceMatrix::new(vec![1, 2, 3]);
        dm.set(0, 1, 4.0);
        dm.map_known(|v| v + 1.0);
        assert_eq!(dm.known(0, 1), Some(5.0));
        assert_eq!(dm.known(0, 0), Some(0.0));
        assert_eq!(dm.known(0, 2), None);
    }
}
