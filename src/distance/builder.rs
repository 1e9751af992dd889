//! Distance matrix construction with transitive closure.

use tracing::{debug, instrument, warn, Level};

use super::DistanceMatrix;
use crate::error::Result;
use crate::models::DistanceRow;

/// How indirect distances are inferred after seeding direct edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosureMode {
    /// One pass over every intermediate `k`: an unknown cell takes the first
    /// `i → k → j` sum found and is never revisited. The result is a distance
    /// along *some* known chain, not necessarily the shortest.
    #[default]
    SinglePass,
    /// Floyd–Warshall relaxation: a cell is replaced whenever a strictly
    /// shorter chain exists, so every reachable pair holds its shortest
    /// known distance. Seeded edges may be shortened.
    ShortestPath,
}

/// Builds a symmetric [`DistanceMatrix`] from undirected edges.
///
/// The identifier universe is every edge endpoint, sorted ascending. Each edge
/// seeds both directions (a later edge between the same pair overwrites an
/// earlier one), then missing pairs are filled in through intermediates
/// according to the [`ClosureMode`].
///
/// Closure is `O(n³)` in the number of distinct ids.
///
/// # Examples
///
/// ```
/// use u_tolling::distance::{ClosureMode, DistanceMatrixBuilder};
/// use u_tolling::models::DistanceRow;
///
/// let edges = vec![DistanceRow::new(1, 2, 10.0), DistanceRow::new(2, 3, 15.0)];
/// let dm = DistanceMatrixBuilder::new()
///     .with_closure(ClosureMode::SinglePass)
///     .build(&edges)
///     .unwrap();
/// assert_eq!(dm.distance(1, 3), Some(25.0));
/// assert_eq!(dm.distance(3, 1), Some(25.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistanceMatrixBuilder {
    closure: ClosureMode,
}

impl DistanceMatrixBuilder {
    /// Creates a builder using [`ClosureMode::SinglePass`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the closure mode.
    pub fn with_closure(mut self, closure: ClosureMode) -> Self {
        self.closure = closure;
        self
    }

    /// The configured closure mode.
    pub fn closure(&self) -> ClosureMode {
        self.closure
    }

    /// Builds the matrix.
    ///
    /// Fails if any edge has a negative or non-finite distance. An empty edge
    /// list yields an empty matrix.
    #[instrument(skip_all, level = Level::DEBUG, fields(edges = edges.len()))]
    pub fn build(&self, edges: &[DistanceRow]) -> Result<DistanceMatrix> {
        for edge in edges {
            edge.validate()?;
        }

        let ids = edges
            .iter()
            .flat_map(|e| [e.id_start, e.id_end])
            .collect::<Vec<_>>();
        let mut dm = DistanceMatrix::new(ids);
        if dm.is_empty() {
            debug!("no edges, returning empty matrix");
            return Ok(dm);
        }

        for edge in edges {
            if edge.id_start == edge.id_end {
                continue;
            }
            // Both ids come from the universe just built.
            let (Some(i), Some(j)) = (dm.index_of(edge.id_start), dm.index_of(edge.id_end))
            else {
                continue;
            };
            dm.set(i, j, edge.distance);
            dm.set(j, i, edge.distance);
        }

        let filled = match self.closure {
            ClosureMode::SinglePass => close_single_pass(&mut dm),
            ClosureMode::ShortestPath => close_shortest_path(&mut dm),
        };
        debug!(size = dm.size(), filled, mode = ?self.closure, "distance matrix built");
        let n = dm.size();
        let unknown = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .filter(|&(i, j)| dm.known(i, j).is_none())
            .count();
        if unknown > 0 {
            warn!(unknown, "unreachable pairs left unknown, they unroll as 0");
        }
        Ok(dm)
    }
}

/// Fills unknown cells once; returns the number of cells written.
fn close_single_pass(dm: &mut DistanceMatrix) -> usize {
    let n = dm.size();
    let mut filled = 0;
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if i == j || dm.known(i, j).is_some() {
                    continue;
                }
                if let (Some(a), Some(b)) = (dm.known(i, k), dm.known(k, j)) {
                    dm.set(i, j, a + b);
                    filled += 1;
                }
            }
        }
    }
    filled
}

/// Relaxes every cell to its shortest chain; returns the number of writes.
fn close_shortest_path(dm: &mut DistanceMatrix) -> usize {
    let n = dm.size();
    let mut written = 0;
    for k in 0..n {
        for i in 0..n {
            if i == k {
                continue;
            }
            let Some(a) = dm.known(i, k) else {
                continue;
            };
            for j in 0..n {
                if i == j || j == k {
                    continue;
                }
                let Some(b) = dm.known(k, j) else {
                    continue;
                };
                let candidate = a + b;
                if dm.known(i, j).map_or(true, |current| candidate < current) {
                    dm.set(i, j, candidate);
                    written += 1;
                }
            }
        }
    }
    written
}

/// Builds a distance matrix with the default [`ClosureMode::SinglePass`].
pub fn calculate_distance_matrix(edges: &[DistanceRow]) -> Result<DistanceMatrix> {
    DistanceMatrixBuilder::new().build(edges)
}
