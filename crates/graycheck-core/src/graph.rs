//! Minimum-distance neighbor graph.
//!
//! Vertices are symbols, edges join every pair whose Euclidean distance is
//! within `tolerance` of the global minimum pairwise distance. The minimum is
//! a property of the whole set, so edges are only selected after every pair
//! has been measured.

use std::collections::HashSet;

use crate::{Error, Point, Result, Symbol, DEFAULT_TOLERANCE};

/// Slack added to the minimum distance when selecting edges.
///
/// Absorbs rounding in the distance computation. The right value depends on
/// the coordinate scale of the input.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tolerance(f64);

impl Tolerance {
    /// Zero slack: only exact minimum-distance pairs become edges.
    pub const EXACT: Self = Self(0.0);

    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidTolerance(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(DEFAULT_TOLERANCE)
    }
}

/// Unordered pair of distinct symbol indices, smaller index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Edge {
    a: u64,
    b: u64,
}

impl Edge {
    /// Create an edge; `None` for a self-loop.
    pub fn new(i: u64, j: u64) -> Option<Self> {
        match i.cmp(&j) {
            std::cmp::Ordering::Less => Some(Self { a: i, b: j }),
            std::cmp::Ordering::Greater => Some(Self { a: j, b: i }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Smaller endpoint.
    #[inline]
    pub const fn a(&self) -> u64 {
        self.a
    }

    /// Larger endpoint.
    #[inline]
    pub const fn b(&self) -> u64 {
        self.b
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// Upper-triangular cache of pairwise distances between row positions.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Measure every unordered pair once.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut data = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                data.push(points[i].distance(&points[j]));
            }
        }
        Self { n, data }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Smallest pairwise distance, `+inf` for fewer than two points.
    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// All `(i, j, distance)` with `i < j`, in row order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.n)
            .flat_map(move |i| ((i + 1)..self.n).map(move |j| (i, j)))
            .zip(self.data.iter().copied())
            .map(|((i, j), d)| (i, j, d))
    }
}

/// Result of a graph build.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NeighborGraph {
    min_distance: f64,
    edges: Vec<Edge>,
}

impl NeighborGraph {
    /// Graph of a set with fewer than two symbols.
    pub fn degenerate() -> Self {
        Self {
            min_distance: f64::INFINITY,
            edges: Vec::new(),
        }
    }

    /// Global minimum pairwise distance; `+inf` when degenerate.
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// No pair to measure: fewer than two symbols were given.
    pub fn is_degenerate(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, i: u64, j: u64) -> bool {
        Edge::new(i, j).is_some_and(|e| self.edges.contains(&e))
    }
}

/// Builds [`NeighborGraph`]s with a fixed tolerance.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighborGraphBuilder {
    tolerance: Tolerance,
}

impl NeighborGraphBuilder {
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Build the minimum-distance graph of `symbols`.
    ///
    /// Fewer than two symbols yields [`NeighborGraph::degenerate`]. Duplicate
    /// indices, non-finite positions and pairs too far apart to measure are
    /// rejected.
    pub fn build(&self, symbols: &[Symbol]) -> Result<NeighborGraph> {
        let mut seen = HashSet::with_capacity(symbols.len());
        for symbol in symbols {
            if !symbol.position().is_finite() {
                return Err(Error::NonFinitePosition {
                    index: symbol.index(),
                });
            }
            if !seen.insert(symbol.index()) {
                return Err(Error::DuplicateIndex(symbol.index()));
            }
        }

        if symbols.len() < 2 {
            return Ok(NeighborGraph::degenerate());
        }

        let points: Vec<Point> = symbols.iter().map(Symbol::position).collect();
        let matrix = DistanceMatrix::from_points(&points);
        if let Some((i, j, _)) = matrix.pairs().find(|&(_, _, d)| !d.is_finite()) {
            return Err(Error::NonFiniteDistance {
                a: symbols[i].index(),
                b: symbols[j].index(),
            });
        }
        let min_distance = matrix.min();
        let limit = min_distance + self.tolerance.value();

        let edges = matrix
            .pairs()
            .filter(|&(_, _, d)| d <= limit)
            .filter_map(|(i, j, _)| Edge::new(symbols[i].index(), symbols[j].index()))
            .collect();

        Ok(NeighborGraph {
            min_distance,
            edges,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BitLabel;

    fn symbols(points: &[(f64, f64)], width: u32) -> Vec<Symbol> {
        points
            .iter()
            .enumerate()
            .map(|(i, &p)| Symbol::new(i as u64, p.into(), width).unwrap())
            .collect()
    }

    #[test]
    fn tolerance_validation() {
        assert!(Tolerance::new(0.0).is_ok());
        assert!(Tolerance::new(0.5).is_ok());
        assert_eq!(Tolerance::new(-1e-9), Err(Error::InvalidTolerance(-1e-9)));
        assert!(Tolerance::new(f64::NAN).is_err());
        assert!(Tolerance::new(f64::INFINITY).is_err());
        assert_eq!(Tolerance::default().value(), DEFAULT_TOLERANCE);
    }

    #[test]
    fn edge_is_unordered() {
        assert_eq!(Edge::new(3, 1), Edge::new(1, 3));
        let e = Edge::new(7, 2).unwrap();
        assert_eq!((e.a(), e.b()), (2, 7));
        assert_eq!(e.to_string(), "2-7");
    }

    #[test]
    fn no_self_loops() {
        assert_eq!(Edge::new(4, 4), None);
    }

    #[test]
    fn matrix_layout() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(0.0, 4.0),
            Point::new(3.0, 4.0),
        ];
        let m = DistanceMatrix::from_points(&pts);
        assert_eq!(m.len(), 4);
        let pairs: Vec<_> = m.pairs().map(|(i, j, _)| (i, j)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        for (i, j, d) in m.pairs() {
            assert_eq!(d, pts[i].distance(&pts[j]));
        }
        assert_eq!(m.min(), 3.0);
    }

    #[test]
    fn empty_matrix_min_is_infinite() {
        assert_eq!(DistanceMatrix::from_points(&[]).min(), f64::INFINITY);
        assert_eq!(
            DistanceMatrix::from_points(&[Point::ORIGIN]).min(),
            f64::INFINITY
        );
    }

    #[test]
    fn unit_square() {
        let syms = symbols(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)], 2);
        let graph = NeighborGraphBuilder::default().build(&syms).unwrap();

        assert!((graph.min_distance() - 1.0).abs() < 1e-12);
        assert_eq!(graph.edge_count(), 4);
        assert!(graph.contains(0, 1));
        assert!(graph.contains(0, 2));
        assert!(graph.contains(1, 3));
        assert!(graph.contains(2, 3));
        // Diagonals at sqrt(2)
        assert!(!graph.contains(0, 3));
        assert!(!graph.contains(1, 2));
    }

    #[test]
    fn singleton_is_degenerate() {
        let syms = symbols(&[(0.5, 0.5)], 1);
        let graph = NeighborGraphBuilder::default().build(&syms).unwrap();
        assert!(graph.is_degenerate());
        assert_eq!(graph.min_distance(), f64::INFINITY);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn empty_is_degenerate() {
        let graph = NeighborGraphBuilder::default().build(&[]).unwrap();
        assert!(graph.is_degenerate());
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn two_points_form_one_edge() {
        let syms = symbols(&[(0.0, 0.0), (10.0, 0.0)], 1);
        let graph = NeighborGraphBuilder::default().build(&syms).unwrap();
        assert_eq!(graph.min_distance(), 10.0);
        assert_eq!(graph.edges(), &[Edge::new(0, 1).unwrap()]);
    }

    #[test]
    fn tolerance_widens_selection() {
        // Distances 1.0 and 1.05 along a line.
        let syms = symbols(&[(0.0, 0.0), (1.0, 0.0), (2.05, 0.0)], 2);

        let tight = NeighborGraphBuilder::new(Tolerance::EXACT)
            .build(&syms)
            .unwrap();
        assert_eq!(tight.edge_count(), 1);

        let loose = NeighborGraphBuilder::new(Tolerance::new(0.1).unwrap())
            .build(&syms)
            .unwrap();
        assert_eq!(loose.edge_count(), 2);
        assert!(loose.contains(1, 2));
    }

    #[test]
    fn rounding_is_absorbed_by_default_tolerance() {
        // The two gaps differ only by floating-point error.
        let syms = symbols(&[(0.1, 0.0), (0.2, 0.0), (0.3, 0.0)], 2);
        let graph = NeighborGraphBuilder::default().build(&syms).unwrap();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn edges_use_symbol_indices_not_rows() {
        let label = BitLabel::new(0, 4).unwrap();
        let syms = vec![
            Symbol::with_label(9, Point::new(0.0, 0.0), label),
            Symbol::with_label(4, Point::new(1.0, 0.0), label),
        ];
        let graph = NeighborGraphBuilder::default().build(&syms).unwrap();
        assert_eq!(graph.edges(), &[Edge::new(4, 9).unwrap()]);
    }

    #[test]
    fn rejects_non_finite_position() {
        let mut syms = symbols(&[(0.0, 0.0), (1.0, 0.0)], 1);
        syms.push(Symbol::new(2, Point::new(f64::NAN, 0.0), 2).unwrap());
        assert_eq!(
            NeighborGraphBuilder::default().build(&syms).unwrap_err(),
            Error::NonFinitePosition { index: 2 }
        );
    }

    #[test]
    fn rejects_distance_that_overflows() {
        // Both positions are finite; their separation is not.
        let syms = symbols(&[(-1e308, 0.0), (1e308, 0.0)], 1);
        assert_eq!(
            NeighborGraphBuilder::default().build(&syms).unwrap_err(),
            Error::NonFiniteDistance { a: 0, b: 1 }
        );
    }

    #[test]
    fn finite_graph_is_never_degenerate() {
        let syms = symbols(&[(-1e300, 0.0), (1e300, 0.0)], 1);
        let graph = NeighborGraphBuilder::default().build(&syms).unwrap();
        assert!(graph.min_distance().is_finite());
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.is_degenerate());
    }

    #[test]
    fn rejects_duplicate_index() {
        let label = BitLabel::new(1, 1).unwrap();
        let syms = vec![
            Symbol::with_label(1, Point::new(0.0, 0.0), label),
            Symbol::with_label(1, Point::new(1.0, 0.0), label),
        ];
        assert_eq!(
            NeighborGraphBuilder::default().build(&syms).unwrap_err(),
            Error::DuplicateIndex(1)
        );
    }

    #[test]
    fn coincident_points_have_zero_min_distance() {
        let syms = symbols(&[(1.0, 1.0), (1.0, 1.0), (5.0, 5.0)], 2);
        let graph = NeighborGraphBuilder::default().build(&syms).unwrap();
        assert_eq!(graph.min_distance(), 0.0);
        assert_eq!(graph.edges(), &[Edge::new(0, 1).unwrap()]);
    }
}
