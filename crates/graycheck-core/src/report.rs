//! One-shot Gray-code check of a constellation.

use crate::{
    classify, count_graph_violations, ClassifiedEdge, Constellation, NeighborGraphBuilder, Result,
    Tolerance,
};

/// Outcome of [`check`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GrayReport {
    /// Number of symbols checked
    pub symbols: usize,
    /// Label width in bits, `None` for an empty constellation
    pub label_width: Option<u32>,
    /// Global minimum distance; `+inf` for fewer than two symbols
    pub min_distance: f64,
    /// Tolerance used to select edges
    pub tolerance: f64,
    /// Edges that are not single-bit transitions
    pub violations: usize,
    pub edges: Vec<ClassifiedEdge>,
}

impl GrayReport {
    /// True when every nearest-neighbor edge is a single-bit transition.
    pub fn is_gray_coded(&self) -> bool {
        self.violations == 0
    }

    pub fn invalid_edges(&self) -> impl Iterator<Item = &ClassifiedEdge> {
        self.edges.iter().filter(|e| !e.transition.is_valid())
    }
}

/// Build the neighbor graph and classify every edge.
pub fn check(constellation: &Constellation, tolerance: Tolerance) -> Result<GrayReport> {
    let graph = NeighborGraphBuilder::new(tolerance).build(constellation.symbols())?;
    let violations = count_graph_violations(&graph, constellation)?;
    let edges = classify(graph.edges(), |i| constellation.label_of(i))?;

    Ok(GrayReport {
        symbols: constellation.len(),
        label_width: constellation.label_width(),
        min_distance: graph.min_distance(),
        tolerance: tolerance.value(),
        violations,
        edges,
    })
}
