//! Gray-code adjacency classification.
//!
//! An edge of the neighbor graph is a valid Gray transition when the labels
//! of its endpoints differ in exactly one bit.

use crate::{BitLabel, Constellation, Edge, Error, NeighborGraph, Result};

/// True iff `a` and `b` differ in exactly one bit.
///
/// Labels of different widths are rejected rather than compared.
pub fn is_single_bit_transition(a: &BitLabel, b: &BitLabel) -> Result<bool> {
    let xor = a.xor(b)?;
    Ok(xor.is_power_of_two())
}

/// Verdict for a single edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Transition {
    /// Endpoints differ in exactly one bit.
    Valid,
    /// Endpoints differ in zero or several bits.
    Invalid,
}

impl Transition {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// An edge with its endpoint labels and verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClassifiedEdge {
    pub edge: Edge,
    pub labels: (BitLabel, BitLabel),
    /// Number of differing bits
    pub hamming: u32,
    pub transition: Transition,
}

/// Classify one edge using a label lookup.
pub fn classify_edge<F>(edge: Edge, label_of: &F) -> Result<ClassifiedEdge>
where
    F: Fn(u64) -> Option<BitLabel>,
{
    let left = label_of(edge.a()).ok_or(Error::UnknownSymbol(edge.a()))?;
    let right = label_of(edge.b()).ok_or(Error::UnknownSymbol(edge.b()))?;
    let hamming = left.hamming_distance(&right)?;
    let transition = if hamming == 1 {
        Transition::Valid
    } else {
        Transition::Invalid
    };
    Ok(ClassifiedEdge {
        edge,
        labels: (left, right),
        hamming,
        transition,
    })
}

/// Classify every edge in order.
pub fn classify<F>(edges: &[Edge], label_of: F) -> Result<Vec<ClassifiedEdge>>
where
    F: Fn(u64) -> Option<BitLabel>,
{
    edges.iter().map(|&e| classify_edge(e, &label_of)).collect()
}

/// Number of edges whose endpoints are not a single-bit transition.
///
/// Stops at the first invalid edge reference or width mismatch; no partial
/// count is returned.
pub fn count_violations<F>(edges: &[Edge], label_of: F) -> Result<usize>
where
    F: Fn(u64) -> Option<BitLabel>,
{
    let mut violations = 0;
    for &edge in edges {
        if !classify_edge(edge, &label_of)?.transition.is_valid() {
            violations += 1;
        }
    }
    Ok(violations)
}

/// [`count_violations`] over a graph and the constellation it was built from.
pub fn count_graph_violations(graph: &NeighborGraph, constellation: &Constellation) -> Result<usize> {
    count_violations(graph.edges(), |i| constellation.label_of(i))
}
