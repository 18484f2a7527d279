//! Gray-code checks for modulation constellations
//!
//! Builds the minimum-distance neighbor graph of a constellation and checks
//! that every pair of nearest neighbors carries labels differing in exactly
//! one bit.
//!
//! # Neighbor graph
//!
//! For symbols at positions `p_0..p_n`, the graph joins `i` and `j` when
//! `|p_i - p_j| <= d_min + tolerance`, where `d_min` is the minimum over all
//! pairs. Fewer than two symbols gives `d_min = +inf` and no edges.
//!
//! # Gray check
//!
//! An edge is valid when `label_i XOR label_j` has exactly one bit set. The
//! reported diagnostic is the number of invalid edges.
//!
//! ```
//! use graycheck_core::{check, Constellation, Point, Tolerance};
//!
//! let rows = [(0, (0.0, 0.0)), (1, (0.0, 1.0)), (2, (1.0, 0.0)), (3, (1.0, 1.0))];
//! let constellation = Constellation::from_indexed_points(
//!     rows.iter().map(|&(i, p)| (i, Point::from(p))),
//!     Some(2),
//! )?;
//! let report = check(&constellation, Tolerance::default())?;
//! assert_eq!(report.violations, 0);
//! # Ok::<(), graycheck_core::Error>(())
//! ```

mod error;
mod graph;
mod gray;
mod label;
mod point;
mod report;
mod symbol;

pub use error::{Error, Result};
pub use graph::{DistanceMatrix, Edge, NeighborGraph, NeighborGraphBuilder, Tolerance};
pub use gray::{
    classify, classify_edge, count_graph_violations, count_violations, is_single_bit_transition,
    ClassifiedEdge, Transition,
};
pub use label::BitLabel;
pub use point::Point;
pub use report::{check, GrayReport};
pub use symbol::{Constellation, Symbol};

/// Default slack when selecting minimum-distance edges
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Widest supported label
pub const MAX_LABEL_WIDTH: u32 = u64::BITS;
