//! SVG rendering for graycheck
//!
//! - **Constellation diagram**: symbols, bit labels and nearest-neighbor
//!   edges coloured by Gray-check verdict
//! - **BER plot**: one BER-vs-SNR curve per configuration on a log axis
//!
//! Rendering only consumes results; nothing here feeds back into the check.

mod ber;
mod constellation;
mod error;

pub use ber::{
    ber_svg, draw_ber, plot_ranges, plottable_points, render_ber, BerStyle, BER_TITLE,
    LEGEND_TITLE,
};
pub use constellation::{
    constellation_svg, draw_constellation, edge_color, render_constellation, Bounds,
    ConstellationStyle, CONSTELLATION_TITLE,
};
pub use error::{Error, Result};
