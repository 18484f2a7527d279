//! Input loading for graycheck
//!
//! - **Symbol tables**: CSV with `index`, `real`, `imag` columns
//! - **BER tables**: `ber_<config>.csv` with `SNR_dB`, `BER` columns
//! - **Config**: JSON [`CheckConfig`]
//!
//! Columns are addressed by header name; a missing column is reported by
//! name before any row is read.

mod ber;
mod config;
mod constellation;
mod error;
mod table;

pub use ber::{
    config_name, discover_ber_files, load_ber_curve, load_ber_dir, read_ber_curve, BerCurve,
    BerPoint, BER_COLUMN, SNR_COLUMN,
};
pub use config::CheckConfig;
pub use constellation::{
    load_constellation, read_constellation, IMAG_COLUMN, INDEX_COLUMN, REAL_COLUMN,
};
pub use error::{Error, Result};
