//! BER result tables and their discovery on disk.
//!
//! A simulator run writes one `ber_<config>.csv` per configuration with
//! `SNR_dB` and `BER` columns. The configuration name is the file stem with
//! the `ber_` prefix removed.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::table::{column, field, reader};
use crate::{Error, Result};

pub const SNR_COLUMN: &str = "SNR_dB";
pub const BER_COLUMN: &str = "BER";

const FILE_PREFIX: &str = "ber_";
const FILE_EXTENSION: &str = "csv";

/// One measured point of a BER curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BerPoint {
    pub snr_db: f64,
    pub ber: f64,
}

/// All points of one configuration, in file order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BerCurve {
    pub name: String,
    pub points: Vec<BerPoint>,
}

impl BerCurve {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Read a BER table under the given configuration name.
pub fn read_ber_curve<R: Read>(input: R, name: impl Into<String>) -> Result<BerCurve> {
    let mut rdr = reader(input);
    let headers = rdr.headers()?.clone();
    let snr_col = column(&headers, SNR_COLUMN)?;
    let ber_col = column(&headers, BER_COLUMN)?;

    let mut points = Vec::new();
    for record in rdr.records() {
        let record = record?;
        points.push(BerPoint {
            snr_db: field(&record, snr_col, SNR_COLUMN)?,
            ber: field(&record, ber_col, BER_COLUMN)?,
        });
    }
    Ok(BerCurve {
        name: name.into(),
        points,
    })
}

/// Configuration name of a BER file: `ber_qam16.csv` gives `qam16`.
///
/// Returns `None` for files that do not follow the `ber_*.csv` pattern.
pub fn config_name(path: &Path) -> Option<String> {
    if path.extension()? != FILE_EXTENSION {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    stem.strip_prefix(FILE_PREFIX).map(str::to_string)
}

/// Load a `ber_*.csv` file, naming the curve after its configuration.
pub fn load_ber_curve(path: impl AsRef<Path>) -> Result<BerCurve> {
    let path = path.as_ref();
    let name = config_name(path).unwrap_or_else(|| {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let curve = read_ber_curve(file, name)?;
    debug!(path = %path.display(), name = %curve.name, points = curve.points.len(), "loaded BER table");
    Ok(curve)
}

/// Every `ber_*.csv` regular file directly inside `dir`, sorted by name.
pub fn discover_ber_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && config_name(&path).is_some() {
            files.push(path);
        }
    }
    files.sort();
    debug!(dir = %dir.display(), found = files.len(), "discovered BER files");
    Ok(files)
}

/// Discover and load every BER table in `dir`.
pub fn load_ber_dir(dir: impl AsRef<Path>) -> Result<Vec<BerCurve>> {
    discover_ber_files(dir)?
        .iter()
        .map(load_ber_curve)
        .collect()
}
