//! Symbol tables: one row per symbol with `index`, `real` and `imag` columns.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use graycheck_core::{Constellation, Point};
use tracing::debug;

use crate::table::{column, field, reader};
use crate::{Error, Result};

pub const INDEX_COLUMN: &str = "index";
pub const REAL_COLUMN: &str = "real";
pub const IMAG_COLUMN: &str = "imag";

/// Read a symbol table, labelling each symbol by its index on `width` bits.
///
/// `width = None` derives the smallest width that holds the largest index.
/// Extra columns are ignored and row order does not matter.
pub fn read_constellation<R: Read>(input: R, width: Option<u32>) -> Result<Constellation> {
    let mut rdr = reader(input);
    let headers = rdr.headers()?.clone();
    let index_col = column(&headers, INDEX_COLUMN)?;
    let real_col = column(&headers, REAL_COLUMN)?;
    let imag_col = column(&headers, IMAG_COLUMN)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let index: u64 = field(&record, index_col, INDEX_COLUMN)?;
        let x: f64 = field(&record, real_col, REAL_COLUMN)?;
        let y: f64 = field(&record, imag_col, IMAG_COLUMN)?;
        rows.push((index, Point::new(x, y)));
    }

    let constellation = Constellation::from_indexed_points(rows, width)?;
    debug!(
        symbols = constellation.len(),
        width = ?constellation.label_width(),
        "loaded symbol table"
    );
    Ok(constellation)
}

/// [`read_constellation`] from a file.
pub fn load_constellation(path: impl AsRef<Path>, width: Option<u32>) -> Result<Constellation> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), "reading constellation");
    read_constellation(file, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const QPSK: &str = "index,real,imag\n0,1,1\n1,-1,1\n2,-1,-1\n3,1,-1\n";

    #[test]
    fn reads_symbols() {
        let c = read_constellation(QPSK.as_bytes(), None).unwrap();
        assert_eq!(c.len(), 4);
        assert_eq!(c.label_width(), Some(2));
        assert_eq!(c.get(2).unwrap().position(), Point::new(-1.0, -1.0));
        assert_eq!(c.label_of(1).unwrap().to_string(), "01");
    }

    #[test]
    fn column_order_and_extras_are_ignored() {
        let csv = "imag,power,real,index\n1.0,2.0,1.0,0\n-1.0,2.0,1.0,1\n";
        let c = read_constellation(csv.as_bytes(), Some(4)).unwrap();
        assert_eq!(c.get(1).unwrap().position(), Point::new(1.0, -1.0));
        assert_eq!(c.label_of(1).unwrap().to_string(), "0001");
    }

    #[test]
    fn whitespace_is_trimmed() {
        let csv = "index, real, imag\n 0, 0.5 , -0.5\n";
        let c = read_constellation(csv.as_bytes(), None).unwrap();
        assert_eq!(c.get(0).unwrap().position(), Point::new(0.5, -0.5));
    }

    #[test]
    fn missing_column_is_named() {
        let csv = "index,real\n0,1\n";
        let err = read_constellation(csv.as_bytes(), None).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(matches!(err, Error::MissingColumn { column: "imag" }));
        assert!(err.to_string().contains("imag"));
    }

    #[test]
    fn malformed_index_is_rejected() {
        let csv = "index,real,imag\n-1,0,0\n";
        assert!(matches!(
            read_constellation(csv.as_bytes(), None),
            Err(Error::MalformedCell { column: "index", line: 2, .. })
        ));
    }

    #[test]
    fn duplicate_index_is_rejected() {
        let csv = "index,real,imag\n0,0,0\n0,1,0\n";
        assert!(matches!(
            read_constellation(csv.as_bytes(), None),
            Err(Error::Constellation(graycheck_core::Error::DuplicateIndex(0)))
        ));
    }

    #[test]
    fn width_too_small_is_rejected() {
        let err = read_constellation(QPSK.as_bytes(), Some(1)).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn header_only_table_is_empty() {
        let c = read_constellation("index,real,imag\n".as_bytes(), None).unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(QPSK.as_bytes()).unwrap();
        let c = load_constellation(file.path(), Some(2)).unwrap();
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("constellation.csv");
        let err = load_constellation(&path, None).unwrap_err();
        assert!(!err.is_invalid_input());
        assert!(err.to_string().contains("constellation.csv"));
    }
}
