//! Header-addressed CSV access shared by the table loaders.

use std::io::Read;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::{Error, Result};

pub(crate) fn reader<R: Read>(input: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(false)
        .from_reader(input)
}

/// Position of `name` in the header row.
pub(crate) fn column(headers: &StringRecord, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(Error::MissingColumn { column: name })
}

/// Parse the cell at `idx`, reporting the source line on failure.
pub(crate) fn field<T: FromStr>(record: &StringRecord, idx: usize, column: &'static str) -> Result<T> {
    let raw = record.get(idx).unwrap_or_default();
    raw.parse().map_err(|_| Error::MalformedCell {
        line: record.position().map_or(0, |p| p.line()),
        column,
        value: raw.to_string(),
    })
}
