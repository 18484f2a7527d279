//! Symbols and validated constellations.

use std::collections::HashMap;

use crate::{BitLabel, Error, Point, Result};

/// One constellation point with its index and bit label.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Symbol {
    index: u64,
    position: Point,
    label: BitLabel,
}

impl Symbol {
    /// Create a symbol whose label is its index written on `width` bits.
    pub fn new(index: u64, position: Point, width: u32) -> Result<Self> {
        Ok(Self {
            index,
            position,
            label: BitLabel::new(index, width)?,
        })
    }

    /// Create a symbol with an explicit label.
    pub const fn with_label(index: u64, position: Point, label: BitLabel) -> Self {
        Self {
            index,
            position,
            label,
        }
    }

    #[inline]
    pub const fn index(&self) -> u64 {
        self.index
    }

    #[inline]
    pub const fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub const fn label(&self) -> BitLabel {
        self.label
    }
}

/// A set of symbols with unique indices and one shared label width.
#[derive(Debug, Clone, Default)]
pub struct Constellation {
    symbols: Vec<Symbol>,
    by_index: HashMap<u64, usize>,
}

impl Constellation {
    /// Validate and wrap a list of symbols.
    pub fn new(symbols: Vec<Symbol>) -> Result<Self> {
        let mut by_index = HashMap::with_capacity(symbols.len());
        for (pos, symbol) in symbols.iter().enumerate() {
            if by_index.insert(symbol.index, pos).is_some() {
                return Err(Error::DuplicateIndex(symbol.index));
            }
        }
        if let Some(first) = symbols.first() {
            for symbol in &symbols[1..] {
                // Surfaces a width mismatch as LabelWidthMismatch.
                first.label.xor(&symbol.label)?;
            }
        }
        Ok(Self { symbols, by_index })
    }

    /// Build from `(index, position)` rows, labelling each symbol by its index.
    ///
    /// With `width = None` the width is the smallest that holds the largest
    /// index. With an explicit width, every index must fit.
    pub fn from_indexed_points<I>(rows: I, width: Option<u32>) -> Result<Self>
    where
        I: IntoIterator<Item = (u64, Point)>,
    {
        let rows: Vec<(u64, Point)> = rows.into_iter().collect();
        let width = match width {
            Some(w) => w,
            None => rows
                .iter()
                .map(|&(index, _)| BitLabel::width_for(index))
                .max()
                .unwrap_or(1),
        };
        let symbols = rows
            .into_iter()
            .map(|(index, position)| Symbol::new(index, position, width))
            .collect::<Result<Vec<_>>>()?;
        Self::new(symbols)
    }

    /// Symbols in load order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Look up a symbol by its index (not its row position).
    pub fn get(&self, index: u64) -> Option<&Symbol> {
        self.by_index.get(&index).map(|&pos| &self.symbols[pos])
    }

    /// Label of the symbol with the given index.
    pub fn label_of(&self, index: u64) -> Option<BitLabel> {
        self.get(index).map(Symbol::label)
    }

    /// Common label width, `None` for an empty constellation.
    pub fn label_width(&self) -> Option<u32> {
        self.symbols.first().map(|s| s.label.width())
    }
}
