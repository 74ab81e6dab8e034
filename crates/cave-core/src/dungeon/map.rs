//! Map descriptions
//!
//! A map is line-oriented text: each line is one board row. The first line
//! fixes the column count; cells are read row-major from the concatenation
//! of all lines, so later lines are not checked for length.

use std::fs;
use std::path::Path;

use crate::DEFAULT_MAP;
use crate::world::MapError;

/// Validated map text ready for board construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapDescription {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl MapDescription {
    /// Build a description from individual row strings
    pub fn from_lines<I, S>(lines: I) -> Result<Self, MapError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows = 0;
        let mut cols = 0;
        let mut cells = Vec::new();

        for line in lines {
            let line = line.as_ref();
            if rows == 0 {
                cols = line.chars().count();
            }
            cells.extend(line.chars());
            rows += 1;
        }

        if rows == 0 || cols == 0 {
            return Err(MapError::Empty);
        }
        if cells.len() < rows * cols {
            return Err(MapError::Truncated {
                rows,
                cols,
                found: cells.len(),
            });
        }
        cells.truncate(rows * cols);

        Ok(Self { rows, cols, cells })
    }

    /// Parse map text, one row per line.
    ///
    /// A trailing carriage return on each line is dropped so Windows files load.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        Self::from_lines(text.lines().map(|line| line.strip_suffix('\r').unwrap_or(line)))
    }

    /// Read a map file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Read a map file, falling back to the built-in map when it cannot be read.
    ///
    /// A file that is read but malformed is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, MapError> {
        match Self::load(path) {
            Ok(map) => Ok(map),
            Err(e @ MapError::Io { .. }) => {
                log::warn!("{}; using the built-in map", e);
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Character at (row, col); callers stay within `rows` x `cols`
    pub fn cell(&self, row: usize, col: usize) -> char {
        self.cells[row * self.cols + col]
    }

    /// All cell characters in row-major order
    pub fn cells(&self) -> &[char] {
        &self.cells
    }
}

impl Default for MapDescription {
    /// The built-in 7x7 map
    fn default() -> Self {
        let cols = DEFAULT_MAP[0].len();
        Self {
            rows: DEFAULT_MAP.len(),
            cols,
            cells: DEFAULT_MAP.iter().flat_map(|row| row.chars()).collect(),
        }
    }
}
