use std::fmt;
use std::path::PathBuf;

use crate::utils::Summary;

pub trait DataReader {
    fn read_data(&self) -> Result<Table, ReadError>;
}

#[derive(Debug)]
pub enum ReadError {
    NotFound(PathBuf),
    Io(std::io::Error),
    Csv(csv::Error),
    Pattern(glob::PatternError),
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    Empty(PathBuf),
    File(FileError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    UnknownFileType(PathBuf),
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::UnknownFileType(path) => {
                write!(f, "Unknown file type: {}", path.display())
            }
        }
    }
}

impl std::error::Error for FileError {}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            ReadError::Io(e) => write!(f, "I/O error: {}", e),
            ReadError::Csv(e) => write!(f, "Failed to parse delimited file: {}", e),
            ReadError::Pattern(e) => write!(f, "Invalid search pattern: {}", e),
            ReadError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} columns, expected {}",
                row, found, expected
            ),
            ReadError::Empty(path) => write!(f, "No data rows in {}", path.display()),
            ReadError::File(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ReadError {}

impl From<std::io::Error> for ReadError {
    fn from(err: std::io::Error) -> ReadError {
        ReadError::Io(err)
    }
}

impl From<csv::Error> for ReadError {
    fn from(err: csv::Error) -> ReadError {
        ReadError::Csv(err)
    }
}

impl From<glob::PatternError> for ReadError {
    fn from(err: glob::PatternError) -> ReadError {
        ReadError::Pattern(err)
    }
}

impl From<glob::GlobError> for ReadError {
    fn from(err: glob::GlobError) -> ReadError {
        ReadError::Io(err.into_error())
    }
}

impl From<FileError> for ReadError {
    fn from(err: FileError) -> ReadError {
        ReadError::File(err)
    }
}

/// Dense numeric table, row-major. Missing or non-numeric cells are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub rows: usize,
    pub cols: usize,
    pub buffer: Vec<f64>,
}

impl Table {
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        (index < self.rows).then(|| &self.buffer[index * self.cols..(index + 1) * self.cols])
    }

    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        (index < self.cols).then(|| {
            self.buffer
                .iter()
                .skip(index)
                .step_by(self.cols)
                .copied()
                .collect()
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Csv,
    Tsv,
}

impl FileType {
    pub fn delimiter(&self) -> u8 {
        match self {
            FileType::Csv => b',',
            FileType::Tsv => b'\t',
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = Summary::from_values(&self.buffer);

        write!(
            f,
            "Rows: {}\nColumns: {}\nBuffer Length: {}\nMin value: {}\nMax value: {}",
            self.rows,
            self.cols,
            self.buffer.len(),
            summary.min,
            summary.max,
        )
    }
}
