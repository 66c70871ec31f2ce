use super::{DataReader, ReadError, Table};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;

/// Reads a headerless numeric table. Everything after a `#` is dropped,
/// blank lines are skipped, cells that do not parse as numbers become NaN.
pub struct DelimitedReader {
    pub file_name: PathBuf,
    pub delimiter: u8,
}

impl DataReader for DelimitedReader {
    fn read_data(&self) -> Result<Table, ReadError> {
        let file = File::open(&self.file_name).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ReadError::NotFound(self.file_name.clone()),
            _ => ReadError::Io(e),
        })?;

        let table = parse_table(file, self.delimiter)?;

        if table.rows == 0 {
            return Err(ReadError::Empty(self.file_name.clone()));
        }

        Ok(table)
    }
}

fn parse_cell(cell: &str) -> f64 {
    cell.parse::<f64>().unwrap_or(f64::NAN)
}

// Drops `#` comments wherever they start on a line, then lines left blank.
fn strip_comments<R: BufRead>(reader: R) -> Result<String, ReadError> {
    let mut text = String::new();

    for line in reader.lines() {
        let line = line?;
        let data = match line.find('#') {
            Some(start) => &line[..start],
            None => line.as_str(),
        };
        if data.trim().is_empty() {
            continue;
        }
        text.push_str(data);
        text.push('\n');
    }

    Ok(text)
}

pub(crate) fn parse_table<R: Read>(reader: R, delimiter: u8) -> Result<Table, ReadError> {
    let text = strip_comments(BufReader::new(reader))?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut buffer = Vec::new();
    let mut rows = 0;
    let mut cols = 0;

    for result in csv_reader.records() {
        let record = result?;

        if rows == 0 {
            cols = record.len();
        } else if record.len() != cols {
            return Err(ReadError::RaggedRow {
                row: rows + 1,
                expected: cols,
                found: record.len(),
            });
        }

        buffer.extend(record.iter().map(parse_cell));
        rows += 1;
    }

    Ok(Table { rows, cols, buffer })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_parse_two_column_table() {
        let data = "0.5,12.0\n1.0,24.5\n1.5,30.25\n";
        let table = parse_table(data.as_bytes(), b',').unwrap();

        assert_eq!(table.rows, 3);
        assert_eq!(table.cols, 2);
        assert_eq!(table.row(1), Some(&[1.0, 24.5][..]));
        assert_eq!(table.column(1), Some(vec![12.0, 24.5, 30.25]));
        assert!(table.row(3).is_none());
        assert!(table.column(2).is_none());
    }

    #[test]
    fn test_comments_blanks_and_whitespace() {
        let data = "# extracted from figure 1\n\n 1 , 2 \n3,4\n\n";
        let table = parse_table(data.as_bytes(), b',').unwrap();

        assert_eq!((table.rows, table.cols), (2, 2));
        assert_eq!(table.buffer, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_whitespace_only_lines_are_skipped() {
        let data = "1,2\n   \n3,4\n\t\n  ";
        let table = parse_table(data.as_bytes(), b',').unwrap();

        assert_eq!((table.rows, table.cols), (2, 2));
        assert_eq!(table.buffer, vec![1.0, 2.0, 3.0, 4.0]);

        let tabbed = parse_table("1\t2\n \t \n3\t4\n".as_bytes(), b'\t').unwrap();
        assert_eq!(tabbed.buffer, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_trailing_comments_are_dropped() {
        let data = "1,2 # digitised\n3,4#\n   # indented note\n5,6\n";
        let table = parse_table(data.as_bytes(), b',').unwrap();

        assert_eq!((table.rows, table.cols), (3, 2));
        assert_eq!(table.buffer, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_missing_and_malformed_cells_are_nan() {
        let data = "1,,3\n4,abc,6\n";
        let table = parse_table(data.as_bytes(), b',').unwrap();

        assert_eq!(table.buffer[0], 1.0);
        assert!(table.buffer[1].is_nan());
        assert!(table.buffer[4].is_nan());
        assert_eq!(table.buffer[5], 6.0);
    }

    #[test]
    fn test_ragged_rows_fail() {
        let data = "1,2\n3,4,5\n";
        let err = parse_table(data.as_bytes(), b',').unwrap_err();
        assert!(matches!(
            err,
            ReadError::RaggedRow {
                row: 2,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_tab_delimited() {
        let data = "1\t2\n3\t4\n";
        let table = parse_table(data.as_bytes(), b'\t').unwrap();
        assert_eq!(table.buffer, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_read_data_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Fig1_k0.1.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"0,100\n10,36.8\n").unwrap();

        let reader = DelimitedReader {
            file_name: path,
            delimiter: b',',
        };
        let table = reader.read_data().unwrap();
        assert_eq!((table.rows, table.cols), (2, 2));
    }

    #[test]
    fn test_read_data_errors() {
        let dir = tempdir().unwrap();

        let missing = DelimitedReader {
            file_name: dir.path().join("absent.csv"),
            delimiter: b',',
        };
        assert!(matches!(missing.read_data(), Err(ReadError::NotFound(_))));

        let path = dir.path().join("empty.csv");
        File::create(&path).unwrap().write_all(b"# header only\n").unwrap();
        let empty = DelimitedReader {
            file_name: path,
            delimiter: b',',
        };
        assert!(matches!(empty.read_data(), Err(ReadError::Empty(_))));
    }
}
