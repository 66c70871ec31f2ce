pub mod delimited;
pub mod directory;
pub mod types;
pub mod utils;

pub use delimited::DelimitedReader;
pub use directory::{DATA_DIR_ENV, DEFAULT_TABLES, DataDirectory};
pub use types::{DataReader, FileError, FileType, ReadError, Table};
pub use utils::reader_from_filetype;

use std::path::PathBuf;

pub fn create_reader(file_name: PathBuf) -> Result<Box<dyn DataReader>, FileError> {
    let file_type = reader_from_filetype(&file_name)?;
    Ok(Box::new(DelimitedReader {
        file_name,
        delimiter: file_type.delimiter(),
    }))
}
