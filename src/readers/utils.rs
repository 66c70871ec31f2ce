use super::types::{FileError, FileType};
use std::path::Path;

pub fn reader_from_filetype(path: &Path) -> Result<FileType, FileError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => Ok(FileType::Csv),
        Some("tsv") => Ok(FileType::Tsv),
        _ => Err(FileError::UnknownFileType(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_from_filetype() {
        assert_eq!(
            reader_from_filetype(Path::new("Fig1_k0.1.csv")),
            Ok(FileType::Csv)
        );
        assert_eq!(
            reader_from_filetype(Path::new("profiles.tsv")),
            Ok(FileType::Tsv)
        );
        assert!(reader_from_filetype(Path::new("chlor_a.tif")).is_err());
        assert!(reader_from_filetype(Path::new("no_extension")).is_err());
    }
}
