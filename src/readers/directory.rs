use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use super::{ReadError, Table, create_reader};

/// Environment variable that overrides the configured data directory.
pub const DATA_DIR_ENV: &str = "SVERDRUP_DATA_DIR";

/// Tables extracted from figure 1 for k = 0.1 and k = 0.075.
pub const DEFAULT_TABLES: [&str; 2] = ["Fig1_k0.1.csv", "Fig1_k0.075.csv"];

/// Folder holding the extracted experimental tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Uses `env_value` when set and non-empty, `configured` otherwise.
    pub fn resolve<P: Into<PathBuf>>(env_value: Option<String>, configured: P) -> Self {
        match env_value.filter(|v| !v.trim().is_empty()) {
            Some(dir) => {
                debug!(dir = %dir, "data directory overridden from {}", DATA_DIR_ENV);
                Self::new(dir)
            }
            None => Self::new(configured),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Looks for `file_name` directly under the root first, then recursively.
    pub fn find(&self, file_name: &str) -> Option<PathBuf> {
        let direct_path = self.root.join(file_name);
        if direct_path.is_file() {
            return Some(direct_path);
        }

        Self::search_file_recursively(&self.root, file_name)
    }

    fn search_file_recursively(base_dir: &Path, filename: &str) -> Option<PathBuf> {
        if !base_dir.exists() {
            return None;
        }

        WalkDir::new(base_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .find(|entry| {
                entry.file_type().is_file()
                    && entry.path().file_name().is_some_and(|name| name == filename)
            })
            .map(|entry| entry.into_path())
    }

    /// CSV tables directly under the root, sorted by path.
    pub fn available_tables(&self) -> Result<Vec<PathBuf>, ReadError> {
        let root = glob::Pattern::escape(&self.root.to_string_lossy());
        let pattern = format!("{}/*.csv", root);

        let mut tables = Vec::new();
        for entry in glob::glob(&pattern)? {
            tables.push(entry?);
        }
        tables.sort();

        Ok(tables)
    }

    pub fn load_table(&self, file_name: &str) -> Result<Table, ReadError> {
        let path = self
            .find(file_name)
            .ok_or_else(|| ReadError::NotFound(self.root.join(file_name)))?;

        let table = create_reader(path.clone())?.read_data()?;
        info!(
            path = %path.display(),
            rows = table.rows,
            cols = table.cols,
            "loaded table"
        );

        Ok(table)
    }

    pub fn load_table_pair(
        &self,
        file_name_1: &str,
        file_name_2: &str,
    ) -> Result<(Table, Table), ReadError> {
        Ok((self.load_table(file_name_1)?, self.load_table(file_name_2)?))
    }

    /// Loads [`DEFAULT_TABLES`].
    pub fn load_default_pair(&self) -> Result<(Table, Table), ReadError> {
        self.load_table_pair(DEFAULT_TABLES[0], DEFAULT_TABLES[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(path: &Path, contents: &str) {
        let mut file = File::create(path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn test_resolve_prefers_env_value() {
        let dir = DataDirectory::resolve(Some("/tmp/override".to_string()), "./data");
        assert_eq!(dir.root(), Path::new("/tmp/override"));

        let dir = DataDirectory::resolve(None, "./data");
        assert_eq!(dir.root(), Path::new("./data"));

        let dir = DataDirectory::resolve(Some("  ".to_string()), "./data");
        assert_eq!(dir.root(), Path::new("./data"));
    }

    #[test]
    fn test_load_default_pair() {
        let tmp = tempdir().unwrap();
        write_file(&tmp.path().join(DEFAULT_TABLES[0]), "0,100\n5,60.65\n");
        write_file(&tmp.path().join(DEFAULT_TABLES[1]), "0,100\n5,68.73\n10,47.24\n");

        let dir = DataDirectory::new(tmp.path());
        let (f1, f2) = dir.load_default_pair().unwrap();

        assert_eq!((f1.rows, f1.cols), (2, 2));
        assert_eq!((f2.rows, f2.cols), (3, 2));
        assert_eq!(f2.column(0), Some(vec![0.0, 5.0, 10.0]));
    }

    #[test]
    fn test_find_searches_subdirectories() {
        let tmp = tempdir().unwrap();
        let nested = tmp.path().join("extracted_data").join("fig1");
        fs::create_dir_all(&nested).unwrap();
        write_file(&nested.join("Fig1_k0.1.csv"), "1,2\n");

        let dir = DataDirectory::new(tmp.path());
        assert_eq!(dir.find("Fig1_k0.1.csv"), Some(nested.join("Fig1_k0.1.csv")));
        assert!(dir.find("Fig1_k0.075.csv").is_none());

        let table = dir.load_table("Fig1_k0.1.csv").unwrap();
        assert_eq!(table.buffer, vec![1.0, 2.0]);
    }

    #[test]
    fn test_missing_table_fails() {
        let tmp = tempdir().unwrap();
        write_file(&tmp.path().join(DEFAULT_TABLES[0]), "1,2\n");

        let dir = DataDirectory::new(tmp.path());
        assert!(matches!(
            dir.load_default_pair(),
            Err(ReadError::NotFound(_))
        ));
    }

    #[test]
    fn test_unknown_file_type_fails() {
        let tmp = tempdir().unwrap();
        write_file(&tmp.path().join("notes.md"), "1,2\n");

        let dir = DataDirectory::new(tmp.path());
        assert!(matches!(dir.load_table("notes.md"), Err(ReadError::File(_))));
    }

    #[test]
    fn test_available_tables() {
        let tmp = tempdir().unwrap();
        write_file(&tmp.path().join("b.csv"), "1\n");
        write_file(&tmp.path().join("a.csv"), "1\n");
        write_file(&tmp.path().join("c.tsv"), "1\n");

        let dir = DataDirectory::new(tmp.path());
        let tables = dir.available_tables().unwrap();

        assert_eq!(
            tables,
            vec![tmp.path().join("a.csv"), tmp.path().join("b.csv")]
        );
    }
}
