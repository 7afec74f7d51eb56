use std::{fs, path::Path};

use tempfile::TempDir;

/// A definition document written to a scratch directory.
#[allow(dead_code)]
#[derive(Debug)]
pub struct DefinitionFile {
    dir: TempDir,
    name: String,
}

#[allow(dead_code)]
impl DefinitionFile {
    pub fn new(name: &str, contents: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(name), contents).unwrap();
        Self {
            dir,
            name: name.to_string(),
        }
    }

    pub fn path(&self) -> std::path::PathBuf {
        self.dir.path().join(&self.name)
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
