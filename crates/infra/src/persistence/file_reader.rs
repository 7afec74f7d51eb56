use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use sphinx_filtration_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading definition files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        File::open(path).map(BufReader::new).map_err(|source| read_error(path, source))
    }

    /// Read the entire file as UTF-8 text.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        let mut reader = Self::open_buffered(path)?;
        let mut text = String::new();
        reader.read_to_string(&mut text).map_err(|source| read_error(path, source))?;
        Ok(text)
    }
}

fn read_error(path: &Path, source: std::io::Error) -> InfrastructureError {
    InfrastructureError::FileRead {
        path: path.to_path_buf(),
        source,
    }
}
