//! Output sinks for rendered files

use grpc_handler_generator_common::{GeneratedFile, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Destination for rendered files
#[cfg_attr(test, mockall::automock)]
pub trait FileSink {
    /// Write one file, replacing any previous contents
    fn write_file(&mut self, file: &GeneratedFile) -> Result<()>;
}

/// Writes files into a directory on disk
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create the sink, creating `dir` if it does not exist yet
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSink for DirectorySink {
    fn write_file(&mut self, file: &GeneratedFile) -> Result<()> {
        fs::write(self.dir.join(&file.file_name), &file.contents)?;
        Ok(())
    }
}
