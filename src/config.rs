use std::path::{Path, PathBuf};
use std::time::Duration;

/// Store configuration
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Data file identifier, used verbatim as the file name
    pub name: String,
    /// Directory holding the data file; `None` means the working directory
    pub directory: Option<PathBuf>,
    /// How long a session waits on a locked file; `None` keeps rusqlite's default
    pub busy_timeout: Option<Duration>,
}

impl StoreConfig {
    /// Create a config for the data file called `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directory: None,
            busy_timeout: None,
        }
    }

    pub fn with_directory(mut self, directory: impl AsRef<Path>) -> Self {
        self.directory = Some(directory.as_ref().to_path_buf());
        self
    }

    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = Some(timeout);
        self
    }

    /// Full path of the data file
    pub fn path(&self) -> PathBuf {
        match &self.directory {
            Some(dir) => dir.join(&self.name),
            None => PathBuf::from(&self.name),
        }
    }
}
