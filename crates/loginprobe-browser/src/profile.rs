use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// A Chrome user-data directory scoped to one session.
#[derive(Debug)]
pub struct ProfileDir {
    path: PathBuf,
    is_temporary: bool,
}

impl ProfileDir {
    /// Create a throwaway profile that is deleted on drop.
    pub fn temporary() -> Result<Self> {
        let temp_dir = tempfile::Builder::new()
            .prefix("loginprobe-")
            .tempdir()
            .map_err(Error::Io)?;

        Ok(Self {
            path: temp_dir.keep(),
            is_temporary: true,
        })
    }

    /// Use a persistent profile at `path`, creating it if needed.
    pub fn persistent(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(&path).map_err(Error::Io)?;
        }

        Ok(Self {
            path,
            is_temporary: false,
        })
    }

    /// Get the profile directory path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if this is a temporary profile
    pub fn is_temporary(&self) -> bool {
        self.is_temporary
    }
}

impl Drop for ProfileDir {
    fn drop(&mut self) {
        if self.is_temporary && self.path.exists() {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }
}
