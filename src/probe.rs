//! Filesystem existence probing
//!
//! The finder only ever asks one question of the filesystem: does this path
//! exist. The trait keeps that surface narrow and lets tests substitute an
//! in-memory answer.

use std::io;
use std::path::Path;

/// Answers "does this path exist" for the finder.
///
/// Plain absence must be reported as `Ok(false)`; an error means the check
/// itself failed (permissions, I/O) and is propagated rather than treated as
/// a miss.
pub trait PathProbe {
    fn exists(&self, path: &Path) -> io::Result<bool>;
}

/// Probe backed by the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl PathProbe for RealFs {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_fs_reports_missing_path() {
        let temp = std::env::temp_dir().join("findtier-does-not-exist.txt");
        assert!(!RealFs.exists(&temp).unwrap());
    }

    #[test]
    fn test_real_fs_reports_existing_path() {
        let temp = std::env::temp_dir();
        assert!(RealFs.exists(&temp).unwrap());
    }
}
