//! Upward directory traversal
//!
//! Yields ancestor directories from a start directory toward the filesystem
//! root, pairing each with its depth (0 = the start directory itself). An
//! optional boundary directory terminates the walk and is never yielded.

use std::path::{Path, PathBuf};

/// Iterator over `(directory, depth)` pairs from a start directory upward.
///
/// The walk stops before yielding the boundary directory, so a start equal to
/// the boundary yields nothing. Without a boundary the walk ends after the
/// root (the first directory with no parent). Boundary comparison is plain
/// path equality; a boundary that is not an ancestor of the start never
/// matches and the walk runs to the root.
#[derive(Debug)]
pub struct Ancestors {
    next: Option<PathBuf>,
    stop: Option<PathBuf>,
    depth: usize,
}

impl Ancestors {
    pub fn new(start: PathBuf, stop: Option<PathBuf>) -> Self {
        Self {
            next: Some(start),
            stop,
            depth: 0,
        }
    }
}

impl Iterator for Ancestors {
    type Item = (PathBuf, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let dir = self.next.take()?;

        if Some(dir.as_path()) == self.stop.as_deref() {
            return None;
        }

        self.next = dir.parent().map(Path::to_path_buf);
        let depth = self.depth;
        self.depth += 1;

        Some((dir, depth))
    }
}
