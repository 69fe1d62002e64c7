//! Tiered upward search
//!
//! Walks ancestor directories from a start directory toward a boundary,
//! testing every manifest candidate at every level, then orders matches by
//! priority first and depth second. `find_up_all` returns every match;
//! `find_up` returns the single best one.

use crate::manifest::{self, SearchKey};
use crate::probe::{PathProbe, RealFs};
use crate::walker::Ancestors;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FindError {
    #[error("Failed to resolve the current working directory: {source}")]
    CurrentDir { source: io::Error },

    #[error("Failed to check {path}: {source}")]
    Probe { path: PathBuf, source: io::Error },
}

/// Where the search starts and where it stops
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// Starting directory; defaults to the process working directory.
    /// A relative path is resolved against the process working directory.
    pub cwd: Option<PathBuf>,

    /// Boundary directory, excluded from the search; defaults to no boundary
    /// (the walk runs through the filesystem root).
    pub stop_dir: Option<PathBuf>,
}

/// A single match produced by the search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundResult {
    /// Absolute path of the matched file
    pub path: PathBuf,
    /// Priority index of the tier the matched filename came from
    pub priority: usize,
    /// The filename that matched
    pub key: String,
    /// Parent-directory steps from the start directory (0 = start itself)
    pub depth: usize,
}

/// Find every match for the manifest between the start directory and the
/// boundary, sorted by priority ascending, then depth ascending.
///
/// Ties at equal priority and depth keep the order candidates were tested
/// in: the tier's own key order within a directory, directories in walk
/// order. Returns an empty list when nothing matches or when the start
/// equals the boundary.
pub fn find_up_all(
    manifest: &[SearchKey],
    options: &FindOptions,
) -> Result<Vec<FoundResult>, FindError> {
    find_up_all_with(&RealFs, manifest, options)
}

/// Find every match using the given probe instead of the real filesystem.
pub fn find_up_all_with<P: PathProbe>(
    probe: &P,
    manifest: &[SearchKey],
    options: &FindOptions,
) -> Result<Vec<FoundResult>, FindError> {
    let start = resolve_start(options)?;
    let candidates = manifest::flatten(manifest);
    let mut results = Vec::new();

    // Exhaustive over the whole walk: a low-priority match near the start
    // must not hide a high-priority match further up.
    for (dir, depth) in Ancestors::new(start, options.stop_dir.clone()) {
        for candidate in &candidates {
            let path = dir.join(&candidate.name);
            let exists = probe.exists(&path).map_err(|source| FindError::Probe {
                path: path.clone(),
                source,
            })?;

            if exists {
                results.push(FoundResult {
                    path,
                    priority: candidate.priority,
                    key: candidate.name.clone(),
                    depth,
                });
            }
        }
    }

    // Stable sort keeps collection order for equal (priority, depth) pairs
    results.sort_by_key(|r| (r.priority, r.depth));

    Ok(results)
}

/// Find the single best match: lowest priority index, then smallest depth.
///
/// Equals the head of `find_up_all`'s output, or `None` when that output is
/// empty.
pub fn find_up(
    manifest: &[SearchKey],
    options: &FindOptions,
) -> Result<Option<FoundResult>, FindError> {
    find_up_with(&RealFs, manifest, options)
}

/// Find the single best match using the given probe.
pub fn find_up_with<P: PathProbe>(
    probe: &P,
    manifest: &[SearchKey],
    options: &FindOptions,
) -> Result<Option<FoundResult>, FindError> {
    Ok(find_up_all_with(probe, manifest, options)?.into_iter().next())
}

/// Resolve the starting directory to an absolute path, once per call.
fn resolve_start(options: &FindOptions) -> Result<PathBuf, FindError> {
    match &options.cwd {
        Some(dir) if dir.is_absolute() => Ok(dir.clone()),
        Some(dir) => {
            let base =
                std::env::current_dir().map_err(|source| FindError::CurrentDir { source })?;
            Ok(base.join(dir))
        }
        None => std::env::current_dir().map_err(|source| FindError::CurrentDir { source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::path::Path;

    /// Probe answering from a fixed set of paths
    struct FakeFs(BTreeSet<PathBuf>);

    impl FakeFs {
        fn new<const N: usize>(paths: [&str; N]) -> Self {
            FakeFs(paths.iter().map(PathBuf::from).collect())
        }
    }

    impl PathProbe for FakeFs {
        fn exists(&self, path: &Path) -> io::Result<bool> {
            Ok(self.0.contains(path))
        }
    }

    /// Probe whose every check fails
    struct DenyFs;

    impl PathProbe for DenyFs {
        fn exists(&self, _path: &Path) -> io::Result<bool> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    fn options(cwd: &str, stop: Option<&str>) -> FindOptions {
        FindOptions {
            cwd: Some(PathBuf::from(cwd)),
            stop_dir: stop.map(PathBuf::from),
        }
    }

    #[test]
    fn test_collects_across_depths_and_sorts_by_priority() {
        let fs = FakeFs::new([
            "/root/workspace/packages/backend/local.env",
            "/root/config.json",
        ]);
        let manifest = vec![SearchKey::single("config.json"), SearchKey::single("local.env")];
        let results = find_up_all_with(
            &fs,
            &manifest,
            &options("/root/workspace/packages/backend", Some("/")),
        )
        .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].key, "config.json");
        assert_eq!(results[0].priority, 0);
        assert_eq!(results[0].depth, 3);
        assert_eq!(results[1].key, "local.env");
        assert_eq!(results[1].depth, 0);
    }

    #[test]
    fn test_depth_tie_break_within_a_tier() {
        let fs = FakeFs::new(["/a/b/c/marker", "/a/marker"]);
        let manifest = vec![SearchKey::single("marker")];
        let results = find_up_all_with(&fs, &manifest, &options("/a/b/c", None)).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].depth, 0);
        assert_eq!(results[1].depth, 2);
    }

    #[test]
    fn test_equal_priority_and_depth_keeps_key_order() {
        let fs = FakeFs::new(["/a/first", "/a/second"]);
        let manifest = vec![SearchKey::tier(["first", "second"])];
        let results = find_up_all_with(&fs, &manifest, &options("/a", None)).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].key, "first");
        assert_eq!(results[1].key, "second");
        assert_eq!(results[0].priority, results[1].priority);
        assert_eq!(results[0].depth, results[1].depth);
    }

    #[test]
    fn test_result_path_is_joined_absolute_path() {
        let fs = FakeFs::new(["/a/b/marker"]);
        let manifest = vec![SearchKey::single("marker")];
        let result = find_up_with(&fs, &manifest, &options("/a/b", None))
            .unwrap()
            .unwrap();

        assert_eq!(result.path, PathBuf::from("/a/b/marker"));
    }

    #[test]
    fn test_empty_manifest_finds_nothing() {
        let fs = FakeFs::new(["/a/marker"]);
        let results = find_up_all_with(&fs, &[], &options("/a", None)).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_start_equal_to_boundary_finds_nothing() {
        let fs = FakeFs::new(["/a/marker"]);
        let manifest = vec![SearchKey::single("marker")];
        let results = find_up_all_with(&fs, &manifest, &options("/a", Some("/a"))).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_match_at_boundary_is_invisible() {
        let fs = FakeFs::new(["/a/marker"]);
        let manifest = vec![SearchKey::single("marker")];
        let result = find_up_with(&fs, &manifest, &options("/a/b/c", Some("/a"))).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_probe_failure_propagates() {
        let manifest = vec![SearchKey::single("marker")];
        let err = find_up_all_with(&DenyFs, &manifest, &options("/a", None)).unwrap_err();
        assert!(matches!(err, FindError::Probe { .. }));
    }

    #[test]
    fn test_find_up_is_head_of_find_up_all() {
        let fs = FakeFs::new(["/a/b/low.txt", "/a/high.txt"]);
        let manifest = vec![SearchKey::single("high.txt"), SearchKey::single("low.txt")];
        let opts = options("/a/b", None);

        let all = find_up_all_with(&fs, &manifest, &opts).unwrap();
        let one = find_up_with(&fs, &manifest, &opts).unwrap();

        assert_eq!(one.as_ref(), all.first());
        assert_eq!(one.unwrap().key, "high.txt");
    }
}
