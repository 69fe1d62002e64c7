//! Output formatting for JSON and text modes
//!
//! Provides types for structured output that can be serialized to JSON
//! for machine-readable output, or displayed as text for human consumption.

use crate::finder::FoundResult;
use serde::Serialize;

/// A single match in the output
#[derive(Debug, Serialize)]
pub struct MatchRecord {
    pub path: String,
    pub key: String,
    pub priority: usize,
    pub depth: usize,
}

/// Result of a find operation
#[derive(Debug, Serialize)]
pub struct FindOutput {
    pub matches: Vec<MatchRecord>,
}

impl MatchRecord {
    pub fn new(result: &FoundResult) -> Self {
        Self {
            path: result.path.display().to_string(),
            key: result.key.clone(),
            priority: result.priority,
            depth: result.depth,
        }
    }

    /// One-line text rendering: path, then key/priority/depth
    pub fn render_text(&self) -> String {
        format!(
            "{}\t{} (priority {}, depth {})",
            self.path, self.key, self.priority, self.depth
        )
    }
}

impl FindOutput {
    pub fn new(results: &[FoundResult]) -> Self {
        Self {
            matches: results.iter().map(MatchRecord::new).collect(),
        }
    }
}

/// Print JSON output to stdout
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_match_record_from_result() {
        let result = FoundResult {
            path: PathBuf::from("/a/b/package.json"),
            priority: 1,
            key: "package.json".to_string(),
            depth: 2,
        };

        let record = MatchRecord::new(&result);
        assert_eq!(record.path, "/a/b/package.json");
        assert_eq!(record.key, "package.json");
        assert_eq!(record.priority, 1);
        assert_eq!(record.depth, 2);
    }

    #[test]
    fn test_render_text() {
        let record = MatchRecord {
            path: "/a/b/package.json".to_string(),
            key: "package.json".to_string(),
            priority: 1,
            depth: 2,
        };
        assert_eq!(
            record.render_text(),
            "/a/b/package.json\tpackage.json (priority 1, depth 2)"
        );
    }

    #[test]
    fn test_find_output_json_shape() {
        let results = vec![FoundResult {
            path: PathBuf::from("/a/local.env"),
            priority: 0,
            key: "local.env".to_string(),
            depth: 0,
        }];

        let json = serde_json::to_value(FindOutput::new(&results)).unwrap();
        assert_eq!(json["matches"][0]["key"], "local.env");
        assert_eq!(json["matches"][0]["priority"], 0);
        assert_eq!(json["matches"][0]["depth"], 0);
    }
}
