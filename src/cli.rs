use clap::Parser;
use findtier::manifest::SearchKey;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Find the nearest project file by tiered upward search
#[derive(Parser, Debug)]
#[command(name = "findtier")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Candidate filenames, one priority tier per argument.
    /// Comma-separate names that share a tier: yarn.lock,pnpm-lock.yaml
    pub keys: Vec<KeySpec>,

    /// Directory to start searching from (defaults to the current directory)
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Directory at which the upward search stops; it is excluded from the search
    #[arg(long)]
    pub stop_dir: Option<PathBuf>,

    /// Use a named preset manifest from the config file instead of KEYS
    #[arg(long, conflicts_with = "keys")]
    pub preset: Option<String>,

    /// Print only the single best match (exits 1 when nothing matches)
    #[arg(long)]
    pub first: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One priority tier as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpec(pub SearchKey);

impl fmt::Display for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            SearchKey::Single(name) => write!(f, "{}", name),
            SearchKey::Tier(names) => write!(f, "{}", names.join(",")),
        }
    }
}

impl FromStr for KeySpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut names: Vec<String> = s
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        match names.len() {
            0 => Err(format!(
                "Empty key '{}'. Expected: <filename>[,<filename>...]",
                s
            )),
            1 => Ok(KeySpec(SearchKey::Single(names.remove(0)))),
            _ => Ok(KeySpec(SearchKey::Tier(names))),
        }
    }
}
