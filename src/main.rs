mod cli;

use clap::Parser;
use cli::Cli;
use findtier::config::Config;
use findtier::finder::{self, FindOptions};
use findtier::manifest::SearchKey;
use findtier::output::{FindOutput, MatchRecord, print_json};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let manifest = resolve_manifest(&cli)?;

    let options = FindOptions {
        cwd: cli.cwd.clone(),
        stop_dir: cli.stop_dir.clone(),
    };

    if cli.first {
        run_first(&manifest, &options, cli.json)
    } else {
        run_all(&manifest, &options, cli.json)
    }
}

/// Positional keys and --preset are mutually exclusive; one of them is required.
fn resolve_manifest(cli: &Cli) -> Result<Vec<SearchKey>, Box<dyn std::error::Error>> {
    if let Some(name) = &cli.preset {
        let config = Config::load()?;
        return Ok(config.preset(name)?.to_vec());
    }

    if cli.keys.is_empty() {
        return Err("No keys specified. Pass filenames or --preset <name>.".into());
    }

    Ok(cli.keys.iter().map(|spec| spec.0.clone()).collect())
}

fn run_all(
    manifest: &[SearchKey],
    options: &FindOptions,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let results = finder::find_up_all(manifest, options)?;

    if json_output {
        print_json(&FindOutput::new(&results));
        return Ok(());
    }

    for result in &results {
        println!("{}", MatchRecord::new(result).render_text());
    }

    Ok(())
}

fn run_first(
    manifest: &[SearchKey],
    options: &FindOptions,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = finder::find_up(manifest, options)?;

    match result {
        Some(result) => {
            if json_output {
                print_json(&MatchRecord::new(&result));
            } else {
                println!("{}", result.path.display());
            }
            Ok(())
        }
        None => {
            if json_output {
                print_json(&serde_json::json!({ "matches": [] }));
            } else {
                eprintln!("No match found.");
            }
            std::process::exit(1);
        }
    }
}
