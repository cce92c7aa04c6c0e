// hyphen-cli: shared utilities for the command-line tools.

use std::process;

use hyphen_tables::format;
use hyphen_tables::{DigramWeightTables, SuffixPatternTable};

/// Environment variable naming an external data asset file.
const ASSET_ENV: &str = "HYPHEN_ASSET_PATH";

/// Tables loaded for a CLI invocation; the engine borrows from this.
pub struct LoadedTables {
    pub digrams: DigramWeightTables,
    pub suffixes: SuffixPatternTable,
}

/// Load tables from an explicit asset path, the `HYPHEN_ASSET_PATH`
/// environment variable, or fall back to the embedded English asset.
pub fn load_tables(asset_path: Option<&str>) -> Result<LoadedTables, String> {
    let path = asset_path
        .map(str::to_string)
        .or_else(|| std::env::var(ASSET_ENV).ok());

    match path {
        Some(path) => {
            let data = std::fs::read(&path)
                .map_err(|e| format!("failed to read {path}: {e}"))?;
            let (digrams, suffixes) = format::parse_asset(&data)
                .map_err(|e| format!("invalid data asset {path}: {e}"))?;
            Ok(LoadedTables { digrams, suffixes })
        }
        None => Ok(LoadedTables {
            digrams: DigramWeightTables::english(),
            suffixes: SuffixPatternTable::english(),
        }),
    }
}

/// Parse a `--asset=PATH` or `--asset PATH` argument from command line args.
///
/// Returns `(asset_path, remaining_args)`.
pub fn parse_asset_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut asset_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--asset=") {
            asset_path = Some(val.to_string());
        } else if arg == "--asset" {
            if i + 1 < args.len() {
                asset_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: --asset requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (asset_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
