//! CLI wrapper: two positionals (pattern file, target file), both AMALFI
//! binary graphs, printing the match count as a bare decimal integer.
//!
//! Grounded on `original_source/main.cpp`'s hard-coded recipe-and-count
//! loop, generalised to `--recipe`/`--induced` flags over `recipes.rs`'s
//! table; the zero-flag invocation reproduces the original's fixed choice
//! (`ri_ind`, i.e. `ri`, induced) so `spec.md` §6's documented default is
//! unchanged.

use std::process::ExitCode;

use error_stack::{Report, ResultExt};
use subiso::error::CliError;
use subiso::recipes;

struct Args {
    pattern_path: String,
    target_path: String,
    recipe: String,
    induced: bool,
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args, Report<CliError>> {
    let mut positionals = Vec::new();
    let mut recipe = "ri".to_string();
    let mut induced = true;

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--recipe" => {
                let value = argv
                    .next()
                    .ok_or_else(|| Report::new(CliError::UsageError("--recipe needs a value".into())))?;
                recipe = value;
            }
            "--induced" => induced = true,
            _ if arg.starts_with("--") => {
                return Err(Report::new(CliError::UsageError(format!("unrecognized flag {arg:?}"))));
            }
            _ => positionals.push(arg),
        }
    }

    let [pattern_path, target_path]: [String; 2] = positionals
        .try_into()
        .map_err(|got: Vec<String>| {
            Report::new(CliError::UsageError(format!(
                "expected exactly 2 positionals (pattern file, target file), got {}",
                got.len()
            )))
        })?;

    Ok(Args { pattern_path, target_path, recipe, induced })
}

fn run() -> Result<usize, Report<CliError>> {
    let args = parse_args(std::env::args().skip(1))?;

    let pattern_bytes = std::fs::read(&args.pattern_path).change_context(CliError::Io)?;
    let target_bytes = std::fs::read(&args.target_path).change_context(CliError::Io)?;

    let pattern = subiso::amalfi::read_amalfi(&pattern_bytes).change_context(CliError::Parse)?;
    let target = subiso::amalfi::read_amalfi(&target_bytes).change_context(CliError::Parse)?;

    recipes::count_matches(&args.recipe, args.induced, &pattern, &target, None)
        .map_err(|msg| Report::new(CliError::UsageError(msg)))
}

fn main() -> ExitCode {
    match run() {
        Ok(count) => {
            println!("{count}");
            ExitCode::SUCCESS
        }
        Err(report) => {
            eprintln!("{report:?}");
            ExitCode::FAILURE
        }
    }
}
