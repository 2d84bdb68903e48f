//! Command-line parsing.

use std::mem;
use std::path::PathBuf;

use ext_gen::{Artifact, GeneratorConfig};

use crate::CliError;

/// Output directory used when `--out-dir` is not given.
pub const DEFAULT_OUT_DIR: &str = "boost/extension";

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Generate(GenerateOptions),
}

/// Options of a generate run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    pub config: GeneratorConfig,
    pub out_dir: PathBuf,
    /// Artifacts to generate; empty means all.
    pub only: Vec<Artifact>,
    pub to_stdout: bool,
    pub verbose: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            config: GeneratorConfig::default(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            only: Vec::new(),
            to_stdout: false,
            verbose: false,
        }
    }
}

/// Parse the arguments following the program name.
pub fn parse_args(args: &[String]) -> Result<Invocation, CliError> {
    let mut options = GenerateOptions::default();
    let mut max_params_seen = false;

    for arg in args {
        if arg == "-h" || arg == "--help" {
            return Ok(Invocation::Help);
        } else if arg == "-v" || arg == "--verbose" {
            options.verbose = true;
        } else if arg == "--stdout" {
            options.to_stdout = true;
        } else if arg == "--no-license" {
            options.config.license_header = false;
        } else if let Some(dir) = arg.strip_prefix("--out-dir=") {
            options.out_dir = PathBuf::from(dir);
        } else if let Some(path) = arg.strip_prefix("--namespace=") {
            options.config = mem::take(&mut options.config).with_namespace(path);
        } else if let Some(dir) = arg.strip_prefix("--include-dir=") {
            options.config.include_dir = dir.trim_matches('/').to_string();
        } else if let Some(name) = arg.strip_prefix("--only=") {
            let artifact = Artifact::from_name(name).ok_or_else(|| {
                CliError::Usage(format!("unknown artifact `{name}`"))
            })?;
            if !options.only.contains(&artifact) {
                options.only.push(artifact);
            }
        } else if arg.starts_with('-') && !looks_numeric(arg) {
            return Err(CliError::Usage(format!("unknown option `{arg}`")));
        } else if max_params_seen {
            return Err(CliError::Usage(format!("unexpected argument `{arg}`")));
        } else {
            options.config.max_params = GeneratorConfig::parse_max_params(arg)?;
            max_params_seen = true;
        }
    }

    Ok(Invocation::Generate(options))
}

/// `-3` and `-1.5` are (invalid) arity values, not options.
fn looks_numeric(arg: &str) -> bool {
    arg.strip_prefix('-')
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests;
