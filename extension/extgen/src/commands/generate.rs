//! The generate command.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use ext_gen::{GeneratedHeader, HeaderGenerator};
use tracing::{debug, info};

use super::GenerateOptions;
use crate::CliError;

/// Generate the requested headers.
///
/// Headers go to `stdout` with `--stdout`, otherwise into the output
/// directory, which is created if needed. Returns the paths written. The
/// configuration is validated before anything is written.
pub fn run_generate(
    options: &GenerateOptions,
    stdout: &mut impl Write,
) -> Result<Vec<PathBuf>, CliError> {
    let generator = HeaderGenerator::new(options.config.clone())?;
    let headers = if options.only.is_empty() {
        generator.generate()
    } else {
        generator.generate_only(&options.only)
    };

    if options.to_stdout {
        print_headers(&headers, stdout)?;
        return Ok(Vec::new());
    }
    write_headers(&headers, &options.out_dir)
}

fn print_headers(headers: &[GeneratedHeader], stdout: &mut impl Write) -> Result<(), CliError> {
    let io_error = |source| CliError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    };
    for (i, header) in headers.iter().enumerate() {
        if i > 0 {
            writeln!(stdout).map_err(io_error)?;
        }
        writeln!(stdout, "// ---- {} ----", header.file_name).map_err(io_error)?;
        stdout.write_all(header.code.as_bytes()).map_err(io_error)?;
    }
    stdout.flush().map_err(io_error)
}

fn write_headers(headers: &[GeneratedHeader], out_dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    fs::create_dir_all(out_dir).map_err(|source| CliError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;
    debug!(dir = %out_dir.display(), "writing headers");

    let mut written = Vec::with_capacity(headers.len());
    for header in headers {
        let path = out_dir.join(header.file_name);
        fs::write(&path, &header.code).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), bytes = header.code.len(), "wrote header");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests unwrap temp dirs and reads")]
mod tests;
