//! Runs the GraphViz programs that turn DOT text into images.

use crate::core::constants::{is_output_format, DEFAULT_PROGRAMS};
use crate::core::error::RenderError;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// The environment variables that are passed on to the program.
const FORWARDED_ENV: [&str; 3] = ["PATH", "LD_LIBRARY_PATH", "SYSTEMROOT"];

/// Returns the name of the executable for \p program. The default programs
/// get the `.exe` extension on Windows.
pub fn executable_name(program: &str) -> String {
    if cfg!(windows) && DEFAULT_PROGRAMS.contains(&program) {
        return format!("{}.exe", program);
    }
    program.to_string()
}

/// Runs \p program with \p arguments inside \p working_dir and collects its
/// output. The program only sees the variables in `FORWARDED_ENV`.
pub fn call_graphviz(
    program: &str,
    arguments: &[String],
    working_dir: &Path,
) -> Result<Output, RenderError> {
    let executable = executable_name(program);
    let mut cmd = Command::new(&executable);
    cmd.args(arguments)
        .current_dir(working_dir)
        .env_clear()
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for var in FORWARDED_ENV.iter() {
        cmd.env(var, env::var_os(var).unwrap_or_default());
    }

    #[cfg(feature = "log")]
    log::info!("Running {} {:?}", executable, arguments);

    cmd.output().map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => RenderError::ExecutableNotFound {
            program: program.to_string(),
        },
        _ => RenderError::Io(err),
    })
}

/// Lays out \p dot_text with \p program and returns the bytes that it wrote
/// in \p format. The text and the \p shape_files are placed in a temporary
/// directory that is removed before returning.
pub fn render(
    dot_text: &str,
    program: &str,
    args: &[String],
    format: &str,
    shape_files: &[PathBuf],
) -> Result<Vec<u8>, RenderError> {
    if !is_output_format(format) {
        #[cfg(feature = "log")]
        log::warn!("Unknown output format \"{}\"", format);
    }

    let tmp_dir = tempfile::Builder::new().prefix("dotgraph").tempdir()?;
    #[cfg(feature = "log")]
    log::debug!("Created {}", tmp_dir.path().display());

    for shape in shape_files {
        if let Some(name) = shape.file_name() {
            fs::copy(shape, tmp_dir.path().join(name))?;
        }
    }

    let mut source = tempfile::Builder::new()
        .suffix(".dot")
        .tempfile_in(tmp_dir.path())?;
    source.write_all(dot_text.as_bytes())?;
    source.flush()?;

    let mut arguments = vec![format!("-T{}", format)];
    arguments.extend(args.iter().cloned());
    arguments.push(source.path().display().to_string());

    let output = call_graphviz(program, &arguments, tmp_dir.path())?;
    if !output.status.success() {
        return Err(RenderError::Failed {
            program: program.to_string(),
            arguments,
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    #[cfg(feature = "log")]
    log::debug!("Removing {}", tmp_dir.path().display());
    Ok(output.stdout)
}

#[test]
fn test_executable_name() {
    assert_eq!(executable_name("my-tool"), "my-tool");
    if cfg!(windows) {
        assert_eq!(executable_name("dot"), "dot.exe");
    } else {
        assert_eq!(executable_name("dot"), "dot");
    }
}
