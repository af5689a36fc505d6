use std::io::Write;
use std::process::{Command, Stdio};

use crate::DiffError;

/// Run an external collaborator program, feeding it a set of named
/// temporary input files and returning its stdout bytes.
///
/// `accept_exit_codes` lists the exit codes that count as success for this
/// program (e.g. `diff`'s `0` no-difference and `1` differences-found, or
/// `diff3`'s `0` clean and `1` conflicts); anything else is fatal.
pub fn run_collaborator(
    program: &str,
    args: &[&str],
    accept_exit_codes: &[i32],
) -> Result<Vec<u8>, DiffError> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| DiffError::CollaboratorUnavailable {
            program: program.to_string(),
            source,
        })?;

    let code = output.status.code().unwrap_or(-1);
    if !accept_exit_codes.contains(&code) {
        return Err(DiffError::CollaboratorFailed {
            program: program.to_string(),
            status: code,
        });
    }
    Ok(output.stdout)
}

/// Write `content` to a fresh temp file and return the handle (dropping it
/// deletes the file). Kept open for the duration of the collaborator
/// invocation regardless of success or failure, since the `NamedTempFile`
/// is released on every exit path via `Drop`.
pub fn write_temp(content: &[u8]) -> std::io::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(content)?;
    file.flush()?;
    Ok(file)
}
