//! Error helpers for the command line front end.
use std::fmt;
use std::io;
use std::path::Path;

use crate::HuffmanError;

/// File extension expected on encoded artifacts.
pub const ARTIFACT_EXTENSION: &str = "huff";

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        UnexpectedEof => "File appears truncated or corrupted.",
        WriteZero => "Disk may be full. Free up space and try again.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Check that `path` carries the artifact extension (case-insensitive).
pub fn check_extension(path: &Path) -> Result<(), CliError> {
    let ok = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ARTIFACT_EXTENSION));
    if ok {
        Ok(())
    } else {
        Err(CliError {
            msg: format!(
                "Invalid file extension for '{}'. Expected .{}. Check the input file.",
                path.display(),
                ARTIFACT_EXTENSION
            ),
            source: None,
        })
    }
}

/// Convert a codec error into a CLI error with a hint. I/O failures are
/// formatted against `path`.
pub fn huffman_cli_error(context: &str, path: &Path, err: HuffmanError) -> CliError {
    match err {
        HuffmanError::Io(io) => io_cli_error(context, path, io),
        err => CliError {
            msg: format!("{} '{}': {}", context, path.display(), cli_hint(&err)),
            source: Some(Box::new(err)),
        },
    }
}

/// Return an actionable hint for a codec error variant.
pub fn cli_hint(err: &HuffmanError) -> String {
    use HuffmanError::*;
    match err {
        MalformedHeader(_)
        | TruncatedTree
        | TreeTooLarge
        | TruncatedPayload { .. }
        | TrailingBytes(_) => format!("{err}. Verify the file is intact."),
        EmptyAlphabetMismatch(_) => format!("{err}. The file was not produced by this encoder."),
        OutputLimitExceeded { .. } => format!("{err}. Raise --max-output if the file is trusted."),
        InputTooLarge(_) => format!("{err}. Split the input into smaller files."),
        Io(io) => format!("{io}"),
    }
}
