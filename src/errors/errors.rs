use thiserror::Error;

/// Fatal failures of the surrounding driver. Inability to open or read the
/// input stream terminates the process; the scanner itself assumes a valid
/// open stream.
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Usage: minic-lex <input-file>")]
    Usage,
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
}
