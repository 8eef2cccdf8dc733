use std::path::PathBuf;
use thiserror::Error;

/// Error type for shader source loading.
#[derive(Error, Debug)]
pub enum PreprocessError {
    #[error("failed to read {}: {}", .0.display(), .1)]
    IOError(PathBuf, std::io::Error),
    #[error("the built-in source {0} does not exist")]
    MissingBuiltin(String),
    #[error("#include without a file name on line {}", .0 + 1)]
    UnexpectedEol(usize),
    #[error("{} is included recursively", .0.display())]
    RecursiveInclude(PathBuf),
}
