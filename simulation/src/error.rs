use std::path::PathBuf;

use strategies::UnknownStrategy;
use thiserror::Error;
use types::PackError;

/// Startup failures. Each one means the invocation or its inputs are
/// unusable, so the binary prints the message and exits non-zero rather
/// than substituting defaults.
#[derive(Debug, Error)]
pub enum EuchreError {
    #[error("error opening {}", path.display())]
    PackFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Pack(#[from] PackError),
    #[error(transparent)]
    Strategy(#[from] UnknownStrategy),
}
