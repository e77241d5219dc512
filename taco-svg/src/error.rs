use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
