use std::path::{Path, PathBuf};

use crate::Precision;

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("No CUDA type registered for precision {precision}.")]
    Configuration { precision: Precision },
    #[error("I/O error at {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to render kernel template: {0}")]
    Template(#[from] tera::Error),
}

impl GeneratorError {
    /// Builds a `map_err` adapter that tags an I/O error with the path it hit.
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| GeneratorError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
