use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{GeneratorError, KernelDescriptor, KernelRenderer};

/// # OutputDir
///
/// A destination directory that has been wiped and recreated. The only way to
/// obtain one is [`OutputDir::reset`], so every write happens after the reset.
#[derive(Debug)]
pub struct OutputDir {
    path: PathBuf,
}

impl OutputDir {
    /// Deletes `path` and everything under it, then recreates it empty along
    /// with any missing parents. A missing directory is not an error.
    pub fn reset(path: impl Into<PathBuf>) -> Result<Self, GeneratorError> {
        let path = path.into();
        match fs::remove_dir_all(&path) {
            Ok(()) => log::debug!("Removed previous output at {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(GeneratorError::io(&path)(e)),
        }
        fs::create_dir_all(&path).map_err(GeneratorError::io(&path))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders `kernel` and writes it to `<dir>/<kernel filename>`, replacing
    /// any file already there. Returns the written path.
    pub fn write(
        &self,
        kernel: &KernelDescriptor,
        renderer: &KernelRenderer,
    ) -> Result<PathBuf, GeneratorError> {
        let rendered = kernel.render(renderer)?;
        let dest = self.path.join(kernel.filename());
        let mut file = File::create(&dest).map_err(GeneratorError::io(&dest))?;
        file.write_all(rendered.as_bytes())
            .map_err(GeneratorError::io(&dest))?;
        log::debug!("Wrote {}", dest.display());
        Ok(dest)
    }
}
