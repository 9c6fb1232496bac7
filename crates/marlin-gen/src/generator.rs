use std::path::PathBuf;

use derive_new::new;

use crate::{all_kernels, GeneratorError, KernelRenderer, OutputDir, TypeMap};

pub const DEFAULT_OUTPUT_DIR: &str = "generated";

#[derive(new, Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Relative paths resolve against the working directory.
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub written: usize,
}

/// # KernelGenerator
///
/// Regenerates the full set of Marlin instantiations. Usable from a CLI or
/// from a downstream crate's `build.rs`.
#[derive(Debug)]
pub struct KernelGenerator {
    config: GeneratorConfig,
    renderer: KernelRenderer,
}

impl KernelGenerator {
    pub fn new(config: GeneratorConfig, renderer: KernelRenderer) -> Self {
        Self { config, renderer }
    }

    pub fn from_config(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        Ok(Self::new(config, KernelRenderer::new(TypeMap::default())?))
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Filenames a run would write, in write order.
    pub fn plan(&self) -> Vec<String> {
        all_kernels().iter().map(|k| k.filename()).collect()
    }

    /// Wipes the output directory, then writes one file per kernel. Stops at
    /// the first failure, leaving the directory partially populated.
    pub fn generate(&self) -> Result<GenerationReport, GeneratorError> {
        let dir = OutputDir::reset(&self.config.output_dir)?;
        let kernels = all_kernels();
        log::info!(
            "Generating {} kernels into {}",
            kernels.len(),
            dir.path().display()
        );
        for kernel in &kernels {
            dir.write(kernel, &self.renderer)?;
        }
        Ok(GenerationReport {
            output_dir: dir.path().to_path_buf(),
            written: kernels.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_generated_directory() {
        assert_eq!(
            GeneratorConfig::default().output_dir,
            PathBuf::from("generated")
        );
    }

    #[test]
    fn plan_matches_enumeration_without_touching_disk() {
        let scratch = tempfile::tempdir().unwrap();
        let output_dir = scratch.path().join("generated");
        let generator = KernelGenerator::from_config(GeneratorConfig::new(output_dir.clone()))
            .unwrap();
        let plan = generator.plan();
        assert_eq!(plan.len(), 576);
        assert_eq!(plan[0], all_kernels()[0].filename());
        assert!(!output_dir.exists());
    }
}
