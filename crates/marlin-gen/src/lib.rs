//! Expands the Marlin GEMM configuration space into one CUDA source file per
//! kernel specialization, so each can be compiled as its own unit.
mod dtype;
mod error;
mod family;
mod generator;
mod kernel;
mod output;
mod render;

pub use dtype::*;
pub use error::*;
pub use family::*;
pub use generator::*;
pub use kernel::*;
pub use output::*;
pub use render::*;

pub mod prelude {
    pub use crate::{all_kernels, GeneratorConfig, KernelGenerator, Scheme};
}
