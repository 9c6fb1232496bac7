use std::collections::HashMap;

use crate::GeneratorError;

/// Activation precision a kernel is specialized for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum_macros::EnumIter)]
pub enum Precision {
    F16,
    BF16,
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Precision::F16 => "fp16",
            Precision::BF16 => "bf16",
        };
        write!(f, "{}", s)
    }
}

/// # TypeMap
///
/// Maps a [`Precision`] onto the CUDA scalar type substituted into rendered
/// kernels. The renderer owns its map, so callers can swap it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMap {
    entries: HashMap<Precision, &'static str>,
}

impl Default for TypeMap {
    fn default() -> Self {
        let mut map = Self::empty();
        map.insert(Precision::F16, "half");
        map.insert(Precision::BF16, "nv_bfloat16");
        map
    }
}

impl TypeMap {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers `cuda_type` for `precision`, returning the previous entry.
    pub fn insert(&mut self, precision: Precision, cuda_type: &'static str) -> Option<&'static str> {
        self.entries.insert(precision, cuda_type)
    }

    pub fn resolve(&self, precision: Precision) -> Result<&'static str, GeneratorError> {
        self.entries
            .get(&precision)
            .copied()
            .ok_or(GeneratorError::Configuration { precision })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
