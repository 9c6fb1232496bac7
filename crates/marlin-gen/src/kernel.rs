use derive_new::new;

use crate::{GeneratorError, KernelRenderer, Precision, Scheme};

/// `group_blocks` value paired with activation reordering.
pub const GROUP_BLOCKS_ACT_ORDER: i32 = 0;
/// `group_blocks` value for channelwise (ungrouped) quantization.
pub const GROUP_BLOCKS_NONE: i32 = -1;

/// # KernelDescriptor
///
/// One fully specialized Marlin kernel. Apart from `scheme`, every field is a
/// template argument of the CUDA entry point. The whole tuple, scheme
/// included, identifies the compilation unit.
#[derive(new, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct KernelDescriptor {
    scheme: Scheme,
    precision: Precision,
    num_bits: u32,
    threads: u32,
    m_blocks: u32,
    n_blocks: u32,
    k_blocks: u32,
    stages: u32,
    has_act_order: bool,
    has_zp: bool,
    group_blocks: i32,
}

impl KernelDescriptor {
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn num_bits(&self) -> u32 {
        self.num_bits
    }

    pub fn threads(&self) -> u32 {
        self.threads
    }

    pub fn m_blocks(&self) -> u32 {
        self.m_blocks
    }

    pub fn n_blocks(&self) -> u32 {
        self.n_blocks
    }

    pub fn k_blocks(&self) -> u32 {
        self.k_blocks
    }

    pub fn stages(&self) -> u32 {
        self.stages
    }

    pub fn has_act_order(&self) -> bool {
        self.has_act_order
    }

    pub fn has_zp(&self) -> bool {
        self.has_zp
    }

    pub fn group_blocks(&self) -> i32 {
        self.group_blocks
    }

    pub fn render(&self, renderer: &KernelRenderer) -> Result<String, GeneratorError> {
        renderer.render(self)
    }

    /// Unique name of the compilation unit. The scheme prefix keeps the group
    /// sweep shared by both schemes from landing on the same file.
    pub fn filename(&self) -> String {
        format!(
            "{}_marlin_{}_b{}_t{}_m{}_n{}_k{}_s{}_{}_{}_g{}.cu",
            self.scheme,
            self.precision,
            self.num_bits,
            self.threads,
            self.m_blocks,
            self.n_blocks,
            self.k_blocks,
            self.stages,
            capitalized(self.has_act_order),
            capitalized(self.has_zp),
            self.group_blocks
        )
    }
}

fn capitalized(flag: bool) -> &'static str {
    if flag {
        "True"
    } else {
        "False"
    }
}
