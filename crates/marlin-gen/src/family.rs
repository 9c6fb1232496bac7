use itertools::iproduct;
use strum::IntoEnumIterator;

use crate::{KernelDescriptor, Precision, GROUP_BLOCKS_ACT_ORDER, GROUP_BLOCKS_NONE};

const NUM_BITS: [u32; 2] = [4, 8];
const M_BLOCKS: [u32; 4] = [1, 2, 3, 4];
/// (thread_n_blocks, thread_k_blocks, threads)
const TILE_CONFIGS: [(u32, u32, u32); 4] = [(16, 4, 256), (8, 8, 256), (8, 4, 128), (4, 8, 128)];
const STAGES: [u32; 1] = [4];
// Zero-point kernels are not instantiated yet.
const HAS_ZP: [bool; 1] = [false];

const GROUP_SWEEP: [i32; 4] = [GROUP_BLOCKS_NONE, 2, 4, 8];

/// Quantization family a kernel is instantiated for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum_macros::EnumIter)]
pub enum Scheme {
    /// Activation-order capable; act-order kernels use the sentinel group.
    Gptq,
    /// Group-size sweep without activation reordering.
    Awq,
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Scheme::Gptq => "gptq",
            Scheme::Awq => "awq",
        };
        write!(f, "{}", s)
    }
}

impl Scheme {
    /// `(has_act_order, group_blocks)` pairs legal for this scheme.
    pub fn quant_policies(&self) -> Vec<(bool, i32)> {
        match self {
            Scheme::Gptq => std::iter::once((true, GROUP_BLOCKS_ACT_ORDER))
                .chain(GROUP_SWEEP.iter().map(|&g| (false, g)))
                .collect(),
            Scheme::Awq => GROUP_SWEEP.iter().map(|&g| (false, g)).collect(),
        }
    }

    /// Every kernel of this scheme. Order is fixed, outermost axis first:
    /// precision, bits, m blocks, tile config, stages, quant policy, zero point.
    pub fn kernels(&self) -> Vec<KernelDescriptor> {
        iproduct!(
            Precision::iter(),
            NUM_BITS,
            M_BLOCKS,
            TILE_CONFIGS,
            STAGES,
            self.quant_policies(),
            HAS_ZP
        )
        .map(
            |(
                precision,
                num_bits,
                m_blocks,
                (n_blocks, k_blocks, threads),
                stages,
                (has_act_order, group_blocks),
                has_zp,
            )| {
                KernelDescriptor::new(
                    *self,
                    precision,
                    num_bits,
                    threads,
                    m_blocks,
                    n_blocks,
                    k_blocks,
                    stages,
                    has_act_order,
                    has_zp,
                    group_blocks,
                )
            },
        )
        .collect()
    }
}

/// All kernels of every scheme, grouped by scheme in declaration order.
pub fn all_kernels() -> Vec<KernelDescriptor> {
    Scheme::iter().flat_map(|scheme| scheme.kernels()).collect()
}
