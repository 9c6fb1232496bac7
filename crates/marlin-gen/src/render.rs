use serde::Serialize;
use tera::{Context, Tera};

use crate::{GeneratorError, KernelDescriptor, TypeMap};

const KERNEL_TEMPLATE_NAME: &str = "marlin_kernel";
const KERNEL_TEMPLATE: &str = include_str!("../templates/marlin_kernel.cu");

/// One field per placeholder in the kernel template.
#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct KernelTemplateArgs {
    scheme: String,
    dtype: &'static str,
    num_bits: u32,
    threads: u32,
    m_blocks: u32,
    n_blocks: u32,
    k_blocks: u32,
    stages: u32,
    has_act_order: &'static str,
    has_zp: &'static str,
    group_blocks: i32,
}

impl KernelTemplateArgs {
    pub fn new(kernel: &KernelDescriptor, type_map: &TypeMap) -> Result<Self, GeneratorError> {
        Ok(Self {
            scheme: kernel.scheme().to_string(),
            dtype: type_map.resolve(kernel.precision())?,
            num_bits: kernel.num_bits(),
            threads: kernel.threads(),
            m_blocks: kernel.m_blocks(),
            n_blocks: kernel.n_blocks(),
            k_blocks: kernel.k_blocks(),
            stages: kernel.stages(),
            has_act_order: cuda_bool(kernel.has_act_order()),
            has_zp: cuda_bool(kernel.has_zp()),
            group_blocks: kernel.group_blocks(),
        })
    }
}

fn cuda_bool(flag: bool) -> &'static str {
    if flag {
        "true"
    } else {
        "false"
    }
}

/// # KernelRenderer
///
/// Holds the compiled kernel template together with the [`TypeMap`] used to
/// resolve precisions. Rendering fails if any placeholder is missing from
/// the arguments.
#[derive(Debug)]
pub struct KernelRenderer {
    tera: Tera,
    type_map: TypeMap,
}

impl KernelRenderer {
    pub fn new(type_map: TypeMap) -> Result<Self, GeneratorError> {
        let mut tera = Tera::default();
        tera.add_raw_template(KERNEL_TEMPLATE_NAME, KERNEL_TEMPLATE)?;
        Ok(Self { tera, type_map })
    }

    pub fn type_map(&self) -> &TypeMap {
        &self.type_map
    }

    pub fn render(&self, kernel: &KernelDescriptor) -> Result<String, GeneratorError> {
        let args = KernelTemplateArgs::new(kernel, &self.type_map)?;
        let context = Context::from_serialize(&args)?;
        Ok(self.tera.render(KERNEL_TEMPLATE_NAME, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::{all_kernels, Precision, Scheme, GROUP_BLOCKS_NONE};

    /// Names of every `{{ NAME }}` expression in the template, with repeats.
    fn template_placeholders() -> Vec<String> {
        KERNEL_TEMPLATE
            .split("{{")
            .skip(1)
            .map(|rest| {
                let end = rest.find("}}").expect("unterminated placeholder");
                rest[..end].trim().to_string()
            })
            .collect()
    }

    fn sample_kernel(precision: Precision) -> KernelDescriptor {
        KernelDescriptor::new(Scheme::Gptq, precision, 8, 128, 2, 8, 4, 4, false, false, 4)
    }

    #[test]
    fn args_cover_template_placeholders() {
        let args = KernelTemplateArgs::new(&sample_kernel(Precision::F16), &TypeMap::default())
            .unwrap();
        let json = tera::to_value(&args).unwrap();
        let arg_names = json
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect::<BTreeSet<_>>();

        let placeholders = template_placeholders();
        let unique = placeholders.iter().cloned().collect::<BTreeSet<_>>();
        assert_eq!(placeholders.len(), unique.len(), "placeholder repeated");
        assert_eq!(arg_names, unique);
    }

    #[test]
    fn no_placeholder_survives_rendering() {
        let renderer = KernelRenderer::new(TypeMap::default()).unwrap();
        for kernel in all_kernels() {
            let source = renderer.render(&kernel).unwrap();
            for token in ["{{", "}}", "{%", "%}"] {
                assert!(
                    !source.contains(token),
                    "{} left in {}",
                    token,
                    kernel.filename()
                );
            }
        }
    }

    #[test]
    fn bf16_resolves_through_type_map() {
        let renderer = KernelRenderer::new(TypeMap::default()).unwrap();
        let source = renderer.render(&sample_kernel(Precision::BF16)).unwrap();
        assert!(source.contains("void Marlin<nv_bfloat16,"));
        assert!(source.contains("/*group_blocks=*/4>("));
    }

    #[test]
    fn swapped_type_map_is_used() {
        let mut type_map = TypeMap::empty();
        type_map.insert(Precision::F16, "__half");
        let renderer = KernelRenderer::new(type_map).unwrap();
        let kernel = KernelDescriptor::new(
            Scheme::Awq,
            Precision::F16,
            4,
            256,
            1,
            8,
            8,
            4,
            false,
            false,
            GROUP_BLOCKS_NONE,
        );
        let source = renderer.render(&kernel).unwrap();
        assert!(source.contains("void Marlin<__half,"));
        assert!(source.contains("/*group_blocks=*/-1>("));
    }

    #[test]
    fn unmapped_precision_fails_to_render() {
        let renderer = KernelRenderer::new(TypeMap::empty()).unwrap();
        let err = renderer.render(&sample_kernel(Precision::F16)).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::Configuration {
                precision: Precision::F16
            }
        ));
    }
}
