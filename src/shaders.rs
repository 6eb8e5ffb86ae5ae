#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderOutput {
    pub entry: &'static str,
    pub profile: &'static str,
    pub file: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderSource {
    pub source: &'static str,
    pub outputs: &'static [ShaderOutput],
}

/// Precompiled shaders shipped in the public resources directory.
pub const BUILTIN: &[ShaderSource] = &[ShaderSource {
    source: "overlay.ps",
    outputs: &[ShaderOutput {
        entry: "PSAA",
        profile: "ps_3_0",
        file: "overlay.cso",
    }],
}];

pub fn output_count(table: &[ShaderSource]) -> usize {
    table.iter().map(|s| s.outputs.len()).sum()
}
