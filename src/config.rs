use std::path::PathBuf;

pub const SDK_DIR_VAR: &str = "DXSDK_DIR";
pub const OUTPUT_DIR_VAR: &str = "SHADER_REBUILD_OUTPUT_DIR";
pub const NO_PROMPT_VAR: &str = "SHADER_REBUILD_NO_PROMPT";

pub const DEFAULT_SDK_DIR: &str = r"C:\Program Files (x86)\Microsoft DirectX SDK (June 2010)\";
pub const DEFAULT_OUTPUT_DIR: &str = "../../public/openvr/resources/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub sdk_dir: PathBuf,
    pub output_dir: PathBuf,
    pub prompt: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        // An empty variable is as good as an unset one.
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let sdk_dir = var(SDK_DIR_VAR).unwrap_or_else(|| DEFAULT_SDK_DIR.to_string());
        let output_dir = var(OUTPUT_DIR_VAR).unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());
        let prompt = var(NO_PROMPT_VAR).is_none_or(|v| v == "0");

        Self {
            sdk_dir: PathBuf::from(sdk_dir),
            output_dir: PathBuf::from(output_dir),
            prompt,
        }
    }
}
