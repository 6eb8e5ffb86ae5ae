use std::fmt;
use std::path::{Path, PathBuf};

const COMPILER_SUBPATH: [&str; 4] = ["Utilities", "bin", "x86", "fxc.exe"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolchainError {
    SdkNotFound { sdk_dir: PathBuf },
    CompilerNotFound { compiler: PathBuf },
}

impl fmt::Display for ToolchainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolchainError::SdkNotFound { .. } => f.write_str("DirectX SDK not found!"),
            ToolchainError::CompilerNotFound { compiler } => {
                write!(f, "Shader compiler not found!\n{}", compiler.display())
            }
        }
    }
}

impl std::error::Error for ToolchainError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub sdk_dir: PathBuf,
    pub compiler: PathBuf,
}

impl Toolchain {
    pub fn compiler_path(sdk_dir: &Path) -> PathBuf {
        COMPILER_SUBPATH
            .iter()
            .fold(sdk_dir.to_path_buf(), |path, part| path.join(part))
    }

    /// The SDK directory is checked before the compiler inside it.
    pub fn locate(sdk_dir: &Path) -> Result<Self, ToolchainError> {
        if !sdk_dir.is_dir() {
            return Err(ToolchainError::SdkNotFound {
                sdk_dir: sdk_dir.to_path_buf(),
            });
        }

        let compiler = Self::compiler_path(sdk_dir);
        if !compiler.exists() {
            return Err(ToolchainError::CompilerNotFound { compiler });
        }

        log::debug!("using shader compiler {}", compiler.display());

        Ok(Self {
            sdk_dir: sdk_dir.to_path_buf(),
            compiler,
        })
    }
}
