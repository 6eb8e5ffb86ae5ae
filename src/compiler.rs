use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;

use crate::shaders::ShaderOutput;

pub trait ShaderCompiler {
    /// Returns whether the compiler reported success. `Err` means it never ran.
    fn compile(
        &mut self,
        source: &Path,
        output: &ShaderOutput,
        target: &Path,
    ) -> anyhow::Result<bool>;
}

/// The DirectX SDK effect compiler.
pub struct Fxc {
    program: PathBuf,
}

impl Fxc {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn args(source: &Path, output: &ShaderOutput, target: &Path) -> Vec<OsString> {
        vec![
            "/E".into(),
            output.entry.into(),
            "/T".into(),
            output.profile.into(),
            "/Fo".into(),
            target.into(),
            source.into(),
        ]
    }
}

impl ShaderCompiler for Fxc {
    fn compile(
        &mut self,
        source: &Path,
        output: &ShaderOutput,
        target: &Path,
    ) -> anyhow::Result<bool> {
        let status = Command::new(&self.program)
            .args(Self::args(source, output, target))
            .status()
            .with_context(|| format!("failed to run {}", self.program.display()))?;

        log::debug!("{} exited with {}", self.program.display(), status);

        Ok(status.success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTPUT: ShaderOutput = ShaderOutput {
        entry: "PSAA",
        profile: "ps_3_0",
        file: "overlay.cso",
    };

    #[test]
    fn argument_order() {
        let args = Fxc::args(Path::new("overlay.ps"), &OUTPUT, Path::new("out/overlay.cso"));
        let expected: Vec<OsString> = [
            "/E",
            "PSAA",
            "/T",
            "ps_3_0",
            "/Fo",
            "out/overlay.cso",
            "overlay.ps",
        ]
        .iter()
        .map(OsString::from)
        .collect();
        assert_eq!(args, expected);
    }

    #[test]
    fn missing_program_is_an_error() {
        let mut fxc = Fxc::new("/nonexistent/shader-rebuild/fxc.exe");
        let result = fxc.compile(Path::new("a.ps"), &OUTPUT, Path::new("a.cso"));
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_maps_to_success() {
        let src = Path::new("a.ps");
        let dst = Path::new("a.cso");
        assert!(Fxc::new("true").compile(src, &OUTPUT, dst).unwrap());
        assert!(!Fxc::new("false").compile(src, &OUTPUT, dst).unwrap());
    }
}
