use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, bail};

pub const P4_VAR: &str = "P4_EXECUTABLE";
const DEFAULT_P4: &str = "p4";

pub trait Vcs {
    /// Opens an existing file for edit.
    fn edit(&mut self, path: &Path) -> anyhow::Result<()>;
    /// Registers a new file, tracked as binary.
    fn add_binary(&mut self, path: &Path) -> anyhow::Result<()>;
}

pub struct Perforce {
    program: PathBuf,
}

impl Default for Perforce {
    fn default() -> Self {
        Self::new(DEFAULT_P4)
    }
}

impl Perforce {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_env() -> Self {
        match std::env::var(P4_VAR) {
            Ok(program) if !program.is_empty() => Self::new(program),
            _ => Self::default(),
        }
    }

    fn run(&self, args: &[&str], path: &Path) -> anyhow::Result<()> {
        let status = Command::new(&self.program)
            .args(args)
            .arg(path)
            .status()
            .with_context(|| format!("failed to run {}", self.program.display()))?;

        if !status.success() {
            bail!(
                "{} {} {} exited with {}",
                self.program.display(),
                args.join(" "),
                path.display(),
                status
            );
        }

        Ok(())
    }
}

impl Vcs for Perforce {
    fn edit(&mut self, path: &Path) -> anyhow::Result<()> {
        self.run(&["edit"], path)
    }

    fn add_binary(&mut self, path: &Path) -> anyhow::Result<()> {
        self.run(&["add", "-t", "binary"], path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_client_is_an_error() {
        let mut p4 = Perforce::new("/nonexistent/shader-rebuild/p4");
        let err = p4.edit(Path::new("a.cso")).unwrap_err();
        assert!(err.to_string().contains("failed to run"));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_status_is_an_error() {
        let mut p4 = Perforce::new("false");
        let err = p4.add_binary(Path::new("a.cso")).unwrap_err();
        assert!(err.to_string().contains("add -t binary a.cso"));
    }

    #[cfg(unix)]
    #[test]
    fn zero_status_is_ok() {
        let mut p4 = Perforce::new("true");
        assert!(p4.edit(Path::new("a.cso")).is_ok());
        assert!(p4.add_binary(Path::new("a.cso")).is_ok());
    }
}
