use std::io::{BufRead, Write};

use anyhow::Context;

use crate::compiler::ShaderCompiler;
use crate::config::Config;
use crate::console::{EXIT_PROMPT, print_summary, wait_for_enter};
use crate::rebuild::{RebuildSummary, rebuild};
use crate::shaders::ShaderSource;
use crate::toolchain::{Toolchain, ToolchainError};
use crate::vcs::Vcs;

#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(RebuildSummary),
    ToolchainMissing(ToolchainError),
}

pub struct App<'a, I, O> {
    pub config: &'a Config,
    pub table: &'a [ShaderSource],
    pub input: I,
    pub out: O,
}

impl<I: BufRead, O: Write> App<'_, I, O> {
    /// A missing toolchain ends the run before anything is compiled. Compile
    /// failures only show up in the summary; neither changes the exit status.
    pub fn run<C, V>(
        &mut self,
        make_compiler: impl FnOnce(&Toolchain) -> C,
        vcs: &mut V,
    ) -> anyhow::Result<RunOutcome>
    where
        C: ShaderCompiler,
        V: Vcs,
    {
        let toolchain = match Toolchain::locate(&self.config.sdk_dir) {
            Ok(t) => t,
            Err(e) => {
                log::debug!("toolchain check failed: {:?}", e);
                writeln!(self.out, "{e}").context("failed to write error")?;
                self.prompt(&format!("\n{EXIT_PROMPT}"))?;
                return Ok(RunOutcome::ToolchainMissing(e));
            }
        };

        log::info!("using DirectX SDK at {}", toolchain.sdk_dir.display());
        let mut compiler = make_compiler(&toolchain);
        let summary = rebuild(
            self.table,
            &self.config.output_dir,
            &mut compiler,
            vcs,
            &mut self.out,
        )
        .context("failed to rebuild shaders")?;

        print_summary(&mut self.out, &summary)?;
        self.prompt(EXIT_PROMPT)?;

        Ok(RunOutcome::Completed(summary))
    }

    fn prompt(&mut self, message: &str) -> anyhow::Result<()> {
        if self.config.prompt {
            wait_for_enter(&mut self.input, &mut self.out, message)?;
        }
        Ok(())
    }
}
