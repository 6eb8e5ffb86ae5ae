use std::io::IsTerminal;

use anyhow::Context;

use crate::app::{App, RunOutcome};
use crate::compiler::Fxc;
use crate::config::Config;
use crate::vcs::Perforce;

mod app;
mod compiler;
mod config;
mod console;
mod logging;
mod rebuild;
mod shaders;
#[cfg(test)]
mod test_dir;
mod toolchain;
mod vcs;

fn main() -> anyhow::Result<()> {
    logging::init()?;

    let mut config = Config::from_env();
    config.prompt &= std::io::stdin().is_terminal();
    log::debug!("{:?}", config);

    let mut vcs = Perforce::from_env();
    let mut app = App {
        config: &config,
        table: shaders::BUILTIN,
        input: std::io::stdin().lock(),
        out: std::io::stdout().lock(),
    };

    let outcome = app
        .run(|toolchain| Fxc::new(&toolchain.compiler), &mut vcs)
        .context("failed to run shader rebuild")?;

    match outcome {
        RunOutcome::Completed(summary) if summary.failed > 0 => {
            log::warn!("{} of {} shaders failed", summary.failed, summary.total());
        }
        RunOutcome::Completed(_) => {}
        RunOutcome::ToolchainMissing(e) => log::debug!("nothing compiled: {:?}", e),
    }

    Ok(())
}
