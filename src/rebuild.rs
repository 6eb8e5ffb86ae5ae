use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::compiler::ShaderCompiler;
use crate::shaders::{ShaderSource, output_count};
use crate::vcs::Vcs;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RebuildSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl RebuildSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Compiles every output in `table` into `output_dir`, one at a time.
///
/// Targets that already exist are opened for edit before the compiler runs.
/// Targets that did not exist are added as binary afterwards, whether or not
/// the compile worked. Compiler and VCS failures never stop the run; only a
/// failure to write progress to `out` does.
pub fn rebuild(
    table: &[ShaderSource],
    output_dir: &Path,
    compiler: &mut impl ShaderCompiler,
    vcs: &mut impl Vcs,
    out: &mut impl Write,
) -> anyhow::Result<RebuildSummary> {
    let mut summary = RebuildSummary::default();
    log::debug!(
        "rebuilding {} shader outputs into {}",
        output_count(table),
        output_dir.display()
    );

    for shader in table {
        writeln!(out, "\nCompiling: {}...", shader.source).context("failed to write progress")?;

        for output in shader.outputs {
            writeln!(
                out,
                "\n# entry: {} profile: {} output: {}\n",
                output.entry, output.profile, output.file
            )
            .context("failed to write progress")?;

            let target = output_dir.join(output.file);
            let exists = target.exists();

            if exists && let Err(e) = vcs.edit(&target) {
                log::warn!("failed to open {} for edit: {:?}", target.display(), e);
            }

            match compiler.compile(Path::new(shader.source), output, &target) {
                Ok(true) => summary.succeeded += 1,
                Ok(false) => {
                    log::warn!("{} ({}) failed to compile", shader.source, output.entry);
                    summary.failed += 1;
                }
                Err(e) => {
                    log::error!("{:?}", e);
                    summary.failed += 1;
                }
            }

            if !exists && let Err(e) = vcs.add_binary(&target) {
                log::warn!("failed to add {}: {:?}", target.display(), e);
            }
        }
    }

    log::info!(
        "rebuild finished: {} succeeded, {} failed",
        summary.succeeded,
        summary.failed
    );

    Ok(summary)
}
