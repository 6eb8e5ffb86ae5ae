use std::io::{BufRead, Write};

use anyhow::Context;

use crate::rebuild::RebuildSummary;

pub const EXIT_PROMPT: &str = "Press Enter to exit...";
const BANNER: &str = "***************************************";

pub fn print_summary(out: &mut impl Write, summary: &RebuildSummary) -> anyhow::Result<()> {
    writeln!(
        out,
        "\n{BANNER}\n Don't forget to check in updated files\n Succeeded: {} Failed: {}\n{BANNER}\n",
        summary.succeeded, summary.failed
    )
    .context("failed to write summary")
}

/// Blocks until a line (or EOF) arrives on `input`.
pub fn wait_for_enter(
    input: &mut impl BufRead,
    out: &mut impl Write,
    message: &str,
) -> anyhow::Result<()> {
    write!(out, "{message}").context("failed to write prompt")?;
    out.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    input.read_line(&mut line).context("failed to read from stdin")?;

    Ok(())
}
