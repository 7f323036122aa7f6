pub mod completion;
pub mod format;

use crate::cli::{Cli, OutputMode};
use crate::error::Result;
use crate::render::RenderedValue;
use std::io::Write;
use tracing::debug;

/// Runs one invocation, writing all output to `out`.
///
/// Nothing is written when a value fails to parse.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    if let Some(shell) = cli.completions {
        return completion::cmd_generate_completion(shell, out);
    }

    let config = cli.display_config();
    let rendered = if cli.values.is_empty() {
        debug!("no values given, printing constant table");
        format::format_constants(&config)
    } else {
        format::format_values(&cli.values, &config)?
    };

    write_rendered(&rendered, cli.output_mode(), out)
}

fn write_rendered<W: Write>(
    rendered: &[RenderedValue],
    mode: OutputMode,
    out: &mut W,
) -> Result<()> {
    match mode {
        OutputMode::Text => {
            for value in rendered {
                writeln!(out, "{}", value.line())?;
            }
        }
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *out, rendered)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
