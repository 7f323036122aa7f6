use crate::cli::DisplayConfig;
use crate::error::Result;
use crate::parse::parse_value;
use crate::render::RenderedValue;
use crate::scale::{Tier, effective_tier};
use tracing::debug;

const KB: u64 = 1 << 10;
const MB: u64 = 1 << 20;
const GB: u64 = 1 << 30;

/// Sizes printed when no values are given.
pub const CONSTANTS: [u64; 20] = [
    8,
    16,
    64,
    128,
    256,
    512,
    KB,
    4 * KB,
    16 * KB,
    64 * KB,
    MB,
    16 * MB,
    64 * MB,
    256 * MB,
    512 * MB,
    GB,
    4 * GB,
    1 << 40,
    1 << 50,
    1 << 60,
];

/// Parses every token, then renders all of them at the widest tier found.
///
/// The first token that fails to parse aborts the whole batch.
pub fn format_values<S: AsRef<str>>(
    tokens: &[S],
    config: &DisplayConfig,
) -> Result<Vec<RenderedValue>> {
    let values = tokens
        .iter()
        .map(|token| parse_value(token.as_ref()))
        .collect::<std::result::Result<Vec<u64>, _>>()
        .inspect_err(|e| debug!(token = e.token(), "rejecting invocation"))?;

    let column_tier = effective_tier(&values);
    debug!(?column_tier, count = values.len(), "column width selected");

    Ok(tokens
        .iter()
        .zip(values)
        .map(|(token, value)| {
            RenderedValue::new(Some(token.as_ref().to_string()), value, column_tier, config)
        })
        .collect())
}

/// The built-in size table, always at full width.
pub fn format_constants(config: &DisplayConfig) -> Vec<RenderedValue> {
    CONSTANTS
        .iter()
        .map(|&value| RenderedValue::new(None, value, Tier::Exa, config))
        .collect()
}
