use crate::cli::DisplayConfig;
use crate::scale::Tier;
use serde::Serialize;

/// One value rendered into every display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedValue {
    /// The token as given, or `None` for built-in table entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    pub value: u64,
    pub tier: Tier,
    pub hex: String,
    pub decimal: String,
    pub human: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary: Option<String>,
}

impl RenderedValue {
    /// Renders `value` with the column widths of `column_tier`.
    pub fn new(
        input: Option<String>,
        value: u64,
        column_tier: Tier,
        config: &DisplayConfig,
    ) -> Self {
        Self {
            input,
            value,
            tier: Tier::classify(value),
            hex: format!("0x{:0w$x}", value, w = column_tier.width_hex()),
            decimal: format!("{:>w$}", value, w = column_tier.width_dec()),
            human: human_size(value),
            binary: config.zero_glyph().map(|zero| binary_digits(value, zero)),
        }
    }

    /// The text output line, without the trailing newline.
    pub fn line(&self) -> String {
        let mut line = format!("{} {} {}", self.hex, self.decimal, self.human);
        if let Some(bits) = &self.binary {
            line.push_str("  ");
            line.push_str(bits);
        }
        line
    }
}

/// Formats one output line for `value` aligned to `column_tier`.
///
/// ```rust
/// use xvalues::cli::DisplayConfig;
/// use xvalues::render::render_line;
/// use xvalues::scale::Tier;
///
/// let line = render_line(1024, Tier::Kilo, &DisplayConfig::default());
/// assert_eq!(line, "0x00000400    1024    1.0K");
/// ```
pub fn render_line(value: u64, column_tier: Tier, config: &DisplayConfig) -> String {
    RenderedValue::new(None, value, column_tier, config).line()
}

/// Size in the value's own tier with one decimal, e.g. `"   1.5K"`.
pub fn human_size(value: u64) -> String {
    let tier = Tier::classify(value);
    format!("{:6.1}{}", value as f64 / tier.divisor() as f64, tier.suffix())
}

/// Smallest of 4, 8, 16, 32 or 64 bits that holds `value`.
pub fn binary_width(value: u64) -> usize {
    if value <= 0xf {
        4
    } else if value <= 0xff {
        8
    } else if value <= 0xffff {
        16
    } else if value <= 0xffff_ffff {
        32
    } else {
        64
    }
}

/// Bits of `value`, most significant first, with `zero` for clear bits.
pub fn binary_digits(value: u64, zero: char) -> String {
    (0..binary_width(value))
        .rev()
        .map(|bit| if (value >> bit) & 1 == 1 { '1' } else { zero })
        .collect()
}
