// src/cli/mod.rs
use clap::{Command, CommandFactory, Parser};
use clap_complete::Shell;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(name = "xvalues", version)]
#[command(about = "Show numbers in hex, decimal, byte-scale and binary form")]
#[command(
    long_about = "Show numbers in hex, decimal, byte-scale and binary form.\n\n\
    Values may be decimal, 0x hex, 0-prefixed octal or 0b binary, and may end in \
    one of kKmMgGtTpPeE to scale by 1024^n. Without values a table of common sizes \
    is printed."
)]
pub struct Cli {
    /// Show binary digits, clear bits as '.'
    #[arg(short = 'b', long = "dots", conflicts_with = "zeros")]
    pub dots: bool,

    /// Show binary digits, clear bits as '0'
    #[arg(short = 'B', long = "zeros")]
    pub zeros: bool,

    /// Print a JSON array instead of text lines
    #[arg(long)]
    pub json: bool,

    /// Print a completion script for SHELL and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Values to format
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "VALUE")]
    pub values: Vec<String>,
}

/// Character used for clear bits in binary display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroGlyph {
    Dot,
    Zero,
}

impl ZeroGlyph {
    pub fn as_char(self) -> char {
        match self {
            ZeroGlyph::Dot => '.',
            ZeroGlyph::Zero => '0',
        }
    }
}

/// Rendering options fixed once per invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayConfig {
    /// `Some` when binary digits are shown.
    pub binary: Option<ZeroGlyph>,
}

impl DisplayConfig {
    pub fn zero_glyph(&self) -> Option<char> {
        self.binary.map(ZeroGlyph::as_char)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

impl Cli {
    /// Parses `args` (program name first) after applying the flag prefix rule.
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::parse_from(normalize_args(args))
    }

    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::try_parse_from(normalize_args(args))
    }

    pub fn display_config(&self) -> DisplayConfig {
        let binary = if self.dots {
            Some(ZeroGlyph::Dot)
        } else if self.zeros {
            Some(ZeroGlyph::Zero)
        } else {
            None
        };
        DisplayConfig { binary }
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }
}

/// A first argument beginning with `-b` or `-B` counts as that flag, so
/// `-binary` behaves like `-b`.
///
/// Everything after the leading options is a value, including `--` and
/// hyphen-led tokens, so an explicit `--` is placed before the first value.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if let Some(first) = args.get_mut(1) {
        let flag = first
            .to_str()
            .and_then(|s| s.get(..2))
            .filter(|prefix| *prefix == "-b" || *prefix == "-B")
            .map(OsString::from);
        if let Some(flag) = flag {
            *first = flag;
        }
    }

    let values_start = leading_options_end(&args);
    if values_start < args.len() {
        args.insert(values_start, OsString::from("--"));
    }
    args
}

/// Index of the first argument that is not one of the options `Cli` declares.
fn leading_options_end(args: &[OsString]) -> usize {
    let mut cmd = Cli::command();
    cmd.build();

    let mut i = 1;
    while let Some(arg) = args.get(i).and_then(|a| a.to_str()) {
        match option_arity(&cmd, arg) {
            Some(extra) => i += 1 + extra,
            None => break,
        }
    }
    i
}

/// Number of following arguments the option `arg` consumes, or `None` when
/// `arg` is not a declared option.
fn option_arity(cmd: &Command, arg: &str) -> Option<usize> {
    let (found, inline_value) = if let Some(long) = arg.strip_prefix("--") {
        let (name, inline_value) = match long.split_once('=') {
            Some((name, _)) => (name, true),
            None => (long, false),
        };
        let found = cmd
            .get_arguments()
            .find(|a| !name.is_empty() && a.get_long() == Some(name));
        (found, inline_value)
    } else {
        let mut chars = arg.strip_prefix('-')?.chars();
        let short = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return None,
        };
        let found = cmd.get_arguments().find(|a| a.get_short() == Some(short));
        (found, false)
    };

    let takes_value = found?.get_action().takes_values();
    Some(if takes_value && !inline_value { 1 } else { 0 })
}
