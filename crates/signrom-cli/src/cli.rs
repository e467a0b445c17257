//! CLI argument definitions for the sign EPROM tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use signrom_cli::source::ImageSource;
use signrom_codec::EditMode;

#[derive(Parser)]
#[command(
    name = "signrom",
    version,
    about = "LED sign EPROM builder - encode 8x8 images into column/row EPROM planes",
    long_about = "Build and inspect the two EPROM images driving an 8x8 multiplexed LED sign.\n\n\
                  EPROM 1 holds the column-select plane, EPROM 2 the row-select plane.\n\
                  Images come from a short message (A-Z, 0-9, space), a built-in\n\
                  pattern, or a hand-drawn grid file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encode an image and write the EPROM 1 / EPROM 2 files.
    Encode(EncodeArgs),

    /// Print the plane bytes, LED grid and scan explanation for an image.
    Preview(SourceArgs),

    /// Decode an import file in draw or text mode.
    Import(ImportArgs),

    /// Read an exported plane pair, check it and rebuild the grid.
    Inspect(InspectArgs),

    /// List the built-in patterns.
    Patterns,
}

/// Where the image comes from. Exactly one source is required.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Message to rasterize (A-Z, 0-9, space; at most 20 characters).
    #[arg(long = "text", value_name = "MESSAGE")]
    pub text: Option<String>,

    /// Built-in pattern name (Cross, Plus, Star, Heart).
    #[arg(long = "pattern", value_name = "NAME")]
    pub pattern: Option<String>,

    /// Grid file: 8 lines of 8 cells, `#`/`1` lit and `.`/`0` off.
    #[arg(long = "grid", value_name = "FILE")]
    pub grid: Option<PathBuf>,
}

impl SourceArgs {
    /// Resolve the flag group into a single source.
    pub fn source(&self) -> Option<ImageSource> {
        if let Some(text) = &self.text {
            Some(ImageSource::Text(text.clone()))
        } else if let Some(name) = &self.pattern {
            Some(ImageSource::Pattern(name.clone()))
        } else {
            self.grid.clone().map(ImageSource::Grid)
        }
    }
}

#[derive(Args)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Directory the two .bin files are written to.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Encode and report without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ImportArgs {
    /// File to import.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// How to interpret the file.
    #[arg(long = "mode", value_enum, default_value = "draw")]
    pub mode: ModeArg,
}

#[derive(Args)]
pub struct InspectArgs {
    /// EPROM 1 (column select) file.
    #[arg(long = "columns", value_name = "FILE")]
    pub columns: PathBuf,

    /// EPROM 2 (row select) file.
    #[arg(long = "rows", value_name = "FILE")]
    pub rows: PathBuf,
}

/// CLI edit mode choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Draw,
    Text,
}

impl From<ModeArg> for EditMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Draw => EditMode::Draw,
            ModeArg::Text => EditMode::Text,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
