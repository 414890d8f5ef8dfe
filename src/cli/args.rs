use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::sample_table::DEFAULT_SAMPLE_COUNT;

pub const DEFAULT_COLOR_MAP: &str = "inferno";
pub const DEFAULT_OUTPUT_PATH: &str = "colormap.h";

/// Generate a C header holding a colormap as a constant table of packed RGBA values.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct ColormapHeaderArgs {
    #[command(subcommand)]
    pub command: Option<CommandsEnum>,
}

#[derive(Debug, Subcommand)]
pub enum CommandsEnum {
    /// Generate a header from command line options.
    Generate(GenerateArgs),
    /// Generate a header from a JSON parameter file.
    FromParams(ParameterFilePath),
    /// Print the names of all known colormaps.
    List,
}

#[derive(Debug, Args, PartialEq)]
pub struct GenerateArgs {
    /// Colormap to sample. Append `_r` for the reversed colormap.
    #[clap(long, short, default_value = DEFAULT_COLOR_MAP)]
    pub colormap: String,

    /// Number of entries in the generated table.
    #[clap(long, short = 'n', default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub sample_count: usize,

    #[clap(long, short, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Round channels to the nearest byte instead of truncating them.
    #[clap(long, short)]
    pub round: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        GenerateArgs {
            colormap: DEFAULT_COLOR_MAP.to_owned(),
            sample_count: DEFAULT_SAMPLE_COUNT,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            round: false,
        }
    }
}

#[derive(Debug, Args)]
pub struct ParameterFilePath {
    pub params_path: String,

    /// Defaults to the parameter file's base name with a `.h` suffix.
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}
