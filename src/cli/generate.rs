use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::args::{GenerateArgs, DEFAULT_COLOR_MAP};
use crate::core::{
    color_map::resolve_color_map,
    error::TableError,
    file_io::write_file_with,
    header_writer::HeaderLayout,
    packed_color::ChannelQuantization,
    sample_table::{SampleTable, DEFAULT_SAMPLE_COUNT},
};

/// Everything needed to produce one header. Missing fields take their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TableParams {
    pub colormap: String,
    pub sample_count: usize,
    pub quantization: ChannelQuantization,
    pub layout: HeaderLayout,
}

impl Default for TableParams {
    fn default() -> Self {
        TableParams {
            colormap: DEFAULT_COLOR_MAP.to_owned(),
            sample_count: DEFAULT_SAMPLE_COUNT,
            quantization: ChannelQuantization::default(),
            layout: HeaderLayout::default(),
        }
    }
}

impl From<&GenerateArgs> for TableParams {
    fn from(args: &GenerateArgs) -> Self {
        TableParams {
            colormap: args.colormap.clone(),
            sample_count: args.sample_count,
            quantization: if args.round {
                ChannelQuantization::Round
            } else {
                ChannelQuantization::Truncate
            },
            layout: HeaderLayout::default(),
        }
    }
}

/// Validate the parameters, resolve the colormap, and sample it.
pub fn build_sample_table(params: &TableParams) -> Result<SampleTable, TableError> {
    params.layout.validate()?;
    let color_map = resolve_color_map(&params.colormap)?;
    log::debug!(
        "Sampling colormap `{}` at {} points ({:?})",
        params.colormap,
        params.sample_count,
        params.quantization
    );
    SampleTable::generate(&color_map, params.sample_count, params.quantization)
}

/**
 * Generate the table and write it out as a header. The output file is only
 * created once the table exists, so bad parameters never clobber an existing
 * header.
 */
pub fn generate_colormap_header(
    params: &TableParams,
    output_path: &Path,
) -> Result<(), TableError> {
    let table = build_sample_table(params)?;
    write_file_with(output_path, |writer| {
        params.layout.write_header(writer, &table)
    })
}
