use std::path::PathBuf;

use clap::Parser;
use colormap_header::cli::args::{ColormapHeaderArgs, CommandsEnum, GenerateArgs};
use colormap_header::cli::generate::{generate_colormap_header, TableParams};
use colormap_header::cli::list::list_color_maps;
use colormap_header::core::error::TableError;
use colormap_header::core::file_io::{output_path_for_params, read_params_file};

fn run(args: &ColormapHeaderArgs) -> Result<(), TableError> {
    match &args.command {
        Some(CommandsEnum::Generate(generate_args)) => {
            generate_colormap_header(&TableParams::from(generate_args), &generate_args.output)
        }

        Some(CommandsEnum::FromParams(params)) => {
            let table_params: TableParams = read_params_file(&params.params_path)?;
            let output_path: PathBuf = params
                .output
                .clone()
                .unwrap_or_else(|| output_path_for_params(&params.params_path));
            generate_colormap_header(&table_params, &output_path)
        }

        Some(CommandsEnum::List) => {
            list_color_maps().map_err(|err| TableError::io("<stdout>", err))
        }

        None => {
            // No subcommand: regenerate the default inferno table in place.
            let defaults = GenerateArgs::default();
            generate_colormap_header(&TableParams::from(&defaults), &defaults.output)
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: ColormapHeaderArgs = ColormapHeaderArgs::parse();

    if let Err(err) = run(&args) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
