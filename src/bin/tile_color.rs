use std::{collections::BTreeMap, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use tile_colors::{
    common::{Color, ColorRGB, TileValue},
    persist, TilePalette,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Css,
    Hex,
    Json,
}

#[derive(Parser, Debug)]
#[command(about = "Print the background color for tile values")]
struct Args {
    /// Palette file to look colors up in
    #[arg(long)]
    palette: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Css)]
    format: Format,

    /// Tile values, e.g. 2 4 8; defaults to every value the palette defines
    values: Vec<TileValue>,
}

fn format_colors(values: &[TileValue], palette: &TilePalette, format: Format) -> Result<String> {
    let colors: Vec<(TileValue, Color)> = values.iter().map(|&v| (v, palette.color(v))).collect();
    let out = match format {
        Format::Css => colors
            .iter()
            .map(|(v, c)| format!("{} {}", v, c))
            .collect::<Vec<_>>()
            .join("\n"),
        Format::Hex => colors
            .iter()
            .map(|(v, c)| format!("{} {}", v, c.to_hex()))
            .collect::<Vec<_>>()
            .join("\n"),
        Format::Json => {
            let map: BTreeMap<TileValue, ColorRGB> =
                colors.into_iter().map(|(v, c)| (v, c.into())).collect();
            serde_json::to_string(&map)?
        }
    };
    Ok(out)
}

pub fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let palette = match &args.palette {
        Some(path) => persist::load_palette_file(path)
            .with_context(|| format!("Unable to load palette {}", path.display()))?,
        None => TilePalette::new("Default"),
    };
    info!("Using palette {}", palette.name);

    let values = if args.values.is_empty() {
        palette.values()
    } else {
        args.values
    };
    println!("{}", format_colors(&values, &palette, args.format)?);
    Ok(())
}
