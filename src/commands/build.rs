use anyhow::Context;
use sheetpack::VerticalStackPacker;

use crate::{
    artifact_name,
    commands::load_config,
    data::RasterizerKind,
    discover::discover_inputs,
    export::{export, ExportSettings},
    layout::layout,
    loader::load_icons,
    options::{BuildOptions, GlobalOptions},
    rasterizer::{InkscapeRasterizer, NoneRasterizer},
    svg_size::SvgSizeReader,
};

pub fn build(global: GlobalOptions, options: BuildOptions) -> anyhow::Result<()> {
    let config = load_config(global.config.as_deref())?;

    let name = options.name.unwrap_or_else(|| config.name.clone());
    let output_dir = options.output_dir.unwrap_or_else(|| config.output_dir());
    let scales = if options.scales.is_empty() {
        config.scales.clone()
    } else {
        options.scales
    };
    let rasterizer = options.rasterizer.unwrap_or(config.rasterizer);

    let sheet_path = artifact_name::sheet_path(&output_dir, &name);
    let paths = discover_inputs(&options.paths, config.folder(), &config.inputs, &[sheet_path])
        .context("couldn't find input icons")?;

    if paths.is_empty() {
        log::warn!("No icons were given, the sheet will be empty");
    }

    let icons = load_icons(&paths, &SvgSizeReader)?;
    let sheet = layout(icons, &VerticalStackPacker::new())?;

    let settings = ExportSettings {
        output_dir: &output_dir,
        name: &name,
        scales: &scales,
        name_conflicts: config.on_name_conflict,
    };

    let written = match rasterizer {
        RasterizerKind::Inkscape => {
            let mut inkscape = InkscapeRasterizer::new(&config.inkscape_path);
            export(&sheet, &settings, &mut inkscape)?
        }
        RasterizerKind::None => export(&sheet, &settings, &mut NoneRasterizer)?,
    };

    for path in written {
        log::info!("Wrote {}", path.display());
    }

    Ok(())
}
