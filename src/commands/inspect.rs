use std::io::{self, Write};

use anyhow::Context;
use sheetpack::VerticalStackPacker;

use crate::{
    artifact_name,
    commands::load_config,
    data::Manifest,
    discover::discover_inputs,
    layout::layout,
    loader::load_icons,
    options::{GlobalOptions, InspectOptions},
    svg_size::SvgSizeReader,
};

pub fn inspect(global: GlobalOptions, options: InspectOptions) -> anyhow::Result<()> {
    let config = load_config(global.config.as_deref())?;

    let sheet_path = artifact_name::sheet_path(&config.output_dir(), &config.name);
    let paths = discover_inputs(&options.paths, config.folder(), &config.inputs, &[sheet_path])
        .context("couldn't find input icons")?;

    let icons = load_icons(&paths, &SvgSizeReader)?;
    let sheet = layout(icons, &VerticalStackPacker::new())?;

    eprintln!("{:?}", sheet);

    let manifest = Manifest::from_icons(&sheet.icons, options.scale, config.on_name_conflict)?;

    let stdout = io::stdout();
    let mut output = stdout.lock();
    serde_json::to_writer_pretty(&mut output, &manifest)?;
    writeln!(output)?;

    Ok(())
}
