use std::path::PathBuf;

use structopt::StructOpt;

use crate::data::RasterizerKind;

#[derive(Debug, StructOpt)]
#[structopt(about = "Packs SVG icons into one sheet with manifests and rasters for each density")]
pub struct Options {
    #[structopt(flatten)]
    pub global: GlobalOptions,

    #[structopt(subcommand)]
    pub command: Subcommand,
}

#[derive(Debug, StructOpt)]
pub struct GlobalOptions {
    /// The iconsheet.toml file, or a folder containing one, to read settings
    /// from. Defaults to iconsheet.toml in the current directory if it exists.
    #[structopt(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub enum Subcommand {
    /// Combine icons into a sheet, then write a manifest and a raster for
    /// every scale.
    Build(BuildOptions),

    /// Print the layout and manifest that a build would produce without
    /// writing anything.
    Inspect(InspectOptions),
}

#[derive(Debug, StructOpt)]
pub struct BuildOptions {
    /// The base name for every artifact. Defaults to "sprites".
    #[structopt(long)]
    pub name: Option<String>,

    /// The folder to write artifacts into.
    #[structopt(long)]
    pub output_dir: Option<PathBuf>,

    /// Comma-separated density scales to export, like 1,2,3.
    #[structopt(long, require_delimiter = true, parse(try_from_str = parse_scale))]
    pub scales: Vec<u32>,

    /// How rasters are produced.
    ///
    /// Options:
    ///
    /// - inkscape: Run Inkscape for every scale
    ///
    /// - none: Only write the sheet and manifests
    #[structopt(long)]
    pub rasterizer: Option<RasterizerKind>,

    /// The icons to pack. Folders are searched for .svg files.
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct InspectOptions {
    /// The density scale of the manifest to print.
    #[structopt(long, default_value = "1", parse(try_from_str = parse_scale))]
    pub scale: u32,

    /// The icons to pack. Folders are searched for .svg files.
    pub paths: Vec<PathBuf>,
}

fn parse_scale(value: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(0) => Err(String::from("Scales must be greater than zero.")),
        Ok(scale) => Ok(scale),
        Err(err) => Err(format!("Invalid scale '{}': {}", value, err)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn build_with_scales() {
        let options = Options::from_iter_safe(&[
            "iconsheet",
            "build",
            "--scales",
            "1,2",
            "--rasterizer",
            "none",
            "a.svg",
            "b.svg",
        ])
        .unwrap();

        match options.command {
            Subcommand::Build(build) => {
                assert_eq!(build.scales, vec![1, 2]);
                assert_eq!(build.rasterizer, Some(RasterizerKind::None));
                assert_eq!(build.paths, vec![PathBuf::from("a.svg"), PathBuf::from("b.svg")]);
                assert_eq!(build.name, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn scales_do_not_swallow_paths() {
        let options =
            Options::from_iter_safe(&["iconsheet", "build", "--scales", "2,3", "a.svg"]).unwrap();

        match options.command {
            Subcommand::Build(build) => {
                assert_eq!(build.scales, vec![2, 3]);
                assert_eq!(build.paths, vec![PathBuf::from("a.svg")]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn zero_scale_is_rejected() {
        assert!(Options::from_iter_safe(&["iconsheet", "build", "--scales", "0"]).is_err());
    }

    #[test]
    fn inspect_defaults_to_base_scale() {
        let options = Options::from_iter_safe(&["iconsheet", "inspect", "icons"]).unwrap();

        match options.command {
            Subcommand::Inspect(inspect) => assert_eq!(inspect.scale, 1),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
