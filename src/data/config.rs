use std::{
    io,
    path::{Path, PathBuf},
    str::FromStr,
};

use fs_err as fs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{data::NameConflictPolicy, discover::InputGlob};

pub static CONFIG_FILENAME: &str = "iconsheet.toml";

/// Configuration for iconsheet, contained in an iconsheet.toml file.
///
/// Every field has a default, so an empty file (or no file at all) is a valid
/// configuration. Values given on the command line take precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    /// The base name shared by every artifact.
    #[serde(default = "default_name")]
    pub name: String,

    /// Where artifacts are written, relative to the folder containing this
    /// file. Defaults to that folder.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// The density scales to export, in order.
    #[serde(default = "default_scales")]
    pub scales: Vec<u32>,

    /// Globs matching icons to include, relative to the folder containing
    /// this file.
    #[serde(default)]
    pub inputs: Vec<InputGlob>,

    #[serde(default)]
    pub rasterizer: RasterizerKind,

    /// The Inkscape executable to run when `rasterizer` is `inkscape`.
    #[serde(default = "default_inkscape_path")]
    pub inkscape_path: String,

    #[serde(default)]
    pub on_name_conflict: NameConflictPolicy,

    /// The path that this config came from, if any.
    #[serde(skip)]
    pub file_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            output_dir: None,
            scales: default_scales(),
            inputs: Vec::new(),
            rasterizer: RasterizerKind::default(),
            inkscape_path: default_inkscape_path(),
            on_name_conflict: NameConflictPolicy::default(),
            file_path: PathBuf::new(),
        }
    }
}

impl Config {
    pub fn read_from_folder_or_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let meta = fs::metadata(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;

        if meta.is_file() {
            Self::read_from_file(path)
        } else {
            Self::read_from_folder(path)
        }
    }

    pub fn read_from_folder<P: AsRef<Path>>(folder_path: P) -> Result<Self, ConfigError> {
        let folder_path = folder_path.as_ref();
        let file_path = &folder_path.join(CONFIG_FILENAME);

        Self::read_from_file(file_path)
    }

    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;

        let mut config: Self = toml::from_slice(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_owned(),
            source,
        })?;
        config.file_path = path.to_owned();

        if let Some(&scale) = config.scales.iter().find(|&&scale| scale == 0) {
            return Err(ConfigError::InvalidScale {
                path: path.to_owned(),
                scale,
            });
        }

        log::debug!("Read config from {}", path.display());

        Ok(config)
    }

    /// The folder that paths in this Config are relative to.
    pub fn folder(&self) -> &Path {
        self.file_path.parent().unwrap_or_else(|| Path::new(""))
    }

    pub fn output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(output_dir) => self.folder().join(output_dir),
            None => self.folder().to_owned(),
        }
    }
}

fn default_name() -> String {
    String::from("sprites")
}

fn default_scales() -> Vec<u32> {
    vec![1, 2, 3]
}

fn default_inkscape_path() -> String {
    String::from("inkscape")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RasterizerKind {
    /// Render rasters with Inkscape's command line interface.
    Inkscape,

    /// Write only the sheet and its manifests.
    None,
}

impl Default for RasterizerKind {
    fn default() -> Self {
        RasterizerKind::Inkscape
    }
}

impl FromStr for RasterizerKind {
    type Err = String;

    fn from_str(value: &str) -> Result<RasterizerKind, Self::Err> {
        match value {
            "inkscape" => Ok(RasterizerKind::Inkscape),
            "none" => Ok(RasterizerKind::None),

            _ => Err(String::from(
                "Invalid rasterizer. Valid options are 'inkscape' and 'none'.",
            )),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{source} in {}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{source} in {}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("scale factors must be greater than zero, got {scale} in {}", .path.display())]
    InvalidScale { path: PathBuf, scale: u32 },
}

impl ConfigError {
    /// Tells whether this ConfigError originated because of a path not
    /// existing.
    ///
    /// This lets callers treat a missing iconsheet.toml as an empty config
    /// without checking for the file first.
    pub fn is_not_found(&self) -> bool {
        match self {
            ConfigError::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.name, "sprites");
        assert_eq!(config.scales, vec![1, 2, 3]);
        assert_eq!(config.rasterizer, RasterizerKind::Inkscape);
        assert_eq!(config.on_name_conflict, NameConflictPolicy::Overwrite);
    }

    #[test]
    fn full_config() {
        let config: Config = toml::from_str(
            r#"
                name = "ui"
                output-dir = "dist"
                scales = [1, 2]
                inputs = ["icons/**/*.svg"]
                rasterizer = "none"
                inkscape-path = "/opt/inkscape/bin/inkscape"
                on-name-conflict = "error"
            "#,
        )
        .unwrap();

        assert_eq!(config.name, "ui");
        assert_eq!(config.output_dir, Some(PathBuf::from("dist")));
        assert_eq!(config.scales, vec![1, 2]);
        assert_eq!(config.inputs, vec![InputGlob::new("icons/**/*.svg").unwrap()]);
        assert_eq!(config.rasterizer, RasterizerKind::None);
        assert_eq!(config.inkscape_path, "/opt/inkscape/bin/inkscape");
        assert_eq!(config.on_name_conflict, NameConflictPolicy::Error);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("sizes = [1]").is_err());
    }

    #[test]
    fn missing_config_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::read_from_folder(dir.path()).unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn reads_from_folder() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "name = \"icons\"\noutput-dir = \"out\"\n",
        )
        .unwrap();

        let config = Config::read_from_folder_or_file(dir.path()).unwrap();

        assert_eq!(config.name, "icons");
        assert_eq!(config.folder(), dir.path());
        assert_eq!(config.output_dir(), dir.path().join("out"));
    }

    #[test]
    fn zero_scale_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "scales = [1, 0]").unwrap();

        let err = Config::read_from_file(&path).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidScale { scale: 0, .. }));
    }

    #[test]
    fn bad_toml_is_not_a_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "name = ").unwrap();

        let err = Config::read_from_file(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Toml { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn rasterizer_from_str() {
        assert_eq!("none".parse::<RasterizerKind>(), Ok(RasterizerKind::None));
        assert!("cairo".parse::<RasterizerKind>().is_err());
    }
}
