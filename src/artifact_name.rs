use std::path::{Path, PathBuf};

pub const SHEET_EXTENSION: &str = "svg";
pub const MANIFEST_EXTENSION: &str = "json";
pub const RASTER_EXTENSION: &str = "png";

/// Gives the file name of an artifact built for the given density scale.
///
/// Examples of the convention iconsheet uses:
///
/// - sprites.json (1x)
/// - sprites@2x.json (2x)
/// - sprites@3x.png (3x)
pub fn file_name_for_scale(name: &str, scale: u32, extension: &str) -> String {
    if scale == 1 {
        format!("{}.{}", name, extension)
    } else {
        format!("{}@{}x.{}", name, scale, extension)
    }
}

pub fn path_for_scale(folder: &Path, name: &str, scale: u32, extension: &str) -> PathBuf {
    folder.join(file_name_for_scale(name, scale, extension))
}

/// The combined vector document is only ever written at 1x.
pub fn sheet_path(folder: &Path, name: &str) -> PathBuf {
    path_for_scale(folder, name, 1, SHEET_EXTENSION)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn base_scale_has_no_suffix() {
        assert_eq!(file_name_for_scale("sprites", 1, "png"), "sprites.png");
        assert_eq!(file_name_for_scale("sprites", 1, "json"), "sprites.json");
    }

    #[test]
    fn higher_scales_are_suffixed() {
        assert_eq!(file_name_for_scale("sprites", 2, "png"), "sprites@2x.png");
        assert_eq!(file_name_for_scale("sprites", 3, "json"), "sprites@3x.json");
        assert_eq!(file_name_for_scale("ui.icons", 10, "png"), "ui.icons@10x.png");
    }

    #[test]
    fn sheet_is_unscaled() {
        assert_eq!(
            sheet_path(Path::new("dist"), "sprites"),
            Path::new("dist").join("sprites.svg")
        );
    }
}
