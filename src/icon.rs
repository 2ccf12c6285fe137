use std::{
    borrow::Borrow,
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{Deserialize, Serialize};

/// The name an icon is known by in manifests: its file name with the
/// extension stripped.
///
/// This is really just a string, but giving it its own type keeps manifest
/// keys from getting mixed up with paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconName(Arc<str>);

impl IconName {
    /// Derives a name from the base name of `path`. Directories are ignored,
    /// so `a/icon.svg` and `b/icon.svg` both become `icon`.
    ///
    /// Everything from the last `.` onwards is the extension, so a file named
    /// just `.svg` has an empty name.
    pub fn from_path(path: &Path) -> Self {
        let base = match path.file_name() {
            Some(base) => base.to_string_lossy(),
            None => path.to_string_lossy(),
        };

        let name = match base.rfind('.') {
            Some(dot) => &base[..dot],
            None => &base[..],
        };

        IconName(name.into())
    }
}

impl AsRef<str> for IconName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for IconName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// One icon's geometry and source markup.
///
/// `width` and `height` are in sheet units and already reflect `scale`. `x`
/// and `y` stay at zero until the icon has been laid out.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    pub name: IconName,
    pub path: PathBuf,
    pub content: Arc<[u8]>,
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
    pub scale: u32,
}

impl Icon {
    pub fn new(path: PathBuf, content: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            name: IconName::from_path(&path),
            path,
            content: content.into(),
            width,
            height,
            x: 0,
            y: 0,
            scale: 1,
        }
    }
}
