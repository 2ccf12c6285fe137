//! Expands command line paths and config globs into the list of icon files to
//! pack.

use std::{
    collections::HashSet,
    convert::TryFrom,
    fmt,
    path::{Path, PathBuf},
};

use fs_err as fs;
use globset::{GlobBuilder, GlobMatcher};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use walkdir::WalkDir;

/// A config `inputs` pattern like `icons/**/*.svg`, matched against paths
/// relative to the folder holding the config file.
///
/// `*` stops at folder boundaries; use `**` to reach into subfolders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InputGlob {
    pattern: String,
    matcher: GlobMatcher,
    walk_root: PathBuf,
}

impl InputGlob {
    pub fn new(pattern: &str) -> Result<Self, globset::Error> {
        let matcher = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()?
            .compile_matcher();

        Ok(InputGlob {
            pattern: pattern.to_owned(),
            matcher,
            walk_root: literal_folder(pattern),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_match<P: AsRef<Path>>(&self, path: P) -> bool {
        self.matcher.is_match(path)
    }

    /// The folder every match lives under. Walking it is enough to find every
    /// file the pattern can select.
    pub fn walk_root(&self) -> &Path {
        &self.walk_root
    }
}

/// Cuts `pattern` at the last `/` before its first wildcard. A pattern with no
/// wildcards names a single file, which is walked directly.
///
/// Escapes like `[*]` count as wildcards here, which only widens the walk.
fn literal_folder(pattern: &str) -> PathBuf {
    let is_wildcard = |c: char| matches!(c, '*' | '?' | '[' | ']' | '{' | '}');

    let wildcard = match pattern.find(is_wildcard) {
        Some(index) => index,
        None => return PathBuf::from(pattern),
    };

    match pattern[..wildcard].rfind('/') {
        Some(0) => PathBuf::from("/"),
        Some(slash) => PathBuf::from(&pattern[..slash]),
        None => PathBuf::new(),
    }
}

impl PartialEq for InputGlob {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for InputGlob {}

impl TryFrom<String> for InputGlob {
    type Error = globset::Error;

    fn try_from(pattern: String) -> Result<Self, Self::Error> {
        InputGlob::new(&pattern)
    }
}

impl From<InputGlob> for String {
    fn from(glob: InputGlob) -> String {
        glob.pattern
    }
}

impl fmt::Display for InputGlob {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Collects icon paths, in order, from explicit `paths` and from `globs`
/// relative to `glob_root`.
///
/// Folders named in `paths` are walked for `.svg` files. Files found by
/// walking that are one of `exclude` are skipped, so a sheet written next to
/// its inputs doesn't get packed into the next sheet. A file reached twice is
/// only kept the first time.
pub fn discover_inputs(
    paths: &[PathBuf],
    glob_root: &Path,
    globs: &[InputGlob],
    exclude: &[PathBuf],
) -> Result<Vec<PathBuf>, Error> {
    let excluded: HashSet<PathBuf> = exclude
        .iter()
        .filter_map(|path| fs::canonicalize(path).ok())
        .collect();

    let mut found = Discovered::default();

    for path in paths {
        if path.is_dir() {
            log::trace!("Searching for icons in '{}'", path.display());

            for entry in WalkDir::new(path).sort_by(|a, b| a.file_name().cmp(b.file_name())) {
                let entry = entry?;

                if entry.file_type().is_file() && is_svg(entry.path()) {
                    found.push_discovered(entry.into_path(), &excluded);
                }
            }
        } else {
            found.push(path.clone());
        }
    }

    // An empty root means the current directory; walk "." but keep the
    // resulting paths relative.
    let walk_root = if glob_root.as_os_str().is_empty() {
        Path::new(".")
    } else {
        glob_root
    };

    for glob in globs {
        let base_path = walk_root.join(glob.walk_root());
        log::trace!(
            "Searching for icons in '{}' matching '{}'",
            base_path.display(),
            glob
        );

        for entry in WalkDir::new(&base_path).sort_by(|a, b| a.file_name().cmp(b.file_name())) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = match entry.path().strip_prefix(walk_root) {
                Ok(relative) => relative,
                Err(_) => continue,
            };

            if glob.is_match(relative) {
                found.push_discovered(glob_root.join(relative), &excluded);
            }
        }
    }

    Ok(found.paths)
}

#[derive(Default)]
struct Discovered {
    paths: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl Discovered {
    fn push(&mut self, path: PathBuf) {
        let key = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());

        if self.seen.insert(key) {
            log::trace!("Found input {}", path.display());
            self.paths.push(path);
        } else {
            log::debug!("Skipping {}, it was already included", path.display());
        }
    }

    fn push_discovered(&mut self, path: PathBuf, excluded: &HashSet<PathBuf>) {
        let is_excluded = fs::canonicalize(&path)
            .map(|canonical| excluded.contains(&canonical))
            .unwrap_or(false);

        if is_excluded {
            log::debug!("Skipping {}, it is an output of this build", path.display());
        } else {
            self.push(path);
        }
    }
}

fn is_svg(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => ext.eq_ignore_ascii_case("svg"),
        None => false,
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),
}
