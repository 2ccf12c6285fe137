use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{
    icon::Icon,
    svg_size::{ReadError, SizeReader},
};

/// Turns a list of paths into icons, keeping the order of `paths`.
///
/// The first path that can't be read aborts the whole load.
pub fn load_icons<P, R>(paths: &[P], reader: &R) -> Result<Vec<Icon>, LoadError>
where
    P: AsRef<Path>,
    R: SizeReader + ?Sized,
{
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            let source = reader.read(path).map_err(|source| LoadError {
                path: path.to_owned(),
                source,
            })?;

            log::debug!(
                "Loaded {} ({}x{})",
                path.display(),
                source.width,
                source.height
            );

            Ok(Icon::new(
                path.to_owned(),
                source.content,
                source.width,
                source.height,
            ))
        })
        .collect()
}

#[derive(Debug, Error)]
#[error("couldn't read icon {}", .path.display())]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub source: ReadError,
}
