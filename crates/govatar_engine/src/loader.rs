use std::path::{Path, PathBuf};

use futures_util::future::try_join_all;
use thiserror::Error;

use crate::identity::{logo_filename, logo_id, IdentityError};
use crate::source::{source_filename, SourceError};
use crate::types::{LogoEntry, LogoRecord};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("failed to load image {path:?}: {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("image load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Load the source image for every entry, all loads in flight at once and
/// joined before returning. The first failure aborts the whole set; there is
/// no per-item recovery.
pub async fn load_records(
    entries: Vec<LogoEntry>,
    images_dir: &Path,
) -> Result<Vec<LogoRecord>, LoadError> {
    let tasks: Vec<_> = entries
        .into_iter()
        .map(|entry| {
            let images_dir = images_dir.to_path_buf();
            // Image decoding is blocking work; keep it off the async workers.
            tokio::task::spawn_blocking(move || load_one(entry, &images_dir))
        })
        .collect();

    let joined = try_join_all(tasks).await?;
    joined.into_iter().collect()
}

fn load_one(entry: LogoEntry, images_dir: &Path) -> Result<LogoRecord, LoadError> {
    let id = logo_id(&entry.href)?;
    let filename = logo_filename(&id);
    let path = images_dir.join(source_filename(&entry.src)?);

    log::debug!("loading {id} from {path:?}");
    let image = image::open(&path).map_err(|err| LoadError::Image {
        path: path.clone(),
        source: err,
    })?;

    Ok(LogoRecord {
        entry,
        id,
        filename,
        image,
    })
}
