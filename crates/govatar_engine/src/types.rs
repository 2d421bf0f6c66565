use std::path::PathBuf;

use image::DynamicImage;
use serde::Deserialize;

/// One logo entry as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogoEntry {
    /// Site the logo belongs to; the identifier is derived from its host.
    pub href: String,
    /// Display name shown on the index page.
    pub name: String,
    /// URL of the source image; only its file name is used for the local lookup.
    pub src: String,
}

/// A config entry with its derived identity and decoded source image.
#[derive(Debug, Clone)]
pub struct LogoRecord {
    pub entry: LogoEntry,
    /// Stable identifier derived from `entry.href`, unique across the run.
    pub id: String,
    /// Canonical output file name, `{id}.jpg`.
    pub filename: String,
    pub image: DynamicImage,
}

/// Totals reported after a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub record_count: usize,
    /// Sized renditions plus one canonical alias per record.
    pub files_written: usize,
    pub page_path: PathBuf,
}
