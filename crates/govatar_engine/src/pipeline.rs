use std::fs;
use std::path::{Path, PathBuf};

use pipeline_logging::pipeline_info;
use thiserror::Error;

use crate::compose::{compose_logo, encode_jpeg, ComposeError};
use crate::config::{load_entries, ConfigError};
use crate::loader::{load_records, LoadError};
use crate::page::{render_page, PageError, PageOptions};
use crate::persist::{ensure_output_dir, AtomicFileWriter, PersistError};
use crate::types::{LogoRecord, RunSummary};

/// Square output sizes, one rendition per size per logo.
pub const SIZES: &[u32] = &[64, 72, 96, 128, 512, 728];

/// The size whose rendition additionally gets the unsuffixed `{id}.jpg` alias.
pub const CANONICAL_SIZE: u32 = 512;

/// Paths and knobs for one generation run.
///
/// `Default` reproduces the fixed project layout: `data.json`, `images/` and
/// `index.template.html` next to the generated `index.html`, renditions under
/// `public/`.
#[derive(Debug, Clone)]
pub struct GenerateSettings {
    pub config_path: PathBuf,
    pub images_dir: PathBuf,
    pub template_path: PathBuf,
    pub site_dir: PathBuf,
    pub public_dir: PathBuf,
    pub sizes: Vec<u32>,
    pub canonical_size: u32,
    pub page: PageOptions,
    pub debug_overlay: bool,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self::for_root(Path::new("."))
    }
}

impl GenerateSettings {
    /// The standard project layout, rooted at `root`.
    pub fn for_root(root: &Path) -> Self {
        Self {
            config_path: root.join("data.json"),
            images_dir: root.join("images"),
            template_path: root.join("index.template.html"),
            site_dir: root.to_path_buf(),
            public_dir: root.join("public"),
            sizes: SIZES.to_vec(),
            canonical_size: CANONICAL_SIZE,
            page: PageOptions::default(),
            debug_overlay: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("duplicate logo id {0:?}; renditions would overwrite each other")]
    DuplicateId(String),
    #[error("failed to read template {path:?}: {source}")]
    Template {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Page(#[from] PageError),
    #[error(transparent)]
    Compose(#[from] ComposeError),
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("failed to start tokio runtime: {0}")]
    Runtime(std::io::Error),
}

/// Run the whole pipeline: config, concurrent image loads, index page, then
/// the sequential rendition loop. Any failure aborts the run; files already
/// written stay in place.
pub fn run(settings: &GenerateSettings) -> Result<RunSummary, GenerateError> {
    let entries = load_entries(&settings.config_path)?;
    pipeline_info!("loaded {} logo entries", entries.len());

    let runtime = tokio::runtime::Runtime::new().map_err(GenerateError::Runtime)?;
    let mut records = runtime.block_on(load_records(entries, &settings.images_dir))?;

    records.sort_by(|a, b| a.id.cmp(&b.id));
    check_unique_ids(&records)?;

    let template =
        fs::read_to_string(&settings.template_path).map_err(|source| GenerateError::Template {
            path: settings.template_path.clone(),
            source,
        })?;
    let page = render_page(&template, &records, &settings.page)?;
    let site_writer = AtomicFileWriter::new(settings.site_dir.clone());
    let page_path = site_writer.write("index.html", page.as_bytes())?;
    pipeline_info!("wrote index page to {page_path:?}");

    ensure_output_dir(&settings.public_dir)?;
    let writer = AtomicFileWriter::new(settings.public_dir.clone());
    let mut files_written = 0usize;

    for &size in &settings.sizes {
        for record in &records {
            let canvas = compose_logo(&record.image, size, settings.debug_overlay)?;
            let bytes = encode_jpeg(&canvas)?;

            // The canonical alias gets the exact same encoded bytes.
            if size == settings.canonical_size {
                writer.write(&record.filename, &bytes)?;
                files_written += 1;
            }
            writer.write(&format!("{}-{}.jpg", record.id, size), &bytes)?;
            files_written += 1;
        }
        pipeline_info!("rendered {} logos at {size}x{size}", records.len());
    }

    Ok(RunSummary {
        record_count: records.len(),
        files_written,
        page_path,
    })
}

// Records must already be sorted by id.
fn check_unique_ids(records: &[LogoRecord]) -> Result<(), GenerateError> {
    for pair in records.windows(2) {
        if pair[0].id == pair[1].id {
            return Err(GenerateError::DuplicateId(pair[0].id.clone()));
        }
    }
    Ok(())
}
