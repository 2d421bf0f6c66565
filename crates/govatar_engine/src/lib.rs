//! Govatar engine: logo asset pipeline and file output.
mod compose;
mod config;
mod identity;
mod loader;
mod page;
mod persist;
mod pipeline;
mod source;
mod types;

pub use compose::{
    compose_logo, encode_jpeg, placement, ComposeError, Placement, PAD_RATIO,
};
pub use config::{load_entries, ConfigError};
pub use identity::{logo_filename, logo_id, IdentityError};
pub use loader::{load_records, LoadError};
pub use page::{render_page, PageError, PageOptions, PLACEHOLDER};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use pipeline::{run, GenerateError, GenerateSettings, CANONICAL_SIZE, SIZES};
pub use source::{source_filename, SourceError};
pub use types::{LogoEntry, LogoRecord, RunSummary};
