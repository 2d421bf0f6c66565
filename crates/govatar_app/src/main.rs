//! Batch entry point: renders the logo asset set for a project directory.
//!
//! Invocation: `govatar_app [project_root]`. The root defaults to the current
//! directory and must contain `data.json`, `images/` and
//! `index.template.html`.

use std::env;
use std::path::PathBuf;

use govatar_engine::GenerateSettings;
use pipeline_logging::LogDestination;

fn main() -> anyhow::Result<()> {
    pipeline_logging::initialize(LogDestination::Terminal);

    let root = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let settings = GenerateSettings::for_root(&root);

    let summary = govatar_engine::run(&settings)?;
    log::info!(
        "generated {} files for {} logos, page at {:?}",
        summary.files_written,
        summary.record_count,
        summary.page_path
    );
    Ok(())
}
