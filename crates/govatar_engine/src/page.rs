use std::fmt::Write as _;

use thiserror::Error;

use crate::types::LogoRecord;

/// Marker comment the template must contain.
pub const PLACEHOLDER: &str = "<!-- placeholder -->";

#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Public base URL shown in the copyable link text.
    pub base_url: String,
    /// Sizes listed as download links, besides the canonical file.
    pub link_sizes: Vec<u32>,
    /// Thumbnail edge length in CSS pixels.
    pub thumb_size: u32,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            base_url: "https://govatar.netlify.app".to_string(),
            link_sizes: vec![64, 96, 128, 512, 728],
            thumb_size: 72,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("template does not contain the marker {PLACEHOLDER:?}")]
    MissingPlaceholder,
}

/// Render one fragment per record, in the given order, and substitute the
/// concatenation for the template's marker comment.
///
/// `name` and `id` are interpolated verbatim. The config is authored by the
/// operator running the tool, so no escaping is applied.
pub fn render_page(
    template: &str,
    records: &[LogoRecord],
    options: &PageOptions,
) -> Result<String, PageError> {
    if !template.contains(PLACEHOLDER) {
        return Err(PageError::MissingPlaceholder);
    }

    let fragments: String = records
        .iter()
        .map(|record| record_fragment(record, options))
        .collect();
    Ok(template.replacen(PLACEHOLDER, &fragments, 1))
}

fn record_fragment(record: &LogoRecord, options: &PageOptions) -> String {
    let mut links = String::new();
    link_line(&mut links, &record.filename, options);
    for size in &options.link_sizes {
        link_line(&mut links, &format!("{}-{}.jpg", record.id, size), options);
    }

    format!(
        r#"<div class="flex flex-col item">
      <div class="gap-lg flex">
        <div class="flex gap flex-col">
          <img src="/{file}" alt="" width="{thumb}" height="{thumb}" class="logo rounded">
          <img src="/{file}" alt="" width="{thumb}" height="{thumb}" class="logo">
        </div>
        <div class="flex-col flex gap">
          <h3 class="type">{name}</h3>
          <div class="flex flex-col gap">
{links}          </div>
        </div>
      </div>
    </div>
"#,
        file = record.filename,
        thumb = options.thumb_size,
        name = record.entry.name,
        links = links,
    )
}

fn link_line(out: &mut String, file: &str, options: &PageOptions) {
    let _ = writeln!(
        out,
        r#"            <a target="_blank" href="/{file}"><code class="code">{base}/{file}</code></a>"#,
        file = file,
        base = options.base_url,
    );
}
