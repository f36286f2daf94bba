//! Load orchestration around the mapping core: read spec files, resolve the
//! effective base URL, map each document, and filter the concatenated result.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SourceError;
use crate::model::RequestDescriptor;
use crate::parse::{self, server::Server};
use crate::transform::{self, MapOptions, RequestFilter};

/// Options for a [`SpecSource`].
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    /// Base URL the target API is served from. Combined with the document's
    /// first `servers` entry to form each descriptor's `base_path`.
    pub base_url: Option<String>,
    /// Populate parameter/property values from declared examples.
    pub use_example_values: bool,
    /// Post-mapping filter, applied once over the concatenated list.
    pub filter: RequestFilter,
}

/// Maps one or more specification files to request descriptors.
///
/// Files are processed independently and their results concatenated in the
/// order the paths were supplied.
#[derive(Debug, Clone, Default)]
pub struct SpecSource {
    options: SourceOptions,
}

impl SpecSource {
    pub fn new(options: SourceOptions) -> Self {
        Self { options }
    }

    pub fn load(&self, paths: &[PathBuf]) -> Result<Vec<RequestDescriptor>, SourceError> {
        let mut descriptors = Vec::new();

        for path in paths {
            let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
                path: path.display().to_string(),
                source,
            })?;
            let doc = match extension(path) {
                "json" => parse::from_json(&content)?,
                _ => parse::from_yaml(&content)?,
            };

            let base_url = resolve_base_url(self.options.base_url.as_deref(), &doc.servers);
            let options = MapOptions {
                use_example_values: self.options.use_example_values,
            };
            descriptors.extend(transform::map_document(&base_url, &doc, &options)?);
        }

        Ok(transform::filter::apply(descriptors, &self.options.filter))
    }
}

fn extension(path: &Path) -> &str {
    path.extension().and_then(|e| e.to_str()).unwrap_or("yaml")
}

/// The effective base URL for a document: an absolute first server URL wins,
/// a relative one is appended to the caller's base URL, and a document
/// without servers falls back to the caller's base URL unchanged.
pub fn resolve_base_url(base_url: Option<&str>, servers: &[Server]) -> String {
    match servers.first() {
        Some(server)
            if server.url.starts_with("http://") || server.url.starts_with("https://") =>
        {
            server.url.clone()
        }
        Some(server) => match base_url {
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                server.url.trim_start_matches('/')
            ),
            None => server.url.clone(),
        },
        None => base_url.unwrap_or_default().to_string(),
    }
}
