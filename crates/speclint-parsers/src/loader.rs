use std::path::{Path, PathBuf};

use speclint_core::Document;

/// Source text flavour of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension. Anything that is not `.json`
    /// is read as YAML, which also accepts plain JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read document {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid YAML in {origin}: {source}")]
    Yaml {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Parse document text. `origin` names the source in error messages.
pub fn parse_document(
    text: &str,
    format: DocumentFormat,
    origin: &str,
) -> Result<Document, LoadError> {
    match format {
        DocumentFormat::Json => serde_json::from_str(text).map_err(|source| LoadError::Json {
            origin: origin.to_string(),
            source,
        }),
        DocumentFormat::Yaml => serde_yaml::from_str(text).map_err(|source| LoadError::Yaml {
            origin: origin.to_string(),
            source,
        }),
    }
}

/// Read and parse a document from disk.
pub fn load_document(path: &Path) -> Result<Document, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let format = DocumentFormat::from_path(path);
    let document = parse_document(&text, format, &path.display().to_string())?;
    tracing::debug!(
        path = %path.display(),
        ?format,
        paths = document.paths.len(),
        definitions = document.definitions.len(),
        "loaded document"
    );
    Ok(document)
}
