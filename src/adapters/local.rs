use crate::core::{SourceDocument, SourceLoader};
use crate::utils::error::{CodeaidError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads source files from the local filesystem as UTF-8 text.
#[derive(Debug, Clone, Default)]
pub struct LocalSourceLoader;

impl LocalSourceLoader {
    pub fn new() -> Self {
        Self
    }
}

impl SourceLoader for LocalSourceLoader {
    fn load(&self, path: &Path) -> Result<SourceDocument> {
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => CodeaidError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => CodeaidError::FileUnreadable {
                path: path.to_path_buf(),
                source,
            },
        })?;

        Ok(SourceDocument {
            path: path.to_path_buf(),
            text,
        })
    }
}
