use crate::core::catalog::PromptCatalog;
use crate::core::composer::{compose, require_target};
use crate::core::{ModelClient, Response, SourceLoader};
use crate::utils::error::Result;
use std::path::PathBuf;

/// One invocation's worth of input.
#[derive(Debug, Clone)]
pub struct Task {
    pub goal: String,
    pub filename: PathBuf,
    pub target: Option<String>,
}

/// Runs the linear load → compose → call pipeline for a single task.
pub struct Assistant<L: SourceLoader, M: ModelClient> {
    catalog: PromptCatalog,
    loader: L,
    client: M,
}

impl<L: SourceLoader, M: ModelClient> Assistant<L, M> {
    pub fn new(loader: L, client: M) -> Self {
        Self {
            catalog: PromptCatalog::new(),
            loader,
            client,
        }
    }

    pub fn run(&self, task: &Task) -> Result<Response> {
        // Goal and target are checked before the file is touched.
        let template = self.catalog.resolve(&task.goal)?;
        require_target(template, task.target.as_deref())?;

        tracing::debug!("Loading source file: {}", task.filename.display());
        let source = self.loader.load(&task.filename)?;
        if source.is_empty() {
            tracing::warn!(
                "Source file {} is empty; sending the prompt anyway",
                task.filename.display()
            );
        }

        let request = compose(template, &source, task.target.as_deref())?;
        tracing::debug!(
            "Composed {} prompt ({} bytes)",
            request.goal,
            request.prompt.len()
        );

        let response = self.client.complete(&request)?;
        tracing::info!("Received {} bytes from model", response.text.len());

        Ok(response)
    }
}
