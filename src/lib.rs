pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{local::LocalSourceLoader, openai::OpenAiClient};
pub use config::{FileConfig, ModelSettings};
pub use crate::core::{
    assistant::{Assistant, Task},
    catalog::PromptCatalog,
    composer::compose,
};
pub use domain::model::{Goal, PromptTemplate, Request, Response, SourceDocument};
pub use domain::ports::{ModelClient, SourceLoader};
pub use utils::error::{CodeaidError, Result};
