pub mod assistant;
pub mod catalog;
pub mod composer;

pub use crate::domain::model::{Goal, PromptTemplate, Request, Response, SourceDocument};
pub use crate::domain::ports::{ModelClient, SourceLoader};
pub use crate::utils::error::Result;
