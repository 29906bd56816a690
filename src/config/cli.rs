use crate::core::assistant::Task;
use crate::core::catalog::PromptCatalog;
use crate::core::composer::require_target;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_required_field, validate_url, Validate,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "codeaid")]
#[command(about = "Analyze a source file with a language model using a given goal")]
pub struct CliConfig {
    #[arg(long, help = "Analysis goal (--list-goals to review)")]
    pub goal: Option<String>,

    #[arg(long, alias = "file", help = "The source filename for analysis")]
    pub filename: Option<PathBuf>,

    #[arg(long, help = "The target language for translate")]
    pub target: Option<String>,

    #[arg(long, help = "Model identifier [default: gpt-4o]")]
    pub model: Option<String>,

    #[arg(long, help = "Base URL of the chat-completion API [default: https://api.openai.com/v1]")]
    pub api_base: Option<String>,

    #[arg(long, help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "List the available goals and exit")]
    pub list_goals: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// The validated task described by the flags.
    pub fn task(&self) -> Result<Task> {
        self.validate()?;
        let goal = validate_required_field("goal", &self.goal)?;
        let filename = validate_required_field("filename", &self.filename)?;

        Ok(Task {
            goal: goal.clone(),
            filename: filename.clone(),
            target: self.target.clone(),
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let goal = validate_required_field("goal", &self.goal)?;
        let filename = validate_required_field("filename", &self.filename)?;

        let catalog = PromptCatalog::new();
        let template = catalog.resolve(goal)?;
        require_target(template, self.target.as_deref())?;

        validate_path("filename", &filename.to_string_lossy())?;

        if let Some(model) = &self.model {
            validate_non_empty_string("model", model)?;
        }
        if let Some(api_base) = &self.api_base {
            validate_url("api_base", api_base)?;
        }

        Ok(())
    }
}
