use crate::app::output::{execute_local, list_goals, usage};
use crate::config::{CliConfig, FileConfig, ModelSettings};
use crate::core::catalog::PromptCatalog;
use crate::core::ModelClient;
use crate::utils::error::{CodeaidError, Result};
use crate::utils::validation::Validate;
use std::io::Write;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Runs one invocation end to end and returns the process exit status.
///
/// `env` supplies environment variables and `connect` builds the model client
/// from the resolved settings. The response goes to `out`; diagnostics go to
/// `err`.
pub fn run<E, C, M, W, V>(config: &CliConfig, env: E, connect: C, out: &mut W, err: &mut V) -> i32
where
    E: Fn(&str) -> Option<String>,
    C: FnOnce(ModelSettings) -> Result<M>,
    M: ModelClient,
    W: Write,
    V: Write,
{
    let result = if config.list_goals {
        list_goals(out)
    } else {
        run_task(config, env, connect, out)
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report(&e, err);
            EXIT_FAILURE
        }
    }
}

fn run_task<E, C, M, W>(config: &CliConfig, env: E, connect: C, out: &mut W) -> Result<()>
where
    E: Fn(&str) -> Option<String>,
    C: FnOnce(ModelSettings) -> Result<M>,
    M: ModelClient,
    W: Write,
{
    let task = config.task()?;

    let file = match &config.config {
        Some(path) => {
            tracing::info!("Loading settings from: {}", path.display());
            let file = FileConfig::from_file(path)?;
            file.validate()?;
            Some(file)
        }
        None => None,
    };

    let settings = ModelSettings::resolve(
        config.model.as_deref(),
        config.api_base.as_deref(),
        file.as_ref(),
        env,
    )?;
    tracing::debug!("Model settings: {:?}", settings);

    let client = connect(settings)?;
    execute_local(&task, client, out)
}

fn report<V: Write>(e: &CodeaidError, err: &mut V) {
    tracing::debug!("Invocation failed: {:?}", e);

    // stderr write failures are ignored
    let _ = writeln!(err, "❌ {}", e.user_friendly_message());
    if e.is_usage_error() {
        let _ = write!(err, "\n{}", usage(&PromptCatalog::new()));
    } else {
        let _ = writeln!(err, "💡 {}", e.recovery_suggestion());
    }
    let _ = err.flush();
}
