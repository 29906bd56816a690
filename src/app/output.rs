use crate::adapters::local::LocalSourceLoader;
use crate::core::assistant::{Assistant, Task};
use crate::core::catalog::PromptCatalog;
use crate::core::{Goal, ModelClient, SourceLoader};
use crate::utils::error::Result;
use std::io::Write;

pub fn usage(catalog: &PromptCatalog) -> String {
    format!(
        "Usage is:\n\n\tcodeaid --goal <goal> --filename <filename> --target <language>\n\
         \t\tWhere goal is: [{}]\n\
         \t\tand <filename> is the source file to analyze, <language> is the target language for translate.\n",
        catalog.goals()
    )
}

pub fn list_goals<W: Write>(out: &mut W) -> Result<()> {
    for goal in Goal::ALL {
        writeln!(out, "{:<12}{}", goal.as_str(), goal.description())?;
    }
    out.flush()?;
    Ok(())
}

/// Execute step: load, compose, call the model once, and write the response.
/// Nothing is written to `out` unless the whole pipeline succeeds.
pub fn execute<L, M, W>(task: &Task, loader: L, client: M, out: &mut W) -> Result<()>
where
    L: SourceLoader,
    M: ModelClient,
    W: Write,
{
    let response = Assistant::new(loader, client).run(task)?;

    out.write_all(response.text.as_bytes())?;
    if !response.text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// `execute` against the local filesystem.
pub fn execute_local<M: ModelClient, W: Write>(task: &Task, client: M, out: &mut W) -> Result<()> {
    execute(task, LocalSourceLoader::new(), client, out)
}
