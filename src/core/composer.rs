use crate::domain::model::{
    PromptTemplate, Request, SourceDocument, SOURCE_PLACEHOLDER, TARGET_PLACEHOLDER,
};
use crate::utils::error::{CodeaidError, Result};

/// Returns the trimmed target language when the template needs one, `None`
/// when it does not, and `MissingTarget` when it is needed but blank or absent.
pub fn require_target<'a>(
    template: &PromptTemplate,
    target: Option<&'a str>,
) -> Result<Option<&'a str>> {
    if !template.requires_target() {
        return Ok(None);
    }
    match target.map(str::trim) {
        Some(t) if !t.is_empty() => Ok(Some(t)),
        _ => Err(CodeaidError::MissingTarget {
            goal: template.goal.to_string(),
        }),
    }
}

/// Fills a template with the source text and, when the template asks for it,
/// the target language. Targets are ignored by templates that do not use them.
pub fn compose(
    template: &PromptTemplate,
    source: &SourceDocument,
    target: Option<&str>,
) -> Result<Request> {
    let target = require_target(template, target)?;

    // Placeholders appearing inside the source or target text stay literal.
    let (before, after) = template
        .text
        .split_once(SOURCE_PLACEHOLDER)
        .unwrap_or((template.text, ""));

    let fill = |part: &str| match target {
        Some(t) => part.replace(TARGET_PLACEHOLDER, t),
        None => part.to_string(),
    };

    let mut prompt = fill(before);
    prompt.push_str(&source.text);
    prompt.push_str(&fill(after));

    Ok(Request {
        goal: template.goal,
        prompt,
    })
}
