use crate::domain::model::{Goal, PromptTemplate};
use crate::utils::error::Result;
use std::collections::HashMap;

const SUMMARIZE: &str = "Act as a programming assistant. After examining the provided source code, \
identify the language in which it is written, then give a concise, one-paragraph summary of its \
functionality. Include any notable or interesting elements a programmer would find useful or \
appreciate, but keep your explanation streamlined and to the point.\n\n{source}";

const DEFECTS: &str = "Act as an expert software debugger. After examining the provided source \
code, briefly summarize any possible defects you find, focusing strictly on potential errors \
without including unrelated discussion.\n\n{source}";

const SECURITY: &str = "Act as a software security expert. Examine the provided source code, \
identify any potential vulnerabilities, and offer concise recommendations to improve its \
security.\n\n{source}";

const OPTIMIZE: &str = "Act as a software optimization expert. Evaluate the provided source code \
and recommend performance improvements. Include any best practices, plus language-specific \
techniques that can significantly enhance efficiency.\n\n{source}";

const REFACTOR: &str = "Act as a software refactoring expert. Analyze the provided source code \
and propose improvements to maintainability, readability, modularization, naming, and \
decomposition. Offer reorganizations, style enhancements, and language-specific techniques \
(e.g., creating classes) that clarify and structure the code more effectively.\n\n{source}";

const DOCUMENT: &str = "Act as a software documentation expert. After examining the provided \
source code, generate comprehensive documentation, inline comments, or markdown, summarizing \
the entire file and each module in a clear, concise manner.\n\n{source}";

const COMPLEXITY: &str = "Act as an expert software engineer dedicated to reducing complexity. \
Review the provided source code, evaluate the complexity of its functions and modules, and \
highlight any excessively tangled or overly complex areas that warrant refactoring. Focus on \
modularization, maintainability, and readability enhancements.\n\n{source}";

const NAMING: &str = "Act as an expert software engineer prioritizing readability. Examine the \
source code's variable and function naming, highlighting any non-descriptive names and \
recommending more descriptive alternatives. List only necessary changes, keeping the response \
concise.\n\n{source}";

const TRANSLATE: &str = "Act as a software translation expert. Review the provided source code \
and rewrite it in the {target} language, preserving the original functionality and \
logic.\n\n{source}";

const CLEANUP: &str = "Your role is a software cleanup specialist. Your goal is to take the \
software provided below and convert it into the conventional style of its language (for \
example PEP 8 for Python). Maintain all functionality, just refine the style.\n\n{source}";

const TODO: &str = "You are an agile story writing expert. Your goal is to find each TODO in the \
source code and write an agile story for it. Please keep the stories focused on the task at \
hand, using the TODO text and surrounding code as a guide.\n\n{source}";

const UNIT_TESTS: &str = "You are a test development expert. Your goal is to analyze the source \
code and develop unit tests, using the standard testing framework of its language, to validate \
the code for quality improvement for future changes.\n\n{source}";

/// Fixed goal-to-template mapping, built once and never mutated.
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    templates: HashMap<Goal, PromptTemplate>,
}

impl PromptCatalog {
    pub fn new() -> Self {
        let templates = Goal::ALL
            .into_iter()
            .map(|goal| {
                let text = match goal {
                    Goal::Summarize => SUMMARIZE,
                    Goal::Defects => DEFECTS,
                    Goal::Security => SECURITY,
                    Goal::Optimize => OPTIMIZE,
                    Goal::Refactor => REFACTOR,
                    Goal::Document => DOCUMENT,
                    Goal::Complexity => COMPLEXITY,
                    Goal::Naming => NAMING,
                    Goal::Translate => TRANSLATE,
                    Goal::Cleanup => CLEANUP,
                    Goal::Todo => TODO,
                    Goal::Ut => UNIT_TESTS,
                };
                (goal, PromptTemplate { goal, text })
            })
            .collect();

        Self { templates }
    }

    pub fn template(&self, goal: Goal) -> &PromptTemplate {
        // every Goal variant is inserted by new()
        &self.templates[&goal]
    }

    /// Looks up a goal by its name as typed on the command line.
    pub fn resolve(&self, goal: &str) -> Result<&PromptTemplate> {
        let goal: Goal = goal.parse()?;
        Ok(self.template(goal))
    }

    /// Comma-separated goal names, in listing order.
    pub fn goals(&self) -> String {
        Goal::ALL
            .iter()
            .map(Goal::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::new()
    }
}
