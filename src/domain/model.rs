use crate::utils::error::CodeaidError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const SOURCE_PLACEHOLDER: &str = "{source}";
pub const TARGET_PLACEHOLDER: &str = "{target}";

/// The kind of analysis requested for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    Summarize,
    Defects,
    Security,
    Optimize,
    Refactor,
    Document,
    Complexity,
    Naming,
    Translate,
    Cleanup,
    Todo,
    Ut,
}

impl Goal {
    /// Every goal, in the order they are listed to users.
    pub const ALL: [Goal; 12] = [
        Goal::Summarize,
        Goal::Defects,
        Goal::Security,
        Goal::Optimize,
        Goal::Refactor,
        Goal::Document,
        Goal::Complexity,
        Goal::Naming,
        Goal::Translate,
        Goal::Cleanup,
        Goal::Todo,
        Goal::Ut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Summarize => "summarize",
            Goal::Defects => "defects",
            Goal::Security => "security",
            Goal::Optimize => "optimize",
            Goal::Refactor => "refactor",
            Goal::Document => "document",
            Goal::Complexity => "complexity",
            Goal::Naming => "naming",
            Goal::Translate => "translate",
            Goal::Cleanup => "cleanup",
            Goal::Todo => "todo",
            Goal::Ut => "ut",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Goal::Summarize => "identify the language and summarize what the code does",
            Goal::Defects => "list possible defects",
            Goal::Security => "find vulnerabilities and suggest fixes",
            Goal::Optimize => "recommend performance improvements",
            Goal::Refactor => "propose maintainability and structure improvements",
            Goal::Document => "generate documentation and inline comments",
            Goal::Complexity => "highlight overly complex functions and modules",
            Goal::Naming => "suggest more descriptive names",
            Goal::Translate => "rewrite the code in another language (needs --target)",
            Goal::Cleanup => "reformat into the language's conventional style",
            Goal::Todo => "write an agile story for each TODO",
            Goal::Ut => "develop unit tests",
        }
    }

    pub fn requires_target(&self) -> bool {
        matches!(self, Goal::Translate)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = CodeaidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Goal::ALL
            .into_iter()
            .find(|goal| goal.as_str() == s)
            .ok_or_else(|| CodeaidError::UnknownGoal {
                goal: s.to_string(),
            })
    }
}

/// Static instruction text for one goal, with placeholders for the source
/// text and, for translation, the target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    pub goal: Goal,
    pub text: &'static str,
}

impl PromptTemplate {
    pub fn requires_target(&self) -> bool {
        self.text.contains(TARGET_PLACEHOLDER)
    }
}

#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub text: String,
}

impl SourceDocument {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The composed prompt sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub goal: Goal,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub text: String,
}
