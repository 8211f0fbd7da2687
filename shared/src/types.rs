//! Core shared types for the interview relay

use serde::{Deserialize, Serialize};
use std::fmt;

/// Speaker role of a single chat turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatRole::System => write!(f, "system"),
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// One message in a dialogue, immutable once created
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// The currently loaded interview question
///
/// Replaced wholesale on every successful problem load; the description keeps
/// whatever markup the upstream API returned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemContext {
    pub title: String,
    pub description: String,
    pub difficulty: String,
}

impl ProblemContext {
    pub fn new(title: impl Into<String>, description: impl Into<String>, difficulty: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            difficulty: difficulty.into(),
        }
    }

    /// Render the context string fed to the model
    pub fn context_block(&self) -> String {
        format!("{} (Difficulty: {})\n\n{}", self.title, self.difficulty, self.description)
    }
}

/// Programming language the candidate interviews in
///
/// Unrecognized names are carried through verbatim rather than rejected, so
/// the `/set-language` endpoint never fails on an unknown value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Java,
    Go,
    Rust,
    Cpp,
    CSharp,
    Other(String),
}

impl Language {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "python" => Language::Python,
            "javascript" | "js" => Language::JavaScript,
            "typescript" | "ts" => Language::TypeScript,
            "java" => Language::Java,
            "go" | "golang" => Language::Go,
            "rust" => Language::Rust,
            "c++" | "cpp" => Language::Cpp,
            "c#" | "csharp" => Language::CSharp,
            _ => Language::Other(name.trim().to_string()),
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Java => "Java",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Other(name) => name,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
