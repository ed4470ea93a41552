//! Skill type definitions.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// A parsed skill bundle: frontmatter metadata plus markdown instructions.
#[derive(Debug, Clone, Serialize)]
pub struct SkillDefinition {
    /// Unique skill slug (e.g. `suppliers`, `employees`).
    pub name: String,

    /// Short human-readable description.
    pub description: String,

    /// Optional semantic version string.
    pub version: Option<String>,

    /// Tags for categorization.
    pub tags: Vec<String>,

    /// Runtime requirements declared in the frontmatter.
    pub requires: SkillRequirements,

    /// The raw markdown body, instructions for the agent.
    #[serde(skip)]
    pub instructions: String,

    /// Where this skill was loaded from.
    #[serde(skip)]
    pub path: PathBuf,
}

/// Runtime requirements declared by a skill.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SkillRequirements {
    /// Environment variables the skill expects to be set.
    pub env: Vec<String>,
}

/// Result of checking a skill's requirements against the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillStatus {
    /// All declared requirements are satisfied.
    Ready,

    /// One or more required environment variables are unset.
    MissingEnv(Vec<String>),
}

impl fmt::Display for SkillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => f.write_str("ready"),
            Self::MissingEnv(vars) => write!(f, "missing env: {}", vars.join(", ")),
        }
    }
}
