//! Skill bundle loading for the Pancake POS CLI.
//!
//! A skill is a Markdown instruction file for an AI agent: YAML frontmatter
//! carrying metadata (`name`, `description`, required environment variables)
//! followed by a markdown body the agent reads verbatim. This crate
//! discovers skill bundles on disk, parses their frontmatter, and reports
//! whether each skill's environment requirements are satisfied.
//!
//! The wrapper itself never interprets skill instructions; they are prose
//! for the agent, passed through like everything else in this project.

pub mod error;
pub mod loader;
pub mod parser;
pub mod types;

pub use error::{Result, SkillError};
pub use loader::{check_requirements, default_skills_dir, load_skills_from_dir};
pub use parser::parse_skill_md;
pub use types::{SkillDefinition, SkillRequirements, SkillStatus};
