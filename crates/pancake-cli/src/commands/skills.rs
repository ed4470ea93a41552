//! The `skills` subcommands: enumerate and read installed skill bundles.

use anyhow::Context;
use pancake_skills::{SkillError, check_requirements, default_skills_dir, load_skills_from_dir};

use super::emit_body;

/// List installed skills with their requirement status.
pub fn list(json: bool) -> anyhow::Result<()> {
    let dir = default_skills_dir();
    let skills = load_skills_from_dir(&dir)
        .with_context(|| format!("failed to load skills from {}", dir.display()))?;

    if json {
        emit_body(&serde_json::to_string_pretty(&skills)?);
        return Ok(());
    }

    for skill in &skills {
        let status = check_requirements(skill, |name| std::env::var(name).ok());
        println!("{:<16} {:<24} {}", skill.name, status.to_string(), skill.description);
    }
    Ok(())
}

/// Print a skill's markdown instructions.
pub fn show(name: &str) -> anyhow::Result<()> {
    let dir = default_skills_dir();
    let skills = load_skills_from_dir(&dir)?;

    let skill = skills
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| SkillError::NotFound(name.to_owned()))?;

    emit_body(&skill.instructions);
    Ok(())
}
