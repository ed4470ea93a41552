//! Skill discovery on the local filesystem.
//!
//! Skills live in a directory where each subdirectory contains a `SKILL.md`
//! file (plus any supporting material the agent may read). Bare `*.md`
//! files at the top level are accepted too. Files that fail to parse are
//! skipped with a warning so one broken bundle cannot hide the rest.

use std::path::{Path, PathBuf};

use crate::error::{Result, SkillError};
use crate::parser::parse_skill_md;
use crate::types::{SkillDefinition, SkillStatus};

/// Load all skills from the given directory, sorted by name.
///
/// A nonexistent directory yields an empty list rather than an error.
pub fn load_skills_from_dir(dir: &Path) -> Result<Vec<SkillDefinition>> {
    if !dir.exists() {
        tracing::debug!(path = %dir.display(), "skills directory does not exist");
        return Ok(Vec::new());
    }

    let mut skills = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        let skill_md = if path.is_dir() {
            let candidate = path.join("SKILL.md");
            if !candidate.exists() {
                tracing::trace!(path = %path.display(), "no SKILL.md, skipping");
                continue;
            }
            candidate
        } else if path.extension().is_some_and(|e| e == "md") {
            path
        } else {
            continue;
        };

        match load_skill_from_file(&skill_md) {
            Ok(skill) => {
                tracing::debug!(name = %skill.name, "loaded skill");
                skills.push(skill);
            }
            Err(e) => {
                tracing::warn!(path = %skill_md.display(), error = %e, "failed to load skill");
            }
        }
    }

    skills.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::info!(count = skills.len(), dir = %dir.display(), "skills loaded");
    Ok(skills)
}

/// Load a single skill from a markdown file path.
pub fn load_skill_from_file(path: &Path) -> Result<SkillDefinition> {
    if !path.exists() {
        return Err(SkillError::NotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_skill_md(&content, path)
}

/// Check a skill's declared environment requirements.
///
/// The lookup indirection keeps the check testable; production callers pass
/// `|name| std::env::var(name).ok()`.
pub fn check_requirements<F>(skill: &SkillDefinition, lookup: F) -> SkillStatus
where
    F: Fn(&str) -> Option<String>,
{
    let missing: Vec<String> = skill
        .requires
        .env
        .iter()
        .filter(|var| lookup(var).filter(|v| !v.is_empty()).is_none())
        .cloned()
        .collect();

    if missing.is_empty() {
        SkillStatus::Ready
    } else {
        SkillStatus::MissingEnv(missing)
    }
}

/// Return the skills directory.
///
/// `$POS_SKILLS_DIR` when set, otherwise `./skills`.
pub fn default_skills_dir() -> PathBuf {
    match std::env::var("POS_SKILLS_DIR") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("skills"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_nonexistent_dir() {
        let skills = load_skills_from_dir(Path::new("/nonexistent/path")).unwrap();
        assert!(skills.is_empty());
    }

    #[test]
    fn load_bundles_and_bare_files_sorted() {
        let tmp = tempfile::tempdir().unwrap();

        let bundle = tmp.path().join("suppliers");
        std::fs::create_dir(&bundle).unwrap();
        std::fs::write(
            bundle.join("SKILL.md"),
            "---\nname: suppliers\ndescription: Supplier management.\n---\nInstructions.",
        )
        .unwrap();

        std::fs::write(
            tmp.path().join("employees.md"),
            "---\nname: employees\ndescription: Employee management.\n---\nInstructions.",
        )
        .unwrap();

        // Not a skill, must be ignored.
        std::fs::write(tmp.path().join("notes.txt"), "scratch").unwrap();

        let skills = load_skills_from_dir(tmp.path()).unwrap();
        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["employees", "suppliers"]);
    }

    #[test]
    fn broken_skill_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("broken.md"), "no frontmatter here").unwrap();
        std::fs::write(
            tmp.path().join("good.md"),
            "---\nname: good\n---\nInstructions.",
        )
        .unwrap();

        let skills = load_skills_from_dir(tmp.path()).unwrap();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].name, "good");
    }

    #[test]
    fn requirements_all_present() {
        let skill = parse_skill_md(
            "---\nname: x\nrequires:\n  env:\n    - POS_API_KEY\n---\nbody",
            Path::new("x.md"),
        )
        .unwrap();

        let status = check_requirements(&skill, |name| {
            (name == "POS_API_KEY").then(|| "abc".to_owned())
        });
        assert_eq!(status, SkillStatus::Ready);
    }

    #[test]
    fn requirements_report_missing_vars() {
        let skill = parse_skill_md(
            "---\nname: x\nrequires:\n  env:\n    - POS_API_KEY\n    - SHOP_ID\n---\nbody",
            Path::new("x.md"),
        )
        .unwrap();

        let status = check_requirements(&skill, |_| None);
        assert_eq!(
            status,
            SkillStatus::MissingEnv(vec!["POS_API_KEY".into(), "SHOP_ID".into()])
        );
    }

    #[test]
    fn empty_env_value_counts_as_missing() {
        let skill = parse_skill_md(
            "---\nname: x\nrequires:\n  env:\n    - SHOP_ID\n---\nbody",
            Path::new("x.md"),
        )
        .unwrap();

        let status = check_requirements(&skill, |_| Some(String::new()));
        assert_eq!(status, SkillStatus::MissingEnv(vec!["SHOP_ID".into()]));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let result = load_skill_from_file(Path::new("/nonexistent/SKILL.md"));
        assert!(matches!(result, Err(SkillError::NotFound(_))));
    }
}
