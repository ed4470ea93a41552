//! SKILL.md parser.
//!
//! A skill file consists of YAML frontmatter delimited by `---` lines,
//! followed by a markdown body:
//!
//! ```text
//! ---
//! name: suppliers
//! description: Manage suppliers and purchase orders.
//! requires:
//!   env:
//!     - POS_API_KEY
//!     - SHOP_ID
//! ---
//!
//! # Suppliers
//!
//! Instructions for the agent go here...
//! ```
//!
//! Real skill files only use flat `key: value` pairs and string lists, so
//! the parser handles exactly that subset rather than pulling in a full
//! YAML dependency.

use std::path::Path;

use crate::error::{Result, SkillError};
use crate::types::{SkillDefinition, SkillRequirements};

/// Split a skill file into frontmatter and markdown body.
fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let content = content.trim_start();
    let rest = content.strip_prefix("---")?;
    let end = rest.find("\n---")?;
    let yaml = rest[..end].trim();
    let body = rest[end + 4..].trim_start_matches(['\n', '\r']);
    Some((yaml, body))
}

/// Frontmatter fields as they accumulate during the line scan.
#[derive(Default)]
struct Frontmatter {
    name: Option<String>,
    description: Option<String>,
    version: Option<String>,
    tags: Vec<String>,
    env: Vec<String>,
}

/// Which list the current `- item` lines belong to.
enum ListTarget {
    None,
    Tags,
    Env,
}

fn strip_quotes(s: &str) -> &str {
    let s = s.trim();
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"'))
            || (s.starts_with('\'') && s.ends_with('\'')))
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

fn parse_frontmatter(yaml: &str) -> Frontmatter {
    let mut fm = Frontmatter::default();
    let mut target = ListTarget::None;
    let mut in_requires = false;

    for line in yaml.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(item) = trimmed.strip_prefix("- ") {
            let value = strip_quotes(item).to_owned();
            match target {
                ListTarget::Tags => fm.tags.push(value),
                ListTarget::Env => fm.env.push(value),
                ListTarget::None => {}
            }
            continue;
        }

        let indented = line.starts_with(' ') || line.starts_with('\t');
        if !indented {
            in_requires = false;
        }

        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = strip_quotes(value);

        match (key, in_requires) {
            ("requires", _) => {
                in_requires = true;
                target = ListTarget::None;
            }
            ("env", true) => target = ListTarget::Env,
            ("tags", false) => target = ListTarget::Tags,
            ("name", false) if !value.is_empty() => {
                fm.name = Some(value.to_owned());
                target = ListTarget::None;
            }
            ("description", false) if !value.is_empty() => {
                fm.description = Some(value.to_owned());
                target = ListTarget::None;
            }
            ("version", false) if !value.is_empty() => {
                fm.version = Some(value.to_owned());
                target = ListTarget::None;
            }
            _ => target = ListTarget::None,
        }
    }

    fm
}

/// Parse a skill file from its text content.
pub fn parse_skill_md(content: &str, source_path: &Path) -> Result<SkillDefinition> {
    let (yaml, body) = split_frontmatter(content).ok_or_else(|| SkillError::InvalidFormat {
        path: source_path.to_path_buf(),
        reason: "missing YAML frontmatter (must start with ---)".into(),
    })?;

    let fm = parse_frontmatter(yaml);

    let name = fm.name.ok_or_else(|| SkillError::MissingField {
        path: source_path.to_path_buf(),
        field: "name".into(),
    })?;

    let description = fm.description.unwrap_or_else(|| format!("Skill: {name}"));

    Ok(SkillDefinition {
        name,
        description,
        version: fm.version,
        tags: fm.tags,
        requires: SkillRequirements { env: fm.env },
        instructions: body.to_owned(),
        path: source_path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_skill() {
        let content = r#"---
name: suppliers
description: Manage suppliers and purchase orders via the Pancake POS API.
version: 1.0.0
tags:
  - pos
  - inventory
requires:
  env:
    - POS_API_KEY
    - SHOP_ID
---

# Suppliers

List suppliers with `pancake suppliers list`.
"#;

        let skill = parse_skill_md(content, Path::new("skills/suppliers/SKILL.md")).unwrap();
        assert_eq!(skill.name, "suppliers");
        assert_eq!(
            skill.description,
            "Manage suppliers and purchase orders via the Pancake POS API."
        );
        assert_eq!(skill.version, Some("1.0.0".into()));
        assert_eq!(skill.tags, vec!["pos", "inventory"]);
        assert_eq!(skill.requires.env, vec!["POS_API_KEY", "SHOP_ID"]);
        assert!(skill.instructions.contains("# Suppliers"));
    }

    #[test]
    fn minimal_skill_defaults_description() {
        let skill =
            parse_skill_md("---\nname: employees\n---\nbody", Path::new("SKILL.md")).unwrap();
        assert_eq!(skill.name, "employees");
        assert_eq!(skill.description, "Skill: employees");
        assert!(skill.requires.env.is_empty());
    }

    #[test]
    fn quoted_values_are_unquoted() {
        let content = "---\nname: \"quoted\"\ndescription: 'also quoted'\n---\nbody";
        let skill = parse_skill_md(content, Path::new("SKILL.md")).unwrap();
        assert_eq!(skill.name, "quoted");
        assert_eq!(skill.description, "also quoted");
    }

    #[test]
    fn missing_name_fails() {
        let result = parse_skill_md("---\ndescription: no name\n---\nbody", Path::new("x.md"));
        assert!(matches!(
            result,
            Err(SkillError::MissingField { ref field, .. }) if field == "name"
        ));
    }

    #[test]
    fn missing_frontmatter_fails() {
        let result = parse_skill_md("# Just markdown\n", Path::new("x.md"));
        assert!(matches!(result, Err(SkillError::InvalidFormat { .. })));
    }

    #[test]
    fn env_list_outside_requires_is_ignored() {
        let content = "---\nname: x\ntags:\n  - keep\nenv:\n  - IGNORED\n---\nbody";
        let skill = parse_skill_md(content, Path::new("x.md")).unwrap();
        assert_eq!(skill.tags, vec!["keep"]);
        assert!(skill.requires.env.is_empty());
    }

    #[test]
    fn split_frontmatter_works() {
        let (yaml, body) = split_frontmatter("---\nfoo: bar\n---\nbody here").unwrap();
        assert_eq!(yaml, "foo: bar");
        assert_eq!(body, "body here");
    }

    #[test]
    fn description_after_requires_block() {
        let content =
            "---\nname: x\nrequires:\n  env:\n    - A\ndescription: after block\n---\nbody";
        let skill = parse_skill_md(content, Path::new("x.md")).unwrap();
        assert_eq!(skill.description, "after block");
        assert_eq!(skill.requires.env, vec!["A"]);
    }
}
