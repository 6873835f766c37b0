use serde::{Deserialize, Serialize};

/// Self-assessed level for a skill. Also used as the difficulty of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
}

impl Proficiency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "beginner",
            Proficiency::Intermediate => "intermediate",
            Proficiency::Advanced => "advanced",
        }
    }
}

/// A skill as it appears in a career path or in the user's own list.
///
/// Identity is the `id` alone: two skills with the same id are the same skill,
/// whatever their display name, category or proficiency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<Proficiency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
}

impl Skill {
    pub fn new(id: &str, name: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            proficiency: None,
            is_required: None,
        }
    }

    /// Builds a user-entered skill, deriving the id from the display name.
    pub fn from_name(name: &str, category: &str, proficiency: Option<Proficiency>) -> Self {
        Self {
            id: skill_id_from_name(name),
            name: name.trim().to_string(),
            category: category.to_string(),
            proficiency,
            is_required: None,
        }
    }

    pub fn with_proficiency(mut self, proficiency: Proficiency) -> Self {
        self.proficiency = Some(proficiency);
        self
    }
}

impl PartialEq for Skill {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Skill {}

/// Lowercases the name and collapses every whitespace run into a single `-`.
pub fn skill_id_from_name(name: &str) -> String {
    name.split_whitespace()
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// True when the id only contains lowercase ASCII letters, digits and the
/// separators the catalogs use (`-`, `.`, `+`, `#`, `/`).
pub fn is_canonical_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "-.+#/".contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_name_lowercases_and_hyphenates() {
        assert_eq!(skill_id_from_name("Machine Learning"), "machine-learning");
        assert_eq!(skill_id_from_name("  Node.js  "), "node.js");
        assert_eq!(skill_id_from_name("Git\t Version   Control"), "git-version-control");
    }

    #[test]
    fn test_from_name_trims_display_name() {
        let skill = Skill::from_name("  React ", "Frontend", Some(Proficiency::Advanced));
        assert_eq!(skill.id, "react");
        assert_eq!(skill.name, "React");
        assert_eq!(skill.proficiency, Some(Proficiency::Advanced));
    }

    #[test]
    fn test_identity_is_by_id_only() {
        let a = Skill::new("sql", "SQL", "Database");
        let b = Skill::new("sql", "Structured Query Language", "Backend")
            .with_proficiency(Proficiency::Beginner);
        assert_eq!(a, b);
        assert_ne!(a, Skill::new("nosql", "SQL", "Database"));
    }

    #[test]
    fn test_canonical_id_check() {
        assert!(is_canonical_id("git"));
        assert!(is_canonical_id("node.js"));
        assert!(is_canonical_id("machine-learning"));
        assert!(!is_canonical_id("Machine Learning"));
        assert!(!is_canonical_id(""));
    }

    #[test]
    fn test_optional_fields_default_when_missing() {
        let skill: Skill =
            serde_json::from_str(r#"{"id":"css","name":"CSS","category":"Frontend"}"#).unwrap();
        assert_eq!(skill.proficiency, None);
        assert_eq!(skill.is_required, None);
    }
}
