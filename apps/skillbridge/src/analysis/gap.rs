//! Gap Analyzer — which of a career's skills the user is missing, how urgent
//! each one is, how long it takes to learn and where to learn it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::{CareerPath, Proficiency, Resource, ResourceType, Skill};

pub const DEFAULT_LEARNING_TIME: &str = "4-6 weeks";

const SEARCH_URL: &str = "https://www.google.com/search?q=";

/// Urgency tier of a gap. Ordering is `High < Medium < Low`, so sorting
/// ascending puts the most urgent gaps first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Required by the career.
    High,
    /// Nice to have.
    Medium,
    /// Stretch goal.
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: Skill,
    pub priority: Priority,
    pub estimated_learning_time: String,
    pub resources: Vec<Resource>,
}

/// Computes the ordered gap list for `career` against the user's skills.
///
/// - no career → empty list
/// - missing required skills → `High`, nice-to-have → `Medium`, stretch → `Low`
/// - a skill id is emitted at most once per list; a skill listed as both
///   required and nice-to-have yields one `High` and one `Medium` gap
/// - output is stably sorted by priority, so ties keep catalog order
pub fn compute_gaps(
    career: Option<&CareerPath>,
    user_skills: &[Skill],
    catalog: &Catalog,
) -> Vec<SkillGap> {
    let Some(career) = career else {
        return vec![];
    };

    let user_skill_ids: HashSet<&str> = user_skills.iter().map(|s| s.id.as_str()).collect();
    let mut gaps = Vec::new();

    let tiers = [
        (&career.required_skills, Priority::High),
        (&career.nice_to_have_skills, Priority::Medium),
        (&career.stretch_skills, Priority::Low),
    ];

    for (skills, priority) in tiers {
        let mut emitted: HashSet<&str> = HashSet::new();
        for skill in skills {
            if user_skill_ids.contains(skill.id.as_str()) || !emitted.insert(skill.id.as_str()) {
                continue;
            }
            gaps.push(SkillGap {
                skill: skill.clone(),
                priority,
                estimated_learning_time: estimated_learning_time(&skill.name, catalog),
                resources: resources_for(skill, catalog),
            });
        }
    }

    gaps.sort_by_key(|g| g.priority);
    gaps
}

/// Exact-name lookup in the learning-time table, with a fixed fallback.
pub fn estimated_learning_time(skill_name: &str, catalog: &Catalog) -> String {
    catalog
        .learning_time(skill_name)
        .unwrap_or(DEFAULT_LEARNING_TIME)
        .to_string()
}

/// Curated resources for the skill id, or a synthesized generic pair.
pub fn resources_for(skill: &Skill, catalog: &Catalog) -> Vec<Resource> {
    match catalog.curated_resources(&skill.id) {
        Some(curated) => curated.to_vec(),
        None => default_resources(skill),
    }
}

/// Two free fallback resources pointing at search-engine queries for the skill.
pub fn default_resources(skill: &Skill) -> Vec<Resource> {
    let query = search_query(&skill.name);
    vec![
        Resource {
            id: format!("{}-generic-1", skill.id),
            title: format!("Learn {}", skill.name),
            resource_type: ResourceType::Course,
            provider: "Multiple Providers".to_string(),
            url: format!("{SEARCH_URL}learn+{query}"),
            duration: "4-6 weeks".to_string(),
            difficulty: Proficiency::Beginner,
            rating: 4.5,
            is_free: true,
        },
        Resource {
            id: format!("{}-generic-2", skill.id),
            title: format!("{} Documentation", skill.name),
            resource_type: ResourceType::Documentation,
            provider: "Official Docs".to_string(),
            url: format!("{SEARCH_URL}{query}+documentation"),
            duration: "2-3 weeks".to_string(),
            difficulty: Proficiency::Intermediate,
            rating: 4.3,
            is_free: true,
        },
    ]
}

/// Replaces each whitespace run with `+`. Leading and trailing runs also
/// become a single `+`; nothing else is escaped.
fn search_query(name: &str) -> String {
    let mut query = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                query.push('+');
            }
            in_space = true;
        } else {
            query.push(c);
            in_space = false;
        }
    }
    query
}
