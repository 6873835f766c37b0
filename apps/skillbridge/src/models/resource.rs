use serde::{Deserialize, Serialize};

use crate::models::skill::Proficiency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Course,
    Tutorial,
    Documentation,
    Book,
    Certification,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Course => "course",
            ResourceType::Tutorial => "tutorial",
            ResourceType::Documentation => "documentation",
            ResourceType::Book => "book",
            ResourceType::Certification => "certification",
        }
    }
}

/// A learning material reference attached to a skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub provider: String,
    pub url: String,
    pub duration: String,
    pub difficulty: Proficiency,
    pub rating: f32, // 0.0 – 5.0
    pub is_free: bool,
}
