use serde::{Deserialize, Serialize};

use crate::models::skill::Skill;

/// A target career and the skills it calls for. Reference data, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub average_salary: String,
    pub growth_rate: String,
    pub required_skills: Vec<Skill>,
    pub nice_to_have_skills: Vec<Skill>,
    /// Optional stretch goals. Missing ones become low-priority gaps.
    #[serde(default)]
    pub stretch_skills: Vec<Skill>,
}

impl CareerPath {
    /// Every skill the career lists, in required → nice-to-have → stretch order.
    pub fn all_skills(&self) -> impl Iterator<Item = &Skill> {
        self.required_skills
            .iter()
            .chain(self.nice_to_have_skills.iter())
            .chain(self.stretch_skills.iter())
    }
}
