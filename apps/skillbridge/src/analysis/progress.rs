use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{CareerPath, Skill};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub career_id: String,
    pub required_matched: usize,
    pub required_total: usize,
    pub nice_to_have_matched: usize,
    pub nice_to_have_total: usize,
    pub completion_percentage: u32, // 0 – 100
    pub matched_required_skills: Vec<Skill>,
}

/// How far the user is towards a career's required skills.
///
/// Completion is `round(matched / required × 100)`. A career with no required
/// skills counts as 100% complete.
pub fn compute_progress(career: &CareerPath, user_skills: &[Skill]) -> ProgressSummary {
    let user_skill_ids: HashSet<&str> = user_skills.iter().map(|s| s.id.as_str()).collect();

    let matched_required_skills: Vec<Skill> = career
        .required_skills
        .iter()
        .filter(|s| user_skill_ids.contains(s.id.as_str()))
        .cloned()
        .collect();

    let nice_to_have_matched = career
        .nice_to_have_skills
        .iter()
        .filter(|s| user_skill_ids.contains(s.id.as_str()))
        .count();

    let required_total = career.required_skills.len();
    let required_matched = matched_required_skills.len();

    ProgressSummary {
        career_id: career.id.clone(),
        required_matched,
        required_total,
        nice_to_have_matched,
        nice_to_have_total: career.nice_to_have_skills.len(),
        completion_percentage: completion_percentage(required_matched, required_total),
        matched_required_skills,
    }
}

fn completion_percentage(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    ((matched as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(id: &str) -> Skill {
        Skill::new(id, id, "Test")
    }

    fn career(required: &[&str], nice: &[&str]) -> CareerPath {
        CareerPath {
            id: "synthetic".to_string(),
            title: "Synthetic".to_string(),
            description: String::new(),
            icon: String::new(),
            average_salary: String::new(),
            growth_rate: String::new(),
            required_skills: required.iter().map(|id| skill(id)).collect(),
            nice_to_have_skills: nice.iter().map(|id| skill(id)).collect(),
            stretch_skills: vec![],
        }
    }

    #[test]
    fn test_one_of_three_rounds_to_33() {
        let c = career(&["html", "css", "javascript"], &[]);
        let summary = compute_progress(&c, &[skill("html")]);
        assert_eq!(summary.required_matched, 1);
        assert_eq!(summary.required_total, 3);
        assert_eq!(summary.completion_percentage, 33);
    }

    #[test]
    fn test_two_of_three_rounds_to_67() {
        let c = career(&["html", "css", "javascript"], &[]);
        let summary = compute_progress(&c, &[skill("html"), skill("css")]);
        assert_eq!(summary.completion_percentage, 67);
    }

    #[test]
    fn test_half_rounds_up() {
        let c = career(&["a", "b", "c", "d", "e", "f", "g", "h"], &[]);
        // 1/8 = 12.5% → 13
        let summary = compute_progress(&c, &[skill("a")]);
        assert_eq!(summary.completion_percentage, 13);
    }

    #[test]
    fn test_no_required_skills_is_complete() {
        let c = career(&[], &["figma"]);
        let summary = compute_progress(&c, &[]);
        assert_eq!(summary.completion_percentage, 100);
        assert_eq!(summary.required_total, 0);
    }

    #[test]
    fn test_nice_to_have_counted_separately() {
        let c = career(&["sql"], &["docker", "aws"]);
        let summary = compute_progress(&c, &[skill("aws"), skill("kotlin")]);
        assert_eq!(summary.required_matched, 0);
        assert_eq!(summary.completion_percentage, 0);
        assert_eq!(summary.nice_to_have_matched, 1);
        assert_eq!(summary.nice_to_have_total, 2);
    }

    #[test]
    fn test_matched_required_skills_listed_in_catalog_order() {
        let c = career(&["html", "css", "javascript"], &[]);
        let summary = compute_progress(&c, &[skill("javascript"), skill("html")]);
        let ids: Vec<&str> = summary
            .matched_required_skills
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["html", "javascript"]);
    }
}
