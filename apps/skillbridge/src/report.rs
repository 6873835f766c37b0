//! Plain-text and JSON renderings of an analysis for the terminal.

use std::fmt::Write;

use serde::Serialize;

use crate::analysis::gap::SkillGap;
use crate::analysis::progress::ProgressSummary;
use crate::analysis::roadmap::RoadmapPhase;
use crate::models::{CareerPath, Resource};

/// Resources listed per gap in text mode.
const MAX_RESOURCES_SHOWN: usize = 3;

#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub career_id: &'a str,
    pub career_title: &'a str,
    pub progress: &'a ProgressSummary,
    pub gaps: &'a [SkillGap],
}

#[derive(Debug, Serialize)]
pub struct RoadmapReport<'a> {
    pub career_id: &'a str,
    pub career_title: &'a str,
    pub phases: &'a [RoadmapPhase],
}

pub fn render_careers(careers: &[CareerPath]) -> String {
    let mut out = String::new();
    for career in careers {
        let _ = writeln!(out, "{} {} ({})", career.icon, career.title, career.id);
        let _ = writeln!(
            out,
            "    salary {} · growth {} · {} required, {} nice-to-have",
            career.average_salary,
            career.growth_rate,
            career.required_skills.len(),
            career.nice_to_have_skills.len()
        );
    }
    out
}

pub fn render_analysis(
    career: &CareerPath,
    progress: &ProgressSummary,
    gaps: &[SkillGap],
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Skill gap analysis: {}", career.title);
    let _ = writeln!(
        out,
        "Career readiness: {}% ({} of {} required skills)",
        progress.completion_percentage, progress.required_matched, progress.required_total
    );
    let _ = writeln!(
        out,
        "Nice-to-have skills: {} of {}",
        progress.nice_to_have_matched, progress.nice_to_have_total
    );

    if !progress.matched_required_skills.is_empty() {
        let names: Vec<&str> = progress
            .matched_required_skills
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        let _ = writeln!(out, "Skills you have: {}", names.join(", "));
    }

    if gaps.is_empty() {
        let _ = writeln!(out, "\nNo skill gaps. You cover everything this career lists.");
        return out;
    }

    let _ = writeln!(out, "\nSkills to learn ({}):", gaps.len());
    for gap in gaps {
        let _ = writeln!(
            out,
            "  [{}] {} ({}) · {}",
            gap.priority.as_str().to_uppercase(),
            gap.skill.name,
            gap.skill.category,
            gap.estimated_learning_time
        );
        for resource in gap.resources.iter().take(MAX_RESOURCES_SHOWN) {
            let _ = writeln!(out, "      - {}", render_resource(resource));
        }
    }
    out
}

pub fn render_roadmap(career: &CareerPath, phases: &[RoadmapPhase]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Learning roadmap: {}", career.title);

    if phases.is_empty() {
        let _ = writeln!(out, "Nothing left to learn for this career.");
        return out;
    }

    for phase in phases {
        let _ = writeln!(out, "\nPhase {}: {}", phase.number, phase.name);
        for gap in &phase.gaps {
            let _ = writeln!(
                out,
                "  • {} · {} · {} · {} resources",
                gap.skill.name,
                gap.estimated_learning_time,
                gap.skill.category,
                gap.resources.len()
            );
        }
    }
    out
}

fn render_resource(resource: &Resource) -> String {
    format!(
        "{} [{}] by {} · {} · {} · ★{:.1} · {} · {}",
        resource.title,
        resource.resource_type.as_str(),
        resource.provider,
        resource.duration,
        resource.difficulty.as_str(),
        resource.rating,
        if resource.is_free { "free" } else { "paid" },
        resource.url
    )
}
