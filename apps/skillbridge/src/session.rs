#![allow(dead_code)]

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::analysis::gap::{compute_gaps, SkillGap};
use crate::analysis::progress::{compute_progress, ProgressSummary};
use crate::analysis::roadmap::{build_roadmap, RoadmapPhase};
use crate::catalog::Catalog;
use crate::models::{CareerPath, Skill};

/// The user's current skills. Every change produces a new value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillSet {
    skills: Vec<Skill>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Skill] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.skills.iter().any(|s| s.id == id)
    }

    /// Appends `skill` unless a skill with the same id is already present.
    pub fn with_skill(&self, skill: Skill) -> SkillSet {
        if self.contains(&skill.id) {
            return self.clone();
        }
        let mut skills = self.skills.clone();
        skills.push(skill);
        SkillSet { skills }
    }

    pub fn without_skill(&self, id: &str) -> SkillSet {
        SkillSet {
            skills: self.skills.iter().filter(|s| s.id != id).cloned().collect(),
        }
    }

    /// Appends the skills whose ids are not present yet, keeping their order.
    pub fn merged(&self, incoming: impl IntoIterator<Item = Skill>) -> SkillSet {
        let mut skills = self.skills.clone();
        let mut seen: HashSet<String> = skills.iter().map(|s| s.id.clone()).collect();
        for skill in incoming {
            if seen.insert(skill.id.clone()) {
                skills.push(skill);
            }
        }
        SkillSet { skills }
    }
}

impl FromIterator<Skill> for SkillSet {
    fn from_iter<I: IntoIterator<Item = Skill>>(iter: I) -> Self {
        SkillSet::new().merged(iter)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct GapKey {
    career_id: String,
    revision: u64,
}

/// Selected career plus the user's skills, with the gap list memoized on
/// (career id, skill-set revision). The catalog is fixed for the session's
/// lifetime, so it never has to be part of the key.
#[derive(Debug)]
pub struct Session<'a> {
    catalog: &'a Catalog,
    career: Option<CareerPath>,
    skills: SkillSet,
    revision: u64,
    cached_gaps: Option<(GapKey, Vec<SkillGap>)>,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            career: None,
            skills: SkillSet::default(),
            revision: 0,
            cached_gaps: None,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn career(&self) -> Option<&CareerPath> {
        self.career.as_ref()
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    pub fn select_career(&mut self, career: CareerPath) {
        debug!("Selected career '{}'", career.id);
        self.career = Some(career);
    }

    pub fn add_skill(&mut self, skill: Skill) {
        debug!("Adding skill '{}'", skill.id);
        let next = self.skills.with_skill(skill);
        self.replace_skills(next);
    }

    pub fn remove_skill(&mut self, id: &str) {
        debug!("Removing skill '{id}'");
        let next = self.skills.without_skill(id);
        self.replace_skills(next);
    }

    /// Merges extracted skills, skipping ids the user already has.
    pub fn apply_extracted_skills(&mut self, extracted: Vec<Skill>) {
        let before = self.skills.len();
        let next = self.skills.merged(extracted);
        debug!("Extraction added {} new skills", next.len() - before);
        self.replace_skills(next);
    }

    fn replace_skills(&mut self, next: SkillSet) {
        if next != self.skills {
            self.skills = next;
            self.revision += 1;
        }
    }

    /// Gap list for the current career and skills; empty when no career is selected.
    pub fn gaps(&mut self) -> &[SkillGap] {
        let key = self.career.as_ref().map(|c| GapKey {
            career_id: c.id.clone(),
            revision: self.revision,
        });

        let Some(key) = key else {
            self.cached_gaps = None;
            return &[];
        };

        let fresh = matches!(&self.cached_gaps, Some((cached, _)) if *cached == key);
        if !fresh {
            debug!(
                "Recomputing gaps for '{}' at revision {}",
                key.career_id, key.revision
            );
            let gaps = compute_gaps(self.career.as_ref(), self.skills.as_slice(), self.catalog);
            self.cached_gaps = Some((key, gaps));
        }

        self.cached_gaps
            .as_ref()
            .map(|(_, gaps)| gaps.as_slice())
            .unwrap_or(&[])
    }

    pub fn roadmap(&mut self) -> Vec<RoadmapPhase> {
        build_roadmap(self.gaps())
    }

    /// `None` until a career is selected.
    pub fn progress(&self) -> Option<ProgressSummary> {
        self.career
            .as_ref()
            .map(|career| compute_progress(career, self.skills.as_slice()))
    }
}
