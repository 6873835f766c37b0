use serde::{Deserialize, Serialize};

use crate::analysis::gap::{Priority, SkillGap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Foundation,
    CoreSkills,
    Advanced,
}

impl Phase {
    /// Fixed phase order of every roadmap.
    pub const ALL: [Phase; 3] = [Phase::Foundation, Phase::CoreSkills, Phase::Advanced];

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Foundation => "Foundation",
            Phase::CoreSkills => "Core Skills",
            Phase::Advanced => "Advanced",
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            Phase::Foundation => Priority::High,
            Phase::CoreSkills => Priority::Medium,
            Phase::Advanced => Priority::Low,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapPhase {
    /// 1-based position among the non-empty phases.
    pub number: usize,
    pub phase: Phase,
    pub name: String,
    pub gaps: Vec<SkillGap>,
}

/// Partitions the gaps into Foundation / Core Skills / Advanced, dropping empty
/// phases. Within a phase the input order is kept.
pub fn build_roadmap(gaps: &[SkillGap]) -> Vec<RoadmapPhase> {
    Phase::ALL
        .iter()
        .map(|phase| {
            (
                *phase,
                gaps.iter()
                    .filter(|g| g.priority == phase.priority())
                    .cloned()
                    .collect::<Vec<_>>(),
            )
        })
        .filter(|(_, members)| !members.is_empty())
        .enumerate()
        .map(|(index, (phase, members))| RoadmapPhase {
            number: index + 1,
            phase,
            name: phase.name().to_string(),
            gaps: members,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Skill;

    fn gap(id: &str, priority: Priority) -> SkillGap {
        SkillGap {
            skill: Skill::new(id, id, "Test"),
            priority,
            estimated_learning_time: "1 week".to_string(),
            resources: vec![],
        }
    }

    #[test]
    fn test_empty_gaps_give_empty_roadmap() {
        assert!(build_roadmap(&[]).is_empty());
    }

    #[test]
    fn test_phases_in_fixed_order_and_named() {
        let gaps = vec![
            gap("a", Priority::High),
            gap("b", Priority::Medium),
            gap("c", Priority::Low),
        ];
        let roadmap = build_roadmap(&gaps);
        let names: Vec<&str> = roadmap.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Foundation", "Core Skills", "Advanced"]);
        assert_eq!(roadmap[2].phase, Phase::Advanced);
    }

    #[test]
    fn test_empty_phase_dropped_and_numbers_stay_contiguous() {
        let gaps = vec![gap("a", Priority::High), gap("c", Priority::Low)];
        let roadmap = build_roadmap(&gaps);

        assert_eq!(roadmap.len(), 2);
        assert_eq!(roadmap[0].phase, Phase::Foundation);
        assert_eq!(roadmap[1].phase, Phase::Advanced);
        assert_eq!(roadmap[1].number, 2);
    }

    #[test]
    fn test_partition_is_stable_not_sorted() {
        // Deliberately unsorted input: the partition must not reorder within a phase.
        let gaps = vec![
            gap("m1", Priority::Medium),
            gap("h1", Priority::High),
            gap("m2", Priority::Medium),
            gap("h2", Priority::High),
        ];
        let roadmap = build_roadmap(&gaps);

        let foundation: Vec<&str> = roadmap[0].gaps.iter().map(|g| g.skill.id.as_str()).collect();
        let core: Vec<&str> = roadmap[1].gaps.iter().map(|g| g.skill.id.as_str()).collect();
        assert_eq!(foundation, vec!["h1", "h2"]);
        assert_eq!(core, vec!["m1", "m2"]);
    }

    #[test]
    fn test_only_medium_gaps_numbered_from_one() {
        let roadmap = build_roadmap(&[gap("x", Priority::Medium)]);
        assert_eq!(roadmap.len(), 1);
        assert_eq!(roadmap[0].name, "Core Skills");
        assert_eq!(roadmap[0].number, 1);
    }
}
