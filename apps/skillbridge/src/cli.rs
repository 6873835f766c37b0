use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::errors::AppError;
use crate::models::{Proficiency, Skill};

#[derive(Debug, Parser)]
#[command(name = "skillbridge", version, about = "Career skill-gap analysis and learning roadmaps")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the careers in the catalog
    Careers,
    /// Show readiness and the prioritized list of missing skills
    Analyze(SessionArgs),
    /// Show the missing skills grouped into learning phases
    Roadmap(SessionArgs),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProficiencyArg {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<ProficiencyArg> for Proficiency {
    fn from(value: ProficiencyArg) -> Self {
        match value {
            ProficiencyArg::Beginner => Proficiency::Beginner,
            ProficiencyArg::Intermediate => Proficiency::Intermediate,
            ProficiencyArg::Advanced => Proficiency::Advanced,
        }
    }
}

#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Career id, e.g. `frontend-developer`
    #[arg(long, env = "SKILLBRIDGE_CAREER")]
    pub career: String,

    /// A skill you already have, by display name (repeatable)
    #[arg(long = "skill", value_name = "NAME")]
    pub skills: Vec<String>,

    /// Category recorded for skills given with --skill
    #[arg(long, default_value = "Programming")]
    pub category: String,

    /// Proficiency recorded for skills given with --skill
    #[arg(long, value_enum, default_value_t = ProficiencyArg::Intermediate)]
    pub proficiency: ProficiencyArg,

    /// Resume file to extract skills from
    #[arg(long)]
    pub resume: Option<PathBuf>,

    /// Skill id to drop after skills are collected (repeatable)
    #[arg(long = "remove", value_name = "ID")]
    pub remove: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl SessionArgs {
    /// Turns the `--skill` names into skills, rejecting blank names.
    pub fn user_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.skills
            .iter()
            .map(|name| {
                if name.trim().is_empty() {
                    return Err(AppError::Validation("skill name cannot be empty".to_string()));
                }
                Ok(Skill::from_name(
                    name,
                    &self.category,
                    Some(self.proficiency.into()),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_with_repeated_skills() {
        let cli = Cli::try_parse_from([
            "skillbridge",
            "analyze",
            "--career",
            "frontend-developer",
            "--skill",
            "HTML",
            "--skill",
            "Machine Learning",
            "--format",
            "json",
        ])
        .unwrap();

        let Command::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.career, "frontend-developer");
        assert_eq!(args.format, OutputFormat::Json);

        let skills = args.user_skills().unwrap();
        assert_eq!(skills[1].id, "machine-learning");
        assert_eq!(skills[1].proficiency, Some(Proficiency::Intermediate));
    }

    #[test]
    fn test_blank_skill_name_rejected() {
        let cli = Cli::try_parse_from([
            "skillbridge",
            "roadmap",
            "--career",
            "data-scientist",
            "--skill",
            "   ",
        ])
        .unwrap();

        let Command::Roadmap(args) = cli.command else {
            panic!("expected roadmap");
        };
        assert!(matches!(args.user_skills(), Err(AppError::Validation(_))));
    }
}
