mod analysis;
mod catalog;
mod cli;
mod config;
mod errors;
mod models;
mod report;
mod resume;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::cli::{Cli, Command, OutputFormat, SessionArgs};
use crate::config::Config;
use crate::errors::AppError;
use crate::report::{AnalysisReport, RoadmapReport};
use crate::resume::{MockSkillExtractor, ResumeDocument, SkillExtractor};
use crate::session::Session;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries only reports.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting SkillBridge v{}", env!("CARGO_PKG_VERSION"));

    let catalog = Catalog::load(&config.catalog_sources())?;
    let extractor = MockSkillExtractor;

    let format = match &cli.command {
        Command::Analyze(args) | Command::Roadmap(args) => args.format,
        Command::Careers => OutputFormat::Text,
    };

    if let Err(e) = run(cli.command, &catalog, &extractor).await {
        let message = failure_message(&e, format);
        match format {
            OutputFormat::Json => println!("{message}"),
            OutputFormat::Text => {
                // Printed as well as logged: the log filter may drop it.
                error!("{e}");
                eprintln!("{message}");
            }
        }
        std::process::exit(1);
    }

    Ok(())
}

/// The JSON error envelope, or a plain `error:` line for text mode.
fn failure_message(e: &AppError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format!("{:#}", e.to_json()),
        OutputFormat::Text => format!("error: {e}"),
    }
}

async fn run(
    command: Command,
    catalog: &Catalog,
    extractor: &dyn SkillExtractor,
) -> Result<(), AppError> {
    match command {
        Command::Careers => {
            print!("{}", report::render_careers(&catalog.careers));
        }
        Command::Analyze(args) => {
            let mut session = build_session(&args, catalog, extractor).await?;
            let progress = session
                .progress()
                .ok_or_else(|| AppError::Validation("no career selected".to_string()))?;
            let career = session
                .career()
                .cloned()
                .ok_or_else(|| AppError::Validation("no career selected".to_string()))?;
            let gaps = session.gaps();

            match args.format {
                OutputFormat::Text => {
                    print!("{}", report::render_analysis(&career, &progress, gaps))
                }
                OutputFormat::Json => {
                    let report = AnalysisReport {
                        career_id: &career.id,
                        career_title: &career.title,
                        progress: &progress,
                        gaps,
                    };
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }
        Command::Roadmap(args) => {
            let mut session = build_session(&args, catalog, extractor).await?;
            let phases = session.roadmap();
            let career = session
                .career()
                .ok_or_else(|| AppError::Validation("no career selected".to_string()))?;

            match args.format {
                OutputFormat::Text => print!("{}", report::render_roadmap(career, &phases)),
                OutputFormat::Json => {
                    let report = RoadmapReport {
                        career_id: &career.id,
                        career_title: &career.title,
                        phases: &phases,
                    };
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }
    }
    Ok(())
}

/// Replays the interactive flow: pick the career, add typed skills, merge
/// skills extracted from the resume, then apply removals.
async fn build_session<'a>(
    args: &SessionArgs,
    catalog: &'a Catalog,
    extractor: &dyn SkillExtractor,
) -> Result<Session<'a>, AppError> {
    let mut session = Session::new(catalog);
    session.select_career(catalog.require_career(&args.career)?.clone());

    for skill in args.user_skills()? {
        session.add_skill(skill);
    }

    if let Some(path) = &args.resume {
        let document = ResumeDocument::read(path).await?;
        let extracted = extractor.extract_skills(&document).await?;
        info!(
            "Extracted {} skills from '{}' ({} backend)",
            extracted.len(),
            document.file_name,
            extractor.backend()
        );
        session.apply_extracted_skills(extracted);
    }

    for id in &args.remove {
        session.remove_skill(id);
    }

    Ok(session)
}
