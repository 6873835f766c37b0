// Skill-gap analysis: gap computation, roadmap phases, progress summary.
// Everything here is pure over (career, user skills, catalog).

pub mod gap;
pub mod progress;
pub mod roadmap;
