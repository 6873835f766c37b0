pub mod career;
pub mod resource;
pub mod skill;

pub use career::CareerPath;
pub use resource::{Resource, ResourceType};
pub use skill::{Proficiency, Skill};
