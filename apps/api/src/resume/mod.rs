pub mod fields;
pub mod model;

pub use model::{Resume, ResumeError, SectionKind};
