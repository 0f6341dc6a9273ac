pub mod defaults;
pub mod resume;

pub use defaults::{empty_document, placeholder_document};
pub use resume::{
    Certificate, Education, Experience, Language, PersonalInfo, ResumeDocument, Skill,
};
