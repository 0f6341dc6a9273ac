//! The two process-wide constant documents.
//!
//! Both are built once on first access and only ever handed out by shared
//! reference, so no component can mutate them.

use std::sync::LazyLock;

use crate::models::resume::{
    Certificate, Education, Experience, Language, PersonalInfo, ResumeDocument, Skill,
    SkillLevel,
};

static EMPTY: LazyLock<ResumeDocument> = LazyLock::new(ResumeDocument::default);

static PLACEHOLDER: LazyLock<ResumeDocument> = LazyLock::new(|| ResumeDocument {
    personal: PersonalInfo {
        name: "Your Name".to_string(),
        title: "Your Professional Title".to_string(),
        phone: "(555) 123-4567".to_string(),
        email: "your.email@example.com".to_string(),
        linkedin: "linkedin.com/in/yourprofile".to_string(),
        // Left blank: a placeholder GitHub link would leak into exports of
        // users who have none.
        github: String::new(),
    },
    summary: "A brief summary of your professional background, skills, and career goals. \
        Use the AI tools to refine this text."
        .to_string(),
    experience: vec![Experience {
        role: "Job Title".to_string(),
        company: "Company Name".to_string(),
        period: "Date - Date".to_string(),
        description: "Your responsibilities and key achievements will appear here. \
            Use the AI tools to refine this text."
            .to_string(),
    }],
    education: vec![Education {
        institution: "University Name".to_string(),
        degree: "Degree and Major".to_string(),
        period: "Date - Date".to_string(),
    }],
    skills: vec![
        Skill {
            name: "Core Skill 1".to_string(),
            level: SkillLevel::Expert,
        },
        Skill {
            name: "Core Skill 2".to_string(),
            level: SkillLevel::Advanced,
        },
        Skill {
            name: "Technical Skill".to_string(),
            level: SkillLevel::Intermediate,
        },
    ],
    languages: vec![Language {
        language: "Language Name".to_string(),
        proficiency: "e.g., Native, Fluent, Professional".to_string(),
    }],
    certificates: vec![Certificate {
        name: "Certificate Name".to_string(),
        issuer: "Issuing Organization".to_string(),
        date: "Date".to_string(),
    }],
});

/// All scalars empty, all lists empty. The form document starts as a copy of this.
pub fn empty_document() -> &'static ResumeDocument {
    &EMPTY
}

/// Fully populated example résumé used as fallback content for the preview.
pub fn placeholder_document() -> &'static ResumeDocument {
    &PLACEHOLDER
}
