//! Résumé document model.
//!
//! A `ResumeDocument` is a plain value: every edit produces a new document and
//! nothing hands out `&mut` access across component boundaries. All text fields
//! are free-form; no format validation happens here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    /// Optional. An empty string means "no GitHub profile".
    #[serde(default)]
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    /// Free-text date range, e.g. "2019 - Present".
    pub period: String,
    /// May contain embedded line breaks; renderers keep them.
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub period: String,
}

/// Self-assessed skill level. Captured and stored, not rendered by any template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
}

impl Skill {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: SkillLevel::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub language: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

/// The root entity. List order is the user's display order and is never
/// changed by anything other than an explicit add or remove.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub personal: PersonalInfo,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_is_blank() {
        let doc = ResumeDocument::default();
        assert!(doc.personal.name.is_empty());
        assert!(doc.summary.is_empty());
        assert!(doc.experience.is_empty());
        assert!(doc.certificates.is_empty());
    }

    #[test]
    fn test_skill_level_defaults_to_intermediate() {
        assert_eq!(SkillLevel::default(), SkillLevel::Intermediate);
        assert_eq!(Skill::named("Rust").level, SkillLevel::Intermediate);
    }

    #[test]
    fn test_skill_level_serde_uses_variant_names() {
        let skill: Skill = serde_json::from_str(r#"{"name":"Go","level":"Expert"}"#).unwrap();
        assert_eq!(skill.level, SkillLevel::Expert);
        let json = serde_json::to_string(&Skill::named("Zig")).unwrap();
        assert!(json.contains(r#""level":"Intermediate""#));
    }

    #[test]
    fn test_optional_fields_may_be_omitted_in_json() {
        let json = r#"{
            "personal": {"name":"A","title":"B","phone":"","email":"","linkedin":""},
            "summary": "",
            "experience": [],
            "education": [],
            "skills": [{"name":"C"}]
        }"#;
        let doc: ResumeDocument = serde_json::from_str(json).unwrap();
        assert!(doc.personal.github.is_empty());
        assert!(doc.languages.is_empty());
        assert!(doc.certificates.is_empty());
        assert_eq!(doc.skills[0].level, SkillLevel::Intermediate);
    }
}
