//! Merge Engine: derives the display document from the form document.
//!
//! Rules, applied independently per field:
//! - scalar text: the form value unless it is blank (empty after trimming),
//!   otherwise the placeholder's value
//! - `personal`: each sub-field merged on its own, never as a whole record
//! - lists: the form's list in full if it has any element, otherwise the
//!   placeholder's list in full. Never combined element by element.
//!
//! This is the only place in the crate that decides what "empty" means.

use crate::models::{PersonalInfo, ResumeDocument};

/// Pure and deterministic. The result owns all of its data.
pub fn merge(form: &ResumeDocument, placeholder: &ResumeDocument) -> ResumeDocument {
    ResumeDocument {
        personal: merge_personal(&form.personal, &placeholder.personal),
        summary: pick_text(&form.summary, &placeholder.summary),
        experience: pick_list(&form.experience, &placeholder.experience),
        education: pick_list(&form.education, &placeholder.education),
        skills: pick_list(&form.skills, &placeholder.skills),
        languages: pick_list(&form.languages, &placeholder.languages),
        certificates: pick_list(&form.certificates, &placeholder.certificates),
    }
}

fn merge_personal(form: &PersonalInfo, placeholder: &PersonalInfo) -> PersonalInfo {
    PersonalInfo {
        name: pick_text(&form.name, &placeholder.name),
        title: pick_text(&form.title, &placeholder.title),
        phone: pick_text(&form.phone, &placeholder.phone),
        email: pick_text(&form.email, &placeholder.email),
        linkedin: pick_text(&form.linkedin, &placeholder.linkedin),
        github: pick_text(&form.github, &placeholder.github),
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn pick_text(form: &str, fallback: &str) -> String {
    if is_blank(form) {
        fallback.to_string()
    } else {
        form.to_string()
    }
}

fn pick_list<T: Clone>(form: &[T], fallback: &[T]) -> Vec<T> {
    if form.is_empty() {
        fallback.to_vec()
    } else {
        form.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SkillLevel;
    use crate::models::{
        empty_document, placeholder_document, Certificate, Education, Experience, Language,
        Skill,
    };

    fn full_document() -> ResumeDocument {
        ResumeDocument {
            personal: PersonalInfo {
                name: "Ada Lovelace".to_string(),
                title: "Analyst".to_string(),
                phone: "+44 20 1234".to_string(),
                email: "ada@example.org".to_string(),
                linkedin: "linkedin.com/in/ada".to_string(),
                github: "github.com/ada".to_string(),
            },
            summary: "First programmer.\nNotes on the Engine.".to_string(),
            experience: vec![Experience {
                role: "Translator".to_string(),
                company: "Taylor's Scientific Memoirs".to_string(),
                period: "1842 - 1843".to_string(),
                description: "Annotated Menabrea's paper.".to_string(),
            }],
            education: vec![Education {
                institution: "Home tutoring".to_string(),
                degree: "Mathematics".to_string(),
                period: "1820s".to_string(),
            }],
            skills: vec![Skill {
                name: "Algorithms".to_string(),
                level: SkillLevel::Expert,
            }],
            languages: vec![Language {
                language: "French".to_string(),
                proficiency: "Fluent".to_string(),
            }],
            certificates: vec![Certificate {
                name: "Fellowship".to_string(),
                issuer: "Society".to_string(),
                date: "1843".to_string(),
            }],
        }
    }

    #[test]
    fn test_full_form_merges_to_itself() {
        let doc = full_document();
        assert_eq!(merge(&doc, placeholder_document()), doc);
        assert_eq!(merge(&doc, empty_document()), doc);
    }

    #[test]
    fn test_empty_form_merges_to_placeholder() {
        let placeholder = placeholder_document();
        assert_eq!(merge(empty_document(), placeholder), *placeholder);

        let custom = full_document();
        assert_eq!(merge(empty_document(), &custom), custom);
    }

    #[test]
    fn test_personal_fields_merge_independently() {
        let mut form = ResumeDocument::default();
        form.personal.name = "Grace Hopper".to_string();

        let merged = merge(&form, placeholder_document());
        assert_eq!(merged.personal.name, "Grace Hopper");
        assert_eq!(merged.personal.email, placeholder_document().personal.email);
        assert_eq!(merged.personal.title, placeholder_document().personal.title);
    }

    #[test]
    fn test_whitespace_only_text_counts_as_empty() {
        let mut form = ResumeDocument::default();
        form.summary = "  \n\t ".to_string();
        let merged = merge(&form, placeholder_document());
        assert_eq!(merged.summary, placeholder_document().summary);
    }

    #[test]
    fn test_list_substitution_is_all_or_nothing() {
        let placeholder = full_document();
        let mut two = placeholder.clone();
        two.experience.push(Experience::default());

        let mut form = ResumeDocument::default();
        form.experience = vec![Experience {
            role: "Only".to_string(),
            ..Experience::default()
        }];

        let merged = merge(&form, &two);
        assert_eq!(merged.experience.len(), 1);
        assert_eq!(merged.experience[0].role, "Only");
        // untouched lists fall back wholesale
        assert_eq!(merged.education, two.education);
    }

    #[test]
    fn test_blank_list_entries_are_kept_verbatim() {
        // A list with one blank entry is non-empty, so it wins over the placeholder.
        let mut form = ResumeDocument::default();
        form.skills.push(Skill::default());
        let merged = merge(&form, placeholder_document());
        assert_eq!(merged.skills, vec![Skill::default()]);
    }

    #[test]
    fn test_merge_is_deterministic() {
        let mut form = ResumeDocument::default();
        form.personal.phone = "555".to_string();
        form.languages.push(Language {
            language: "German".to_string(),
            proficiency: "B2".to_string(),
        });
        let a = merge(&form, placeholder_document());
        let b = merge(&form, placeholder_document());
        assert_eq!(a, b);
    }

    #[test]
    fn test_merged_document_is_independent_of_inputs() {
        let form = full_document();
        let mut merged = merge(&form, placeholder_document());
        merged.experience[0].role = "Changed".to_string();
        merged.skills.clear();
        assert_eq!(form.experience[0].role, "Translator");
        assert_eq!(form.skills.len(), 1);
    }
}
