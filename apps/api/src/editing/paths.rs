//! Addressing into a `ResumeDocument`: scalar field paths and list kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::editing::editor::EditError;
use crate::models::{Certificate, Education, Experience, Language, ResumeDocument, Skill};

/// A sub-field of `PersonalInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Name,
    Title,
    Phone,
    Email,
    Linkedin,
    Github,
}

/// A top-level or one-level-nested scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum FieldPath {
    Summary,
    Personal(PersonalField),
}

impl FieldPath {
    pub(crate) fn slot<'a>(&self, doc: &'a mut ResumeDocument) -> &'a mut String {
        let p = &mut doc.personal;
        match self {
            FieldPath::Summary => &mut doc.summary,
            FieldPath::Personal(PersonalField::Name) => &mut p.name,
            FieldPath::Personal(PersonalField::Title) => &mut p.title,
            FieldPath::Personal(PersonalField::Phone) => &mut p.phone,
            FieldPath::Personal(PersonalField::Email) => &mut p.email,
            FieldPath::Personal(PersonalField::Linkedin) => &mut p.linkedin,
            FieldPath::Personal(PersonalField::Github) => &mut p.github,
        }
    }
}

impl FromStr for FieldPath {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s {
            "summary" => return Ok(FieldPath::Summary),
            "personal.name" => PersonalField::Name,
            "personal.title" => PersonalField::Title,
            "personal.phone" => PersonalField::Phone,
            "personal.email" => PersonalField::Email,
            "personal.linkedin" => PersonalField::Linkedin,
            "personal.github" => PersonalField::Github,
            other => return Err(EditError::UnknownField(other.to_string())),
        };
        Ok(FieldPath::Personal(field))
    }
}

impl TryFrom<String> for FieldPath {
    type Error = EditError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The five ordered collections of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Experience,
    Education,
    Skills,
    Languages,
    Certificates,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Experience => "experience",
            ListKind::Education => "education",
            ListKind::Skills => "skills",
            ListKind::Languages => "languages",
            ListKind::Certificates => "certificates",
        }
    }
}

impl FromStr for ListKind {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "experience" => Ok(ListKind::Experience),
            "education" => Ok(ListKind::Education),
            "skills" => Ok(ListKind::Skills),
            "languages" => Ok(ListKind::Languages),
            "certificates" => Ok(ListKind::Certificates),
            other => Err(EditError::UnknownList(other.to_string())),
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An element type stored in one of the document's lists.
///
/// `blank()` is the new-item constructor: text fields empty, enumerations at
/// their fixed default.
pub trait ListEntry: Clone + Sized {
    const KIND: ListKind;

    fn blank() -> Self;
    fn items(doc: &ResumeDocument) -> &Vec<Self>;
    fn items_mut(doc: &mut ResumeDocument) -> &mut Vec<Self>;
}

macro_rules! list_entry {
    ($ty:ty, $kind:expr, $field:ident) => {
        impl ListEntry for $ty {
            const KIND: ListKind = $kind;

            fn blank() -> Self {
                <$ty>::default()
            }

            fn items(doc: &ResumeDocument) -> &Vec<Self> {
                &doc.$field
            }

            fn items_mut(doc: &mut ResumeDocument) -> &mut Vec<Self> {
                &mut doc.$field
            }
        }
    };
}

list_entry!(Experience, ListKind::Experience, experience);
list_entry!(Education, ListKind::Education, education);
list_entry!(Skill, ListKind::Skills, skills);
list_entry!(Language, ListKind::Languages, languages);
list_entry!(Certificate, ListKind::Certificates, certificates);

/// A list element whose type is only known at runtime (e.g. from a request path).
#[derive(Debug, Clone, PartialEq)]
pub enum ListItem {
    Experience(Experience),
    Education(Education),
    Skill(Skill),
    Language(Language),
    Certificate(Certificate),
}

impl ListItem {
    pub fn blank(kind: ListKind) -> Self {
        match kind {
            ListKind::Experience => ListItem::Experience(Experience::blank()),
            ListKind::Education => ListItem::Education(Education::blank()),
            ListKind::Skills => ListItem::Skill(Skill::blank()),
            ListKind::Languages => ListItem::Language(Language::blank()),
            ListKind::Certificates => ListItem::Certificate(Certificate::blank()),
        }
    }

    /// Decodes a JSON value as an element of `kind`.
    pub fn from_json(kind: ListKind, value: serde_json::Value) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            ListKind::Experience => ListItem::Experience(serde_json::from_value(value)?),
            ListKind::Education => ListItem::Education(serde_json::from_value(value)?),
            ListKind::Skills => ListItem::Skill(serde_json::from_value(value)?),
            ListKind::Languages => ListItem::Language(serde_json::from_value(value)?),
            ListKind::Certificates => ListItem::Certificate(serde_json::from_value(value)?),
        })
    }

    pub fn kind(&self) -> ListKind {
        match self {
            ListItem::Experience(_) => ListKind::Experience,
            ListItem::Education(_) => ListKind::Education,
            ListItem::Skill(_) => ListKind::Skills,
            ListItem::Language(_) => ListKind::Languages,
            ListItem::Certificate(_) => ListKind::Certificates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SkillLevel;
    use serde_json::json;

    #[test]
    fn test_field_path_parses_summary_and_personal_fields() {
        assert_eq!("summary".parse::<FieldPath>().unwrap(), FieldPath::Summary);
        assert_eq!(
            "personal.github".parse::<FieldPath>().unwrap(),
            FieldPath::Personal(PersonalField::Github)
        );
    }

    #[test]
    fn test_field_path_rejects_unknown_path() {
        let err = "personal.address".parse::<FieldPath>().unwrap_err();
        assert!(matches!(err, EditError::UnknownField(p) if p == "personal.address"));
    }

    #[test]
    fn test_field_path_deserializes_from_string() {
        let path: FieldPath = serde_json::from_value(json!("personal.email")).unwrap();
        assert_eq!(path, FieldPath::Personal(PersonalField::Email));
        assert!(serde_json::from_value::<FieldPath>(json!("experience")).is_err());
    }

    #[test]
    fn test_list_kind_serde_names() {
        let kind: ListKind = serde_json::from_value(json!("certificates")).unwrap();
        assert_eq!(kind, ListKind::Certificates);
        assert_eq!(kind.as_str(), "certificates");
        assert_eq!(kind.to_string(), "certificates");
        assert_eq!("skills".parse::<ListKind>().unwrap(), ListKind::Skills);
        assert!(matches!(
            "hobbies".parse::<ListKind>(),
            Err(EditError::UnknownList(name)) if name == "hobbies"
        ));
    }

    #[test]
    fn test_blank_skill_uses_intermediate_level() {
        match ListItem::blank(ListKind::Skills) {
            ListItem::Skill(skill) => {
                assert!(skill.name.is_empty());
                assert_eq!(skill.level, SkillLevel::Intermediate);
            }
            other => panic!("unexpected item {other:?}"),
        }
    }

    #[test]
    fn test_list_item_from_json_checks_shape() {
        let item = ListItem::from_json(
            ListKind::Languages,
            json!({"language": "French", "proficiency": "Fluent"}),
        )
        .unwrap();
        assert_eq!(item.kind(), ListKind::Languages);

        let wrong = ListItem::from_json(ListKind::Education, json!({"language": "French"}));
        assert!(wrong.is_err());
    }
}
