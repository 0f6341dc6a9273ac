//! Edit Controller: atomic, pure mutations over a `ResumeDocument`.
//!
//! Every operation takes the current document by reference and returns a new
//! one. On error the caller keeps its current document unchanged.

use thiserror::Error;

use crate::editing::paths::{FieldPath, ListEntry, ListItem, ListKind};
use crate::models::{Certificate, Education, Experience, Language, ResumeDocument, Skill};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("index {index} out of bounds for {list} (length {len})")]
    IndexOutOfBounds {
        list: ListKind,
        index: usize,
        len: usize,
    },

    #[error("unknown field path '{0}'")]
    UnknownField(String),

    #[error("unknown list '{0}'")]
    UnknownList(String),
}

/// Replaces one scalar field.
pub fn set_scalar_field(
    doc: &ResumeDocument,
    path: FieldPath,
    value: impl Into<String>,
) -> ResumeDocument {
    let mut next = doc.clone();
    *path.slot(&mut next) = value.into();
    next
}

/// Replaces the element at `index`. `index` must be within the current list.
pub fn set_list_item<T: ListEntry>(
    doc: &ResumeDocument,
    index: usize,
    item: T,
) -> Result<ResumeDocument, EditError> {
    check_index::<T>(doc, index)?;
    let mut next = doc.clone();
    T::items_mut(&mut next)[index] = item;
    Ok(next)
}

/// Appends one element after the existing ones.
pub fn append_list_item<T: ListEntry>(doc: &ResumeDocument, item: T) -> ResumeDocument {
    let mut next = doc.clone();
    T::items_mut(&mut next).push(item);
    next
}

/// Splits `text` on newlines and commas, trims each token, drops empty tokens,
/// and appends `make_item(token)` for each survivor in order.
///
/// No de-duplication against existing entries.
pub fn append_many_from_delimited_text<T, F>(
    doc: &ResumeDocument,
    text: &str,
    make_item: F,
) -> ResumeDocument
where
    T: ListEntry,
    F: Fn(&str) -> T,
{
    let mut next = doc.clone();
    T::items_mut(&mut next).extend(split_delimited(text).into_iter().map(make_item));
    next
}

/// Tokens of a bulk-entry text box. Separators are exactly `\n` and `,`.
pub fn split_delimited(text: &str) -> Vec<&str> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Removes the element at `index`; later elements shift down by one.
pub fn remove_list_item<T: ListEntry>(
    doc: &ResumeDocument,
    index: usize,
) -> Result<ResumeDocument, EditError> {
    check_index::<T>(doc, index)?;
    let mut next = doc.clone();
    T::items_mut(&mut next).remove(index);
    Ok(next)
}

fn check_index<T: ListEntry>(doc: &ResumeDocument, index: usize) -> Result<(), EditError> {
    let len = T::items(doc).len();
    if index < len {
        Ok(())
    } else {
        Err(EditError::IndexOutOfBounds {
            list: T::KIND,
            index,
            len,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Runtime-typed variants, for callers that only know the list by name
// ────────────────────────────────────────────────────────────────────────────

pub fn set_item(
    doc: &ResumeDocument,
    index: usize,
    item: ListItem,
) -> Result<ResumeDocument, EditError> {
    match item {
        ListItem::Experience(e) => set_list_item(doc, index, e),
        ListItem::Education(e) => set_list_item(doc, index, e),
        ListItem::Skill(s) => set_list_item(doc, index, s),
        ListItem::Language(l) => set_list_item(doc, index, l),
        ListItem::Certificate(c) => set_list_item(doc, index, c),
    }
}

pub fn append_item(doc: &ResumeDocument, item: ListItem) -> ResumeDocument {
    match item {
        ListItem::Experience(e) => append_list_item(doc, e),
        ListItem::Education(e) => append_list_item(doc, e),
        ListItem::Skill(s) => append_list_item(doc, s),
        ListItem::Language(l) => append_list_item(doc, l),
        ListItem::Certificate(c) => append_list_item(doc, c),
    }
}

pub fn remove_item(
    doc: &ResumeDocument,
    kind: ListKind,
    index: usize,
) -> Result<ResumeDocument, EditError> {
    match kind {
        ListKind::Experience => remove_list_item::<Experience>(doc, index),
        ListKind::Education => remove_list_item::<Education>(doc, index),
        ListKind::Skills => remove_list_item::<Skill>(doc, index),
        ListKind::Languages => remove_list_item::<Language>(doc, index),
        ListKind::Certificates => remove_list_item::<Certificate>(doc, index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::paths::PersonalField;
    use crate::models::resume::SkillLevel;

    fn with_skills(names: &[&str]) -> ResumeDocument {
        ResumeDocument {
            skills: names.iter().map(|n| Skill::named(*n)).collect(),
            ..ResumeDocument::default()
        }
    }

    fn skill(name: &str) -> Skill {
        Skill::named(name)
    }

    fn skill_names(doc: &ResumeDocument) -> Vec<&str> {
        doc.skills.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_set_scalar_field_returns_new_document() {
        let doc = ResumeDocument::default();
        let next = set_scalar_field(&doc, FieldPath::Personal(PersonalField::Name), "Linus");
        assert_eq!(next.personal.name, "Linus");
        assert!(doc.personal.name.is_empty(), "input must not change");
    }

    #[test]
    fn test_set_scalar_field_summary() {
        let next = set_scalar_field(&ResumeDocument::default(), FieldPath::Summary, "Hello");
        assert_eq!(next.summary, "Hello");
    }

    #[test]
    fn test_set_list_item_replaces_in_place() {
        let doc = with_skills(&["Go", "C"]);
        let next = set_list_item(&doc, 1, Skill::named("Rust")).unwrap();
        assert_eq!(skill_names(&next), vec!["Go", "Rust"]);
        assert_eq!(skill_names(&doc), vec!["Go", "C"]);
    }

    #[test]
    fn test_set_list_item_out_of_range_is_rejected() {
        let doc = with_skills(&["Go"]);
        let err = set_list_item(&doc, 1, Skill::named("Rust")).unwrap_err();
        assert_eq!(
            err,
            EditError::IndexOutOfBounds {
                list: ListKind::Skills,
                index: 1,
                len: 1
            }
        );
    }

    #[test]
    fn test_append_preserves_order() {
        let doc = with_skills(&["Go"]);
        let next = append_list_item(&doc, Skill::named("Rust"));
        assert_eq!(skill_names(&next), vec!["Go", "Rust"]);
    }

    #[test]
    fn test_bulk_add_splits_on_comma_and_newline() {
        let doc = with_skills(&["Go"]);
        let next = append_many_from_delimited_text(&doc, "Rust, Zig\nC", skill);
        assert_eq!(skill_names(&next), vec!["Go", "Rust", "Zig", "C"]);
        assert!(next.skills[1..]
            .iter()
            .all(|s| s.level == SkillLevel::Intermediate));
    }

    #[test]
    fn test_bulk_add_drops_empty_tokens() {
        let doc = ResumeDocument::default();
        let next = append_many_from_delimited_text(&doc, "Rust,, Zig", skill);
        assert_eq!(skill_names(&next), vec!["Rust", "Zig"]);

        let blank = append_many_from_delimited_text(&doc, " ,\n , ", skill);
        assert!(blank.skills.is_empty());
    }

    #[test]
    fn test_bulk_add_does_not_split_on_semicolon_or_tab() {
        assert_eq!(split_delimited("a;b\tc"), vec!["a;b\tc"]);
        assert_eq!(split_delimited("a\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_bulk_add_keeps_duplicates() {
        let doc = with_skills(&["Rust"]);
        let next = append_many_from_delimited_text(&doc, "Rust", skill);
        assert_eq!(skill_names(&next), vec!["Rust", "Rust"]);
    }

    #[test]
    fn test_remove_compacts_and_keeps_relative_order() {
        let doc = with_skills(&["a", "b", "c"]);
        let next = remove_list_item::<Skill>(&doc, 1).unwrap();
        assert_eq!(skill_names(&next), vec!["a", "c"]);
    }

    #[test]
    fn test_remove_out_of_range_is_rejected() {
        let doc = ResumeDocument::default();
        let err = remove_list_item::<Experience>(&doc, 0).unwrap_err();
        assert!(matches!(err, EditError::IndexOutOfBounds { len: 0, .. }));
    }

    #[test]
    fn test_dynamic_variants_dispatch_by_kind() {
        let doc = ResumeDocument::default();
        let doc = append_item(&doc, ListItem::blank(ListKind::Certificates));
        assert_eq!(doc.certificates.len(), 1);

        let replacement = ListItem::Certificate(Certificate {
            name: "CKA".to_string(),
            issuer: "CNCF".to_string(),
            date: "2024".to_string(),
        });
        let doc = set_item(&doc, 0, replacement).unwrap();
        assert_eq!(doc.certificates[0].name, "CKA");

        let doc = remove_item(&doc, ListKind::Certificates, 0).unwrap();
        assert!(doc.certificates.is_empty());
        assert!(remove_item(&doc, ListKind::Languages, 0).is_err());
    }
}
