//! The single in-memory editing session: form document, derived display
//! document and the current style selection.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::assist::compatibility::CompatibilityResult;
use crate::assist::text::RewriteTarget;
use crate::editing::editor::{self, EditError};
use crate::editing::merge::merge;
use crate::editing::paths::{FieldPath, ListItem, ListKind};
use crate::models::{empty_document, ResumeDocument, Skill};
use crate::render::registry::TemplateRegistry;
use crate::render::style::{AccentColor, FontPairing, StyleError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleSelection {
    pub template: String,
    pub accent: AccentColor,
    pub font: FontPairing,
}

impl StyleSelection {
    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            accent: AccentColor::default(),
            font: FontPairing::default(),
        }
    }
}

/// Partial style change; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleUpdate {
    pub template: Option<String>,
    pub accent: Option<String>,
    pub font: Option<String>,
}

/// What the UI shell receives after every change.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub revision: u64,
    pub form: ResumeDocument,
    pub display: ResumeDocument,
    pub style: StyleSelection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<CompatibilityResult>,
}

pub struct EditorSession {
    form: ResumeDocument,
    display: ResumeDocument,
    placeholder: &'static ResumeDocument,
    style: StyleSelection,
    revision: u64,
    compatibility: Option<CompatibilityResult>,
}

impl EditorSession {
    pub fn new(placeholder: &'static ResumeDocument, style: StyleSelection) -> Self {
        let form = empty_document().clone();
        let display = merge(&form, placeholder);
        Self {
            form,
            display,
            placeholder,
            style,
            revision: 0,
            compatibility: None,
        }
    }

    pub fn form(&self) -> &ResumeDocument {
        &self.form
    }

    pub fn display(&self) -> &ResumeDocument {
        &self.display
    }

    pub fn style(&self) -> &StyleSelection {
        &self.style
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            revision: self.revision,
            form: self.form.clone(),
            display: self.display.clone(),
            style: self.style.clone(),
            compatibility: self.compatibility.clone(),
        }
    }

    /// Replaces the form document and recomputes the display document.
    fn commit(&mut self, next: ResumeDocument) {
        self.form = next;
        self.display = merge(&self.form, self.placeholder);
        self.revision += 1;
        debug!(revision = self.revision, "form document replaced");
    }

    /// Runs a fallible edit against the current form document. Nothing changes
    /// when the edit is rejected.
    fn apply(
        &mut self,
        edit: impl FnOnce(&ResumeDocument) -> Result<ResumeDocument, EditError>,
    ) -> Result<(), EditError> {
        let next = edit(&self.form)?;
        self.commit(next);
        Ok(())
    }

    pub fn set_field(&mut self, path: FieldPath, value: String) {
        let next = editor::set_scalar_field(&self.form, path, value);
        self.commit(next);
    }

    pub fn append_item(&mut self, item: ListItem) {
        debug!(list = item.kind().as_str(), "appending item");
        let next = editor::append_item(&self.form, item);
        self.commit(next);
    }

    pub fn set_item(&mut self, index: usize, item: ListItem) -> Result<(), EditError> {
        self.apply(|doc| editor::set_item(doc, index, item))
    }

    pub fn remove_item(&mut self, kind: ListKind, index: usize) -> Result<(), EditError> {
        self.apply(|doc| editor::remove_item(doc, kind, index))
    }

    /// Bulk skill entry. Returns how many skills were added; adding none is
    /// not a change.
    pub fn add_skills_from_text(&mut self, text: &str) -> usize {
        let before = self.form.skills.len();
        let next = editor::append_many_from_delimited_text(&self.form, text, |name: &str| {
            Skill::named(name)
        });
        let added = next.skills.len() - before;
        if added > 0 {
            self.commit(next);
        }
        added
    }

    /// Back to the Empty form document. Style selection is kept.
    pub fn reset(&mut self) {
        self.compatibility = None;
        self.commit(empty_document().clone());
    }

    pub fn update_style(
        &mut self,
        update: StyleUpdate,
        registry: &TemplateRegistry,
    ) -> Result<(), StyleError> {
        // validate everything before touching the selection
        if let Some(key) = &update.template {
            registry.get(key)?;
        }
        let accent = update.accent.as_deref().map(AccentColor::parse).transpose()?;
        let font = update
            .font
            .as_deref()
            .map(str::parse::<FontPairing>)
            .transpose()?;

        if let Some(template) = update.template {
            self.style.template = template;
        }
        if let Some(accent) = accent {
            self.style.accent = accent;
        }
        if let Some(font) = font {
            self.style.font = font;
        }
        self.revision += 1;
        Ok(())
    }

    /// Current text of a rewrite target in the form document.
    pub fn source_text(&self, target: RewriteTarget) -> Result<&str, EditError> {
        match target {
            RewriteTarget::Summary => Ok(&self.form.summary),
            RewriteTarget::ExperienceDescription { index } => self
                .form
                .experience
                .get(index)
                .map(|exp| exp.description.as_str())
                .ok_or(EditError::IndexOutOfBounds {
                    list: ListKind::Experience,
                    index,
                    len: self.form.experience.len(),
                }),
        }
    }

    /// Writes AI output into the latest form document. Returns `false` when
    /// the target no longer exists; the result is then dropped.
    pub fn apply_rewrite(&mut self, target: RewriteTarget, text: String) -> bool {
        match target {
            RewriteTarget::Summary => {
                self.set_field(FieldPath::Summary, text);
                true
            }
            RewriteTarget::ExperienceDescription { index } => {
                let Some(current) = self.form.experience.get(index) else {
                    warn!(index, "experience entry removed before rewrite finished; dropping result");
                    return false;
                };
                let mut updated = current.clone();
                updated.description = text;
                self.set_item(index, ListItem::Experience(updated)).is_ok()
            }
        }
    }

    pub fn record_compatibility(&mut self, result: CompatibilityResult) {
        self.compatibility = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::paths::PersonalField;
    use crate::models::{placeholder_document, Experience};

    fn session() -> EditorSession {
        EditorSession::new(placeholder_document(), StyleSelection::with_template("classic"))
    }

    #[test]
    fn test_new_session_shows_placeholder() {
        let s = session();
        assert_eq!(s.form(), empty_document());
        assert_eq!(s.display(), placeholder_document());
        assert_eq!(s.revision(), 0);
    }

    #[test]
    fn test_edit_recomputes_display_and_bumps_revision() {
        let mut s = session();
        s.set_field(FieldPath::Personal(PersonalField::Name), "Grace".to_string());
        assert_eq!(s.revision(), 1);
        assert_eq!(s.display().personal.name, "Grace");
        assert_eq!(s.display().personal.email, placeholder_document().personal.email);
    }

    #[test]
    fn test_rejected_edit_leaves_state_unchanged() {
        let mut s = session();
        let before = s.snapshot();
        let err = s.remove_item(ListKind::Languages, 0).unwrap_err();
        assert!(matches!(err, EditError::IndexOutOfBounds { .. }));
        assert_eq!(s.revision(), before.revision);
        assert_eq!(s.form(), &before.form);
    }

    #[test]
    fn test_sequential_edits_apply_in_order() {
        let mut s = session();
        s.set_field(FieldPath::Summary, "first".to_string());
        s.set_field(FieldPath::Summary, "second".to_string());
        assert_eq!(s.form().summary, "second");
        assert_eq!(s.display().summary, "second");
    }

    #[test]
    fn test_bulk_add_without_tokens_is_not_a_change() {
        let mut s = session();
        assert_eq!(s.add_skills_from_text(" , \n"), 0);
        assert_eq!(s.revision(), 0);
        assert_eq!(s.add_skills_from_text("Rust, Zig"), 2);
        assert_eq!(s.revision(), 1);
    }

    #[test]
    fn test_bulk_add_appends_in_order_and_reaches_display() {
        let mut s = session();
        s.append_item(ListItem::Skill(Skill::named("Go")));
        assert_eq!(s.add_skills_from_text("Rust, Zig\nC"), 3);
        let names: Vec<&str> = s.display().skills.iter().map(|k| k.name.as_str()).collect();
        assert_eq!(names, vec!["Go", "Rust", "Zig", "C"]);
    }

    #[test]
    fn test_reset_returns_to_empty_and_keeps_style() {
        let mut s = session();
        s.update_style(
            StyleUpdate {
                font: Some("source-code-pro".to_string()),
                ..StyleUpdate::default()
            },
            &TemplateRegistry::builtin(),
        )
        .unwrap();
        s.set_field(FieldPath::Summary, "x".to_string());
        s.reset();
        assert_eq!(s.form(), empty_document());
        assert_eq!(s.style().font, FontPairing::SourceCodePro);
    }

    #[test]
    fn test_unknown_template_is_rejected_without_partial_update() {
        let mut s = session();
        let err = s
            .update_style(
                StyleUpdate {
                    template: Some("nope".to_string()),
                    font: Some("lora-inter".to_string()),
                    ..StyleUpdate::default()
                },
                &TemplateRegistry::builtin(),
            )
            .unwrap_err();
        assert_eq!(err, StyleError::UnknownTemplate("nope".to_string()));
        assert_eq!(s.style().font, FontPairing::Inter);
    }

    #[test]
    fn test_invalid_accent_is_rejected() {
        let mut s = session();
        let err = s
            .update_style(
                StyleUpdate {
                    accent: Some("teal".to_string()),
                    ..StyleUpdate::default()
                },
                &TemplateRegistry::builtin(),
            )
            .unwrap_err();
        assert_eq!(err, StyleError::InvalidColor("teal".to_string()));
        assert_eq!(s.style().accent, AccentColor::default());
    }

    #[test]
    fn test_rewrite_targets_latest_form() {
        let mut s = session();
        s.append_item(ListItem::Experience(Experience {
            role: "Dev".to_string(),
            description: "old".to_string(),
            ..Experience::default()
        }));
        assert_eq!(
            s.source_text(RewriteTarget::ExperienceDescription { index: 0 }).unwrap(),
            "old"
        );

        // user renames the role while the rewrite is running
        let mut renamed = s.form().experience[0].clone();
        renamed.role = "Senior Dev".to_string();
        s.set_item(0, ListItem::Experience(renamed)).unwrap();

        assert!(s.apply_rewrite(RewriteTarget::ExperienceDescription { index: 0 }, "new".to_string()));
        assert_eq!(s.form().experience[0].role, "Senior Dev");
        assert_eq!(s.form().experience[0].description, "new");
    }

    #[test]
    fn test_rewrite_for_removed_entry_is_dropped() {
        let mut s = session();
        s.append_item(ListItem::blank(ListKind::Experience));
        s.remove_item(ListKind::Experience, 0).unwrap();
        let revision = s.revision();
        assert!(!s.apply_rewrite(RewriteTarget::ExperienceDescription { index: 0 }, "x".to_string()));
        assert_eq!(s.revision(), revision);
    }
}
