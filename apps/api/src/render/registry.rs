//! Template registry: stable keys mapped to pure renderers.

use serde::Serialize;
use tracing::debug;

use crate::models::ResumeDocument;
use crate::render::style::{AccentColor, FontPairing, StyleError};
use crate::render::templates::{
    academic, classic, corporate, executive, minimalist, tech, timeline, two_column,
};
use crate::render::tree::Element;

/// A layout. Must be pure: identical inputs give identical trees.
pub type Renderer = fn(&ResumeDocument, &AccentColor) -> Element;

#[derive(Clone, Serialize)]
pub struct TemplateEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub renderer: Renderer,
}

/// A rendered document together with the style choices that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedDocument {
    pub template: &'static str,
    pub accent: AccentColor,
    pub font: FontPairing,
    pub root: Element,
}

#[derive(Clone)]
pub struct TemplateRegistry {
    entries: Vec<TemplateEntry>,
}

impl TemplateRegistry {
    /// The eight built-in layouts in display order.
    pub fn builtin() -> Self {
        let mut registry = Self {
            entries: Vec::with_capacity(8),
        };
        registry.register(
            "classic",
            "Classic",
            "A timeless, single-column format ideal for any industry.",
            classic::render,
        );
        registry.register(
            "timeline-accent",
            "Timeline Accent",
            "A creative, ATS-friendly layout with a timeline motif.",
            timeline::render,
        );
        registry.register(
            "minimalist",
            "Minimalist",
            "Clean, simple, and elegantly text-focused.",
            minimalist::render,
        );
        registry.register(
            "two-column",
            "Compact Two-Column",
            "Efficiently organizes content, perfect for dense information.",
            two_column::render,
        );
        registry.register(
            "executive",
            "Executive",
            "A professional and bold design for leadership roles.",
            executive::render,
        );
        registry.register(
            "tech",
            "Modern Column",
            "Info-dense and scannable, perfect for skill-heavy roles.",
            tech::render,
        );
        registry.register(
            "academic",
            "Academic",
            "Structured for publications, research, and grants.",
            academic::render,
        );
        registry.register(
            "corporate",
            "Corporate",
            "A sleek and highly professional look for corporate roles.",
            corporate::render,
        );
        registry
    }

    /// Adds a template, or replaces the renderer of an existing key in place.
    pub fn register(
        &mut self,
        key: &'static str,
        name: &'static str,
        description: &'static str,
        renderer: Renderer,
    ) {
        let entry = TemplateEntry {
            key,
            name,
            description,
            renderer,
        };
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Result<&TemplateEntry, StyleError> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .ok_or_else(|| StyleError::UnknownTemplate(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Renders `doc` with the template `key`, wrapped in a root that carries
    /// the font pairing for the whole tree.
    pub fn render(
        &self,
        key: &str,
        doc: &ResumeDocument,
        accent: &AccentColor,
        font: FontPairing,
    ) -> Result<RenderedDocument, StyleError> {
        let entry = self.get(key)?;
        debug!(template = entry.key, accent = %accent, font = font.name(), "rendering document");

        let body = (entry.renderer)(doc, accent);
        let root = Element::new("div")
            .attr("id", "cv-preview-content")
            .attr("data-template", entry.key)
            .class("h-full overflow-hidden")
            .class(font.class_name())
            .style("font-family", font.body_family())
            .child(body);

        Ok(RenderedDocument {
            template: entry.key,
            accent: accent.clone(),
            font,
            root,
        })
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
