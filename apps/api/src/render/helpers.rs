//! Building blocks shared by every template: section chrome, the contact-line
//! composer, URL normalization and list joins.

use crate::editing::merge::is_blank;
use crate::models::PersonalInfo;
use crate::render::style::AccentColor;
use crate::render::tree::{Element, Node};

pub const BULLET_SEPARATOR: &str = " • ";

/// Identifies a section in the rendered tree via `data-section`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    Contact,
    Experience,
    Education,
    Skills,
    Languages,
    Certificates,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Contact => "contact",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Languages => "languages",
            SectionKind::Certificates => "certificates",
        }
    }
}

/// Heading treatments used across the templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
    /// Large uppercase heading with a thick accent rule.
    Ruled,
    /// Large heading with a faint accent rule.
    Hairline,
    /// Compact sidebar heading.
    Column,
    /// Compact grey heading, no accent.
    Muted,
}

pub fn section<I, N>(
    kind: SectionKind,
    title: &str,
    chrome: Chrome,
    accent: &AccentColor,
    body: I,
) -> Element
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    let (wrapper, heading) = match chrome {
        Chrome::Ruled => (
            Element::new("section").class("mb-4"),
            Element::new("h2")
                .class("text-lg font-bold uppercase tracking-wider border-b-2 pb-1 mb-3")
                .style("color", accent.as_str())
                .style("border-color", accent.as_str()),
        ),
        Chrome::Hairline => (
            Element::new("section").class("mb-6"),
            Element::new("h2")
                .class("text-lg font-bold uppercase tracking-wider mb-4 border-b pb-1")
                .style("color", accent.as_str())
                .style("border-color", accent.with_alpha("40")),
        ),
        Chrome::Column => (
            Element::new("section").class("mb-4"),
            Element::new("h2")
                .class("text-sm font-bold uppercase tracking-wider border-b pb-1 mb-2")
                .style("color", accent.as_str()),
        ),
        Chrome::Muted => (
            Element::new("section"),
            Element::new("h2").class("text-sm font-bold uppercase tracking-wider text-gray-500 mb-2"),
        ),
    };

    wrapper
        .attr("data-section", kind.as_str())
        .child(heading.text(title))
        .children(body)
}

/// Renders a section only when `items` is non-empty; otherwise nothing at all.
pub fn optional_section<T>(items: &[T], build: impl FnOnce(&[T]) -> Element) -> Option<Element> {
    if items.is_empty() {
        None
    } else {
        Some(build(items))
    }
}

/// Link target for a profile URL. The displayed text stays the raw value.
pub fn normalize_url(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Phone,
    Email,
    Linkedin,
    Github,
}

impl ContactKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContactKind::Phone => "Phone",
            ContactKind::Email => "Email",
            ContactKind::Linkedin => "LinkedIn",
            ContactKind::Github => "GitHub",
        }
    }

    fn is_external(&self) -> bool {
        matches!(self, ContactKind::Linkedin | ContactKind::Github)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem<'a> {
    pub kind: ContactKind,
    pub text: &'a str,
    pub href: String,
}

/// Non-empty contact fields in the fixed order phone, email, linkedin, github.
pub fn contact_items(personal: &PersonalInfo) -> Vec<ContactItem<'_>> {
    let candidates = [
        (ContactKind::Phone, personal.phone.as_str()),
        (ContactKind::Email, personal.email.as_str()),
        (ContactKind::Linkedin, personal.linkedin.as_str()),
        (ContactKind::Github, personal.github.as_str()),
    ];

    candidates
        .into_iter()
        .filter(|(_, value)| !is_blank(value))
        .map(|(kind, text)| {
            let href = match kind {
                ContactKind::Phone => tel_href(text),
                ContactKind::Email => format!("mailto:{text}"),
                ContactKind::Linkedin | ContactKind::Github => normalize_url(text),
            };
            ContactItem { kind, text, href }
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub enum ContactLayout<'a> {
    /// One centred line separated by `|`. The email link takes the accent if given.
    Inline { email_accent: Option<&'a AccentColor> },
    /// One link per line.
    Stacked,
    /// One line per field with a bold label.
    Labeled,
}

pub fn contact_block(personal: &PersonalInfo, layout: ContactLayout<'_>) -> Element {
    let items = contact_items(personal);

    match layout {
        ContactLayout::Inline { email_accent } => {
            let mut line = Element::new("div")
                .class("flex flex-wrap justify-center items-center text-gray-600 text-xs");
            let last = items.len().saturating_sub(1);
            for (i, item) in items.iter().enumerate() {
                let mut link = contact_link(item);
                if let (ContactKind::Email, Some(accent)) = (item.kind, email_accent) {
                    link = link.style("color", accent.as_str());
                }
                line = line.child(link);
                if i < last {
                    line = line.child(
                        Element::new("span")
                            .class("mx-2 text-gray-400 select-none")
                            .text("|"),
                    );
                }
            }
            line
        }
        ContactLayout::Stacked => Element::new("div")
            .class("space-y-1 text-xs text-gray-700 break-all")
            .children(items.iter().map(|item| contact_link(item).class("block"))),
        ContactLayout::Labeled => Element::new("div")
            .class("space-y-1 text-xs text-gray-700 break-all")
            .children(items.iter().map(|item| {
                Element::new("p")
                    .child(Element::new("strong").text(format!("{}:", item.kind.label())))
                    .text(" ")
                    .child(contact_link(item))
            })),
    }
}

fn contact_link(item: &ContactItem<'_>) -> Element {
    let link = Element::new("a")
        .class("hover:underline")
        .attr("href", item.href.clone())
        .attr("data-contact", item.kind.label().to_ascii_lowercase());
    let link = if item.kind.is_external() {
        link.attr("target", "_blank").attr("rel", "noopener noreferrer")
    } else {
        link
    };
    link.text(item.text)
}

pub fn joined<'a>(parts: impl IntoIterator<Item = &'a str>, separator: &str) -> String {
    parts.into_iter().collect::<Vec<_>>().join(separator)
}

/// Free text as nodes, keeping each embedded line break.
pub fn multiline(text: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            nodes.push(Node::LineBreak);
        }
        let line = line.strip_suffix('\r').unwrap_or(line);
        if !line.is_empty() {
            nodes.push(Node::from(line));
        }
    }
    nodes
}

/// `<p>` of free text with preserved line breaks.
pub fn paragraph(classes: &'static str, text: &str) -> Element {
    Element::new("p").class(classes).children(multiline(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personal(phone: &str, email: &str, linkedin: &str, github: &str) -> PersonalInfo {
        PersonalInfo {
            name: "N".to_string(),
            title: "T".to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            linkedin: linkedin.to_string(),
            github: github.to_string(),
        }
    }

    #[test]
    fn test_normalize_url_prepends_https() {
        assert_eq!(normalize_url("linkedin.com/in/x"), "https://linkedin.com/in/x");
    }

    #[test]
    fn test_normalize_url_keeps_existing_scheme() {
        assert_eq!(normalize_url("https://linkedin.com/in/x"), "https://linkedin.com/in/x");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_tel_href_strips_whitespace() {
        assert_eq!(tel_href("(555) 123 4567"), "tel:(555)1234567");
    }

    #[test]
    fn test_contact_items_fixed_order_and_omission() {
        let p = personal("555", "", "linkedin.com/in/x", "github.com/x");
        let kinds: Vec<ContactKind> = contact_items(&p).iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![ContactKind::Phone, ContactKind::Linkedin, ContactKind::Github]
        );
    }

    #[test]
    fn test_contact_items_display_raw_link_normalized() {
        let p = personal("", "a@b.c", "linkedin.com/in/x", "");
        let items = contact_items(&p);
        assert_eq!(items[0].href, "mailto:a@b.c");
        assert_eq!(items[1].text, "linkedin.com/in/x");
        assert_eq!(items[1].href, "https://linkedin.com/in/x");
    }

    #[test]
    fn test_inline_contact_separators_between_items_only() {
        let p = personal("555", "a@b.c", "", "");
        let block = contact_block(&p, ContactLayout::Inline { email_accent: None });
        let seps = block.find_all(&|el| el.tag == "span");
        assert_eq!(seps.len(), 1);
        assert_eq!(block.find_all(&|el| el.tag == "a").len(), 2);
    }

    #[test]
    fn test_inline_contact_accents_email_only() {
        let accent = AccentColor::parse("#123456").unwrap();
        let p = personal("555", "a@b.c", "x.io", "");
        let block = contact_block(
            &p,
            ContactLayout::Inline {
                email_accent: Some(&accent),
            },
        );
        let links = block.find_all(&|el| el.tag == "a");
        assert_eq!(links[0].get_style("color"), None);
        assert_eq!(links[1].get_style("color"), Some("#123456"));
        assert_eq!(links[2].get_attr("target"), Some("_blank"));
    }

    #[test]
    fn test_labeled_contact_has_labels() {
        let p = personal("", "", "", "github.com/x");
        let block = contact_block(&p, ContactLayout::Labeled);
        assert_eq!(block.text_content(), "GitHub: github.com/x");
    }

    #[test]
    fn test_empty_contact_renders_no_links() {
        let p = personal("", " ", "", "");
        let block = contact_block(&p, ContactLayout::Stacked);
        assert!(block.children.is_empty());
    }

    #[test]
    fn test_multiline_preserves_breaks() {
        let nodes = multiline("a\n\nb\r\nc");
        let breaks = nodes.iter().filter(|n| matches!(n, Node::LineBreak)).count();
        assert_eq!(breaks, 3);
        assert_eq!(paragraph("", "a\n\nb\r\nc").text_content(), "a\n\nb\nc");
    }

    #[test]
    fn test_optional_section_omits_empty() {
        let accent = AccentColor::default();
        let empty: Vec<u8> = vec![];
        let built = optional_section(&empty, |_| {
            section(SectionKind::Languages, "Languages", Chrome::Ruled, &accent, Vec::<Node>::new())
        });
        assert!(built.is_none());
        assert!(optional_section(&[1], |_| Element::new("div")).is_some());
    }

    #[test]
    fn test_section_accent_on_heading_only() {
        let accent = AccentColor::parse("#ff0000").unwrap();
        let sec = section(
            SectionKind::Summary,
            "Summary",
            Chrome::Ruled,
            &accent,
            [paragraph("text-gray-700", "body")],
        );
        assert_eq!(sec.get_attr("data-section"), Some("summary"));
        let heading = sec.find_all(&|el| el.tag == "h2")[0];
        assert_eq!(heading.get_style("color"), Some("#ff0000"));
        let body = sec.find_all(&|el| el.tag == "p")[0];
        assert!(body.styles.is_empty());
    }

    #[test]
    fn test_joined() {
        assert_eq!(joined(["a", "b", "c"], BULLET_SEPARATOR), "a • b • c");
        assert_eq!(joined(Vec::<&str>::new(), ", "), "");
    }
}
