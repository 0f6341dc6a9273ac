//! HTML serialization of rendered trees.

use std::fmt::Write;

use crate::render::registry::RenderedDocument;
use crate::render::tree::{Element, Node};

const FONT_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800&family=Lora:ital,wght@0,400;0,700;1,400&family=Source+Code+Pro:wght@400;600&display=swap";
const TAILWIND_SCRIPT: &str = "https://cdn.tailwindcss.com";

/// Serializes `root` as an HTML fragment.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, &mut out);
    out
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(el.tag);

    if !el.classes.is_empty() {
        out.push_str(" class=\"");
        escape_into(&el.classes.join(" "), out);
        out.push('"');
    }
    for (name, value) in &el.attrs {
        let _ = write!(out, " {name}=\"");
        escape_into(value, out);
        out.push('"');
    }
    if !el.styles.is_empty() {
        let css = el
            .styles
            .iter()
            .map(|(prop, value)| format!("{prop}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");
        out.push_str(" style=\"");
        escape_into(&css, out);
        out.push('"');
    }
    out.push('>');

    for child in &el.children {
        match child {
            Node::Element(child) => write_element(child, out),
            Node::Text { text } => escape_into(text, out),
            Node::LineBreak => out.push_str("<br>"),
        }
    }

    let _ = write!(out, "</{}>", el.tag);
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

/// A self-contained A4 page for the PDF renderer.
pub fn standalone_page(doc: &RenderedDocument, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="preconnect" href="https://fonts.googleapis.com">
<link rel="stylesheet" href="{fonts}">
<script src="{tailwind}"></script>
<style>
@page {{ size: A4; margin: 0; }}
html, body {{ margin: 0; padding: 0; background: #ffffff; }}
#cv-preview-content {{ width: 210mm; min-height: 297mm; }}
.font-serif-body-sans h1, .font-serif-body-sans h2, .font-serif-body-sans h3 {{ font-family: {heading}; }}
</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
        fonts = escape(FONT_STYLESHEET),
        tailwind = TAILWIND_SCRIPT,
        heading = doc.font.heading_family(),
        body = to_html(&doc.root),
    )
}
