//! Rendered document tree produced by templates.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    Text { text: String },
    LineBreak,
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text {
            text: text.to_string(),
        }
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text { text }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(&'static str, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<(&'static str, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds space-separated utility classes.
    pub fn class(mut self, classes: &'static str) -> Self {
        self.classes.extend(classes.split_whitespace());
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.styles.push((property, value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Appends `child` only when it is `Some`.
    pub fn maybe(mut self, child: Option<Element>) -> Self {
        if let Some(child) = child {
            self.children.push(Node::Element(child));
        }
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text { text: text.into() })
    }
}

/// Query helpers for assertions over rendered trees.
#[cfg(test)]
impl Element {
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first, pre-order list of every element (including `self`) matching `pred`.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect(pred, &mut found);
        found
    }

    fn collect<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if pred(self) {
            out.push(self);
        }
        for child in &self.children {
            if let Node::Element(el) = child {
                el.collect(pred, out);
            }
        }
    }

    /// Concatenated text of the subtree; line breaks become `\n`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(el) => el.write_text(out),
                Node::Text { text } => out.push_str(text),
                Node::LineBreak => out.push('\n'),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_splits_on_whitespace() {
        let el = Element::new("div").class("font-bold  text-sm");
        assert_eq!(el.classes, vec!["font-bold", "text-sm"]);
    }

    #[test]
    fn test_find_all_walks_the_whole_tree() {
        let tree = Element::new("div")
            .child(Element::new("a").attr("href", "x"))
            .child(Element::new("p").child(Element::new("a").attr("href", "y")));
        let links = tree.find_all(&|el| el.tag == "a");
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].get_attr("href"), Some("y"));
    }

    #[test]
    fn test_text_content_renders_line_breaks() {
        let tree = Element::new("p")
            .text("one")
            .child(Node::LineBreak)
            .text("two");
        assert_eq!(tree.text_content(), "one\ntwo");
    }

    #[test]
    fn test_maybe_skips_none() {
        let tree = Element::new("div").maybe(None).maybe(Some(Element::new("span")));
        assert_eq!(tree.children.len(), 1);
    }

    #[test]
    fn test_serializes_with_node_type_tag() {
        let tree = Element::new("p").text("hi").child(Node::LineBreak);
        let json = serde_json::to_value(Node::from(tree)).unwrap();
        assert_eq!(json["type"], "element");
        assert_eq!(json["tag"], "p");
        assert_eq!(json["children"][0]["type"], "text");
        assert_eq!(json["children"][1]["type"], "line_break");
    }
}
