// src/modules/render/markup.rs
//
// Structured markup tree. Resource fields only ever enter the document as
// `Node::Text` or attribute values, both escaped on serialization, so record
// content can never smuggle markup in.

use std::fmt::Write;

const VOID_TAGS: &[&str] = &["img", "br", "hr", "input", "meta"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element {
        tag: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<Node>,
    },
    Text(String),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Node {
        Node::Text(content.into())
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(content) => out.push_str(&escape_text(content)),
            Node::Element {
                tag,
                attrs,
                children,
            } => {
                write!(out, "<{}", tag).expect("write to String cannot fail");
                for (name, value) in attrs {
                    write!(out, " {}=\"{}\"", name, escape_attr(value))
                        .expect("write to String cannot fail");
                }
                if children.is_empty() && VOID_TAGS.contains(tag) {
                    out.push_str(">");
                    return;
                }
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                write!(out, "</{}>", tag).expect("write to String cannot fail");
            }
        }
    }
}

/// Builder for element nodes.
pub fn el(tag: &'static str) -> ElementBuilder {
    ElementBuilder {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

pub struct ElementBuilder {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl ElementBuilder {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn id(self, value: impl Into<String>) -> Self {
        self.attr("id", value)
    }

    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::text(content))
    }

    pub fn build(self) -> Node {
        Node::Element {
            tag: self.tag,
            attrs: self.attrs,
            children: self.children,
        }
    }
}

fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
