use crate::{Error, Label, Mode, Node, Result};
use quick_xml::escape::escape;
use std::fmt::{self, Write};

#[derive(Debug)]
struct Element<'n> {
    tag: &'n str,
    depth: usize,
    attributes: Vec<(&'n str, &'n str)>,
    text: Option<&'n str>,
    children: Vec<usize>,
}

enum Frame {
    Open(usize, usize),
    Close(usize, usize),
}

/// Writes the element tree rooted at `elements[0]` with an explicit stack, so
/// arbitrarily deep documents fit.
fn write_elements(elements: &[Element], out: &mut String) -> fmt::Result {
    let mut stack = vec![Frame::Open(0, 0)];

    while let Some(frame) = stack.pop() {
        let (i, level) = match frame {
            Frame::Open(i, level) => (i, level),
            Frame::Close(i, level) => {
                writeln!(out, "{}</{}>", "  ".repeat(level), elements[i].tag)?;
                continue;
            }
        };

        let element = &elements[i];
        write!(out, "{}<{}", "  ".repeat(level), element.tag)?;
        for (name, value) in &element.attributes {
            write!(out, " {name}=\"{}\"", escape(*value))?;
        }

        match (element.text, &element.children[..]) {
            (None, []) => writeln!(out, "/>")?,
            (Some(text), []) => writeln!(out, ">{}</{}>", escape(text), element.tag)?,
            (text, children) => {
                write!(out, ">")?;
                if let Some(text) = text {
                    write!(out, "{}", escape(text))?;
                }
                writeln!(out)?;

                stack.push(Frame::Close(i, level));
                stack.extend(children.iter().rev().map(|&c| Frame::Open(c, level + 1)));
            }
        }
    }

    Ok(())
}

/// Rebuilds an XML document out of a flat [Node] sequence, such as the one
/// produced by [patch][crate::patch].
///
/// The first element without a parent becomes the root. Every other node is
/// attached to the closest preceding element one level up whose tag equals the
/// node's parent label: elements become its children, attributes its attributes, and
/// terminal markers are dropped. In [text-aware][Mode::TextAware] mode non-empty
/// texts become the elements' text content.
pub fn serialize(nodes: &[Node], mode: Mode) -> Result<String> {
    let mut elements: Vec<Element> = Vec::new();

    for node in nodes {
        let parent = match node.parent.as_deref() {
            None => None,
            Some(tag) => {
                let enclosing = elements
                    .iter()
                    .rposition(|e| e.tag == tag && e.depth + 1 == node.depth);

                match enclosing {
                    Some(p) => Some(p),
                    None => {
                        return Err(Error::Serialize(format!(
                            "no `{tag}` element encloses {node}"
                        )))
                    }
                }
            }
        };

        match (&node.label, parent) {
            (Label::Tag(tag), parent) => {
                if parent.is_none() && !elements.is_empty() {
                    return Err(Error::Serialize(format!("second root element `{tag}`")));
                }

                let text = match mode {
                    Mode::LabelOnly => None,
                    Mode::TextAware => node.text.as_deref().filter(|t| !t.is_empty()),
                };

                if let Some(p) = parent {
                    let i = elements.len();
                    elements[p].children.push(i);
                }

                elements.push(Element {
                    tag: tag.as_str(),
                    depth: node.depth,
                    attributes: Vec::new(),
                    text,
                    children: Vec::new(),
                });
            }
            (Label::Attribute(name, value), Some(p)) => {
                elements[p].attributes.push((name.as_str(), value.as_str()));
            }
            (Label::Terminal, Some(_)) => {}
            (_, None) => {
                return Err(Error::Serialize(format!("{node} has no enclosing element")));
            }
        }
    }

    if elements.is_empty() {
        return Err(Error::Serialize("no root element".into()));
    }

    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    write_elements(&elements, &mut out).map_err(|e| Error::Serialize(e.to_string()))?;
    Ok(out)
}
