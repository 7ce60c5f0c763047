use crate::{Config, Error, Mode, Node, Result};
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesRef, BytesStart, Event};
use quick_xml::Reader;

struct Open {
    tag: String,
    position: usize,
    depth: usize,
    text: String,
    has_children: bool,
    text_closed: bool,
}

struct Linearizer<'c> {
    config: &'c Config,
    nodes: Vec<Node>,
    open: Vec<Open>,
}

impl Linearizer<'_> {
    fn with_text(&self, node: Node, text: &str) -> Node {
        match self.config.mode {
            Mode::LabelOnly => node,
            Mode::TextAware => node.with_text(text),
        }
    }

    fn start(&mut self, tag: String, attributes: Vec<(String, String)>) -> Result<()> {
        if self.open.is_empty() && !self.nodes.is_empty() {
            return Err(Error::Parse(format!("second root element `{tag}`")));
        }

        let depth = self.open.len();
        let parent = self.open.last_mut().map(|p| {
            p.has_children = true;
            p.text_closed = true;
            p.tag.as_str()
        });

        let element = Node::element(parent, &tag, depth);
        let element = self.with_text(element, "");
        let position = self.nodes.len();
        self.nodes.push(element);

        if self.config.include_attributes {
            for (name, value) in attributes {
                let attribute = Node::attribute(&tag, name, &value, depth + 1);
                let attribute = self.with_text(attribute, &value);
                self.nodes.push(attribute);
            }
        }

        self.open.push(Open {
            tag,
            position,
            depth,
            text: String::new(),
            has_children: false,
            text_closed: false,
        });

        Ok(())
    }

    /// Only text preceding the first child element, comment or processing
    /// instruction belongs to an element.
    fn text(&mut self, text: &str) {
        if let Some(top) = self.open.last_mut().filter(|o| !o.text_closed) {
            top.text.push_str(text);
        }
    }

    fn close_text(&mut self) {
        if let Some(top) = self.open.last_mut() {
            top.text_closed = true;
        }
    }

    fn end(&mut self) -> Result<()> {
        let top = self
            .open
            .pop()
            .ok_or_else(|| Error::Parse("unexpected end tag".into()))?;

        if self.config.mode == Mode::TextAware {
            self.nodes[top.position].text = Some(top.text.trim().to_owned());
        }

        if !top.has_children {
            let terminal = Node::terminal(&top.tag, top.depth + 1);
            let terminal = self.with_text(terminal, "");
            self.nodes.push(terminal);
        }

        Ok(())
    }

    fn finish(self) -> Result<Vec<Node>> {
        if let Some(top) = self.open.last() {
            return Err(Error::Parse(format!("unclosed element `{}`", top.tag)));
        }

        if self.nodes.is_empty() {
            return Err(Error::Parse("no root element".into()));
        }

        Ok(self.nodes)
    }
}

fn parse_start(reader: &Reader<&[u8]>, e: &BytesStart) -> Result<(String, Vec<(String, String)>)> {
    let tag = reader
        .decoder()
        .decode(e.name().as_ref())
        .map_err(|e| Error::Parse(e.to_string()))?
        .into_owned();

    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| Error::Parse(format!("attribute error: {e}")))?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }

        let name = reader
            .decoder()
            .decode(attr.key.as_ref())
            .map_err(|e| Error::Parse(e.to_string()))?
            .into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::Parse(e.to_string()))?
            .into_owned();
        attributes.push((name, value));
    }

    Ok((tag, attributes))
}

fn resolve_reference(reader: &Reader<&[u8]>, e: &BytesRef) -> Result<String> {
    if let Some(c) = e.resolve_char_ref().map_err(|e| Error::Parse(e.to_string()))? {
        return Ok(c.to_string());
    }

    let name = reader
        .decoder()
        .decode(e)
        .map_err(|e| Error::Parse(e.to_string()))?;

    resolve_predefined_entity(&name)
        .map(str::to_owned)
        .ok_or_else(|| Error::Parse(format!("unknown entity `&{name};`")))
}

/// Turns an XML document into its pre-order [Node] sequence.
///
/// Each element is followed by one node per attribute (unless
/// [Config::include_attributes] is unset), then by its child elements, or by a
/// [terminal][crate::Label::Terminal] marker if it has none. In
/// [text-aware][Mode::TextAware] mode elements carry the trimmed text preceding
/// their first child element, comment or processing instruction, attributes
/// carry their value and terminal markers an empty text. Namespace declarations
/// are not attributes.
pub fn linearize(xml: &str, config: &Config) -> Result<Vec<Node>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text_start = false;
    reader.config_mut().trim_text_end = false;

    let mut linearizer = Linearizer {
        config,
        nodes: Vec::new(),
        open: Vec::new(),
    };

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let (tag, attributes) = parse_start(&reader, &e)?;
                linearizer.start(tag, attributes)?;
            }
            Ok(Event::Empty(e)) => {
                let (tag, attributes) = parse_start(&reader, &e)?;
                linearizer.start(tag, attributes)?;
                linearizer.end()?;
            }
            Ok(Event::End(_)) => linearizer.end()?,
            Ok(Event::Text(e)) => {
                let raw = std::str::from_utf8(e.as_ref()).map_err(|e| Error::Parse(e.to_string()))?;
                let text = unescape(raw).map_err(|e| Error::Parse(e.to_string()))?;
                linearizer.text(&text);
            }
            Ok(Event::CData(e)) => linearizer.text(&String::from_utf8_lossy(e.as_ref())),
            Ok(Event::GeneralRef(e)) => linearizer.text(&resolve_reference(&reader, &e)?),
            Ok(Event::Comment(_) | Event::PI(_)) => linearizer.close_text(),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(Error::Parse(format!(
                    "{e} at byte {}",
                    reader.error_position()
                )))
            }
        }
    }

    linearizer.finish()
}
