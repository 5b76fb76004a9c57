//! Generic XML tree produced from carrier responses.
//!
//! Tags are lower-cased, attributes are dropped, and the root element is
//! unwrapped: `<Resp><Brand>..</Brand></Resp>` becomes `{brand: {..}}`.
//! Repeated sibling tags collapse into a [`XmlValue::List`]; a single child
//! stays a bare value, which is why readers must accept both shapes.

use std::collections::BTreeMap;

use quick_xml::events::Event;
use quick_xml::reader::Reader;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum XmlError {
    #[error("malformed XML: {0}")]
    Malformed(String),

    #[error("XML document ended inside <{0}>")]
    UnexpectedEof(String),

    #[error("XML document has no root element")]
    NoRoot,
}

/// Untyped XML node: leaf text, repeated elements, or a record of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlValue {
    Text(String),
    List(Vec<XmlValue>),
    Map(BTreeMap<String, XmlValue>),
}

impl XmlValue {
    /// Look up a child element, looking through a single-element list wrapper.
    pub fn get(&self, key: &str) -> Option<&XmlValue> {
        match self {
            Self::Map(children) => children.get(key),
            Self::List(items) if items.len() == 1 => items[0].get(key),
            _ => None,
        }
    }

    /// Follow a chain of child elements.
    pub fn path(&self, keys: &[&str]) -> Option<&XmlValue> {
        keys.iter().try_fold(self, |node, key| node.get(key))
    }

    /// Leaf text, looking through a single-element list wrapper.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(items) if items.len() == 1 => items[0].text(),
            _ => None,
        }
    }

    /// The record behind this node, looking through a single-element list wrapper.
    pub fn as_map(&self) -> Option<&BTreeMap<String, XmlValue>> {
        match self {
            Self::Map(children) => Some(children),
            Self::List(items) if items.len() == 1 => items[0].as_map(),
            _ => None,
        }
    }

    /// Normalize "one item or many" to a slice-like list of items.
    pub fn items(&self) -> Vec<&XmlValue> {
        match self {
            Self::List(items) => items.iter().collect(),
            other => vec![other],
        }
    }

    /// `true` for blank text, an empty list, or a record without children.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::List(items) => items.iter().all(XmlValue::is_empty),
            Self::Map(children) => children.is_empty(),
        }
    }
}

/// Whether a response should be parsed as XML, by content type or by a leading declaration.
pub fn looks_like_xml(content_type: Option<&str>, body: &str) -> bool {
    if content_type.is_some_and(|value| value.to_ascii_lowercase().contains("xml")) {
        return true;
    }
    body.trim_start().starts_with("<?xml")
}

struct Frame {
    name: String,
    children: BTreeMap<String, XmlValue>,
    text: String,
}

impl Frame {
    fn new(name: String) -> Self {
        Self {
            name,
            children: BTreeMap::new(),
            text: String::new(),
        }
    }

    fn into_value(self) -> XmlValue {
        if self.children.is_empty() {
            XmlValue::Text(self.text.trim().to_owned())
        } else {
            XmlValue::Map(self.children)
        }
    }
}

fn insert_child(children: &mut BTreeMap<String, XmlValue>, name: String, value: XmlValue) {
    match children.remove(&name) {
        None => {
            children.insert(name, value);
        }
        Some(XmlValue::List(mut items)) => {
            items.push(value);
            children.insert(name, XmlValue::List(items));
        }
        Some(existing) => {
            children.insert(name, XmlValue::List(vec![existing, value]));
        }
    }
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_lowercase()
}

/// Parse an XML document into an [`XmlValue`] rooted at the root element's content.
pub fn parse_xml(xml: &str) -> Result<XmlValue, XmlError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Frame> = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|err| XmlError::Malformed(err.to_string()))?;

        match event {
            Event::Start(start) => {
                stack.push(Frame::new(tag_name(start.local_name().as_ref())));
            }
            Event::Empty(empty) => {
                let name = tag_name(empty.local_name().as_ref());
                match stack.last_mut() {
                    Some(parent) => {
                        insert_child(&mut parent.children, name, XmlValue::Text(String::new()));
                    }
                    None => return Ok(XmlValue::Text(String::new())),
                }
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|err| XmlError::Malformed(err.to_string()))?;
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&text);
                }
            }
            Event::CData(data) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::End(_) => {
                let Some(frame) = stack.pop() else {
                    return Err(XmlError::Malformed("unbalanced closing tag".to_owned()));
                };
                let name = frame.name.clone();
                let value = frame.into_value();
                match stack.last_mut() {
                    Some(parent) => insert_child(&mut parent.children, name, value),
                    None => return Ok(value),
                }
            }
            Event::Eof => {
                return match stack.pop() {
                    Some(frame) => Err(XmlError::UnexpectedEof(frame.name)),
                    None => Err(XmlError::NoRoot),
                };
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> XmlValue {
        XmlValue::Text(value.to_owned())
    }

    #[test]
    fn unwraps_root_and_lowercases_tags() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
            <BrandResponse><Brand><BrandId>B1</BrandId><IsMain>true</IsMain></Brand></BrandResponse>"#;
        let tree = parse_xml(xml).unwrap();
        assert_eq!(tree.path(&["brand", "brandid"]), Some(&text("B1")));
        assert_eq!(tree.path(&["brand", "ismain"]).and_then(XmlValue::text), Some("true"));
    }

    #[test]
    fn repeated_siblings_become_a_list_in_document_order() {
        let xml = "<Brands><Brand><BrandId>B1</BrandId></Brand><Brand><BrandId>B2</BrandId></Brand></Brands>";
        let tree = parse_xml(xml).unwrap();
        let items = tree.get("brand").unwrap().items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].get("brandid").and_then(XmlValue::text), Some("B1"));
        assert_eq!(items[1].get("brandid").and_then(XmlValue::text), Some("B2"));
    }

    #[test]
    fn single_child_is_not_wrapped() {
        let tree = parse_xml("<Brands><Brand><BrandId>B1</BrandId></Brand></Brands>").unwrap();
        assert!(matches!(tree.get("brand"), Some(XmlValue::Map(_))));
        assert_eq!(tree.get("brand").unwrap().items().len(), 1);
    }

    #[test]
    fn accessors_look_through_single_element_lists() {
        let mut record = BTreeMap::new();
        record.insert("ismain".to_owned(), XmlValue::List(vec![text("true")]));
        let node = XmlValue::List(vec![XmlValue::Map(record)]);
        assert_eq!(node.get("ismain").and_then(XmlValue::text), Some("true"));
        assert!(node.as_map().is_some());
    }

    #[test]
    fn unescapes_entities_and_keeps_cdata() {
        let xml = "<R><Name>A &amp; B</Name><Flow><![CDATA[<b>opt in</b>]]></Flow></R>";
        let tree = parse_xml(xml).unwrap();
        assert_eq!(tree.get("name").and_then(XmlValue::text), Some("A & B"));
        assert_eq!(tree.get("flow").and_then(XmlValue::text), Some("<b>opt in</b>"));
    }

    #[test]
    fn empty_elements_are_blank_text() {
        let tree = parse_xml("<R><Website/><City></City></R>").unwrap();
        assert_eq!(tree.get("website"), Some(&text("")));
        assert_eq!(tree.get("city"), Some(&text("")));
        assert!(tree.get("website").unwrap().is_empty());
    }

    #[test]
    fn ignores_attributes() {
        let tree = parse_xml(r#"<R><Tn type="local">+19195551234</Tn></R>"#).unwrap();
        assert_eq!(tree.get("tn").and_then(XmlValue::text), Some("+19195551234"));
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(
            parse_xml("<R><A>1</B></R>"),
            Err(XmlError::Malformed(_))
        ));
        assert!(parse_xml("<R><A>1</A>").is_err());
        assert_eq!(parse_xml("   "), Err(XmlError::NoRoot));
    }

    #[test]
    fn sniffs_xml_by_header_or_declaration() {
        assert!(looks_like_xml(Some("application/xml; charset=utf-8"), ""));
        assert!(looks_like_xml(Some("text/XML"), ""));
        assert!(looks_like_xml(None, "  <?xml version=\"1.0\"?><R/>"));
        assert!(!looks_like_xml(Some("application/json"), "{}"));
        assert!(!looks_like_xml(None, "<R/>"));
    }
}
