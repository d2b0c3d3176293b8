//! In-memory XML node tree.
//!
//! The inference core works against this small element/attribute/text/
//! CDATA abstraction rather than a parser API, so collaborators may hand
//! over trees built elsewhere. [`parse_document`] builds one from XML
//! text with quick-xml.

use quick_xml::Reader;
use quick_xml::events::Event;

use super::ImportError;
use crate::models::XmlHeader;

/// One XML element: tag name, attributes in document order, child
/// elements, and the element's own text / CDATA content.
///
/// `text`/`cdata` distinguish absent (`None`) from present-but-empty
/// (`Some("")`); attribute values do the same through
/// [`XmlNode::attribute`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
    pub text: Option<String>,
    pub cdata: Option<String>,
}

impl XmlNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Attribute value lookup, case-folded when `case_sensitive` is off.
    /// Returns `Some("")` for a present-but-empty attribute.
    pub fn attribute(&self, name: &str, case_sensitive: bool) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| {
                if case_sensitive {
                    k == name
                } else {
                    k.eq_ignore_ascii_case(name)
                }
            })
            .map(|(_, v)| v.as_str())
    }
}

/// Parses an XML string into its header and root element.
pub fn parse_document(content: &str) -> Result<(XmlHeader, XmlNode), ImportError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut header = XmlHeader::default();
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        match reader.read_event() {
            Err(source) => {
                return Err(ImportError::Parse {
                    position: reader.error_position(),
                    source,
                });
            }
            Ok(Event::Decl(decl)) => {
                if let Ok(version) = decl.version() {
                    header.version = Some(String::from_utf8_lossy(&version).into_owned());
                }
                if let Some(Ok(encoding)) = decl.encoding() {
                    header.encoding = Some(String::from_utf8_lossy(&encoding).into_owned());
                }
            }
            Ok(Event::Start(start)) => {
                let node = node_from_start(&start)?;
                stack.push(node);
            }
            Ok(Event::Empty(start)) => {
                let node = node_from_start(&start)?;
                attach(&mut stack, &mut root, node)?;
            }
            Ok(Event::End(_)) => {
                let Some(node) = stack.pop() else {
                    return Err(ImportError::Malformed(
                        "end tag without matching start tag".to_string(),
                    ));
                };
                attach(&mut stack, &mut root, node)?;
            }
            Ok(Event::Text(text)) => {
                if let Some(current) = stack.last_mut() {
                    let unescaped = text.unescape().map_err(|source| ImportError::Parse {
                        position: reader.error_position(),
                        source,
                    })?;
                    current
                        .text
                        .get_or_insert_with(String::new)
                        .push_str(&unescaped);
                }
            }
            Ok(Event::CData(cdata)) => {
                if let Some(current) = stack.last_mut() {
                    let content = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                    current
                        .cdata
                        .get_or_insert_with(String::new)
                        .push_str(&content);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
        }
    }

    if !stack.is_empty() {
        return Err(ImportError::Malformed(
            "unclosed element at end of document".to_string(),
        ));
    }
    let root = root.ok_or(ImportError::MissingRoot)?;
    Ok((header, root))
}

fn node_from_start(start: &quick_xml::events::BytesStart<'_>) -> Result<XmlNode, ImportError> {
    let mut node = XmlNode::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
    for attribute in start.attributes() {
        let attribute = attribute
            .map_err(|e| ImportError::Malformed(format!("invalid attribute in <{}>: {e}", node.name)))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| ImportError::Malformed(format!("invalid attribute value in <{}>: {e}", node.name)))?
            .into_owned();
        node.attributes.push((key, value));
    }
    Ok(node)
}

fn attach(
    stack: &mut [XmlNode],
    root: &mut Option<XmlNode>,
    node: XmlNode,
) -> Result<(), ImportError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        Ok(())
    } else if root.is_none() {
        *root = Some(node);
        Ok(())
    } else {
        Err(ImportError::Malformed(
            "multiple top-level elements".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_tree() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?><root a="1"><child/>text</root>"#;
        let (header, root) = parse_document(xml).unwrap();
        assert_eq!(header.version.as_deref(), Some("1.0"));
        assert_eq!(header.encoding.as_deref(), Some("UTF-8"));
        assert_eq!(root.name, "root");
        assert_eq!(root.attributes, vec![("a".to_string(), "1".to_string())]);
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.text.as_deref(), Some("text"));
    }

    #[test]
    fn cdata_kept_separate_from_text() {
        let xml = "<a>before<![CDATA[raw <data>]]></a>";
        let (_, root) = parse_document(xml).unwrap();
        assert_eq!(root.text.as_deref(), Some("before"));
        assert_eq!(root.cdata.as_deref(), Some("raw <data>"));
    }

    #[test]
    fn empty_cdata_is_present_but_empty() {
        let (_, root) = parse_document("<a><![CDATA[]]></a>").unwrap();
        assert_eq!(root.cdata.as_deref(), Some(""));
        assert_eq!(root.text, None);
    }

    #[test]
    fn whitespace_only_text_is_absent() {
        let (_, root) = parse_document("<a>  \n  </a>").unwrap();
        assert_eq!(root.text, None);
    }

    #[test]
    fn attribute_lookup_respects_case_flag() {
        let (_, root) = parse_document(r#"<a Val="x"/>"#).unwrap();
        assert_eq!(root.attribute("Val", true), Some("x"));
        assert_eq!(root.attribute("val", true), None);
        assert_eq!(root.attribute("val", false), Some("x"));
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(parse_document("<a><b></a>").is_err());
        assert!(matches!(parse_document(""), Err(ImportError::MissingRoot)));
    }

    #[test]
    fn entity_escapes_are_resolved() {
        let (_, root) = parse_document(r#"<a v="&lt;x&gt;">&amp;</a>"#).unwrap();
        assert_eq!(root.attribute("v", true), Some("<x>"));
        assert_eq!(root.text.as_deref(), Some("&"));
    }
}
