//! A generic XML element tree, the intermediate form between a layout and
//! its persisted document.

use std::borrow::Cow;

use dockyard_common::LayoutFormatError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

/// One element with its attributes in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn set(&mut self, name: &str, value: impl ToString) {
        self.attributes.push((name.to_string(), value.to_string()));
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    // -- Typed attribute access --

    pub fn required(&self, name: &str) -> Result<&str, LayoutFormatError> {
        self.get(name)
            .ok_or_else(|| LayoutFormatError::MissingAttribute {
                tag: self.tag.clone(),
                attribute: name.to_string(),
            })
    }

    /// Parse an optional attribute with `parse`. A present value that does
    /// not parse is an error.
    pub fn parsed<T>(
        &self,
        name: &str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<Option<T>, LayoutFormatError> {
        let Some(raw) = self.get(name) else {
            return Ok(None);
        };
        parse(raw)
            .map(Some)
            .ok_or_else(|| self.invalid(name, raw))
    }

    pub fn parsed_required<T>(
        &self,
        name: &str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<T, LayoutFormatError> {
        let raw = self.required(name)?;
        parse(raw).ok_or_else(|| self.invalid(name, raw))
    }

    pub fn flag(&self, name: &str, default: bool) -> Result<bool, LayoutFormatError> {
        Ok(self.parsed(name, parse_bool)?.unwrap_or(default))
    }

    pub fn number(&self, name: &str) -> Result<Option<f64>, LayoutFormatError> {
        self.parsed(name, parse_f64)
    }

    pub fn invalid(&self, name: &str, value: &str) -> LayoutFormatError {
        LayoutFormatError::InvalidAttribute {
            tag: self.tag.clone(),
            attribute: name.to_string(),
            value: value.to_string(),
        }
    }

    // =========================================================================
    // XML
    // =========================================================================

    /// Parse a document and return its root element.
    pub fn parse(xml: &str) -> Result<Element, LayoutFormatError> {
        let xml = xml.trim_start_matches('\u{feff}');
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    stack.push(Self::from_start(&e)?);
                }
                Ok(Event::Empty(e)) => {
                    let element = Self::from_start(&e)?;
                    Self::close(&mut stack, &mut root, element)?;
                }
                Ok(Event::End(_)) => {
                    if let Some(element) = stack.pop() {
                        Self::close(&mut stack, &mut root, element)?;
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(LayoutFormatError::Xml(format!(
                        "at byte {}: {e}",
                        reader.error_position()
                    )))
                }
                _ => {} // Decl, Text, Comment, PI, DocType
            }
        }

        if let Some(open) = stack.last() {
            return Err(LayoutFormatError::Xml(format!(
                "document ends inside <{}>",
                open.tag
            )));
        }
        root.ok_or(LayoutFormatError::MissingRoot)
    }

    fn from_start(e: &BytesStart<'_>) -> Result<Element, LayoutFormatError> {
        let mut element = Element::new(String::from_utf8_lossy(e.name().as_ref()));
        for attr in e.attributes() {
            let attr = attr.map_err(|err| {
                LayoutFormatError::Xml(format!("attribute error in <{}>: {err}", element.tag))
            })?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let raw = String::from_utf8_lossy(&attr.value);
            let value = quick_xml::escape::unescape(&raw)
                .map(Cow::into_owned)
                .map_err(|err| {
                    LayoutFormatError::Xml(format!("bad escape in <{}> {key}: {err}", element.tag))
                })?;
            element.attributes.push((key, value));
        }
        Ok(element)
    }

    fn close(
        stack: &mut [Element],
        root: &mut Option<Element>,
        element: Element,
    ) -> Result<(), LayoutFormatError> {
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None if root.is_none() => *root = Some(element),
            None => {
                return Err(LayoutFormatError::Xml(format!(
                    "second root element <{}>",
                    element.tag
                )))
            }
        }
        Ok(())
    }

    /// Render as an indented document with an XML declaration.
    pub fn to_xml(&self) -> Result<String, LayoutFormatError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .map_err(write_error)?;
        self.write_into(&mut writer)?;
        String::from_utf8(writer.into_inner())
            .map_err(|e| LayoutFormatError::Xml(e.to_string()))
    }

    fn write_into(&self, writer: &mut Writer<Vec<u8>>) -> Result<(), LayoutFormatError> {
        let mut start = BytesStart::new(self.tag.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }
        if self.children.is_empty() {
            return writer.write_event(Event::Empty(start)).map_err(write_error);
        }
        writer.write_event(Event::Start(start)).map_err(write_error)?;
        for child in &self.children {
            child.write_into(writer)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(self.tag.as_str())))
            .map_err(write_error)
    }
}

fn write_error(err: impl std::fmt::Display) -> LayoutFormatError {
    LayoutFormatError::Xml(err.to_string())
}

/// `True`/`False`, case-insensitive.
pub fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

pub fn format_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

pub fn parse_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
