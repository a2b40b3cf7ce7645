//! Decoder implementations
//!
//! Each decoder handles a specific response format.

use super::types::BodyDecoder;
use crate::error::{Error, Result};
use crate::http::Body;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use serde_json::{Map, Value};
use std::io::{Cursor, Read};
use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

/// Key under which text is kept for elements that also have children
pub const TEXT_KEY: &str = "_";

// ============================================================================
// JSON Decoder
// ============================================================================

/// JSON decoder, passes the parsed document through unchanged
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// Create a new JSON decoder
    pub fn new() -> Self {
        Self
    }
}

impl BodyDecoder for JsonDecoder {
    fn decode(&self, body: &Body) -> Result<Value> {
        let parsed = match body {
            Body::Text(text) => serde_json::from_str(text),
            Body::Bytes(bytes) => serde_json::from_slice(bytes),
        };
        parsed.map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))
    }
}

// ============================================================================
// XML Decoder
// ============================================================================

/// XML decoder producing a JSON tree.
///
/// Attributes are ignored, text is trimmed and whitespace-normalized, empty
/// elements become `null`, and only repeated siblings become arrays. The
/// root element is kept as the single top-level key.
#[derive(Debug, Clone, Default)]
pub struct XmlDecoder;

impl XmlDecoder {
    /// Create a new XML decoder
    pub fn new() -> Self {
        Self
    }
}

impl BodyDecoder for XmlDecoder {
    fn decode(&self, body: &Body) -> Result<Value> {
        match body {
            Body::Text(text) => xml_to_json(text),
            Body::Bytes(bytes) => xml_to_json(&String::from_utf8_lossy(bytes)),
        }
    }
}

/// Element being built while its end tag has not been seen yet
struct Frame {
    name: String,
    text: String,
    children: Map<String, Value>,
}

impl Frame {
    fn new(start: &BytesStart<'_>) -> Self {
        Self {
            name: element_name(start),
            text: String::new(),
            children: Map::new(),
        }
    }

    fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn add_child(&mut self, name: String, value: Value) {
        match self.children.get_mut(&name) {
            Some(Value::Array(existing)) => existing.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                self.children.insert(name, value);
            }
        }
    }

    fn finish(self) -> (String, Value) {
        let text = normalize_whitespace(&self.text);
        let value = if self.children.is_empty() {
            if text.is_empty() {
                Value::Null
            } else {
                Value::String(text)
            }
        } else {
            let mut children = self.children;
            if !text.is_empty() {
                children.insert(TEXT_KEY.to_string(), Value::String(text));
            }
            Value::Object(children)
        };
        (self.name, value)
    }
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Attach a finished element to its parent, or make it the document root
fn attach(
    stack: &mut [Frame],
    root: &mut Option<(String, Value)>,
    name: String,
    value: Value,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.add_child(name, value);
        return Ok(());
    }

    if root.is_some() {
        return Err(Error::xml(format!(
            "Unexpected second root element <{name}>"
        )));
    }
    *root = Some((name, value));
    Ok(())
}

fn xml_to_json(xml: &str) -> Result<Value> {
    // Chunks are kept verbatim; `Frame::finish` trims and collapses whitespace
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<(String, Value)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => stack.push(Frame::new(&start)),
            Ok(Event::Empty(start)) => {
                attach(&mut stack, &mut root, element_name(&start), Value::Null)?;
            }
            Ok(Event::End(_)) => {
                let frame = stack
                    .pop()
                    .ok_or_else(|| Error::xml("Closing tag without matching opening tag"))?;
                let (name, value) = frame.finish();
                attach(&mut stack, &mut root, name, value)?;
            }
            Ok(Event::Text(text)) => {
                let text = text
                    .unescape()
                    .map_err(|e| Error::xml(format!("Invalid text content: {e}")))?;
                match stack.last_mut() {
                    Some(frame) => frame.push_text(&text),
                    None if text.trim().is_empty() => {}
                    None => return Err(Error::xml("Text outside of the root element")),
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(frame) = stack.last_mut() {
                    let raw = data.into_inner();
                    frame.push_text(&String::from_utf8_lossy(&raw));
                }
            }
            Ok(Event::Eof) => break,
            // Declarations, comments, processing instructions, doctypes
            Ok(_) => {}
            Err(e) => {
                return Err(Error::xml(format!(
                    "Malformed XML at position {}: {e}",
                    reader.buffer_position()
                )))
            }
        }
    }

    if let Some(open) = stack.last() {
        return Err(Error::xml(format!("Unclosed element <{}>", open.name)));
    }

    let (name, value) = root.ok_or_else(|| Error::xml("Document has no root element"))?;
    let mut document = Map::new();
    document.insert(name, value);
    Ok(Value::Object(document))
}

// ============================================================================
// ZIP Decoder
// ============================================================================

/// Extracts one XML entry from a ZIP archive and decodes it
#[derive(Debug, Clone)]
pub struct ZipDecoder {
    /// Archive entry to extract
    entry: String,
}

impl ZipDecoder {
    /// Create a decoder for an explicit entry name
    pub fn new(entry: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
        }
    }

    /// Create a decoder for the `<language>.xml` entry
    pub fn for_language(language: &str) -> Self {
        Self::new(format!("{language}.xml"))
    }

    /// Name of the entry this decoder extracts
    pub fn entry(&self) -> &str {
        &self.entry
    }

    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(|e| Error::ZipArchive {
            message: e.to_string(),
        })?;

        let mut file = match archive.by_name(&self.entry) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => {
                return Err(Error::MissingZipEntry {
                    entry: self.entry.clone(),
                })
            }
            Err(e) => {
                return Err(Error::ZipArchive {
                    message: e.to_string(),
                })
            }
        };

        let mut xml = String::new();
        file.read_to_string(&mut xml).map_err(|e| Error::ZipArchive {
            message: format!("Failed to read '{}': {e}", self.entry),
        })?;

        debug!("Extracted {} ({} bytes) from archive", self.entry, xml.len());
        Ok(xml)
    }
}

impl BodyDecoder for ZipDecoder {
    fn decode(&self, body: &Body) -> Result<Value> {
        let xml = match body {
            Body::Bytes(bytes) => self.extract(bytes)?,
            Body::Text(text) => self.extract(text.as_bytes())?,
        };
        xml_to_json(&xml)
    }
}
