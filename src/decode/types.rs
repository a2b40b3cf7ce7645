//! Decoder types and traits
//!
//! Defines the core decoder abstraction and the factory that picks a decoder
//! for a response type.

use super::decoders::{JsonDecoder, XmlDecoder, ZipDecoder};
use crate::error::Result;
use crate::http::Body;
use crate::types::ResponseType;
use serde_json::Value;

/// Trait for decoding response bodies into a JSON tree
pub trait BodyDecoder: Send + Sync {
    /// Decode the full response body
    fn decode(&self, body: &Body) -> Result<Value>;
}

/// Pick the decoder for a response type.
///
/// `language` names the archive entry (`<language>.xml`) for ZIP bodies and
/// is ignored otherwise.
pub fn decoder_for(response_type: ResponseType, language: &str) -> Box<dyn BodyDecoder> {
    match response_type {
        ResponseType::Json => Box::new(JsonDecoder::new()),
        ResponseType::Xml => Box::new(XmlDecoder::new()),
        ResponseType::Zip => Box::new(ZipDecoder::for_language(language)),
    }
}
