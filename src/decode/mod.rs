//! Response decoder module
//!
//! Supports: JSON, XML, ZIP-wrapped XML
//!
//! # Overview
//!
//! Every decoder turns a response body into a `serde_json::Value` so the
//! normalizers can work on one tree shape regardless of the wire format.

mod decoders;
mod types;

pub use decoders::{JsonDecoder, XmlDecoder, ZipDecoder, TEXT_KEY};
pub use types::{decoder_for, BodyDecoder};
