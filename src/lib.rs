// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

//! # TVDB Client
//!
//! Async client for TheTVDB in both of its dialects:
//!
//! - **Legacy XML API**: path-templated endpoints returning XML, plus a ZIP
//!   archive for the full series record
//! - **JSON API (v1.2.0)**: bearer-token endpoints returning JSON
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tvdb_client::{LegacyClient, ModernClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Legacy dialect: the API key is the path token
//!     let legacy = LegacyClient::new("API_KEY")?.with_language("de");
//!     let results = legacy.get_series_by_name("The Simpsons").await?;
//!
//!     // JSON dialect: log in once, the token is reused afterwards
//!     let modern = ModernClient::new("API_KEY")?;
//!     modern.authenticate().await?;
//!     let series = modern.get_series(71663).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┬──────────────────────────────────┐
//! │        LegacyClient          │          ModernClient            │
//! │  XML / ZIP, token in path    │  JSON, bearer token, Accept-Lang │
//! └──────────────┬───────────────┴─────────────────┬────────────────┘
//!                │            Pipeline              │
//!                ▼                                  ▼
//! ┌──────────┬─────────────────┬──────────────────┬─────────────────┐
//! │   HTTP   │    Classify     │     Decode       │   Normalize     │
//! ├──────────┼─────────────────┼──────────────────┼─────────────────┤
//! │ reqwest  │ status / empty  │ JSON passthrough │ extract path    │
//! │ one shot │ 404 page        │ XML → tree       │ ensure list     │
//! │          │ remote Error    │ ZIP → {lang}.xml │ attach episodes │
//! └──────────┴─────────────────┴──────────────────┴─────────────────┘
//! ```
//!
//! Every call returns `Result<Option<T>>`: `Ok(None)` means the service
//! answered successfully but had no data for the request.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod callback;
pub mod config;
pub mod decode;
pub mod error;
pub mod http;
pub mod legacy;
pub mod modern;
pub mod normalize;
pub mod pipeline;
pub mod remote_id;
pub mod types;

// Re-exports for convenience
pub use callback::{settle, spawn_with_callback};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use legacy::LegacyClient;
pub use modern::ModernClient;
pub use remote_id::RemoteProvider;
pub use types::{JsonObject, JsonValue, ResponseType, UpdateInterval};
