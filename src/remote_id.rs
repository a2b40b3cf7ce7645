//! Remote identifier routing
//!
//! Series can be looked up by a foreign key from another provider. The
//! provider is inferred from the shape of the identifier by an ordered list
//! of recognizers, which is walked from the last entry to the first. The
//! first recognizer that matches wins.

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// External identifier namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteProvider {
    /// IMDB title ids (`tt0898266`)
    Imdb,
    /// zap2it ids (`EP00931182`)
    Zap2it,
}

impl RemoteProvider {
    /// Query parameter name used by the remote service
    pub fn query_key(self) -> &'static str {
        match self {
            RemoteProvider::Imdb => "imdbid",
            RemoteProvider::Zap2it => "zap2it",
        }
    }

    /// Classify an identifier, failing when no recognizer matches
    pub fn classify(id: &str) -> Result<Self> {
        classify(id).ok_or_else(|| Error::UnknownRemoteProvider { id: id.to_string() })
    }
}

impl fmt::Display for RemoteProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_key())
    }
}

/// Recognizers in registration order
static RECOGNIZERS: LazyLock<Vec<(RemoteProvider, Regex)>> = LazyLock::new(|| {
    vec![
        (RemoteProvider::Imdb, Regex::new(r"(?i)^tt").unwrap()),
        (RemoteProvider::Zap2it, Regex::new(r"(?i)^ep").unwrap()),
    ]
});

/// Find the provider for an identifier.
///
/// Recognizers are tried from the last registered to the first.
pub fn classify(id: &str) -> Option<RemoteProvider> {
    RECOGNIZERS
        .iter()
        .rev()
        .find(|(_, pattern)| pattern.is_match(id))
        .map(|(provider, _)| *provider)
}
