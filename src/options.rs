use crate::method::Method;
use crate::origin::Origin;
use crate::util::is_http_token;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration record for a [`crate::CorsPolicy`].
///
/// Every optional field distinguishes "absent" from "empty"; both suppress the
/// corresponding header. Sets keep insertion order, which is the order values are
/// joined in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsOptions {
    pub origin: Origin,
    pub methods: Option<IndexSet<Method>>,
    pub allow_headers: Option<IndexSet<String>>,
    pub expose_headers: Option<IndexSet<String>>,
    pub credentials: Option<bool>,
    pub max_age: Option<u64>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("exact origin must not be empty")]
    EmptyOrigin,
    #[error("origin `{0}` contains whitespace or control characters")]
    InvalidOrigin(String),
    #[error("`{0}` is not a valid HTTP header name")]
    InvalidHeaderName(String),
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Origin::Exact(value) = &self.origin {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyOrigin);
            }
            if value
                .chars()
                .any(|ch| ch.is_whitespace() || ch.is_control())
            {
                return Err(ValidationError::InvalidOrigin(value.clone()));
            }
        }

        let names = self
            .allow_headers
            .iter()
            .chain(self.expose_headers.iter())
            .flatten();
        for name in names {
            if !is_http_token(name) {
                return Err(ValidationError::InvalidHeaderName(name.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
