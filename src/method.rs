use crate::constants::method;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// HTTP verbs a policy may list in `Access-Control-Allow-Methods`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "HEAD")]
    Head,
    #[serde(rename = "PUT")]
    Put,
    #[serde(rename = "DELETE")]
    Delete,
    #[serde(rename = "PATCH")]
    Patch,
    #[serde(rename = "POST")]
    Post,
    #[serde(rename = "OPTIONS")]
    Options,
}

impl Method {
    pub const ALL: [Method; 7] = [
        Method::Get,
        Method::Head,
        Method::Put,
        Method::Delete,
        Method::Patch,
        Method::Post,
        Method::Options,
    ];

    /// The upper-case token written on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => method::GET,
            Method::Head => method::HEAD,
            Method::Put => method::PUT,
            Method::Delete => method::DELETE,
            Method::Patch => method::PATCH,
            Method::Post => method::POST,
            Method::Options => method::OPTIONS,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported HTTP method token `{0}`")]
pub struct ParseMethodError(pub String);

impl FromStr for Method {
    type Err = ParseMethodError;

    /// Tokens are matched case-sensitively, as HTTP methods are.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == value)
            .ok_or_else(|| ParseMethodError(value.to_string()))
    }
}

#[cfg(test)]
#[path = "method_test.rs"]
mod method_test;
