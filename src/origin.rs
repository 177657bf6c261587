use crate::constants::WILDCARD;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The origin a policy admits: the wildcard `*` or one exact origin string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Origin {
    #[default]
    Any,
    Exact(String),
}

/// Outcome of matching a preflight request's `Origin` against the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Wildcard policy and the request carried an origin.
    Any,
    /// The request origin equals the configured one.
    Exact(String),
    /// The request origin is not admitted.
    Disallow,
    /// The request carried no origin at all.
    Skip,
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    /// `"*"` still yields [`Origin::Any`].
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::from(value.into())
    }

    /// Also true for a hand-built `Exact("*")`.
    pub fn is_any(&self) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(value) => value == WILDCARD,
        }
    }

    /// The literal configured value, `*` for the wildcard.
    pub fn header_value(&self) -> &str {
        match self {
            Self::Any => WILDCARD,
            Self::Exact(value) => value,
        }
    }

    /// Matching is exact and case-sensitive.
    pub fn resolve(&self, request_origin: Option<&str>) -> OriginDecision {
        let Some(request_origin) = request_origin else {
            return OriginDecision::Skip;
        };

        if self.is_any() {
            return OriginDecision::Any;
        }

        match self {
            Self::Exact(value) if value == request_origin => {
                OriginDecision::Exact(request_origin.to_string())
            }
            _ => OriginDecision::Disallow,
        }
    }
}

impl From<&str> for Origin {
    fn from(value: &str) -> Self {
        if value == WILDCARD {
            Self::Any
        } else {
            Self::Exact(value.to_string())
        }
    }
}

impl From<String> for Origin {
    fn from(value: String) -> Self {
        if value == WILDCARD {
            Self::Any
        } else {
            Self::Exact(value)
        }
    }
}

impl From<Origin> for String {
    fn from(value: Origin) -> Self {
        match value {
            Origin::Any => WILDCARD.to_string(),
            Origin::Exact(value) => value,
        }
    }
}

impl FromStr for Origin {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(value))
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header_value())
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
