use std::fmt;

/// A single response header as emitted by the policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Header {
    pub name: &'static str,
    pub value: String,
}

impl Header {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

impl From<Header> for (String, String) {
    fn from(header: Header) -> Self {
        (header.name.to_string(), header.value)
    }
}

/// Ordered header sequence. Callers write it onto the response as-is.
pub type Headers = Vec<Header>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: Vec::with_capacity(estimate),
        }
    }

    pub(crate) fn push(&mut self, header: Header) {
        self.headers.push(header);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        self.headers.extend(other.headers);
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
