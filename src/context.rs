use crate::constants::header;

/// The slice of an inbound request a preflight negotiation reads.
///
/// Empty values are treated as absent headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext<'a> {
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    /// Build the view from any host header mapping. The lookup is called with the
    /// canonical header names from [`crate::constants::header`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        Self {
            origin: lookup(header::ORIGIN),
            access_control_request_method: lookup(header::ACCESS_CONTROL_REQUEST_METHOD),
            access_control_request_headers: lookup(header::ACCESS_CONTROL_REQUEST_HEADERS),
        }
    }

    pub(crate) fn origin(&self) -> Option<&'a str> {
        present(self.origin)
    }

    pub(crate) fn request_method(&self) -> Option<&'a str> {
        present(self.access_control_request_method)
    }

    pub(crate) fn request_headers(&self) -> Option<&'a str> {
        present(self.access_control_request_headers)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
