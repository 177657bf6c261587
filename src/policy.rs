use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::{HeaderCollection, Headers};
use crate::options::{CorsOptions, ValidationError};

/// Immutable CORS policy computing response header sequences from [`CorsOptions`].
///
/// Both operations are pure; a single policy may be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    options: CorsOptions,
}

impl CorsPolicy {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        if let Err(err) = options.validate() {
            tracing::debug!(error = %err, "rejected CORS options");
            return Err(err);
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Headers for an actual (non-preflight) response.
    ///
    /// Emits, in order: allow-origin (always), allow-methods, allow-headers,
    /// expose-headers, allow-credentials and max-age, each only when configured.
    pub fn headers(&self) -> Headers {
        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::with_estimate(6);
        headers.extend(builder.build_origin_header());
        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers());
        headers.extend(builder.build_exposed_headers());
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_max_age_header());
        headers.into_headers()
    }

    /// Headers answering a preflight request.
    ///
    /// Emits the origin pair (plus `Vary: Origin` on an exact match), the methods
    /// header, and one header for the headers slot. Credentials and max-age are never
    /// part of a preflight answer.
    pub fn preflight(&self, request: &RequestContext<'_>) -> Headers {
        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::with_estimate(4);
        headers.extend(builder.build_preflight_origin_headers(request));
        headers.extend(builder.build_preflight_methods_header(request));
        headers.extend(builder.build_preflight_headers_slot(request));
        headers.into_headers()
    }
}

impl TryFrom<CorsOptions> for CorsPolicy {
    type Error = ValidationError;

    fn try_from(options: CorsOptions) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
