use crate::constants::{LIST_SEPARATOR, TRUE, WILDCARD, header};
use crate::context::RequestContext;
use crate::headers::{Header, HeaderCollection};
use crate::options::CorsOptions;
use crate::origin::OriginDecision;
use indexmap::IndexSet;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    pub(crate) fn build_origin_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(Header::new(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            self.options.origin.header_value(),
        ));
        headers
    }

    pub(crate) fn build_preflight_origin_headers(
        &self,
        request: &RequestContext<'_>,
    ) -> HeaderCollection {
        let request_origin = request.origin();
        match self.options.origin.resolve(request_origin) {
            OriginDecision::Any => {
                tracing::trace!(origin = request_origin, "preflight origin admitted by wildcard");
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(Header::new(header::ACCESS_CONTROL_ALLOW_ORIGIN, WILDCARD));
                headers
            }
            OriginDecision::Exact(value) => {
                tracing::trace!(origin = %value, "preflight origin matched configured origin");
                let mut headers = HeaderCollection::with_estimate(2);
                headers.push(Header::new(header::ACCESS_CONTROL_ALLOW_ORIGIN, value));
                headers.push(Header::new(header::VARY, header::ORIGIN));
                headers
            }
            OriginDecision::Disallow => {
                tracing::trace!(
                    origin = request_origin,
                    allowed = self.options.origin.header_value(),
                    "preflight origin not admitted"
                );
                HeaderCollection::new()
            }
            OriginDecision::Skip => {
                tracing::trace!("preflight request carried no origin");
                HeaderCollection::new()
            }
        }
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(methods) = &self.options.methods
            && !methods.is_empty()
        {
            let value = methods
                .iter()
                .map(|method| method.as_str())
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR);
            headers.push(Header::new(header::ACCESS_CONTROL_ALLOW_METHODS, value));
        }
        headers
    }

    /// Configured methods win; otherwise the requested method is echoed back.
    pub(crate) fn build_preflight_methods_header(
        &self,
        request: &RequestContext<'_>,
    ) -> HeaderCollection {
        let headers = self.build_methods_header();
        if headers.is_empty()
            && let Some(method) = request.request_method()
        {
            let mut echoed = HeaderCollection::with_estimate(1);
            echoed.push(Header::new(header::ACCESS_CONTROL_ALLOW_METHODS, method));
            return echoed;
        }
        headers
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        build_list_header(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.options.allow_headers.as_ref(),
        )
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        build_list_header(
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            self.options.expose_headers.as_ref(),
        )
    }

    /// First non-empty source wins: allowed headers, then exposed headers, then the
    /// raw requested headers. The last fallback is written under
    /// `Access-Control-Allow-Methods`; existing clients depend on that name.
    pub(crate) fn build_preflight_headers_slot(
        &self,
        request: &RequestContext<'_>,
    ) -> HeaderCollection {
        let allowed = self.build_allowed_headers();
        if !allowed.is_empty() {
            return allowed;
        }

        let exposed = self.build_exposed_headers();
        if !exposed.is_empty() {
            return exposed;
        }

        let mut headers = HeaderCollection::new();
        if let Some(requested) = request.request_headers() {
            headers.push(Header::new(header::ACCESS_CONTROL_ALLOW_METHODS, requested));
        }
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if self.options.credentials == Some(true) {
            headers.push(Header::new(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, TRUE));
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(max_age) = self.options.max_age
            && max_age > 0
        {
            headers.push(Header::new(
                header::ACCESS_CONTROL_MAX_AGE,
                max_age.to_string(),
            ));
        }
        headers
    }
}

fn build_list_header(name: &'static str, values: Option<&IndexSet<String>>) -> HeaderCollection {
    let mut headers = HeaderCollection::new();
    if let Some(values) = values
        && !values.is_empty()
    {
        let value = values
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR);
        headers.push(Header::new(name, value));
    }
    headers
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
