#![allow(dead_code)]

use cors_policy_rs::{CorsOptions, CorsPolicy, Headers, Method, Origin, RequestContext};

#[derive(Default)]
pub struct PolicyBuilder {
    options: CorsOptions,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<Origin>) -> Self {
        self.options.origin = origin.into();
        self
    }

    pub fn methods<I>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = Method>,
    {
        self.options.methods = Some(methods.into_iter().collect());
        self
    }

    pub fn allow_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allow_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.expose_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.options.max_age = Some(seconds);
        self
    }

    pub fn build(self) -> CorsPolicy {
        CorsPolicy::new(self.options).expect("valid CORS configuration")
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn evaluate(&self, policy: &CorsPolicy) -> Headers {
        let ctx = RequestContext {
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        };
        policy.preflight(&ctx)
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
