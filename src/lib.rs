pub mod constants;
mod context;
mod header_builder;
mod headers;
mod method;
mod options;
mod origin;
mod policy;
mod util;

pub use context::RequestContext;
pub use headers::{Header, Headers};
pub use method::{Method, ParseMethodError};
pub use options::{CorsOptions, ValidationError};
pub use origin::{Origin, OriginDecision};
pub use policy::CorsPolicy;
