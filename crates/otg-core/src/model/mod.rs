pub mod http;
pub mod markers;
pub mod request;

pub use http::{ContentType, HttpMethod};
pub use markers::{AuthenticationType, TestType};
pub use request::{MapWarning, Parameter, Property, RequestBody, RequestDescriptor, Response};
