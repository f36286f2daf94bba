pub mod config;
pub mod error;
pub mod model;
pub mod parse;
pub mod source;
pub mod transform;

pub use error::{MapError, ParseError, SourceError};
pub use model::{
    AuthenticationType, ContentType, HttpMethod, MapWarning, Parameter, Property, RequestBody,
    RequestDescriptor, Response, TestType,
};
pub use source::{SourceOptions, SpecSource};
pub use transform::{MapOptions, RequestFilter, map_document};
