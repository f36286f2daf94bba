use serde::{Deserialize, Serialize};

use crate::error::MapError;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Options,
    Head,
    Trace,
    Patch,
}

impl HttpMethod {
    /// Map a path-item verb key to a method. An unrecognized verb is fatal
    /// for the whole mapping call.
    pub fn from_verb(verb: &str) -> Result<Self, MapError> {
        match verb {
            "get" => Ok(HttpMethod::Get),
            "post" => Ok(HttpMethod::Post),
            "put" => Ok(HttpMethod::Put),
            "delete" => Ok(HttpMethod::Delete),
            "options" => Ok(HttpMethod::Options),
            "head" => Ok(HttpMethod::Head),
            "trace" => Ok(HttpMethod::Trace),
            "patch" => Ok(HttpMethod::Patch),
            other => Err(MapError::UnsupportedMethod(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Trace => "TRACE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

/// Request body content type. Serializes as the MIME string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "application/json")]
    Json,
    #[serde(rename = "application/xml")]
    Xml,
    #[serde(rename = "application/octet-stream")]
    OctetStream,
    #[serde(rename = "application/x-www-form-urlencoded")]
    FormUrlEncoded,
    #[serde(rename = "multipart/form-data")]
    MultipartFormData,
    #[serde(rename = "text/plain")]
    TextPlain,
    #[serde(rename = "text/event-stream")]
    EventStream,
}

impl ContentType {
    /// Map a content-type string to the enumeration. Media type parameters
    /// (`; charset=...`) are ignored.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or(mime).trim();
        match essence {
            "application/json" => Some(ContentType::Json),
            "application/xml" => Some(ContentType::Xml),
            "application/octet-stream" => Some(ContentType::OctetStream),
            "application/x-www-form-urlencoded" => Some(ContentType::FormUrlEncoded),
            "multipart/form-data" => Some(ContentType::MultipartFormData),
            "text/plain" => Some(ContentType::TextPlain),
            "text/event-stream" => Some(ContentType::EventStream),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Xml => "application/xml",
            ContentType::OctetStream => "application/octet-stream",
            ContentType::FormUrlEncoded => "application/x-www-form-urlencoded",
            ContentType::MultipartFormData => "multipart/form-data",
            ContentType::TextPlain => "text/plain",
            ContentType::EventStream => "text/event-stream",
        }
    }
}
