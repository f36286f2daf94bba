use std::fmt;

use serde::{Deserialize, Serialize};

use super::http::{ContentType, HttpMethod};
use super::markers::{AuthenticationType, TestType};

/// A normalized, self-contained request record for one testable operation.
/// Everything a test runner needs to execute and validate the operation.
/// Immutable once built; classification is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDescriptor {
    pub base_path: String,
    pub path: String,
    pub method: HttpMethod,
    pub summary: String,
    pub description: String,
    pub operation_id: String,
    pub parameters: Vec<Parameter>,
    pub request_bodies: Vec<RequestBody>,
    pub responses: Vec<Response>,
    pub tags: Vec<String>,
    pub authentication_types: Vec<AuthenticationType>,
    pub test_types: Vec<TestType>,

    /// Extraction diagnostics: empty bodies/properties caused by a
    /// structural fault carry a warning here, so callers can tell them apart
    /// from legitimately empty schemas.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<MapWarning>,
}

/// A declared parameter, copied verbatim from the source schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub nullable: bool,
    /// Declared example value, populated only when example values are
    /// requested. Cosmetic; never affects structural shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// One content-type variant of an operation's request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    pub content_type: ContentType,
    /// Schema type-reference name; empty for inline schemas.
    pub reference_name: String,
    pub properties: Vec<Property>,
}

/// An expected response for one status code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: String,
    pub properties: Vec<Property>,
}

/// A schema property of a request body or response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A non-fatal extraction fault recorded on the descriptor it degraded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MapWarning {
    #[serde(rename_all = "camelCase")]
    RequestBodyIncomplete { reason: String },
    #[serde(rename_all = "camelCase")]
    ResponseIncomplete { status: String, reason: String },
}

impl fmt::Display for MapWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapWarning::RequestBodyIncomplete { reason } => {
                write!(f, "request body extraction incomplete: {reason}")
            }
            MapWarning::ResponseIncomplete { status, reason } => {
                write!(f, "response {status} extraction incomplete: {reason}")
            }
        }
    }
}
