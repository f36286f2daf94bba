//! Document walker and descriptor mapper.
//!
//! Walks every path and operation of a parsed document in declaration order,
//! keeps the operations that pass the testability gate, and builds one
//! [`RequestDescriptor`] per kept operation.
//!
//! Failure semantics are asymmetric and deliberate: an unrecognized HTTP
//! verb on a testable operation fails the whole mapping call, while any
//! structural fault inside request-body or response extraction degrades that
//! one descriptor to an empty body/property set, records a [`MapWarning`],
//! and lets the call succeed.

use crate::error::MapError;
use crate::model::{
    ContentType, HttpMethod, MapWarning, Parameter, Property, RequestBody, RequestDescriptor,
    Response,
};
use crate::parse::operation::Operation;
use crate::parse::response::ResponseOrRef;
use crate::parse::schema::Schema;
use crate::parse::schema_index::SchemaIndex;
use crate::parse::spec::OpenApiDocument;

use super::classify;

/// Options honored during mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapOptions {
    /// Populate `value` on parameters and properties from declared example
    /// values. Cosmetic only.
    pub use_example_values: bool,
}

/// Map a parsed document to an ordered list of request descriptors.
///
/// `base_url` is copied into every descriptor as-is; callers that want the
/// document's `servers` entry folded in resolve it first (see
/// [`crate::source`]).
pub fn map_document(
    base_url: &str,
    doc: &OpenApiDocument,
    options: &MapOptions,
) -> Result<Vec<RequestDescriptor>, MapError> {
    let index = SchemaIndex::new(doc);
    let mut descriptors = Vec::new();

    for (path, item) in &doc.paths {
        for (verb, op) in &item.operations {
            let description = op.description.clone().unwrap_or_default();
            // Gate before verb mapping: a non-testable operation is dropped
            // before any further processing, unrecognized verb included.
            if !classify::is_testable(&description) {
                continue;
            }
            let method = HttpMethod::from_verb(verb)?;
            descriptors.push(build_descriptor(
                base_url,
                path,
                method,
                description,
                op,
                &index,
                options,
            ));
        }
    }

    Ok(descriptors)
}

fn build_descriptor<'a>(
    base_url: &str,
    path: &str,
    method: HttpMethod,
    description: String,
    op: &'a Operation,
    index: &SchemaIndex<'a>,
    options: &MapOptions,
) -> RequestDescriptor {
    let mut warnings = Vec::new();

    let request_bodies = match try_extract_request_bodies(op, index, options) {
        Ok(bodies) => bodies,
        Err(reason) => {
            let warning = MapWarning::RequestBodyIncomplete { reason };
            log::warn!("{} {}: {}", method.as_str(), path, warning);
            warnings.push(warning);
            Vec::new()
        }
    };

    let responses = map_responses(op, index, options, method, path, &mut warnings);

    RequestDescriptor {
        base_path: base_url.to_string(),
        path: path.to_string(),
        method,
        summary: op.summary.clone().unwrap_or_default(),
        operation_id: op.operation_id.clone().unwrap_or_default(),
        tags: op.tags.clone(),
        parameters: map_parameters(op, index, options),
        request_bodies,
        responses,
        authentication_types: classify::auth_types(&description),
        test_types: classify::test_types(&description),
        description,
        warnings,
    }
}

fn map_parameters<'a>(
    op: &'a Operation,
    index: &SchemaIndex<'a>,
    options: &MapOptions,
) -> Vec<Parameter> {
    let mut parameters = Vec::new();

    for param_or_ref in &op.parameters {
        // Unresolvable parameter refs are skipped; parameters have no
        // degrade channel of their own.
        let Some(param) = index.deref_parameter(param_or_ref) else {
            continue;
        };
        let schema = param.schema.as_ref().and_then(|s| index.deref_schema(s));

        let value = if options.use_example_values {
            schema
                .and_then(|s| s.example.as_ref())
                .or(param.example.as_ref())
                .map(example_to_string)
        } else {
            None
        };

        parameters.push(Parameter {
            name: param.name.clone(),
            param_type: schema
                .and_then(|s| s.schema_type)
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
            nullable: schema.and_then(|s| s.nullable).unwrap_or(false),
            value,
        });
    }

    parameters
}

/// One `RequestBody` per content-type variant, or empty when the operation
/// declares no usable body. Returns `Err` only for structural faults; the
/// caller turns those into a warning plus an empty body list.
fn try_extract_request_bodies<'a>(
    op: &'a Operation,
    index: &SchemaIndex<'a>,
    options: &MapOptions,
) -> Result<Vec<RequestBody>, String> {
    let Some(body_or_ref) = op.request_body.as_ref() else {
        return Ok(Vec::new());
    };
    let body = index
        .deref_request_body(body_or_ref)
        .ok_or("request body $ref does not resolve")?;

    // The first content entry decides whether there is anything to extract:
    // a schema with zero declared properties maps to no request bodies at
    // all, not to a body with a reference name and no properties.
    let Some((first_mime, first)) = body.content.first() else {
        return Ok(Vec::new());
    };
    let first_schema_or_ref = first
        .schema
        .as_ref()
        .ok_or_else(|| format!("content entry `{first_mime}` has no schema"))?;
    let first_schema = index
        .deref_schema(first_schema_or_ref)
        .ok_or_else(|| format!("schema $ref in `{first_mime}` does not resolve"))?;
    if first_schema.properties.is_empty() {
        return Ok(Vec::new());
    }

    let mut bodies = Vec::new();
    for (mime, media) in &body.content {
        let content_type = ContentType::from_mime(mime)
            .ok_or_else(|| format!("unrecognized content type `{mime}`"))?;
        let schema_or_ref = media
            .schema
            .as_ref()
            .ok_or_else(|| format!("content entry `{mime}` has no schema"))?;
        let schema = index
            .deref_schema(schema_or_ref)
            .ok_or_else(|| format!("schema $ref in `{mime}` does not resolve"))?;

        bodies.push(RequestBody {
            content_type,
            reference_name: SchemaIndex::reference_name(schema_or_ref)
                .unwrap_or_default()
                .to_string(),
            properties: map_properties(schema, index, options)?,
        });
    }

    Ok(bodies)
}

/// One `Response` per declared status code, each extracted independently:
/// a fault in one response degrades only that response's properties.
fn map_responses<'a>(
    op: &'a Operation,
    index: &SchemaIndex<'a>,
    options: &MapOptions,
    method: HttpMethod,
    path: &str,
    warnings: &mut Vec<MapWarning>,
) -> Vec<Response> {
    let mut responses = Vec::new();

    for (status, resp_or_ref) in &op.responses {
        let properties = match try_extract_response_properties(resp_or_ref, index, options) {
            Ok(properties) => properties,
            Err(reason) => {
                let warning = MapWarning::ResponseIncomplete {
                    status: status.clone(),
                    reason,
                };
                log::warn!("{} {}: {}", method.as_str(), path, warning);
                warnings.push(warning);
                Vec::new()
            }
        };
        responses.push(Response {
            status_code: status.clone(),
            properties,
        });
    }

    responses
}

fn try_extract_response_properties<'a>(
    resp_or_ref: &'a ResponseOrRef,
    index: &SchemaIndex<'a>,
    options: &MapOptions,
) -> Result<Vec<Property>, String> {
    let resp = index
        .deref_response(resp_or_ref)
        .ok_or("response $ref does not resolve")?;

    // A response without content entries has legitimately empty properties.
    let Some((mime, media)) = resp.content.first() else {
        return Ok(Vec::new());
    };
    let schema_or_ref = media
        .schema
        .as_ref()
        .ok_or_else(|| format!("content entry `{mime}` has no schema"))?;
    let schema = index
        .deref_schema(schema_or_ref)
        .ok_or_else(|| format!("schema $ref in `{mime}` does not resolve"))?;

    map_properties(schema, index, options)
}

fn map_properties<'a>(
    schema: &'a Schema,
    index: &SchemaIndex<'a>,
    options: &MapOptions,
) -> Result<Vec<Property>, String> {
    let mut properties = Vec::new();

    for (name, prop_or_ref) in &schema.properties {
        let prop = index
            .deref_schema(prop_or_ref)
            .ok_or_else(|| format!("property `{name}` $ref does not resolve"))?;

        let value = if options.use_example_values {
            prop.example.as_ref().map(example_to_string)
        } else {
            None
        };

        properties.push(Property {
            name: name.clone(),
            description: prop.description.clone().unwrap_or_default(),
            property_type: prop
                .schema_type
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
            value,
        });
    }

    Ok(properties)
}

fn example_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
