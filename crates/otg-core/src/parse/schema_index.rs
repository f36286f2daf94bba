use super::components::Components;
use super::parameter::{Parameter, ParameterOrRef};
use super::request_body::{RequestBody, RequestBodyOrRef};
use super::response::{Response, ResponseOrRef};
use super::schema::{Schema, SchemaOrRef};
use super::spec::OpenApiDocument;

/// One-level `$ref` lookup against a document's `components` section.
///
/// Deliberately does not recurse: a reference whose target is itself a
/// reference does not resolve. Composed and inherited schemas are flattened
/// at most one property level by the mapper.
pub struct SchemaIndex<'a> {
    components: Option<&'a Components>,
}

impl<'a> SchemaIndex<'a> {
    pub fn new(doc: &'a OpenApiDocument) -> Self {
        Self {
            components: doc.components.as_ref(),
        }
    }

    /// Resolve a schema-or-ref to an inline schema, following at most one
    /// `$ref` hop.
    pub fn deref_schema(&self, schema_or_ref: &'a SchemaOrRef) -> Option<&'a Schema> {
        match schema_or_ref {
            SchemaOrRef::Schema(schema) => Some(schema.as_ref()),
            SchemaOrRef::Ref { ref_path } => {
                let name = ref_name(ref_path, "schemas")?;
                match self.components?.schemas.get(name)? {
                    SchemaOrRef::Schema(schema) => Some(schema.as_ref()),
                    SchemaOrRef::Ref { .. } => None,
                }
            }
        }
    }

    pub fn deref_parameter(&self, param: &'a ParameterOrRef) -> Option<&'a Parameter> {
        match param {
            ParameterOrRef::Parameter(p) => Some(p),
            ParameterOrRef::Ref { ref_path } => {
                let name = ref_name(ref_path, "parameters")?;
                match self.components?.parameters.get(name)? {
                    ParameterOrRef::Parameter(p) => Some(p),
                    ParameterOrRef::Ref { .. } => None,
                }
            }
        }
    }

    pub fn deref_request_body(&self, body: &'a RequestBodyOrRef) -> Option<&'a RequestBody> {
        match body {
            RequestBodyOrRef::RequestBody(rb) => Some(rb),
            RequestBodyOrRef::Ref { ref_path } => {
                let name = ref_name(ref_path, "requestBodies")?;
                match self.components?.request_bodies.get(name)? {
                    RequestBodyOrRef::RequestBody(rb) => Some(rb),
                    RequestBodyOrRef::Ref { .. } => None,
                }
            }
        }
    }

    pub fn deref_response(&self, resp: &'a ResponseOrRef) -> Option<&'a Response> {
        match resp {
            ResponseOrRef::Response(r) => Some(r),
            ResponseOrRef::Ref { ref_path } => {
                let name = ref_name(ref_path, "responses")?;
                match self.components?.responses.get(name)? {
                    ResponseOrRef::Response(r) => Some(r),
                    ResponseOrRef::Ref { .. } => None,
                }
            }
        }
    }

    /// The type-reference identifier of a schema, i.e. the name a `$ref`
    /// points at. Inline schemas have none.
    pub fn reference_name(schema_or_ref: &SchemaOrRef) -> Option<&str> {
        match schema_or_ref {
            SchemaOrRef::Ref { ref_path } => ref_name(ref_path, "schemas"),
            SchemaOrRef::Schema(_) => None,
        }
    }
}

/// Extract the name from a `$ref` path like `#/components/schemas/Foo`,
/// checking it points into the expected section.
fn ref_name<'a>(ref_path: &'a str, expected_section: &str) -> Option<&'a str> {
    let stripped = ref_path.strip_prefix("#/components/")?;
    let (section, name) = stripped.split_once('/')?;
    if section != expected_section {
        return None;
    }
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ref_name_valid() {
        assert_eq!(
            ref_name("#/components/schemas/Pet", "schemas"),
            Some("Pet")
        );
    }

    #[test]
    fn ref_name_wrong_section() {
        assert_eq!(ref_name("#/components/responses/NotFound", "schemas"), None);
    }

    #[test]
    fn ref_name_external() {
        assert_eq!(ref_name("other.yaml#/components/schemas/Pet", "schemas"), None);
    }
}
