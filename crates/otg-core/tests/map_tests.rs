use otg_core::error::MapError;
use otg_core::model::{AuthenticationType, ContentType, HttpMethod, MapWarning, TestType};
use otg_core::parse;
use otg_core::transform::{MapOptions, map_document};

const PETS: &str = include_str!("fixtures/pets.json");

fn map_yaml(yaml: &str) -> Result<Vec<otg_core::RequestDescriptor>, MapError> {
    let doc = parse::from_yaml(yaml).expect("fixture should parse");
    map_document("https://api.test", &doc, &MapOptions::default())
}

#[test]
fn gate_drops_unmarked_operations() {
    let yaml = r#"
openapi: "3.0.0"
info:
  title: Gate
  version: "1.0"
paths:
  /a:
    get:
      operationId: marked
      description: "List things. @loadtest"
    post:
      operationId: securityOnly
      description: "Probe things. @securitytest"
    delete:
      operationId: unmarked
      description: "Delete things."
"#;
    let descriptors = map_yaml(yaml).unwrap();
    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].operation_id, "marked");
}

#[test]
fn output_length_equals_marked_operation_count() {
    let doc = parse::from_json(PETS).unwrap();
    let descriptors = map_document("", &doc, &MapOptions::default()).unwrap();

    let marked = doc
        .paths
        .values()
        .flat_map(|item| item.operations.values())
        .filter(|op| {
            let d = op.description.as_deref().unwrap_or_default();
            d.contains("@loadtest") || d.contains("@integrationtest")
        })
        .count();
    assert_eq!(descriptors.len(), marked);
    assert_eq!(descriptors.len(), 19);
}

#[test]
fn unrecognized_verb_is_fatal_for_whole_document() {
    let yaml = r#"
openapi: "3.0.0"
info:
  title: Fatal
  version: "1.0"
paths:
  /a:
    get:
      operationId: ok
      description: "@integrationtest"
  /b:
    connect:
      operationId: bad
      description: "@integrationtest"
"#;
    match map_yaml(yaml) {
        Err(MapError::UnsupportedMethod(verb)) => assert_eq!(verb, "connect"),
        other => panic!("expected UnsupportedMethod, got {other:?}"),
    }
}

#[test]
fn unrecognized_verb_on_untestable_operation_is_dropped_not_fatal() {
    // The gate runs before verb mapping, so an unknown verb without a
    // testability marker never reaches the fatal path.
    let yaml = r#"
openapi: "3.0.0"
info:
  title: Gate
  version: "1.0"
paths:
  /a:
    connect:
      operationId: bad
      description: "No markers here."
    get:
      operationId: ok
      description: "@integrationtest"
"#;
    let descriptors = map_yaml(yaml).unwrap();
    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].operation_id, "ok");
}

#[test]
fn descriptor_copies_fields_verbatim() {
    let doc = parse::from_json(PETS).unwrap();
    let descriptors = map_document("https://petstore3.swagger.io/api/v3", &doc, &MapOptions::default()).unwrap();

    let update = descriptors
        .iter()
        .find(|d| d.operation_id == "updatePet")
        .expect("should have updatePet");
    assert_eq!(update.base_path, "https://petstore3.swagger.io/api/v3");
    assert_eq!(update.path, "/pet");
    assert_eq!(update.method, HttpMethod::Put);
    assert_eq!(update.summary, "Update an existing pet");
    assert_eq!(
        update.description,
        "Update an existing pet by Id. @integrationtest @administrator"
    );
    assert_eq!(update.tags, ["pet"]);
    assert_eq!(update.test_types, [TestType::IntegrationTest]);
    assert_eq!(
        update.authentication_types,
        [AuthenticationType::Administrator]
    );
}

#[test]
fn multi_content_type_body_yields_one_entry_per_variant() {
    let doc = parse::from_json(PETS).unwrap();
    let descriptors = map_document("", &doc, &MapOptions::default()).unwrap();

    let add = descriptors
        .iter()
        .find(|d| d.operation_id == "addPet")
        .unwrap();
    assert_eq!(add.request_bodies.len(), 3);
    assert_eq!(
        add.request_bodies
            .iter()
            .map(|b| b.content_type)
            .collect::<Vec<_>>(),
        [
            ContentType::Json,
            ContentType::Xml,
            ContentType::FormUrlEncoded
        ]
    );
    for body in &add.request_bodies {
        assert_eq!(body.reference_name, "Pet");
        assert_eq!(body.properties.len(), 6);
    }
    // Declaration order of the Pet schema.
    let names: Vec<&str> = add.request_bodies[0]
        .properties
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(
        names,
        ["id", "name", "category", "photoUrls", "tags", "status"]
    );
    // One-level flattening: a $ref property reports its target's type.
    let category = &add.request_bodies[0].properties[2];
    assert_eq!(category.property_type, "object");
}

#[test]
fn zero_property_body_schema_maps_to_empty_bodies() {
    let doc = parse::from_json(PETS).unwrap();
    let descriptors = map_document("", &doc, &MapOptions::default()).unwrap();

    // application/octet-stream with a bare string schema
    let upload = descriptors
        .iter()
        .find(|d| d.operation_id == "uploadFile")
        .unwrap();
    assert!(upload.request_bodies.is_empty());
    assert!(upload.warnings.is_empty());

    // array-of-User schema
    let create = descriptors
        .iter()
        .find(|d| d.operation_id == "createUsersWithListInput")
        .unwrap();
    assert!(create.request_bodies.is_empty());
    assert!(create.warnings.is_empty());
}

#[test]
fn unresolvable_body_ref_degrades_with_warning() {
    let yaml = r##"
openapi: "3.0.0"
info:
  title: Degrade
  version: "1.0"
paths:
  /a:
    post:
      operationId: brokenBody
      description: "@integrationtest"
      requestBody:
        content:
          application/json:
            schema:
              $ref: "#/components/schemas/Missing"
      responses:
        "201":
          description: created
"##;
    let descriptors = map_yaml(yaml).unwrap();
    assert_eq!(descriptors.len(), 1);

    let d = &descriptors[0];
    assert!(d.request_bodies.is_empty());
    assert_eq!(d.warnings.len(), 1);
    assert!(matches!(
        &d.warnings[0],
        MapWarning::RequestBodyIncomplete { .. }
    ));
    // The response side extracted independently of the body fault.
    assert_eq!(d.responses.len(), 1);
    assert_eq!(d.responses[0].status_code, "201");
}

#[test]
fn unknown_content_type_degrades_with_warning() {
    let yaml = r#"
openapi: "3.0.0"
info:
  title: Degrade
  version: "1.0"
paths:
  /a:
    post:
      operationId: weirdBody
      description: "@integrationtest"
      requestBody:
        content:
          application/vnd.custom+json:
            schema:
              type: object
              properties:
                name:
                  type: string
"#;
    let descriptors = map_yaml(yaml).unwrap();
    let d = &descriptors[0];
    assert!(d.request_bodies.is_empty());
    assert!(matches!(
        &d.warnings[0],
        MapWarning::RequestBodyIncomplete { reason } if reason.contains("application/vnd.custom+json")
    ));
}

#[test]
fn response_fault_degrades_that_response_only() {
    let yaml = r##"
openapi: "3.0.0"
info:
  title: Degrade
  version: "1.0"
paths:
  /a:
    get:
      operationId: brokenResponse
      description: "@loadtest"
      responses:
        "200":
          description: ok
          content:
            application/json:
              schema:
                $ref: "#/components/schemas/Missing"
        "404":
          description: not found
"##;
    let descriptors = map_yaml(yaml).unwrap();
    let d = &descriptors[0];

    assert_eq!(d.responses.len(), 2);
    assert_eq!(d.responses[0].status_code, "200");
    assert!(d.responses[0].properties.is_empty());
    assert_eq!(d.responses[1].status_code, "404");
    assert!(d.responses[1].properties.is_empty());

    assert_eq!(d.warnings.len(), 1);
    assert!(matches!(
        &d.warnings[0],
        MapWarning::ResponseIncomplete { status, .. } if status == "200"
    ));
}

#[test]
fn response_without_content_is_legitimately_empty() {
    let doc = parse::from_json(PETS).unwrap();
    let descriptors = map_document("", &doc, &MapOptions::default()).unwrap();

    let logout = descriptors
        .iter()
        .find(|d| d.operation_id == "logoutUser")
        .unwrap();
    assert_eq!(logout.responses.len(), 1);
    assert_eq!(logout.responses[0].status_code, "default");
    assert!(logout.responses[0].properties.is_empty());
    assert!(logout.warnings.is_empty());
}

#[test]
fn parameters_preserve_declaration_order_and_schema_fields() {
    let doc = parse::from_json(PETS).unwrap();
    let descriptors = map_document("", &doc, &MapOptions::default()).unwrap();

    let delete = descriptors
        .iter()
        .find(|d| d.operation_id == "deletePet")
        .unwrap();
    let names: Vec<&str> = delete.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["api_key", "petId"]);
    assert_eq!(delete.parameters[0].param_type, "string");
    assert_eq!(delete.parameters[1].param_type, "integer");
    assert!(!delete.parameters[1].nullable);

    let tags = descriptors
        .iter()
        .find(|d| d.operation_id == "findPetsByTags")
        .unwrap();
    assert!(tags.parameters[0].nullable);
    assert_eq!(tags.parameters[0].param_type, "array");
}

#[test]
fn example_values_populate_only_when_requested() {
    let doc = parse::from_json(PETS).unwrap();

    let plain = map_document("", &doc, &MapOptions::default()).unwrap();
    let by_status = plain
        .iter()
        .find(|d| d.operation_id == "findPetsByStatus")
        .unwrap();
    assert_eq!(by_status.parameters[0].value, None);

    let with_examples = map_document(
        "",
        &doc,
        &MapOptions {
            use_example_values: true,
        },
    )
    .unwrap();
    let by_status = with_examples
        .iter()
        .find(|d| d.operation_id == "findPetsByStatus")
        .unwrap();
    assert_eq!(by_status.parameters[0].value.as_deref(), Some("available"));

    let add = with_examples
        .iter()
        .find(|d| d.operation_id == "addPet")
        .unwrap();
    let props = &add.request_bodies[0].properties;
    assert_eq!(props[0].value.as_deref(), Some("10"));
    assert_eq!(props[1].value.as_deref(), Some("doggie"));
    assert_eq!(props[3].value, None);
}

#[test]
fn mapping_is_idempotent() {
    let doc = parse::from_json(PETS).unwrap();
    let first = map_document("https://x", &doc, &MapOptions::default()).unwrap();
    let second = map_document("https://x", &doc, &MapOptions::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn descriptors_follow_document_order() {
    let doc = parse::from_json(PETS).unwrap();
    let descriptors = map_document("", &doc, &MapOptions::default()).unwrap();
    let ids: Vec<&str> = descriptors
        .iter()
        .map(|d| d.operation_id.as_str())
        .collect();
    assert_eq!(
        ids,
        [
            "updatePet",
            "addPet",
            "findPetsByStatus",
            "findPetsByTags",
            "getPetById",
            "updatePetWithForm",
            "deletePet",
            "uploadFile",
            "getInventory",
            "placeOrder",
            "getOrderById",
            "deleteOrder",
            "createUser",
            "createUsersWithListInput",
            "loginUser",
            "logoutUser",
            "getUserByName",
            "updateUser",
            "deleteUser",
        ]
    );
}
