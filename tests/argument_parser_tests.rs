use restroute::argument::{
    Argument, ArgumentBuilder, ArgumentParser, ArgumentType, ArrayType, AttributeValue,
    BooleanType, ElementRequirements, Format, IntegerType, NullType, NumberAttributes, NumberType,
    ObjectType, StringType,
};
use serde_json::{json, Value};

/// Serialize and project down to plain JSON for whole-structure assertions.
fn schema_json(argument: &Argument) -> Value {
    AttributeValue::Map(ArgumentParser::as_map(argument))
        .to_json()
        .unwrap()
}

#[test]
fn test_minimal_emission_for_every_variant() {
    let cases: Vec<(Argument, &str)> = vec![
        (StringType::new("k").into(), "string"),
        (NumberType::new("k").into(), "number"),
        (IntegerType::new("k").into(), "integer"),
        (BooleanType::new("k").into(), "boolean"),
        (NullType::new("k").into(), "null"),
        (ArrayType::new("k").into(), "array"),
        (ObjectType::new("k").into(), "object"),
    ];
    for (argument, type_name) in cases {
        assert_eq!(schema_json(&argument), json!({"k": {"type": type_name}}));
    }
}

#[test]
fn test_explicitly_set_falsy_values_still_serialize() {
    let argument: Argument = StringType::new("k")
        .required(false)
        .min_length(0)
        .default(json!(""))
        .into();
    // `default` of "" counts as set; only a never-called setter is omitted.
    assert_eq!(
        schema_json(&argument),
        json!({"k": {
            "type": "string",
            "required": false,
            "minLength": 0,
            "default": "",
        }})
    );
}

#[test]
fn test_generic_fields_emit_only_when_set() {
    let argument: Argument = IntegerType::new("page")
        .required(true)
        .description("page number")
        .default(json!(1))
        .expected([1, 2, 3])
        .into();
    assert_eq!(
        schema_json(&argument),
        json!({"page": {
            "type": "integer",
            "required": true,
            "description": "page number",
            "default": 1,
            "enum": [1, 2, 3],
        }})
    );
}

#[test]
fn test_empty_description_is_omitted() {
    let argument: Argument = StringType::new("k").description("").into();
    assert_eq!(schema_json(&argument), json!({"k": {"type": "string"}}));
}

#[test]
fn test_format_and_name_emission() {
    let argument: Argument = StringType::new("contact")
        .format(Format::Email)
        .name("contact")
        .into();
    assert_eq!(
        schema_json(&argument),
        json!({"contact": {"type": "string", "format": "email", "name": "contact"}})
    );
}

#[test]
fn test_union_type_emits_ordered_list() {
    let argument: Argument = StringType::new("value")
        .union_with_type(ArgumentType::Null)
        .union_with_type(ArgumentType::Integer)
        .union_with_type(ArgumentType::Null)
        .into();
    assert_eq!(
        schema_json(&argument),
        json!({"value": {"type": ["string", "null", "integer"]}})
    );
}

#[test]
fn test_string_constraints() {
    let argument: Argument = StringType::new("slug")
        .min_length(3)
        .max_length(32)
        .pattern("^[a-z-]+$")
        .into();
    assert_eq!(
        schema_json(&argument),
        json!({"slug": {
            "type": "string",
            "minLength": 3,
            "maxLength": 32,
            "pattern": "^[a-z-]+$",
        }})
    );
}

#[test]
fn test_exclusive_bounds_are_gated_by_their_bound() {
    // Exclusive declared ahead of any bound: no partial schema.
    let early: Argument = IntegerType::new("k").exclusive_minimum(true).into();
    assert_eq!(schema_json(&early), json!({"k": {"type": "integer"}}));

    // Once the bound arrives, both keys appear together.
    let bounded: Argument = IntegerType::new("k")
        .exclusive_minimum(true)
        .minimum(10)
        .into();
    assert_eq!(
        schema_json(&bounded),
        json!({"k": {"type": "integer", "minimum": 10, "exclusiveMinimum": true}})
    );

    // Symmetric for the maximum side, and an explicit false still emits.
    let maximum: Argument = NumberType::new("k")
        .maximum(9.5)
        .exclusive_maximum(false)
        .into();
    assert_eq!(
        schema_json(&maximum),
        json!({"k": {"type": "number", "maximum": 9.5, "exclusiveMaximum": false}})
    );
}

#[test]
fn test_numeric_attributes() {
    let argument: Argument = NumberType::new("price")
        .minimum(0.5)
        .maximum(99.5)
        .multiple_of(0.5)
        .into();
    assert_eq!(
        schema_json(&argument),
        json!({"price": {
            "type": "number",
            "minimum": 0.5,
            "maximum": 99.5,
            "multipleOf": 0.5,
        }})
    );
}

#[test]
fn test_single_array_item_is_inlined() {
    let argument: Argument = ArrayType::new("tags")
        .string_item(|item| item.min_length(1))
        .into();
    assert_eq!(
        schema_json(&argument),
        json!({"tags": {
            "type": "array",
            "items": {"type": "string", "minLength": 1},
        }})
    );
}

#[test]
fn test_multiple_items_with_default_relationship_are_a_plain_list() {
    let argument: Argument = ArrayType::new("values")
        .string_item(|item| item)
        .integer_item(|item| item)
        .into();
    assert_eq!(
        schema_json(&argument),
        json!({"values": {
            "type": "array",
            "items": [{"type": "string"}, {"type": "integer"}],
        }})
    );
}

#[test]
fn test_multiple_items_with_one_of_relationship_are_wrapped() {
    let argument: Argument = ArrayType::new("values")
        .string_item(|item| item)
        .integer_item(|item| item)
        .one_of()
        .into();
    assert_eq!(
        schema_json(&argument),
        json!({"values": {
            "type": "array",
            "items": {"oneOf": [{"type": "string"}, {"type": "integer"}]},
        }})
    );

    let any: Argument = ArrayType::new("values")
        .boolean_item(|item| item)
        .null_item(|item| item)
        .any_of()
        .into();
    assert_eq!(
        schema_json(&any),
        json!({"values": {
            "type": "array",
            "items": {"anyOf": [{"type": "boolean"}, {"type": "null"}]},
        }})
    );
}

#[test]
fn test_array_bounds_and_uniqueness() {
    let argument: Argument = ArrayType::new("values")
        .min_items(5)
        .max_items(2)
        .unique_items(false)
        .into();
    // Bounds are recorded as stated, even when min > max; ordering is the
    // host validator's concern.
    assert_eq!(
        schema_json(&argument),
        json!({"values": {
            "type": "array",
            "minItems": 5,
            "maxItems": 2,
            "uniqueItems": false,
        }})
    );
}

#[test]
fn test_arrays_of_arrays_recurse() {
    let argument: Argument = ArrayType::new("matrix")
        .array_item(|row| row.integer_item(|cell| cell.minimum(0)))
        .into();
    assert_eq!(
        schema_json(&argument),
        json!({"matrix": {
            "type": "array",
            "items": {
                "type": "array",
                "items": {"type": "integer", "minimum": 0},
            },
        }})
    );
}

#[test]
fn test_object_properties_recurse() {
    let argument: Argument = ObjectType::new("owner")
        .string_property("name", |name| name.required(true))
        .integer_property("age", |age| age.minimum(0))
        .min_properties(1)
        .into();
    assert_eq!(
        schema_json(&argument),
        json!({"owner": {
            "type": "object",
            "minProperties": 1,
            "properties": {
                "name": {"type": "string", "required": true, "name": "name"},
                "age": {"type": "integer", "minimum": 0, "name": "age"},
            },
        }})
    );
}

#[test]
fn test_object_property_namespaces_serialize_independently() {
    let argument: Argument = ObjectType::new("config")
        .string_property("id", |p| p)
        .boolean_additional_property("id", |p| p)
        .string_pattern_property("^x-", |p| p)
        .into();
    assert_eq!(
        schema_json(&argument),
        json!({"config": {
            "type": "object",
            "properties": {"id": {"type": "string", "name": "id"}},
            "additionalProperties": {"id": {"type": "boolean", "name": "id"}},
            "patternProperties": {"^x-": {"type": "string", "name": "^x-"}},
        }})
    );
}

#[test]
fn test_object_nested_in_array_items() {
    let argument: Argument = ArrayType::new("pets")
        .object_item(|pet| pet.string_property("species", |p| p))
        .into();
    assert_eq!(
        schema_json(&argument),
        json!({"pets": {
            "type": "array",
            "items": {
                "type": "object",
                "properties": {"species": {"type": "string", "name": "species"}},
            },
        }})
    );
}

#[test]
fn test_free_form_attributes_emit_but_typed_fields_win() {
    let argument: Argument = StringType::new("k")
        .add_attribute("x-vendor", json!({"internal": true}))
        .add_attribute("minLength", json!(99))
        .min_length(3)
        .into();
    assert_eq!(
        schema_json(&argument),
        json!({"k": {
            "type": "string",
            "x-vendor": {"internal": true},
            "minLength": 3,
        }})
    );
}

#[test]
fn test_callbacks_serialize_as_map_entries() {
    let argument: Argument = StringType::new("email")
        .validation(|value, _request, _key| value.is_string())
        .sanitization(|value| value)
        .into();
    let map = ArgumentParser::as_map(&argument);
    let inner = map["email"].as_map().unwrap();
    assert!(matches!(
        inner.get("validate_callback"),
        Some(AttributeValue::Validate(_))
    ));
    assert!(matches!(
        inner.get("sanitize_callback"),
        Some(AttributeValue::Sanitize(_))
    ));
    // The JSON projection carries only the schema part.
    assert_eq!(
        map["email"].to_json().unwrap(),
        json!({"type": "string"})
    );
}

#[test]
fn test_enum_values_keep_insertion_order() {
    let argument: Argument = StringType::new("role")
        .expected(["admin"])
        .expected(["editor", "viewer"])
        .into();
    assert_eq!(
        schema_json(&argument),
        json!({"role": {"type": "string", "enum": ["admin", "editor", "viewer"]}})
    );
}
