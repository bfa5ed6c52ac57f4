use confcast_testkit::{flatten_json, read_fixture_json};

use crate::remote::{
	ConfigValue, DecodeError, DecodeOptions, Decoder, FieldKind, FieldSchema, IntWidth, MemoryStore, Number, ScalarKind, Schema,
	StoreValue, decode_record,
};

fn settings_schema() -> Schema {
	Schema::new(
		"Settings",
		vec![
			FieldSchema::string("greeting"),
			FieldSchema::bool("enabled"),
			FieldSchema::int("retries"),
			FieldSchema::float("ratio"),
			FieldSchema::double("budget"),
			FieldSchema::url("docs"),
		],
	)
}

fn settings_store() -> MemoryStore {
	let mut store = MemoryStore::new();
	store.insert_text("greeting", "hello");
	store.insert_text("enabled", "true");
	store.insert_text("retries", "3");
	store.insert_text("ratio", "0.5");
	store.insert_text("budget", "750.5");
	store.insert_text("docs", "https://example.com/a?b=1");
	store
}

#[test]
fn decodes_every_scalar_kind() {
	let record = decode_record(&settings_schema(), &settings_store(), &DecodeOptions::default()).expect("settings decode");

	assert_eq!(record.name.as_ref(), "Settings");
	assert_eq!(record.field("greeting"), Some(&ConfigValue::String("hello".into())));
	assert_eq!(record.field("enabled"), Some(&ConfigValue::Bool(true)));
	assert_eq!(record.field("retries"), Some(&ConfigValue::I64(3)));
	assert_eq!(record.field("ratio"), Some(&ConfigValue::F32(0.5)));
	assert_eq!(record.field("budget"), Some(&ConfigValue::F64(750.5)));

	let Some(ConfigValue::Url(url)) = record.field("docs") else {
		panic!("expected url value");
	};
	assert_eq!(url.as_str(), "https://example.com/a?b=1");
}

#[test]
fn missing_key_aborts_the_whole_decode() {
	let mut store = settings_store();
	store.insert_text("extra", "unused");
	let schema = Schema::new(
		"Settings",
		vec![FieldSchema::string("greeting"), FieldSchema::int("absent"), FieldSchema::bool("enabled")],
	);

	let err = decode_record(&schema, &store, &DecodeOptions::default()).expect_err("absent key should fail");
	assert!(matches!(err, DecodeError::KeyNotFound { field } if field == "absent"));
}

#[test]
fn bool_field_decodes_from_null_shaped_marker() {
	let mut store = MemoryStore::new();
	store.insert("flag", StoreValue::from_bool(true));
	store.insert("unset", StoreValue::empty());
	let schema = Schema::new("Flags", vec![FieldSchema::bool("flag"), FieldSchema::bool("unset")]);

	let record = decode_record(&schema, &store, &DecodeOptions::default()).expect("bool fields never fail on present keys");
	assert_eq!(record.field("flag"), Some(&ConfigValue::Bool(true)));
	assert_eq!(record.field("unset"), Some(&ConfigValue::Bool(false)));
}

#[test]
fn string_field_without_string_projection_is_value_not_found() {
	let mut store = MemoryStore::new();
	store.insert("label", StoreValue::from_number(Number::I64(12)));
	let schema = Schema::new("Labels", vec![FieldSchema::string("label")]);

	let err = decode_record(&schema, &store, &DecodeOptions::default()).expect_err("numeric-only value has no string");
	assert!(matches!(err, DecodeError::ValueNotFound { field, expected } if field == "label" && expected == "string"));
}

#[test]
fn null_shaped_value_is_value_not_found_for_non_bool_kinds() {
	let mut store = MemoryStore::new();
	store.insert("count", StoreValue::empty());
	let schema = Schema::new("Counts", vec![FieldSchema::int("count")]);

	let err = decode_record(&schema, &store, &DecodeOptions::default()).expect_err("null-shaped value should fail");
	assert!(matches!(err, DecodeError::ValueNotFound { field, expected } if field == "count" && expected == "int"));
}

#[test]
fn unparsable_url_is_data_corrupted() {
	let mut store = MemoryStore::new();
	store.insert_text("docs", "not a url");
	let schema = Schema::new("Docs", vec![FieldSchema::url("docs")]);

	let err = decode_record(&schema, &store, &DecodeOptions::default()).expect_err("schemeless text should fail");
	assert!(matches!(err, DecodeError::DataCorrupted { field, .. } if field == "docs"));
}

#[test]
fn nested_record_reads_dotted_keys() {
	let mut store = MemoryStore::new();
	store.insert_text("outer", "7");
	store.insert_text("inner.x", "hi");
	let schema = Schema::new(
		"Wrapper",
		vec![
			FieldSchema::int("outer"),
			FieldSchema::record("inner", Schema::new("Inner", vec![FieldSchema::string("x")])),
		],
	);

	let record = decode_record(&schema, &store, &DecodeOptions::default()).expect("nested decode");
	assert_eq!(record.field("outer"), Some(&ConfigValue::I64(7)));

	let Some(ConfigValue::Record(inner)) = record.field("inner") else {
		panic!("expected nested record");
	};
	assert_eq!(inner.name.as_ref(), "Inner");
	assert_eq!(inner.field("x"), Some(&ConfigValue::String("hi".into())));
}

#[test]
fn nested_leaf_errors_carry_the_dotted_path() {
	let mut store = MemoryStore::new();
	store.insert_text("outer", "7");
	let schema = Schema::new(
		"Wrapper",
		vec![
			FieldSchema::int("outer"),
			FieldSchema::record("inner", Schema::new("Inner", vec![FieldSchema::string("x")])),
		],
	);

	let err = decode_record(&schema, &store, &DecodeOptions::default()).expect_err("missing leaf should fail");
	assert!(matches!(err, DecodeError::KeyNotFound { field } if field == "inner.x"));
}

#[test]
fn nesting_below_one_level_is_unsupported() {
	let mut store = MemoryStore::new();
	store.insert_text("outer.inner.x", "hi");
	let schema = Schema::new(
		"Wrapper",
		vec![FieldSchema::record(
			"outer",
			Schema::new(
				"Middle",
				vec![FieldSchema::record("inner", Schema::new("Inner", vec![FieldSchema::string("x")]))],
			),
		)],
	);

	let err = decode_record(&schema, &store, &DecodeOptions::default()).expect_err("two nesting levels should fail");
	assert!(matches!(err, DecodeError::UnsupportedShape { field, .. } if field == "outer.inner"));
}

#[test]
fn sequence_fields_are_unsupported() {
	let mut store = MemoryStore::new();
	store.insert_text("tags", "a,b");
	let schema = Schema::new(
		"Tags",
		vec![FieldSchema::seq("tags", FieldKind::Scalar(ScalarKind::String))],
	);

	let err = decode_record(&schema, &store, &DecodeOptions::default()).expect_err("sequences should fail");
	assert!(matches!(err, DecodeError::UnsupportedShape { field, shape } if field == "tags" && shape == "sequence"));
}

#[test]
fn sized_int_fields_follow_the_coercion_policy() {
	let mut store = MemoryStore::new();
	store.insert_text("limit", "300");
	let schema = Schema::new("Limits", vec![FieldSchema::sized_int("limit", IntWidth::U8)]);

	let err = decode_record(&schema, &store, &DecodeOptions::default()).expect_err("sized widths rejected by default");
	assert!(matches!(err, DecodeError::UnsupportedIntWidth { field, width } if field == "limit" && width == "u8"));

	let opt = DecodeOptions { coerce_sized_ints: true };
	let record = decode_record(&schema, &store, &opt).expect("opt-in sized decode");
	assert_eq!(record.field("limit"), Some(&ConfigValue::U64(44)));
}

#[test]
fn decoding_twice_yields_equal_records() {
	let schema = settings_schema();
	let store = settings_store();

	let first = decode_record(&schema, &store, &DecodeOptions::default()).expect("first decode");
	let second = decode_record(&schema, &store, &DecodeOptions::default()).expect("second decode");
	assert_eq!(first, second);
}

#[test]
fn stack_drains_on_success_and_failure() {
	let mut store = MemoryStore::new();
	store.insert_text("outer", "7");
	store.insert_text("inner.x", "hi");
	let schema = Schema::new(
		"Wrapper",
		vec![
			FieldSchema::int("outer"),
			FieldSchema::record("inner", Schema::new("Inner", vec![FieldSchema::string("x")])),
		],
	);

	let mut decoder = Decoder::new(&store, DecodeOptions::default());
	decoder.decode(&schema).expect("nested decode");
	assert_eq!(decoder.depth(), 0);

	let failing = Schema::new(
		"Wrapper",
		vec![FieldSchema::record(
			"inner",
			Schema::new("Inner", vec![FieldSchema::string("missing")]),
		)],
	);
	decoder.decode(&failing).expect_err("missing nested leaf should fail");
	assert_eq!(decoder.depth(), 0);
}

#[test]
fn standalone_values_decode_from_the_frame_stack() {
	let store = MemoryStore::new();
	let mut decoder = Decoder::new(&store, DecodeOptions::default());

	let text = decoder.decode_value(StoreValue::from_text("42"), ScalarKind::Int).expect("standalone int");
	assert_eq!(text, ConfigValue::I64(42));
	assert_eq!(decoder.depth(), 0);

	let null_bool = decoder.decode_value(StoreValue::empty(), ScalarKind::Bool).expect("bool never fails");
	assert_eq!(null_bool, ConfigValue::Bool(false));

	let err = decoder.decode_value(StoreValue::empty(), ScalarKind::String).expect_err("null-shaped value should fail");
	assert!(matches!(err, DecodeError::ValueNotFound { field, expected } if field == "<root>" && expected == "string"));
	assert_eq!(decoder.depth(), 0);
}

#[test]
fn app_config_fixture_decodes() {
	let json = read_fixture_json("app_config.json");
	let store: MemoryStore = flatten_json(&json).into_iter().collect();

	let schema = Schema::new(
		"AppConfig",
		vec![
			FieldSchema::string("welcome_message"),
			FieldSchema::bool("onboarding_enabled"),
			FieldSchema::int("max_retries"),
			FieldSchema::double("request_timeout_ms"),
			FieldSchema::url("support_url"),
			FieldSchema::record(
				"theme",
				Schema::new(
					"Theme",
					vec![FieldSchema::string("accent_color"), FieldSchema::bool("dark_mode"), FieldSchema::float("contrast")],
				),
			),
		],
	);

	let record = decode_record(&schema, &store, &DecodeOptions::default()).expect("fixture decodes");
	assert_eq!(record.field("welcome_message"), Some(&ConfigValue::String("Hello from the console".into())));
	assert_eq!(record.field("onboarding_enabled"), Some(&ConfigValue::Bool(true)));
	assert_eq!(record.field("max_retries"), Some(&ConfigValue::I64(4)));
	assert_eq!(record.field("request_timeout_ms"), Some(&ConfigValue::F64(2500.5)));

	let Some(ConfigValue::Record(theme)) = record.field("theme") else {
		panic!("expected theme record");
	};
	assert_eq!(theme.field("accent_color"), Some(&ConfigValue::String("#ff7f50".into())));
	assert_eq!(theme.field("dark_mode"), Some(&ConfigValue::Bool(true)));
	assert_eq!(theme.field("contrast"), Some(&ConfigValue::F32(1.25)));
}
