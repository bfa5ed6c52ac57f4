//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read and parse a JSON fixture file.
pub fn read_fixture_json(name: &str) -> Value {
	let path = fixture_path(name);
	let bytes = std::fs::read(&path).unwrap_or_else(|err| panic!("fixture {} unreadable: {err}", path.display()));
	serde_json::from_slice(&bytes).unwrap_or_else(|err| panic!("fixture {} is not valid JSON: {err}", path.display()))
}

/// Flatten a JSON object into dotted `(key, text)` pairs for a flat store.
///
/// Nested objects recurse with dotted prefixes; scalars stringify the way a
/// stringly store would hold them. Arrays and nulls have no flat
/// representation and panic.
pub fn flatten_json(value: &Value) -> Vec<(String, String)> {
	let Value::Object(map) = value else {
		panic!("fixture root must be a JSON object");
	};

	let mut out = Vec::new();
	flatten_object(&mut out, "", map);
	out
}

fn flatten_object(out: &mut Vec<(String, String)>, prefix: &str, map: &Map<String, Value>) {
	for (key, entry) in map {
		let path = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
		match entry {
			Value::Object(inner) => flatten_object(out, &path, inner),
			Value::Array(_) => panic!("array values have no flat store representation: {path}"),
			Value::Null => panic!("null values have no flat store representation: {path}"),
			Value::Bool(flag) => out.push((path, flag.to_string())),
			Value::Number(number) => out.push((path, number.to_string())),
			Value::String(text) => out.push((path, text.clone())),
		}
	}
}
