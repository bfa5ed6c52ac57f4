use std::collections::BTreeMap;

/// Read-only key/value source for one remote config namespace.
pub trait Store {
	/// Membership test against the store's currently known key set.
	fn has_key(&self, key: &str) -> bool;

	/// Return the value stored under `key`.
	///
	/// Never fails; absent keys yield a null-shaped value.
	fn value(&self, key: &str) -> StoreValue;
}

/// Markers the boolean projection recognizes as true.
const TRUE_MARKERS: [&str; 6] = ["1", "true", "t", "yes", "y", "on"];

/// One store value with its projections fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreValue {
	truthy: bool,
	number: Option<Number>,
	text: Option<Box<str>>,
}

impl StoreValue {
	/// Build a value from raw store text, deriving every projection.
	pub fn from_text(text: &str) -> Self {
		Self {
			truthy: is_true_marker(text),
			number: parse_number(text),
			text: Some(text.into()),
		}
	}

	/// Build a numeric-only value with no string projection.
	pub fn from_number(number: Number) -> Self {
		Self {
			truthy: false,
			number: Some(number),
			text: None,
		}
	}

	/// Build a boolean-only marker value.
	///
	/// Marker values carry no numeric or string projection, so they still
	/// read as null-shaped.
	pub fn from_bool(flag: bool) -> Self {
		Self {
			truthy: flag,
			number: None,
			text: None,
		}
	}

	/// The null-shaped value returned for absent keys.
	pub fn empty() -> Self {
		Self {
			truthy: false,
			number: None,
			text: None,
		}
	}

	/// Boolean projection; `false` unless the value was marked true.
	pub fn as_bool(&self) -> bool {
		self.truthy
	}

	/// Numeric projection, when the value has one.
	pub fn as_number(&self) -> Option<Number> {
		self.number
	}

	/// String projection, when the value has one.
	pub fn as_str(&self) -> Option<&str> {
		self.text.as_deref()
	}

	/// Return `true` when the value has neither a numeric nor a string projection.
	pub fn is_null(&self) -> bool {
		self.number.is_none() && self.text.is_none()
	}
}

/// Numeric projection of a store value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
	/// Whole-number literal.
	I64(i64),
	/// Floating-point literal.
	F64(f64),
}

impl Number {
	/// Integer view; truncates the float variant.
	pub fn as_i64(self) -> i64 {
		match self {
			Self::I64(value) => value,
			Self::F64(value) => value as i64,
		}
	}

	/// 32-bit float view.
	pub fn as_f32(self) -> f32 {
		match self {
			Self::I64(value) => value as f32,
			Self::F64(value) => value as f32,
		}
	}

	/// 64-bit float view.
	pub fn as_f64(self) -> f64 {
		match self {
			Self::I64(value) => value as f64,
			Self::F64(value) => value,
		}
	}
}

fn is_true_marker(text: &str) -> bool {
	TRUE_MARKERS.iter().any(|marker| text.eq_ignore_ascii_case(marker))
}

fn parse_number(text: &str) -> Option<Number> {
	if let Ok(value) = text.parse::<i64>() {
		return Some(Number::I64(value));
	}
	text.parse::<f64>().ok().filter(|value| value.is_finite()).map(Number::F64)
}

/// In-memory store useful for defaults and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	entries: BTreeMap<Box<str>, StoreValue>,
}

impl MemoryStore {
	/// Create an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a prebuilt value under `key`.
	pub fn insert(&mut self, key: &str, value: StoreValue) {
		self.entries.insert(key.into(), value);
	}

	/// Insert raw store text under `key`.
	pub fn insert_text(&mut self, key: &str, text: &str) {
		self.insert(key, StoreValue::from_text(text));
	}
}

impl FromIterator<(String, String)> for MemoryStore {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		let mut store = Self::new();
		for (key, text) in iter {
			store.insert_text(&key, &text);
		}
		store
	}
}

impl Store for MemoryStore {
	fn has_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	fn value(&self, key: &str) -> StoreValue {
		self.entries.get(key).cloned().unwrap_or_else(StoreValue::empty)
	}
}
