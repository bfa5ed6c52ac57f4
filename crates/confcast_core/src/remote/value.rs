use url::Url;

/// Decoded runtime value emitted by schema-driven decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	I64(i64),
	/// Unsigned integer scalar.
	U64(u64),
	/// 32-bit float scalar.
	F32(f32),
	/// 64-bit float scalar.
	F64(f64),
	/// UTF-8 string value.
	String(Box<str>),
	/// Parsed URL value.
	Url(Url),
	/// Nested decoded record.
	Record(RecordValue),
}

/// Decoded record with field names preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
	/// Record type name from the schema.
	pub name: Box<str>,
	/// Decoded field values in declaration order.
	pub fields: Vec<FieldValue>,
}

impl RecordValue {
	/// Look up a decoded field value by name.
	pub fn field(&self, name: &str) -> Option<&ConfigValue> {
		self.fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value)
	}
}

/// Named decoded field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field identifier, the bare key segment.
	pub name: Box<str>,
	/// Decoded field payload.
	pub value: ConfigValue,
}
