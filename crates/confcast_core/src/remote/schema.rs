/// Static description of a target record type.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
	/// Record type name carried into decoded output.
	pub name: Box<str>,
	/// Field descriptors in declaration order.
	pub fields: Vec<FieldSchema>,
}

impl Schema {
	/// Build a schema from named field descriptors.
	pub fn new(name: &str, fields: Vec<FieldSchema>) -> Self {
		Self {
			name: name.into(),
			fields,
		}
	}
}

/// One declared field with its store key and target kind.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
	/// Store key; nested fields compose dotted paths from enclosing keys.
	pub key: Box<str>,
	/// Declared target kind.
	pub kind: FieldKind,
}

impl FieldSchema {
	/// Build a field descriptor.
	pub fn new(key: &str, kind: FieldKind) -> Self {
		Self { key: key.into(), kind }
	}

	/// Boolean field.
	pub fn bool(key: &str) -> Self {
		Self::new(key, FieldKind::Scalar(ScalarKind::Bool))
	}

	/// Integer field.
	pub fn int(key: &str) -> Self {
		Self::new(key, FieldKind::Scalar(ScalarKind::Int))
	}

	/// Sized integer field; decoded only under the opt-in coercion policy.
	pub fn sized_int(key: &str, width: IntWidth) -> Self {
		Self::new(key, FieldKind::Scalar(ScalarKind::SizedInt(width)))
	}

	/// 32-bit float field.
	pub fn float(key: &str) -> Self {
		Self::new(key, FieldKind::Scalar(ScalarKind::Float))
	}

	/// 64-bit float field.
	pub fn double(key: &str) -> Self {
		Self::new(key, FieldKind::Scalar(ScalarKind::Double))
	}

	/// String field.
	pub fn string(key: &str) -> Self {
		Self::new(key, FieldKind::Scalar(ScalarKind::String))
	}

	/// URL field decoded from the string projection.
	pub fn url(key: &str) -> Self {
		Self::new(key, FieldKind::Scalar(ScalarKind::Url))
	}

	/// Nested record field.
	pub fn record(key: &str, schema: Schema) -> Self {
		Self::new(key, FieldKind::Record(schema))
	}

	/// Sequence field; declarable, but decoding always rejects it.
	pub fn seq(key: &str, element: FieldKind) -> Self {
		Self::new(key, FieldKind::Seq(Box::new(element)))
	}
}

/// Declared kind of one schema field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
	/// Single coercible value.
	Scalar(ScalarKind),
	/// One level of nested record.
	Record(Schema),
	/// Sequence of elements; not representable in a flat store.
	Seq(Box<FieldKind>),
}

impl FieldKind {
	/// Stable lowercase label.
	pub fn label(&self) -> &'static str {
		match self {
			Self::Scalar(kind) => kind.label(),
			Self::Record(_) => "record",
			Self::Seq(_) => "sequence",
		}
	}
}

/// Scalar target kinds the coercer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
	/// Boolean marker projection; total, never fails.
	Bool,
	/// Integer view of the numeric projection.
	Int,
	/// Explicitly sized integer variant.
	SizedInt(IntWidth),
	/// 32-bit float view of the numeric projection.
	Float,
	/// 64-bit float view of the numeric projection.
	Double,
	/// UTF-8 string projection.
	String,
	/// String projection parsed as a URL.
	Url,
}

impl ScalarKind {
	/// Stable lowercase label.
	pub fn label(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Int => "int",
			Self::SizedInt(width) => width.as_str(),
			Self::Float => "float",
			Self::Double => "double",
			Self::String => "string",
			Self::Url => "url",
		}
	}
}

/// Width selector for sized integer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
	/// Signed 8-bit.
	I8,
	/// Signed 16-bit.
	I16,
	/// Signed 32-bit.
	I32,
	/// Signed 64-bit.
	I64,
	/// Unsigned 8-bit.
	U8,
	/// Unsigned 16-bit.
	U16,
	/// Unsigned 32-bit.
	U32,
	/// Unsigned 64-bit.
	U64,
}

impl IntWidth {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::I8 => "i8",
			Self::I16 => "i16",
			Self::I32 => "i32",
			Self::I64 => "i64",
			Self::U8 => "u8",
			Self::U16 => "u16",
			Self::U32 => "u32",
			Self::U64 => "u64",
		}
	}
}
