use crate::remote::coerce::{CoerceError, coerce};
use crate::remote::{ConfigValue, DecodeError, FieldKind, FieldSchema, FieldValue, RecordValue, Result, ScalarKind, Schema, Store, StoreValue};

/// Separator used to compose nested field keys.
const KEY_SEPARATOR: &str = ".";

/// Maximum depth of nested record fields below the top-level record.
const MAX_RECORD_DEPTH: usize = 1;

/// Behavior switches for schema-driven decoding.
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
	/// Coerce sized integer fields by the `Int` rule instead of rejecting them.
	pub coerce_sized_ints: bool,
}

/// Decode a schema-described record from a store.
pub fn decode_record<S: Store + ?Sized>(schema: &Schema, store: &S, opt: &DecodeOptions) -> Result<RecordValue> {
	let mut decoder = Decoder::new(store, opt.clone());
	decoder.decode(schema)
}

/// Stateful walker for one in-flight decode call.
///
/// Holds the traversal stack of in-progress value frames and the dotted key
/// path used for store lookups and error attribution. Both drain to empty
/// before every public call returns, success or failure.
pub struct Decoder<'s, S: Store + ?Sized> {
	store: &'s S,
	opt: DecodeOptions,
	stack: Vec<StoreValue>,
	path: Vec<Box<str>>,
}

impl<'s, S: Store + ?Sized> Decoder<'s, S> {
	/// Create a decoder over `store`.
	pub fn new(store: &'s S, opt: DecodeOptions) -> Self {
		Self {
			store,
			opt,
			stack: Vec::new(),
			path: Vec::new(),
		}
	}

	/// Current traversal stack depth.
	pub fn depth(&self) -> usize {
		self.stack.len()
	}

	/// Decode `schema` against the store.
	///
	/// Fails fast on the first field error; no partial records.
	pub fn decode(&mut self, schema: &Schema) -> Result<RecordValue> {
		assert!(self.stack.is_empty(), "decode re-entered with frames in progress");

		log::trace!("decoding record {}", schema.name);
		let fields = self
			.decode_fields(schema)
			.inspect_err(|err| log::debug!("decode of {} failed: {err}", schema.name))?;
		Ok(RecordValue {
			name: schema.name.clone(),
			fields,
		})
	}

	/// Decode one standalone value without key resolution.
	///
	/// This is the non-keyed path: the value is pushed as the current frame
	/// and coerced from the top of the stack. Failures are attributed to
	/// `<root>`.
	pub fn decode_value(&mut self, value: StoreValue, kind: ScalarKind) -> Result<ConfigValue> {
		self.with_frame(value, |this| {
			let top = this.top_frame();
			if kind != ScalarKind::Bool && top.is_null() {
				return Err(DecodeError::ValueNotFound {
					field: this.field_path(),
					expected: kind.label(),
				});
			}
			coerce(top, kind, &this.opt).map_err(|err| coerce_failure(this.field_path(), kind, err))
		})
	}

	fn decode_fields(&mut self, schema: &Schema) -> Result<Vec<FieldValue>> {
		let mut fields = Vec::with_capacity(schema.fields.len());
		for field in &schema.fields {
			self.path.push(field.key.clone());
			let out = self.decode_field(field);
			self.path.pop();
			fields.push(FieldValue {
				name: field.key.clone(),
				value: out?,
			});
		}
		Ok(fields)
	}

	fn decode_field(&mut self, field: &FieldSchema) -> Result<ConfigValue> {
		match &field.kind {
			FieldKind::Scalar(kind) => self.decode_scalar_field(*kind),
			FieldKind::Record(nested) => self.decode_record_field(nested),
			FieldKind::Seq(_) => Err(DecodeError::UnsupportedShape {
				field: self.field_path(),
				shape: "sequence",
			}),
		}
	}

	fn decode_scalar_field(&mut self, kind: ScalarKind) -> Result<ConfigValue> {
		let key = self.field_path();
		if !self.store.has_key(&key) {
			return Err(DecodeError::KeyNotFound { field: key });
		}

		let value = self.store.value(&key);
		if kind != ScalarKind::Bool && value.is_null() {
			return Err(DecodeError::ValueNotFound {
				field: key,
				expected: kind.label(),
			});
		}

		coerce(&value, kind, &self.opt).map_err(|err| coerce_failure(key, kind, err))
	}

	fn decode_record_field(&mut self, nested: &Schema) -> Result<ConfigValue> {
		if self.stack.len() >= MAX_RECORD_DEPTH {
			return Err(DecodeError::UnsupportedShape {
				field: self.field_path(),
				shape: "record nesting deeper than one level",
			});
		}

		log::trace!("descending into nested record {}", nested.name);
		let value = self.store.value(&self.field_path());
		let fields = self.with_frame(value, |this| this.decode_fields(nested))?;
		Ok(ConfigValue::Record(RecordValue {
			name: nested.name.clone(),
			fields,
		}))
	}

	/// Run `f` with `value` as the current frame, popping on every exit path.
	fn with_frame<T>(&mut self, value: StoreValue, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
		self.stack.push(value);
		let out = f(self);
		let popped = self.stack.pop();
		assert!(popped.is_some(), "value stack underflow");
		out
	}

	fn top_frame(&self) -> &StoreValue {
		self.stack.last().expect("value stack is empty")
	}

	fn field_path(&self) -> String {
		if self.path.is_empty() {
			return String::from("<root>");
		}
		self.path.join(KEY_SEPARATOR)
	}
}

fn coerce_failure(field: String, kind: ScalarKind, err: CoerceError) -> DecodeError {
	match err {
		CoerceError::NoNumericProjection | CoerceError::NoStringProjection => DecodeError::ValueNotFound {
			field,
			expected: kind.label(),
		},
		CoerceError::MalformedUrl(err) => DecodeError::DataCorrupted {
			field,
			detail: err.to_string(),
		},
		CoerceError::UnsupportedWidth(width) => DecodeError::UnsupportedIntWidth {
			field,
			width: width.as_str(),
		},
	}
}

#[cfg(test)]
mod tests;
