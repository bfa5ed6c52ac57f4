use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors produced while decoding remote config values into records.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// Declared field key is absent from the store's known key set.
	#[error("key not found: {field}")]
	KeyNotFound {
		/// Dotted field path from the decode root.
		field: String,
	},
	/// Key exists but the value is null-shaped or lacks the required projection.
	#[error("value not found for {field} (expected {expected})")]
	ValueNotFound {
		/// Dotted field path from the decode root.
		field: String,
		/// Declared target kind label.
		expected: &'static str,
	},
	/// Value projects to the right kind but fails secondary validation.
	#[error("corrupted value for {field}: {detail}")]
	DataCorrupted {
		/// Dotted field path from the decode root.
		field: String,
		/// Validation failure description.
		detail: String,
	},
	/// Schema requests a container capability the decoder does not implement.
	#[error("unsupported shape for {field}: {shape}")]
	UnsupportedShape {
		/// Dotted field path from the decode root.
		field: String,
		/// Requested capability label.
		shape: &'static str,
	},
	/// Schema requests a sized integer width the active policy rejects.
	#[error("unsupported integer width {width} for {field}")]
	UnsupportedIntWidth {
		/// Dotted field path from the decode root.
		field: String,
		/// Requested width label.
		width: &'static str,
	},
}
