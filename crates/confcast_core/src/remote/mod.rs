mod coerce;
mod decode;
mod error;
mod schema;
mod store;
mod value;

/// Single-value coercion entry point and failure kinds.
pub use coerce::{CoerceError, coerce};
/// Schema-driven decoding entry points and options.
pub use decode::{DecodeOptions, Decoder, decode_record};
/// Error and result aliases.
pub use error::{DecodeError, Result};
/// Schema descriptor types.
pub use schema::{FieldKind, FieldSchema, IntWidth, ScalarKind, Schema};
/// Store boundary contract and in-memory implementation.
pub use store::{MemoryStore, Number, Store, StoreValue};
/// Decoded runtime value types.
pub use value::{ConfigValue, FieldValue, RecordValue};
