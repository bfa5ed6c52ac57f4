use thiserror::Error;
use url::Url;

use crate::remote::decode::DecodeOptions;
use crate::remote::{ConfigValue, IntWidth, ScalarKind, StoreValue};

/// Failures produced by single-value coercion.
#[derive(Debug, Error)]
pub enum CoerceError {
	/// Value offers no numeric projection.
	#[error("no numeric projection")]
	NoNumericProjection,
	/// Value offers no string projection.
	#[error("no string projection")]
	NoStringProjection,
	/// String projection exists but does not parse as a URL.
	#[error("malformed url: {0}")]
	MalformedUrl(url::ParseError),
	/// Sized integer width rejected by the active coercion policy.
	#[error("unsupported integer width {}", .0.as_str())]
	UnsupportedWidth(IntWidth),
}

/// Coerce one store value into one scalar target kind.
///
/// Pure function of its inputs; numeric coercions truncate or widen without
/// range validation, mirroring the store's own numeric conversion.
pub fn coerce(value: &StoreValue, kind: ScalarKind, opt: &DecodeOptions) -> Result<ConfigValue, CoerceError> {
	match kind {
		ScalarKind::Bool => Ok(ConfigValue::Bool(value.as_bool())),
		ScalarKind::Int => {
			let number = value.as_number().ok_or(CoerceError::NoNumericProjection)?;
			Ok(ConfigValue::I64(number.as_i64()))
		}
		ScalarKind::SizedInt(width) => {
			if !opt.coerce_sized_ints {
				return Err(CoerceError::UnsupportedWidth(width));
			}
			let number = value.as_number().ok_or(CoerceError::NoNumericProjection)?;
			Ok(cast_sized(number.as_i64(), width))
		}
		ScalarKind::Float => {
			let number = value.as_number().ok_or(CoerceError::NoNumericProjection)?;
			Ok(ConfigValue::F32(number.as_f32()))
		}
		ScalarKind::Double => {
			let number = value.as_number().ok_or(CoerceError::NoNumericProjection)?;
			Ok(ConfigValue::F64(number.as_f64()))
		}
		ScalarKind::String => {
			let text = value.as_str().ok_or(CoerceError::NoStringProjection)?;
			Ok(ConfigValue::String(text.into()))
		}
		ScalarKind::Url => {
			let text = value.as_str().ok_or(CoerceError::NoStringProjection)?;
			let url = Url::parse(text).map_err(CoerceError::MalformedUrl)?;
			Ok(ConfigValue::Url(url))
		}
	}
}

fn cast_sized(value: i64, width: IntWidth) -> ConfigValue {
	match width {
		IntWidth::I8 => ConfigValue::I64(i64::from(value as i8)),
		IntWidth::I16 => ConfigValue::I64(i64::from(value as i16)),
		IntWidth::I32 => ConfigValue::I64(i64::from(value as i32)),
		IntWidth::I64 => ConfigValue::I64(value),
		IntWidth::U8 => ConfigValue::U64(u64::from(value as u8)),
		IntWidth::U16 => ConfigValue::U64(u64::from(value as u16)),
		IntWidth::U32 => ConfigValue::U64(u64::from(value as u32)),
		IntWidth::U64 => ConfigValue::U64(value as u64),
	}
}
