//! Response decoding: empty-body handling, per-call JSON rewrites, typed decoding.

// crates.io
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use serde_path_to_error::Track;
// self
use crate::{_prelude::*, http::ApiResponse};

/// Rewrites the raw JSON tree of a response before typed decoding.
pub trait ResponseDecoder
where
	Self: 'static + Debug + Send + Sync,
{
	/// Mutates `value` in place.
	fn rewrite(&self, value: &mut Value);
}

/// Rewrites legacy `{"cents": n, "currency_iso": c}` amounts into `{"amount": "n/100", "currency": c}`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CentsAmountDecoder;
impl ResponseDecoder for CentsAmountDecoder {
	fn rewrite(&self, value: &mut Value) {
		rewrite_cents(value);
	}
}

fn rewrite_cents(value: &mut Value) {
	if let Some(replacement) = value.as_object().and_then(cents_to_amount) {
		*value = replacement;

		return;
	}

	match value {
		Value::Object(map) => map.values_mut().for_each(rewrite_cents),
		Value::Array(items) => items.iter_mut().for_each(rewrite_cents),
		_ => (),
	}
}

fn cents_to_amount(map: &Map<String, Value>) -> Option<Value> {
	let cents = map.get("cents")?.as_i64()?;
	let currency = map.get("currency_iso")?.as_str()?;

	Some(serde_json::json!({
		"amount": Decimal::new(cents, 2).to_string(),
		"currency": currency,
	}))
}

/// Decodes `response` into `T`, running `decoders` over the JSON tree first.
///
/// Blank bodies decode as JSON `null`; anything but whitespace after the value is an error.
pub(crate) fn decode_body<T>(
	endpoint: &str,
	response: &ApiResponse,
	decoders: &[Arc<dyn ResponseDecoder>],
) -> Result<T>
where
	T: DeserializeOwned,
{
	let bytes: &[u8] =
		if response.body.iter().all(u8::is_ascii_whitespace) { b"null" } else { &response.body };
	let to_error = |source: serde_path_to_error::Error<serde_json::Error>| Error::Decode {
		endpoint: endpoint.to_owned(),
		status: response.status,
		source,
	};
	let mut deserializer = serde_json::Deserializer::from_slice(bytes);
	let trailing = |source: serde_json::Error| {
		to_error(serde_path_to_error::Error::new(Track::new().path(), source))
	};

	if decoders.is_empty() {
		let decoded = serde_path_to_error::deserialize(&mut deserializer).map_err(to_error)?;

		deserializer.end().map_err(trailing)?;

		return Ok(decoded);
	}

	let mut value: Value =
		serde_path_to_error::deserialize(&mut deserializer).map_err(to_error)?;

	deserializer.end().map_err(trailing)?;

	for decoder in decoders {
		decoder.rewrite(&mut value);
	}

	serde_path_to_error::deserialize(value).map_err(to_error)
}
