//! Ordered query-string builder scoped to a single request.

// self
use crate::_prelude::*;

/// Ordered key/value query parameters.
///
/// Keys are unique: [`with`](Self::with) overwrites an existing key in place so its original
/// position is kept, otherwise the pair is appended. Every mutation consumes the builder and
/// returns a new value, so no query state is shared across calls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);
impl QueryParams {
	/// Creates an empty parameter list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets `key` to `value`; the last write wins.
	pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
		let key = key.into();
		let value = value.to_string();

		match self.0.iter_mut().find(|(existing, _)| *existing == key) {
			Some((_, slot)) => *slot = value,
			None => self.0.push((key, value)),
		}

		self
	}

	/// Sets `key` only when `value` is present.
	pub fn with_opt<V>(self, key: impl Into<String>, value: Option<V>) -> Self
	where
		V: ToString,
	{
		match value {
			Some(value) => self.with(key, value),
			None => self,
		}
	}

	/// Merges `other` into `self`; keys from `other` win.
	pub fn merged(self, other: &QueryParams) -> Self {
		other.iter().fold(self, |acc, (key, value)| acc.with(key, value))
	}

	/// Returns the value stored for `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.iter().find(|(existing, _)| existing == key).map(|(_, value)| value.as_str())
	}

	/// Iterates over the pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no parameters are set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Appends the pairs to `url`'s query string.
	pub fn apply_to(&self, url: &mut Url) {
		if self.is_empty() {
			return;
		}

		let mut pairs = url.query_pairs_mut();

		for (key, value) in self.iter() {
			pairs.append_pair(key, value);
		}
	}
}
impl<K, V> FromIterator<(K, V)> for QueryParams
where
	K: Into<String>,
	V: ToString,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		iter.into_iter().fold(Self::new(), |acc, (key, value)| acc.with(key, value))
	}
}
