use std::collections::BTreeMap;

use crate::Value;

/// Represents an object with key-value pairs
///
/// An object is a collection of key-value pairs where keys are strings and values can be of any
/// type. The underlying storage is a `BTreeMap<String, Value>` which keeps keys unique and sorted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object(pub(crate) BTreeMap<String, Value>);

impl Object {
	/// Create a new empty object
	pub fn new() -> Self {
		Object(BTreeMap::new())
	}

	/// Get the value of a key
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Get a mutable reference to the value of a key
	pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
		self.0.get_mut(key)
	}

	/// Insert a key-value pair into the object, returning any previous value
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.0.insert(key.into(), value.into())
	}

	/// Remove a key-value pair from the object
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.0.remove(key)
	}

	/// Check whether the object contains a key
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Get the number of key-value pairs in the object
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Check if the object is empty
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Get an iterator over the key-value pairs in the object
	pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, Value> {
		self.0.iter()
	}

	/// Consume the object, returning the inner map
	pub fn into_inner(self) -> BTreeMap<String, Value> {
		self.0
	}
}

impl From<BTreeMap<String, Value>> for Object {
	fn from(v: BTreeMap<String, Value>) -> Self {
		Self(v)
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

impl IntoIterator for Object {
	type Item = (String, Value);
	type IntoIter = std::collections::btree_map::IntoIter<String, Value>;
	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Object {
	type Item = (&'a String, &'a Value);
	type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;
	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
