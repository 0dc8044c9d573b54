use std::fmt::{self, Display};
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::{Error, Result};

/// Separates the table from the id in the textual form of a record id
pub const SEPARATOR: char = ':';

/// Represents a record identifier
///
/// A record identifier consists of a table name and an id that uniquely identifies
/// a record within that table. Its canonical textual form is `table:id`.
///
/// The table can never contain a colon, while the id may: parsing splits on the
/// first colon only, so `events:2024:01` has the table `events` and the id
/// `2024:01`. Ids wrapped in angle brackets (`users:⟨a:b⟩`) get no special
/// treatment, the brackets are kept as part of the id.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RecordId {
	table: String,
	id: String,
}

impl RecordId {
	/// Creates a new record id from the given table and id
	pub fn new(table: impl Into<String>, id: impl Into<String>) -> Result<Self> {
		let table = table.into();
		let id = id.into();
		if table.contains(SEPARATOR) {
			let original = format!("{table}{SEPARATOR}{id}");
			return Err(Error::invalid_record_id("table contains a colon", &original));
		}
		Self::from_parts(table, id, None)
	}

	/// Parses a record id which must be in the format of `table:id`.
	pub fn parse(s: &str) -> Result<Self> {
		let (table, id) = s
			.split_once(SEPARATOR)
			.ok_or_else(|| Error::invalid_record_id("missing `:` separator", s))?;
		Self::from_parts(table.to_owned(), id.to_owned(), Some(s))
	}

	fn from_parts(table: String, id: String, original: Option<&str>) -> Result<Self> {
		let original = || match original {
			Some(s) => s.to_owned(),
			None => format!("{table}{SEPARATOR}{id}"),
		};
		if table.is_empty() {
			return Err(Error::invalid_record_id("table is empty", &original()));
		}
		if id.is_empty() {
			return Err(Error::invalid_record_id("id is empty", &original()));
		}
		Ok(Self {
			table,
			id,
		})
	}

	/// The name of the table containing the record
	pub fn table(&self) -> &str {
		&self.table
	}

	/// The id of the record within its table
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Checks if the record id belongs to one of the given tables.
	///
	/// An empty list matches every table.
	pub fn is_record_type(&self, tables: &[&str]) -> bool {
		tables.is_empty() || tables.contains(&self.table.as_str())
	}
}

impl Display for RecordId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{SEPARATOR}{}", self.table, self.id)
	}
}

impl FromStr for RecordId {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}

impl TryFrom<&str> for RecordId {
	type Error = Error;

	fn try_from(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}

impl TryFrom<(&str, &str)> for RecordId {
	type Error = Error;

	fn try_from((table, id): (&str, &str)) -> Result<Self> {
		Self::new(table, id)
	}
}

impl Serialize for RecordId {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for RecordId {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct RecordIdVisitor;

		impl Visitor<'_> for RecordIdVisitor {
			type Value = RecordId;

			fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str("a record id in the form `table:id`")
			}

			fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
			where
				E: de::Error,
			{
				RecordId::parse(v).map_err(E::custom)
			}
		}

		deserializer.deserialize_str(RecordIdVisitor)
	}
}
