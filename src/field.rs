//! Schema entries and the records decoded from them.

use std::fmt;

/// Built-in type vocabulary. Any other tag is [TypeTag::Unknown].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    String,
    Name,
    Asset,
    Bool,
    Uint64,
    Unknown(String),
}

impl TypeTag {
    /// Tags of every built-in type, in the order the registry installs them.
    pub const BUILTIN: [TypeTag; 5] = [
        TypeTag::String,
        TypeTag::Name,
        TypeTag::Asset,
        TypeTag::Bool,
        TypeTag::Uint64,
    ];

    pub fn parse(tag: &str) -> Self {
        match tag {
            "string" => TypeTag::String,
            "name" => TypeTag::Name,
            "asset" => TypeTag::Asset,
            "bool" => TypeTag::Bool,
            "uint64" => TypeTag::Uint64,
            other => TypeTag::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::String => "string",
            TypeTag::Name => "name",
            TypeTag::Asset => "asset",
            TypeTag::Bool => "bool",
            TypeTag::Uint64 => "uint64",
            TypeTag::Unknown(tag) => tag,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named schema entry. The type is kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    /// Base key for the records this field produces.
    pub name: String,
    /// Type tag used to look up the field's decoder.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_name: String,
}

impl Field {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Field {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    pub fn tag(&self) -> TypeTag {
        TypeTag::parse(&self.type_name)
    }
}

/// One decoded `(key, value)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub key: String,
    pub value: String,
}

impl Record {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Record {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl From<(String, String)> for Record {
    fn from((key, value): (String, String)) -> Self {
        Record { key, value }
    }
}

impl From<Record> for (String, String) {
    fn from(record: Record) -> Self {
        (record.key, record.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tag_parse() {
        assert_eq!(TypeTag::parse("asset"), TypeTag::Asset);
        assert_eq!(
            TypeTag::parse("uint32"),
            TypeTag::Unknown("uint32".to_string())
        );
        assert_eq!(TypeTag::parse("String"), TypeTag::Unknown("String".to_string()));
    }

    #[test]
    fn test_type_tag_as_str_round_trips() {
        for tag in TypeTag::BUILTIN {
            assert_eq!(TypeTag::parse(tag.as_str()), tag);
        }
    }

    #[test]
    fn test_field_tag() {
        assert_eq!(Field::new("owner", "name").tag(), TypeTag::Name);
    }

    #[test]
    fn test_record_tuple_conversion() {
        let record = Record::from(("k".to_string(), "v".to_string()));
        let (key, value): (String, String) = record.into();
        assert_eq!((key.as_str(), value.as_str()), ("k", "v"));
    }
}
