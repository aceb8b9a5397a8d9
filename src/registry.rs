//! Type tag to decoder mapping.
//!
//! Each [FieldCodec] consumes its bytes from the cursor and appends zero or
//! more [Record]s. Tags missing from the registry end decoding early.

use std::{collections::HashMap, fmt, sync::Arc};

use crate::{
    cursor::ByteCursor,
    errors::ReadError,
    field::{Record, TypeTag},
    name::{name_to_string, symbol_code_to_string},
};

/// Decodes one schema field of a given type.
pub trait FieldCodec: Send + Sync {
    fn decode(
        &self,
        name: &str,
        cursor: &mut ByteCursor<'_>,
        out: &mut Vec<Record>,
    ) -> Result<(), ReadError>;
}

impl<F> FieldCodec for F
where
    F: Fn(&str, &mut ByteCursor<'_>, &mut Vec<Record>) -> Result<(), ReadError> + Send + Sync,
{
    fn decode(
        &self,
        name: &str,
        cursor: &mut ByteCursor<'_>,
        out: &mut Vec<Record>,
    ) -> Result<(), ReadError> {
        self(name, cursor, out)
    }
}

pub fn decode_string(
    name: &str,
    cursor: &mut ByteCursor<'_>,
    out: &mut Vec<Record>,
) -> Result<(), ReadError> {
    let value = cursor.read_string()?;
    out.push(Record::new(name, value));
    Ok(())
}

pub fn decode_name(
    name: &str,
    cursor: &mut ByteCursor<'_>,
    out: &mut Vec<Record>,
) -> Result<(), ReadError> {
    let value = cursor.read_u64()?;
    out.push(Record::new(name, name_to_string(value)));
    Ok(())
}

/// Emits `<name>_amount` and `<name>_symbol`. The symbol's precision byte is dropped.
pub fn decode_asset(
    name: &str,
    cursor: &mut ByteCursor<'_>,
    out: &mut Vec<Record>,
) -> Result<(), ReadError> {
    let amount = cursor.read_u64()?;
    let symbol = cursor.read_u64()?;
    out.push(Record::new(format!("{name}_amount"), amount.to_string()));
    out.push(Record::new(
        format!("{name}_symbol"),
        symbol_code_to_string(symbol >> 8),
    ));
    Ok(())
}

pub fn decode_bool(
    name: &str,
    cursor: &mut ByteCursor<'_>,
    out: &mut Vec<Record>,
) -> Result<(), ReadError> {
    let value = cursor.read_bool()?;
    out.push(Record::new(name, if value { "1" } else { "0" }));
    Ok(())
}

pub fn decode_uint64(
    name: &str,
    cursor: &mut ByteCursor<'_>,
    out: &mut Vec<Record>,
) -> Result<(), ReadError> {
    let value = cursor.read_u64()?;
    out.push(Record::new(name, value.to_string()));
    Ok(())
}

/// Set of decoders keyed by type tag. Cloning shares the codecs.
#[derive(Clone, Default)]
pub struct Registry {
    codecs: HashMap<String, Arc<dyn FieldCodec>>,
}

impl Registry {
    /// A registry with no types; every field truncates.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The `string`, `name`, `asset`, `bool` and `uint64` decoders.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for tag in TypeTag::BUILTIN {
            let codec: Arc<dyn FieldCodec> = match tag {
                TypeTag::String => Arc::new(decode_string),
                TypeTag::Name => Arc::new(decode_name),
                TypeTag::Asset => Arc::new(decode_asset),
                TypeTag::Bool => Arc::new(decode_bool),
                TypeTag::Uint64 => Arc::new(decode_uint64),
                TypeTag::Unknown(_) => continue,
            };
            registry.codecs.insert(tag.as_str().to_string(), codec);
        }
        registry
    }

    /// Adds or replaces the decoder for `tag`.
    pub fn register<C>(&mut self, tag: impl Into<String>, codec: C) -> &mut Self
    where
        C: FieldCodec + 'static,
    {
        self.codecs.insert(tag.into(), Arc::new(codec));
        self
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        self.codecs.remove(tag).is_some()
    }

    pub fn get(&self, tag: &str) -> Option<&dyn FieldCodec> {
        self.codecs.get(tag).map(|codec| codec.as_ref())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.codecs.contains_key(tag)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.codecs.keys().map(String::as_str).collect();
        tags.sort_unstable();
        f.debug_struct("Registry").field("tags", &tags).finish()
    }
}
