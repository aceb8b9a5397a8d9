//! Flat decoder: walks a [Schema] over a byte buffer and collects string records.

use tracing::{debug, trace};

use crate::{
    cursor::ByteCursor,
    errors::DecodeError,
    field::Record,
    registry::Registry,
    schema::Schema,
};

/// How a successful decode ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecodeStatus {
    /// Every schema field was decoded.
    Complete,
    /// Decoding stopped at a field whose type has no registered decoder.
    /// Records cover fields `0..index` only.
    Truncated { index: usize, type_name: String },
}

/// Output of [FlatDecoder::decode].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decoded {
    pub records: Vec<Record>,
    pub status: DecodeStatus,
    /// Bytes read from the buffer. Trailing bytes are left unread.
    pub consumed: usize,
}

impl Decoded {
    pub fn is_complete(&self) -> bool {
        self.status == DecodeStatus::Complete
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self.status, DecodeStatus::Truncated { .. })
    }

    /// Records as `(key, value)` tuples.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.records.into_iter().map(Into::into).collect()
    }
}

/// Decodes buffers laid out according to a fixed [Schema].
///
/// Holds no per-call state, so one decoder can be shared across threads.
#[derive(Debug, Clone)]
pub struct FlatDecoder {
    schema: Schema,
    registry: Registry,
}

impl FlatDecoder {
    /// Uses [Registry::builtin].
    pub fn new(schema: Schema) -> Self {
        Self::with_registry(schema, Registry::builtin())
    }

    pub fn with_registry(schema: Schema, registry: Registry) -> Self {
        Self { schema, registry }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Decodes `data` from offset 0, one schema field at a time.
    ///
    /// A field with an unregistered type ends decoding successfully with
    /// [DecodeStatus::Truncated]. A failed primitive read discards all
    /// records and returns a [DecodeError] naming the field.
    pub fn decode(&self, data: &[u8]) -> Result<Decoded, DecodeError> {
        let mut cursor = ByteCursor::new(data);
        let mut records = Vec::with_capacity(self.schema.len());

        for (index, field) in self.schema.fields().iter().enumerate() {
            let Some(codec) = self.registry.get(&field.type_name) else {
                debug!(
                    index,
                    field = %field.name,
                    type_name = %field.type_name,
                    "unknown type, stopping decode"
                );
                return Ok(Decoded {
                    records,
                    status: DecodeStatus::Truncated {
                        index,
                        type_name: field.type_name.clone(),
                    },
                    consumed: cursor.position(),
                });
            };

            trace!(
                index,
                field = %field.name,
                type_name = %field.type_name,
                offset = cursor.position(),
                "decoding field"
            );

            if let Err(source) = codec.decode(&field.name, &mut cursor, &mut records) {
                debug!(index, field = %field.name, error = %source, "field decode failed");
                return Err(DecodeError {
                    index,
                    field: field.name.clone(),
                    offset: cursor.position(),
                    source,
                });
            }
        }

        Ok(Decoded {
            records,
            status: DecodeStatus::Complete,
            consumed: cursor.position(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{errors::ReadError, name::Symbol, writer::ByteWriter};

    use super::*;

    fn decoder(names: &[&str], types: &[&str]) -> FlatDecoder {
        FlatDecoder::new(Schema::new(names, types).unwrap())
    }

    #[test]
    fn test_decode_empty_schema() {
        let result = decoder(&[], &[]).decode(&[0x01, 0x02]).unwrap();
        assert!(result.records.is_empty());
        assert_eq!(result.status, DecodeStatus::Complete);
        assert_eq!(result.consumed, 0);
    }

    #[test]
    fn test_decode_all_builtin_types() {
        let mut writer = ByteWriter::new();
        writer
            .write_string("memo text")
            .unwrap()
            .write_u64(6138663577826885632)
            .write_u64(25)
            .write_u64(Symbol::new(4, "EOS").unwrap().to_raw())
            .write_bool(false)
            .write_u64(42);

        let result = decoder(
            &["memo", "from", "quantity", "flag", "id"],
            &["string", "name", "asset", "bool", "uint64"],
        )
        .decode(writer.as_bytes())
        .unwrap();

        assert!(result.is_complete());
        assert_eq!(result.consumed, writer.len());
        assert_eq!(
            result.into_pairs(),
            vec![
                ("memo".to_string(), "memo text".to_string()),
                ("from".to_string(), "eosio".to_string()),
                ("quantity_amount".to_string(), "25".to_string()),
                ("quantity_symbol".to_string(), "EOS".to_string()),
                ("flag".to_string(), "0".to_string()),
                ("id".to_string(), "42".to_string()),
            ]
        );
    }

    #[test]
    fn test_decode_truncates_on_unknown_type() {
        let mut writer = ByteWriter::new();
        writer.write_u64(7);

        let result = decoder(&["a", "b", "c"], &["uint64", "uint32", "uint64"])
            .decode(writer.as_bytes())
            .unwrap();

        assert_eq!(result.records, vec![Record::new("a", "7")]);
        assert_eq!(
            result.status,
            DecodeStatus::Truncated {
                index: 1,
                type_name: "uint32".to_string()
            }
        );
        assert_eq!(result.consumed, 8);
    }

    #[test]
    fn test_decode_unknown_first_field_ignores_buffer() {
        let result = decoder(&["a"], &["frobnicate"]).decode(&[]).unwrap();
        assert!(result.records.is_empty());
        assert!(result.is_truncated());
    }

    #[test]
    fn test_decode_error_reports_failing_field() {
        let mut writer = ByteWriter::new();
        writer.write_bool(true).write_u64(100).write_u8(0x04);

        let err = decoder(&["active", "balance"], &["bool", "asset"])
            .decode(writer.as_bytes())
            .unwrap_err();

        assert_eq!(err.index, 1);
        assert_eq!(err.field, "balance");
        assert_eq!(err.offset, 9);
        assert_eq!(
            err.source,
            ReadError::OutOfBounds {
                needed: 8,
                remaining: 1
            }
        );
    }

    #[test]
    fn test_decode_error_before_unknown_type() {
        let err = decoder(&["n", "x"], &["uint64", "frobnicate"])
            .decode(&[0x01])
            .unwrap_err();
        assert_eq!(err.index, 0);
    }

    #[test]
    fn test_decode_invalid_bool() {
        let err = decoder(&["flag"], &["bool"]).decode(&[0x02]).unwrap_err();
        assert_eq!(err.source, ReadError::InvalidBool(2));
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn test_decode_is_stateless_between_calls() {
        let decoder = decoder(&["n"], &["uint64"]);
        let first = decoder.decode(&1u64.to_le_bytes()).unwrap();
        let second = decoder.decode(&2u64.to_le_bytes()).unwrap();
        assert_eq!(first.records, vec![Record::new("n", "1")]);
        assert_eq!(second.records, vec![Record::new("n", "2")]);
    }

    #[test]
    fn test_decode_with_empty_registry_truncates_immediately() {
        let decoder = FlatDecoder::with_registry(
            Schema::new(&["n"], &["uint64"]).unwrap(),
            Registry::empty(),
        );
        let result = decoder.decode(&1u64.to_le_bytes()).unwrap();
        assert!(result.records.is_empty());
        assert_eq!(
            result.status,
            DecodeStatus::Truncated {
                index: 0,
                type_name: "uint64".to_string()
            }
        );
    }
}
