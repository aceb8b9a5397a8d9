//! # abiflat
//!
//! Flattens binary action and table payloads into ordered `(key, value)`
//! string records, driven by a schema of field names and type tags.
//!
//! Supported tags are `string`, `name`, `asset`, `bool` and `uint64`. An
//! `asset` field expands into `<name>_amount` and `<name>_symbol` records. A
//! tag with no registered decoder stops decoding and returns the records
//! collected so far; running out of bytes is an error.
//!
//! ## Example
//!
//! ```
//! use abiflat::decoder::{DecodeStatus, FlatDecoder};
//! use abiflat::schema::Schema;
//! use abiflat::writer::ByteWriter;
//!
//! let schema = Schema::new(&["active", "owner"], &["bool", "name"]).unwrap();
//! let decoder = FlatDecoder::new(schema);
//!
//! let mut buf = ByteWriter::new();
//! buf.write_bool(true).write_u64(abiflat::name::string_to_name("alice").unwrap());
//!
//! let decoded = decoder.decode(buf.as_bytes()).unwrap();
//! assert_eq!(decoded.status, DecodeStatus::Complete);
//! assert_eq!(
//!     decoded.into_pairs(),
//!     vec![
//!         ("active".to_string(), "1".to_string()),
//!         ("owner".to_string(), "alice".to_string()),
//!     ]
//! );
//! ```

pub mod cursor;
pub mod decoder;
pub mod errors;
pub mod field;
pub mod name;
pub mod registry;
pub mod schema;
pub mod writer;

pub use decoder::{DecodeStatus, Decoded, FlatDecoder};
pub use errors::{DecodeError, ReadError};
pub use field::{Field, Record, TypeTag};
pub use registry::{FieldCodec, Registry};
pub use schema::Schema;
