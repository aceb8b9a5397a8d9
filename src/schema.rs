//! Schema: ordered field names and type tags describing a flat binary record.

use crate::{errors::SchemaError, field::Field};

/// Immutable list of [Field]s in wire order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Pairs `names` and `types` by position. Type tags are not validated here.
    pub fn new<N, T>(names: &[N], types: &[T]) -> Result<Self, SchemaError>
    where
        N: AsRef<str>,
        T: AsRef<str>,
    {
        if names.len() != types.len() {
            return Err(SchemaError::LengthMismatch {
                names: names.len(),
                types: types.len(),
            });
        }

        let fields = names
            .iter()
            .zip(types)
            .map(|(name, ty)| Field::new(name.as_ref(), ty.as_ref()))
            .collect();

        Ok(Self { fields })
    }

    pub fn from_fields(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.type_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pairs_by_position() {
        let schema = Schema::new(&["a", "b"], &["bool", "asset"]).unwrap();
        assert_eq!(
            schema.fields(),
            &[Field::new("a", "bool"), Field::new("b", "asset")]
        );
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(schema.types().collect::<Vec<_>>(), vec!["bool", "asset"]);
    }

    #[test]
    fn test_new_length_mismatch() {
        let result = Schema::new(&["a", "b"], &["bool"]);
        assert_eq!(
            result,
            Err(SchemaError::LengthMismatch { names: 2, types: 1 })
        );
    }

    #[test]
    fn test_new_keeps_unknown_types() {
        let names = vec!["x".to_string()];
        let types = vec!["frobnicate".to_string()];
        let schema = Schema::new(&names, &types).unwrap();
        assert_eq!(schema.fields()[0].type_name, "frobnicate");
    }

    #[test]
    fn test_empty() {
        let schema = Schema::new::<&str, &str>(&[], &[]).unwrap();
        assert!(schema.is_empty());
        assert_eq!(schema.len(), 0);
    }
}
