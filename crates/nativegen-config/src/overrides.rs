//! Override tables
//!
//! A `.properties` file mapping binary class names to a purity and,
//! optionally, the Frege type name to emit:
//!
//! ```text
//! java.math.BigInteger = pure, Integer
//! java.util.ArrayList = st
//! java.io.PrintStream = io
//! ```

use nativegen_engine::{ClassRef, KnownType, KnownTypes, Purity};
use std::path::Path;
use tracing::{debug, warn};

use crate::class_name::derived_type_name;
use crate::error::ConfigError;
use crate::properties::{self, Property};

/// Known types read from one or more override files
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    known: KnownTypes,
}

impl OverrideTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Load overrides from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading overrides");
        Self::from_str(&content)
    }

    /// Parse overrides from properties text.
    ///
    /// When a class is listed twice the later entry wins.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let mut known = KnownTypes::new();
        for property in properties::parse(content)? {
            let (class_name, entry) = parse_entry(&property)?;
            debug!(class = %class_name, name = %entry.name, purity = %entry.purity, "override");
            known.insert(class_name, entry);
        }
        Ok(Self { known })
    }

    /// Load and merge several files in order; later files win
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self, ConfigError> {
        let mut table = Self::new();
        for path in paths {
            table.merge(Self::from_file(path.as_ref())?);
        }
        Ok(table)
    }

    /// Merge `other` into this table; entries of `other` win
    pub fn merge(&mut self, other: OverrideTable) {
        self.known.extend(other.known);
    }

    /// The overrides as a registry
    pub fn known_types(&self) -> &KnownTypes {
        &self.known
    }

    /// Consume the table, returning the registry
    pub fn into_known_types(self) -> KnownTypes {
        self.known
    }

    /// Get number of overrides
    pub fn len(&self) -> usize {
        self.known.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

fn parse_entry(property: &Property) -> Result<(String, KnownType), ConfigError> {
    let class = ClassRef::parse(&property.key).ok_or_else(|| ConfigError::InvalidClassName {
        line: property.line,
        name: property.key.clone(),
    })?;
    let malformed = || ConfigError::MalformedOverride {
        line: property.line,
        key: property.key.clone(),
        value: property.value.clone(),
    };

    let fields = split_fields(&property.value);
    let (purity_token, name) = match fields.as_slice() {
        [] => return Err(malformed()),
        [purity] => (purity.trim(), derived_type_name(&class)),
        [purity, name, ..] => {
            let name = name.trim();
            if name.is_empty() {
                return Err(malformed());
            }
            (purity.trim(), name.to_string())
        }
    };

    let purity = Purity::from_token(purity_token).unwrap_or_else(|| {
        if !purity_token.is_empty() {
            warn!(
                line = property.line,
                class = %property.key,
                token = purity_token,
                "unrecognized purity, assuming pure"
            );
        }
        Purity::Pure
    });
    Ok((class.name, KnownType::new(name, purity)))
}

/// Comma-split with trailing empty fields dropped; an empty value is one empty field
fn split_fields(value: &str) -> Vec<&str> {
    if value.is_empty() {
        return vec![""];
    }
    let mut fields: Vec<&str> = value.split(',').collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry<'a>(table: &'a OverrideTable, class: &str) -> &'a KnownType {
        table
            .known_types()
            .get(class)
            .unwrap_or_else(|| panic!("no override for {}", class))
    }

    #[test]
    fn test_purity_and_name() {
        let table = OverrideTable::from_str("java.math.BigInteger = pure, Integer\n").unwrap();
        assert_eq!(
            entry(&table, "java.math.BigInteger"),
            &KnownType::new("Integer", Purity::Pure)
        );
    }

    #[test]
    fn test_purity_only_derives_name() {
        let table = OverrideTable::from_str(
            "int = pure\n\
             java.util.ArrayList = st\n\
             java.util.Locale$Builder = ST\n\
             [Ljava.lang.String; = st\n\
             java.io.File = io\n",
        )
        .unwrap();
        assert_eq!(entry(&table, "int"), &KnownType::new("Int", Purity::Pure));
        assert_eq!(
            entry(&table, "java.util.ArrayList"),
            &KnownType::new("ArrayList", Purity::St)
        );
        assert_eq!(
            entry(&table, "java.util.Locale$Builder"),
            &KnownType::new("Locale_Builder", Purity::St)
        );
        assert_eq!(
            entry(&table, "[Ljava.lang.String;"),
            &KnownType::new("java.lang.StringArr", Purity::St)
        );
        assert_eq!(entry(&table, "java.io.File"), &KnownType::new("File", Purity::Io));
    }

    #[test]
    fn test_unrecognized_purity_defaults_to_pure() {
        let table = OverrideTable::from_str("java.util.Date = mutable, Date\njava.lang.Object\n")
            .unwrap();
        assert_eq!(entry(&table, "java.util.Date").purity, Purity::Pure);
        assert_eq!(
            entry(&table, "java.lang.Object"),
            &KnownType::new("Object", Purity::Pure)
        );
    }

    #[test]
    fn test_extra_fields_ignored() {
        let table = OverrideTable::from_str("java.util.HashMap = st, HashMap, ignored\n").unwrap();
        assert_eq!(
            entry(&table, "java.util.HashMap"),
            &KnownType::new("HashMap", Purity::St)
        );
    }

    #[test]
    fn test_later_entry_wins() {
        let table = OverrideTable::from_str("long = pure, Long\nlong = st, Counter\n").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(entry(&table, "long"), &KnownType::new("Counter", Purity::St));
    }

    #[test]
    fn test_malformed_value() {
        let err = OverrideTable::from_str("# overrides\njava.util.Set = ,,\n").unwrap_err();
        match err {
            ConfigError::MalformedOverride { line, key, .. } => {
                assert_eq!(line, 2);
                assert_eq!(key, "java.util.Set");
            }
            other => panic!("unexpected error: {}", other),
        }
        assert!(matches!(
            OverrideTable::from_str("java.util.Set = st,\n"),
            Ok(_)
        ));
        assert!(matches!(
            OverrideTable::from_str("java.util.Set = st,  \n"),
            Err(ConfigError::MalformedOverride { .. })
        ));
    }

    #[test]
    fn test_invalid_class_name() {
        let err = OverrideTable::from_str("java.util..List = st\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidClassName { line: 1, ref name } if name == "java.util..List"
        ));
    }

    #[test]
    fn test_bad_escape_in_name_rejected() {
        let err = OverrideTable::from_str("int = pure\njava.lang.Integer = pure, Int\\u00x1\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::MalformedEscape { line: 2, .. }));
    }

    #[test]
    fn test_split_fields() {
        assert_eq!(split_fields(""), vec![""]);
        assert_eq!(split_fields("st"), vec!["st"]);
        assert_eq!(split_fields("st,"), vec!["st"]);
        assert_eq!(split_fields(",,"), Vec::<&str>::new());
        assert_eq!(split_fields("pure, Integer"), vec!["pure", " Integer"]);
    }
}
