//! Abstract field types and their C# mapping
//!
//! Model descriptions tag each property with an abstract type name. This
//! module resolves those tags to the concrete C# type emitted into the
//! generated sources.
//!
//! # Supported Field Types
//!
//! - `string` - C# `string`
//! - `int` - C# `int`
//! - `decimal` - C# `decimal`
//! - `bool` - C# `bool`
//! - `datetime` - C# `DateTime`
//! - `guid` - C# `Guid`
//!
//! Matching ignores surrounding whitespace and case. Any other tag falls
//! back to `string`; an unknown type is never an error.
//!
//! # Examples
//!
//! ```text
//! "int"        → int
//! " DateTime " → DateTime
//! "GUID"       → Guid
//! "ZZZ"        → string
//! ```

use std::fmt;

/// Field type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Text
    String,
    /// 32-bit integer
    Int,
    /// Decimal number
    Decimal,
    /// Boolean
    Bool,
    /// Date and time
    DateTime,
    /// Globally unique identifier
    Guid,
}

impl FieldType {
    /// Every recognized field type, in vocabulary order.
    pub const ALL: [Self; 6] = [
        Self::String,
        Self::Int,
        Self::Decimal,
        Self::Bool,
        Self::DateTime,
        Self::Guid,
    ];

    /// Resolve an abstract type tag.
    ///
    /// Anything outside the vocabulary resolves to [`FieldType::String`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::FieldType;
    /// assert_eq!(FieldType::parse("int"), FieldType::Int);
    /// assert_eq!(FieldType::parse("  Guid "), FieldType::Guid);
    /// assert_eq!(FieldType::parse("ZZZ"), FieldType::String);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::lookup(input).unwrap_or(Self::String)
    }

    /// Resolve an abstract type tag, returning `None` when it is not part
    /// of the vocabulary.
    #[must_use]
    pub fn lookup(input: &str) -> Option<Self> {
        let key = input.trim().to_lowercase();
        Self::ALL.into_iter().find(|ty| ty.as_str() == key)
    }

    /// The canonical abstract tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Decimal => "decimal",
            Self::Bool => "bool",
            Self::DateTime => "datetime",
            Self::Guid => "guid",
        }
    }

    /// The C# type name emitted for this field type.
    #[must_use]
    pub const fn csharp_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Decimal => "decimal",
            Self::Bool => "bool",
            Self::DateTime => "DateTime",
            Self::Guid => "Guid",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an abstract type tag to its concrete C# type name.
///
/// ```
/// assert_eq!(crudgen::map_type("datetime"), "DateTime");
/// assert_eq!(crudgen::map_type("unknown"), "string");
/// ```
#[must_use]
pub fn map_type(abstract_type: &str) -> &'static str {
    FieldType::parse(abstract_type).csharp_type()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_types() {
        assert_eq!(map_type("string"), "string");
        assert_eq!(map_type("int"), "int");
        assert_eq!(map_type("decimal"), "decimal");
        assert_eq!(map_type("bool"), "bool");
        assert_eq!(map_type("datetime"), "DateTime");
        assert_eq!(map_type("guid"), "Guid");
    }

    #[test]
    fn test_normalization() {
        assert_eq!(map_type("  INT  "), "int");
        assert_eq!(map_type("DateTime"), "DateTime");
        assert_eq!(map_type("\tGuid\n"), "Guid");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(map_type("ZZZ"), "string");
        assert_eq!(map_type(""), "string");
        assert_eq!(map_type("integer"), "string");
        assert_eq!(map_type("date time"), "string");
        assert_eq!(FieldType::lookup("float"), None);
    }

    #[test]
    fn test_round_trip_tags() {
        for ty in FieldType::ALL {
            assert_eq!(FieldType::parse(ty.as_str()), ty);
            assert_eq!(ty.to_string(), ty.as_str());
        }
    }

    proptest! {
        #[test]
        fn unknown_tags_map_to_string(input in ".*") {
            let normalized = input.trim().to_lowercase();
            prop_assume!(FieldType::ALL.iter().all(|ty| ty.as_str() != normalized));
            prop_assert_eq!(map_type(&input), "string");
        }

        #[test]
        fn padding_and_case_are_ignored(idx in 0usize..6, pad in "[ \t]{0,3}", upper in any::<bool>()) {
            let ty = FieldType::ALL[idx];
            let tag = if upper { ty.as_str().to_uppercase() } else { ty.as_str().to_string() };
            let input = format!("{pad}{tag}{pad}");
            prop_assert_eq!(map_type(&input), ty.csharp_type());
        }
    }
}
