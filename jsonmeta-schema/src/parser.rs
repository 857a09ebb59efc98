//! Type-string parser.
//!
//! Turns a raw field type such as `"Dictionary<string, List<int>>?"` into a
//! [`TypeDescriptor`] tree. Rules are tried in priority order:
//!
//! 1. trailing `?` marks the nullable wrapper
//! 2. built-in scalar keywords
//! 3. `enum Name`
//! 4. `T[]`
//! 5. `List<T>`
//! 6. `Dictionary<K, V>`
//! 7. anything else is a composite reference

use crate::error::{MetaError, Result};
use crate::types::{ScalarType, TypeDescriptor, TypeKind};

const ENUM_PREFIX: &str = "enum ";
const ARRAY_SUFFIX: &str = "[]";
const LIST_PREFIX: &str = "List<";
const DICTIONARY_PREFIX: &str = "Dictionary<";

/// Parses a type string into a descriptor.
///
/// # Arguments
/// * `type_str` - Raw type string from the schema
///
/// # Errors
/// Returns `MetaError::NoTypeInfo` for empty types or parts, and the
/// dictionary delimiter errors for malformed `Dictionary<...>` types.
pub fn parse_type(type_str: &str) -> Result<TypeDescriptor> {
    TypeParser { source: type_str }.parse(type_str)
}

/// Recursive-descent parser over one source type string.
struct TypeParser<'a> {
    source: &'a str,
}

impl TypeParser<'_> {
    fn parse(&self, raw: &str) -> Result<TypeDescriptor> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(MetaError::no_type_info(self.source));
        }

        if let Some(rest) = s.strip_suffix('?') {
            let mut desc = self.parse(rest)?;
            desc.nullable = true;
            return Ok(desc);
        }

        if let Some(scalar) = ScalarType::from_name(s) {
            return Ok(TypeDescriptor::scalar(scalar));
        }

        if s == ENUM_PREFIX.trim_end() {
            return Err(MetaError::no_type_info(self.source));
        }

        if let Some(name) = s.strip_prefix(ENUM_PREFIX) {
            // `enum Color[]` is an array of enums, handled by the suffix rule.
            if !name.ends_with(ARRAY_SUFFIX) {
                let name = name.trim();
                if name.is_empty() {
                    return Err(MetaError::no_type_info(self.source));
                }
                return Ok(TypeDescriptor::new(TypeKind::Enum(name.to_string())));
            }
        }

        if let Some(elem) = s.strip_suffix(ARRAY_SUFFIX) {
            let elem = self.parse(elem)?;
            return Ok(TypeDescriptor::new(TypeKind::Array(Box::new(elem))));
        }

        if let Some(body) = s.strip_prefix(LIST_PREFIX) {
            if let Some(elem) = body.strip_suffix('>') {
                let elem = self.parse(elem)?;
                return Ok(TypeDescriptor::new(TypeKind::List(Box::new(elem))));
            }
        }

        if let Some(body) = s.strip_prefix(DICTIONARY_PREFIX) {
            return self.parse_dictionary(body);
        }

        Ok(TypeDescriptor::new(TypeKind::Composite(s.to_string())))
    }

    /// Parses `K, V>` (the part after `Dictionary<`).
    fn parse_dictionary(&self, body: &str) -> Result<TypeDescriptor> {
        let Some(comma) = body.find(',') else {
            return Err(MetaError::MissingCommaInDictionary {
                type_str: self.source.to_string(),
            });
        };
        let (key, rest) = (&body[..comma], &body[comma + 1..]);

        // The closing `>` must end the type string.
        let close = match rest.rfind('>') {
            Some(close) if rest[close + 1..].trim().is_empty() => close,
            _ => {
                return Err(MetaError::MissingClosingInDictionary {
                    type_str: self.source.to_string(),
                });
            }
        };

        let key = self.parse(key)?;
        let value = self.parse(&rest[..close])?;
        Ok(TypeDescriptor::new(TypeKind::Dictionary {
            key: Box::new(key),
            value: Box::new(value),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(s: ScalarType) -> TypeDescriptor {
        TypeDescriptor::scalar(s)
    }

    #[test]
    fn test_parse_scalars() {
        assert_eq!(parse_type("int").unwrap(), scalar(ScalarType::Int));
        assert_eq!(parse_type(" string ").unwrap(), scalar(ScalarType::String));
        assert_eq!(parse_type("ulong").unwrap(), scalar(ScalarType::ULong));
    }

    #[test]
    fn test_parse_nullable() {
        let desc = parse_type("double?").unwrap();
        assert!(desc.nullable);
        assert_eq!(desc.kind, TypeKind::Scalar(ScalarType::Double));

        let desc = parse_type("Job?").unwrap();
        assert!(desc.nullable);
        assert_eq!(desc.kind, TypeKind::Composite("Job".to_string()));
    }

    #[test]
    fn test_parse_enum() {
        let desc = parse_type("enum Color").unwrap();
        assert_eq!(desc.kind, TypeKind::Enum("Color".to_string()));
        assert!(desc.is_primitive());

        let desc = parse_type("enum Color?").unwrap();
        assert!(desc.nullable);
        assert_eq!(desc.kind, TypeKind::Enum("Color".to_string()));
    }

    #[test]
    fn test_parse_enum_array() {
        let desc = parse_type("enum Color[]").unwrap();
        assert_eq!(
            desc.kind,
            TypeKind::Array(Box::new(TypeDescriptor::new(TypeKind::Enum(
                "Color".to_string()
            ))))
        );
    }

    #[test]
    fn test_parse_array_and_jagged() {
        let desc = parse_type("string[]").unwrap();
        assert_eq!(
            desc.kind,
            TypeKind::Array(Box::new(scalar(ScalarType::String)))
        );

        let desc = parse_type("int[][]").unwrap();
        assert_eq!(desc.canonical(), "int[][]");
    }

    #[test]
    fn test_parse_list() {
        let desc = parse_type("List<int>").unwrap();
        assert_eq!(desc.kind, TypeKind::List(Box::new(scalar(ScalarType::Int))));

        let desc = parse_type("List<Job>[]").unwrap();
        assert_eq!(desc.canonical(), "List<Job>[]");
    }

    #[test]
    fn test_parse_dictionary() {
        let desc = parse_type("Dictionary<string, int>").unwrap();
        match desc.kind {
            TypeKind::Dictionary { key, value } => {
                assert_eq!(*key, scalar(ScalarType::String));
                assert_eq!(*value, scalar(ScalarType::Int));
            }
            other => panic!("expected dictionary, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_dictionary_nested_value() {
        let desc = parse_type("Dictionary<string,List<double>>").unwrap();
        assert_eq!(desc.canonical(), "Dictionary<string, List<double>>");

        let desc = parse_type("Dictionary<string, Dictionary<string, bool>>?").unwrap();
        assert!(desc.nullable);
        assert_eq!(
            desc.canonical(),
            "Dictionary<string, Dictionary<string, bool>>?"
        );
    }

    #[test]
    fn test_parse_dictionary_missing_comma() {
        let err = parse_type("Dictionary<string>").unwrap_err();
        assert_eq!(
            err,
            MetaError::MissingCommaInDictionary {
                type_str: "Dictionary<string>".to_string()
            }
        );
    }

    #[test]
    fn test_parse_dictionary_missing_closing() {
        let err = parse_type("Dictionary<string, int").unwrap_err();
        assert_eq!(err.kind_name(), "MissingClosingInDictionary");
    }

    #[test]
    fn test_parse_dictionary_trailing_text() {
        let err = parse_type("Dictionary<string, int>garbage").unwrap_err();
        assert_eq!(
            err,
            MetaError::MissingClosingInDictionary {
                type_str: "Dictionary<string, int>garbage".to_string()
            }
        );
        assert!(parse_type("Dictionary<string, int> ").is_ok());
        assert!(parse_type("Dictionary<string, List<int>>").is_ok());
    }

    #[test]
    fn test_parse_empty_parts() {
        assert_eq!(parse_type("").unwrap_err().kind_name(), "NoTypeInfo");
        assert_eq!(parse_type("?").unwrap_err().kind_name(), "NoTypeInfo");
        assert_eq!(parse_type("[]").unwrap_err().kind_name(), "NoTypeInfo");
        assert_eq!(parse_type("List<>").unwrap_err().kind_name(), "NoTypeInfo");
        assert_eq!(parse_type("enum  ").unwrap_err().kind_name(), "NoTypeInfo");
        assert_eq!(parse_type("enum ?").unwrap_err().kind_name(), "NoTypeInfo");
        assert_eq!(
            parse_type("Dictionary<, int>").unwrap_err().kind_name(),
            "NoTypeInfo"
        );
    }

    #[test]
    fn test_parse_composite_fallback() {
        let desc = parse_type("Person").unwrap();
        assert_eq!(desc.kind, TypeKind::Composite("Person".to_string()));
        assert!(!desc.is_primitive());

        // An unterminated list is not a list.
        let desc = parse_type("List<int").unwrap();
        assert_eq!(desc.kind, TypeKind::Composite("List<int".to_string()));
    }

    #[test]
    fn test_error_reports_whole_type() {
        let err = parse_type("List<Dictionary<string>>").unwrap_err();
        assert_eq!(
            err,
            MetaError::MissingCommaInDictionary {
                type_str: "List<Dictionary<string>>".to_string()
            }
        );
    }
}
