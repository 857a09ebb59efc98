//! Top-level generator.

use crate::csharp::{ConversionPass, FromJsonGenerator, ToJsonGenerator};
use crate::emit::{Unit, render};
use crate::options::GenerateOptions;
use jsonmeta_schema::{Result, Schema};
use std::fmt;
use std::str::FromStr;

/// Conversion direction of the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// JSON value → typed value (`FromJSON`).
    FromJson,
    /// Typed value → JSON value (`ToJSON`).
    ToJson,
}

impl Direction {
    /// Class name used when no override is given.
    #[must_use]
    pub const fn default_class_name(&self) -> &'static str {
        match self {
            Self::FromJson => "FromJSONExtensions",
            Self::ToJson => "ToJSONExtensions",
        }
    }

    /// Short name as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FromJson => "from",
            Self::ToJson => "to",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "from" => Ok(Self::FromJson),
            "to" => Ok(Self::ToJson),
            other => Err(format!("unknown direction '{other}', expected 'from' or 'to'")),
        }
    }
}

/// Generates one conversion class from a schema.
pub struct Generator<'a> {
    schema: &'a Schema,
    options: &'a GenerateOptions,
}

impl<'a> Generator<'a> {
    /// Creates a generator over a validated schema.
    #[must_use]
    pub fn new(schema: &'a Schema, options: &'a GenerateOptions) -> Self {
        Self { schema, options }
    }

    /// Generates the class for one direction.
    ///
    /// # Errors
    /// Returns the first `MetaError` hit while building procedures. No text
    /// is produced in that case.
    pub fn generate(&self, direction: Direction) -> Result<String> {
        tracing::debug!(
            %direction,
            namespace = %self.options.namespace,
            types = self.schema.types.len(),
            "generating conversion class"
        );

        let methods = match direction {
            Direction::FromJson => FromJsonGenerator::new(self.schema).methods(),
            Direction::ToJson => ToJsonGenerator::new(self.schema).methods(),
        }
        .inspect_err(|err| tracing::debug!(kind = err.kind_name(), "generation failed"))?;

        let mut unit = Unit::new(
            self.options.namespace.as_str(),
            "public static",
            self.options.class_name_for(direction),
        );
        unit.usings = self.options.all_usings();
        unit.methods = methods;

        Ok(render(&unit))
    }

    /// Generates the `FromJSON` class.
    ///
    /// # Errors
    /// See [`Generator::generate`].
    pub fn from_json(&self) -> Result<String> {
        self.generate(Direction::FromJson)
    }

    /// Generates the `ToJSON` class.
    ///
    /// # Errors
    /// See [`Generator::generate`].
    pub fn to_json(&self) -> Result<String> {
        self.generate(Direction::ToJson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonmeta_schema::read_schema;
    use serde_json::json;

    #[test]
    fn test_direction_parse() {
        assert_eq!("from".parse::<Direction>(), Ok(Direction::FromJson));
        assert_eq!("to".parse::<Direction>(), Ok(Direction::ToJson));
        assert!("both".parse::<Direction>().is_err());
        assert_eq!(Direction::ToJson.to_string(), "to");
    }

    #[test]
    fn test_generate_person_from_json() {
        let schema = read_schema(&json!({
            "Person": { "name": "string", "age": "int" }
        }))
        .unwrap();
        let options = GenerateOptions::new("app").using("jonson");
        let text = Generator::new(&schema, &options).from_json().unwrap();

        let expected = "\
using System.Collections.Generic;
using System.Globalization;
using jonson;

namespace app {
    public static class FromJSONExtensions {
        public static void FromJSON(this JSONType type, ref Person val) {
            if (type.Obj.IsNone()) {
                return;
            }

            Dictionary<string, JSONType> root = type.Obj.Peel();

            if (root.ContainsKey(\"name\")) {
                root[\"name\"].FromJSON(ref val.name);
            }

            if (root.ContainsKey(\"age\")) {
                root[\"age\"].FromJSON(ref val.age);
            }

        }

        public static void FromJSON(this JSONType type, ref int val) {
            if (type.Num.IsSome()) {
                string numStr = type.Num.Peel();

                NumberStyles style = NumberStyles.AllowDecimalPoint;
                style |= NumberStyles.AllowExponent;
                style |= NumberStyles.AllowLeadingSign;

                int.TryParse(numStr, style, CultureInfo.InvariantCulture, out val);
            }
        }

        public static void FromJSON(this JSONType type, ref string val) {
            if (type.Str.IsSome()) {
                val = type.Str.Peel();
            }
        }

    }
}";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_generate_to_json_class_name_override() {
        let schema = read_schema(&json!({ "Empty": {} })).unwrap();
        let options = GenerateOptions::new("app").class_name("JsonWriters");
        let text = Generator::new(&schema, &options).to_json().unwrap();
        assert!(text.contains("    public static class JsonWriters {\n"));
        assert!(text.contains("        public static JSONType ToJSON(this Empty val) {\n"));
        assert!(text.ends_with("    }\n}"));
    }

    #[test]
    fn test_generate_error_has_no_output() {
        let schema = read_schema(&json!({ "Bag": { "items": "List<int?>" } })).unwrap();
        let options = GenerateOptions::default();
        let err = Generator::new(&schema, &options).from_json().unwrap_err();
        assert_eq!(err.kind_name(), "UnsupportedPrimitive");
    }
}
