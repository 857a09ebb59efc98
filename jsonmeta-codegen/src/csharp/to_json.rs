//! Typed → JSON conversion (`ToJSON` extension methods).

use super::{ConversionPass, JSON_ARRAY, JSON_OBJECT, JSON_TYPE, METHOD_MODIFIERS, number_format};
use crate::emit::{Declare, Method, Stmt};
use jsonmeta_schema::{
    CompositeDef, ENUM_STORAGE, FieldDef, MetaError, Result, ScalarType, Schema, TypeDescriptor,
    TypeKind,
};

/// Name of every generated write method.
pub const TO_JSON: &str = "ToJSON";

/// Generator for `ToJSON(this T val)` methods.
pub struct ToJsonGenerator<'a> {
    schema: &'a Schema,
}

impl<'a> ToJsonGenerator<'a> {
    /// Creates a new write-method generator.
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    fn scaffold(cs_type: &str) -> Method {
        Method::new(METHOD_MODIFIERS, JSON_TYPE, TO_JSON).param(format!("this {cs_type} val"))
    }

    fn null_json() -> String {
        format!("{JSON_TYPE}.Make()")
    }

    /// Returns true if a nullable `T?` of this type is a `Nullable<T>` struct
    /// whose payload sits behind `.Value`.
    fn is_value_type(&self, ty: &TypeDescriptor) -> bool {
        match &ty.kind {
            TypeKind::Scalar(scalar) => *scalar != ScalarType::String,
            TypeKind::Enum(_) => true,
            TypeKind::Array(_) | TypeKind::List(_) | TypeKind::Dictionary { .. } => false,
            TypeKind::Composite(name) => self
                .schema
                .get_type(name)
                .is_none_or(|composite| !composite.is_ref),
        }
    }

    fn field_write(&self, field: &FieldDef) -> Stmt {
        let name = &field.name;
        let target = format!("root[\"{name}\"]");

        if !field.ty.nullable {
            return Stmt::assign(target, format!("val.{name}.{TO_JSON}()"));
        }

        let access = if self.is_value_type(&field.ty) {
            format!("val.{name}.Value")
        } else {
            format!("val.{name}")
        };
        Stmt::when(
            format!("val.{name} != null"),
            vec![Stmt::assign(target, format!("{access}.{TO_JSON}()"))],
        )
    }

    fn null_guard() -> Vec<Stmt> {
        vec![
            Stmt::when("val == null", vec![Stmt::ret(Self::null_json())]),
            Stmt::Blank,
        ]
    }

    fn scalar_body(scalar: ScalarType) -> Vec<Stmt> {
        if !scalar.is_numeric() {
            return vec![Stmt::ret(format!("{JSON_TYPE}.Make(val)"))];
        }

        let to_text = match number_format(scalar) {
            Some(format) => format!("num.ToString({format}, CultureInfo.InvariantCulture)"),
            None => "num.ToString(CultureInfo.InvariantCulture)".to_string(),
        };

        vec![
            Declare::new(JSON_TYPE, "numType").construct("").into(),
            Declare::new(scalar.name(), "num").value("val").into(),
            Declare::new("string", "numStr").value(to_text).into(),
            Stmt::assign("numType.Num", "Option<string>.Some(numStr)"),
            Stmt::Blank,
            Stmt::ret("numType"),
        ]
    }

    fn enum_body() -> Vec<Stmt> {
        let storage = ENUM_STORAGE.name();
        vec![
            Declare::new(storage, "asInt")
                .value(format!("({storage})val"))
                .into(),
            Stmt::ret(format!("asInt.{TO_JSON}()")),
        ]
    }

    fn sequence_body(is_array: bool) -> Vec<Stmt> {
        let len = if is_array { "val.Length" } else { "val.Count" };
        let mut body = Self::null_guard();
        body.extend([
            Declare::new("int", "len").value(len).into(),
            Declare::new(JSON_ARRAY, "list").construct("len").into(),
            Stmt::for_loop(
                "int i = 0",
                "i < len",
                "i++",
                vec![Stmt::expr(format!("list.Add(val[i].{TO_JSON}())"))],
            ),
            Stmt::Blank,
            Stmt::ret(format!("{JSON_TYPE}.Make(list)")),
        ]);
        body
    }

    fn dictionary_body() -> Vec<Stmt> {
        let mut body = Self::null_guard();
        body.extend([
            Declare::new(JSON_OBJECT, "dict").construct("").into(),
            Stmt::foreach(
                "pair",
                "val",
                vec![Stmt::assign(
                    "dict[pair.Key.ToString()]",
                    format!("pair.Value.{TO_JSON}()"),
                )],
            ),
            Stmt::Blank,
            Stmt::ret(format!("{JSON_TYPE}.Make(dict)")),
        ]);
        body
    }
}

impl ConversionPass for ToJsonGenerator<'_> {
    fn schema(&self) -> &Schema {
        self.schema
    }

    fn composite_method(&self, composite: &CompositeDef) -> Result<Method> {
        let mut body = Vec::new();

        if composite.is_ref {
            body.extend(Self::null_guard());
        }

        body.push(Declare::new(JSON_OBJECT, "root").construct("").into());
        body.push(Stmt::Blank);

        for field in &composite.fields {
            body.push(self.field_write(field));
        }

        body.push(Stmt::Blank);
        body.push(Stmt::ret(format!("{JSON_TYPE}.Make(root)")));

        Ok(Self::scaffold(&composite.name).body(body))
    }

    fn slave_method(&self, slave: &TypeDescriptor) -> Result<Method> {
        if slave.nullable {
            return Err(MetaError::unsupported(slave.canonical()));
        }

        let body = match &slave.kind {
            TypeKind::Scalar(scalar) => Self::scalar_body(*scalar),
            TypeKind::Enum(_) => Self::enum_body(),
            TypeKind::Array(_) => Self::sequence_body(true),
            TypeKind::List(_) => Self::sequence_body(false),
            TypeKind::Dictionary { .. } => Self::dictionary_body(),
            TypeKind::Composite(_) => return Err(MetaError::unsupported(slave.canonical())),
        };

        Ok(Self::scaffold(&slave.cs_type()).body(body))
    }
}
