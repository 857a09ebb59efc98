//! JSON → typed conversion (`FromJSON` extension methods).

use super::{
    ConversionPass, JSON_ARRAY, JSON_OBJECT, JSON_TYPE, METHOD_MODIFIERS, array_allocation,
};
use crate::emit::{Declare, If, Method, Stmt};
use jsonmeta_schema::{
    CompositeDef, ENUM_STORAGE, FieldDef, MetaError, Result, ScalarType, Schema, TypeDescriptor,
    TypeKind,
};

/// Name of every generated read method.
pub const FROM_JSON: &str = "FromJSON";

/// Generator for `FromJSON(this JSONType type, ref T val)` methods.
pub struct FromJsonGenerator<'a> {
    schema: &'a Schema,
}

impl<'a> FromJsonGenerator<'a> {
    /// Creates a new read-method generator.
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Method scaffold reading into `ref {cs_type} val`.
    fn scaffold(cs_type: &str) -> Method {
        Method::new(METHOD_MODIFIERS, "void", FROM_JSON)
            .param(format!("this {JSON_TYPE} type"))
            .param(format!("ref {cs_type} val"))
    }

    /// Reads one field from `root`, leaving it untouched if the key is absent.
    fn field_read(field: &FieldDef) -> Stmt {
        let name = &field.name;
        let source = format!("root[\"{name}\"]");

        let read: Stmt = if field.ty.nullable {
            let inner = field.ty.inner().cs_type();
            If::new(
                format!("{source}.Null.IsSome()"),
                vec![Stmt::assign(format!("val.{name}"), "null")],
            )
            .otherwise(vec![
                Declare::new(inner.as_str(), "actual")
                    .value(format!("default({inner})"))
                    .into(),
                Stmt::expr(format!("{source}.{FROM_JSON}(ref actual)")),
                Stmt::assign(format!("val.{name}"), "actual"),
            ])
            .into()
        } else {
            Stmt::expr(format!("{source}.{FROM_JSON}(ref val.{name})"))
        };

        Stmt::when(format!("root.ContainsKey(\"{name}\")"), vec![read])
    }

    fn scalar_body(scalar: ScalarType) -> Vec<Stmt> {
        match scalar {
            ScalarType::String => vec![Stmt::when(
                "type.Str.IsSome()",
                vec![Stmt::assign("val", "type.Str.Peel()")],
            )],
            ScalarType::Bool => vec![Stmt::when(
                "type.Bool.IsSome()",
                vec![Stmt::assign("val", "type.Bool.Peel()")],
            )],
            numeric => vec![Stmt::when(
                "type.Num.IsSome()",
                vec![
                    Declare::new("string", "numStr").value("type.Num.Peel()").into(),
                    Stmt::Blank,
                    Declare::new("NumberStyles", "style")
                        .value("NumberStyles.AllowDecimalPoint")
                        .into(),
                    Stmt::expr("style |= NumberStyles.AllowExponent"),
                    Stmt::expr("style |= NumberStyles.AllowLeadingSign"),
                    Stmt::Blank,
                    Stmt::expr(format!(
                        "{}.TryParse(numStr, style, CultureInfo.InvariantCulture, out val)",
                        numeric.name()
                    )),
                ],
            )],
        }
    }

    fn enum_body(name: &str) -> Vec<Stmt> {
        let storage = ENUM_STORAGE.name();
        vec![Stmt::when(
            "type.Num.IsSome()",
            vec![
                Declare::new(storage, "num")
                    .value(format!("default({storage})"))
                    .into(),
                Stmt::expr(format!("type.{FROM_JSON}(ref num)")),
                Stmt::assign("val", format!("({name})num")),
            ],
        )]
    }

    fn sequence_body(elem: &TypeDescriptor, is_array: bool) -> Vec<Stmt> {
        let elem = elem.cs_type();
        let (allocation, store) = if is_array {
            (
                array_allocation(&elem, "list.Count"),
                Stmt::assign("val[i]", "element"),
            )
        } else {
            (
                format!("new List<{elem}>(list.Count)"),
                Stmt::expr("val.Add(element)"),
            )
        };

        vec![Stmt::when(
            "type.Arr.IsSome()",
            vec![
                Declare::new(JSON_ARRAY, "list").value("type.Arr.Peel()").into(),
                Stmt::assign("val", allocation),
                Stmt::Blank,
                Stmt::for_loop(
                    "int i = 0",
                    "i < list.Count",
                    "i++",
                    vec![
                        Declare::new(elem.as_str(), "element")
                            .value(format!("default({elem})"))
                            .into(),
                        Stmt::expr(format!("list[i].{FROM_JSON}(ref element)")),
                        store,
                    ],
                ),
            ],
        )]
    }

    fn dictionary_body(dictionary: &str, value: &TypeDescriptor) -> Vec<Stmt> {
        let value = value.cs_type();
        vec![Stmt::when(
            "type.Obj.IsSome()",
            vec![
                Stmt::assign("val", format!("new {dictionary}()")),
                Declare::new(JSON_OBJECT, "obj").value("type.Obj.Peel()").into(),
                Stmt::foreach(
                    "pair",
                    "obj",
                    vec![
                        Declare::new(value.as_str(), "pairVal")
                            .value(format!("default({value})"))
                            .into(),
                        Stmt::expr(format!("pair.Value.{FROM_JSON}(ref pairVal)")),
                        Stmt::assign("val[pair.Key]", "pairVal"),
                    ],
                ),
            ],
        )]
    }
}

impl ConversionPass for FromJsonGenerator<'_> {
    fn schema(&self) -> &Schema {
        self.schema
    }

    fn composite_method(&self, composite: &CompositeDef) -> Result<Method> {
        let type_name = &composite.name;
        let mut body = Vec::new();

        if composite.is_ref {
            body.push(Stmt::when(
                "val == null",
                vec![Stmt::assign("val", format!("new {type_name}()"))],
            ));
            body.push(Stmt::Blank);
        }

        body.push(Stmt::when("type.Obj.IsNone()", vec![Stmt::Return(None)]));
        body.push(Stmt::Blank);
        body.push(Declare::new(JSON_OBJECT, "root").value("type.Obj.Peel()").into());
        body.push(Stmt::Blank);

        for field in &composite.fields {
            body.push(Self::field_read(field));
            body.push(Stmt::Blank);
        }

        Ok(Self::scaffold(type_name).body(body))
    }

    fn slave_method(&self, slave: &TypeDescriptor) -> Result<Method> {
        if slave.nullable {
            return Err(MetaError::unsupported(slave.canonical()));
        }

        let body = match &slave.kind {
            TypeKind::Scalar(scalar) => Self::scalar_body(*scalar),
            TypeKind::Enum(name) => Self::enum_body(name),
            TypeKind::Array(elem) => Self::sequence_body(elem, true),
            TypeKind::List(elem) => Self::sequence_body(elem, false),
            TypeKind::Dictionary { value, .. } => Self::dictionary_body(&slave.cs_type(), value),
            TypeKind::Composite(_) => return Err(MetaError::unsupported(slave.canonical())),
        };

        Ok(Self::scaffold(&slave.cs_type()).body(body))
    }
}
