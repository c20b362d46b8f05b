//! Property type resolution.
//!
//! Four tiers, tried in order until one yields a type: the declared schema
//! type, the field name (parameters only), the example value, and finally
//! [`TypeRef::Unknown`].

use yapit_ir::{Example, Parameter, ScalarKind, SchemaKind, SchemaNode, TypeRef};

/// One leaf or branch to resolve.
///
/// The shape of the input is decided where the payload is lowered, so the
/// resolver never guesses whether it is looking at a schema or a parameter.
#[derive(Debug, Clone, Copy)]
pub enum PropertySpec<'a> {
    Schema(&'a SchemaNode),
    Parameter(&'a Parameter),
}

/// Which tier produced a [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Declared,
    Name,
    Example,
    Fallback,
}

/// Outcome of resolving one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub ty: TypeRef,
    pub tier: Tier,
    /// The value may not survive the target's number representation.
    pub lossy: bool,
}

impl Resolution {
    fn new(ty: TypeRef, tier: Tier) -> Self {
        Self {
            ty,
            tier,
            lossy: false,
        }
    }
}

/// Resolve a property's type.
///
/// `composite` is the declaration name the walker allocated when the
/// property is an object with properties (or an array of such objects).
pub fn resolve(spec: PropertySpec<'_>, composite: Option<&str>) -> Resolution {
    if let Some(resolution) = declared(spec, composite) {
        return resolution;
    }
    if let PropertySpec::Parameter(param) = spec
        && let Some(ty) = from_name(&param.name)
    {
        return Resolution::new(ty, Tier::Name);
    }
    let example = match spec {
        PropertySpec::Schema(node) => node.example.as_ref(),
        PropertySpec::Parameter(param) => param.example.as_ref(),
    };
    if let Some(ty) = example.and_then(from_example) {
        return Resolution::new(ty, Tier::Example);
    }
    Resolution::new(TypeRef::Unknown, Tier::Fallback)
}

fn declared(spec: PropertySpec<'_>, composite: Option<&str>) -> Option<Resolution> {
    match spec {
        PropertySpec::Schema(node) => from_schema(node, composite),
        PropertySpec::Parameter(param) => {
            let (ty, lossy) = match param.declared_type.as_deref()? {
                "object" => (TypeRef::OpenMap, false),
                "array" => (TypeRef::array(TypeRef::Unknown), false),
                name => scalar(name, None)?,
            };
            Some(Resolution {
                ty,
                tier: Tier::Declared,
                lossy,
            })
        }
    }
}

fn from_schema(node: &SchemaNode, composite: Option<&str>) -> Option<Resolution> {
    let (ty, lossy) = match node.kind() {
        SchemaKind::Object if !node.properties.is_empty() => (
            composite.map_or(TypeRef::OpenMap, TypeRef::named),
            false,
        ),
        SchemaKind::Object => (TypeRef::OpenMap, false),
        SchemaKind::Array => match node.items.as_deref() {
            // Element types go through every tier, not just the first.
            Some(items) => {
                let inner = resolve(PropertySpec::Schema(items), composite);
                (TypeRef::array(inner.ty), inner.lossy)
            }
            None => (TypeRef::array(TypeRef::Unknown), false),
        },
        SchemaKind::Scalar => scalar(node.declared_type.as_deref()?, node.format.as_deref())?,
        SchemaKind::Unknown => return None,
    };
    Some(Resolution {
        ty,
        tier: Tier::Declared,
        lossy,
    })
}

fn scalar(name: &str, format: Option<&str>) -> Option<(TypeRef, bool)> {
    match name {
        "string" | "text" | "文本" => Some((TypeRef::string(), false)),
        "boolean" => Some((TypeRef::boolean(), false)),
        "integer" | "number" if format.is_some_and(|f| f.eq_ignore_ascii_case("int64")) => {
            Some((TypeRef::Scalar(ScalarKind::WideInteger), true))
        }
        "integer" | "number" => Some((TypeRef::number(), false)),
        _ => None,
    }
}

fn from_name(name: &str) -> Option<TypeRef> {
    let name = name.to_lowercase();
    let has = |needle: &str| name.contains(needle);

    if has("id") && !has("idea") && !has("hide") {
        Some(TypeRef::Scalar(ScalarKind::StringOrNumber))
    } else if has("time") || has("date") {
        Some(TypeRef::string())
    } else if has("count") || has("amount") || has("price") || has("quantity") {
        Some(TypeRef::number())
    } else if has("is") || has("has") || has("enable") || has("disable") {
        Some(TypeRef::boolean())
    } else {
        None
    }
}

fn from_example(example: &Example) -> Option<TypeRef> {
    match example {
        Example::Null => None,
        Example::String(s) if s.is_empty() => None,
        Example::String(_) => Some(TypeRef::string()),
        Example::Number(_) => Some(TypeRef::number()),
        Example::Bool(_) => Some(TypeRef::boolean()),
        Example::Array(items) => Some(TypeRef::array(
            items
                .first()
                .and_then(from_example)
                .unwrap_or(TypeRef::Unknown),
        )),
        Example::Object => Some(TypeRef::OpenMap),
    }
}
