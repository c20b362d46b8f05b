//! Lowering from the wire document to [`yapit_ir`] types.
//!
//! Lowering never fails: anything that cannot be understood degrades to an
//! unknown node, an absent payload, or [`Payload::Malformed`].

use serde_json::Value;
use yapit_ir::{Endpoint, Example, HttpMethod, Parameter, Payload, SchemaNode};

use crate::interface::{InterfaceDetail, RawParameter};

impl InterfaceDetail {
    /// Lower this interface into an [`Endpoint`].
    pub fn to_endpoint(&self) -> Endpoint {
        Endpoint {
            title: self.title.clone().unwrap_or_default(),
            path: self.path.clone().unwrap_or_default(),
            method: HttpMethod::parse_lenient(self.method.as_deref().unwrap_or("GET")),
            request: self.request_payload(),
            response: self.response_payload(),
        }
    }

    fn request_payload(&self) -> Payload {
        let body_type = normalized(self.req_body_type.as_deref());

        if body_type.as_deref() == Some("json")
            && let Some(payload) = self.req_body_other.as_ref().and_then(body_payload)
        {
            return payload;
        }

        if body_type.as_deref() == Some("form") && !self.req_body_form.is_empty() {
            return Payload::Form(parameters(&self.req_body_form));
        }

        if !self.req_query.is_empty() {
            return Payload::Query(parameters(&self.req_query));
        }

        Payload::None
    }

    fn response_payload(&self) -> Payload {
        if normalized(self.res_body_type.as_deref()).as_deref() == Some("json") {
            self.res_body
                .as_ref()
                .and_then(body_payload)
                .unwrap_or(Payload::None)
        } else {
            Payload::None
        }
    }
}

fn normalized(s: Option<&str>) -> Option<String> {
    s.map(|s| s.trim().to_lowercase()).filter(|s| !s.is_empty())
}

/// Interpret a body field that may be a JSON-encoded string or a parsed value.
fn body_payload(value: &Value) -> Option<Payload> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(parsed) => Some(Payload::Schema(schema_from_value(&parsed))),
            Err(e) => {
                tracing::warn!(error = %e, "body schema is not valid JSON");
                Some(Payload::Malformed {
                    reason: e.to_string(),
                })
            }
        },
        Value::Object(_) => Some(Payload::Schema(schema_from_value(value))),
        other => Some(Payload::Malformed {
            reason: format!("expected a JSON schema object, found {}", json_kind(other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Build a [`SchemaNode`] from a JSON-Schema-like value.
///
/// Non-object values produce an empty node of unknown kind.
pub fn schema_from_value(value: &Value) -> SchemaNode {
    let Value::Object(map) = value else {
        return SchemaNode::default();
    };

    let declared_type = match map.get("type") {
        Some(Value::String(s)) => Some(s.trim().to_lowercase()),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .map(|s| s.trim().to_lowercase())
            .find(|s| s != "null"),
        _ => None,
    }
    .filter(|s| !s.is_empty());

    let properties = match map.get("properties") {
        Some(Value::Object(props)) => props
            .iter()
            .map(|(k, v)| (k.clone(), schema_from_value(v)))
            .collect(),
        _ => Default::default(),
    };

    let required = match map.get("required") {
        Some(Value::Array(names)) => names
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    let items = match map.get("items") {
        Some(item @ Value::Object(_)) => Some(Box::new(schema_from_value(item))),
        Some(Value::Array(tuple)) => tuple.first().map(|v| Box::new(schema_from_value(v))),
        _ => None,
    };

    SchemaNode {
        declared_type,
        format: map.get("format").and_then(Value::as_str).map(str::to_string),
        properties,
        required,
        items,
        description: map
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string)
            .filter(|d| !d.trim().is_empty()),
        example: map.get("example").map(example_from_value),
    }
}

fn example_from_value(value: &Value) -> Example {
    match value {
        Value::Null => Example::Null,
        Value::Bool(b) => Example::Bool(*b),
        Value::Number(n) => Example::Number(n.as_f64().unwrap_or_default()),
        Value::String(s) => Example::String(s.clone()),
        Value::Array(items) => Example::Array(items.iter().map(example_from_value).collect()),
        Value::Object(_) => Example::Object,
    }
}

fn parameters(raw: &[RawParameter]) -> Vec<Parameter> {
    raw.iter()
        .filter_map(|p| {
            let name = p.name.trim();
            if name.is_empty() {
                tracing::debug!("skipping parameter without a name");
                return None;
            }
            Some(Parameter {
                name: name.to_string(),
                required: p.is_required(),
                declared_type: normalized(p.ty.as_deref()),
                example: p.example.as_ref().map(example_from_value),
                description: p.desc.clone().filter(|d| !d.trim().is_empty()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use yapit_ir::SchemaKind;

    use super::*;

    fn detail(value: Value) -> InterfaceDetail {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_string_and_parsed_bodies_are_equivalent() {
        let schema = json!({
            "type": "object",
            "properties": { "id": { "type": "string" } },
            "required": ["id"]
        });
        let from_string = detail(json!({
            "req_body_type": "json",
            "req_body_other": schema.to_string(),
        }));
        let from_value = detail(json!({
            "req_body_type": "json",
            "req_body_other": schema,
        }));

        assert_eq!(
            from_string.to_endpoint().request,
            from_value.to_endpoint().request
        );
        assert!(matches!(from_value.to_endpoint().request, Payload::Schema(_)));
    }

    #[test]
    fn test_unparseable_body_is_malformed() {
        let endpoint = detail(json!({
            "res_body_type": "json",
            "res_body": "{\"type\": \"object\", ",
        }))
        .to_endpoint();

        assert!(matches!(endpoint.response, Payload::Malformed { .. }));
    }

    #[test]
    fn test_query_used_without_json_body() {
        let endpoint = detail(json!({
            "method": "get",
            "req_body_type": "json",
            "req_body_other": "",
            "req_query": [
                { "name": "orderId", "required": "1", "desc": "订单ID" },
                { "name": "", "required": "1" }
            ]
        }))
        .to_endpoint();

        assert_eq!(endpoint.method, HttpMethod::Get);
        let Payload::Query(params) = endpoint.request else {
            panic!("expected query parameters");
        };
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "orderId");
        assert!(params[0].required);
        assert_eq!(params[0].description.as_deref(), Some("订单ID"));
    }

    #[test]
    fn test_form_body() {
        let endpoint = detail(json!({
            "req_body_type": "form",
            "req_body_form": [{ "name": "file", "type": "file" }]
        }))
        .to_endpoint();

        let Payload::Form(params) = endpoint.request else {
            panic!("expected form parameters");
        };
        assert_eq!(params[0].declared_type.as_deref(), Some("file"));
    }

    #[test]
    fn test_non_json_response_is_absent() {
        let endpoint = detail(json!({ "res_body_type": "raw", "res_body": "ok" })).to_endpoint();
        assert_eq!(endpoint.response, Payload::None);
    }

    #[test]
    fn test_schema_from_value() {
        let node = schema_from_value(&json!({
            "type": ["Integer", "null"],
            "format": "int64",
            "description": "amount in cents",
            "example": 100
        }));
        assert_eq!(node.declared_type.as_deref(), Some("integer"));
        assert_eq!(node.format.as_deref(), Some("int64"));
        assert_eq!(node.example, Some(Example::Number(100.0)));
        assert_eq!(node.kind(), SchemaKind::Scalar);
    }

    #[test]
    fn test_schema_preserves_property_order() {
        let node = schema_from_value(&json!({
            "type": "object",
            "properties": {
                "zeta": { "type": "string" },
                "alpha": { "type": "string" },
                "mid": { "type": "string" }
            }
        }));
        let keys: Vec<_> = node.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_schema_from_non_object() {
        let node = schema_from_value(&json!([1, 2, 3]));
        assert_eq!(node.kind(), SchemaKind::Unknown);
    }
}
