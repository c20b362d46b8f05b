//! Wire types for the schema source's `/api/interface/get` document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::UpstreamError;

/// Envelope returned by the schema source.
#[derive(Debug, Clone, Deserialize)]
pub struct InterfaceResponse {
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
    #[serde(default)]
    pub data: Option<InterfaceDetail>,
}

impl InterfaceResponse {
    /// Unwrap the interface detail, failing on a nonzero `errcode`.
    pub fn into_detail(self) -> Result<InterfaceDetail, UpstreamError> {
        if self.errcode != 0 {
            return Err(UpstreamError {
                code: self.errcode,
                message: self.errmsg,
            });
        }
        self.data.ok_or_else(|| UpstreamError {
            code: self.errcode,
            message: "interface response carried no data".to_string(),
        })
    }
}

/// A documented interface as the schema source describes it.
///
/// Bodies (`req_body_other`, `res_body`) are kept as raw JSON: they may be a
/// JSON-encoded string or an already parsed object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterfaceDetail {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub req_query: Vec<RawParameter>,
    #[serde(default)]
    pub req_body_type: Option<String>,
    #[serde(default)]
    pub req_body_other: Option<Value>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub req_body_form: Vec<RawParameter>,
    #[serde(default)]
    pub res_body_type: Option<String>,
    #[serde(default)]
    pub res_body: Option<Value>,
}

/// A query or form parameter as documented.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawParameter {
    #[serde(default)]
    pub name: String,
    /// `"1"`/`"0"` in practice, occasionally a boolean.
    #[serde(default)]
    pub required: Option<Value>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    #[serde(default)]
    pub example: Option<Value>,
}

impl RawParameter {
    pub fn is_required(&self) -> bool {
        match &self.required {
            Some(Value::String(s)) => matches!(s.trim(), "1" | "true"),
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_i64() == Some(1),
            _ => false,
        }
    }
}

fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
