//! Access-log record: one JSON object per line, request and response halves.

use crate::error::ScanError;
use serde::{Deserialize, Deserializer};

/// One observed HTTP exchange. Missing or `null` fields read as empty / zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub req: RequestInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub rsp: ResponseInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RequestInfo {
    /// Request target, possibly with a query component
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub qs_params: String,
    /// Raw header block, unparsed `Key: value` text
    #[serde(deserialize_with = "null_as_default")]
    pub headers: String,
    #[serde(deserialize_with = "null_as_default")]
    pub req_body_len: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResponseInfo {
    /// e.g. "2xx"
    #[serde(deserialize_with = "null_as_default")]
    pub status_class: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rsp_body_len: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl LogRecord {
    /// Parse one trimmed, non-blank line. `line_no` is 1-based and only used for the error.
    pub fn parse(line: &str, line_no: usize) -> Result<Self, ScanError> {
        serde_json::from_str(line).map_err(|source| ScanError::RecordParse {
            line: line_no,
            source,
        })
    }

    pub fn request_target(&self) -> &str {
        &self.req.url
    }

    pub fn header_block(&self) -> &str {
        &self.req.headers
    }
}
