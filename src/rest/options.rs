//! Query options shared by list and count endpoints.
//!
//! Option structs are plain serde types. Unset fields are skipped, lists are
//! sent comma separated and timestamps as RFC 3339 in UTC. Resource-specific
//! option types embed these with `#[serde(flatten)]`.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use shopify_rest::rest::{serialize_to_query, CountOptions};
//!
//! let options = CountOptions {
//!     created_at_min: Some(Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap()),
//!     ..Default::default()
//! };
//!
//! let query = serialize_to_query(&options).unwrap();
//! assert_eq!(query.get("created_at_min").unwrap(), "2016-01-01T00:00:00Z");
//! assert_eq!(query.len(), 1);
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::ResourceError;

/// Filters and cursors accepted by most list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Page size, at most 250.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Cursor from a previous response's `Link` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
    /// Only return entities with an id greater than this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    /// Restrict to these ids.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub ids: Vec<u64>,
    /// Restrict the returned fields.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub fields: Vec<String>,
}

/// Filters accepted by most count endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

/// Field selection for single-entity reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldsOptions {
    /// Restrict the returned fields.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub fields: Vec<String>,
}

/// Flattens an options struct into query parameters.
///
/// Nulls are skipped, arrays of scalars are comma-joined and nested objects
/// are sent as JSON strings.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidOptions`] if `params` does not serialize
/// to a JSON object, or if an array holds anything other than strings,
/// numbers and booleans.
pub fn serialize_to_query<T: Serialize>(
    params: &T,
) -> Result<HashMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::InvalidOptions {
        message: e.to_string(),
    })?;

    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(HashMap::new()),
        other => {
            return Err(ResourceError::InvalidOptions {
                message: format!("expected an object, got {other}"),
            })
        }
    };

    let mut query = HashMap::new();
    for (key, val) in map {
        match val {
            Value::Null => {}
            Value::String(s) => {
                query.insert(key, s);
            }
            Value::Number(n) => {
                query.insert(key, n.to_string());
            }
            Value::Bool(b) => {
                query.insert(key, b.to_string());
            }
            Value::Array(items) => {
                let values = items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => Ok(s),
                        Value::Number(n) => Ok(n.to_string()),
                        Value::Bool(b) => Ok(b.to_string()),
                        other => Err(ResourceError::InvalidOptions {
                            message: format!("`{key}` can only list scalars, got {other}"),
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                if !values.is_empty() {
                    query.insert(key, values.join(","));
                }
            }
            Value::Object(_) => {
                query.insert(key, val.to_string());
            }
        }
    }

    Ok(query)
}

/// Like [`serialize_to_query`], but `None` for absent or empty options.
pub(crate) fn optional_query<T: Serialize>(
    params: Option<&T>,
) -> Result<Option<HashMap<String, String>>, ResourceError> {
    Ok(params
        .map(serialize_to_query)
        .transpose()?
        .filter(|q| !q.is_empty()))
}
