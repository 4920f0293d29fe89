//! Request parameter sources.
//!
//! A verification request can carry its integers in three encodings. Each one
//! is decoded up front into a [`ParamSource`], and handlers only ever ask it
//! for `lookup(key)`. Validation therefore reads the same way whichever
//! encoding the caller picked.
//!
//! | Request                                 | Source   |
//! |-----------------------------------------|----------|
//! | `GET ?sentData=..&prime=..`             | `Query`  |
//! | `POST` with `application/json`          | `Json`   |
//! | `POST` with anything else               | `Form`   |

use http::{header, HeaderMap, Method};
use serde::{Deserialize, Deserializer};
use url::form_urlencoded;

/// Parameter name for the data as sent.
pub const SENT_DATA: &str = "sentData";

/// Parameter name for the modulus. Kept as `prime` for wire compatibility;
/// the modulus does not have to be prime.
pub const MODULUS: &str = "prime";

/// Parameter name for the data as received.
pub const RECEIVED_DATA: &str = "receivedData";

// =============================================================================
// Parameter Sources
// =============================================================================

/// Decoded request parameters, tagged by the encoding they arrived in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamSource {
    /// URL query string pairs
    Query(Vec<(String, String)>),

    /// `application/x-www-form-urlencoded` body pairs
    Form(Vec<(String, String)>),

    /// JSON object body
    Json(JsonParams),
}

impl ParamSource {
    /// Decode a raw query string (without the leading `?`).
    pub fn from_query(raw: Option<&str>) -> Self {
        ParamSource::Query(parse_pairs(raw.unwrap_or("").as_bytes()))
    }

    /// Decode a URL-encoded form body.
    pub fn from_form(body: &[u8]) -> Self {
        ParamSource::Form(parse_pairs(body))
    }

    /// Decode a JSON body.
    ///
    /// A body that is not a JSON object decodes to empty parameters, which
    /// callers then report as missing.
    pub fn from_json(body: &[u8]) -> Self {
        // Go through Value first: derived struct impls also accept JSON arrays
        let params = match serde_json::from_slice::<serde_json::Value>(body) {
            Ok(value @ serde_json::Value::Object(_)) => {
                serde_json::from_value(value).unwrap_or_default()
            }
            _ => JsonParams::default(),
        };
        ParamSource::Json(params)
    }

    /// Pick the source for a request based on its method and content type.
    ///
    /// `GET` (and `HEAD`) read the query string. Anything else reads the body,
    /// as JSON when the `Content-Type` mentions `application/json` and as a
    /// URL-encoded form otherwise.
    pub fn from_request(
        method: &Method,
        headers: &HeaderMap,
        raw_query: Option<&str>,
        body: &[u8],
    ) -> Self {
        if *method == Method::GET || *method == Method::HEAD {
            return Self::from_query(raw_query);
        }

        if is_json_content_type(headers) {
            Self::from_json(body)
        } else {
            Self::from_form(body)
        }
    }

    /// Look up an integer parameter.
    ///
    /// Absent keys, empty values and values that do not parse as an `i64`
    /// all return `None`.
    pub fn lookup(&self, key: &str) -> Option<i64> {
        match self {
            ParamSource::Query(pairs) | ParamSource::Form(pairs) => pairs
                .iter()
                .find(|(k, _)| k == key)
                .and_then(|(_, v)| parse_int(v)),
            ParamSource::Json(params) => params.get(key),
        }
    }
}

/// Whether the request declares a JSON body.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}

/// Split `k=v&k=v` pairs, percent-decoding both sides.
///
/// Segments without `=` and pairs with an empty key are dropped, so a bare
/// `prime` never shadows a later `prime=3`.
fn parse_pairs(raw: &[u8]) -> Vec<(String, String)> {
    raw.split(|&b| b == b'&')
        .filter(|segment| segment.contains(&b'='))
        .flat_map(form_urlencoded::parse)
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Parse a trimmed decimal integer with an optional sign.
pub fn parse_int(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}

// =============================================================================
// JSON Body
// =============================================================================

/// Typed JSON body for verification requests.
///
/// Only top-level integer values are read. A recognised key holding a string,
/// float, bool, array or object is treated as absent rather than failing the
/// whole body. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonParams {
    /// Data as sent (`sentData`)
    #[serde(default, deserialize_with = "lenient_int")]
    pub sent_data: Option<i64>,

    /// Modulus (`prime`)
    #[serde(default, deserialize_with = "lenient_int")]
    pub prime: Option<i64>,

    /// Data as received (`receivedData`)
    #[serde(default, deserialize_with = "lenient_int")]
    pub received_data: Option<i64>,
}

impl JsonParams {
    /// Look up a field by its wire name.
    pub fn get(&self, key: &str) -> Option<i64> {
        match key {
            SENT_DATA => self.sent_data,
            MODULUS => self.prime,
            RECEIVED_DATA => self.received_data,
            _ => None,
        }
    }
}

/// Accept any JSON value, keeping it only if it is an integer in `i64` range.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_i64())
}

// =============================================================================
// Tests
// =============================================================================
