//! Random.org wire formats
//!
//! Two APIs are spoken here:
//! - JSON-RPC 2.0 at `/json-rpc/4/invoke` (`generateIntegers`,
//!   `generateDecimalFractions`), used for batches.
//! - The legacy `/integers/` endpoint, which answers one integer per line
//!   as plain text.
//!
//! Only request shaping and response decoding live here; the transport is
//! whatever [`HttpClient`](crate::infrastructure::ports::HttpClient) the host provides.

use randorg_domain::{GenerationRequest, IntegerRange, Numeric};
use serde::{Deserialize, Serialize};
use url::Url;

/// JSON-RPC endpoint (API v4).
pub const DEFAULT_JSON_RPC_URL: &str = "https://api.random.org/json-rpc/4/invoke";

/// Legacy plain-text integer endpoint.
pub const DEFAULT_INTEGERS_URL: &str = "https://www.random.org/integers/";

const JSON_RPC_VERSION: &str = "2.0";

// =============================================================================
// JSON-RPC request
// =============================================================================

/// A JSON-RPC 2.0 call to the Random.org basic API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRpcRequest {
    jsonrpc: &'static str,
    method: &'static str,
    params: GenerateParams,
    id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
enum GenerateParams {
    Integers {
        #[serde(rename = "apiKey")]
        api_key: Option<String>,
        n: u32,
        min: Numeric,
        max: Numeric,
        replacement: bool,
    },
    DecimalFractions {
        #[serde(rename = "apiKey")]
        api_key: Option<String>,
        n: u32,
        #[serde(rename = "decimalPlaces")]
        decimal_places: u8,
        replacement: bool,
    },
}

impl JsonRpcRequest {
    /// Shape the call for a batch request.
    ///
    /// `api_key` of `None` serializes as `null` (free tier). `id` only
    /// correlates the call; responses are never checked against it.
    /// Returns `None` for requests served by the legacy endpoint.
    pub fn for_generation(
        request: &GenerationRequest,
        api_key: Option<&str>,
        id: i64,
    ) -> Option<Self> {
        let method = request.operation().json_rpc_method()?;
        let api_key = api_key.map(str::to_string);
        let params = match request {
            GenerationRequest::Integers { range, count } => GenerateParams::Integers {
                api_key,
                n: count.get(),
                min: range.min(),
                max: range.max(),
                replacement: true,
            },
            GenerationRequest::Decimals {
                count,
                decimal_places,
                ..
            } => GenerateParams::DecimalFractions {
                api_key,
                n: count.get(),
                decimal_places: decimal_places.get(),
                replacement: true,
            },
            GenerationRequest::Trng { .. } => return None,
        };
        Some(Self {
            jsonrpc: JSON_RPC_VERSION,
            method,
            params,
            id,
        })
    }

    pub fn method(&self) -> &'static str {
        self.method
    }
}

// =============================================================================
// JSON-RPC response
// =============================================================================

/// Either an error object or a result, never probed field by field.
///
/// `Failure` is tried first so a body carrying `error` always reports it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum JsonRpcResponse {
    Failure { error: JsonRpcError },
    Success { result: GenerateResult },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JsonRpcError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResult {
    pub random: RandomData,
    #[serde(default)]
    pub bits_used: Option<u64>,
    #[serde(default)]
    pub bits_left: Option<i64>,
    #[serde(default)]
    pub requests_left: Option<i64>,
    #[serde(default)]
    pub advisory_delay: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomData {
    pub data: Vec<Numeric>,
    #[serde(default)]
    pub completion_time: Option<String>,
}

// =============================================================================
// Legacy plain-text endpoint
// =============================================================================

/// Build the single-integer URL for `range` on top of `base`.
///
/// With the default base and `1..=60` this yields
/// `https://www.random.org/integers/?num=1&min=1&max=60&col=1&base=10&format=plain&rnd=new`.
pub fn integers_url(base: &str, range: IntegerRange) -> Result<String, url::ParseError> {
    let mut url = Url::parse(base)?;
    url.query_pairs_mut()
        .append_pair("num", "1")
        .append_pair("min", &range.min().to_string())
        .append_pair("max", &range.max().to_string())
        .append_pair("col", "1")
        .append_pair("base", "10")
        .append_pair("format", "plain")
        .append_pair("rnd", "new");
    Ok(url.into())
}

/// Parse the leading base-10 integer of a plain-text body.
///
/// Surrounding whitespace (the trailing line break) is ignored, an optional
/// sign is honoured, and anything after the digits is dropped. A body with
/// no leading digits yields `None`.
///
/// Digits that overflow `i64` also yield `None` rather than a rounded
/// float. Requests are limited to the i32 window, so a well-formed body
/// never reaches that limit.
pub fn parse_integer_body(body: &str) -> Option<i64> {
    let trimmed = body.trim();
    let sign_len = usize::from(trimmed.starts_with(|c: char| c == '-' || c == '+'));
    let digits = &trimmed[sign_len..];
    let digit_len = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if digit_len == 0 {
        return None;
    }
    trimmed[..sign_len + digit_len].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use randorg_domain::{Count, DecimalPlaces};
    use serde_json::json;

    #[test]
    fn integer_call_matches_basic_api_shape() {
        let request = GenerationRequest::integers(1.0, 100.0, Count::new(5.0).unwrap()).unwrap();
        let call = JsonRpcRequest::for_generation(&request, None, 1_700_000_000_000).unwrap();

        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "method": "generateIntegers",
                "params": {
                    "apiKey": null,
                    "n": 5,
                    "min": 1,
                    "max": 100,
                    "replacement": true
                },
                "id": 1_700_000_000_000_i64
            })
        );
    }

    #[test]
    fn decimal_call_sends_places_not_range() {
        let request = GenerationRequest::decimals(
            -1.0,
            1.0,
            Count::new(2.0).unwrap(),
            DecimalPlaces::new(6.0).unwrap(),
        )
        .unwrap();
        let call = JsonRpcRequest::for_generation(&request, Some("key-123"), 7).unwrap();
        let value = serde_json::to_value(&call).unwrap();

        assert_eq!(call.method(), "generateDecimalFractions");
        assert_eq!(
            value["params"],
            json!({
                "apiKey": "key-123",
                "n": 2,
                "decimalPlaces": 6,
                "replacement": true
            })
        );
    }

    #[test]
    fn trng_has_no_json_rpc_call() {
        let request = GenerationRequest::trng(1.0, 60.0).unwrap();
        assert!(JsonRpcRequest::for_generation(&request, None, 0).is_none());
    }

    #[test]
    fn minimal_success_response_decodes() {
        let response: JsonRpcResponse =
            serde_json::from_value(json!({"result": {"random": {"data": [5]}}})).unwrap();
        match response {
            JsonRpcResponse::Success { result } => {
                assert_eq!(result.random.data, vec![Numeric::new(5.0)]);
                assert_eq!(result.advisory_delay, None);
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn full_success_response_decodes_usage_fields() {
        let response: JsonRpcResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "result": {
                "random": {"data": [0.25, 0.5], "completionTime": "2025-06-15 10:30:00Z"},
                "bitsUsed": 16,
                "bitsLeft": 249984,
                "requestsLeft": 999,
                "advisoryDelay": 1000
            },
            "id": 42
        }))
        .unwrap();
        let JsonRpcResponse::Success { result } = response else {
            panic!("expected success");
        };
        assert_eq!(result.requests_left, Some(999));
        assert_eq!(result.advisory_delay, Some(1000));
        assert_eq!(result.random.data.len(), 2);
    }

    #[test]
    fn error_response_decodes_as_failure() {
        let response: JsonRpcResponse =
            serde_json::from_value(json!({"error": {"code": 402, "message": "rate limit"}}))
                .unwrap();
        assert_eq!(
            response,
            JsonRpcResponse::Failure {
                error: JsonRpcError {
                    code: Some(402),
                    message: "rate limit".to_string()
                }
            }
        );
    }

    #[test]
    fn body_with_neither_field_fails_to_decode() {
        let result: Result<JsonRpcResponse, _> = serde_json::from_value(json!({"id": 1}));
        assert!(result.is_err());
    }

    #[test]
    fn integers_url_follows_legacy_template() {
        let range = IntegerRange::new(1.0, 60.0).unwrap();
        assert_eq!(
            integers_url(DEFAULT_INTEGERS_URL, range).unwrap(),
            "https://www.random.org/integers/?num=1&min=1&max=60&col=1&base=10&format=plain&rnd=new"
        );
    }

    #[test]
    fn integers_url_keeps_negative_bounds_readable() {
        let range = IntegerRange::new(-10.0, -1.0).unwrap();
        assert_eq!(
            integers_url(DEFAULT_INTEGERS_URL, range).unwrap(),
            "https://www.random.org/integers/?num=1&min=-10&max=-1&col=1&base=10&format=plain&rnd=new"
        );
    }

    #[test]
    fn integers_url_rejects_malformed_base() {
        let range = IntegerRange::new(1.0, 2.0).unwrap();
        assert!(integers_url("random.org/integers", range).is_err());
    }

    #[test]
    fn parses_plain_text_bodies() {
        assert_eq!(parse_integer_body("42\n"), Some(42));
        assert_eq!(parse_integer_body("  -7 \r\n"), Some(-7));
        assert_eq!(parse_integer_body("+3"), Some(3));
        assert_eq!(parse_integer_body("12abc"), Some(12));
    }

    #[test]
    fn rejects_bodies_without_leading_digits() {
        assert_eq!(parse_integer_body(""), None);
        assert_eq!(parse_integer_body("\n"), None);
        assert_eq!(parse_integer_body("-"), None);
        assert_eq!(parse_integer_body("Error: The maximum value must be..."), None);
        assert_eq!(parse_integer_body("<html>"), None);
    }

    #[test]
    fn overflowing_digits_are_rejected() {
        assert_eq!(parse_integer_body("99999999999999999999\n"), None);
        assert_eq!(
            parse_integer_body("-9223372036854775808"),
            Some(i64::MIN)
        );
    }
}
