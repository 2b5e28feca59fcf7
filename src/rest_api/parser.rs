//! # Request Parsing
//!
//! Parses query parameters and request bodies into structured operation
//! inputs. All parse failures are classified here, before any store call
//! runs; nothing downstream sees a half-validated request.

use std::collections::HashMap;

use serde_json::Value;

use super::errors::{ApiError, ApiResult};

/// Sort keys accepted by the list operation (case-sensitive exact match).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Brand,
    Price,
    Year,
}

impl SortKey {
    fn parse(value: &str) -> ApiResult<Self> {
        match value {
            "brand" => Ok(SortKey::Brand),
            "price" => Ok(SortKey::Price),
            "year" => Ok(SortKey::Year),
            other => Err(ApiError::invalid_parameter(
                "sortBy",
                format!("unsupported sort key '{}'", other),
            )),
        }
    }
}

/// Parsed inputs for the list operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    /// Inclusive upper price bound
    pub max_price: Option<f64>,

    /// Requested sort key, if any
    pub sort_key: Option<SortKey>,

    /// Reverse the comparator. Only meaningful with a sort key; ignored
    /// otherwise.
    pub descending: bool,
}

impl ListParams {
    /// Parse list query parameters (`maxPrice`, `sortBy`, `orderBy`).
    pub fn parse(params: &HashMap<String, String>) -> ApiResult<Self> {
        let max_price = match params.get("maxPrice") {
            Some(raw) => Some(parse_price("maxPrice", raw)?),
            None => None,
        };

        let sort_key = match params.get("sortBy") {
            Some(raw) => Some(SortKey::parse(raw)?),
            None => None,
        };

        // Anything other than "desc" (case-insensitive) means ascending,
        // including absence.
        let descending = params
            .get("orderBy")
            .is_some_and(|v| v.eq_ignore_ascii_case("desc"));

        Ok(Self {
            max_price,
            sort_key,
            descending,
        })
    }
}

/// Parse the `id` query parameter of the delete operation.
pub fn parse_delete_id(params: &HashMap<String, String>) -> ApiResult<u64> {
    let raw = params
        .get("id")
        .ok_or_else(|| ApiError::invalid_parameter("id", "missing"))?;

    raw.parse::<u64>()
        .map_err(|_| ApiError::invalid_parameter("id", format!("'{}' is not a valid id", raw)))
}

/// Decoded body of the price-update operation.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePriceRequest {
    pub id: u64,
    pub price: f64,
}

impl UpdatePriceRequest {
    /// Decode an update-price body. `id` must be an integer; `price` may
    /// be a JSON number or a numeric string. Both fields are required.
    pub fn from_body(body: &str) -> ApiResult<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| ApiError::InvalidBody(format!("not valid JSON: {}", e)))?;

        let id = value
            .get("id")
            .and_then(Value::as_u64)
            .ok_or_else(|| ApiError::InvalidBody("missing or invalid field: id".to_string()))?;

        let price = match value.get("price") {
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| ApiError::InvalidBody("price out of range".to_string()))?,
            Some(Value::String(s)) => s.parse::<f64>().map_err(|_| {
                ApiError::InvalidBody(format!("'{}' is not a valid price", s))
            })?,
            _ => {
                return Err(ApiError::InvalidBody(
                    "missing or invalid field: price".to_string(),
                ))
            }
        };
        validate_price("price", price).map_err(ApiError::InvalidBody)?;

        Ok(Self { id, price })
    }
}

/// Parse a price-like query parameter as a finite decimal.
fn parse_price(name: &str, raw: &str) -> ApiResult<f64> {
    let parsed = raw
        .parse::<f64>()
        .map_err(|_| ApiError::invalid_parameter(name, format!("'{}' is not a number", raw)))?;

    if !parsed.is_finite() {
        return Err(ApiError::invalid_parameter(name, "must be finite"));
    }

    Ok(parsed)
}

/// Reject non-finite and negative prices.
pub fn validate_price(field: &str, price: f64) -> Result<(), String> {
    if !price.is_finite() {
        return Err(format!("{} must be finite", field));
    }
    if price < 0.0 {
        return Err(format!("{} must not be negative", field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_empty_query() {
        let params = ListParams::parse(&query(&[])).unwrap();
        assert_eq!(params, ListParams::default());
    }

    #[test]
    fn test_parse_max_price() {
        let params = ListParams::parse(&query(&[("maxPrice", "30000")])).unwrap();
        assert_eq!(params.max_price, Some(30000.0));
    }

    #[test]
    fn test_parse_max_price_rejects_garbage() {
        let result = ListParams::parse(&query(&[("maxPrice", "cheap")]));
        assert!(matches!(
            result,
            Err(ApiError::InvalidParameter { ref name, .. }) if name == "maxPrice"
        ));
    }

    #[test]
    fn test_parse_max_price_rejects_non_finite() {
        for raw in ["inf", "NaN", "-inf"] {
            let result = ListParams::parse(&query(&[("maxPrice", raw)]));
            assert!(result.is_err(), "{} should be rejected", raw);
        }
    }

    #[test]
    fn test_parse_sort_keys() {
        for (raw, key) in [
            ("brand", SortKey::Brand),
            ("price", SortKey::Price),
            ("year", SortKey::Year),
        ] {
            let params = ListParams::parse(&query(&[("sortBy", raw)])).unwrap();
            assert_eq!(params.sort_key, Some(key));
        }
    }

    #[test]
    fn test_parse_sort_key_is_case_sensitive() {
        let result = ListParams::parse(&query(&[("sortBy", "Brand")]));
        assert!(matches!(
            result,
            Err(ApiError::InvalidParameter { ref name, .. }) if name == "sortBy"
        ));
    }

    #[test]
    fn test_parse_unknown_sort_key() {
        let result = ListParams::parse(&query(&[("sortBy", "color")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_order_by_desc_is_case_insensitive() {
        for raw in ["desc", "DESC", "Desc"] {
            let params =
                ListParams::parse(&query(&[("sortBy", "price"), ("orderBy", raw)])).unwrap();
            assert!(params.descending);
        }
    }

    #[test]
    fn test_order_by_anything_else_means_ascending() {
        for raw in ["asc", "ascending", "up", ""] {
            let params =
                ListParams::parse(&query(&[("sortBy", "price"), ("orderBy", raw)])).unwrap();
            assert!(!params.descending, "'{}' should mean ascending", raw);
        }
    }

    #[test]
    fn test_order_by_without_sort_key_is_never_validated() {
        let params = ListParams::parse(&query(&[("orderBy", "sideways")])).unwrap();
        assert_eq!(params.sort_key, None);
    }

    #[test]
    fn test_parse_delete_id() {
        assert_eq!(parse_delete_id(&query(&[("id", "7")])).unwrap(), 7);
    }

    #[test]
    fn test_parse_delete_id_missing() {
        let result = parse_delete_id(&query(&[]));
        assert!(matches!(
            result,
            Err(ApiError::InvalidParameter { ref reason, .. }) if reason == "missing"
        ));
    }

    #[test]
    fn test_parse_delete_id_bad_format() {
        for raw in ["abc", "-1", "1.5", ""] {
            let result = parse_delete_id(&query(&[("id", raw)]));
            assert!(result.is_err(), "'{}' should be rejected", raw);
        }
    }

    #[test]
    fn test_update_request_from_number_price() {
        let req = UpdatePriceRequest::from_body(r#"{"id": 2, "price": 35000}"#).unwrap();
        assert_eq!(req, UpdatePriceRequest { id: 2, price: 35000.0 });
    }

    #[test]
    fn test_update_request_from_string_price() {
        let req = UpdatePriceRequest::from_body(r#"{"id": 2, "price": "35000.50"}"#).unwrap();
        assert_eq!(req.price, 35000.50);
    }

    #[test]
    fn test_update_request_requires_both_fields() {
        assert!(UpdatePriceRequest::from_body(r#"{"price": 100}"#).is_err());
        assert!(UpdatePriceRequest::from_body(r#"{"id": 2}"#).is_err());
    }

    #[test]
    fn test_update_request_rejects_malformed_json() {
        let result = UpdatePriceRequest::from_body("{id: nope");
        assert!(matches!(result, Err(ApiError::InvalidBody(_))));
    }

    #[test]
    fn test_update_request_rejects_negative_price() {
        let result = UpdatePriceRequest::from_body(r#"{"id": 2, "price": -5}"#);
        assert!(matches!(result, Err(ApiError::InvalidBody(_))));
    }

    #[test]
    fn test_update_request_rejects_non_integer_id() {
        assert!(UpdatePriceRequest::from_body(r#"{"id": "two", "price": 100}"#).is_err());
        assert!(UpdatePriceRequest::from_body(r#"{"id": -3, "price": 100}"#).is_err());
    }
}
