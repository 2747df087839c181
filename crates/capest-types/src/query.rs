//! Share query strings.
//!
//! Each estimator can write its inputs as a `key=value&key=value` string and
//! read them back, so a shared string reproduces the same estimate.

use std::fmt;
use std::str::FromStr;

use url::form_urlencoded;

use crate::{InputError, input};

/// Ordered set of query parameters.
///
/// Setting an existing key replaces its value in place; parsing keeps the
/// last value of a repeated key. Keys and values use
/// `application/x-www-form-urlencoded` encoding, the same as a browser's
/// `URLSearchParams`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parses a query string, with or without a leading `?`.
    ///
    /// Percent escapes are decoded and `+` is read as a space. Empty segments
    /// are skipped and a key without `=` gets an empty value.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let mut params = Self::new();
        let query = query.trim().trim_start_matches('?');
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            params.set(key, value);
        }
        params
    }

    /// Sets `key` to `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Returns the value of `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Reads `key` as a strictly positive number.
    ///
    /// A missing key is treated like an empty field.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the value is missing, non-numeric or not
    /// strictly positive.
    pub fn positive(&self, key: &str, field: &'static str) -> Result<f64, InputError> {
        input::parse_positive(field, self.get(key).unwrap_or_default())
    }

    /// Reads `key` as a count of at least one.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the value is missing, not a whole number
    /// or zero.
    pub fn count(&self, key: &str, field: &'static str) -> Result<u32, InputError> {
        input::parse_count(field, self.get(key).unwrap_or_default())
    }

    /// Reads `key` as a count if it is present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the value is present but invalid.
    pub fn optional_count(
        &self,
        key: &str,
        field: &'static str,
    ) -> Result<Option<u32>, InputError> {
        match self.get(key).map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => input::parse_count(field, raw).map(Some),
        }
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish();
        f.write_str(&encoded)
    }
}

impl FromStr for QueryParams {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Conversion of an estimator's inputs to and from share query parameters.
pub trait ShareQuery: Sized {
    /// Writes the inputs as query parameters.
    fn to_query(&self) -> QueryParams;

    /// Reads the inputs back from query parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if a required key is missing or a value is invalid.
    fn from_query(params: &QueryParams) -> crate::Result<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let params = QueryParams::parse("?ingestTBPerDay=195&clusterCount=300");
        assert_eq!(params.get("ingestTBPerDay"), Some("195"));
        assert_eq!(params.get("clusterCount"), Some("300"));
        assert_eq!(params.to_string(), "ingestTBPerDay=195&clusterCount=300");
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut params = QueryParams::new();
        params.set("a", 1);
        params.set("b", 2);
        params.set("a", 3);
        assert_eq!(params.to_string(), "a=3&b=2");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_parse_tolerates_junk() {
        let params = QueryParams::parse("&&flag&x=1&x=2");
        assert_eq!(params.get("flag"), Some(""));
        assert_eq!(params.get("x"), Some("2"));
        assert!(!params.has("y"));
        assert!(QueryParams::parse("").is_empty());
    }

    #[test]
    fn test_percent_decoding() {
        let params = QueryParams::parse("ingestTBPerDay=1e%2B3&clusterCount=3");
        assert_eq!(params.get("ingestTBPerDay"), Some("1e+3"));
        assert_eq!(params.positive("ingestTBPerDay", "ingest").unwrap(), 1000.0);
        assert_eq!(QueryParams::parse("tier=dedicated+plan").get("tier"), Some("dedicated plan"));
    }

    #[test]
    fn test_encoded_round_trip() {
        let mut params = QueryParams::new();
        params.set("note", "a+b c&d=e");
        params.set("ingress", 1.5);
        let encoded = params.to_string();
        assert_eq!(encoded, "note=a%2Bb+c%26d%3De&ingress=1.5");
        assert_eq!(QueryParams::parse(&encoded), params);
    }

    #[test]
    fn test_typed_getters() {
        let params = QueryParams::parse("volume=12.5&count=3&empty=");
        assert_eq!(params.positive("volume", "volume").unwrap(), 12.5);
        assert_eq!(params.count("count", "count").unwrap(), 3);
        assert!(matches!(
            params.positive("missing", "volume"),
            Err(InputError::NotANumber { .. })
        ));
        assert_eq!(params.optional_count("empty", "override").unwrap(), None);
        assert_eq!(params.optional_count("missing", "override").unwrap(), None);
        assert_eq!(params.optional_count("count", "override").unwrap(), Some(3));
    }
}
