use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Record types offered when editing a record. The provider accepts others
/// too; they are passed through untouched. Part of the public API so callers
/// can build their type pickers from it.
pub const RECORD_TYPES: &[&str] = &["A", "AAAA", "CNAME", "MX", "TXT", "SRV", "NS"];

/// Rejects empty and whitespace-only values.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("value is required"));
        return Err(err);
    }
    Ok(())
}

/// A DNS record as the provider lists it, and as callers submit it.
///
/// The provider may omit `ttl` on some records; it is kept as `None` and
/// left out of request bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DnsRecord {
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[serde(rename = "type")]
    #[validate(custom(function = "not_blank"))]
    pub record_type: String,

    #[validate(custom(function = "not_blank"))]
    pub data: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl DnsRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        data: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            data: data.into(),
            ttl: Some(ttl),
        }
    }
}

/// Body element of a replace (`PUT /records/{type}/{name}`) request.
#[derive(Debug, Serialize)]
pub struct RecordValue<'a> {
    pub data: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl<'a> From<&'a DnsRecord> for RecordValue<'a> {
    fn from(record: &'a DnsRecord) -> Self {
        Self {
            data: &record.data,
            ttl: record.ttl,
        }
    }
}

/// Error body returned by the provider on a failed request.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    DuplicateRecord,
    Generic,
}

impl ApiErrorResponse {
    /// Parse a raw error body. Anything that is not the expected shape
    /// yields an empty response, which classifies as generic.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    pub fn kind(&self) -> ApiErrorKind {
        match self.code.as_deref() {
            Some("DUPLICATE_RECORD") => ApiErrorKind::DuplicateRecord,
            _ => ApiErrorKind::Generic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_deserializes_provider_shape() {
        let records: Vec<DnsRecord> = serde_json::from_value(json!([
            {"name": "www", "type": "A", "data": "1.2.3.4", "ttl": 600},
            {"name": "@", "type": "MX", "data": "mail.example.com", "ttl": 3600, "priority": 10}
        ]))
        .unwrap();

        assert_eq!(records[0], DnsRecord::new("www", "A", "1.2.3.4", 600));
        assert_eq!(records[1].record_type, "MX");
        assert_eq!(records[1].ttl, Some(3600));
    }

    #[test]
    fn test_record_without_ttl() {
        let record: DnsRecord = serde_json::from_value(json!(
            {"name": "@", "type": "NS", "data": "ns1.example.com"}
        ))
        .unwrap();
        assert_eq!(record.ttl, None);

        let body = serde_json::to_value([RecordValue::from(&record)]).unwrap();
        assert_eq!(body, json!([{"data": "ns1.example.com"}]));
    }

    #[test]
    fn test_record_value_payload() {
        let record = DnsRecord::new("www", "A", "5.6.7.8", 1200);
        let body = serde_json::to_value([RecordValue::from(&record)]).unwrap();
        assert_eq!(body, json!([{"data": "5.6.7.8", "ttl": 1200}]));
    }

    #[test]
    fn test_error_kind_duplicate() {
        let err = ApiErrorResponse::parse(
            r#"{"code":"DUPLICATE_RECORD","message":"Another record with the same attributes already exists"}"#,
        );
        assert_eq!(err.kind(), ApiErrorKind::DuplicateRecord);
        assert!(err.message.is_some());
    }

    #[test]
    fn test_error_kind_defaults_to_generic() {
        assert_eq!(
            ApiErrorResponse::parse(r#"{"code":"INVALID_BODY"}"#).kind(),
            ApiErrorKind::Generic
        );
        assert_eq!(
            ApiErrorResponse::parse(r#"{"message":"no code"}"#).kind(),
            ApiErrorKind::Generic
        );
        assert_eq!(
            ApiErrorResponse::parse("<html>Bad Gateway</html>").kind(),
            ApiErrorKind::Generic
        );
    }

    #[test]
    fn test_record_validation() {
        assert!(DnsRecord::new("www", "A", "1.2.3.4", 600).validate().is_ok());
        assert!(DnsRecord::new("", "A", "1.2.3.4", 600).validate().is_err());
        assert!(DnsRecord::new("www", "", "1.2.3.4", 600).validate().is_err());
        assert!(DnsRecord::new("www", "A", "", 600).validate().is_err());
        assert!(DnsRecord::new("  ", "A", "1.2.3.4", 600).validate().is_err());
        assert!(DnsRecord::new("www", "\t", "1.2.3.4", 600).validate().is_err());
        assert!(DnsRecord::new("www", "TXT", " ", 600).validate().is_err());
    }

    #[test]
    fn test_record_types_include_editable_types() {
        for t in ["A", "CNAME", "MX", "TXT", "SRV", "NS"] {
            assert!(RECORD_TYPES.contains(&t));
        }
    }
}
