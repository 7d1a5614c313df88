//! Reshapes provider records into the flat document shape the list and
//! form views consume.

use crate::api::DnsRecord;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A record as a document: `id` is the record name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListViewRecord {
    pub id: String,
    pub name: String,
    pub data: String,
    pub ttl: Option<u32>,
    #[serde(rename = "type")]
    pub record_type: String,
}

impl From<&DnsRecord> for ListViewRecord {
    fn from(record: &DnsRecord) -> Self {
        Self {
            id: record.name.clone(),
            name: record.name.clone(),
            data: record.data.clone(),
            ttl: record.ttl,
            record_type: record.record_type.clone(),
        }
    }
}

/// Map every record, keeping provider order.
pub fn format_for_list_view(records: &[DnsRecord]) -> Vec<ListViewRecord> {
    records.iter().map(ListViewRecord::from).collect()
}

/// First record whose name matches. When several types share a name the
/// provider's ordering decides.
pub fn load_by_name<'a>(records: &'a [DnsRecord], name: &str) -> Result<&'a DnsRecord> {
    records
        .iter()
        .find(|record| record.name == name)
        .ok_or_else(|| Error::NotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<DnsRecord> {
        vec![
            DnsRecord::new("www", "A", "1.2.3.4", 600),
            DnsRecord::new("mail", "MX", "mx.example.com", 3600),
            DnsRecord::new("www", "TXT", "v=spf1 -all", 600),
            DnsRecord::new("@", "A", "5.6.7.8", 600),
        ]
    }

    #[test]
    fn test_format_for_list_view_shape() {
        let provider: Vec<DnsRecord> = serde_json::from_value(json!([
            {"name": "www", "type": "A", "data": "1.2.3.4", "ttl": 600}
        ]))
        .unwrap();

        let formatted = serde_json::to_value(format_for_list_view(&provider)).unwrap();
        assert_eq!(
            formatted,
            json!([{"id": "www", "name": "www", "data": "1.2.3.4", "ttl": 600, "type": "A"}])
        );
    }

    #[test]
    fn test_format_for_list_view_missing_ttl_is_null() {
        let provider: Vec<DnsRecord> = serde_json::from_value(json!([
            {"name": "@", "type": "NS", "data": "ns1.example.com"}
        ]))
        .unwrap();

        let formatted = serde_json::to_value(format_for_list_view(&provider)).unwrap();
        assert_eq!(
            formatted,
            json!([{"id": "@", "name": "@", "data": "ns1.example.com", "ttl": null, "type": "NS"}])
        );
    }

    #[test]
    fn test_format_for_list_view_keeps_provider_order() {
        let formatted = format_for_list_view(&records());
        let names: Vec<_> = formatted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(names, ["www", "mail", "www", "@"]);
        assert_eq!(formatted[2].record_type, "TXT");
    }

    #[test]
    fn test_format_for_list_view_empty() {
        assert!(format_for_list_view(&[]).is_empty());
    }

    #[test]
    fn test_load_by_name_first_match() {
        let records = records();
        let found = load_by_name(&records, "www").unwrap();
        assert_eq!(found.record_type, "A");
        assert_eq!(found.data, "1.2.3.4");
    }

    #[test]
    fn test_load_by_name_missing() {
        let records = records();
        let err = load_by_name(&records, "ftp").unwrap_err();
        assert!(matches!(err, Error::NotFound(ref name) if name == "ftp"));
        assert_eq!(err.to_string(), "DNS Record not found: ftp");
    }
}
