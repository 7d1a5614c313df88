use super::models::*;
use crate::error::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DnsApiClient: Send + Sync {
    /// Every record in the zone, in provider order.
    async fn list_records(&self, domain: &str) -> Result<Vec<DnsRecord>>;

    async fn delete_record(&self, domain: &str, name: &str, record_type: &str) -> Result<()>;

    /// Replace `data` and `ttl` of the record identified by `(name, type)`.
    async fn update_record(&self, domain: &str, record: &DnsRecord) -> Result<()>;

    async fn create_record(&self, domain: &str, record: &DnsRecord) -> Result<()>;
}
