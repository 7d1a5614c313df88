use crate::api::{DnsApiClient, DnsRecord, GoDaddyClient};
use crate::config::{Config, CredentialProvider};
use crate::error::Result;
use crate::records::{format_for_list_view, load_by_name, ListViewRecord};
use async_trait::async_trait;
use log::debug;

/// Document-style access to the records of one zone.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ListViewRecord>>;
    async fn get(&self, name: &str) -> Result<ListViewRecord>;
    async fn count(&self) -> Result<usize>;
    async fn create(&self, record: &DnsRecord) -> Result<()>;
    async fn update(&self, record: &DnsRecord) -> Result<()>;
    async fn delete(&self, name: &str, record_type: &str) -> Result<()>;
}

pub struct DnsRecordRepository<C> {
    client: C,
    domain: String,
}

impl<C: DnsApiClient> DnsRecordRepository<C> {
    pub fn new(client: C, domain: impl Into<String>) -> Self {
        Self {
            client,
            domain: domain.into(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl DnsRecordRepository<GoDaddyClient> {
    pub fn from_config(config: &Config) -> Result<Self> {
        let credentials = config.credentials()?;
        let client = GoDaddyClient::new(&credentials, &config.api_base_url)?;
        Ok(Self::new(client, credentials.domain))
    }
}

#[async_trait]
impl<C: DnsApiClient> RecordRepository for DnsRecordRepository<C> {
    async fn list(&self) -> Result<Vec<ListViewRecord>> {
        let records = self.client.list_records(&self.domain).await?;
        debug!("{} records in {}", records.len(), self.domain);
        Ok(format_for_list_view(&records))
    }

    // The provider has no lookup by name, so a read lists the whole zone.
    async fn get(&self, name: &str) -> Result<ListViewRecord> {
        let records = self.client.list_records(&self.domain).await?;
        load_by_name(&records, name).map(ListViewRecord::from)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.client.list_records(&self.domain).await?.len())
    }

    async fn create(&self, record: &DnsRecord) -> Result<()> {
        self.client.create_record(&self.domain, record).await
    }

    async fn update(&self, record: &DnsRecord) -> Result<()> {
        self.client.update_record(&self.domain, record).await
    }

    async fn delete(&self, name: &str, record_type: &str) -> Result<()> {
        self.client
            .delete_record(&self.domain, name, record_type)
            .await
    }
}
