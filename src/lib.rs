//! Create, read, update and delete the DNS records of a single GoDaddy
//! domain, presented as flat documents.

pub mod api;
pub mod config;
pub mod error;
pub mod records;
pub mod repository;

pub use api::{DnsApiClient, DnsRecord, GoDaddyClient};
pub use config::{load_config, Config, CredentialProvider, Credentials};
pub use error::{Error, Result};
pub use records::{format_for_list_view, load_by_name, ListViewRecord};
pub use repository::{DnsRecordRepository, RecordRepository};
