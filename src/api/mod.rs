pub mod client;
pub mod godaddy;
pub mod models;

pub use client::DnsApiClient;
pub use godaddy::GoDaddyClient;
pub use models::{ApiErrorKind, ApiErrorResponse, DnsRecord, RECORD_TYPES};
