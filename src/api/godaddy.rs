use super::{client::DnsApiClient, models::*};
use crate::config::{Config, CredentialProvider, Credentials};
use crate::error::{Error, Result};
use async_trait::async_trait;
use log::{debug, error, info, warn};
use reqwest::{header, Method, StatusCode, Url};
use serde::Serialize;

pub struct GoDaddyClient {
    client: reqwest::Client,
    base_url: Url,
    authorization: String,
}

#[async_trait]
impl DnsApiClient for GoDaddyClient {
    async fn list_records(&self, domain: &str) -> Result<Vec<DnsRecord>> {
        let url = self.records_url(domain, None);
        let (status, body) = self.send(Method::GET, url, None::<&()>).await?;

        if status != StatusCode::OK {
            error!("Failed to fetch DNS records for {}: {}", domain, body);
            return Err(Error::Upstream {
                context: "fetch DNS records",
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    async fn delete_record(&self, domain: &str, name: &str, record_type: &str) -> Result<()> {
        if not_blank(name).is_err() || not_blank(record_type).is_err() {
            return Err(Error::Validation(
                "Record name or type not specified".to_string(),
            ));
        }

        let url = self.records_url(domain, Some((record_type, name)));
        let (status, body) = self.send(Method::DELETE, url, None::<&()>).await?;

        match status {
            StatusCode::OK | StatusCode::NO_CONTENT => {
                info!("DNS Record deleted successfully: {} {}", record_type, name);
                Ok(())
            }
            _ => {
                error!("Failed to delete DNS record {} {}: {}", record_type, name, body);
                Err(Error::Upstream {
                    context: "delete DNS record",
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    async fn update_record(&self, domain: &str, record: &DnsRecord) -> Result<()> {
        validator::Validate::validate(record)?;

        let url = self.records_url(domain, Some((&record.record_type, &record.name)));
        let payload = [RecordValue::from(record)];
        let (status, body) = self.send(Method::PUT, url, Some(&payload)).await?;

        if is_write_success(status) {
            info!(
                "DNS Record Updated Successfully: {} {}",
                record.record_type, record.name
            );
            return Ok(());
        }

        Err(write_failure("update DNS record", status, body))
    }

    async fn create_record(&self, domain: &str, record: &DnsRecord) -> Result<()> {
        validator::Validate::validate(record)?;
        if !RECORD_TYPES.contains(&record.record_type.as_str()) {
            warn!(
                "Creating record {} with unlisted type {}",
                record.name, record.record_type
            );
        }

        let url = self.records_url(domain, None);
        let payload = [record];
        let (status, body) = self.send(Method::PATCH, url, Some(&payload)).await?;

        if is_write_success(status) {
            info!(
                "DNS Record created successfully: {} {}",
                record.record_type, record.name
            );
            return Ok(());
        }

        Err(write_failure("create DNS record", status, body))
    }
}

impl GoDaddyClient {
    pub fn new(credentials: &Credentials, base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("Invalid API base URL {}: {}", base_url, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "API base URL cannot carry a path: {}",
                base_url
            )));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: parsed,
            authorization: credentials.authorization(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.credentials()?, &config.api_base_url)
    }

    /// `{base}/domains/{domain}/records[/{type}/{name}]`, each segment escaped.
    fn records_url(&self, domain: &str, record: Option<(&str, &str)>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["domains", domain, "records"]);
            if let Some((record_type, name)) = record {
                segments.extend([record_type, name]);
            }
        }
        url
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<(StatusCode, String)> {
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .header(header::AUTHORIZATION, &self.authorization)
            .header(header::ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response Status: {}", status);

        let text = response.text().await?;
        debug!("Response Body: {}", text);

        Ok((status, text))
    }
}

fn is_write_success(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT
    )
}

fn write_failure(context: &'static str, status: StatusCode, body: String) -> Error {
    error!("Failed to {}: {}", context, body);
    match ApiErrorResponse::parse(&body).kind() {
        ApiErrorKind::DuplicateRecord => Error::DuplicateRecord { body },
        ApiErrorKind::Generic => Error::Upstream {
            context,
            status: status.as_u16(),
            body,
        },
    }
}
