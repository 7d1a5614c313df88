use anyhow::Result;
use godaddy_dns::{load_config, DnsRecordRepository, RecordRepository};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yaml".to_string());
    let config = load_config(&config_file)?;

    let repository = DnsRecordRepository::from_config(&config)?;
    let records = repository.list().await?;
    info!("Fetched {} records for {}", records.len(), repository.domain());

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
