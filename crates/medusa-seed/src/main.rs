use commerce_host::tracing::setup_tracing;
use medusa_seed::config::{load_env_files, ProcessEnv, ProjectConfig};
use medusa_seed::lifecycle::CommerceSystem;
use medusa_seed::seed::seed_demo_data;
use tracing::{error, info, info_span};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let loaded = load_env_files(&std::env::current_dir()?);
    info!(files = loaded.len(), "Environment loaded");

    let config = ProjectConfig::load(&ProcessEnv)?;
    info!(config = %serde_json::to_string(&config.redacted())?, "Configuration assembled");

    let system = CommerceSystem::start().await?;

    let context = system.seed_context(info_span!("seed_demo_data"));
    let result = seed_demo_data(&context).await;
    drop(context);

    match result {
        Ok(report) => {
            info!(
                store_id = %report.store_id,
                sales_channel_id = %report.sales_channel_id,
                publishable_token = %report.publishable_token,
                products = report.product_ids.len(),
                "Seeding complete"
            );
            info!(report = %serde_json::to_string_pretty(&report)?, "Seed report");
        }
        Err(e) => {
            error!(error = %e, "Seeding failed");
            system.shutdown().await?;
            return Err(e.into());
        }
    }

    system.shutdown().await?;
    Ok(())
}
