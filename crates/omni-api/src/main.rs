use omni_api::config::ApiConfig;
use omni_api::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing();

    let config = match std::env::var("OMNI_CONFIG") {
        Ok(path) => ApiConfig::from_file(&path)?,
        Err(_) => ApiConfig::default(),
    };

    server::run(config).await?;

    Ok(())
}
