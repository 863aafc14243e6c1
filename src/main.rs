use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voicebox::controllers::synthesis::SynthesisController;
use voicebox::domain::synthesis::SynthesisService;
use voicebox::infrastructure::config::{Config, LogFormat};
use voicebox::infrastructure::http::start_http_server;
use voicebox::infrastructure::tts::GoogleTtsClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!("Starting voicebox on {}:{}", config.host, config.port);

    // One reqwest client shared process-wide
    let http_client = reqwest::Client::new();

    let google_client = Arc::new(GoogleTtsClient::new(
        http_client,
        config.google_api_key.clone(),
        config.google_tts_endpoint.clone(),
    ));
    tracing::info!(
        endpoint = %config.google_tts_endpoint,
        "Google TTS client initialized"
    );

    let synthesis_service = Arc::new(SynthesisService::new(google_client));
    let synthesis_controller = Arc::new(SynthesisController::new(synthesis_service));

    let config = Arc::new(config);

    start_http_server(config, synthesis_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicebox=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicebox=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
