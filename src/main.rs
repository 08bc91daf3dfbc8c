use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use deckhand::application::services::{
    DeckService, ExtractionService, InsightService, SummaryService,
};
use deckhand::infrastructure::extraction::CompositeExtractor;
use deckhand::infrastructure::llm::GeminiClient;
use deckhand::infrastructure::observability::{init_tracing, TracingConfig};
use deckhand::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(
        TracingConfig::for_environment(settings.environment),
        settings.server.port,
    );

    let llm_client = Arc::new(GeminiClient::new(
        settings.llm.api_key.clone(),
        settings.llm.model.clone(),
    ));

    let extractor = Arc::new(CompositeExtractor::with_default_adapters());

    let state = AppState {
        extraction_service: Arc::new(ExtractionService::new(extractor)),
        summary_service: Arc::new(SummaryService::new(Arc::clone(&llm_client))),
        insight_service: Arc::new(InsightService::new(Arc::clone(&llm_client))),
        deck_service: Arc::new(DeckService::new()),
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
