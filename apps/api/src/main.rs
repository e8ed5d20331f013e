mod chat;
mod config;
mod errors;
mod llm_client;
mod mailer;
mod models;
mod notify;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::prompts::render_system_prompt;
use crate::config::Config;
use crate::llm_client::GroqClient;
use crate::mailer::ResendClient;
use crate::models::profile::ResumeProfile;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Chat API v{}", env!("CARGO_PKG_VERSION"));

    // The profile is read once; the prompt never changes for the process lifetime.
    let profile = ResumeProfile::load(&config.resume_path)?;
    let system_prompt: Arc<str> = render_system_prompt(&profile).into();
    info!(
        "Resume profile loaded for {} ({} chars of system prompt)",
        profile.personal.name,
        system_prompt.len()
    );

    let llm = GroqClient::new()?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    if config.groq_api_key.is_none() {
        tracing::warn!("GROQ_API_KEY is not set; /api/chat will return 500");
    }

    let mailer = ResendClient::new()?;
    match &config.notification {
        Some(n) => info!(
            "Visitor notifications enabled ({} recipient(s))",
            n.recipients.len()
        ),
        None => info!("Visitor notifications disabled: RESEND_API_KEY or NOTIFICATION_EMAIL not set"),
    }

    let port = config.port;
    let state = AppState {
        config: Arc::new(config),
        system_prompt,
        llm: Arc::new(llm),
        mailer: Arc::new(mailer),
    };

    // The chat widget is served from a different origin.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
