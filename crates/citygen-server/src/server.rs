//! Actix Web HTTP server.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{error::InternalError, http::header, web, App, HttpResponse, HttpServer};
use anyhow::{Context, Result};
use citygen_orchestrator::CityGenerator;
use tracing::{debug, error, info};

use crate::config::ServerConfig;
use crate::types::{ErrorBody, GenerateRequest, EMPTY_PROMPT_MESSAGE, UPSTREAM_FAILURE_MESSAGE};

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<CityGenerator>,
}

impl AppState {
    pub fn new(generator: CityGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}

pub async fn serve(config: ServerConfig, generator: CityGenerator) -> Result<()> {
    let addr = config.bind_addr();
    info!(addr = %addr, origin = %config.frontend_url, "citygen listening");

    let state = web::Data::new(AppState::new(generator));
    let frontend_url = config.frontend_url.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(build_cors(&frontend_url))
            .configure(configure)
    })
    .bind(&addr)
    .with_context(|| format!("failed to bind {}", addr))?
    .run()
    .await
    .context("server error")?;

    Ok(())
}

/// CORS restricted to the single configured frontend origin.
pub fn build_cors(frontend_url: &str) -> Cors {
    Cors::default()
        .allowed_origin(frontend_url)
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .supports_credentials()
}

/// Routes and request-body handling shared by the server and tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health_check))
        .route("/generate", web::post().to(handle_generate));
}

/// Undecodable bodies are reported like an empty prompt.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejecting undecodable request body");
        let response =
            HttpResponse::UnprocessableEntity().json(ErrorBody::new(EMPTY_PROMPT_MESSAGE));
        InternalError::from_response(err, response).into()
    })
}

async fn health_check() -> &'static str {
    "OK"
}

async fn handle_generate(
    state: web::Data<AppState>,
    body: web::Json<GenerateRequest>,
) -> HttpResponse {
    let Some(prompt) = body.trimmed_prompt() else {
        debug!("rejecting empty prompt");
        return HttpResponse::UnprocessableEntity().json(ErrorBody::new(EMPTY_PROMPT_MESSAGE));
    };

    match state.generator.generate(prompt).await {
        // Domain rejections are still a 200; the `error` field carries them.
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => {
            error!(error = %e, "completion service failed");
            HttpResponse::BadGateway().json(ErrorBody::new(UPSTREAM_FAILURE_MESSAGE))
        }
    }
}
