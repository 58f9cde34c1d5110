pub mod handlers;
pub mod state;

use crate::{
    config::Config,
    error::Result,
    gemini::{ContentGenerator, GeminiClient},
};
use actix_cors::Cors;
use actix_web::{http::Method, web, App, HttpServer};
use state::AppState;

/// Registers the HTTP surface for a given provider implementation. Generic so
/// integration tests can mount the same routes over a stubbed provider.
pub fn configure<G: ContentGenerator + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/generate")
            .route(web::post().to(handlers::generate::<G>))
            .route(web::method(Method::OPTIONS).to(handlers::preflight))
            .route(web::route().to(handlers::method_not_allowed)),
    )
    .route("/health", web::get().to(handlers::health_check))
    .route("/api/features", web::get().to(handlers::list_features::<G>))
    .route("/api/styles", web::get().to(handlers::list_styles::<G>))
    .route("/api/prompts", web::get().to(handlers::list_prompts::<G>));
}

/// Builds the application state and runs the server until shutdown.
pub async fn run(config: Config) -> Result<()> {
    let port = config.port.unwrap_or(8080);
    let state = web::Data::new(AppState::<GeminiClient>::from_config(&config)?);

    log::info!("Listening on http://0.0.0.0:{}", port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .configure(configure::<GeminiClient>)
    })
    .bind(("0.0.0.0", port))
    .map_err(|e| crate::error::StudioError::ConfigError(e.to_string()))?
    .run()
    .await
    .map_err(|e| crate::error::StudioError::ConfigError(e.to_string()))
}
