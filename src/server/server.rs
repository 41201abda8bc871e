//! HTTP server wiring

use crate::config::{CORS_HEADERS, CORS_METHODS, CorsConfig, ServerConfig};
use crate::server::handlers::health_check;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{AppError, Result};
use actix_cors::Cors;
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use std::time::Duration;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a server around existing state
    pub fn with_state(state: AppState) -> Self {
        Self {
            config: state.config.server().clone(),
            state,
        }
    }

    /// CORS policy for the configured browser origins
    fn cors(config: &CorsConfig) -> Cors {
        let mut cors = Cors::default()
            .allowed_methods(CORS_METHODS.iter().copied())
            .allowed_headers(CORS_HEADERS.iter().copied())
            .max_age(config.preflight_max_age);

        if config.allows_any_origin() {
            cors = cors.allow_any_origin();
        } else {
            for origin in &config.origins {
                cors = cors.allowed_origin(origin);
            }
        }

        if config.allow_credentials {
            cors = cors.supports_credentials();
        }
        cors
    }

    /// Create the Actix-web application
    fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let cors = Self::cors(&state.config.server().cors);
        let body_limit = state.config.server().json_body_limit;

        App::new()
            .app_data(state)
            .app_data(routes::json_config(body_limit))
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(DefaultHeaders::new().add(("Server", crate::NAME)))
            .route("/health", web::get().to(health_check))
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        info!("Starting HTTP server on {}", bind_addr);
        if self.config.cors.allows_any_origin() {
            warn!("CORS admits requests from any origin");
        }

        let state = web::Data::new(self.state);
        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .client_request_timeout(Duration::from_secs(self.config.request_timeout_secs));

        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
