use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{app_state::AppState, database::repository};

#[derive(Serialize, ToSchema)]
pub struct ServiceHealth {
    pub status: String,
    pub service: String,
}

#[derive(Serialize, ToSchema)]
pub struct ApiHealth {
    pub status: String,
    /// `"connected"` or `"error: <message>"`.
    pub database: String,
}

/// Liveness probe, independent of the store.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = ServiceHealth)
    )
)]
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ServiceHealth {
        status: "healthy".to_string(),
        service: "backend".to_string(),
    })
}

/// Health probe including database connectivity. Always responds 200; a
/// ping failure is reported in the `database` field instead of the status
/// code.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up, database status embedded", body = ApiHealth)
    )
)]
#[get("/health")]
pub async fn api_health(data: web::Data<AppState>) -> HttpResponse {
    let database = match repository::ping(&data.db).await {
        Ok(()) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    HttpResponse::Ok().json(ApiHealth {
        status: "healthy".to_string(),
        database,
    })
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health);
}
