use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    app_state::AppState,
    database::{items, repository},
    errors::AppError,
};

// --- DTOs (Data Transfer Objects) ---

#[derive(Deserialize, ToSchema, Clone)]
pub struct CreateItemDto {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

// --- Route Handlers ---

#[utoipa::path(
    get,
    path = "/api/items",
    tag = "Items",
    responses(
        (status = 200, description = "List all items", body = [items::Model])
    )
)]
#[get("")]
async fn get_items(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let items = repository::list_all(&data.db).await?;
    Ok(HttpResponse::Ok().json(items))
}

#[utoipa::path(
    post,
    path = "/api/items",
    tag = "Items",
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Item created successfully", body = items::Model),
        (status = 400, description = "Name is required")
    )
)]
#[post("")]
async fn create_item(
    data: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    // Parsed by hand: a missing body, malformed JSON and an absent `name`
    // key all yield the same 400 response.
    let dto: CreateItemDto =
        serde_json::from_slice(&body).map_err(|_| AppError::MissingName)?;
    let name = dto.name.ok_or(AppError::MissingName)?;
    let description = dto.description.unwrap_or_default();

    let created = repository::insert(&data.db, name, description).await?;
    Ok(HttpResponse::Created().json(created))
}

#[utoipa::path(
    get,
    path = "/api/items/{id}",
    tag = "Items",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = items::Model),
        (status = 404, description = "Item not found")
    )
)]
#[get("/{id:\\d+}")]
async fn get_item(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let item_id = path.into_inner();
    let item = repository::find_by_id(&data.db, item_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", item_id)))?;

    Ok(HttpResponse::Ok().json(item))
}

#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    tag = "Items",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 404, description = "Item not found")
    )
)]
#[delete("/{id:\\d+}")]
async fn delete_item(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let item_id = path.into_inner();
    let removed = repository::delete_by_id(&data.db, item_id).await?;
    if !removed {
        return Err(AppError::NotFound(format!(
            "Item with id {} not found",
            item_id
        )));
    }

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Item deleted".to_string(),
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/items")
            .service(get_items)
            .service(create_item)
            .service(get_item)
            .service(delete_item),
    );
}
