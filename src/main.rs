use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::NormalizePath, web};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use item_service::api::middleware::RequestId;
use item_service::api::{health, items};
use item_service::app_state::AppState;
use item_service::config::{Config, DatabaseSettings};
use item_service::database;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Config::from_env loads .env before reading the environment.
    let config = Config::from_env().expect("Failed to load configuration");
    let settings = DatabaseSettings::default_from_url(config.database_url());
    let db = database::connect_with_settings(&settings).await?;
    database::ensure_schema(&db)
        .await
        .expect("Failed to create items table");

    #[derive(OpenApi)]
    #[openapi(
        paths(
            health::health,
            health::api_health,
            items::get_items,
            items::create_item,
            items::get_item,
            items::delete_item,
        ),
        components(
            schemas(
                item_service::database::items::Model,
                items::CreateItemDto,
                items::MessageResponse,
                health::ServiceHealth,
                health::ApiHealth,
            )
        ),
        tags(
            (name = "Health", description = "Liveness and store connectivity probes"),
            (name = "Items", description = "Item CRUD endpoints")
        )
    )]
    struct ApiDoc;

    let host = config.effective_host();
    let port = config.effective_port();

    log::info!("Starting server at http://{}:{}", host, port);
    log::info!("Swagger UI available at http://{}:{}/swagger-ui/", host, port);

    let state = web::Data::new(AppState { db, config });

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(Cors::permissive())
            .wrap(RequestId)
            .app_data(state.clone())
            .service(health::health)
            .service(
                web::scope("/api")
                    .configure(health::init_routes)
                    .configure(items::init_routes),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
