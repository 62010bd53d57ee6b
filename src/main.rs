pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::topic;
pub use modules::user;

use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;
use crate::shared::database;
use crate::topic::adapter::outgoing::TopicRepositoryMongo;
use crate::topic::application::services::{GetTopicsService, UpdateTopicService};
use crate::topic::application::topic_use_cases::TopicUseCases;
use crate::user::adapter::outgoing::UserRepositoryMongo;
use crate::user::application::ports::incoming::use_cases::GetUserUseCase;
use crate::user::application::services::GetUserService;

use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topic: TopicUseCases,
    pub get_user_use_case: Arc<dyn GetUserUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();

    // Database connection; the service cannot run without it
    let db = database::connect(&config).await?;

    // Repositories and use cases
    let topic_repo = TopicRepositoryMongo::new(&db, config.operation_timeout);
    let user_repo = UserRepositoryMongo::new(&db, config.operation_timeout);

    let state = AppState {
        topic: TopicUseCases {
            get_list: Arc::new(GetTopicsService::new(topic_repo.clone())),
            update: Arc::new(UpdateTopicService::new(topic_repo)),
        },
        get_user_use_case: Arc::new(GetUserService::new(user_repo)),
    };

    let openapi = api::openapi::ApiDoc::openapi();
    let config_data = web::Data::new(config);
    let db_data = web::Data::new(db);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(config_data.clone())
            .app_data(db_data.clone())
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::hello);
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Topic
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::update_topic_handler);
    // User
    cfg.service(crate::user::adapter::incoming::web::routes::get_user_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        error!("Error starting app: {e:#}");
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
