//! # Quill Binary
//!
//! The entry point that assembles the application based on compile-time features.

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use ql_api::handlers::AppState;
use ql_api::middleware;
use ql_config::Settings;

#[cfg(feature = "store-memory")]
use ql_store_memory::MemoryCommentStore;

#[cfg(feature = "auth-mock")]
use ql_auth_mock::MockTokenResolver;

#[cfg(not(feature = "store-memory"))]
compile_error!("quill needs a comment store plugin: enable the `store-memory` feature");

#[cfg(not(feature = "auth-mock"))]
compile_error!("quill needs a viewer resolver plugin: enable the `auth-mock` feature");

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // .env first, so RUST_LOG can come from it too; report it once logging is up
    let env_file = ql_config::load_env_file();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    env_file.log();
    let settings = Settings::load().context("failed to load settings")?;

    // 1. Initialize the comment store
    #[cfg(feature = "store-memory")]
    let repo = if settings.seed_data {
        MemoryCommentStore::with_seed_data()
    } else {
        MemoryCommentStore::new()
    };

    // 2. Initialize viewer resolution
    #[cfg(feature = "auth-mock")]
    let auth = MockTokenResolver::with_seed_users();

    // 3. Wrap in AppState (dynamic dispatch keeps the handlers plugin-agnostic)
    let state = web::Data::new(AppState {
        repo: Box::new(repo),
        auth: Box::new(auth),
        ping_message: settings.ping_message.clone(),
    });

    let (host, port) = settings.bind_addr();
    log::info!("Quill starting on http://{host}:{port}");

    let cors_max_age = settings.cors_max_age;
    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::cors_policy(cors_max_age))
            .wrap(middleware::standard_middleware())
            .configure(ql_api::configure_routes)
    });
    if let Some(workers) = settings.workers {
        server = server.workers(workers);
    }

    server
        .bind((host, port))
        .with_context(|| format!("failed to bind {host}:{port}"))?
        .run()
        .await
        .context("server terminated abnormally")
}
