use actix_web::{web, HttpServer};
use anyhow::Context;
use gc_api::config::{load_config, StorageMode};
use gc_api::{create_app, seed_memory_store, AppState, Backend, BackendParts, MemoryBackend, MySqlBackend};
use gc_core::repositories::InMemoryStore;
use gc_infra::database::{seed_database, DatabasePool};
use gc_infra::google::GoogleTokenInfoVerifier;
use gc_infra::notification::create_notification_sender;
use gc_shared::config::AppConfig;
use log::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let sqlx_level = if config.logging.sql_statements { "info" } else { "warn" };
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(format!("{},sqlx={}", config.logging.level, sqlx_level)),
    );

    info!("Starting GreenCircle API server ({:?})", config.environment);

    let notifier = create_notification_sender(&config.notification).await;
    let google = GoogleTokenInfoVerifier::new(&config.auth.google).context("Failed to build the Google verifier")?;

    match StorageMode::from_env() {
        StorageMode::MySql => {
            let pool = DatabasePool::new(config.database.clone())
                .await
                .context("Failed to connect to MySQL")?;

            if config.database.run_migrations {
                pool.run_migrations().await.context("Failed to run migrations")?;
            }
            if config.seed_database {
                seed_database(pool.get_pool()).await.context("Failed to seed the database")?;
            }

            let state = AppState::new(MySqlBackend::parts(&pool, notifier, google), &config).with_database(pool);
            run::<MySqlBackend>(state, config).await
        }
        StorageMode::Memory => {
            info!("Using in-memory storage; data is lost on shutdown");
            let store = InMemoryStore::new();
            if config.seed_database {
                seed_memory_store(&store).await.context("Failed to seed the in-memory store")?;
            }

            let parts: BackendParts<MemoryBackend> = MemoryBackend::parts(store, notifier, google);
            run::<MemoryBackend>(AppState::new(parts, &config), config).await
        }
    }
}

async fn run<B: Backend>(state: AppState<B>, config: AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let keep_alive = std::time::Duration::from_secs(config.server.keep_alive);
    let state = web::Data::new(state);

    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone(), &config)).keep_alive(keep_alive);
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;
    Ok(())
}
