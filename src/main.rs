use anyhow::{Context, Result, bail};
use medee::application::{
    commands::seed::SeedCommand,
    ports::session::SessionStore,
    services::{ApplicationServices, Ports},
};
use medee::config::AppConfig;
use medee::infrastructure::{
    database,
    repositories::{
        PostgresCategoryRepository, PostgresNewsRepository, PostgresSluggableRepository,
        PostgresUserRepository,
    },
    security::{
        password::Argon2PasswordHasher, redis_session_store::RedisSessionStore,
        session_store::InMemorySessionStore, token::OpaqueTokenGenerator,
    },
    time::SystemClock,
    util::DefaultSlugifier,
};
use medee::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

enum Command {
    Serve,
    Seed,
}

impl Command {
    fn from_args() -> Result<Self> {
        match std::env::args().nth(1).as_deref() {
            None | Some("serve") => Ok(Self::Serve),
            Some("seed") => Ok(Self::Seed),
            Some(other) => bail!("unknown command '{other}', expected 'serve' or 'seed'"),
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let command = Command::from_args()?;
    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url())
        .await
        .context("connecting to postgres")?;
    database::run_migrations(&pool).await?;

    let categories = Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let news = Arc::new(PostgresNewsRepository::new(pool.clone()));

    let session_store: Arc<dyn SessionStore> = match config.redis_url() {
        Some(url) => {
            tracing::info!("using redis session store");
            Arc::new(RedisSessionStore::from_url(url)?)
        }
        None => {
            tracing::warn!("REDIS_URL not set, sessions are kept in memory");
            Arc::new(InMemorySessionStore::new())
        }
    };

    let ports = Ports {
        user_repo: Arc::new(PostgresUserRepository::new(pool.clone())),
        category_read: categories.clone(),
        category_write: categories,
        news_read: news.clone(),
        news_write: news,
        sluggable: Arc::new(PostgresSluggableRepository::new(pool)),
        password_hasher: Arc::new(Argon2PasswordHasher),
        tokens: Arc::new(OpaqueTokenGenerator),
        session_store,
        clock: Arc::new(SystemClock),
        slugifier: Arc::new(DefaultSlugifier),
    };
    let services = Arc::new(ApplicationServices::new(ports, config.service_settings()));

    match command {
        Command::Seed => seed(&services, &config).await,
        Command::Serve => serve(services, &config).await,
    }
}

async fn seed(services: &ApplicationServices, config: &AppConfig) -> Result<()> {
    let report = services
        .seed
        .seed(SeedCommand {
            admin_email: config.seed_admin_email().to_string(),
            admin_password: config.seed_admin_password()?.to_string(),
            admin_name: None,
        })
        .await?;

    tracing::info!(
        admin_created = report.admin_created,
        categories = ?report.categories_created,
        "seed finished"
    );
    Ok(())
}

async fn serve(services: Arc<ApplicationServices>, config: &AppConfig) -> Result<()> {
    let state = HttpState { services };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(origins = ?config.allowed_origins(), "listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
