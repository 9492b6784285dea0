use hr_directory::{EmployeeDirectory, HttpMailer, LogMailer, Mailer, Notifier};
use hr_server::{AppState, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    let config = hr_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir)?;
    }

    // Before any other logging
    logger::initialize(
        config.logging.level,
        log_file_path,
        config.logging.colored,
    )?;

    info!("Starting hr-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = hr_db::connect(
        &database_path,
        config.database.max_connections,
        config.database.busy_timeout(),
    )
    .await?;
    info!("Database ready");

    let mailer: Arc<dyn Mailer> = match config.mail.relay_url {
        Some(ref relay_url) => {
            let mailer = HttpMailer::new(relay_url, config.mail.timeout())?;
            info!("Mail: relaying through {}", mailer.relay_url());
            Arc::new(mailer)
        }
        None => {
            info!("Mail: no relay configured, messages are written to the log");
            Arc::new(LogMailer)
        }
    };
    if !config.mail.enabled {
        warn!("Manager notifications DISABLED");
    }
    let notifier = Notifier::new(mailer, config.mail.from.clone(), config.mail.enabled);

    let directory = EmployeeDirectory::new(pool, notifier, config.pagination.max_page_size);

    // The Manager Index is derived from reports_to; rebuild it before serving
    let entries = directory.reconcile_manager_index().await?;
    info!("Manager index reconciled ({} entries)", entries);

    let app_state = AppState::new(directory, config.pagination.default_page_size);
    let app = build_router(app_state, &config.server);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
