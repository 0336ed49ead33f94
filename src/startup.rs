use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;

use crate::{config::Config, error::Error, model::app::AppState, router};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Bind the listener and serve the application router until shutdown
pub async fn serve(config: &Config) -> Result<(), Error> {
    let db = connect_to_database(config).await?;

    let routes = router::routes().with_state(AppState { db });

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Starting server on {}", config.listen_addr);

    axum::serve(listener, routes).await?;

    Ok(())
}
