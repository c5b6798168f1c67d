use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.sqlx_logging(false);
    // Every pooled connection to `:memory:` would open its own empty database
    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    tracing::info!("Database ready at {}", database_url);
    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys = ON".to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS vendors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            contact_details TEXT NOT NULL,
            address TEXT NOT NULL,
            vendor_code TEXT NOT NULL UNIQUE,
            on_time_delivery_rate REAL NOT NULL DEFAULT 0,
            quality_rating_avg REAL NOT NULL DEFAULT 0,
            average_response_time REAL NOT NULL DEFAULT 0,
            fulfillment_rate REAL NOT NULL DEFAULT 0
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS purchase_orders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            po_number TEXT NOT NULL UNIQUE,
            vendor_id INTEGER NOT NULL,
            order_date TEXT NOT NULL,
            delivery_date TEXT NOT NULL,
            items TEXT NOT NULL,
            quantity INTEGER NOT NULL CHECK (quantity >= 1),
            status TEXT NOT NULL DEFAULT 'pending'
                CHECK (status IN ('pending', 'completed', 'canceled')),
            quality_rating REAL,
            issue_date TEXT NOT NULL,
            acknowledgment_date TEXT,
            FOREIGN KEY (vendor_id) REFERENCES vendors(id) ON DELETE CASCADE
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_purchase_orders_vendor_id ON purchase_orders(vendor_id)"
            .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS historical_performances (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            vendor_id INTEGER NOT NULL,
            date TEXT NOT NULL,
            on_time_delivery_rate REAL NOT NULL DEFAULT 0,
            quality_rating_avg REAL NOT NULL DEFAULT 0,
            average_response_time REAL NOT NULL DEFAULT 0,
            fulfillment_rate REAL NOT NULL DEFAULT 0,
            FOREIGN KEY (vendor_id) REFERENCES vendors(id) ON DELETE CASCADE
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_historical_performances_vendor_id ON historical_performances(vendor_id)"
            .to_owned(),
    ))
    .await?;

    Ok(())
}
